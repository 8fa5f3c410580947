//! Room Socket Client
//!
//! A thin typed layer over `tokio-tungstenite`: every outgoing frame is a
//! `ClientEvent`, every incoming text frame a `ServerEvent`.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::client::error::ClientError;
use crate::shared::{AppConfig, ClientEvent, ConnectionId, ServerEvent, SharedError};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// An open connection to `/socket`
pub struct RoomSocket {
    stream: WsStream,
    connection_id: ConnectionId,
}

impl RoomSocket {
    /// Connect and wait for the `connected` event
    pub async fn connect(config: &AppConfig) -> Result<Self, ClientError> {
        let url = config.socket_url()?;
        tracing::debug!("Connecting to {}", url);
        let (mut stream, _response) = connect_async(url.as_str()).await?;

        match read_event(&mut stream).await? {
            ServerEvent::Connected { id } => {
                tracing::debug!("Connected as {}", id);
                Ok(Self {
                    stream,
                    connection_id: id,
                })
            }
            other => Err(SharedError::protocol(format!(
                "expected connected event, got {}",
                other.name()
            ))
            .into()),
        }
    }

    /// Id the server assigned to this connection
    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub async fn send(&mut self, event: &ClientEvent) -> Result<(), ClientError> {
        let frame = event.to_frame()?;
        self.stream.send(Message::text(frame)).await?;
        Ok(())
    }

    pub async fn join_room(&mut self, room_id: &str, username: &str) -> Result<(), ClientError> {
        self.send(&ClientEvent::join_room(room_id, username)).await
    }

    pub async fn update_note(
        &mut self,
        room_id: &str,
        username: &str,
        content: &str,
    ) -> Result<(), ClientError> {
        self.send(&ClientEvent::update_note(room_id, username, content))
            .await
    }

    /// Send a raw text frame, bypassing event encoding
    pub async fn send_raw(&mut self, frame: &str) -> Result<(), ClientError> {
        self.stream.send(Message::text(frame.to_string())).await?;
        Ok(())
    }

    /// Wait for the next server event
    ///
    /// Control frames are skipped. Returns `ClientError::SocketClosed` once
    /// the server closes the connection.
    pub async fn next_event(&mut self) -> Result<ServerEvent, ClientError> {
        read_event(&mut self.stream).await
    }

    pub async fn close(mut self) -> Result<(), ClientError> {
        self.stream.close(None).await?;
        Ok(())
    }
}

async fn read_event(stream: &mut WsStream) -> Result<ServerEvent, ClientError> {
    while let Some(message) = stream.next().await {
        match message? {
            Message::Text(text) => return Ok(ServerEvent::parse(text.as_str())?),
            Message::Close(_) => return Err(ClientError::SocketClosed),
            _ => continue,
        }
    }
    Err(ClientError::SocketClosed)
}
