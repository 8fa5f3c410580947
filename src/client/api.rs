//! Notes API Client
//!
//! Async wrapper over the `/api` endpoints.

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::client::error::ClientError;
use crate::shared::{AppConfig, ConfigError, CreateNoteRequest, Note, RoomMember, UpdateNoteRequest};

/// Error body returned by the server
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for notes and room presence
#[derive(Debug, Clone)]
pub struct NotesApi {
    config: AppConfig,
    client: Client,
}

impl NotesApi {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// All notes, most recently saved first
    pub async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        let url = self.endpoint(&["api", "notes"])?;
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    /// The note of one room
    ///
    /// A missing room yields `ClientError::Api` with status 404.
    pub async fn get_note(&self, room_id: &str) -> Result<Note, ClientError> {
        let url = self.endpoint(&["api", "notes", room_id])?;
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    pub async fn create_note(&self, request: &CreateNoteRequest) -> Result<Note, ClientError> {
        let url = self.endpoint(&["api", "notes"])?;
        let response = self.client.post(url).json(request).send().await?;
        read_json(response).await
    }

    pub async fn update_note(
        &self,
        room_id: &str,
        request: &UpdateNoteRequest,
    ) -> Result<Note, ClientError> {
        let url = self.endpoint(&["api", "notes", room_id])?;
        let response = self.client.patch(url).json(request).send().await?;
        read_json(response).await
    }

    /// Users currently connected to a room
    pub async fn room_users(&self, room_id: &str) -> Result<Vec<RoomMember>, ClientError> {
        let url = self.endpoint(&["api", "rooms", room_id, "users"])?;
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    /// Server URL with the given path segments, each percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.config.server_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConfigError::InvalidUrl(self.config.server_url.to_string()))?
            .clear()
            .extend(segments);
        Ok(url)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(error) => error.message,
        Err(_) if body.is_empty() => status.to_string(),
        Err(_) => body,
    };
    tracing::debug!("API request failed with {}: {}", status, message);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
