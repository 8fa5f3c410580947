//! View and fallback route tests

use crate::common::TestServer;

#[tokio::test]
async fn test_views_and_fallback() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let base = format!("http://{}", server.addr);

    let home = client.get(format!("{}/", base)).send().await.unwrap();
    assert_eq!(home.status(), 200);
    assert_eq!(home.text().await.unwrap(), "<h1>home</h1>");

    let room = client.get(format!("{}/room/abcd1234", base)).send().await.unwrap();
    assert_eq!(room.status(), 200);
    assert_eq!(room.text().await.unwrap(), "<h1>room</h1>");

    let missing = client.get(format!("{}/nope", base)).send().await.unwrap();
    assert_eq!(missing.status(), 404);
    let body: serde_json::Value = missing.json().await.unwrap();
    assert_eq!(body["status"], 404);
}
