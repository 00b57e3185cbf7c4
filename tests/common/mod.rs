use std::future::IntoFuture;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use questlog_api::routes;
use questlog_api::state::AppState;

pub struct TestServer {
    pub base_url: String,
}

/// Boot the app in-process against a fresh in-memory store on an ephemeral
/// port. Each test gets its own server, so assertions about what was (or was
/// not) persisted never see another test's documents.
pub async fn spawn_server() -> Result<TestServer> {
    let app = routes::app(AppState::in_memory());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;
    tokio::spawn(axum::serve(listener, app).into_future());

    Ok(TestServer {
        base_url: format!("http://{}", addr),
    })
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Establish a session and return the bearer token gated routes expect.
    pub async fn sign_in(&self) -> Result<String> {
        let res = reqwest::Client::new()
            .post(self.url("/auth/session"))
            .json(&json!({
                "username": "test-player",
                "profileUrl": "https://example.com/test-player"
            }))
            .send()
            .await?;
        anyhow::ensure!(
            res.status() == reqwest::StatusCode::CREATED,
            "session setup failed with {}",
            res.status()
        );
        let body = res.json::<Value>().await?;
        body["sessionId"]
            .as_str()
            .map(str::to_string)
            .context("sessionId missing from session response")
    }
}

/// A client that attaches the session bearer token to every request.
pub fn authed_client(token: &str) -> Result<reqwest::Client> {
    let mut headers = reqwest::header::HeaderMap::new();
    let value = reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token))?;
    headers.insert(reqwest::header::AUTHORIZATION, value);
    Ok(reqwest::Client::builder().default_headers(headers).build()?)
}

/// Spawn a server and sign in, the setup nearly every test starts with.
pub async fn authed_server() -> Result<(TestServer, reqwest::Client)> {
    let server = spawn_server().await?;
    let token = server.sign_in().await?;
    let client = authed_client(&token)?;
    Ok((server, client))
}
