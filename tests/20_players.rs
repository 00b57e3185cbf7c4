mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn player_payload() -> Value {
    json!({
        "username": "hemlock",
        "profileUrl": "https://example.com/hemlock",
        "characters": []
    })
}

#[tokio::test]
async fn create_then_get_round_trips() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let res = client
        .post(server.url("/player"))
        .json(&player_payload())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Player created successfully");
    let created = &body["player"];
    let id = created["id"].as_str().unwrap();
    assert!(created["createdAt"].is_string());

    let fetched = client
        .get(server.url(&format!("/player/{}", id)))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(&fetched, created);
    Ok(())
}

#[tokio::test]
async fn list_is_200_empty_array_when_no_players_exist() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let res = client.get(server.url("/player")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.json::<Vec<Value>>().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_required_fields_are_rejected_with_violations() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let res = client
        .post(server.url("/player"))
        .json(&json!({ "username": "hemlock" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Validation failed");
    let errors = body["errors"].as_array().unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e["field"].as_str().unwrap()).collect();
    assert_eq!(fields, vec!["profileUrl", "characters"]);

    // Nothing was persisted
    let players = client
        .get(server.url("/player"))
        .send()
        .await?
        .json::<Vec<Value>>()
        .await?;
    assert!(players.is_empty());
    Ok(())
}

#[tokio::test]
async fn update_replaces_but_preserves_created_at() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let created = client
        .post(server.url("/player"))
        .json(&player_payload())
        .send()
        .await?
        .json::<Value>()
        .await?["player"]
        .clone();
    let id = created["id"].as_str().unwrap();

    let res = client
        .put(server.url(&format!("/player/{}", id)))
        .json(&json!({
            "username": "hemlock",
            "profileUrl": "https://example.com/hemlock-new",
            "characters": ["c-1"]
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<Value>().await?["player"].clone();

    assert_eq!(updated["profileUrl"], "https://example.com/hemlock-new");
    assert_eq!(updated["characters"], json!(["c-1"]));
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["id"], created["id"]);
    Ok(())
}

#[tokio::test]
async fn malformed_id_is_400_and_absent_id_is_404() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let res = client
        .get(server.url("/player/not-a-valid-id"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Invalid player ID format");

    let res = client
        .get(server.url("/player/ffffffffffffffffffffffff"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Player not found");
    Ok(())
}

#[tokio::test]
async fn delete_then_everything_404s() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let created = client
        .post(server.url("/player"))
        .json(&player_payload())
        .send()
        .await?
        .json::<Value>()
        .await?["player"]
        .clone();
    let id = created["id"].as_str().unwrap().to_string();

    let res = client
        .delete(server.url(&format!("/player/{}", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // Second delete and subsequent reads see nothing
    let res = client
        .delete(server.url(&format!("/player/{}", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(server.url(&format!("/player/{}", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_of_unknown_player_is_404() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let res = client
        .put(server.url("/player/ffffffffffffffffffffffff"))
        .json(&player_payload())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
