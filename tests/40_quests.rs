mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn minimal_payload() -> Value {
    json!({
        "title": "The Lost Artifact",
        "description": "Find it.",
        "difficulty": "medium",
        "questGiver": "Old Man Hemlock",
        "location": "Ancient Ruins"
    })
}

#[tokio::test]
async fn minimal_create_applies_every_default() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let res = client
        .post(server.url("/quest"))
        .json(&minimal_payload())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Quest created successfully");
    let quest = &body["quest"];

    assert!(quest["id"].as_str().is_some());
    assert_eq!(quest["experienceReward"], 0);
    assert_eq!(quest["goldReward"], 0);
    assert_eq!(quest["status"], "available");
    assert_eq!(quest["questType"], "main");
    assert_eq!(quest["isRepeatable"], false);
    assert_eq!(quest["minimumLevel"], 1);
    assert_eq!(quest["requirements"], json!([]));
    assert_eq!(quest["objectives"], json!([]));
    Ok(())
}

#[tokio::test]
async fn bad_enum_values_fail_validation() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let mut payload = minimal_payload();
    payload["difficulty"] = json!("impossible");
    payload["status"] = json!("paused");

    let res = client
        .post(server.url("/quest"))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["difficulty", "status"]);
    Ok(())
}

#[tokio::test]
async fn objectives_are_shape_checked_per_element() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let mut payload = minimal_payload();
    payload["objectives"] = json!([
        { "description": "Find the entrance", "completed": false },
        { "completed": "yes" }
    ]);

    let res = client
        .post(server.url("/quest"))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["objectives.1.description", "objectives.1.completed"]
    );
    Ok(())
}

#[tokio::test]
async fn difficulty_filter_returns_matches_or_empty() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    for difficulty in ["easy", "easy", "hard"] {
        let mut payload = minimal_payload();
        payload["difficulty"] = json!(difficulty);
        client
            .post(server.url("/quest"))
            .json(&payload)
            .send()
            .await?;
    }

    let easy = client
        .get(server.url("/quest/difficulty/easy"))
        .send()
        .await?
        .json::<Vec<Value>>()
        .await?;
    assert_eq!(easy.len(), 2);

    // No legendary quests: 200 with an empty array
    let res = client
        .get(server.url("/quest/difficulty/legendary"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.json::<Vec<Value>>().await?.is_empty());

    // Not a difficulty at all: 400
    let res = client
        .get(server.url("/quest/difficulty/impossible"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn type_filter_validates_the_key() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let mut payload = minimal_payload();
    payload["questType"] = json!("daily");
    client
        .post(server.url("/quest"))
        .json(&payload)
        .send()
        .await?;

    let daily = client
        .get(server.url("/quest/type/daily"))
        .send()
        .await?
        .json::<Vec<Value>>()
        .await?;
    assert_eq!(daily.len(), 1);

    let res = client.get(server.url("/quest/type/bonus")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn available_quests_respect_status_and_level_threshold() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let quests = [
        ("Rats in the Cellar", 1, "available"),
        ("The Lost Artifact", 5, "available"),
        ("Dragon's Hoard", 10, "available"),
        ("Old Wounds", 3, "completed"),
    ];
    for (title, minimum_level, status) in quests {
        let mut payload = minimal_payload();
        payload["title"] = json!(title);
        payload["minimumLevel"] = json!(minimum_level);
        payload["status"] = json!(status);
        let res = client
            .post(server.url("/quest"))
            .json(&payload)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let available = client
        .get(server.url("/quest/available/5"))
        .send()
        .await?
        .json::<Vec<Value>>()
        .await?;
    let titles: Vec<&str> = available
        .iter()
        .map(|q| q["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Rats in the Cellar", "The Lost Artifact"]);

    // Bounds: 0 and 21 are not character levels
    for level in ["0", "21", "abc"] {
        let res = client
            .get(server.url(&format!("/quest/available/{}", level)))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "level {level}");
    }
    Ok(())
}

#[tokio::test]
async fn update_and_delete_follow_the_uniform_conventions() -> Result<()> {
    let (server, client) = common::authed_server().await?;

    let created = client
        .post(server.url("/quest"))
        .json(&minimal_payload())
        .send()
        .await?
        .json::<Value>()
        .await?["quest"]
        .clone();
    let id = created["id"].as_str().unwrap().to_string();

    let mut replacement = minimal_payload();
    replacement["status"] = json!("in-progress");
    let res = client
        .put(server.url(&format!("/quest/{}", id)))
        .json(&replacement)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<Value>().await?["quest"].clone();
    assert_eq!(updated["status"], "in-progress");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let res = client
        .delete(server.url(&format!("/quest/{}", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client
        .delete(server.url(&format!("/quest/{}", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
