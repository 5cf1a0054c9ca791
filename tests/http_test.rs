//! HTTP integration tests.
//!
//! Starts the axum router on an ephemeral port and exercises it with reqwest.

use reqwest::StatusCode;
use serde_json::{json, Value};
use shows_api::api::Envelope;
use shows_api::lifecycle::ShowSystem;

/// Bind to port 0 and return the base URL.
async fn start_server() -> String {
    let system = ShowSystem::new(32);
    let app = system.router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn envelope(resp: reqwest::Response) -> (StatusCode, Envelope) {
    let status = resp.status();
    let body: Envelope = resp.json().await.unwrap();
    (status, body)
}

async fn post_show(client: &reqwest::Client, base: &str, body: Value) -> (StatusCode, Envelope) {
    let resp = client
        .post(format!("{base}/shows"))
        .json(&body)
        .send()
        .await
        .unwrap();
    envelope(resp).await
}

#[tokio::test]
async fn test_hello_world() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    let (status, body) = envelope(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.code, 200);
    assert!(body.success);
    assert_eq!(body.message, "");
    assert_eq!(body.result, Some(json!({"content": "hello world!"})));
}

#[tokio::test]
async fn test_mirror_echoes_name() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/mirror/kevin")).await.unwrap();
    let (status, body) = envelope(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.result, Some(json!({"name": "kevin"})));
}

#[tokio::test]
async fn test_create_on_empty_collection() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let (status, body) = post_show(
        &client,
        &base,
        json!({"name": "Breaking Bad", "episodes_seen": 5}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.code, 201);
    assert!(body.success);
    assert_eq!(
        body.result,
        Some(json!({"shows": {"id": 1, "name": "Breaking Bad", "episodes_seen": 5}}))
    );
}

#[tokio::test]
async fn test_create_ids_follow_collection_size() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    for expected in 1..=3 {
        let before = client
            .get(format!("{base}/shows"))
            .send()
            .await
            .unwrap()
            .json::<Envelope>()
            .await
            .unwrap();
        let size = before.result.unwrap()["shows"].as_array().unwrap().len();
        assert_eq!(size + 1, expected);

        let (_, body) = post_show(
            &client,
            &base,
            json!({"name": format!("Show {expected}"), "episodes_seen": 0}),
        )
        .await;
        assert_eq!(body.result.unwrap()["shows"]["id"], json!(expected));
    }
}

#[tokio::test]
async fn test_create_validation_is_inclusive_or() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let (status, _) = post_show(&client, &base, json!({"name": "", "episodes_seen": 2})).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = post_show(&client, &base, json!({"name": "Dark", "episodes_seen": -4})).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_show(&client, &base, json!({"name": "", "episodes_seen": -1})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.code, 422);
    assert!(!body.success);
    assert_eq!(
        body.message,
        "Error, make sure you include name and episodes seen of the TV show"
    );
    assert_eq!(body.result, None);

    // The rejected create did not consume an id.
    let (_, body) = post_show(&client, &base, json!({"name": "Ozark", "episodes_seen": 1})).await;
    assert_eq!(body.result.unwrap()["shows"]["id"], json!(3));
}

#[tokio::test]
async fn test_list_returns_shows_in_id_order() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    post_show(&client, &base, json!({"name": "Dark", "episodes_seen": 3})).await;
    post_show(&client, &base, json!({"name": "Ozark", "episodes_seen": 7})).await;

    let resp = client.get(format!("{base}/shows")).send().await.unwrap();
    let (status, body) = envelope(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.result,
        Some(json!({"shows": [
            {"id": 1, "name": "Dark", "episodes_seen": 3},
            {"id": 2, "name": "Ozark", "episodes_seen": 7},
        ]}))
    );
}

#[tokio::test]
async fn test_get_round_trips_and_is_idempotent() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let (_, created) =
        post_show(&client, &base, json!({"name": "Severance", "episodes_seen": 9})).await;
    let created_show = created.result.unwrap()["shows"].clone();

    let first = client.get(format!("{base}/shows/1")).send().await.unwrap();
    let (status, first) = envelope(first).await;
    let second = client.get(format!("{base}/shows/1")).send().await.unwrap();
    let (_, second) = envelope(second).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first.result.as_ref().unwrap()["shows"], created_show);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_id_is_not_found_for_every_method() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    post_show(&client, &base, json!({"name": "Dark", "episodes_seen": 3})).await;

    let url = format!("{base}/shows/42");
    let responses = [
        client.get(&url).send().await.unwrap(),
        client
            .put(&url)
            .json(&json!({"name": "X", "episodes_seen": 1}))
            .send()
            .await
            .unwrap(),
        client.delete(&url).send().await.unwrap(),
    ];

    for resp in responses {
        let (status, body) = envelope(resp).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, 404);
        assert!(!body.success);
        assert_eq!(body.message, "No show with this id exists");
        assert_eq!(body.result, None);
    }

    // Nothing was mutated.
    let resp = client.get(format!("{base}/shows")).send().await.unwrap();
    let (_, body) = envelope(resp).await;
    assert_eq!(
        body.result,
        Some(json!({"shows": [{"id": 1, "name": "Dark", "episodes_seen": 3}]}))
    );
}

#[tokio::test]
async fn test_delete_absent_on_empty_collection() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.delete(format!("{base}/shows/1")).send().await.unwrap();
    let (status, body) = envelope(resp).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.message, "No show with this id exists");
}

#[tokio::test]
async fn test_delete_confirms_and_removes() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    post_show(&client, &base, json!({"name": "Dark", "episodes_seen": 3})).await;

    let resp = client.delete(format!("{base}/shows/1")).send().await.unwrap();
    let (status, body) = envelope(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.success);
    assert_eq!(body.message, "Show deleted");
    assert_eq!(body.result, None);

    let resp = client.get(format!("{base}/shows/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_blank_name_keeps_existing_name() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    post_show(
        &client,
        &base,
        json!({"name": "Breaking Bad", "episodes_seen": 5}),
    )
    .await;

    let resp = client
        .put(format!("{base}/shows/1"))
        .json(&json!({"name": "", "episodes_seen": 10}))
        .send()
        .await
        .unwrap();
    let (status, body) = envelope(resp).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body.result,
        Some(json!({"shows": {"id": 1, "name": "Breaking Bad", "episodes_seen": 10}}))
    );
}

#[tokio::test]
async fn test_put_blank_count_keeps_existing_count() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    post_show(&client, &base, json!({"name": "Dark", "episodes_seen": 3})).await;

    let resp = client
        .put(format!("{base}/shows/1"))
        .json(&json!({"name": "Dark (2017)", "episodes_seen": ""}))
        .send()
        .await
        .unwrap();
    let (status, body) = envelope(resp).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body.result,
        Some(json!({"shows": {"id": 1, "name": "Dark (2017)", "episodes_seen": 3}}))
    );
}

#[tokio::test]
async fn test_lookup_is_by_id_after_deletion() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    for name in ["Dark", "Ozark", "Severance"] {
        post_show(&client, &base, json!({"name": name, "episodes_seen": 1})).await;
    }
    client.delete(format!("{base}/shows/1")).send().await.unwrap();

    let resp = client.get(format!("{base}/shows/3")).send().await.unwrap();
    let (status, body) = envelope(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.result.unwrap()["shows"]["name"], json!("Severance"));

    let resp = client
        .put(format!("{base}/shows/3"))
        .json(&json!({"name": "", "episodes_seen": 2}))
        .send()
        .await
        .unwrap();
    let (_, body) = envelope(resp).await;
    assert_eq!(
        body.result,
        Some(json!({"shows": {"id": 3, "name": "Severance", "episodes_seen": 2}}))
    );
}

#[tokio::test]
async fn test_malformed_input_is_a_server_error_envelope() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/shows"))
        .body("{not json")
        .send()
        .await
        .unwrap();
    let (status, body) = envelope(resp).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.code, 500);
    assert!(!body.success);
    assert_eq!(body.result, None);

    let (status, _) = post_show(&client, &base, json!({"name": "Dark"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let resp = client.get(format!("{base}/shows/abc")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Nothing was stored by the failed requests.
    let resp = client.get(format!("{base}/shows")).send().await.unwrap();
    let (_, body) = envelope(resp).await;
    assert_eq!(body.result, Some(json!({"shows": []})));
}

#[tokio::test]
async fn test_put_existing_with_malformed_body_leaves_record() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    post_show(&client, &base, json!({"name": "Dark", "episodes_seen": 3})).await;

    let resp = client
        .put(format!("{base}/shows/1"))
        .json(&json!({"name": "", "episodes_seen": "three"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = client.get(format!("{base}/shows/1")).send().await.unwrap();
    let (_, body) = envelope(resp).await;
    assert_eq!(
        body.result,
        Some(json!({"shows": {"id": 1, "name": "Dark", "episodes_seen": 3}}))
    );
}

#[tokio::test]
async fn test_ids_outside_stored_range_are_not_found() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    post_show(&client, &base, json!({"name": "Dark", "episodes_seen": 3})).await;

    for raw in ["-1", "4294967296"] {
        let url = format!("{base}/shows/{raw}");
        let responses = [
            client.get(&url).send().await.unwrap(),
            client
                .put(&url)
                .json(&json!({"name": "X", "episodes_seen": 1}))
                .send()
                .await
                .unwrap(),
            client.delete(&url).send().await.unwrap(),
        ];

        for resp in responses {
            let (status, body) = envelope(resp).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "/shows/{raw}");
            assert_eq!(body.message, "No show with this id exists");
            assert_eq!(body.result, None);
        }
    }

    let resp = client.get(format!("{base}/shows")).send().await.unwrap();
    let (_, body) = envelope(resp).await;
    assert_eq!(
        body.result,
        Some(json!({"shows": [{"id": 1, "name": "Dark", "episodes_seen": 3}]}))
    );
}

#[tokio::test]
async fn test_put_absent_id_with_malformed_body_is_not_found() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    post_show(&client, &base, json!({"name": "Dark", "episodes_seen": 3})).await;

    let resp = client
        .put(format!("{base}/shows/42"))
        .body("{not json")
        .send()
        .await
        .unwrap();
    let (status, body) = envelope(resp).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.code, 404);
    assert_eq!(body.message, "No show with this id exists");
}
