use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use pet_activity_log::{
    config::SupabaseSettings,
    models::ActivityLogRecord,
    repositories::activity_log::{ActivityLogRepository, SupabaseActivityLogRepo, SupabaseError},
};

#[derive(Clone, Debug)]
struct Captured {
    apikey: String,
    authorization: String,
    prefer: String,
    body: serde_json::Value,
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    captured: Arc<Mutex<Vec<Captured>>>,
}

fn header(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn insert_rows(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, String) {
    stub.captured.lock().unwrap().push(Captured {
        apikey: header(&headers, "apikey"),
        authorization: header(&headers, "authorization"),
        prefer: header(&headers, "prefer"),
        body,
    });

    let body = if stub.status.is_success() {
        String::new()
    } else {
        r#"{"code":"PGRST205","message":"Could not find the table"}"#.to_string()
    };

    (stub.status, body)
}

/// Serves a PostgREST stand-in on an ephemeral port and returns its base URL.
async fn serve_stub(status: StatusCode) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let stub = Stub {
        status,
        captured: captured.clone(),
    };

    let app = Router::new()
        .route("/rest/v1/activity-logs", post(insert_rows))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), captured)
}

fn repo(url: String) -> SupabaseActivityLogRepo {
    SupabaseActivityLogRepo::new(&SupabaseSettings {
        url,
        key: "service-key".to_string(),
    })
}

fn feeding() -> ActivityLogRecord {
    ActivityLogRecord::qr_code("p1".to_string(), "u1".to_string(), "feeding".to_string())
}

#[tokio::test]
async fn success_insert() {
    let (url, captured) = serve_stub(StatusCode::CREATED).await;

    let result = repo(url).insert(&feeding()).await;
    assert!(result.is_ok());

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].apikey, "service-key");
    assert_eq!(captured[0].authorization, "Bearer service-key");
    assert_eq!(captured[0].prefer, "return=minimal");
    assert_eq!(
        captured[0].body,
        serde_json::json!({
            "pet_id": "p1",
            "user_id": "u1",
            "activityType": "feeding",
            "comment": "Qr code log for feeding",
        })
    );
}

#[tokio::test]
async fn success_trailing_slash_in_url() {
    let (url, captured) = serve_stub(StatusCode::CREATED).await;

    let result = repo(format!("{url}/")).insert(&feeding()).await;
    assert!(result.is_ok());
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn success_duplicates_are_sent_twice() {
    let (url, captured) = serve_stub(StatusCode::CREATED).await;
    let repo = repo(url);

    repo.insert(&feeding()).await.unwrap();
    repo.insert(&feeding()).await.unwrap();

    assert_eq!(captured.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn success_shared_client() {
    let (url, captured) = serve_stub(StatusCode::CREATED).await;
    let client = reqwest::Client::new();
    let settings = SupabaseSettings {
        url,
        key: "service-key".to_string(),
    };

    let first = SupabaseActivityLogRepo::with_client(client.clone(), &settings);
    let second = SupabaseActivityLogRepo::with_client(client, &settings);

    first.insert(&feeding()).await.unwrap();
    second.insert(&feeding()).await.unwrap();

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert!(captured.iter().all(|c| c.apikey == "service-key"));
}

#[tokio::test]
async fn error_api_status() {
    let (url, _captured) = serve_stub(StatusCode::NOT_FOUND).await;

    let err = repo(url).insert(&feeding()).await.unwrap_err();

    match err.downcast_ref::<SupabaseError>() {
        Some(SupabaseError::Api { status, body }) => {
            assert_eq!(*status, 404);
            assert!(body.contains("PGRST205"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_unreachable() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = repo(format!("http://{addr}"))
        .insert(&feeding())
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SupabaseError>(),
        Some(SupabaseError::Request(_))
    ));
}
