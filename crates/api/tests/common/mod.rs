//! Shared test fixtures: stub providers and app construction.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderName, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use life_api::config::ServerConfig;
use life_api::routes;
use life_api::state::AppState;
use life_core::config::DbConfig;
use life_core::types::DbId;
use life_db::models::{CompletedWorkout, ExerciseDetail};
use life_db::store::{StoreConnection, StoreConnector, StoreError};
use life_secrets::{SecretsError, SecretsProvider};

/// A database secret payload matching what the SSM parameter holds.
pub const VALID_SECRET: &str = r#"{
    "DB_HOST": "localhost",
    "DB_NAME": "life",
    "DB_USER": "app",
    "DB_PASSWORD": "secret",
    "DB_PORT": 5432
}"#;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        db_secret_name: "/Life/LocalDatabase".to_string(),
        request_timeout_secs: 30,
    }
}

/// Stub secrets provider returning a canned payload or a provider failure.
pub struct StubSecrets {
    response: Result<String, String>,
}

impl StubSecrets {
    pub fn ok(payload: &str) -> Self {
        Self {
            response: Ok(payload.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl SecretsProvider for StubSecrets {
    async fn fetch(&self, _name: &str) -> Result<String, SecretsError> {
        self.response.clone().map_err(SecretsError::Provider)
    }
}

/// Observable store activity, shared between a test and its stub store.
#[derive(Debug, Default)]
pub struct StoreLog {
    /// Connection attempts, successful or not.
    pub connect_attempts: usize,
    /// Connections released via `close`.
    pub closes: usize,
    /// `(template_id, user_id)` pairs inserted.
    pub inserted: Vec<(String, String)>,
}

/// Stub store connector with injectable failures.
pub struct StubStore {
    pub log: Arc<Mutex<StoreLog>>,
    pub exercises: Vec<ExerciseDetail>,
    pub workout_id: DbId,
    pub fail_connect: bool,
    pub fail_query: bool,
}

impl StubStore {
    /// A store that succeeds, generating workout id 42 and serving the
    /// given exercises. Returns the shared activity log alongside.
    pub fn new(exercises: Vec<ExerciseDetail>) -> (Arc<Mutex<StoreLog>>, Self) {
        let log = Arc::new(Mutex::new(StoreLog::default()));
        let store = Self {
            log: Arc::clone(&log),
            exercises,
            workout_id: 42,
            fail_connect: false,
            fail_query: false,
        };
        (log, store)
    }
}

#[async_trait]
impl StoreConnector for StubStore {
    async fn connect(&self, _config: &DbConfig) -> Result<Box<dyn StoreConnection>, StoreError> {
        self.log.lock().unwrap().connect_attempts += 1;
        if self.fail_connect {
            return Err(StoreError::Connect(sqlx::Error::PoolTimedOut));
        }
        Ok(Box::new(StubConnection {
            log: Arc::clone(&self.log),
            exercises: self.exercises.clone(),
            workout_id: self.workout_id,
            fail_query: self.fail_query,
        }))
    }
}

struct StubConnection {
    log: Arc<Mutex<StoreLog>>,
    exercises: Vec<ExerciseDetail>,
    workout_id: DbId,
    fail_query: bool,
}

#[async_trait]
impl StoreConnection for StubConnection {
    async fn insert_completed_workout(
        &mut self,
        template_id: &str,
        user_id: &str,
    ) -> Result<CompletedWorkout, StoreError> {
        if self.fail_query {
            return Err(StoreError::Query(sqlx::Error::RowNotFound));
        }
        self.log
            .lock()
            .unwrap()
            .inserted
            .push((template_id.to_string(), user_id.to_string()));
        Ok(CompletedWorkout {
            completed_workout_id: self.workout_id,
            workout_template_id: template_id.to_string(),
            user_id: user_id.to_string(),
        })
    }

    async fn list_exercise_details(
        &mut self,
        _template_id: &str,
    ) -> Result<Vec<ExerciseDetail>, StoreError> {
        Ok(self.exercises.clone())
    }

    async fn close(self: Box<Self>) -> Result<(), StoreError> {
        self.log.lock().unwrap().closes += 1;
        Ok(())
    }
}

/// Build the full application router with the production middleware stack
/// on top of the given stub providers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(
    secrets: impl SecretsProvider + 'static,
    store: impl StoreConnector + 'static,
) -> Router {
    let state = AppState {
        secrets: Arc::new(secrets),
        store: Arc::new(store),
        config: Arc::new(test_config()),
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// GET a path and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

/// POST an arbitrary body (used for malformed-payload cases).
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the fixed headers every invocation response must carry.
pub fn assert_fixed_headers(response: &Response<Body>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["content-type"], "application/json");
}
