//! HTTP server exposing the todo API.

pub mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path as AxumPath, State},
    http::StatusCode,
    routing::{get, patch, put},
};
use chrono::Utc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::collection;
use crate::models::{CreateTodo, Stats, Todo, UpdateTodo};
use crate::store::TodoStore;

use self::error::ApiError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Store handle. The mutex serializes each request's load-mutate-save
    /// sequence so concurrent requests cannot interleave file writes.
    pub store: Arc<Mutex<Box<dyn TodoStore>>>,
}

impl AppState {
    pub fn new(store: Box<dyn TodoStore>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Build the API router. Cross-origin requests are allowed from any origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/:id", put(update_todo).delete(delete_todo))
        .route("/api/todos/toggle/:id", patch(toggle_todo))
        .route("/api/stats", get(get_stats))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server on the given host and port.
pub async fn start_server(
    store: Box<dyn TodoStore>,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let location = store.location();
    let app = router(AppState::new(store));

    let host_addr: std::net::IpAddr = host
        .parse()
        .map_err(|e| format!("Invalid host address '{}': {}", host, e))?;
    let addr = SocketAddr::from((host_addr, port));

    tracing::info!("Starting logbook API at http://{}", addr);
    tracing::info!("Storing todos at {}", location);
    log_endpoints();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Log the available endpoints at startup.
fn log_endpoints() {
    tracing::info!("GET    /api/todos            - List all todos");
    tracing::info!("POST   /api/todos            - Create new todo");
    tracing::info!("PUT    /api/todos/:id        - Update todo");
    tracing::info!("DELETE /api/todos/:id        - Delete todo");
    tracing::info!("PATCH  /api/todos/toggle/:id - Toggle completion");
    tracing::info!("GET    /api/stats            - Get statistics");
    tracing::info!("GET    /api/health           - Health check");
}

/// Get all todos, insertion order preserved.
async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let store = state.store.lock().await;
    let todos = store.load()?;
    Ok(Json(todos))
}

/// Create a new todo. A missing body behaves like an empty one and fails
/// text validation.
async fn create_todo(
    State(state): State<AppState>,
    body: Option<Json<CreateTodo>>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let request = body.map(|Json(b)| b).unwrap_or_default();

    let store = state.store.lock().await;
    let mut todos = store.load()?;
    let todo = collection::create(&mut todos, request)?;
    store.save(&todos)?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Update any subset of a todo's text, completion flag, and priority.
async fn update_todo(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<u64>,
    body: Option<Json<UpdateTodo>>,
) -> Result<Json<Todo>, ApiError> {
    let changes = body.map(|Json(b)| b).unwrap_or_default();

    let store = state.store.lock().await;
    let mut todos = store.load()?;
    let todo = collection::update(&mut todos, id, changes)?;
    store.save(&todos)?;

    Ok(Json(todo))
}

/// Delete a todo. Succeeds even when no record has the given id.
async fn delete_todo(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = state.store.lock().await;
    let mut todos = store.load()?;
    collection::remove(&mut todos, id);
    store.save(&todos)?;

    Ok(Json(serde_json::json!({
        "message": "Todo deleted successfully"
    })))
}

/// Toggle a todo's completion status.
async fn toggle_todo(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<u64>,
) -> Result<Json<Todo>, ApiError> {
    let store = state.store.lock().await;
    let mut todos = store.load()?;
    let todo = collection::toggle(&mut todos, id)?;
    store.save(&todos)?;

    Ok(Json(todo))
}

/// Get aggregate statistics over the whole collection.
async fn get_stats(State(state): State<AppState>) -> Result<Json<Stats>, ApiError> {
    let store = state.store.lock().await;
    let todos = store.load()?;
    Ok(Json(collection::stats(&todos)))
}

/// Health check endpoint.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
