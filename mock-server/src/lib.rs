//! In-memory record server used to exercise the dispatcher over real HTTP.
//!
//! Besides CRUD routes for `Record`s it serves fixed endpoints whose bodies
//! are blank (`/blank`), not JSON (`/garbage`) and not UTF-8 (`/binary`).

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const NOT_FOUND_MESSAGE: &str = "Url not found.";
pub const GARBAGE_BODY: &str = "Undeserializable content.";
pub const BINARY_BODY: &[u8] = &[0xff, 0xfe, 0x00];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub a: i64,
    pub b: Option<String>,
    pub c: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Created {
    pub id: Uuid,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Record>>>;

type NotFound = (StatusCode, &'static str);

pub fn app() -> Router {
    router(Db::default())
}

/// Builds the router over `db`, so callers can seed or inspect the store.
pub fn router(db: Db) -> Router {
    Router::new()
        .route("/records", get(list_records).post(create_record))
        .route(
            "/records/{id}",
            get(get_record).put(replace_record).delete(delete_record),
        )
        .route("/blank", get(blank))
        .route("/garbage", get(garbage))
        .route("/binary", get(binary).post(binary).delete(binary))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, Db::default()).await
}

pub async fn serve(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    tracing::info!(addr = ?listener.local_addr().ok(), "serving records");
    axum::serve(listener, router(db)).await
}

fn not_found() -> NotFound {
    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

async fn list_records(State(db): State<Db>) -> Json<Vec<Record>> {
    let records = db.read().await;
    Json(records.values().cloned().collect())
}

async fn create_record(
    State(db): State<Db>,
    Json(record): Json<Record>,
) -> (StatusCode, Json<Created>) {
    let id = Uuid::new_v4();
    db.write().await.insert(id, record);
    tracing::debug!(%id, "record created");
    (StatusCode::CREATED, Json(Created { id }))
}

async fn get_record(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Record>, NotFound> {
    let records = db.read().await;
    records.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn replace_record(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(record): Json<Record>,
) -> Result<StatusCode, NotFound> {
    let mut records = db.write().await;
    let slot = records.get_mut(&id).ok_or_else(not_found)?;
    *slot = record;
    Ok(StatusCode::OK)
}

async fn delete_record(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, NotFound> {
    let mut records = db.write().await;
    records
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}

async fn blank() -> &'static str {
    "   "
}

async fn garbage() -> &'static str {
    GARBAGE_BODY
}

async fn binary() -> &'static [u8] {
    BINARY_BODY
}
