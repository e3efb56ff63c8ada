use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use std::sync::Arc;

use crate::Error;
use crate::record::{TreeRecord, TreeStats};
use crate::server::AppState;
use crate::service::TreeService;
use crate::validate::TreeInput;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

type Rejection = (StatusCode, Json<ErrorResponse>);

/// Map a service error onto the boundary contract: validation failures are
/// the client's fault, absent ids are 404, everything else is a 500 with the
/// message passed through.
fn reject(err: Error) -> Rejection {
    let status = match err {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::NotFound => StatusCode::NOT_FOUND,
        Error::Storage(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse { error: err.to_string() }))
}

pub async fn list_trees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TreeRecord>>, Rejection> {
    let store = state.store.lock().await;
    let trees = TreeService::new(&store).list().map_err(reject)?;
    Ok(Json(trees))
}

pub async fn get_tree(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<TreeRecord>, Rejection> {
    let store = state.store.lock().await;
    let tree = TreeService::new(&store).get(id).map_err(reject)?;
    Ok(Json(tree))
}

pub async fn create_tree(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TreeInput>,
) -> Result<Json<CreatedResponse>, Rejection> {
    let store = state.store.lock().await;
    let id = TreeService::new(&store).create(input).map_err(reject)?;
    Ok(Json(CreatedResponse {
        id,
        message: "Tree added successfully".to_string(),
    }))
}

pub async fn update_tree(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<TreeInput>,
) -> Result<Json<MessageResponse>, Rejection> {
    let store = state.store.lock().await;
    TreeService::new(&store).update(id, input).map_err(reject)?;
    Ok(Json(MessageResponse {
        message: "Tree updated successfully".to_string(),
    }))
}

pub async fn delete_tree(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, Rejection> {
    let store = state.store.lock().await;
    TreeService::new(&store).delete(id).map_err(reject)?;
    Ok(Json(MessageResponse {
        message: "Tree deleted successfully".to_string(),
    }))
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TreeStats>, Rejection> {
    let store = state.store.lock().await;
    let stats = TreeService::new(&store).stats().map_err(reject)?;
    Ok(Json(stats))
}
