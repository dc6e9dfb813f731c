//! Route handlers for the item API.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::error::{ItemDeskError, Result};
use crate::model::{Item, ItemId, ItemPatch, NewItem};
use crate::query::{ListParams, ListQuery, Page};
use crate::validation;

use super::AppState;
use super::error::ErrorBody;
use super::extract::JsonBody;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

type IdPath = std::result::Result<Path<String>, PathRejection>;

/// Resolves a path id. A well-formed id that can never exist is simply not found;
/// a segment that cannot even be decoded is an invalid id.
fn item_id(raw: IdPath) -> Result<ItemId> {
    let Path(raw) = raw.map_err(|_| ItemDeskError::InvalidId)?;
    validation::parse_id(&raw)?.ok_or(ItemDeskError::NotFound)
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn list_items(
    State(state): State<AppState>,
    pairs: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Page>> {
    let Query(pairs) = pairs.map_err(|_| ItemDeskError::validation("Invalid query string"))?;
    let query = ListQuery::from_params(&ListParams::from_pairs(pairs))?;
    let page = state.store.lock().list(&query);
    Ok(Json(page))
}

async fn get_item(State(state): State<AppState>, id: IdPath) -> Result<Json<Item>> {
    let id = item_id(id)?;
    let item = state.store.lock().get(id)?.clone();
    Ok(Json(item))
}

async fn create_item(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewItem>,
) -> Result<impl IntoResponse> {
    let item = state.store.lock().create(input)?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_item(
    State(state): State<AppState>,
    id: IdPath,
    JsonBody(patch): JsonBody<ItemPatch>,
) -> Result<Json<Item>> {
    let id = item_id(id)?;
    let item = state.store.lock().update(id, patch)?;
    Ok(Json(item))
}

async fn delete_item(State(state): State<AppState>, id: IdPath) -> Result<Json<Item>> {
    let id = item_id(id)?;
    let item = state.store.lock().delete(id)?;
    Ok(Json(item))
}

async fn route_not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Route not found")))
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("Method not allowed")),
    )
}
