//! Request handlers: thin translations between HTTP and the inventory
//! service. All consistency decisions live in `stockroom-engine`; handlers
//! only parse, delegate, and shape the response envelope.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};
use stockroom_types::{CategoryChanges, EntityId, NewCategory, NewPart, PartChanges};

use crate::auth::{Reader, Writer};
use crate::error::{ServerError, ServerResult};
use crate::router::AppState;

fn parse_id(text: &str) -> ServerResult<EntityId> {
    text.parse()
        .map_err(|_| ServerError::InvalidId(text.to_string()))
}

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler() -> Json<Value> {
    Json(json!({
        "name": "stockroom-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub async fn create_category(
    State(state): State<AppState>,
    Writer(_): Writer,
    Json(new): Json<NewCategory>,
) -> ServerResult<(StatusCode, Json<Value>)> {
    let created = state.service.create_category(new)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("Category {} created", created.id),
            "data": created,
        })),
    ))
}

pub async fn get_category(
    State(state): State<AppState>,
    Reader(_): Reader,
    Path(id): Path<String>,
) -> ServerResult<Json<Value>> {
    let id = parse_id(&id)?;
    let category = state.service.get_category(&id)?;
    Ok(Json(json!({
        "message": format!("Category {id} retrieved"),
        "data": category,
    })))
}

pub async fn list_categories(
    State(state): State<AppState>,
    Reader(_): Reader,
) -> ServerResult<Json<Value>> {
    let categories = state.service.list_categories()?;
    Ok(Json(json!({ "data": categories })))
}

pub async fn update_category(
    State(state): State<AppState>,
    Writer(_): Writer,
    Path(id): Path<String>,
    Json(changes): Json<CategoryChanges>,
) -> ServerResult<Json<Value>> {
    let id = parse_id(&id)?;
    let updated = state.service.update_category(&id, changes)?;
    Ok(Json(json!({
        "message": format!("Category {id} updated"),
        "data": updated,
    })))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Writer(_): Writer,
    Path(id): Path<String>,
) -> ServerResult<Json<Value>> {
    let id = parse_id(&id)?;
    state.service.delete_category(&id)?;
    Ok(Json(json!({ "message": format!("Category {id} deleted") })))
}

// ---------------------------------------------------------------------------
// Parts
// ---------------------------------------------------------------------------

pub async fn create_part(
    State(state): State<AppState>,
    Writer(_): Writer,
    Json(new): Json<NewPart>,
) -> ServerResult<(StatusCode, Json<Value>)> {
    let created = state.service.create_part(new)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("Part {} created", created.id),
            "data": created,
        })),
    ))
}

pub async fn get_part(
    State(state): State<AppState>,
    Reader(_): Reader,
    Path(id): Path<String>,
) -> ServerResult<Json<Value>> {
    let id = parse_id(&id)?;
    let part = state.service.get_part(&id)?;
    Ok(Json(json!({
        "message": format!("Part {id} retrieved"),
        "data": part,
    })))
}

pub async fn list_parts(
    State(state): State<AppState>,
    Reader(_): Reader,
) -> ServerResult<Json<Value>> {
    let parts = state.service.list_parts()?;
    Ok(Json(json!({ "data": parts })))
}

pub async fn update_part(
    State(state): State<AppState>,
    Writer(_): Writer,
    Path(id): Path<String>,
    Json(changes): Json<PartChanges>,
) -> ServerResult<Json<Value>> {
    let id = parse_id(&id)?;
    let updated = state.service.update_part(&id, changes)?;
    Ok(Json(json!({
        "message": format!("Part {id} updated"),
        "data": updated,
    })))
}

pub async fn delete_part(
    State(state): State<AppState>,
    Writer(_): Writer,
    Path(id): Path<String>,
) -> ServerResult<Json<Value>> {
    let id = parse_id(&id)?;
    state.service.delete_part(&id)?;
    Ok(Json(json!({ "message": format!("Part {id} deleted") })))
}
