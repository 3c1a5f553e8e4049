//! Order API Handlers
//!
//! Chain order per route:
//! - create: field validation, quantity validation, terminal handler
//! - update: lookup, id consistency, field validation, quantity
//!   validation, status validation, terminal handler
//! - delete: lookup, delete eligibility, terminal handler

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use super::validate;
use crate::core::ServerState;
use crate::db::models::{Order, OrderPayload};
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResult};
use shared::response::Data;

/// GET /orders - full collection in creation order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Data<Vec<Order>>>> {
    let repo = OrderRepository::new(state.store());
    let orders = repo.find_all().await;
    Ok(Json(Data::new(orders)))
}

/// GET /orders/:id - single order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Data<Order>>> {
    let repo = OrderRepository::new(state.store());
    let order = repo
        .find_by_id(&id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Order id not found: {id}")))?;
    Ok(Json(Data::new(order)))
}

/// POST /orders - create an order from a validated body
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Data<OrderPayload>>,
) -> AppResult<(StatusCode, Json<Data<Order>>)> {
    let payload = body.data;
    let fields = validate::data_fields(&payload)?;
    let items = validate::quantities(&fields.dishes)?;
    let status = validate::initial_status(payload.status.as_deref())?;

    let repo = OrderRepository::new(state.store());
    let order = repo.create(fields, status, items).await;
    tracing::info!(id = %order.id, status = %order.status, "order created");

    Ok((StatusCode::CREATED, Json(Data::new(order))))
}

/// PUT /orders/:id - replace the mutable fields of an existing order
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Data<OrderPayload>>,
) -> AppResult<Json<Data<Order>>> {
    let repo = OrderRepository::new(state.store());
    let existing = repo
        .find_by_id(&id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Order id not found: {id}")))?;

    let payload = body.data;
    validate::id_matches(&id, payload.id.as_deref())?;
    let fields = validate::data_fields(&payload)?;
    let items = validate::quantities(&fields.dishes)?;
    let status = validate::status(payload.status.as_deref(), existing.status)?;

    let order = repo.update(&id, fields, status, items).await?;
    tracing::info!(id = %order.id, status = %order.status, "order updated");

    Ok(Json(Data::new(order)))
}

/// DELETE /orders/:id - remove a pending order
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = OrderRepository::new(state.store());
    let existing = repo
        .find_by_id(&id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Order id not found: {id}")))?;

    validate::delete_eligible(existing.status)?;

    repo.delete(&id).await?;
    tracing::info!(id = %id, "order deleted");

    Ok(StatusCode::NO_CONTENT)
}
