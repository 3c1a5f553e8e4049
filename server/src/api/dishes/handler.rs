//! Dish API Handlers
//!
//! Chain order mirrors the route contracts: lookup first, then id
//! consistency, then field validation, then the terminal handler.

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use super::validate;
use crate::core::ServerState;
use crate::db::models::{Dish, DishPayload};
use crate::db::repository::DishRepository;
use crate::utils::{AppError, AppResult};
use shared::response::Data;

/// GET /dishes - full collection in creation order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Data<Vec<Dish>>>> {
    let repo = DishRepository::new(state.store());
    let dishes = repo.find_all().await;
    Ok(Json(Data::new(dishes)))
}

/// GET /dishes/:id - single dish
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Data<Dish>>> {
    let repo = DishRepository::new(state.store());
    let dish = repo
        .find_by_id(&id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Dish id not found: {id}")))?;
    Ok(Json(Data::new(dish)))
}

/// POST /dishes - create a dish from a validated body
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Data<DishPayload>>,
) -> AppResult<(StatusCode, Json<Data<Dish>>)> {
    let fields = validate::data_fields(&body.data)?;

    let repo = DishRepository::new(state.store());
    let dish = repo.create(fields).await;
    tracing::info!(id = %dish.id, name = %dish.name, "dish created");

    Ok((StatusCode::CREATED, Json(Data::new(dish))))
}

/// PUT /dishes/:id - replace the mutable fields of an existing dish
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Data<DishPayload>>,
) -> AppResult<Json<Data<Dish>>> {
    let repo = DishRepository::new(state.store());
    repo.find_by_id(&id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Dish id not found: {id}")))?;

    validate::id_matches(&id, body.data.id.as_deref())?;
    let fields = validate::data_fields(&body.data)?;

    let dish = repo.update(&id, fields).await?;
    tracing::info!(id = %dish.id, "dish updated");

    Ok(Json(Data::new(dish)))
}
