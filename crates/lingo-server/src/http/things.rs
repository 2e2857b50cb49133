//! `/things` handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use lingo_core::app::{
    App, CreateItemRequest, PartitionQuery, TranslationRequest, TranslationResponse,
    UpdateItemBody, UpdateItemRequest, UpdateItemResponse,
};
use lingo_core::domain::Item;
use serde::Deserialize;

use super::{ApiError, parse_body};

#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguageParams {
    pub language: Option<String>,
}

pub async fn get_all(State(app): State<App>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(app.get_all().await?))
}

pub async fn create_item(State(app): State<App>, body: Bytes) -> Result<Json<Item>, ApiError> {
    let request: CreateItemRequest = parse_body(&body)?;
    Ok(Json(app.create_item(request).await?))
}

pub async fn get_by_partition(
    State(app): State<App>,
    Path(partition_id): Path<String>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = app
        .get_by_partition(PartitionQuery::new(partition_id, params.filter))
        .await?;
    Ok(Json(items))
}

pub async fn update_item(
    State(app): State<App>,
    Path((partition_id, sort_id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<UpdateItemResponse>, ApiError> {
    let body: UpdateItemBody = parse_body(&body)?;
    let response = app
        .update_item(UpdateItemRequest::new(partition_id, sort_id, body))
        .await?;
    Ok(Json(response))
}

pub async fn get_translation(
    State(app): State<App>,
    Path((partition_id, sort_id)): Path<(String, String)>,
    Query(params): Query<LanguageParams>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let outcome = app
        .get_translation(TranslationRequest::new(
            partition_id,
            sort_id,
            params.language,
        ))
        .await?;
    Ok(Json(outcome.into()))
}
