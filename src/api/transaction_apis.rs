//! Endpoints for creating, listing, reading, updating and deleting transactions.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, warn};

use crate::api::envelope::ApiResponse;
use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::models::{StoreError, Transaction, TransactionPayload};
use crate::types::{TransactionId, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<i64>,
    size: Option<i64>
}

/// Router for the transaction APIs, to be nested under `/api/transactions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions).post(create_transaction))
        .route("/:id", get(get_transaction).put(update_transaction).delete(delete_transaction))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    body: Result<Json<Option<TransactionPayload>>, JsonRejection>,
) -> ApiResult<Transaction> {
    info!("POST /api/transactions");

    let result = read_payload(body)
        .and_then(|payload| state.store.create(payload).map_err(ApiError::from));

    respond(result, "Transaction created successfully")
}

pub async fn list_transactions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Vec<Transaction>> {
    let result = query
        .map_err(|rejection| ApiError::Rejected(rejection.body_text()))
        .and_then(|Query(query)| {
            let page = query.page.unwrap_or(DEFAULT_PAGE);
            let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE);

            info!("GET /api/transactions - page: {page}, size: {size}");

            state.store.list(page, size).map_err(ApiError::from)
        });

    respond(result, "Transactions fetched successfully")
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Transaction> {
    info!("GET /api/transactions/{id}");

    let result = parse_id(&id)
        .and_then(|id| state.store.get_by_id(id).map_err(ApiError::from));

    respond(result, "Transaction fetched successfully")
}

pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Option<TransactionPayload>>, JsonRejection>,
) -> ApiResult<Transaction> {
    info!("PUT /api/transactions/{id}");

    let result = parse_id(&id)
        .and_then(|id| read_payload(body).map(|payload| (id, payload)))
        .and_then(|(id, payload)| state.store.update(id, payload).map_err(ApiError::from));

    respond(result, "Transaction updated successfully")
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("DELETE /api/transactions/{id}");

    parse_id(&id)
        .and_then(|id| state.store.delete(id).map_err(ApiError::from))
        .map(|_| StatusCode::OK)
        .inspect_err(|error| warn!("{error}"))
}

fn parse_id(id: &str) -> Result<TransactionId, ApiError> {
    id.trim().parse().map_err(|_| StoreError::invalid_id().into())
}

fn read_payload(body: Result<Json<Option<TransactionPayload>>, JsonRejection>) -> Result<TransactionPayload, ApiError> {
    let Json(payload) = body.map_err(|rejection| ApiError::Rejected(rejection.body_text()))?;

    Ok(TransactionPayload::require(payload)?)
}

fn respond<T>(result: Result<T, ApiError>, message: &str) -> ApiResult<T>
where
    T: serde::Serialize,
{
    result
        .map(|data| Json(ApiResponse::success(data, message)))
        .inspect_err(|error| warn!("{error}"))
}
