use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use spendtrack_core::transactions::{NewTransaction, Transaction, TransactionUpdate};

async fn get_transactions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state.transaction_service.get_transactions()?;
    Ok(Json(transactions))
}

async fn get_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state.transaction_service.get_transaction(&id)?;
    Ok(Json(transaction))
}

async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(new_transaction): Json<NewTransaction>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state
        .transaction_service
        .create_transaction(new_transaction)
        .await?;
    Ok(Json(transaction))
}

// The path id is authoritative; the body carries only the editable fields.
async fn update_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewTransaction>,
) -> ApiResult<Json<Transaction>> {
    let update = TransactionUpdate {
        id,
        title: body.title,
        amount: body.amount,
        category: body.category,
        date: body.date,
        kind: body.kind,
    };
    let transaction = state.transaction_service.update_transaction(update).await?;
    Ok(Json(transaction))
}

async fn delete_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.transaction_service.delete_transaction(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transactions",
            get(get_transactions).post(create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}
