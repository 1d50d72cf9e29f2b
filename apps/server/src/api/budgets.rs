use std::sync::Arc;

use crate::api::dto::PeriodQuery;
use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Local;
use spendtrack_core::budgets::{Budget, BudgetPeriod, NewBudget};

async fn get_budgets(
    Query(query): Query<PeriodQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Budget>>> {
    let period = query.resolve()?;
    let budgets = state.budget_service.get_budgets(period)?;
    Ok(Json(budgets))
}

// Budgets are always set for the month the request arrives in.
async fn set_budget(
    State(state): State<Arc<AppState>>,
    Json(new_budget): Json<NewBudget>,
) -> ApiResult<Json<Budget>> {
    let period = BudgetPeriod::from_date(Local::now().date_naive());
    let budget = state.budget_service.upsert_budget(new_budget, period).await?;
    Ok(Json(budget))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/budgets", get(get_budgets).post(set_budget))
}
