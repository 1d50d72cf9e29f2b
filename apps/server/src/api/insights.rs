use std::sync::Arc;

use crate::api::dto::{PeriodQuery, SummaryQuery};
use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use spendtrack_core::insights::{
    BudgetComparison, CategoryTotal, MonthlyExpense, SummaryStatistics,
};

async fn get_monthly_expenses(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<MonthlyExpense>>> {
    let totals = state.insights_service.get_monthly_expense_totals()?;
    Ok(Json(totals))
}

async fn get_category_totals(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CategoryTotal>>> {
    let totals = state.insights_service.get_category_totals()?;
    Ok(Json(totals))
}

async fn get_summary(
    Query(query): Query<SummaryQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SummaryStatistics>> {
    let reference_date = query.resolve()?;
    let summary = state.insights_service.get_summary_statistics(reference_date)?;
    Ok(Json(summary))
}

async fn get_budget_vs_actual(
    Query(query): Query<PeriodQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<BudgetComparison>>> {
    let period = query.resolve()?;
    let rows = state.insights_service.get_budget_vs_actual(period)?;
    Ok(Json(rows))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/insights/monthly-expenses", get(get_monthly_expenses))
        .route("/insights/category-totals", get(get_category_totals))
        .route("/insights/summary", get(get_summary))
        .route("/insights/budget-vs-actual", get(get_budget_vs_actual))
}
