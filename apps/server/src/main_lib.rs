use std::sync::Arc;

use crate::config::Config;
use spendtrack_core::budgets::{BudgetService, BudgetServiceTrait};
use spendtrack_core::insights::{InsightsService, InsightsServiceTrait};
use spendtrack_core::transactions::{TransactionService, TransactionServiceTrait};
use spendtrack_storage_sqlite::budgets::BudgetRepository;
use spendtrack_storage_sqlite::db::{self, write_actor};
use spendtrack_storage_sqlite::transactions::TransactionRepository;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub transaction_service: Arc<dyn TransactionServiceTrait + Send + Sync>,
    pub budget_service: Arc<dyn BudgetServiceTrait + Send + Sync>,
    pub insights_service: Arc<dyn InsightsServiceTrait + Send + Sync>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("ST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // Ensure DATABASE_URL aligns with ST_DB_PATH so storage picks the right file
    std::env::set_var("DATABASE_URL", &config.db_path);
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let transaction_service: Arc<dyn TransactionServiceTrait + Send + Sync> =
        Arc::new(TransactionService::new(transaction_repository.clone()));

    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let budget_service: Arc<dyn BudgetServiceTrait + Send + Sync> =
        Arc::new(BudgetService::new(budget_repository.clone()));

    let insights_service: Arc<dyn InsightsServiceTrait + Send + Sync> = Arc::new(
        InsightsService::new(transaction_repository, budget_repository),
    );

    Ok(Arc::new(AppState {
        transaction_service,
        budget_service,
        insights_service,
        db_path,
    }))
}
