use spendtrack_core::budgets::{Budget, BudgetPeriod, BudgetRepositoryTrait, NewBudget};
use spendtrack_core::Result;

use super::model::BudgetDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budgets;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct BudgetRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        BudgetRepository { pool, writer }
    }

    fn get_budgets_impl(&self, period: BudgetPeriod) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let budgets_db = budgets::table
            .filter(budgets::month.eq(period.label()))
            .filter(budgets::year.eq(period.year))
            .select(BudgetDB::as_select())
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(budgets_db.into_iter().map(Budget::from).collect())
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn get_budgets(&self, period: BudgetPeriod) -> Result<Vec<Budget>> {
        self.get_budgets_impl(period)
    }

    async fn upsert_budget(&self, new_budget: NewBudget, period: BudgetPeriod) -> Result<Budget> {
        new_budget.validate()?;
        let budget_db_owned = BudgetDB::from_new(new_budget, period);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let mut budget_to_upsert = budget_db_owned;
                budget_to_upsert.id = Uuid::new_v4().to_string();

                // Single statement: insert, or overwrite the amount of the
                // existing (category, month, year) row. The unique index on
                // that triple backs the conflict target, so concurrent calls
                // for the same key cannot produce two rows.
                let result_db = diesel::insert_into(budgets::table)
                    .values(&budget_to_upsert)
                    .on_conflict((budgets::category, budgets::month, budgets::year))
                    .do_update()
                    .set((
                        budgets::amount.eq(budget_to_upsert.amount.clone()),
                        budgets::updated_at.eq(budget_to_upsert.updated_at.clone()),
                    ))
                    .get_result::<BudgetDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(result_db))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, write_actor::spawn_writer};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use spendtrack_core::categories::Category;
    use spendtrack_core::Error;
    use tempfile::tempdir;

    /// Creates a test repository backed by a migrated temp database.
    /// The temp dir is returned so it outlives the pool.
    async fn create_test_repository() -> (BudgetRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");

        let writer = spawn_writer((*pool).clone());
        let repo = BudgetRepository::new(Arc::clone(&pool), writer);
        (repo, temp_dir)
    }

    fn august() -> BudgetPeriod {
        BudgetPeriod {
            year: 2025,
            month: 8,
        }
    }

    fn new_budget(category: &str, amount: Decimal) -> NewBudget {
        NewBudget {
            category: category.to_string(),
            amount,
        }
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_overwrites_same_key() {
        let (repo, _temp_dir) = create_test_repository().await;

        let created = repo
            .upsert_budget(new_budget("Food", dec!(300)), august())
            .await
            .expect("Failed to insert budget");
        assert_eq!(created.category, Category::Food);
        assert_eq!(created.amount, dec!(300));
        assert_eq!(created.month, "Aug");
        assert_eq!(created.year, 2025);

        let overwritten = repo
            .upsert_budget(new_budget("Food", dec!(450)), august())
            .await
            .expect("Failed to overwrite budget");
        assert_eq!(overwritten.id, created.id, "upsert must keep the original row");
        assert_eq!(overwritten.amount, dec!(450));

        let budgets_for_month = repo.get_budgets(august()).expect("Failed to list budgets");
        assert_eq!(budgets_for_month.len(), 1);
        assert_eq!(budgets_for_month[0].amount, dec!(450));
    }

    #[tokio::test]
    async fn test_same_category_different_periods_coexist() {
        let (repo, _temp_dir) = create_test_repository().await;

        repo.upsert_budget(new_budget("Shopping", dec!(100)), august())
            .await
            .expect("Failed to insert budget");
        repo.upsert_budget(
            new_budget("Shopping", dec!(150)),
            BudgetPeriod {
                year: 2025,
                month: 9,
            },
        )
        .await
        .expect("Failed to insert budget");

        let august_budgets = repo.get_budgets(august()).expect("Failed to list budgets");
        assert_eq!(august_budgets.len(), 1);
        assert_eq!(august_budgets[0].amount, dec!(100));
    }

    #[tokio::test]
    async fn test_same_month_label_different_years_coexist() {
        let (repo, _temp_dir) = create_test_repository().await;

        repo.upsert_budget(
            new_budget("Bills", dec!(80)),
            BudgetPeriod {
                year: 2024,
                month: 8,
            },
        )
        .await
        .expect("Failed to insert budget");
        repo.upsert_budget(new_budget("Bills", dec!(90)), august())
            .await
            .expect("Failed to insert budget");

        let budgets_2025 = repo.get_budgets(august()).expect("Failed to list budgets");
        assert_eq!(budgets_2025.len(), 1);
        assert_eq!(budgets_2025[0].amount, dec!(90));
    }

    #[tokio::test]
    async fn test_zero_budget_is_stored() {
        let (repo, _temp_dir) = create_test_repository().await;

        let created = repo
            .upsert_budget(new_budget("Entertainment", dec!(0)), august())
            .await
            .expect("Failed to insert zero budget");
        assert_eq!(created.amount, Decimal::ZERO);

        let budgets_for_month = repo.get_budgets(august()).expect("Failed to list budgets");
        assert_eq!(budgets_for_month.len(), 1);
    }

    #[tokio::test]
    async fn test_negative_budget_rejected() {
        let (repo, _temp_dir) = create_test_repository().await;

        let err = repo
            .upsert_budget(new_budget("Food", dec!(-25)), august())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(repo
            .get_budgets(august())
            .expect("Failed to list budgets")
            .is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_upserts_converge_to_one_row() {
        let (repo, _temp_dir) = create_test_repository().await;
        let repo = Arc::new(repo);

        let mut handles = Vec::new();
        for i in 1..=5u32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.upsert_budget(new_budget("Others", Decimal::from(i * 10)), august())
                    .await
            }));
        }
        for handle in handles {
            handle
                .await
                .expect("upsert task panicked")
                .expect("Failed to upsert budget");
        }

        let budgets_for_month = repo.get_budgets(august()).expect("Failed to list budgets");
        assert_eq!(budgets_for_month.len(), 1);
    }
}
