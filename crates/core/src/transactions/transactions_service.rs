use std::sync::Arc;

use crate::errors::Result;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use async_trait::async_trait;

/// Service for transaction CRUD.
///
/// Validates input models, then delegates to the repository; every mutation
/// is a single storage round-trip.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        TransactionService {
            transaction_repository,
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.transaction_repository.get_transactions()
    }

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.transaction_repository.get_transaction(transaction_id)
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;
        let created = self
            .transaction_repository
            .create_transaction(new_transaction)
            .await?;
        log::debug!("Created transaction {}", created.id);
        Ok(created)
    }

    async fn update_transaction(
        &self,
        transaction_update: TransactionUpdate,
    ) -> Result<Transaction> {
        transaction_update.validate()?;
        let updated = self
            .transaction_repository
            .update_transaction(transaction_update)
            .await?;
        log::debug!("Updated transaction {}", updated.id);
        Ok(updated)
    }

    async fn delete_transaction(&self, transaction_id: String) -> Result<()> {
        self.transaction_repository
            .delete_transaction(transaction_id.clone())
            .await?;
        log::debug!("Deleted transaction {}", transaction_id);
        Ok(())
    }
}
