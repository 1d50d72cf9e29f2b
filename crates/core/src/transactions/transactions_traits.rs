use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use async_trait::async_trait;

/// Trait for transaction repository operations
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Every transaction, ordered by date descending (most recent first).
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    async fn update_transaction(&self, transaction_update: TransactionUpdate)
        -> Result<Transaction>;
    async fn delete_transaction(&self, transaction_id: String) -> Result<()>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    async fn update_transaction(&self, transaction_update: TransactionUpdate)
        -> Result<Transaction>;
    async fn delete_transaction(&self, transaction_id: String) -> Result<()>;
}
