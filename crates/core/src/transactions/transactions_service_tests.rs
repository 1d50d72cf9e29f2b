//! Tests for the transaction service.

#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result};
    use crate::transactions::{
        NewTransaction, Transaction, TransactionRepositoryTrait, TransactionService,
        TransactionServiceTrait, TransactionUpdate,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::str::FromStr;
    use std::sync::{Arc, RwLock};
    use uuid::Uuid;

    // ============== Mock Repository ==============

    struct MockTransactionRepository {
        transactions: RwLock<Vec<Transaction>>,
    }

    impl MockTransactionRepository {
        fn new(transactions: Vec<Transaction>) -> Self {
            Self {
                transactions: RwLock::new(transactions),
            }
        }

        fn len(&self) -> usize {
            self.transactions.read().unwrap().len()
        }
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn get_transactions(&self) -> Result<Vec<Transaction>> {
            let mut all = self.transactions.read().unwrap().clone();
            all.sort_by(|a, b| b.date.cmp(&a.date));
            Ok(all)
        }

        fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
            self.transactions
                .read()
                .unwrap()
                .iter()
                .find(|t| t.id == transaction_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(format!(
                        "Transaction {}",
                        transaction_id
                    )))
                })
        }

        async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
            let transaction = Transaction {
                id: Uuid::new_v4().to_string(),
                title: new_transaction.title,
                amount: new_transaction.amount,
                category: FromStr::from_str(&new_transaction.category).unwrap(),
                date: NaiveDate::parse_from_str(&new_transaction.date, "%Y-%m-%d").unwrap(),
                kind: FromStr::from_str(&new_transaction.kind).unwrap(),
            };
            self.transactions.write().unwrap().push(transaction.clone());
            Ok(transaction)
        }

        async fn update_transaction(
            &self,
            transaction_update: TransactionUpdate,
        ) -> Result<Transaction> {
            let mut transactions = self.transactions.write().unwrap();
            let existing = transactions
                .iter_mut()
                .find(|t| t.id == transaction_update.id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(format!(
                        "Transaction {}",
                        transaction_update.id
                    )))
                })?;
            existing.title = transaction_update.title;
            existing.amount = transaction_update.amount;
            existing.category = FromStr::from_str(&transaction_update.category).unwrap();
            existing.date =
                NaiveDate::parse_from_str(&transaction_update.date, "%Y-%m-%d").unwrap();
            existing.kind = FromStr::from_str(&transaction_update.kind).unwrap();
            Ok(existing.clone())
        }

        async fn delete_transaction(&self, transaction_id: String) -> Result<()> {
            let mut transactions = self.transactions.write().unwrap();
            let before = transactions.len();
            transactions.retain(|t| t.id != transaction_id);
            if transactions.len() == before {
                return Err(Error::Database(DatabaseError::NotFound(format!(
                    "Transaction {}",
                    transaction_id
                ))));
            }
            Ok(())
        }
    }

    fn make_service(
        transactions: Vec<Transaction>,
    ) -> (TransactionService, Arc<MockTransactionRepository>) {
        let repository = Arc::new(MockTransactionRepository::new(transactions));
        (TransactionService::new(repository.clone()), repository)
    }

    fn expense(id: &str, date: NaiveDate) -> Transaction {
        Transaction {
            id: id.to_string(),
            title: format!("expense {}", id),
            amount: dec!(10),
            category: FromStr::from_str("Food").unwrap(),
            date,
            kind: FromStr::from_str("expense").unwrap(),
        }
    }

    fn new_expense(title: &str) -> NewTransaction {
        NewTransaction {
            title: title.to_string(),
            amount: dec!(25.00),
            category: "Shopping".to_string(),
            date: "2025-08-10".to_string(),
            kind: "expense".to_string(),
        }
    }

    // ============== Tests ==============

    #[tokio::test]
    async fn test_create_assigns_id_and_stores() {
        let (service, repository) = make_service(vec![]);

        let created = service.create_transaction(new_expense("Socks")).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.title, "Socks");
        assert_eq!(created.amount, dec!(25.00));
        assert_eq!(repository.len(), 1);

        let fetched = service.get_transaction(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_storing() {
        let (service, repository) = make_service(vec![]);

        let mut input = new_expense("Socks");
        input.category = "NotACategory".to_string();
        let result = service.create_transaction(input).await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(repository.len(), 0);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let (service, _) = make_service(vec![]);

        let update = TransactionUpdate {
            id: "ghost".to_string(),
            title: "Rent".to_string(),
            amount: dec!(900),
            category: "Bills".to_string(),
            date: "2025-08-01".to_string(),
            kind: "expense".to_string(),
        };
        let result = service.update_transaction(update).await;

        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
        let (service, _) = make_service(vec![expense("t-1", date)]);

        let update = TransactionUpdate {
            id: "t-1".to_string(),
            title: "Corrected title".to_string(),
            amount: dec!(42),
            category: "Entertainment".to_string(),
            date: "2025-08-06".to_string(),
            kind: "expense".to_string(),
        };
        let updated = service.update_transaction(update).await.unwrap();

        assert_eq!(updated.id, "t-1");
        assert_eq!(updated.title, "Corrected title");
        assert_eq!(updated.amount, dec!(42));
        assert_eq!(updated.date, NaiveDate::from_ymd_opt(2025, 8, 6).unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found() {
        let (service, _) = make_service(vec![]);
        let result = service.delete_transaction("ghost".to_string()).await;
        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
        let (service, repository) = make_service(vec![expense("t-1", date)]);

        service.delete_transaction("t-1".to_string()).await.unwrap();

        assert_eq!(repository.len(), 0);
        assert!(service.get_transaction("t-1").is_err());
    }

    #[tokio::test]
    async fn test_get_transactions_is_date_descending() {
        let older = expense("old", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        let newer = expense("new", NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
        let (service, _) = make_service(vec![older, newer]);

        let all = service.get_transactions().unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "new");
        assert_eq!(all[1].id, "old");
    }
}
