use spendtrack_core::transactions::{
    NewTransaction, Transaction, TransactionRepositoryTrait, TransactionUpdate,
};
use spendtrack_core::Result;

use super::model::TransactionDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::transactions;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct TransactionRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        TransactionRepository { pool, writer }
    }

    fn get_transactions_impl(&self) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let transactions_db = transactions::table
            .select(TransactionDB::as_select())
            .order((transactions::date.desc(), transactions::created_at.desc()))
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(transactions_db.into_iter().map(Transaction::from).collect())
    }

    fn get_transaction_impl(&self, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        let transaction_db = transactions::table
            .find(transaction_id)
            .select(TransactionDB::as_select())
            .first::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Transaction::from(transaction_db))
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.get_transactions_impl()
    }

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.get_transaction_impl(transaction_id)
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;
        let transaction_db_owned: TransactionDB = new_transaction.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let mut transaction_to_insert = transaction_db_owned;
                transaction_to_insert.id = Uuid::new_v4().to_string();
                let inserted = diesel::insert_into(transactions::table)
                    .values(&transaction_to_insert)
                    .get_result::<TransactionDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Transaction::from(inserted))
            })
            .await
    }

    async fn update_transaction(
        &self,
        transaction_update: TransactionUpdate,
    ) -> Result<Transaction> {
        transaction_update.validate()?;
        let transaction_db_owned: TransactionDB = transaction_update.into();
        let transaction_id_owned = transaction_db_owned.id.clone();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let mut transaction_to_update = transaction_db_owned;
                let existing = transactions::table
                    .find(&transaction_id_owned)
                    .select(TransactionDB::as_select())
                    .first::<TransactionDB>(conn)
                    .map_err(StorageError::from)?;

                // created_at survives edits.
                transaction_to_update.created_at = existing.created_at;

                let updated = diesel::update(transactions::table.find(&transaction_to_update.id))
                    .set(&transaction_to_update)
                    .get_result::<TransactionDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Transaction::from(updated))
            })
            .await
    }

    async fn delete_transaction(&self, transaction_id: String) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                // Look up first so a missing id surfaces as NotFound.
                transactions::table
                    .find(&transaction_id)
                    .select(TransactionDB::as_select())
                    .first::<TransactionDB>(conn)
                    .map_err(StorageError::from)?;
                diesel::delete(transactions::table.filter(transactions::id.eq(&transaction_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
