use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use spendtrack_core::errors::Result;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job: a closure run on the actor's dedicated connection. The return
// type is erased to Box<dyn Any + Send> so a single channel can carry jobs
// with different result types.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

/// Handle for sending write jobs to the single-writer actor.
///
/// SQLite allows only one writer at a time; funneling all writes through one
/// actor-owned connection serializes them without holding a lock across await
/// points.
#[derive(Clone)]
pub struct WriteHandle {
    #[allow(clippy::type_complexity)]
    tx: mpsc::Sender<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>,
}

impl WriteHandle {
    /// Runs `job` on the writer's connection inside an immediate transaction
    /// and returns its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("Writer actor's receiving channel was closed, indicating the actor stopped.");

        ret_rx
            .await
            .expect("Writer actor dropped the reply sender without sending a result.")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("Failed to downcast writer actor result."))
            })
    }
}

/// Spawns the writer actor. It takes one connection from the pool and keeps it
/// for its whole lifetime, processing queued jobs one at a time.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the DB pool for the writer actor.");

        while let Some((job, reply_tx)) = rx.recv().await {
            // immediate_transaction takes the write lock up front, so a busy
            // database surfaces here instead of mid-transaction.
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            // The requester may have given up; nothing to do then.
            let _ = reply_tx.send(result);
        }
        // All handles dropped: the actor exits with them.
    });

    WriteHandle { tx }
}
