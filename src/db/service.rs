// PostgreSQL-backed record store
//
// One pooled connection and one statement per operation.

use crate::db::queries::{DELETE_RECORD, INSERT_RECORD, LIST_RECORDS, UPDATE_RECORD};
use crate::error::AppError;
use crate::models::{Record, RecordPayload};
use crate::records::RecordStore;
use async_trait::async_trait;
use deadpool_postgres::Pool;

pub struct PgRecordStore {
    pool: Pool,
}

impl PgRecordStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn list(&self) -> Result<Vec<Record>, AppError> {
        let client = self.pool.get().await?;
        let rows = client.query(LIST_RECORDS, &[]).await?;

        Ok(rows
            .iter()
            .map(|row| Record {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
            })
            .collect())
    }

    async fn create(&self, payload: &RecordPayload) -> Result<Record, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(INSERT_RECORD, &[&payload.name, &payload.email])
            .await?;

        Ok(payload.clone().into_record(row.get(0)))
    }

    async fn update(&self, id: i64, payload: &RecordPayload) -> Result<u64, AppError> {
        let client = self.pool.get().await?;
        let affected = client
            .execute(UPDATE_RECORD, &[&payload.name, &payload.email, &id])
            .await?;
        Ok(affected)
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let client = self.pool.get().await?;
        let affected = client.execute(DELETE_RECORD, &[&id]).await?;
        Ok(affected)
    }
}
