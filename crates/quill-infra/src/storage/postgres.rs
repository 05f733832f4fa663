//! PostgreSQL document store. Each collection is one `collections` row whose
//! `records` column holds the whole array.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, Set};
use serde_json::Value;

use quill_core::StoreError;
use quill_core::ports::{CollectionName, DocumentStore, Snapshot};

use super::entity::{self, Column, Entity as Collections};

pub struct PostgresStore {
    db: DbConn,
}

impl PostgresStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Insert an empty row for every collection that has none yet.
    pub async fn ensure_collections(&self) -> Result<(), StoreError> {
        for collection in CollectionName::ALL {
            let row = entity::ActiveModel {
                name: Set(collection.as_str().to_string()),
                records: Set(Value::Array(Vec::new())),
                version: Set(0),
                updated_at: Set(Utc::now().into()),
            };
            let inserted = Collections::insert(row)
                .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
                .exec_without_returning(&self.db)
                .await
                .map_err(backend)?;
            if inserted > 0 {
                tracing::info!(collection = %collection, "Created empty collection row");
            }
        }
        Ok(())
    }
}

fn backend(e: DbErr) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[async_trait]
impl DocumentStore for PostgresStore {
    async fn load(&self, collection: CollectionName) -> Result<Snapshot, StoreError> {
        let row = Collections::find_by_id(collection.as_str().to_string())
            .one(&self.db)
            .await
            .map_err(backend)?
            .ok_or_else(|| StoreError::Missing(collection.to_string()))?;

        let Value::Array(records) = row.records else {
            return Err(StoreError::Malformed {
                collection: collection.to_string(),
                reason: "records column is not an array".into(),
            });
        };

        let version = u64::try_from(row.version).map_err(|e| StoreError::Malformed {
            collection: collection.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Snapshot { records, version })
    }

    async fn save(
        &self,
        collection: CollectionName,
        records: Vec<Value>,
        expected_version: u64,
    ) -> Result<u64, StoreError> {
        let expected = i64::try_from(expected_version)
            .map_err(|_| StoreError::VersionConflict(collection.to_string()))?;

        let result = Collections::update_many()
            .col_expr(Column::Records, Expr::value(Value::Array(records)))
            .col_expr(Column::Version, Expr::value(expected + 1))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Name.eq(collection.as_str()))
            .filter(Column::Version.eq(expected))
            .exec(&self.db)
            .await
            .map_err(backend)?;

        if result.rows_affected == 0 {
            return Err(StoreError::VersionConflict(collection.to_string()));
        }
        Ok(expected_version + 1)
    }
}
