use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};
use std::sync::Arc;
use tracing::debug;

use crate::entities::beer::{self, ActiveModel as BeerActiveModel, Column, Entity as Beer};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Persistence boundary for stock records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<beer::Model>, ServiceError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<beer::Model>, ServiceError>;

    /// All records, ascending by id.
    async fn find_all(&self) -> Result<Vec<beer::Model>, ServiceError>;

    /// Inserts when `id` is not set, updates otherwise.
    async fn save(&self, beer: BeerActiveModel) -> Result<beer::Model, ServiceError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}

/// `BeerStore` backed by a sea-orm connection pool
#[derive(Debug, Clone)]
pub struct BeerRepository {
    base: BaseRepository,
}

impl BeerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn map_write_error(err: DbErr) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            ServiceError::AlreadyExists(format!("Beer already registered: {}", detail))
        }
        _ => ServiceError::DatabaseError(err),
    }
}

#[async_trait]
impl BeerStore for BeerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<beer::Model>, ServiceError> {
        Beer::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<beer::Model>, ServiceError> {
        Beer::find()
            .filter(Column::Name.eq(name))
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    async fn find_all(&self) -> Result<Vec<beer::Model>, ServiceError> {
        Beer::find()
            .order_by_asc(Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    async fn save(&self, beer: BeerActiveModel) -> Result<beer::Model, ServiceError> {
        let db = self.base.get_db();
        if beer.id.is_not_set() {
            debug!("inserting beer");
            beer.insert(db).await.map_err(map_write_error)
        } else {
            debug!(id = ?beer.id, "updating beer");
            beer.update(db).await.map_err(map_write_error)
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let result = Beer::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)?;
        debug!(id, rows_affected = result.rows_affected, "deleted beer");
        Ok(())
    }
}
