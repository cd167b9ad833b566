use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::dto::BeerDto;
use crate::entities::beer;
use crate::errors::ServiceError;
use crate::repositories::BeerStore;

/// Stock operations exposed to the HTTP layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerStockService: Send + Sync {
    /// Registers a new beer. Names are unique; the id in `beer` is ignored.
    async fn create_beer(&self, beer: BeerDto) -> Result<BeerDto, ServiceError>;

    async fn find_by_name(&self, name: &str) -> Result<BeerDto, ServiceError>;

    async fn list_all(&self) -> Result<Vec<BeerDto>, ServiceError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;

    /// Adds `amount` units, never past `max`.
    async fn increment(&self, id: i32, amount: i32) -> Result<BeerDto, ServiceError>;

    /// Removes `amount` units, never below zero.
    async fn decrement(&self, id: i32, amount: i32) -> Result<BeerDto, ServiceError>;
}

/// Service for managing beer stock
#[derive(Clone)]
pub struct BeerService {
    store: Arc<dyn BeerStore>,
}

impl BeerService {
    pub fn new(store: Arc<dyn BeerStore>) -> Self {
        Self { store }
    }

    async fn verify_if_exists(&self, id: i32) -> Result<beer::Model, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Beer with id {} not found", id)))
    }

    async fn store_quantity(
        &self,
        beer: beer::Model,
        quantity: i32,
    ) -> Result<BeerDto, ServiceError> {
        let mut active: beer::ActiveModel = beer.into();
        active.quantity = Set(quantity);
        let saved = self.store.save(active).await?;
        Ok(saved.into())
    }
}

fn ensure_positive_amount(amount: i32) -> Result<(), ServiceError> {
    if amount <= 0 {
        return Err(ServiceError::ValidationError(format!(
            "Quantity must be positive, got {}",
            amount
        )));
    }
    Ok(())
}

#[async_trait]
impl BeerStockService for BeerService {
    #[instrument(skip(self, beer), fields(name = %beer.name))]
    async fn create_beer(&self, beer: BeerDto) -> Result<BeerDto, ServiceError> {
        if self.store.find_by_name(&beer.name).await?.is_some() {
            warn!("Duplicate beer name rejected");
            return Err(ServiceError::AlreadyExists(format!(
                "Beer with name {} already registered",
                beer.name
            )));
        }

        if beer.quantity > beer.max {
            return Err(ServiceError::ValidationError(format!(
                "Quantity {} exceeds max capacity {}",
                beer.quantity, beer.max
            )));
        }

        let saved = self.store.save(beer.into_active_model()).await?;
        info!(id = saved.id, "Beer created");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<BeerDto, ServiceError> {
        self.store
            .find_by_name(name)
            .await?
            .map(BeerDto::from)
            .ok_or_else(|| ServiceError::NotFound(format!("Beer with name {} not found", name)))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<BeerDto>, ServiceError> {
        let beers = self.store.find_all().await?;
        Ok(beers.into_iter().map(BeerDto::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        self.verify_if_exists(id).await?;
        self.store.delete_by_id(id).await?;
        info!("Beer deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment(&self, id: i32, amount: i32) -> Result<BeerDto, ServiceError> {
        ensure_positive_amount(amount)?;
        let beer = self.verify_if_exists(id).await?;

        if amount > beer.free_capacity() {
            return Err(ServiceError::CapacityExceeded(format!(
                "Beer with id {} cannot take {} more units (quantity {}, max {})",
                id, amount, beer.quantity, beer.max
            )));
        }

        let quantity = beer.quantity + amount;
        let updated = self.store_quantity(beer, quantity).await?;
        info!(quantity, "Beer stock incremented");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn decrement(&self, id: i32, amount: i32) -> Result<BeerDto, ServiceError> {
        ensure_positive_amount(amount)?;
        let beer = self.verify_if_exists(id).await?;

        if amount > beer.quantity {
            return Err(ServiceError::InsufficientStock(format!(
                "Beer with id {} has {} units, cannot remove {}",
                id, beer.quantity, amount
            )));
        }

        let quantity = beer.quantity - amount;
        let updated = self.store_quantity(beer, quantity).await?;
        info!(quantity, "Beer stock decremented");
        Ok(updated)
    }
}
