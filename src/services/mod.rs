// Stock management
pub mod beer_service;

pub use beer_service::{BeerService, BeerStockService};
