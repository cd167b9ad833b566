pub mod beer;

pub use beer::{BeerDto, QuantityDto};
