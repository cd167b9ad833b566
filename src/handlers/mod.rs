pub mod beers;
pub mod common;

pub use beers::{beer_routes, BeerHandlerState};
