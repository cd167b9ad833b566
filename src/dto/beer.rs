use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::beer::{self, BeerType};

/// Stock record as exchanged over HTTP.
///
/// `id` is ignored on create and always present in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct BeerDto {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Brahma")]
    pub name: String,

    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Ambev")]
    pub brand: String,

    #[validate(range(min = 1, max = 500))]
    #[schema(example = 50)]
    pub max: i32,

    #[validate(range(min = 0, max = 100))]
    #[schema(example = 10)]
    pub quantity: i32,

    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

impl BeerDto {
    /// Active model for an insert; the store assigns the id.
    pub fn into_active_model(self) -> beer::ActiveModel {
        beer::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            brand: Set(self.brand),
            max: Set(self.max),
            quantity: Set(self.quantity),
            beer_type: Set(self.beer_type),
        }
    }
}

impl From<beer::Model> for BeerDto {
    fn from(model: beer::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            brand: model.brand,
            max: model.max,
            quantity: model.quantity,
            beer_type: model.beer_type,
        }
    }
}

/// Body of the increment and decrement endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuantityDto {
    #[validate(range(min = 1, max = 100))]
    #[schema(example = 10)]
    pub quantity: i32,
}
