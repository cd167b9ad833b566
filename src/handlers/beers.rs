use crate::dto::{BeerDto, QuantityDto};
use crate::errors::ApiError;
use crate::handlers::common::{
    created_response, json_body, map_service_error, no_content_response, path_param,
    success_response, validate_input,
};
use crate::services::BeerStockService;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Json, Path, State},
    response::Response,
    routing::{get, patch},
    Router,
};
use std::sync::Arc;
use tracing::debug;

// Trait for beer handler state that provides access to the stock service
pub trait BeerHandlerState: Clone + Send + Sync + 'static {
    fn beer_service(&self) -> Arc<dyn BeerStockService>;
}

/// Create the beer stock router, mounted under `/api/v1/beers`
pub fn beer_routes<S>() -> Router<S>
where
    S: BeerHandlerState,
{
    // GET takes a name and DELETE an id on the same segment, so both share one
    // parameter name.
    Router::new()
        .route("/", get(list_beers::<S>).post(create_beer::<S>))
        .route("/:beer", get(find_beer_by_name::<S>).delete(delete_beer::<S>))
        .route("/:beer/increment", patch(increment_beer::<S>))
        .route("/:beer/decrement", patch(decrement_beer::<S>))
}

/// Register a new beer
#[utoipa::path(
    post,
    path = "/api/v1/beers",
    request_body = BeerDto,
    responses(
        (status = 201, description = "Beer created", body = BeerDto,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 409, description = "Beer name already registered", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "beers"
)]
pub async fn create_beer<S>(
    State(state): State<S>,
    payload: Result<Json<BeerDto>, JsonRejection>,
) -> Result<Response, ApiError>
where
    S: BeerHandlerState,
{
    let beer = json_body(payload)?;
    validate_input(&beer)?;

    let created = state
        .beer_service()
        .create_beer(beer)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(created))
}

/// Look a beer up by its unique name
#[utoipa::path(
    get,
    path = "/api/v1/beers/{name}",
    params(
        ("name" = String, Path, description = "Beer name")
    ),
    responses(
        (status = 200, description = "Beer returned", body = BeerDto),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "beers"
)]
pub async fn find_beer_by_name<S>(
    State(state): State<S>,
    Path(name): Path<String>,
) -> Result<Response, ApiError>
where
    S: BeerHandlerState,
{
    let beer = state
        .beer_service()
        .find_by_name(&name)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(beer))
}

/// List every beer in stock
#[utoipa::path(
    get,
    path = "/api/v1/beers",
    responses(
        (status = 200, description = "All beers, ascending by id", body = [BeerDto]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "beers"
)]
pub async fn list_beers<S>(State(state): State<S>) -> Result<Response, ApiError>
where
    S: BeerHandlerState,
{
    let beers = state
        .beer_service()
        .list_all()
        .await
        .map_err(map_service_error)?;

    debug!(count = beers.len(), "listed beers");
    Ok(success_response(beers))
}

/// Delete a beer by id
#[utoipa::path(
    delete,
    path = "/api/v1/beers/{id}",
    params(
        ("id" = i32, Path, description = "Beer id")
    ),
    responses(
        (status = 204, description = "Beer deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "beers"
)]
pub async fn delete_beer<S>(
    State(state): State<S>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ApiError>
where
    S: BeerHandlerState,
{
    let id = path_param(id)?;

    state
        .beer_service()
        .delete_by_id(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

/// Add units to a beer's stock
#[utoipa::path(
    patch,
    path = "/api/v1/beers/{id}/increment",
    params(
        ("id" = i32, Path, description = "Beer id")
    ),
    request_body = QuantityDto,
    responses(
        (status = 200, description = "Stock incremented", body = BeerDto),
        (status = 400, description = "Invalid quantity or max capacity exceeded", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "beers"
)]
pub async fn increment_beer<S>(
    State(state): State<S>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<QuantityDto>, JsonRejection>,
) -> Result<Response, ApiError>
where
    S: BeerHandlerState,
{
    let id = path_param(id)?;
    let body = json_body(payload)?;
    validate_input(&body)?;

    let beer = state
        .beer_service()
        .increment(id, body.quantity)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(beer))
}

/// Remove units from a beer's stock
#[utoipa::path(
    patch,
    path = "/api/v1/beers/{id}/decrement",
    params(
        ("id" = i32, Path, description = "Beer id")
    ),
    request_body = QuantityDto,
    responses(
        (status = 200, description = "Stock decremented", body = BeerDto),
        (status = 400, description = "Invalid quantity or insufficient stock", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "beers"
)]
pub async fn decrement_beer<S>(
    State(state): State<S>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<QuantityDto>, JsonRejection>,
) -> Result<Response, ApiError>
where
    S: BeerHandlerState,
{
    let id = path_param(id)?;
    let body = json_body(payload)?;
    validate_input(&body)?;

    let beer = state
        .beer_service()
        .decrement(id, body.quantity)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(beer))
}
