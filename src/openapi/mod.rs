use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Beer Stock API",
        version = "1.0.0",
        description = r#"
# Beer Stock API

Inventory of beer stock records: register a beer, look it up by name, list
the whole stock, delete a record, and move its quantity up or down within
`0..=max`.

## Error Handling

Failures carry a JSON body and the status code conveys the failure kind:

```json
{
  "error": "Not Found",
  "message": "Not found: Beer with name Brahma not found",
  "request_id": "3f0c1c1e-6d1e-4c8e-9b59-1f1f0c1c1e6d",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "beers", description = "Beer stock endpoints")
    ),
    paths(
        crate::handlers::beers::create_beer,
        crate::handlers::beers::find_beer_by_name,
        crate::handlers::beers::list_beers,
        crate::handlers::beers::delete_beer,
        crate::handlers::beers::increment_beer,
        crate::handlers::beers::decrement_beer,
    ),
    components(
        schemas(
            crate::dto::BeerDto,
            crate::dto::QuantityDto,
            crate::entities::beer::BeerType,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
