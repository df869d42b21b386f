use utoipa::OpenApi;

/// OpenAPI documentation
///
/// Describes every route registered in this service. No routes are
/// defined yet, so the generated document carries only the info block.
#[derive(OpenApi)]
#[openapi(info(
    title = "Welcome Service",
    description = "Welcome services description",
    version = "2.0"
))]
pub struct ApiDoc;
