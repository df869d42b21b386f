// Route path constants - single source of truth for all API paths
//
// The welcome service registers no application routes of its own; the
// only paths it serves belong to the generated API documentation.

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
