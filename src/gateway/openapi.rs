//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8000/docs`
//! - OpenAPI JSON: `http://localhost:8000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::account::{User, UserSummary};
use crate::gateway::handlers::health::HealthResponse;
use crate::gateway::types::CreateUserRequest;
use crate::transfer::service::TransferRequest;

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ledgerd API",
        version = "1.0.0",
        description = "Minimal ledger API: user accounts and balance transfers.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::users::list_users,
        crate::gateway::handlers::users::create_user,
        crate::gateway::handlers::users::get_user,
        crate::gateway::handlers::users::delete_user,
        crate::gateway::handlers::transfer::send_money,
        crate::gateway::handlers::admin::reset_tables,
    ),
    components(
        schemas(User, UserSummary, CreateUserRequest, TransferRequest, HealthResponse)
    ),
    tags(
        (name = "Users", description = "User record CRUD"),
        (name = "Transfer", description = "Balance transfers"),
        (name = "Admin", description = "Table reset"),
        (name = "System", description = "Health and build info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().expect("openapi doc should serialize");
        assert!(json.contains("/api/send/"));
        assert!(json.contains("/api/users/"));
        assert!(json.contains("/api/reset/"));
    }
}
