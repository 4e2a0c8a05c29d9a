//! OpenAPI documentation served under `/swagger-ui`.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::auth::register_handler,
        crate::api::handlers::auth::login_handler,
        crate::api::handlers::expenses::list_expenses_handler,
        crate::api::handlers::expenses::create_expense_handler,
        crate::api::handlers::expenses::update_expense_handler,
        crate::api::handlers::expenses::delete_expense_handler,
    ),
    components(schemas(
        crate::api::handlers::MessageResponse,
        crate::api::handlers::auth::LoginResponse,
        crate::api::handlers::expenses::CreateExpenseBody,
        crate::api::handlers::expenses::UpdateExpenseBody,
        crate::api::handlers::expenses::ExpenseResponse,
        crate::auth::validation::RegisterRequest,
        crate::auth::validation::LoginRequest,
    )),
    modifiers(&BearerTokenSecurity),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "expenses", description = "Ownership-scoped expense records"),
        (name = "health", description = "Service health")
    ),
    info(
        title = "Spendlog API",
        description = "Personal expense tracking API with per-user bearer-token authentication"
    )
)]
pub struct ApiDoc;

struct BearerTokenSecurity;

impl Modify for BearerTokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build(),
                ),
            );
        }
    }
}

pub fn docs_router() -> Router {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_includes_expense_paths() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths;
        assert!(paths.contains_key("/api/auth/register"));
        assert!(paths.contains_key("/api/auth/login"));
        assert!(paths.contains_key("/api/expenses"));
        assert!(paths.contains_key("/api/expenses/{id}"));
    }
}
