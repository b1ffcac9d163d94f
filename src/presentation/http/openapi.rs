// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::news::create_news,
        crate::presentation::http::controllers::news::edit_news,
        crate::presentation::http::controllers::news::list_news,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::news::SuccessResponse,
            crate::presentation::http::controllers::news::CreateNewsResponse,
            crate::presentation::http::controllers::news::NewsListResponse,
            crate::application::dto::NewsCreateForm,
            crate::application::dto::NewsEditForm,
            crate::application::dto::NewsWithCategoriesDto
        )
    ),
    tags(
        (name = "News", description = "News management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&BearerAuthScheme),
    info(
        title = "News Service API",
        description = "Create, edit and list news with category tags",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

struct BearerAuthScheme;

impl Modify for BearerAuthScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// Swagger UI at `/swagger` backed by `/openapi.json`.
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger").url("/openapi.json", ApiDoc::openapi()))
}
