// src/presentation/http/controllers/news.rs
use crate::application::{
    dto::{NewsCreateForm, NewsEditForm, NewsWithCategoriesDto},
    error::ApplicationError,
    validation::{
        RequestViolation,
        pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET},
        parse_pagination_param, validate_create_news_request, validate_edit_news_request,
        validate_pagination_params,
    },
};
use crate::domain::news::NewsId;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{BytesRejection, QueryRejection},
    },
    http::StatusCode,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SuccessResponse {
    #[schema(example = true)]
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNewsResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = 1)]
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct NewsListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub news: Vec<NewsWithCategoriesDto>,
}

/// Raw query values; parsed by hand so the error names the parameter.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListNewsParams {
    /// Page size, 1 to 100. Defaults to 10.
    #[param(value_type = Option<i64>, example = 10)]
    pub limit: Option<String>,
    /// Rows to skip. Defaults to 0.
    #[param(value_type = Option<i64>, example = 0)]
    pub offset: Option<String>,
}

fn reject_body(violation: RequestViolation) -> HttpError {
    HttpError::from_error(ApplicationError::validation(violation.to_string()))
}

fn read_body(body: Result<Bytes, BytesRejection>) -> HttpResult<Bytes> {
    body.map_err(|rejection| HttpError::new(rejection.status(), rejection.body_text()))
}

fn decode_form<T: DeserializeOwned>(body: &[u8]) -> HttpResult<T> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "typed body decoding failed");
        HttpError::from_error(ApplicationError::bad_request(
            "Failed to parse request body",
        ))
    })
}

fn parse_news_id(raw: &str) -> HttpResult<NewsId> {
    raw.parse::<u64>()
        .ok()
        .and_then(|id| i64::try_from(id).ok())
        .map(NewsId::from)
        .ok_or_else(|| HttpError::from_error(ApplicationError::bad_request("Invalid ID format")))
}

/// Create a news record with optional category ids.
#[utoipa::path(
    post,
    path = "/create",
    request_body = NewsCreateForm,
    responses(
        (status = 201, description = "News created", body = CreateNewsResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn create_news(
    Extension(state): Extension<HttpState>,
    body: Result<Bytes, BytesRejection>,
) -> HttpResult<(StatusCode, Json<CreateNewsResponse>)> {
    let body = read_body(body)?;
    validate_create_news_request(&body).map_err(reject_body)?;

    let mut form: NewsCreateForm = decode_form(&body)?;
    form.normalize();
    form.ensure_valid().into_http()?;

    let id = state
        .services
        .news_commands
        .create_news(form)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(CreateNewsResponse {
            success: true,
            id: id.into(),
        }),
    ))
}

/// Update any subset of title, content and categories.
///
/// `Categories` replaces the whole list; `[]` removes every link.
#[utoipa::path(
    post,
    path = "/edit/{id}",
    params(("id" = i64, Path, description = "News id")),
    request_body = NewsEditForm,
    responses(
        (status = 200, description = "News updated", body = SuccessResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "News not found", body = ErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn edit_news(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> HttpResult<Json<SuccessResponse>> {
    let id = parse_news_id(&raw_id)?;
    let body = read_body(body)?;

    validate_edit_news_request(&body).map_err(reject_body)?;

    let mut form: NewsEditForm = decode_form(&body)?;
    form.normalize();
    form.ensure_valid().into_http()?;

    state
        .services
        .news_commands
        .edit_news(id, form)
        .await
        .into_http()?;

    Ok(Json(SuccessResponse { success: true }))
}

/// List news with their category ids.
#[utoipa::path(
    get,
    path = "/list",
    params(ListNewsParams),
    responses(
        (status = 200, description = "Page of news", body = NewsListResponse),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    params: Result<Query<ListNewsParams>, QueryRejection>,
) -> HttpResult<Json<NewsListResponse>> {
    let Query(params) = params.map_err(|rejection| {
        HttpError::from_error(ApplicationError::bad_request(rejection.body_text()))
    })?;

    let limit =
        parse_pagination_param("limit", params.limit.as_deref(), DEFAULT_LIMIT).into_http()?;
    let offset =
        parse_pagination_param("offset", params.offset.as_deref(), DEFAULT_OFFSET).into_http()?;
    let page = validate_pagination_params(limit, offset).into_http()?;

    let news = state
        .services
        .news_queries
        .list_news(page)
        .await
        .into_http()?;

    Ok(Json(NewsListResponse {
        success: true,
        news,
    }))
}
