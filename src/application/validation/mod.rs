pub mod form;
pub mod pagination;
pub mod raw;

pub use form::first_violation;
pub use pagination::{Pagination, parse_pagination_param, validate_pagination_params};
pub use raw::{RequestViolation, validate_create_news_request, validate_edit_news_request};
