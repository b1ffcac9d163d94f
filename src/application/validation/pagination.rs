use crate::application::error::{ApplicationError, ApplicationResult};

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_OFFSET: i64 = 0;
pub const MAX_LIMIT: i64 = 100;

/// A validated `limit`/`offset` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    offset: i64,
}

impl Pagination {
    pub fn limit(self) -> i64 {
        self.limit
    }

    pub fn offset(self) -> i64 {
        self.offset
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

pub fn validate_pagination_params(limit: i64, offset: i64) -> ApplicationResult<Pagination> {
    if limit < 1 {
        return Err(ApplicationError::bad_request(
            "limit must be greater or equal 1",
        ));
    }
    if limit > MAX_LIMIT {
        return Err(ApplicationError::bad_request(format!(
            "limit must be less or equal to {MAX_LIMIT}"
        )));
    }
    if offset < 0 {
        return Err(ApplicationError::bad_request("offset cannot be negative"));
    }

    Ok(Pagination { limit, offset })
}

/// Parse one raw query value. Missing and empty values fall back to `default`.
pub fn parse_pagination_param(
    field: &str,
    raw: Option<&str>,
    default: i64,
) -> ApplicationResult<i64> {
    match raw {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| ApplicationError::bad_request(format!("{field} must be a valid number"))),
    }
}
