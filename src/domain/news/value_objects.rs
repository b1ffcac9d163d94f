use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Store-generated identity of a news record.
///
/// Path parameters are converted without a positivity check: an id that the
/// store never generated simply resolves to "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewsId(pub i64);

impl From<i64> for NewsId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<NewsId> for i64 {
    fn from(value: NewsId) -> Self {
        value.0
    }
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(format!(
                "category id must be positive, got {id}"
            )))
        } else {
            Ok(Self(id))
        }
    }

    /// Validate a whole replacement list, failing on the first bad id.
    pub fn list(ids: &[i64]) -> DomainResult<Vec<Self>> {
        ids.iter().copied().map(Self::new).collect()
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}
