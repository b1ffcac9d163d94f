// src/domain/news/entity.rs
use crate::domain::news::value_objects::{CategoryId, NewsId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct News {
    pub id: NewsId,
    pub title: String,
    pub content: String,
}

/// A news record together with the ids of every category linked to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsWithCategories {
    pub news: News,
    pub categories: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNews {
    pub title: String,
    pub content: String,
    pub categories: Vec<CategoryId>,
}

/// Sparse set of scalar columns to overwrite during an edit.
///
/// A `None` field is left untouched in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NewsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn apply_to(&self, news: &mut News) {
        if let Some(title) = &self.title {
            news.title.clone_from(title);
        }
        if let Some(content) = &self.content {
            news.content.clone_from(content);
        }
    }
}
