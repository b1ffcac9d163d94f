use crate::domain::errors::DomainResult;
use crate::domain::news::entity::{NewNews, NewsUpdate, NewsWithCategories};
use crate::domain::news::value_objects::{CategoryId, NewsId};
use async_trait::async_trait;

#[async_trait]
pub trait NewsWriteRepository: Send + Sync {
    /// Insert the record and its category links in one transaction.
    async fn create(&self, news: NewNews) -> DomainResult<NewsId>;

    /// Apply `update` to an existing record. When `categories` is `Some`, the
    /// record's links are replaced wholesale (an empty list removes them all).
    async fn update(
        &self,
        id: NewsId,
        update: NewsUpdate,
        categories: Option<Vec<CategoryId>>,
    ) -> DomainResult<()>;
}

#[async_trait]
pub trait NewsReadRepository: Send + Sync {
    async fn list_page(&self, limit: i64, offset: i64) -> DomainResult<Vec<NewsWithCategories>>;
}
