use super::NewsQueryService;
use crate::application::{
    dto::NewsWithCategoriesDto, error::ApplicationResult, validation::Pagination,
};

impl NewsQueryService {
    pub async fn list_news(&self, page: Pagination) -> ApplicationResult<Vec<NewsWithCategoriesDto>> {
        let records = self
            .read_repo
            .list_page(page.limit(), page.offset())
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
