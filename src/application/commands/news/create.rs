use super::NewsCommandService;
use crate::{
    application::{dto::NewsCreateForm, error::ApplicationResult},
    domain::news::{CategoryId, NewNews, NewsId},
};

impl NewsCommandService {
    /// Persist a normalized, validated create form and return the new id.
    pub async fn create_news(&self, form: NewsCreateForm) -> ApplicationResult<NewsId> {
        let NewsCreateForm {
            title,
            content,
            categories,
        } = form;

        let categories = CategoryId::list(categories.as_deref().unwrap_or_default())?;
        let news = NewNews {
            title,
            content,
            categories,
        };

        let id = self.write_repo.create(news).await?;
        tracing::debug!(news_id = %id, "news created");
        Ok(id)
    }
}
