// src/application/commands/news/edit.rs
use super::NewsCommandService;
use crate::{
    application::{dto::NewsEditForm, error::ApplicationResult},
    domain::news::{CategoryId, NewsId, NewsUpdate},
};

/// Split an edit form into the scalar update set and the optional category
/// replacement list. Omitted fields never appear in the update.
pub fn build_news_update(form: NewsEditForm) -> (NewsUpdate, Option<Vec<i64>>) {
    let NewsEditForm {
        title,
        content,
        categories,
    } = form;

    let mut update = NewsUpdate::new();
    if let Some(title) = title {
        update = update.with_title(title);
    }
    if let Some(content) = content {
        update = update.with_content(content);
    }

    (update, categories)
}

impl NewsCommandService {
    /// Apply a normalized, validated edit form to news `id`.
    ///
    /// An empty form is a no-op and does not reach the store.
    pub async fn edit_news(&self, id: NewsId, form: NewsEditForm) -> ApplicationResult<()> {
        let (update, categories) = build_news_update(form);

        if update.is_empty() && categories.is_none() {
            tracing::debug!(news_id = %id, "edit carries no fields, skipping store");
            return Ok(());
        }

        let categories = categories
            .as_deref()
            .map(CategoryId::list)
            .transpose()?;

        self.write_repo.update(id, update, categories).await?;
        Ok(())
    }
}
