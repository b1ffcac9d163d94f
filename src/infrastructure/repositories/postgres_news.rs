// src/infrastructure/repositories/postgres_news.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::{
    CategoryId, NewNews, News, NewsId, NewsReadRepository, NewsUpdate, NewsWithCategories,
    NewsWriteRepository,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};

const SELECT_NEWS_PAGE: &str = "SELECT n.id, n.title, n.content,
        COALESCE(
            array_agg(nc.category_id ORDER BY nc.category_id) FILTER (WHERE nc.category_id IS NOT NULL),
            '{}'::BIGINT[]
        ) AS categories
     FROM news n
     LEFT JOIN news_categories nc ON nc.news_id = n.id
     GROUP BY n.id
     ORDER BY n.id
     LIMIT $1 OFFSET $2";

/// `sqlx`-backed store for news records and their category links.
///
/// Writes run inside a single transaction which rolls back when dropped
/// without a commit.
#[derive(Clone)]
pub struct PostgresNewsRepository {
    pool: PgPool,
}

impl PostgresNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsWithCategoriesRow {
    id: i64,
    title: String,
    content: String,
    categories: Vec<i64>,
}

impl From<NewsWithCategoriesRow> for NewsWithCategories {
    fn from(row: NewsWithCategoriesRow) -> Self {
        Self {
            news: News {
                id: NewsId(row.id),
                title: row.title,
                content: row.content,
            },
            categories: row.categories,
        }
    }
}

/// Log a failed statement for `operation` and convert it to a domain error.
fn failed(operation: &'static str, context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |err| {
        tracing::error!(operation, error = %err, "{context}");
        map_sqlx(err)
    }
}

async fn insert_categories(
    conn: &mut PgConnection,
    news_id: i64,
    categories: &[CategoryId],
) -> DomainResult<()> {
    const OP: &str = "repository.news.insert_categories";

    if categories.is_empty() {
        return Ok(());
    }

    let ids: Vec<i64> = categories.iter().copied().map(i64::from).collect();
    sqlx::query(
        "INSERT INTO news_categories (news_id, category_id)
         SELECT $1, UNNEST($2::BIGINT[])
         ON CONFLICT DO NOTHING",
    )
    .bind(news_id)
    .bind(&ids)
    .execute(&mut *conn)
    .await
    .map_err(failed(OP, "failed to insert news categories"))?;

    tracing::debug!(operation = OP, news_id, categories = ids.len(), "categories inserted");
    Ok(())
}

#[async_trait]
impl NewsWriteRepository for PostgresNewsRepository {
    async fn create(&self, news: NewNews) -> DomainResult<NewsId> {
        const OP: &str = "repository.news.create";

        let NewNews {
            title,
            content,
            categories,
        } = news;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(failed(OP, "failed to begin transaction"))?;

        let id: i64 =
            sqlx::query_scalar("INSERT INTO news (title, content) VALUES ($1, $2) RETURNING id")
                .bind(&title)
                .bind(&content)
                .fetch_one(&mut *tx)
                .await
                .map_err(failed(OP, "failed to insert news"))?;

        insert_categories(&mut tx, id, &categories).await?;

        tx.commit()
            .await
            .map_err(failed(OP, "failed to commit transaction"))?;

        tracing::info!(operation = OP, news_id = id, "news created");
        Ok(NewsId(id))
    }

    async fn update(
        &self,
        id: NewsId,
        update: NewsUpdate,
        categories: Option<Vec<CategoryId>>,
    ) -> DomainResult<()> {
        const OP: &str = "repository.news.update";
        let news_id = i64::from(id);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(failed(OP, "failed to begin transaction"))?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM news WHERE id = $1 FOR UPDATE")
                .bind(news_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(failed(OP, "failed to find news"))?;

        if existing.is_none() {
            tracing::warn!(operation = OP, news_id, "news not found");
            return Err(DomainError::NotFound("News not found".into()));
        }

        if !update.is_empty() {
            let NewsUpdate { title, content } = update;
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE news SET ");
            {
                let mut columns = builder.separated(", ");
                if let Some(title) = title {
                    columns.push("title = ");
                    columns.push_bind_unseparated(title);
                }
                if let Some(content) = content {
                    columns.push("content = ");
                    columns.push_bind_unseparated(content);
                }
            }
            builder.push(" WHERE id = ");
            builder.push_bind(news_id);

            builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(failed(OP, "failed to update news"))?;
        }

        if let Some(categories) = categories {
            sqlx::query("DELETE FROM news_categories WHERE news_id = $1")
                .bind(news_id)
                .execute(&mut *tx)
                .await
                .map_err(failed(OP, "failed to delete old categories"))?;

            insert_categories(&mut tx, news_id, &categories).await?;
        }

        tx.commit()
            .await
            .map_err(failed(OP, "failed to commit transaction"))?;

        tracing::info!(operation = OP, news_id, "news updated");
        Ok(())
    }
}

#[async_trait]
impl NewsReadRepository for PostgresNewsRepository {
    async fn list_page(&self, limit: i64, offset: i64) -> DomainResult<Vec<NewsWithCategories>> {
        const OP: &str = "repository.news.list_page";

        let rows = sqlx::query_as::<_, NewsWithCategoriesRow>(SELECT_NEWS_PAGE)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!(operation = OP, limit, offset, error = %err, "failed to select news");
                map_sqlx(err)
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
