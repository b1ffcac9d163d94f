use crate::domain::errors::DomainError;

const CNT_NEWS_CATEGORY_NEWS: &str = "news_categories_news_id_fkey";
const CNT_NEWS_CATEGORY_POSITIVE: &str = "news_categories_category_id_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("News not found".into()),
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_NEWS_CATEGORY_NEWS => DomainError::NotFound("News not found".into()),
                    CNT_NEWS_CATEGORY_POSITIVE => {
                        DomainError::Validation("category id must be positive".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rows_map_to_not_found() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::NotFound(msg) if msg == "News not found"
        ));
    }

    #[test]
    fn driver_failures_map_to_persistence() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
    }
}
