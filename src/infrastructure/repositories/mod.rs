// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_news;

pub use error::map_sqlx;
pub use postgres_news::PostgresNewsRepository;
