// src/application/commands/news/mod.rs
mod create;
mod edit;
mod service;

pub use edit::build_news_update;
pub use service::NewsCommandService;
