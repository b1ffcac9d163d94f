// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::news::NewsCommandService, ports::security::AccessTokenVerifier,
        queries::news::NewsQueryService,
    },
    domain::news::{NewsReadRepository, NewsWriteRepository},
};

pub struct ApplicationServices {
    pub news_commands: Arc<NewsCommandService>,
    pub news_queries: Arc<NewsQueryService>,
    token_verifier: Arc<dyn AccessTokenVerifier>,
}

impl ApplicationServices {
    pub fn new(
        news_write_repo: Arc<dyn NewsWriteRepository>,
        news_read_repo: Arc<dyn NewsReadRepository>,
        token_verifier: Arc<dyn AccessTokenVerifier>,
    ) -> Self {
        let news_commands = Arc::new(NewsCommandService::new(Arc::clone(&news_write_repo)));
        let news_queries = Arc::new(NewsQueryService::new(Arc::clone(&news_read_repo)));

        Self {
            news_commands,
            news_queries,
            token_verifier,
        }
    }

    pub fn token_verifier(&self) -> Arc<dyn AccessTokenVerifier> {
        Arc::clone(&self.token_verifier)
    }
}
