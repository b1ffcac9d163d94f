use std::sync::Arc;

use crate::domain::news::NewsWriteRepository;

pub struct NewsCommandService {
    pub(super) write_repo: Arc<dyn NewsWriteRepository>,
}

impl NewsCommandService {
    pub fn new(write_repo: Arc<dyn NewsWriteRepository>) -> Self {
        Self { write_repo }
    }
}
