use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{article::ArticleWriteRepository, validation::FieldLimits},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) limits: FieldLimits,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        clock: Arc<dyn Clock>,
        limits: FieldLimits,
    ) -> Self {
        Self {
            write_repo,
            clock,
            limits,
        }
    }
}
