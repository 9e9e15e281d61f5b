// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::{controllers::articles::ArticlesController, views::Views};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub views: Arc<Views>,
}

impl HttpState {
    pub fn controller(&self) -> ArticlesController<'_> {
        ArticlesController::new(&self.services)
    }
}
