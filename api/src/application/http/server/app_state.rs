use std::sync::Arc;

use bagcheck_core::application::BagcheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BagcheckService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BagcheckService) -> Self {
        Self { args, service }
    }
}
