use std::sync::Arc;

use prbot_core::config::Config;
use prbot_core::dispatch::Dispatcher;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(config: Config) -> prbot_core::Result<Self> {
        let dispatcher = Dispatcher::new(Arc::new(config))?;
        Ok(Self {
            dispatcher: Arc::new(dispatcher),
        })
    }
}
