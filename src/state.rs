use crate::config::Config;
use crate::shell::ShellTemplate;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub shell: ShellTemplate,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            shell: ShellTemplate::from_config(&config),
            config: Arc::new(config),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.site_base_url
    }
}
