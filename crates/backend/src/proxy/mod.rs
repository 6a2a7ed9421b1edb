pub mod client;
pub mod error;
pub mod handler;
pub mod target;

use crate::shared::config::Config;
use client::Upstream;
use std::sync::Arc;

/// Router state shared by every proxy request
#[derive(Clone)]
pub struct ProxyState {
    pub config: Arc<Config>,
    pub upstream: Arc<dyn Upstream>,
}

impl ProxyState {
    pub fn new(config: Config, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}
