use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;

pub struct AppState {
    pub config: Config,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self { config })
    }

    /// Generator for a single render.
    #[must_use]
    pub fn render_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
