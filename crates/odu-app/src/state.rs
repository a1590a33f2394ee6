use std::sync::Arc;

use odu_config::Config;
use odu_lang_kannada::KannadaProcessor;
use tokio::sync::RwLock;

use crate::status::ReaderStatus;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub processor: Arc<KannadaProcessor>,
    pub status: ReaderStatus,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let processor = KannadaProcessor::from_config(&config);
        tracing::info!("Dictionary source: {}", processor.source_description());
        Self::with_processor(config, processor)
    }

    pub fn with_processor(config: Config, processor: KannadaProcessor) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            processor: Arc::new(processor),
            status: ReaderStatus::default(),
        }
    }
}
