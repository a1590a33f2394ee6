use std::sync::Arc;

use odu_core::dictionary::{DictionaryLoader, DictionaryStore};

/// Ordered list of dictionary sources, evaluated once at startup.
///
/// The first loader that opens wins; when none does, the fallback is used.
#[derive(Default)]
pub struct StoreChain {
    loaders: Vec<Box<dyn DictionaryLoader>>,
}

impl StoreChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, loader: impl DictionaryLoader + 'static) -> Self {
        self.loaders.push(Box::new(loader));
        self
    }

    pub fn push(&mut self, loader: Box<dyn DictionaryLoader>) {
        self.loaders.push(loader);
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    pub fn open_or_else<F>(&self, fallback: F) -> Arc<dyn DictionaryStore>
    where
        F: FnOnce() -> Box<dyn DictionaryStore>,
    {
        for loader in &self.loaders {
            tracing::debug!("Trying dictionary source {}", loader.name());
            match loader.open() {
                Ok(store) => {
                    tracing::info!("Using dictionary: {}", store.source_description());
                    return Arc::from(store);
                }
                Err(e) => {
                    tracing::warn!("Dictionary source {} unavailable: {}", loader.name(), e);
                }
            }
        }

        let store = fallback();
        tracing::info!("Using fallback dictionary: {}", store.source_description());
        Arc::from(store)
    }
}
