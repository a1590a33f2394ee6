pub mod chain;
pub mod loaders;
pub mod memory;
pub mod sqlite;

pub use chain::StoreChain;
pub use loaders::{JsonLoader, SqliteLoader};
pub use memory::MemoryDictionary;
pub use sqlite::SqliteDictionary;

#[cfg(test)]
mod tests;
