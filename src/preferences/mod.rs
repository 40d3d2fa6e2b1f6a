mod json_file_store;
mod preferences;
mod store;

pub use json_file_store::JsonFileStore;
pub use preferences::Preferences;
pub use store::{KeyValueStore, MemoryStore, PreferenceError};
