//! # Storage Traits
//!
//! Storage abstraction used by the domain services so that preferences can be
//! kept in a file, in memory, or anywhere else.

use anyhow::Result;

/// Key-value store for user preferences
pub trait PreferenceStorage: Send + Sync {
    /// Read a preference, `None` if it was never written
    fn get_preference(&self, key: &str) -> Result<Option<String>>;

    /// Write a preference, replacing any previous value
    fn set_preference(&self, key: &str, value: &str) -> Result<()>;
}
