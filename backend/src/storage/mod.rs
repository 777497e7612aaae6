//! # Storage Module
//!
//! Persistence for the only durable state in the application: user
//! preferences such as the theme flag. Menus, roles and the active route live
//! in memory for the length of a session.
//!
//! ## Implementations
//!
//! - **YamlPreferenceRepository**: flat key-value map in `preferences.yaml`
//!   under the data directory, written atomically
//! - **InMemoryPreferenceStore**: process-local map for tests and throwaway
//!   sessions
//!
//! The domain layer only sees the `PreferenceStorage` trait.

pub mod connection;
pub mod memory;
pub mod preference_repository;
pub mod traits;

pub use connection::FileConnection;
pub use memory::InMemoryPreferenceStore;
pub use preference_repository::YamlPreferenceRepository;
pub use traits::PreferenceStorage;
