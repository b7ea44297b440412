//! Storage adapters for the preference store port.

mod in_memory_preference_store;

pub use in_memory_preference_store::InMemoryPreferenceStore;
