#![forbid(unsafe_code)]

pub mod repository;

pub use repository::{InMemoryProgressStore, NodeSnapshot, ProgressSnapshot, ProgressStore};
