//! Curriculum loading for Mentor.
//!
//! Fetches exactly one curriculum document from a SQLite document table,
//! renders it to text, and substitutes built-in sample content on any
//! failure. The fetch happens once per process start; the datastore
//! connection is released as soon as it completes.

pub mod sample;
pub mod store;

pub use sample::SAMPLE_CURRICULUM;
pub use store::{LoadedCurriculum, Provenance, load_curriculum};
