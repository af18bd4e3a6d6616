//! Fixture files: declarative canned responses loaded from disk.

pub mod error;
pub mod fixture;
pub mod parser;

pub use error::ConfigError;
pub use fixture::{load_registry, load_registry_glob, FixtureFile, Fixtures, ResponseFixture};
