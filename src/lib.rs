//! # Syntactic Sugar in Rust
//!
//! Two small demos of language sugar and what it expands to.
//!
//! ## Extension Traits
//! - [`embellish`]: `.fizzle()` on every string-like type, backed by a free function
//!
//! ## Lazy Query Pipelines
//! - [`sequence`]: a shared integer source and deferred filter/map views over it
//! - [`query`]: the same query written fluently and with the [`query!`] comprehension macro
//! - [`pipeline`]: materialize, mutate, materialize again
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin fizzle
//! cargo run --bin double_odds
//!
//! # Optional: TOML config and log filter
//! SUGAR_CONFIG=sugar.toml RUST_LOG=sugar=debug cargo run --bin double_odds
//! ```

pub mod config;
pub mod embellish;
pub mod error;
pub mod pipeline;
pub mod query;
pub mod report;
pub mod sequence;
pub mod telemetry;

pub use config::DemoConfig;
pub use embellish::{fizzle, Fizzle};
pub use error::{ConfigError, SugarError};
pub use sequence::{IntegerSequence, LazySequence};
