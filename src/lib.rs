//! # Protocols in Rust
//!
//! A small tour of contracts expressed as traits:
//!
//! ## Property requirements
//! - `FullyNamed` requires a `full_name`
//! - `Person` stores it, `StarShip` derives it from an optional prefix
//! - `StarShip` equality compares the derived name only
//!
//! ## Method requirements
//! - `GeneratesRandomNumbers` requires `random()`
//! - `OneThroughTen` draws uniformly from `1..=10`
//!
//! ## Protocols as types
//! - `Animal` requires `number_of_legs` and `speak()`
//! - `Cat` and `Dog` conform, and `Box<dyn Animal>` mixes them
//!
//! Run with: cargo run [scenario.toml]

pub mod animal;
pub mod error;
pub mod named;
pub mod random;
pub mod scenario;

pub use animal::{chorus, total_legs, Animal, Cat, Dog, Species};
pub use error::{ProtocolsError, Result};
pub use named::{print_full_names, write_full_names, FullyNamed, Person, StarShip};
pub use random::{GeneratesRandomNumbers, OneThroughTen};
pub use scenario::{run, Scenario};
