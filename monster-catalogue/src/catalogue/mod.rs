//! # Catalogue Store
//!
//! The in-memory set of monster cards. Each card is a name mapped to
//! [`Stats`]: strength, speed, stealth and cunning, every one a
//! [`StatValue`] bounded to `1..=25`. The store knows nothing about prompts;
//! it only enforces unique names and reports lookup misses as
//! [`crate::error::CatalogueError`].

pub mod stats;
pub use stats::{Stat, StatValue, Stats, parse_stat_edit};

pub mod store;
pub use store::Catalogue;
