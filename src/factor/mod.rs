//! Multi-tile factorization search.

pub mod search;

pub use search::{factorize, Assignment, Factorization, MIN_CANDIDATES};
