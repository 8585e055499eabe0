//! The rule-based automated opponent.

pub mod policy;

pub use policy::{AutoProvider, Heuristic};
