//! Senet Core - Stochastic game abstractions and common types
//!
//! This crate provides the [`StochasticGame`] trait that the Senet rules
//! implement and the expectiminimax search consumes, together with the shared
//! error type.
//!
//! # Types
//!
//! - [`StochasticGame`] - Trait for games with a chance event every turn
//! - [`Heuristic`] - Static evaluation from a fixed perspective
//! - [`ChanceDistribution`] - Outcome probabilities (sums to 1.0)

mod error;
mod game;
mod types;

pub use error::{Result, SenetError};
pub use game::{Heuristic, StochasticGame};
pub use types::ChanceDistribution;
