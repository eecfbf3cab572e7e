//! Expectiminimax search for Senet.
//!
//! This crate provides a depth-bounded expectiminimax search that can be used
//! with any game implementing the `senet_core::StochasticGame` trait, plus a
//! validated entry point for Senet itself.
//!
//! # Features
//!
//! - **Generic**: Works with any `StochasticGame` and `Heuristic`
//! - **Exact chance nodes**: Expectations over the full outcome table
//! - **Deterministic**: Fixed action order, ties keep the first action
//! - **Diagnostics**: Optional node counts and root action values
//!
//! # Example
//!
//! ```
//! use senet_expectiminimax::{Expectiminimax, SearchConfig};
//! use senet_rules::{GameState, Senet, SenetHeuristic, Throw};
//!
//! let state = GameState::starting();
//! let config = SearchConfig::for_analysis(1);
//! let search = Expectiminimax::new(config, SenetHeuristic::default());
//!
//! let result = search.search(&Senet, &state, Throw::new(1).unwrap());
//! println!("Best action: {:?}", result.best_action);
//! println!("Root value: {}", result.value);
//!
//! let trace = result.trace.expect("diagnostics enabled");
//! assert_eq!(trace.root_values.len(), 7);
//! ```

pub mod config;
mod node;
pub mod search;
mod senet;
pub mod trace;

pub use config::SearchConfig;
pub use node::NodeKind;
pub use search::{Expectiminimax, SearchResult};
pub use senet::{choose_action, choose_with, Choice};
pub use trace::{BranchEval, NodeCounts, SearchTrace};
