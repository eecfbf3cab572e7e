//! Diagnostics collected by a search.

use serde::{Deserialize, Serialize};

use crate::NodeKind;

/// Number of nodes visited, by kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCounts {
    pub decision_max: u64,
    pub decision_min: u64,
    pub chance: u64,
    pub leaf: u64,
}

impl NodeCounts {
    pub fn record(&mut self, kind: NodeKind) {
        match kind {
            NodeKind::DecisionMax => self.decision_max += 1,
            NodeKind::DecisionMin => self.decision_min += 1,
            NodeKind::Chance => self.chance += 1,
            NodeKind::Leaf => self.leaf += 1,
        }
    }

    pub fn get(&self, kind: NodeKind) -> u64 {
        match kind {
            NodeKind::DecisionMax => self.decision_max,
            NodeKind::DecisionMin => self.decision_min,
            NodeKind::Chance => self.chance,
            NodeKind::Leaf => self.leaf,
        }
    }

    /// Total nodes visited
    pub fn total(&self) -> u64 {
        self.decision_max + self.decision_min + self.chance + self.leaf
    }
}

/// Value of one root action
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchEval<A> {
    pub action: A,
    pub value: f64,
}

/// Diagnostics for one search invocation.
///
/// Root values are listed in the order the actions were generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchTrace<A> {
    pub depth: usize,
    pub counts: NodeCounts,
    pub root_values: Vec<BranchEval<A>>,
}
