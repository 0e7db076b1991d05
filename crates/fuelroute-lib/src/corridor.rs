//! Best-effort ordered state corridor for a route.
//!
//! The corridor is the hop-count shortest path between the endpoint
//! states, not a reconstruction of the physically driven path. When the
//! upstream routing result hints at states the shortest path does not
//! visit (a route that doubles back, or hugs a border), the shortest path
//! is still returned and the corridor is flagged as not covering the
//! hints. Deployments needing exact state attribution should
//! reverse-geocode the route geometry instead.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::graph::StateGraph;
use crate::states::StateCode;

/// Ordered sequence of states a route is assumed to pass through.
///
/// Consecutive entries are adjacent in the state graph, there is no
/// internal repetition, and the first/last entries are the route's start
/// and end states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCorridor {
    states: Vec<StateCode>,
    covers_hints: bool,
}

impl StateCorridor {
    pub fn states(&self) -> &[StateCode] {
        &self.states
    }

    pub fn start(&self) -> StateCode {
        self.states[0]
    }

    pub fn end(&self) -> StateCode {
        self.states[self.states.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Corridors are non-empty by construction; [`build_corridor`] always
    /// yields at least the single-element start-equals-end corridor.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether every hinted state was present in the corridor. A `false`
    /// value marks the corridor as a rougher approximation than usual.
    pub fn covers_hints(&self) -> bool {
        self.covers_hints
    }

    /// Codes joined for compact display, e.g. `NY > PA > OH`.
    pub fn joined_codes(&self) -> String {
        self.states
            .iter()
            .map(|state| state.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

/// Build the corridor between `start` and `end`.
///
/// `hinted_states` is the possibly incomplete, possibly unordered set of
/// states the upstream routing result claims the route crosses; it only
/// influences the [`StateCorridor::covers_hints`] flag, never the path
/// itself.
pub fn build_corridor(
    start: StateCode,
    end: StateCode,
    hinted_states: &HashSet<StateCode>,
) -> Result<StateCorridor> {
    let path = StateGraph::get().shortest_path(start, end)?;

    let path_set: HashSet<StateCode> = path.iter().copied().collect();
    let missing: Vec<StateCode> = hinted_states.difference(&path_set).copied().collect();
    let covers_hints = missing.is_empty();
    if !covers_hints {
        tracing::debug!(
            start = %start,
            end = %end,
            missing = ?missing,
            "corridor omits hinted states; treating as best-effort"
        );
    }

    Ok(StateCorridor {
        states: path,
        covers_hints,
    })
}
