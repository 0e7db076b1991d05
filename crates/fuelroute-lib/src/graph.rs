//! Static adjacency graph over the contiguous US states.
//!
//! Nodes are [`StateCode`] values and edges are land borders. The graph is
//! built once at first use and never mutated, so concurrent readers need
//! no synchronization.

use std::collections::{HashMap, VecDeque};

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::states::{StateCode, ALL_STATES};

use StateCode::*;

/// Land-border adjacency for the contiguous USA plus DC.
///
/// The table lists each undirected edge at least once; construction
/// symmetrizes, so a border only needs to appear under one endpoint.
const ADJACENCY_TABLE: [(StateCode, &[StateCode]); 49] = [
    (AL, &[FL, GA, TN, MS]),
    (AR, &[TX, OK, MO, TN, MS, LA]),
    (AZ, &[CA, NV, UT, NM, CO]),
    (CA, &[OR, NV, AZ]),
    (CO, &[WY, NE, KS, OK, NM, AZ, UT]),
    (CT, &[NY, MA, RI]),
    (DC, &[MD, VA]),
    (DE, &[MD, PA, NJ]),
    (FL, &[AL, GA]),
    (GA, &[FL, AL, TN, NC, SC]),
    (IA, &[MN, SD, NE, MO, IL, WI]),
    (ID, &[WA, OR, NV, UT, WY, MT]),
    (IL, &[WI, IA, MO, KY, IN, MI]),
    (IN, &[MI, OH, KY, IL]),
    (KS, &[NE, CO, OK, MO]),
    (KY, &[IL, IN, OH, WV, VA, TN, MO]),
    (LA, &[TX, AR, MS]),
    (MA, &[NY, VT, NH, RI, CT]),
    (MD, &[VA, WV, PA, DE, DC]),
    (ME, &[NH]),
    (MI, &[WI, IN, OH]),
    (MN, &[ND, SD, IA, WI]),
    (MO, &[IA, IL, KY, TN, AR, OK, KS, NE]),
    (MS, &[LA, AR, TN, AL]),
    (MT, &[ID, WY, SD, ND]),
    (NC, &[VA, TN, GA, SC]),
    (ND, &[MT, SD, MN]),
    (NE, &[SD, IA, MO, KS, CO, WY]),
    (NH, &[VT, ME, MA]),
    (NJ, &[NY, PA, DE]),
    (NM, &[AZ, UT, CO, OK, TX]),
    (NV, &[OR, ID, UT, AZ, CA]),
    (NY, &[PA, NJ, CT, MA, VT]),
    (OH, &[PA, WV, KY, IN, MI]),
    (OK, &[KS, CO, NM, TX, AR, MO]),
    (OR, &[WA, ID, NV, CA]),
    (PA, &[NY, NJ, DE, MD, WV, OH]),
    (RI, &[MA, CT]),
    (SC, &[NC, GA]),
    (SD, &[ND, MT, WY, NE, IA, MN]),
    (TN, &[KY, VA, NC, GA, AL, MS, AR, MO]),
    (TX, &[NM, OK, AR, LA]),
    (UT, &[ID, WY, CO, NM, AZ, NV]),
    (VA, &[MD, DC, WV, KY, TN, NC]),
    (VT, &[NY, NH, MA]),
    (WA, &[ID, OR]),
    (WI, &[MN, IA, IL, MI]),
    (WV, &[OH, PA, MD, VA, KY]),
    (WY, &[MT, SD, NE, CO, UT, ID]),
];

static GRAPH: Lazy<StateGraph> = Lazy::new(StateGraph::build);

/// Immutable adjacency graph over the contiguous states.
#[derive(Debug)]
pub struct StateGraph {
    adjacency: HashMap<StateCode, Vec<StateCode>>,
}

impl StateGraph {
    /// The process-wide graph instance.
    pub fn get() -> &'static StateGraph {
        &GRAPH
    }

    fn build() -> Self {
        let mut adjacency: HashMap<StateCode, Vec<StateCode>> = HashMap::new();
        for state in ALL_STATES {
            adjacency.insert(state, Vec::new());
        }
        for (state, neighbors) in ADJACENCY_TABLE {
            for &neighbor in neighbors {
                let forward = adjacency.entry(state).or_default();
                if !forward.contains(&neighbor) {
                    forward.push(neighbor);
                }
                let backward = adjacency.entry(neighbor).or_default();
                if !backward.contains(&state) {
                    backward.push(state);
                }
            }
        }
        // Sorted adjacency lists make BFS discovery order, and therefore
        // tie-breaking between equal-length paths, deterministic: the
        // lexically lowest code wins at every branch point.
        for neighbors in adjacency.values_mut() {
            neighbors.sort();
        }
        Self { adjacency }
    }

    /// Neighbouring states of `state`, in lexical order.
    pub fn neighbors(&self, state: StateCode) -> &[StateCode] {
        self.adjacency
            .get(&state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Hop-count shortest path from `start` to `goal`, inclusive of both.
    ///
    /// Every edge counts as one hop; true mileage between states is not
    /// known at this layer. Among equal-length paths the lexically lowest
    /// code is preferred at each branch point.
    pub fn shortest_path(&self, start: StateCode, goal: StateCode) -> Result<Vec<StateCode>> {
        if start == goal {
            return Ok(vec![start]);
        }

        let mut parents: HashMap<StateCode, Option<StateCode>> = HashMap::new();
        let mut queue = VecDeque::new();
        parents.insert(start, None);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &next in self.neighbors(current) {
                if parents.contains_key(&next) {
                    continue;
                }
                parents.insert(next, Some(current));
                if next == goal {
                    return Ok(reconstruct_path(&parents, start, goal));
                }
                queue.push_back(next);
            }
        }

        // Unreachable for a connected graph; kept as an explicit failure
        // so a bad adjacency edit surfaces loudly instead of panicking.
        Err(Error::NoPath {
            start: start.to_string(),
            goal: goal.to_string(),
        })
    }
}

fn reconstruct_path(
    parents: &HashMap<StateCode, Option<StateCode>>,
    start: StateCode,
    goal: StateCode,
) -> Vec<StateCode> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(state) = current {
        path.push(state);
        if state == start {
            break;
        }
        current = parents.get(&state).copied().flatten();
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_symmetric() {
        let graph = StateGraph::get();
        for state in ALL_STATES {
            for &neighbor in graph.neighbors(state) {
                assert!(
                    graph.neighbors(neighbor).contains(&state),
                    "{neighbor} missing reverse edge to {state}"
                );
            }
        }
    }

    #[test]
    fn every_state_has_a_neighbor() {
        let graph = StateGraph::get();
        for state in ALL_STATES {
            assert!(
                !graph.neighbors(state).is_empty(),
                "{state} has no neighbors"
            );
        }
    }

    #[test]
    fn water_boundary_edge_is_symmetrized() {
        // The source table lists IL -> MI but not MI -> IL.
        let graph = StateGraph::get();
        assert!(graph.neighbors(StateCode::MI).contains(&StateCode::IL));
    }

    #[test]
    fn path_to_self_is_single_element() {
        let path = StateGraph::get()
            .shortest_path(StateCode::TX, StateCode::TX)
            .unwrap();
        assert_eq!(path, vec![StateCode::TX]);
    }

    #[test]
    fn path_lengths_are_symmetric() {
        let graph = StateGraph::get();
        let pairs = [
            (StateCode::NY, StateCode::CA),
            (StateCode::ME, StateCode::FL),
            (StateCode::WA, StateCode::DC),
        ];
        for (a, b) in pairs {
            let forward = graph.shortest_path(a, b).unwrap();
            let backward = graph.shortest_path(b, a).unwrap();
            assert_eq!(forward.len(), backward.len());
        }
    }

    #[test]
    fn adjacent_states_are_one_hop() {
        let path = StateGraph::get()
            .shortest_path(StateCode::NY, StateCode::NJ)
            .unwrap();
        assert_eq!(path, vec![StateCode::NY, StateCode::NJ]);
    }

    #[test]
    fn graph_is_connected() {
        let graph = StateGraph::get();
        for state in ALL_STATES {
            assert!(graph.shortest_path(StateCode::AL, state).is_ok());
        }
    }
}
