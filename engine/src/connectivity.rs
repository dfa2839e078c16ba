// ═══════════════════════════════════════════════════════════════════════
// Connectivity queries over a player's owned-territory set.
//
// Two views of the same set: which outside territories each border
// touches (invasion candidates), and which owned territories are
// reachable through an owned-only path (maneuver reachability, i.e.
// connected components of the owned-induced subgraph).
// ═══════════════════════════════════════════════════════════════════════

use crate::map;
use crate::types::TerritoryId;
use std::collections::BTreeSet;

/// Per-territory candidate lists: `(source, targets)` in the owned
/// set's ascending-id order.
pub type Candidates = Vec<(TerritoryId, Vec<TerritoryId>)>;

/// For every owned territory, the map neighbors not in the owned set.
/// Targets follow static neighbor declaration order.
pub fn invasion_candidates(owned: &BTreeSet<TerritoryId>) -> Candidates {
    owned
        .iter()
        .map(|&source| {
            let targets = map::neighbors(source)
                .iter()
                .copied()
                .filter(|n| !owned.contains(n))
                .collect();
            (source, targets)
        })
        .collect()
}

/// For every owned territory, the other members of its connected
/// component in the owned-induced subgraph. Components are found with
/// an iterative DFS; target lists are sorted by id.
pub fn maneuver_components(owned: &BTreeSet<TerritoryId>) -> Candidates {
    let mut component_of = [usize::MAX; map::TABLE_SIZE];
    let mut components: Vec<Vec<TerritoryId>> = Vec::new();

    for &start in owned {
        if component_of[start.index()] != usize::MAX {
            continue;
        }
        let index = components.len();
        let mut member_ids = Vec::new();
        let mut stack = vec![start];
        component_of[start.index()] = index;
        while let Some(territory) = stack.pop() {
            member_ids.push(territory);
            for &neighbor in map::neighbors(territory) {
                if owned.contains(&neighbor) && component_of[neighbor.index()] == usize::MAX
                {
                    component_of[neighbor.index()] = index;
                    stack.push(neighbor);
                }
            }
        }
        member_ids.sort_unstable();
        components.push(member_ids);
    }

    owned
        .iter()
        .map(|&source| {
            let component = &components[component_of[source.index()]];
            let targets = component
                .iter()
                .copied()
                .filter(|&t| t != source)
                .collect();
            (source, targets)
        })
        .collect()
}
