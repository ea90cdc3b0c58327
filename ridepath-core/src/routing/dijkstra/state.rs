use std::cmp::Ordering;

use crate::LocationId;

#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) cost: f64,
    pub(super) node: LocationId,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use petgraph::graph::NodeIndex;

    use super::*;

    #[test]
    fn heap_pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        for (cost, node) in [(3.5, 0), (1.25, 1), (2.0, 2)] {
            heap.push(State {
                cost,
                node: NodeIndex::new(node),
            });
        }
        let order: Vec<f64> = std::iter::from_fn(|| heap.pop().map(|s| s.cost)).collect();
        assert_eq!(order, vec![1.25, 2.0, 3.5]);
    }
}
