use {
    num::Zero,
    std::{cmp::Ordering, collections::BinaryHeap, hash::Hash, ops::Add},
};

pub struct OpenSetElement<V, C>(pub V, pub C);

impl<V: Clone + PartialEq, C: Clone + Ord> PartialEq for OpenSetElement<V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<V: Clone + PartialEq, C: Clone + Ord> PartialOrd for OpenSetElement<V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Reverse the order so that cost is minimized when popping from the heap
        Some(other.1.cmp(&self.1))
    }
}

impl<V: Clone + PartialEq, C: Clone + Ord> Eq for OpenSetElement<V, C> {}

impl<V: Clone + PartialEq, C: Clone + Ord> Ord for OpenSetElement<V, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the order so that cost is minimized when popping from the heap
        other.1.cmp(&self.1)
    }
}

pub fn zero_heuristic<W: WeightedGraphSearch + ?Sized>(
    _search: &W,
    _vertex: &W::Vertex,
) -> W::Cost {
    W::Cost::zero()
}

/// An implementation of https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm and
/// https://en.wikipedia.org/wiki/A*_search_algorithm over an implicit weighted graph
///
/// All edge costs must be strictly positive, and the heuristic must be admissible for `run_a_star`
/// to return the true minimum. `reset` must record a cost of zero from the start to itself, such
/// that `cost_from_start(start)` is `Some(zero)` afterwards.
pub trait WeightedGraphSearch {
    type Vertex: Clone + Eq + Hash;
    type Cost: Add<Self::Cost, Output = Self::Cost> + Clone + Ord + Sized + Zero;

    fn start(&self) -> &Self::Vertex;
    fn is_end(&self, vertex: &Self::Vertex) -> bool;

    /// The lowest cost at which `vertex` has been enqueued so far, or `None` if it hasn't been
    /// discovered yet
    fn cost_from_start(&self, vertex: &Self::Vertex) -> Option<Self::Cost>;
    fn heuristic(&self, vertex: &Self::Vertex) -> Self::Cost;

    /// The cost is from `vertex` to the neighbor.
    fn neighbors(
        &self,
        vertex: &Self::Vertex,
        neighbors: &mut Vec<OpenSetElement<Self::Vertex, Self::Cost>>,
    );
    fn update_vertex(&mut self, from: &Self::Vertex, to: &Self::Vertex, cost: Self::Cost);
    fn reset(&mut self);

    fn run_internal<F: Fn(&Self, &Self::Vertex) -> Self::Cost>(
        &mut self,
        heuristic: F,
    ) -> Option<Self::Cost> {
        self.reset();

        let start: Self::Vertex = self.start().clone();
        let mut open_set_heap: BinaryHeap<OpenSetElement<Self::Vertex, Self::Cost>> =
            BinaryHeap::new();
        let mut neighbors: Vec<OpenSetElement<Self::Vertex, Self::Cost>> = Vec::new();

        open_set_heap.push(OpenSetElement(start.clone(), heuristic(self, &start)));

        while let Some(OpenSetElement(current, priority)) = open_set_heap.pop() {
            let Some(start_to_current) = self.cost_from_start(&current) else {
                continue;
            };

            if self.is_end(&current) {
                return Some(start_to_current);
            }

            if priority != start_to_current.clone() + heuristic(self, &current) {
                // A cheaper route to `current` was found after this entry was enqueued.
                continue;
            }

            self.neighbors(&current, &mut neighbors);

            for OpenSetElement(neighbor, current_to_neighbor) in neighbors.drain(..) {
                let start_to_neighbor: Self::Cost =
                    start_to_current.clone() + current_to_neighbor;

                if self
                    .cost_from_start(&neighbor)
                    .map_or(true, |best_known| start_to_neighbor < best_known)
                {
                    self.update_vertex(&current, &neighbor, start_to_neighbor.clone());

                    let neighbor_priority: Self::Cost =
                        start_to_neighbor + heuristic(self, &neighbor);

                    open_set_heap.push(OpenSetElement(neighbor, neighbor_priority));
                }
            }
        }

        None
    }

    fn run_a_star(&mut self) -> Option<Self::Cost>
    where
        Self: Sized,
    {
        self.run_internal(Self::heuristic)
    }

    fn run_dijkstra(&mut self) -> Option<Self::Cost>
    where
        Self: Sized,
    {
        self.run_internal(zero_heuristic::<Self>)
    }
}
