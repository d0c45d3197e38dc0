use crate::Cost;

/// Minimal search interface: lazy neighbour enumeration.
pub trait Pather<T> {
    /// Append neighbours of `v` into `buf`. The caller clears `buf` before calling.
    ///
    /// Duplicates and already-visited vertices are allowed; the engine
    /// filters them.
    fn neighbors(&self, v: &T, buf: &mut Vec<T>);
}

/// Pather with weighted edges.
pub trait WeightedPather<T>: Pather<T> {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    ///
    /// Defaults to 1 for every edge.
    fn cost(&self, _from: &T, _to: &T) -> Cost {
        1
    }
}

/// Full A* pather with a heuristic.
pub trait AstarPather<T>: WeightedPather<T> {
    /// Estimate of the remaining cost from `v` to the nearest accepted vertex.
    ///
    /// Must never overestimate (admissible) for results to be optimal. This
    /// is not checked: an inadmissible estimate yields a valid but possibly
    /// more expensive path. Defaults to 0, which makes the search Dijkstra.
    fn estimate(&self, _v: &T) -> Cost {
        0
    }
}
