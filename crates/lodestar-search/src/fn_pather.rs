use crate::Cost;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Edge cost of 1 for every move.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCost;

/// Heuristic that always estimates 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHeuristic;

/// Adapter turning closures into a pather.
///
/// Start with [`FnPather::new`] and a neighbour closure; cost and heuristic
/// default to [`UnitCost`] and [`NoHeuristic`] until replaced with
/// [`with_cost`](Self::with_cost) and [`with_heuristic`](Self::with_heuristic).
///
/// ```
/// use lodestar_search::{FnPather, search};
///
/// // Walk the integers from 0 to 10 in steps of +1 or +3.
/// let pather = FnPather::new(|&n: &i32| [n + 1, n + 3]);
/// let found = search(&pather, 0, |&n| n == 10).unwrap();
/// assert_eq!(found.cost, 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnPather<N, C = UnitCost, H = NoHeuristic> {
    neighbors: N,
    cost: C,
    heuristic: H,
}

impl<N> FnPather<N> {
    /// Create a pather from a neighbour closure.
    pub fn new(neighbors: N) -> Self {
        Self {
            neighbors,
            cost: UnitCost,
            heuristic: NoHeuristic,
        }
    }
}

impl<N, C, H> FnPather<N, C, H> {
    /// Replace the edge cost with `cost(from, to)`.
    pub fn with_cost<C2>(self, cost: C2) -> FnPather<N, C2, H> {
        FnPather {
            neighbors: self.neighbors,
            cost,
            heuristic: self.heuristic,
        }
    }

    /// Replace the heuristic with `heuristic(v)`.
    pub fn with_heuristic<H2>(self, heuristic: H2) -> FnPather<N, C, H2> {
        FnPather {
            neighbors: self.neighbors,
            cost: self.cost,
            heuristic,
        }
    }
}

/// Edge cost source for [`FnPather`].
pub trait EdgeCost<T> {
    fn edge_cost(&self, from: &T, to: &T) -> Cost;
}

impl<T> EdgeCost<T> for UnitCost {
    #[inline]
    fn edge_cost(&self, _from: &T, _to: &T) -> Cost {
        1
    }
}

impl<T, F: Fn(&T, &T) -> Cost> EdgeCost<T> for F {
    #[inline]
    fn edge_cost(&self, from: &T, to: &T) -> Cost {
        self(from, to)
    }
}

/// Heuristic source for [`FnPather`].
pub trait Heuristic<T> {
    fn estimate(&self, v: &T) -> Cost;
}

impl<T> Heuristic<T> for NoHeuristic {
    #[inline]
    fn estimate(&self, _v: &T) -> Cost {
        0
    }
}

impl<T, F: Fn(&T) -> Cost> Heuristic<T> for F {
    #[inline]
    fn estimate(&self, v: &T) -> Cost {
        self(v)
    }
}

impl<T, N, I, C, H> Pather<T> for FnPather<N, C, H>
where
    N: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    fn neighbors(&self, v: &T, buf: &mut Vec<T>) {
        buf.extend((self.neighbors)(v));
    }
}

impl<T, N, I, C, H> WeightedPather<T> for FnPather<N, C, H>
where
    N: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
    C: EdgeCost<T>,
{
    fn cost(&self, from: &T, to: &T) -> Cost {
        self.cost.edge_cost(from, to)
    }
}

impl<T, N, I, C, H> AstarPather<T> for FnPather<N, C, H>
where
    N: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
    C: EdgeCost<T>,
    H: Heuristic<T>,
{
    fn estimate(&self, v: &T) -> Cost {
        self.heuristic.estimate(v)
    }
}
