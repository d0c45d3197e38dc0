use crate::Cost;

/// Tunables for [`search_with`](crate::search_with) and
/// [`search_all_with`](crate::search_all_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Upper bound on accumulated cost.
    ///
    /// In [`search_with`](crate::search_with), frontier entries above it
    /// are discarded when popped and the search keeps draining the rest.
    /// In [`search_all_with`](crate::search_all_with), starts and
    /// neighbours above it are dropped before they are pushed, so the
    /// resulting map never records them.
    pub max_cost: Cost,
}

impl SearchConfig {
    /// Configuration that prunes everything costlier than `max_cost`.
    pub const fn bounded(max_cost: Cost) -> Self {
        Self { max_cost }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_cost: Cost::MAX,
        }
    }
}
