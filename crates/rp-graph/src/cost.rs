//! Per-node tag cost hook.
//!
//! Every node carries a `tag_multiplier` that scales the cost of stepping onto
//! it.  The multiplier is computed once at build time from the node's tags
//! (including those inherited from its ways) and the request's [`Activity`].
//! Preference-weighted routing (favouring parks for runners, avoiding
//! `highway=primary`, …) plugs in here; the shipped [`UniformCost`] leaves
//! every step unweighted.

use std::collections::BTreeMap;

use rp_core::Activity;

/// Map tags of a node or way.
pub type Tags = BTreeMap<String, String>;

/// Pluggable tag-to-multiplier function.
///
/// Must return a positive, finite scalar; the builder rejects anything else
/// with [`GraphError::InvalidMultiplier`](crate::GraphError::InvalidMultiplier).
///
/// Closures `Fn(&Tags, Activity) -> f64` implement this trait directly.
pub trait TagCost: Send + Sync {
    fn multiplier(&self, tags: &Tags, activity: Activity) -> f64;
}

/// Every node costs the same: multiplier `1`.
#[derive(Copy, Clone, Debug, Default)]
pub struct UniformCost;

impl TagCost for UniformCost {
    #[inline]
    fn multiplier(&self, _tags: &Tags, _activity: Activity) -> f64 {
        1.0
    }
}

impl<F> TagCost for F
where
    F: Fn(&Tags, Activity) -> f64 + Send + Sync,
{
    #[inline]
    fn multiplier(&self, tags: &Tags, activity: Activity) -> f64 {
        self(tags, activity)
    }
}
