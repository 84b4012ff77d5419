use crate::concepts::topology::Cost;

/// Adds two optional link costs. `None` (no link, or an unreachable
/// endpoint) absorbs; real costs saturate instead of wrapping.
pub fn sum_costs(a: Option<Cost>, b: Option<Cost>) -> Option<Cost> {
    Some(a?.saturating_add(b?))
}
