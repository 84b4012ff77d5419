use crate::concepts::table::TableSet;
use crate::framework::NodeIndex;

/// Walks next-hop chains from `source` toward `dest` over a computed table
/// set, materializing the ordered device path.
///
/// Returns `None` when a table or entry is missing, an entry carries the
/// no-route marker, a next hop points back at the current device, or the
/// accumulated path exceeds the device count. The length bound holds
/// regardless of which strategy produced the tables, so a malformed table
/// cycles into "no route" instead of looping.
pub fn resolve_path(
    tables: &TableSet,
    source: NodeIndex,
    dest: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    let mut path = vec![source];
    let mut current = source;
    while current != dest {
        let next = tables.table(current)?.next_hop(dest)?;
        if next == current {
            return None;
        }
        path.push(next);
        current = next;
        if path.len() > tables.len() {
            return None;
        }
    }
    Some(path)
}
