//! Selection resolution between the page-wide choice and a group's own one.
//!
//! The shared selection wins whenever the group has a pane with that label.
//! Otherwise the group keeps its local selection, and if that is not one of
//! its labels either, the first label in sorted order.

/// Effective selection for a group with `labels`. `None` only when the group
/// has no panes.
pub fn resolve_selection(
    shared: Option<&str>,
    local: Option<&str>,
    labels: &[String],
) -> Option<String> {
    let member = |candidate: Option<&str>| {
        candidate.and_then(|c| labels.iter().find(|label| label.as_str() == c))
    };

    member(shared)
        .or_else(|| member(local))
        .or_else(|| labels.first())
        .cloned()
}

/// Bring the stored local selection in line with the effective one.
/// Returns `true` when `local` was changed.
pub fn reconcile_local(local: &mut Option<String>, effective: Option<&str>) -> bool {
    if local.as_deref() == effective {
        return false;
    }
    *local = effective.map(str::to_string);
    true
}
