/// A selectable entry: a unique identifier plus its display label.
///
/// Options are owned by the host application and passed to the widget as a
/// slice. The widget clones an option only when it enters the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOption {
    pub id: String,
    pub label: String,
}

impl ComboOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Compute the filtered view: options not yet selected whose label contains
/// the query, case-insensitively. An empty query matches every unselected
/// option. Original option order is preserved; no ranking.
pub fn filtered_view<'a>(
    options: &'a [ComboOption],
    selected: &[ComboOption],
    query: &str,
) -> Vec<&'a ComboOption> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| !selected.iter().any(|s| s.id == option.id))
        .filter(|option| needle.is_empty() || option.label.to_lowercase().contains(&needle))
        .collect()
}
