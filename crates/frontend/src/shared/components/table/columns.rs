//! Column model and the presentation rules of the table/card switch.

use crate::shared::responsive::ResponsivePolicy;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Row types shown by [`super::ResponsiveTable`].
pub trait TableRecord {
    /// Display text of the cell under `key`.
    fn cell(&self, key: &str) -> String;
}

/// How important a column is on a narrow screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPriority {
    High,
    Medium,
    Low,
}

pub type CellRenderer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    /// `None` behaves like `High`.
    pub priority: Option<ColumnPriority>,
    pub render: Option<CellRenderer<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            priority: self.priority,
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("priority", &self.priority)
            .finish()
    }
}

impl<T: TableRecord> Column<T> {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            priority: None,
            render: None,
        }
    }

    pub fn priority(mut self, priority: ColumnPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn render(mut self, render: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Medium and low columns fold into the per-row details on small screens.
    pub fn is_collapsible(&self) -> bool {
        matches!(
            self.priority,
            Some(ColumnPriority::Medium) | Some(ColumnPriority::Low)
        )
    }

    pub fn display(&self, row: &T) -> String {
        match &self.render {
            Some(render) => render(row),
            None => row.cell(self.key),
        }
    }
}

/// Splits columns into always-visible and collapsible, keeping order.
pub fn partition_columns<T: TableRecord>(columns: &[Column<T>]) -> (Vec<&Column<T>>, Vec<&Column<T>>) {
    columns.iter().partition(|c| !c.is_collapsible())
}

/// `(label, value)` pairs a card shows for `row`.
pub fn card_cells<T: TableRecord>(
    columns: &[Column<T>],
    row: &T,
    expanded: bool,
) -> Vec<(&'static str, String)> {
    columns
        .iter()
        .filter(|c| expanded || !c.is_collapsible())
        .map(|c| (c.label, c.display(row)))
        .collect()
}

/// Which rows have their details open. Rows are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowExpansion {
    expanded: BTreeSet<usize>,
}

impl RowExpansion {
    pub fn toggle(&mut self, row: usize) {
        if !self.expanded.remove(&row) {
            self.expanded.insert(row);
        }
    }

    pub fn is_expanded(&self, row: usize) -> bool {
        self.expanded.contains(&row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    Table,
    Cards,
}

impl TableMode {
    pub fn for_policy(policy: &ResponsivePolicy) -> Self {
        if policy.is_small_screen {
            Self::Cards
        } else {
            Self::Table
        }
    }
}

/// What the body of a table or card list shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyContent {
    /// A single placeholder. `span` is the colspan in table mode; cards have none.
    Empty { message: String, span: Option<usize> },
    Rows(usize),
}

impl BodyContent {
    /// A blank caller message falls back to [`DEFAULT_EMPTY_MESSAGE`].
    pub fn resolve(
        mode: TableMode,
        row_count: usize,
        column_count: usize,
        empty_message: Option<String>,
    ) -> Self {
        if row_count > 0 {
            return Self::Rows(row_count);
        }
        let message = empty_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string());
        let span = match mode {
            TableMode::Table => Some(column_count.max(1)),
            TableMode::Cards => None,
        };
        Self::Empty { message, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::responsive::Breakpoint;

    struct Row(&'static str, &'static str);

    impl TableRecord for Row {
        fn cell(&self, key: &str) -> String {
            match key {
                "a" => self.0.to_string(),
                "b" => self.1.to_string(),
                _ => String::new(),
            }
        }
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("a", "A").priority(ColumnPriority::High),
            Column::new("b", "B").priority(ColumnPriority::Low),
        ]
    }

    #[test]
    fn test_unset_priority_is_always_visible() {
        let cols: Vec<Column<Row>> = vec![
            Column::new("a", "A"),
            Column::new("b", "B").priority(ColumnPriority::Medium),
            Column::new("c", "C").priority(ColumnPriority::High),
        ];
        let (visible, collapsible) = partition_columns(&cols);
        let keys: Vec<_> = visible.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert_eq!(collapsible[0].key, "b");
    }

    #[test]
    fn test_low_column_hidden_until_expanded() {
        let cols = columns();
        let rows = [Row("a0", "b0"), Row("a1", "b1")];
        let mut expansion = RowExpansion::default();

        let cells = |expansion: &RowExpansion, i: usize| {
            card_cells(&cols, &rows[i], expansion.is_expanded(i))
        };
        assert_eq!(cells(&expansion, 0), vec![("A", "a0".to_string())]);

        expansion.toggle(0);
        assert_eq!(
            cells(&expansion, 0),
            vec![("A", "a0".to_string()), ("B", "b0".to_string())]
        );
        assert_eq!(cells(&expansion, 1), vec![("A", "a1".to_string())]);
    }

    #[test]
    fn test_toggle_order_does_not_matter() {
        let mut first = RowExpansion::default();
        first.toggle(3);
        first.toggle(7);
        let mut second = RowExpansion::default();
        second.toggle(7);
        second.toggle(3);
        assert_eq!(first, second);

        first.toggle(3);
        assert!(!first.is_expanded(3));
        assert!(first.is_expanded(7));
    }

    #[test]
    fn test_custom_renderer() {
        let col = Column::new("a", "A").render(|row: &Row| format!("<{}>", row.0));
        assert_eq!(col.display(&Row("x", "y")), "<x>");
    }

    #[test]
    fn test_mode_follows_small_screen() {
        for bp in Breakpoint::ALL {
            let policy = ResponsivePolicy::derive(bp, false);
            let expected = if policy.is_small_screen {
                TableMode::Cards
            } else {
                TableMode::Table
            };
            assert_eq!(TableMode::for_policy(&policy), expected);
        }
        assert_eq!(
            TableMode::for_policy(&ResponsivePolicy::derive(Breakpoint::Md, false)),
            TableMode::Cards
        );
    }

    #[test]
    fn test_empty_body_uses_default_message_in_both_modes() {
        for mode in [TableMode::Table, TableMode::Cards] {
            match BodyContent::resolve(mode, 0, 3, None) {
                BodyContent::Empty { message, .. } => assert_eq!(message, DEFAULT_EMPTY_MESSAGE),
                other => panic!("expected placeholder, got {other:?}"),
            }
        }
        assert_eq!(
            BodyContent::resolve(TableMode::Cards, 0, 3, Some("  ".to_string())),
            BodyContent::Empty {
                message: DEFAULT_EMPTY_MESSAGE.to_string(),
                span: None
            }
        );
    }

    #[test]
    fn test_empty_body_uses_caller_message() {
        assert_eq!(
            BodyContent::resolve(TableMode::Table, 0, 4, Some("No clients yet".to_string())),
            BodyContent::Empty {
                message: "No clients yet".to_string(),
                span: Some(4)
            }
        );
        assert_eq!(
            BodyContent::resolve(TableMode::Cards, 0, 4, Some("No clients yet".to_string())),
            BodyContent::Empty {
                message: "No clients yet".to_string(),
                span: None
            }
        );
    }

    #[test]
    fn test_placeholder_spans_at_least_one_column() {
        assert_eq!(
            BodyContent::resolve(TableMode::Table, 0, 0, None),
            BodyContent::Empty {
                message: DEFAULT_EMPTY_MESSAGE.to_string(),
                span: Some(1)
            }
        );
    }

    #[test]
    fn test_rows_replace_placeholder() {
        for mode in [TableMode::Table, TableMode::Cards] {
            assert_eq!(
                BodyContent::resolve(mode, 2, 3, Some("unused".to_string())),
                BodyContent::Rows(2)
            );
        }
    }
}
