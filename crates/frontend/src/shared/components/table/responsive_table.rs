//! Table on wide screens, cards on small ones.
//!
//! ```rust,ignore
//! <ResponsiveTable
//!     columns=vec![
//!         Column::new("name", "Name").priority(ColumnPriority::High),
//!         Column::new("phone", "Phone").priority(ColumnPriority::Low),
//!     ]
//!     rows=clients
//!     empty_message="No clients yet"
//! />
//! ```

use super::columns::{
    card_cells, partition_columns, BodyContent, Column, RowExpansion, TableMode, TableRecord,
};
use crate::shared::icons::icon;
use crate::shared::responsive::use_responsive;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ResponsiveTable<T>(
    columns: Vec<Column<T>>,
    #[prop(into)]
    rows: Signal<Vec<T>>,
    /// Shown instead of rows when there are none
    #[prop(optional, into)]
    empty_message: MaybeProp<String>,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let policy = use_responsive();
    let expansion = RwSignal::new(RowExpansion::default());
    let columns = StoredValue::new(columns);
    let column_count = columns.with_value(Vec::len);

    move || match TableMode::for_policy(&policy.get()) {
        TableMode::Table => view! {
            <Table class="responsive-table">
                <TableHeader>
                    <TableRow>
                        {columns.with_value(|cols| {
                            cols.iter()
                                .map(|c| {
                                    let label = c.label;
                                    view! { <TableHeaderCell>{label}</TableHeaderCell> }
                                })
                                .collect_view()
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = rows.get();
                        let body = BodyContent::resolve(
                            TableMode::Table,
                            rows.len(),
                            column_count,
                            empty_message.get(),
                        );
                        if let BodyContent::Empty { message, span } = body {
                            return view! {
                                <TableRow class="responsive-table__empty">
                                    <TableCell attr:colspan=span.unwrap_or(1)>{message}</TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let cells = columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|c| {
                                            let value = c.display(&row);
                                            view! { <TableCell>{value}</TableCell> }
                                        })
                                        .collect_view()
                                });
                                view! { <TableRow>{cells}</TableRow> }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        }
        .into_any(),
        TableMode::Cards => view! {
            <div class="responsive-table__cards">
                {move || {
                    let rows = rows.get();
                    let body = BodyContent::resolve(
                        TableMode::Cards,
                        rows.len(),
                        column_count,
                        empty_message.get(),
                    );
                    if let BodyContent::Empty { message, .. } = body {
                        return view! {
                            <Card class="responsive-table__card responsive-table__empty">
                                {message}
                            </Card>
                        }
                        .into_any();
                    }
                    rows.into_iter()
                        .enumerate()
                        .map(|(index, row)| view! {
                            <RowCard index=index row=row columns=columns expansion=expansion />
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn RowCard<T>(
    index: usize,
    row: T,
    columns: StoredValue<Vec<Column<T>>>,
    expansion: RwSignal<RowExpansion>,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let has_details = columns.with_value(|cols| !partition_columns(cols).1.is_empty());
    let is_expanded = move || expansion.with(|e| e.is_expanded(index));
    let row = StoredValue::new(row);

    view! {
        <Card class="responsive-table__card">
            <dl class="responsive-table__fields">
                {move || {
                    let expanded = is_expanded();
                    let cells = columns.with_value(|cols| row.with_value(|r| card_cells(cols, r, expanded)));
                    cells
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="responsive-table__field">
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        })
                        .collect_view()
                }}
            </dl>
            {has_details.then(|| view! {
                <button
                    class="button button--ghost responsive-table__toggle"
                    aria-expanded=move || is_expanded().to_string()
                    on:click=move |_| expansion.update(|e| e.toggle(index))
                >
                    {move || if is_expanded() { "Less details" } else { "More details" }}
                    {move || if is_expanded() { icon("chevron-up") } else { icon("chevron-down") }}
                </button>
            })}
        </Card>
    }
}
