use common::TransactionDto;
use yew::prelude::*;
use crate::components::common::{Pagination, Search};
use crate::hooks::UseTableHandle;
use super::filters::Filters;
use super::table::TransactionTable;

#[derive(Properties, PartialEq)]
pub struct TransactionPanelProps {
    pub table: UseTableHandle<TransactionDto>,
    #[prop_or(AttrValue::Static("All Transactions"))]
    pub title: AttrValue,
    /// Shows the type and status selects next to the search box.
    #[prop_or_default]
    pub show_filters: bool,
}

/// Card with search, optional filters, the transaction table and pagination.
#[function_component(TransactionPanel)]
pub fn transaction_panel(props: &TransactionPanelProps) -> Html {
    let table = &props.table;

    let subtitle = table.meta.as_ref().map(|meta| {
        format!("Showing {} of {} transactions", meta.count, meta.total)
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex flex-col md:flex-row justify-between md:items-end gap-4">
                    <div>
                        <h2 class="card-title">{&props.title}</h2>
                        if let Some(subtitle) = subtitle {
                            <p class="text-sm opacity-70">{subtitle}</p>
                        }
                    </div>
                    <div class="flex flex-col md:flex-row md:items-end gap-2">
                        if props.show_filters {
                            <Filters
                                type_filter={table.query.type_filter.clone()}
                                status_filter={table.query.status_filter.clone()}
                                on_type_change={table.set_type_filter.clone()}
                                on_status_change={table.set_status_filter.clone()}
                            />
                        }
                        <Search
                            value={table.query.search_text.clone()}
                            on_change={table.set_search.clone()}
                            placeholder="Search transactions..."
                        />
                    </div>
                </div>

                <TransactionTable
                    rows={table.rows.clone()}
                    query={table.query.clone()}
                    loading={table.loading}
                    on_sort={table.set_sort.clone()}
                />

                if let Some(meta) = &table.meta {
                    <Pagination
                        meta={meta.clone()}
                        loading={table.loading}
                        on_page_change={table.set_page.clone()}
                    />
                }
            </div>
        </div>
    }
}
