use common::format::{format_signed_amount, format_timestamp};
use common::{TransactionDto, TransactionStatus, TransactionType};
use table::{QueryState, SortDirection};
use yew::prelude::*;
use crate::common::loading::TableSkeleton;

/// Column header label and, for sortable columns, the server sort key.
const COLUMNS: [(&str, Option<&str>); 6] = [
    ("Date", Some("timestamp")),
    ("Name", Some("name")),
    ("Type", Some("type")),
    ("Amount", Some("amount")),
    ("Status", Some("status")),
    ("Description", None),
];

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub rows: Vec<TransactionDto>,
    pub query: QueryState,
    pub loading: bool,
    pub on_sort: Callback<String>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let body = if props.loading && props.rows.is_empty() {
        html! { <TableSkeleton rows={5} columns={COLUMNS.len()} /> }
    } else if props.rows.is_empty() {
        html! {
            <tr>
                <td colspan={COLUMNS.len().to_string()} class="text-center py-8 text-gray-500">
                    {"No transactions found."}
                </td>
            </tr>
        }
    } else {
        html! { for props.rows.iter().map(render_transaction_row) }
    };

    html! {
        <div class="overflow-x-auto">
            <table class={classes!("table", "table-zebra", (props.loading && !props.rows.is_empty()).then_some("opacity-60"))}>
                <thead>
                    <tr>
                        {for COLUMNS.iter().map(|(label, key)| match key {
                            Some(key) => render_sortable_header(label, key, props.query.direction_for(key), props.on_sort.clone()),
                            None => html! { <th>{*label}</th> },
                        })}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

fn render_sortable_header(label: &str, key: &str, direction: SortDirection, on_sort: Callback<String>) -> Html {
    let icon = match direction {
        SortDirection::Ascending => html! { <i class="fas fa-sort-up ml-1"></i> },
        SortDirection::Descending => html! { <i class="fas fa-sort-down ml-1"></i> },
        SortDirection::None => html! { <i class="fas fa-sort ml-1 opacity-30"></i> },
    };

    let onclick = {
        let key = key.to_string();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_sort.emit(key.clone());
        })
    };

    html! {
        <th class="cursor-pointer hover:bg-base-200 select-none" onclick={onclick}>
            <div class="flex items-center gap-1">
                {label.to_string()}
                {icon}
            </div>
        </th>
    }
}

fn status_badge(status: TransactionStatus) -> Html {
    let (class, icon) = match status {
        TransactionStatus::Success => ("badge-success", "fas fa-check-circle"),
        TransactionStatus::Failed => ("badge-error", "fas fa-times-circle"),
        TransactionStatus::Pending => ("badge-warning", "fas fa-exclamation-circle"),
    };

    html! {
        <span class={classes!("badge", "badge-sm", "gap-1", class)}>
            <i class={icon}></i>
            {status.as_str()}
        </span>
    }
}

fn render_transaction_row(transaction: &TransactionDto) -> Html {
    let (type_class, amount_class) = match transaction.transaction_type {
        TransactionType::Credit => ("badge-success", "text-success"),
        TransactionType::Debit => ("badge-error", "text-error"),
    };

    html! {
        <tr key={transaction.id.clone()} class="hover">
            <td class="whitespace-nowrap">{format_timestamp(transaction.timestamp)}</td>
            <td class="font-medium">{&transaction.name}</td>
            <td>
                <span class={classes!("badge", "badge-sm", "badge-outline", type_class)}>
                    {transaction.transaction_type.as_str()}
                </span>
            </td>
            <td class={classes!("font-mono", "text-right", "font-bold", amount_class)}>
                {format_signed_amount(transaction)}
            </td>
            <td>{status_badge(transaction.status)}</td>
            <td class="text-sm opacity-80">{&transaction.description}</td>
        </tr>
    }
}
