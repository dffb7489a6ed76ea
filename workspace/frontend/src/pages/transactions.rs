use table::TableConfig;
use yew::prelude::*;

use crate::api_client::transaction::TransactionSource;
use crate::components::layout::Layout;
use crate::components::transactions::TransactionPanel;
use crate::hooks::use_table;
use crate::settings;

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let config = TableConfig {
        page_size: settings::get_settings().page_size,
        ..TableConfig::default()
    };
    let table = use_table(TransactionSource, config);

    // Re-runs the current query, keeping search, sort, filters and page
    let on_refresh = table.refresh.clone();

    html! {
        <Layout title="Transactions" on_refresh={Some(on_refresh)}>
            <TransactionPanel table={table} title="Transactions" show_filters={true} />
        </Layout>
    }
}
