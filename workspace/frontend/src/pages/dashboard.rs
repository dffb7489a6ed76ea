use common::{StatementSummary, UploadSummary};
use table::TableConfig;
use yew::prelude::*;

use crate::api_client::transaction::{fetch_balance, fetch_issues_count, TransactionSource};
use crate::components::dashboard::Stats;
use crate::components::layout::Layout;
use crate::components::transactions::TransactionPanel;
use crate::components::upload::UploadPanel;
use crate::hooks::{use_fetch_with_refetch, use_table};
use crate::settings;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let config = TableConfig {
        page_size: settings::get_settings().page_size,
        ..TableConfig::default()
    };
    let table = use_table(TransactionSource, config);
    // Without these endpoints the cards fall back to the loaded page
    let (balance_state, refetch_balance) = use_fetch_with_refetch(fetch_balance, false);
    let (issues_state, refetch_issues) = use_fetch_with_refetch(fetch_issues_count, false);

    let summary = StatementSummary::from_rows(&table.rows)
        .with_remote(balance_state.data().copied(), issues_state.data().copied());
    let total = table.meta.as_ref().map(|meta| meta.total).unwrap_or(0);
    let initial_load = table.initial_load;

    let reload = {
        let refresh = table.refresh.clone();
        Callback::from(move |_: ()| {
            refresh.emit(());
            refetch_balance.emit(());
            refetch_issues.emit(());
        })
    };

    let on_refresh = {
        let reload = reload.clone();
        Callback::from(move |_: ()| {
            log::debug!("Dashboard refresh requested");
            reload.emit(());
        })
    };

    let on_uploaded = Callback::from(move |summary: UploadSummary| {
        log::info!("Statement uploaded ({} records), refreshing dashboard", summary.total_records);
        reload.emit(());
    });

    html! {
        <Layout title="Dashboard" on_refresh={Some(on_refresh)}>
            <div class="flex flex-col gap-6">
                <Stats summary={summary} total={total} loading={initial_load} />
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <UploadPanel on_uploaded={on_uploaded} />
                    </div>
                </div>
                <TransactionPanel table={table} />
            </div>
        </Layout>
    }
}
