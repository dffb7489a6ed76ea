use common::UploadSummary;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;
use super::panel::UploadPanel;

#[function_component(UploadView)]
pub fn upload_view() -> Html {
    let last_upload = use_state(|| None::<UploadSummary>);

    let on_uploaded = {
        let last_upload = last_upload.clone();
        Callback::from(move |summary: UploadSummary| last_upload.set(Some(summary)))
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Import Statement"}</h2>
                    <p class="text-sm opacity-70">
                        {"Upload a CSV export of your bank statement. Each line needs a timestamp, name, type, amount, status and description."}
                    </p>
                    <UploadPanel on_uploaded={on_uploaded} />
                </div>
            </div>

            if let Some(summary) = &*last_upload {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Last Upload"}</h2>
                        if !summary.message.is_empty() {
                            <p class="text-sm">{&summary.message}</p>
                        }
                        <div class="stats stats-vertical md:stats-horizontal shadow">
                            <div class="stat">
                                <div class="stat-title">{"Records"}</div>
                                <div class="stat-value text-2xl">{summary.total_records}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">{"Succeeded"}</div>
                                <div class="stat-value text-2xl text-success">{summary.success_records}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">{"Failed"}</div>
                                <div class="stat-value text-2xl text-error">{summary.failed_records}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">{"Pending"}</div>
                                <div class="stat-value text-2xl text-warning">{summary.pending_records}</div>
                            </div>
                        </div>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::Transactions} classes="btn btn-primary btn-sm">
                                {"View Transactions"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
