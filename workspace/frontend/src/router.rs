use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::dashboard::DashboardPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::reports::ReportsPage;
use crate::pages::settings::SettingsPage;
use crate::pages::transactions::TransactionsPage;
use crate::pages::upload::UploadPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/transactions")]
    Transactions,
    #[at("/upload")]
    Upload,
    #[at("/reports")]
    Reports,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <DashboardPage /> }
        }
        Route::Transactions => {
            log::trace!("Rendering Transactions page");
            html! { <TransactionsPage /> }
        }
        Route::Upload => {
            log::trace!("Rendering Upload page");
            html! { <UploadPage /> }
        }
        Route::Reports => {
            log::trace!("Rendering Reports page");
            html! { <ReportsPage /> }
        }
        Route::Settings => {
            log::trace!("Rendering Settings page");
            html! { <SettingsPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFoundPage /> }
        }
    }
}
