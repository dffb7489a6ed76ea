use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::maintenance::UnderMaintenance;

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    html! {
        <Layout title="Reports">
            <UnderMaintenance
                title="Reports"
                message="Reports are currently under development. Please check back later."
            />
        </Layout>
    }
}
