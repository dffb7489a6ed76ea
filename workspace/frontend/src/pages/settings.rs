use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::settings::Settings;

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    html! {
        <Layout title="Settings">
            <Settings />
        </Layout>
    }
}
