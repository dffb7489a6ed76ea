use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::upload::UploadView;

#[function_component(UploadPage)]
pub fn upload_page() -> Html {
    html! {
        <Layout title="Upload">
            <UploadView />
        </Layout>
    }
}
