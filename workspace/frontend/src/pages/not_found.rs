use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <Layout title="404">
            <div class="hero min-h-[60vh]">
                <div class="hero-content text-center">
                    <div class="max-w-md">
                        <h1 class="text-5xl font-bold">{"404"}</h1>
                        <p class="py-6">{"The page you are looking for does not exist."}</p>
                        <Link<Route> to={Route::Dashboard} classes="btn btn-primary">
                            {"Back to Dashboard"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
