use yew::prelude::*;
use crate::common::sidebar::SidebarContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let sidebar = use_context::<SidebarContext>().expect("SidebarProvider is missing");

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <button
                    aria-label="toggle sidebar"
                    class="btn btn-square btn-ghost"
                    onclick={sidebar.toggle.reform(|_: MouseEvent| ())}
                >
                    <i class="fas fa-bars text-xl"></i>
                </button>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            if let Some(on_refresh) = &props.on_refresh {
                <div class="flex-none">
                    <button
                        class="btn btn-ghost btn-circle"
                        aria-label="Refresh"
                        onclick={on_refresh.reform(|_: MouseEvent| ())}
                    >
                        <i class="fas fa-sync-alt"></i>
                    </button>
                </div>
            }
        </div>
    }
}
