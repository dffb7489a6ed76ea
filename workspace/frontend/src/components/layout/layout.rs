use yew::prelude::*;
use super::navbar::Navbar;
use super::sidebar::Sidebar;
use super::breadcrumb::Breadcrumb;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex min-h-screen bg-base-200">
            <Sidebar />
            <div class="flex flex-col flex-1 min-w-0 transition-all duration-300">
                <Navbar title={props.title.clone()} on_refresh={props.on_refresh.clone()} />
                <Breadcrumb />
                <main class="flex-1 p-6 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}
