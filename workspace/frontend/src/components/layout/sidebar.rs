use yew::prelude::*;
use yew_router::prelude::*;
use crate::common::sidebar::SidebarContext;
use crate::router::Route;

struct NavItem {
    label: &'static str,
    icon: &'static str,
    route: Route,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Dashboard", icon: "fas fa-home", route: Route::Dashboard },
    NavItem { label: "Transactions", icon: "fas fa-exchange-alt", route: Route::Transactions },
    NavItem { label: "Upload", icon: "fas fa-file-upload", route: Route::Upload },
    NavItem { label: "Reports", icon: "fas fa-chart-line", route: Route::Reports },
    NavItem { label: "Settings", icon: "fas fa-cog", route: Route::Settings },
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let sidebar = use_context::<SidebarContext>().expect("SidebarProvider is missing");
    let current = use_route::<Route>();
    let collapsed = sidebar.collapsed;

    let on_toggle = sidebar.toggle.reform(|_: MouseEvent| ());

    html! {
        <aside class={classes!(
            "flex", "flex-col", "min-h-screen", "bg-base-100", "border-r", "border-base-300",
            "transition-all", "duration-300",
            if collapsed { "w-20" } else { "w-64" }
        )}>
            <div class="flex items-center justify-between p-4">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content text-xl">
                        <i class="fas fa-building-columns"></i>
                    </div>
                    if !collapsed {
                        <span class="text-xl font-bold tracking-tight">{"BankViewer"}</span>
                    }
                </div>
                <button class="btn btn-ghost btn-sm btn-square" aria-label="Toggle sidebar" onclick={on_toggle}>
                    <i class={if collapsed { "fas fa-chevron-right" } else { "fas fa-chevron-left" }}></i>
                </button>
            </div>

            <ul class="menu p-2 flex-1">
                {for NAV_ITEMS.iter().map(|item| {
                    let active = current.as_ref() == Some(&item.route);
                    html! {
                        <li key={item.label}>
                            <Link<Route>
                                to={item.route.clone()}
                                classes={classes!("nav-link", active.then_some("active"))}
                            >
                                <i class={classes!(item.icon, "w-5")} title={collapsed.then_some(item.label)}></i>
                                if !collapsed {
                                    <span>{item.label}</span>
                                }
                            </Link<Route>>
                        </li>
                    }
                })}
            </ul>

            <div class="flex items-center gap-3 p-4 border-t border-base-300">
                <div class="w-10 h-10 rounded-full bg-base-300 flex items-center justify-center">
                    <i class="fas fa-user"></i>
                </div>
                if !collapsed {
                    <div class="flex flex-col">
                        <span class="font-semibold text-sm">{"Admin User"}</span>
                        <span class="text-xs opacity-60">{"Administrator"}</span>
                    </div>
                }
            </div>
        </aside>
    }
}
