use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

fn label(route: &Route) -> &'static str {
    match route {
        Route::Dashboard => "Home",
        Route::Transactions => "Transactions",
        Route::Upload => "Upload",
        Route::Reports => "Reports",
        Route::Settings => "Settings",
        Route::NotFound => "404",
    }
}

#[function_component(Breadcrumb)]
pub fn breadcrumb() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    let items = match route {
        Route::Dashboard => vec![Route::Dashboard],
        other => vec![Route::Dashboard, other],
    };

    html! {
        <div class="breadcrumbs text-sm px-6 py-2 bg-base-100">
            <ul>
                {for items.iter().enumerate().map(|(idx, item)| {
                    let is_last = idx == items.len() - 1;
                    html! {
                        <li>
                            if is_last {
                                <span class="text-primary font-semibold">{label(item)}</span>
                            } else {
                                <Link<Route> to={item.clone()} classes="hover:text-primary">
                                    {label(item)}
                                </Link<Route>>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
