use yew::prelude::*;

/// Shared collapsed flag of the navigation sidebar.
#[derive(Clone, PartialEq)]
pub struct SidebarContext {
    pub collapsed: bool,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SidebarProviderProps {
    pub children: Children,
    #[prop_or_default]
    pub initially_collapsed: bool,
}

#[function_component(SidebarProvider)]
pub fn sidebar_provider(props: &SidebarProviderProps) -> Html {
    let collapsed = use_state_eq(|| props.initially_collapsed);

    let toggle = {
        let collapsed = collapsed.clone();
        Callback::from(move |_| {
            let next = !*collapsed;
            log::debug!("Sidebar collapsed: {}", next);
            collapsed.set(next);
        })
    };

    let context = SidebarContext {
        collapsed: *collapsed,
        toggle,
    };

    html! {
        <ContextProvider<SidebarContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SidebarContext>>
    }
}
