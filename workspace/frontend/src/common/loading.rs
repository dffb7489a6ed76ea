use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub size: LoadingSize,
    #[prop_or_default]
    pub text: Option<String>,
}

#[derive(Clone, PartialEq, Default)]
pub enum LoadingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoadingSize {
    fn class(&self) -> &'static str {
        match self {
            LoadingSize::Small => "loading-sm",
            LoadingSize::Medium => "loading-md",
            LoadingSize::Large => "loading-lg",
        }
    }
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class={classes!("loading", "loading-spinner", props.size.class())}></span>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm text-gray-500">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

/// Placeholder for a stat card while its value is loading
#[function_component(CardSkeleton)]
pub fn card_skeleton() -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat flex items-center gap-4">
                <div class="skeleton w-16 h-16 rounded-full shrink-0"></div>
                <div class="flex flex-col gap-2 w-full">
                    <div class="skeleton h-4 w-3/5"></div>
                    <div class="skeleton h-8 w-4/5"></div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TableSkeletonProps {
    #[prop_or(5)]
    pub rows: usize,
    #[prop_or(6)]
    pub columns: usize,
}

/// Placeholder rows shown while a table page is loading
#[function_component(TableSkeleton)]
pub fn table_skeleton(props: &TableSkeletonProps) -> Html {
    html! {
        <>
            {for (0..props.rows).map(|row| html! {
                <tr key={row}>
                    {for (0..props.columns).map(|_| html! {
                        <td><div class="skeleton h-6 w-full"></div></td>
                    })}
                </tr>
            })}
        </>
    }
}
