use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UnderMaintenanceProps {
    #[prop_or(AttrValue::Static("Under Maintenance"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("This page is currently under development. Please check back later."))]
    pub message: AttrValue,
}

#[function_component(UnderMaintenance)]
pub fn under_maintenance(props: &UnderMaintenanceProps) -> Html {
    html! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div class="card bg-base-100 shadow max-w-md">
                    <div class="card-body items-center">
                        <i class="fas fa-hard-hat text-6xl text-warning"></i>
                        <h2 class="card-title text-2xl">{&props.title}</h2>
                        <p class="opacity-70">{&props.message}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
