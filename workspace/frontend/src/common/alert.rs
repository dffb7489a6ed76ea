use yew::prelude::*;
use crate::common::toast::ToastType;

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub alert_type: ToastType,
    pub message: String,
    #[prop_or_default]
    pub title: Option<String>,
    /// Renders a close button that emits this callback.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

fn default_title(alert_type: ToastType) -> &'static str {
    match alert_type {
        ToastType::Info => "Info",
        ToastType::Success => "Success",
        ToastType::Warning => "Warning",
        ToastType::Error => "Error",
    }
}

/// Inline alert box, dismissible when `on_close` is set.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let title = props
        .title
        .clone()
        .unwrap_or_else(|| default_title(props.alert_type).to_string());

    html! {
        <div role="alert" class={classes!("alert", props.alert_type.alert_class())}>
            <i class={props.alert_type.icon()}></i>
            <div class="flex flex-col">
                <span class="font-semibold">{title}</span>
                <span class="text-sm">{&props.message}</span>
            </div>
            if let Some(on_close) = &props.on_close {
                <button
                    class="btn btn-sm btn-ghost btn-circle"
                    aria-label="Close alert"
                    onclick={on_close.reform(|_: MouseEvent| ())}
                >
                    <i class="fas fa-times"></i>
                </button>
            }
        </div>
    }
}
