use std::rc::Rc;
use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastType {
    pub fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Info => "alert-info",
            ToastType::Success => "alert-success",
            ToastType::Warning => "alert-warning",
            ToastType::Error => "alert-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "fas fa-info-circle",
            ToastType::Success => "fas fa-check-circle",
            ToastType::Warning => "fas fa-exclamation-triangle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: usize,
    pub title: Option<String>,
    pub message: String,
    pub toast_type: ToastType,
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

enum ToastAction {
    Add(Toast),
    Remove(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<(ToastType, Option<String>, String)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_info(&self, message: String) {
        self.add_toast.emit((ToastType::Info, None, message));
    }

    pub fn show_success(&self, message: String) {
        self.add_toast.emit((ToastType::Success, None, message));
    }

    pub fn show_warning(&self, message: String) {
        self.add_toast.emit((ToastType::Warning, None, message));
    }

    /// Shows a toast with a heading above the message.
    pub fn show_titled(&self, toast_type: ToastType, title: &str, message: String) {
        self.add_toast.emit((toast_type, Some(title.to_string()), message));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let add_toast = {
        let dispatcher = list.dispatcher();
        use_callback((), move |(toast_type, title, message): (ToastType, Option<String>, String), _| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            log::debug!("Showing {:?} toast #{}: {}", toast_type, id, message);
            dispatcher.dispatch(ToastAction::Add(Toast {
                id,
                title,
                message,
                toast_type,
            }));

            let dispatcher = dispatcher.clone();
            let duration = settings::get_settings().toast_duration_ms;
            gloo_timers::callback::Timeout::new(duration, move || {
                dispatcher.dispatch(ToastAction::Remove(id));
            })
            .forget();
        })
    };

    let remove_toast = {
        let dispatcher = list.dispatcher();
        use_callback((), move |id: usize, _| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: list.toasts.clone(),
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <div class="flex flex-col">
                                if let Some(title) = &toast.title {
                                    <span class="font-semibold">{title}</span>
                                }
                                <span>{&toast.message}</span>
                            </div>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
