use common::ApiError;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::api_client::health_check;
use crate::common::error::ErrorDisplay;
use crate::common::loading::{Loading, LoadingSize};
use crate::common::toast::ToastContext;
use crate::hooks::FetchState;
use crate::settings::{self, AppSettings};

fn text_input(state: &UseStateHandle<AppSettings>, apply: fn(&mut AppSettings, String)) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, input.value());
        state.set(next);
    })
}

#[function_component(Settings)]
pub fn settings_view() -> Html {
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider is missing");
    let draft = use_state(settings::get_settings);
    let connection = use_state(|| FetchState::<()>::NotStarted);

    let on_host = text_input(&draft, |s, v| s.api_host = v);
    let on_path = text_input(&draft, |s, v| s.api_path = v);
    let on_port = text_input(&draft, |s, v| {
        if let Ok(port) = v.parse() {
            s.api_port = port;
        }
    });
    let on_page_size = text_input(&draft, |s, v| {
        if let Some(size) = v.parse().ok().filter(|size: &u32| *size > 0) {
            s.page_size = size;
        }
    });
    let on_debounce = text_input(&draft, |s, v| {
        if let Ok(ms) = v.parse() {
            s.search_debounce_ms = ms;
        }
    });

    let on_https = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.api_use_https = input.checked();
            draft.set(next);
        })
    };

    let on_save = {
        let draft = draft.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_: MouseEvent| {
            let saved = (*draft).clone();
            settings::update_settings(|current| *current = saved.clone());
            match saved.save_to_storage() {
                Ok(()) => toast_ctx.show_success("Settings saved.".to_string()),
                Err(err) => {
                    log::error!("Failed to persist settings: {:?}", err);
                    toast_ctx.show_warning("Settings applied for this session only.".to_string());
                }
            }
        })
    };

    let on_reset = {
        let draft = draft.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_: MouseEvent| {
            settings::reset_settings();
            draft.set(settings::get_settings());
            toast_ctx.show_info("Defaults restored. Save to keep them.".to_string());
        })
    };

    let test_connection = {
        let connection = connection.clone();
        Callback::from(move |_: ()| {
            let connection = connection.clone();
            connection.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                let result: Result<(), ApiError> = health_check().await;
                connection.set(match result {
                    Ok(()) => FetchState::Success(()),
                    Err(err) => FetchState::Error(err),
                });
            });
        })
    };

    let connection_status = match &*connection {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! { <Loading size={LoadingSize::Small} text={"Contacting server...".to_string()} /> },
        FetchState::Success(()) => html! {
            <div class="alert alert-success mt-4">
                <i class="fas fa-check-circle"></i>
                <span>{format!("Connected to {}", settings::get_settings().api_base_url())}</span>
            </div>
        },
        FetchState::Error(err) => html! {
            <ErrorDisplay error={err.clone()} on_retry={test_connection.clone()} />
        },
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Connection Settings"}</h2>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"API Host"}</span></label>
                        <input type="text" class="input input-bordered w-full" value={draft.api_host.clone()} oninput={on_host} />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"API Port"}</span></label>
                        <input type="number" class="input input-bordered w-full" value={draft.api_port.to_string()} oninput={on_port} />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"API Path"}</span></label>
                        <input type="text" class="input input-bordered w-full" value={draft.api_path.clone()} oninput={on_path} />
                    </div>
                    <label class="label cursor-pointer justify-start gap-4">
                        <input type="checkbox" class="toggle toggle-primary" checked={draft.api_use_https} onchange={on_https} />
                        <span class="label-text">{"Use HTTPS"}</span>
                    </label>
                    <p class="text-xs opacity-60">{draft.api_base_url()}</p>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-outline" onclick={test_connection.reform(|_: MouseEvent| ())}>
                            {"Test Connection"}
                        </button>
                    </div>
                    {connection_status}
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Table Settings"}</h2>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"Rows per page"}</span></label>
                        <input type="number" min="1" class="input input-bordered w-full" value={draft.page_size.to_string()} oninput={on_page_size} />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Search delay (ms)"}</span></label>
                        <input type="number" min="0" class="input input-bordered w-full" value={draft.search_debounce_ms.to_string()} oninput={on_debounce} />
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-ghost" onclick={on_reset}>{"Reset to Defaults"}</button>
                        <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
