use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::hooks::use_debounced;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct SearchProps {
    /// Last committed search text.
    pub value: String,
    /// Emitted with the debounced input, and immediately on clear or Enter.
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("Search..."))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub debounce_ms: Option<u32>,
}

#[function_component(Search)]
pub fn search(props: &SearchProps) -> Html {
    let input_value = use_state(|| props.value.clone());
    let delay = props
        .debounce_ms
        .unwrap_or_else(|| settings::get_settings().search_debounce_ms);
    let debounced = use_debounced(delay, props.on_change.clone());

    // Follow external resets of the committed value
    {
        let input_value = input_value.clone();
        use_effect_with(props.value.clone(), move |value| {
            input_value.set(value.clone());
            || ()
        });
    }

    let on_input = {
        let input_value = input_value.clone();
        let schedule = debounced.schedule.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            input_value.set(value.clone());
            schedule.emit(value);
        })
    };

    let on_keydown = {
        let flush = debounced.flush.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                flush.emit(());
            }
        })
    };

    let on_clear = {
        let input_value = input_value.clone();
        let cancel = debounced.cancel.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Search cleared");
            cancel.emit(());
            input_value.set(String::new());
            on_change.emit(String::new());
        })
    };

    html! {
        <label class="input input-bordered input-sm flex items-center gap-2 w-full max-w-xs">
            <i class="fas fa-search opacity-60"></i>
            <input
                type="text"
                class="grow"
                value={(*input_value).clone()}
                placeholder={props.placeholder.clone()}
                oninput={on_input}
                onkeydown={on_keydown}
            />
            if !input_value.is_empty() {
                <button type="button" class="btn btn-ghost btn-xs btn-circle" aria-label="Clear search" onclick={on_clear}>
                    <i class="fas fa-times"></i>
                </button>
            }
        </label>
    }
}
