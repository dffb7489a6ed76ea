use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub label: AttrValue,
    pub value: String,
    pub options: Vec<SelectOption>,
    pub on_change: Callback<String>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });

    html! {
        <label class="form-control w-full max-w-xs">
            <div class="label py-1">
                <span class="label-text text-xs">{&props.label}</span>
            </div>
            <select class="select select-bordered select-sm" {onchange}>
                {for props.options.iter().map(|option| html! {
                    <option
                        key={option.value.clone()}
                        value={option.value.clone()}
                        selected={option.value == props.value}
                    >
                        {&option.label}
                    </option>
                })}
            </select>
        </label>
    }
}
