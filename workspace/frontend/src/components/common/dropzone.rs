use common::format::format_file_size;
use web_sys::{DragEvent, File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DropzoneProps {
    pub on_file_select: Callback<File>,
    #[prop_or(AttrValue::Static(".csv"))]
    pub accept: AttrValue,
    #[prop_or(AttrValue::Static("Upload File"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("Click or drag and drop"))]
    pub subtitle: AttrValue,
    /// Ignores new files, e.g. while an upload is running.
    #[prop_or_default]
    pub disabled: bool,
}

/// File picker with drag-and-drop. Validation is left to the parent.
#[function_component(Dropzone)]
pub fn dropzone(props: &DropzoneProps) -> Html {
    let dragging = use_state_eq(|| false);
    let selected = use_state(|| None::<File>);
    let input_ref = use_node_ref();

    let select_file = {
        let selected = selected.clone();
        let on_file_select = props.on_file_select.clone();
        let disabled = props.disabled;
        Callback::from(move |file: File| {
            if disabled {
                return;
            }
            log::debug!("File selected: {}", file.name());
            selected.set(Some(file.clone()));
            on_file_select.emit(file);
        })
    };

    let on_drag_over = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(true);
        })
    };

    let on_drag_leave = {
        let dragging = dragging.clone();
        Callback::from(move |_: DragEvent| dragging.set(false))
    };

    let on_drop = {
        let dragging = dragging.clone();
        let select_file = select_file.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);
            let file = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                select_file.emit(file);
            }
        })
    };

    let on_click = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_input_change = {
        let select_file = select_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                select_file.emit(file);
            }
        })
    };

    let on_remove = {
        let selected = selected.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            selected.set(None);
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    let hint = format!("{} only", props.accept.replace('.', "").to_uppercase());

    html! {
        <div>
            <input
                ref={input_ref}
                type="file"
                class="hidden"
                accept={props.accept.clone()}
                onchange={on_input_change}
            />
            <div
                class={classes!(
                    "border-2", "border-dashed", "rounded-box", "p-8", "bg-base-100",
                    "transition-colors", "duration-150",
                    if *dragging { "border-primary bg-primary/10" } else { "border-base-300" },
                    if selected.is_none() && !props.disabled { "cursor-pointer" } else { "" }
                )}
                ondragover={on_drag_over}
                ondragleave={on_drag_leave}
                ondrop={on_drop}
                onclick={if selected.is_none() { Some(on_click) } else { None }}
            >
                {match &*selected {
                    None => html! {
                        <div class="flex flex-col items-center gap-2 text-center">
                            <i class="fas fa-cloud-upload-alt text-3xl text-primary"></i>
                            <p class="font-semibold">{&props.title}</p>
                            <p class="text-sm opacity-70">{&props.subtitle}</p>
                            <p class="text-xs opacity-50">{hint}</p>
                        </div>
                    },
                    Some(file) => html! {
                        <div class="flex items-center gap-4">
                            <i class="fas fa-file-csv text-3xl text-primary"></i>
                            <div class="flex-1 min-w-0">
                                <p class="font-semibold truncate">{file.name()}</p>
                                <p class="text-sm opacity-70">{format_file_size(file.size() as u64)}</p>
                            </div>
                            <button
                                type="button"
                                class="btn btn-ghost btn-sm btn-circle"
                                aria-label="Remove file"
                                disabled={props.disabled}
                                onclick={on_remove}
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
