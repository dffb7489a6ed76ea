use common::PaginationMeta;
use table::{sequence, PageToken};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub meta: PaginationMeta,
    pub on_page_change: Callback<u32>,
    /// Disables every control while a page is loading.
    #[prop_or_default]
    pub loading: bool,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let meta = &props.meta;
    let current = meta.current_page;
    let loading = props.loading;

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_page_change.emit(current.saturating_sub(1));
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_page_change.emit(current + 1);
        })
    };

    html! {
        <div class="flex flex-col md:flex-row justify-between items-center gap-4 my-4">
            <div class="text-sm text-base-content/70">
                {format!(
                    "Showing {} to {} of {} entries",
                    meta.first_item(),
                    meta.last_item(),
                    meta.total
                )}
            </div>

            <div class="flex items-center gap-2">
                <button
                    class="btn btn-sm"
                    disabled={!meta.has_previous() || loading}
                    onclick={on_previous}
                >
                    <i class="fas fa-chevron-left"></i>
                    {" Previous"}
                </button>

                {for sequence(current, meta.total_pages).into_iter().enumerate().map(|(idx, token)| {
                    match token {
                        PageToken::Ellipsis => html! {
                            <span key={format!("ellipsis-{}", idx)} class="px-2">{"..."}</span>
                        },
                        PageToken::Number(page) => {
                            let on_click = {
                                let on_page_change = props.on_page_change.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    on_page_change.emit(page);
                                })
                            };

                            html! {
                                <button
                                    key={format!("page-{}", page)}
                                    class={classes!(
                                        "btn",
                                        "btn-sm",
                                        if page == current { "btn-primary" } else { "" }
                                    )}
                                    disabled={loading}
                                    onclick={on_click}
                                >
                                    {page}
                                </button>
                            }
                        }
                    }
                })}

                <button
                    class="btn btn-sm"
                    disabled={!meta.has_next() || loading}
                    onclick={on_next}
                >
                    {"Next "}
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
        </div>
    }
}
