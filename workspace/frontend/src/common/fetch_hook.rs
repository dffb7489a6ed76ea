use yew::prelude::*;
use std::future::Future;
use std::rc::Rc;
use common::ApiError;
use crate::hooks::FetchState;
use crate::common::toast::{ToastContext, ToastType};

/// Runs `fetch_fn` on mount and returns its state plus a refetch callback.
///
/// When `notify` is false failures only land in the returned state; callers
/// with a fallback value use that to stay quiet.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(fetch_fn: F, notify: bool) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider is missing");
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn = fetch_fn.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let fut = (*fetch_fn)();
                match fut.await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        if notify {
                            toast_ctx.show_titled(ToastType::Error, err.title(), err.to_string());
                        } else {
                            log::debug!("Fetch failed quietly: {}", err);
                        }
                        fetch_state.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
