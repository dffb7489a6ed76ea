use std::cell::RefCell;
use std::rc::Rc;
use common::PaginationMeta;
use table::{execute, FetchTicket, PageSource, QueryState, Resolution, TableConfig, TableController};
use yew::prelude::*;
use crate::common::toast::{ToastContext, ToastType};

/// Render-time view of a table plus its actions.
#[derive(Clone, PartialEq)]
pub struct UseTableHandle<R> {
    pub rows: Vec<R>,
    pub meta: Option<PaginationMeta>,
    pub loading: bool,
    /// No response has been applied yet.
    pub initial_load: bool,
    pub query: QueryState,
    pub set_search: Callback<String>,
    pub set_sort: Callback<String>,
    pub set_page: Callback<u32>,
    pub set_type_filter: Callback<String>,
    pub set_status_filter: Callback<String>,
    pub refresh: Callback<()>,
}

type SharedController<R> = Rc<RefCell<TableController<R>>>;

/// Runs a controller action and dispatches the ticket it produced, if any.
fn run_action<R, F>(controller: &SharedController<R>, update: &UseForceUpdateHandle, dispatch: &Callback<FetchTicket>, action: F)
where
    F: FnOnce(&mut TableController<R>) -> Option<FetchTicket>,
{
    // The borrow must end before re-rendering reads the controller
    let ticket = action(&mut controller.borrow_mut());
    if let Some(ticket) = ticket {
        update.force_update();
        dispatch.emit(ticket);
    }
}

/// Binds a [`TableController`] to a component.
///
/// The first page is loaded on mount. Every action that changes the query
/// fetches from `source`; responses for superseded queries are dropped and
/// failures are reported through the toast context while the previous rows
/// stay on screen.
#[hook]
pub fn use_table<S>(source: S, config: TableConfig) -> UseTableHandle<S::Row>
where
    S: PageSource + 'static,
    S::Row: Clone + 'static,
{
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider is missing");
    let source = use_state(|| Rc::new(source));
    let controller: SharedController<S::Row> = use_mut_ref(|| TableController::new(config));
    let update = use_force_update();

    let dispatch = {
        let controller = controller.clone();
        let source = (*source).clone();
        let update = update.clone();

        use_callback((), move |ticket: FetchTicket, _| {
            let controller = controller.clone();
            let source = source.clone();
            let update = update.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let (token, result) = execute(source.as_ref(), ticket).await;
                let resolution = controller.borrow_mut().resolve(token, result);
                match resolution {
                    Resolution::Applied => update.force_update(),
                    Resolution::Failed(err) => {
                        log::error!("Failed to load table page: {}", err);
                        toast_ctx.show_titled(ToastType::Error, err.title(), err.to_string());
                        update.force_update();
                    }
                    Resolution::Stale => {
                        log::debug!("Ignoring response for superseded request {}", token.value());
                    }
                }
            });
        })
    };

    let set_search = {
        let (controller, update, dispatch) = (controller.clone(), update.clone(), dispatch.clone());
        use_callback((), move |text: String, _| {
            log::debug!("Table search: {:?}", text);
            run_action(&controller, &update, &dispatch, |table| table.set_search(text));
        })
    };

    let set_sort = {
        let (controller, update, dispatch) = (controller.clone(), update.clone(), dispatch.clone());
        use_callback((), move |key: String, _| {
            run_action(&controller, &update, &dispatch, |table| table.set_sort(&key));
        })
    };

    let set_page = {
        let (controller, update, dispatch) = (controller.clone(), update.clone(), dispatch.clone());
        use_callback((), move |page: u32, _| {
            run_action(&controller, &update, &dispatch, |table| table.set_page(page));
        })
    };

    let set_type_filter = {
        let (controller, update, dispatch) = (controller.clone(), update.clone(), dispatch.clone());
        use_callback((), move |value: String, _| {
            run_action(&controller, &update, &dispatch, |table| table.set_type_filter(value));
        })
    };

    let set_status_filter = {
        let (controller, update, dispatch) = (controller.clone(), update.clone(), dispatch.clone());
        use_callback((), move |value: String, _| {
            run_action(&controller, &update, &dispatch, |table| table.set_status_filter(value));
        })
    };

    let refresh = {
        let (controller, update, dispatch) = (controller.clone(), update.clone(), dispatch.clone());
        use_callback((), move |_: (), _| {
            log::debug!("Table refresh requested");
            run_action(&controller, &update, &dispatch, |table| Some(table.refresh()));
        })
    };

    // Load the first page on mount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let state = controller.borrow();
    UseTableHandle {
        rows: state.rows().to_vec(),
        meta: state.meta().cloned(),
        loading: state.loading(),
        initial_load: state.is_initial_load(),
        query: state.query().clone(),
        set_search,
        set_sort,
        set_page,
        set_type_filter,
        set_status_filter,
        refresh,
    }
}
