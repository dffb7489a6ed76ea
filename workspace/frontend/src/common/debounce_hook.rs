use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use table::Debouncer;
use yew::prelude::*;

/// Handle returned by [`use_debounced`].
#[derive(Clone, PartialEq)]
pub struct DebouncedCallback<T: 'static> {
    /// Schedules a value; only the last one within the delay is emitted.
    pub schedule: Callback<T>,
    /// Emits the pending value, if any, right away.
    pub flush: Callback<()>,
    /// Drops the pending value.
    pub cancel: Callback<()>,
}

/// Trailing-edge debounce of `on_fire` by `delay_ms`.
///
/// A new value replaces the pending timeout, which cancels it. The
/// [`Debouncer`] generation check additionally discards any timer that
/// already fired for a superseded value.
#[hook]
pub fn use_debounced<T>(delay_ms: u32, on_fire: Callback<T>) -> DebouncedCallback<T>
where
    T: 'static,
{
    let debouncer = use_mut_ref(Debouncer::<T>::new);
    let timeout: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    // Keep the latest callback without rescheduling pending timers
    let on_fire_ref = use_mut_ref(|| on_fire.clone());
    *on_fire_ref.borrow_mut() = on_fire;

    let schedule = {
        let debouncer = debouncer.clone();
        let timeout = timeout.clone();
        let on_fire_ref = on_fire_ref.clone();
        use_callback(delay_ms, move |value: T, delay_ms| {
            let ticket = debouncer.borrow_mut().schedule(value);
            let debouncer = debouncer.clone();
            let on_fire_ref = on_fire_ref.clone();
            let timer = Timeout::new(*delay_ms, move || {
                let value = debouncer.borrow_mut().fire(ticket);
                if let Some(value) = value {
                    let on_fire = on_fire_ref.borrow().clone();
                    on_fire.emit(value);
                }
            });
            // Dropping the previous timeout cancels it
            *timeout.borrow_mut() = Some(timer);
        })
    };

    let flush = {
        let debouncer = debouncer.clone();
        let timeout = timeout.clone();
        let on_fire_ref = on_fire_ref.clone();
        use_callback((), move |_: (), _| {
            timeout.borrow_mut().take();
            let value = debouncer.borrow_mut().flush();
            if let Some(value) = value {
                let on_fire = on_fire_ref.borrow().clone();
                on_fire.emit(value);
            }
        })
    };

    let cancel = {
        let debouncer = debouncer.clone();
        let timeout = timeout.clone();
        use_callback((), move |_: (), _| {
            timeout.borrow_mut().take();
            debouncer.borrow_mut().cancel();
        })
    };

    // Pending timers must not outlive the component
    {
        let timeout = timeout.clone();
        use_effect_with((), move |_| move || {
            timeout.borrow_mut().take();
        });
    }

    DebouncedCallback { schedule, flush, cancel }
}
