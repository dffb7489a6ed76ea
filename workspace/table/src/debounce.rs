use std::time::Duration;

/// Delay applied to search keystrokes.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Identifies one scheduled value of a [`Debouncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Trailing-edge debounce bookkeeping.
///
/// The timer itself belongs to the caller: schedule a value, start a timer
/// for the returned ticket, and call [`fire`](Self::fire) when it elapses.
/// Only the newest ticket yields its value, so a timer that was not cancelled
/// in time is harmless.
#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any pending value.
    pub fn schedule(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Takes the pending value if `ticket` is still the newest.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Takes the pending value immediately and invalidates outstanding timers.
    pub fn flush(&mut self) -> Option<T> {
        self.generation += 1;
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{FetchTicket, TableController};
    use crate::query::TableConfig;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_only_newest_ticket_fires() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.schedule("a");
        let second = debouncer.schedule("ab");

        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), Some("ab"));
        assert_eq!(debouncer.fire(second), None);
    }

    #[test]
    fn test_flush_and_cancel_invalidate_timers() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.schedule(1);
        assert_eq!(debouncer.flush(), Some(1));
        assert_eq!(debouncer.fire(ticket), None);

        let ticket = debouncer.schedule(2);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_burst_issues_single_fetch() {
        let debouncer = Rc::new(RefCell::new(Debouncer::new()));
        let table = Rc::new(RefCell::new(TableController::<u32>::new(TableConfig::default())));
        let issued: Rc<RefCell<Vec<FetchTicket>>> = Rc::new(RefCell::new(Vec::new()));

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                for text in ["s", "sa", "sal", "sala", "salar"] {
                    let ticket = debouncer.borrow_mut().schedule(text.to_string());
                    let debouncer = debouncer.clone();
                    let table = table.clone();
                    let issued = issued.clone();
                    tokio::task::spawn_local(async move {
                        tokio::time::sleep(DEFAULT_DELAY).await;
                        let Some(value) = debouncer.borrow_mut().fire(ticket) else {
                            return;
                        };
                        if let Some(fetch) = table.borrow_mut().set_search(value) {
                            issued.borrow_mut().push(fetch);
                        }
                    });
                    tokio::time::sleep(Duration::from_millis(50)).await;
                }
                tokio::time::sleep(Duration::from_secs(1)).await;
            })
            .await;

        let issued = issued.borrow();
        assert_eq!(issued.len(), 1);
        assert_eq!(issued[0].query.search_text, "salar");
        assert_eq!(issued[0].query.page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pauses_longer_than_delay_fire_each_value() {
        let debouncer = Rc::new(RefCell::new(Debouncer::new()));
        let fired = Rc::new(RefCell::new(Vec::new()));

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                for text in ["rent", "salary"] {
                    let ticket = debouncer.borrow_mut().schedule(text);
                    let debouncer = debouncer.clone();
                    let fired = fired.clone();
                    tokio::task::spawn_local(async move {
                        tokio::time::sleep(DEFAULT_DELAY).await;
                        if let Some(value) = debouncer.borrow_mut().fire(ticket) {
                            fired.borrow_mut().push(value);
                        }
                    });
                    tokio::time::sleep(Duration::from_millis(400)).await;
                }
            })
            .await;

        assert_eq!(*fired.borrow(), vec!["rent", "salary"]);
    }
}
