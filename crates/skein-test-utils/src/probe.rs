//! Lifecycle-recording probe values.
//!
//! A [`Probe`] writes one event into its [`EventLog`] when it is created,
//! cloned, or dropped. Tests use it to verify that a container constructs
//! and destroys each stored value exactly once. Rust moves are invisible
//! by design — transferring a probe records nothing.

use std::cell::RefCell;
use std::rc::Rc;

/// One lifecycle event of a [`Probe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeEvent {
    /// A probe was created from scratch via [`Probe::new`].
    Created,
    /// A probe was produced by cloning an existing one.
    Cloned,
    /// A probe was dropped.
    Dropped,
}

/// Shared, ordered log of probe lifecycle events.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<LifeEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, in order.
    pub fn events(&self) -> Vec<LifeEvent> {
        self.events.borrow().clone()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Probes brought into existence (created + cloned).
    pub fn constructed(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, LifeEvent::Created | LifeEvent::Cloned))
            .count()
    }

    /// Probes dropped so far.
    pub fn dropped(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, LifeEvent::Dropped))
            .count()
    }

    /// Probes currently alive (constructed minus dropped).
    pub fn live(&self) -> usize {
        self.constructed() - self.dropped()
    }

    fn record(&self, event: LifeEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// A value whose construction, cloning, and destruction leave a trace.
pub struct Probe {
    log: EventLog,
}

impl Probe {
    /// Create a probe, recording [`LifeEvent::Created`].
    pub fn new(log: &EventLog) -> Self {
        log.record(LifeEvent::Created);
        Self { log: log.clone() }
    }
}

impl Clone for Probe {
    /// Records [`LifeEvent::Cloned`].
    fn clone(&self) -> Self {
        self.log.record(LifeEvent::Cloned);
        Self {
            log: self.log.clone(),
        }
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.log.record(LifeEvent::Dropped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_create_clone_drop_in_order() {
        let log = EventLog::new();
        {
            let a = Probe::new(&log);
            let _b = a.clone();
        }
        assert_eq!(
            log.events(),
            vec![
                LifeEvent::Created,
                LifeEvent::Cloned,
                LifeEvent::Dropped,
                LifeEvent::Dropped,
            ]
        );
        assert_eq!(log.live(), 0);
    }

    #[test]
    fn moves_record_nothing() {
        let log = EventLog::new();
        let a = Probe::new(&log);
        let b = a; // move
        assert_eq!(log.events(), vec![LifeEvent::Created]);
        drop(b);
        assert_eq!(log.live(), 0);
    }

    #[test]
    fn clear_resets_the_log() {
        let log = EventLog::new();
        let p = Probe::new(&log);
        log.clear();
        assert!(log.events().is_empty());
        drop(p);
        assert_eq!(log.events(), vec![LifeEvent::Dropped]);
    }
}
