//! Change notification
//!
//! Observers learn that the grid changed and are expected to re-read it.
//! The event carries no payload.

use crossbeam_channel::{Receiver, Sender, unbounded};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoardEvent {
    Changed,
}

type Callback = Box<dyn FnMut(BoardEvent)>;

/// Registered callbacks and channel subscribers of one board
#[derive(Default)]
pub struct Observers {
    callbacks: Vec<Callback>,
    subscribers: Vec<Sender<BoardEvent>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(BoardEvent) + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    pub fn subscribe(&mut self) -> Receiver<BoardEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver `event` to every observer. Subscribers whose receiver was
    /// dropped are removed.
    pub fn notify(&mut self, event: BoardEvent) {
        for callback in self.callbacks.iter_mut() {
            callback(event);
        }
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    pub fn len(&self) -> usize {
        self.callbacks.len() + self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("callbacks", &self.callbacks.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_callbacks_and_prunes_subscribers() {
        let mut observers = Observers::new();
        assert!(observers.is_empty());

        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        observers.on_change(move |_| seen.set(seen.get() + 1));
        let kept = observers.subscribe();
        drop(observers.subscribe());
        assert_eq!(observers.len(), 3);

        observers.notify(BoardEvent::Changed);
        assert_eq!(calls.get(), 1);
        assert_eq!(kept.try_recv(), Ok(BoardEvent::Changed));
        assert_eq!(observers.len(), 2);
        assert!(!observers.is_empty());
    }
}
