use crate::game::error::SessionError;
use crate::game::session::Session;
use crate::game::summary::SessionSummary;
use crate::model::bid::Bid;
use std::sync::{Arc, Mutex, MutexGuard};

/// External listener fed a read-only snapshot after every successful
/// state-changing call on a hosted session.
pub trait SessionObserver: Send + Sync {
    fn on_update(&self, summary: &SessionSummary);
}

impl<F> SessionObserver for F
where
    F: Fn(&SessionSummary) + Send + Sync,
{
    fn on_update(&self, summary: &SessionSummary) {
        self(summary)
    }
}

/// Single-writer handle to one session. The engine itself is synchronous
/// and lock-free, so a hosting layer serving concurrent callers routes
/// every call through this lock; observers are notified synchronously
/// after each successful mutation and never after a rejection.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    session: Session,
    observers: Vec<(String, Arc<dyn SessionObserver>)>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                session,
                observers: Vec::new(),
            })),
        }
    }

    /// Registers an observer under a caller-chosen id. Re-registering an
    /// id that is already present is a no-op.
    pub fn subscribe(&self, id: &str, observer: Arc<dyn SessionObserver>) {
        let mut inner = self.lock();
        if inner.observers.iter().any(|(key, _)| key == id) {
            return;
        }
        inner.observers.push((id.to_string(), observer));
    }

    /// Removes an observer by id. Removing an absent id is a no-op.
    pub fn unsubscribe(&self, id: &str) {
        self.lock().observers.retain(|(key, _)| key != id);
    }

    pub fn join(&self, player: &str) -> Result<(), SessionError> {
        self.mutate(|session| session.join(player))
    }

    pub fn bid(&self, player: &str, bid: Bid) -> Result<(), SessionError> {
        self.mutate(|session| session.bid(player, bid))
    }

    pub fn bid_amount(&self, player: &str, amount: u8) -> Result<(), SessionError> {
        self.mutate(|session| session.bid_amount(player, amount))
    }

    pub fn play_card(&self, player: &str, index: usize) -> Result<(), SessionError> {
        self.mutate(|session| session.play_card(player, index))
    }

    pub fn summary(&self) -> SessionSummary {
        self.lock().session.summary()
    }

    fn mutate(
        &self,
        op: impl FnOnce(&mut Session) -> Result<(), SessionError>,
    ) -> Result<(), SessionError> {
        let mut inner = self.lock();
        op(&mut inner.session)?;
        let summary = inner.session.summary();
        let observers: Vec<Arc<dyn SessionObserver>> = inner
            .observers
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        // Notify outside the lock so observers may read the session again.
        drop(inner);
        for observer in observers {
            observer.on_update(&summary);
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("session lock poisoned")
    }
}
