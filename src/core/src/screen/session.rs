use crate::roster::Sport;
use crate::screen::{ScreenAction, ScreenError, ScreenSnapshot, ScreenState, Transition};
use crate::search::{DebounceHandle, PlayerSource, SearchOutcome, DEFAULT_DEBOUNCE};
use log::debug;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::Mutex;

struct SessionInner {
    state: ScreenState,
    pending: Option<DebounceHandle>,
    /// Bumped whenever `pending` is replaced or cancelled. A fired timer
    /// only starts its lookup while this still matches its own value.
    timer: u64,
}

/// One live builder screen: its state plus the single debounce timer that
/// may be pending for it.
///
/// Lookups run in their own tasks and only hold a weak reference to the
/// session, so a response arriving after the session is gone is ignored.
pub struct ScreenSession {
    inner: Arc<Mutex<SessionInner>>,
    source: Arc<dyn PlayerSource>,
    debounce: Duration,
}

impl ScreenSession {
    pub fn new(sport: Sport, source: Arc<dyn PlayerSource>) -> Self {
        ScreenSession::with_debounce(sport, source, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(sport: Sport, source: Arc<dyn PlayerSource>, debounce: Duration) -> Self {
        ScreenSession {
            inner: Arc::new(Mutex::new(SessionInner {
                state: ScreenState::new(sport),
                pending: None,
                timer: 0,
            })),
            source,
            debounce,
        }
    }

    pub async fn dispatch(&self, action: ScreenAction) -> Result<ScreenSnapshot, ScreenError> {
        let mut inner = self.inner.lock().await;
        self.apply_locked(&mut inner, action)?;

        Ok(snapshot_of(&inner))
    }

    fn apply_locked(&self, inner: &mut SessionInner, action: ScreenAction) -> Result<(), ScreenError> {
        match inner.state.apply(action)? {
            Transition::None => {}
            Transition::CancelSearch => {
                inner.timer += 1;
                if inner.pending.take().is_some() {
                    debug!("{}: pending search cancelled", inner.state.sport());
                }
            }
            Transition::ScheduleSearch(query) => {
                debug!("{}: search for '{}' scheduled", inner.state.sport(), query);
                inner.timer += 1;
                inner.pending = Some(self.schedule_lookup(inner.timer, query));
            }
        }

        Ok(())
    }

    pub async fn snapshot(&self) -> ScreenSnapshot {
        let inner = self.inner.lock().await;
        snapshot_of(&inner)
    }

    fn schedule_lookup(&self, timer: u64, query: String) -> DebounceHandle {
        let session = Arc::downgrade(&self.inner);
        let source = Arc::clone(&self.source);

        DebounceHandle::schedule(self.debounce, move || {
            tokio::spawn(run_lookup(session, source, timer, query));
        })
    }
}

fn snapshot_of(inner: &SessionInner) -> ScreenSnapshot {
    let mut snapshot = inner.state.snapshot();
    snapshot.search_pending = inner.pending.as_ref().is_some_and(DebounceHandle::is_pending);
    snapshot
}

async fn run_lookup(
    session: Weak<Mutex<SessionInner>>,
    source: Arc<dyn PlayerSource>,
    timer: u64,
    query: String,
) {
    let ticket = {
        let Some(inner) = session.upgrade() else {
            return;
        };
        let mut inner = inner.lock().await;

        if inner.timer != timer {
            debug!("search for '{}' rescheduled before it started", query);
            return;
        }
        inner.pending = None;

        let Some(ticket) = inner.state.begin_lookup(&query) else {
            return;
        };
        ticket
    };

    let outcome = SearchOutcome::from(source.search(&ticket.query).await);

    let Some(inner) = session.upgrade() else {
        debug!("screen closed before search for '{}' returned", ticket.query);
        return;
    };

    inner.lock().await.state.complete_lookup(&ticket, outcome);
}
