//! Thread-safe session handle with the delayed computer reply.

use crate::action::UserAction;
use crate::game::PlayMode;
use crate::session::{GameSession, Snapshot};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Pacing delay before the computer answers a human move.
pub const COMPUTER_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Shared handle around a [`GameSession`].
///
/// One mutex covers every read-modify-write sequence, including the
/// opponent's hypothetical place-and-undo probes, so no reader can
/// observe a half-finished scan. When an action leaves the computer to
/// move, a single-shot tokio task fires the reply after
/// [`COMPUTER_REPLY_DELAY`]; a reset or mode switch in the meantime
/// invalidates it.
///
/// Snapshots go out on a `watch` channel after every transition; the
/// UI can await changes or poll the latest value.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Inner>,
}

struct Inner {
    session: Mutex<GameSession>,
    pending: Mutex<Option<JoinHandle<()>>>,
    tx: watch::Sender<Snapshot>,
}

impl SharedSession {
    /// Creates a shared session with an entropy-seeded opponent.
    pub fn new(mode: PlayMode) -> Self {
        Self::from_session(GameSession::new(mode))
    }

    /// Creates a shared session with a fixed opponent seed.
    pub fn with_seed(mode: PlayMode, seed: u64) -> Self {
        Self::from_session(GameSession::with_seed(mode, seed))
    }

    fn from_session(session: GameSession) -> Self {
        let (tx, _rx) = watch::channel(session.snapshot());
        Self {
            inner: Arc::new(Inner {
                session: Mutex::new(session),
                pending: Mutex::new(None),
                tx,
            }),
        }
    }

    /// Applies one user action and schedules the computer's reply when
    /// one becomes due.
    ///
    /// Must be called within a tokio runtime when the mode can put the
    /// computer on turn; friend-mode dispatch never spawns anything.
    #[instrument(skip(self))]
    pub fn dispatch(&self, action: UserAction) {
        let (snapshot, invalidated, reply_epoch) = {
            let mut session = self.inner.session.lock().unwrap();
            let epoch_before = session.epoch();
            session.handle(action);
            let invalidated = session.epoch() != epoch_before;
            let reply_epoch = session.computer_move_due().then(|| session.epoch());
            (session.snapshot(), invalidated, reply_epoch)
        };

        if invalidated {
            // The board was reset or the mode switched; a pending
            // delayed reply must not land on the fresh board.
            self.abort_pending();
        }
        self.inner.tx.send_replace(snapshot);

        if let Some(epoch) = reply_epoch {
            self.schedule_reply(epoch);
        }
    }

    /// Subscribes to snapshots; the receiver always holds the latest.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.tx.subscribe()
    }

    /// The latest snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.session.lock().unwrap().snapshot()
    }

    fn schedule_reply(&self, epoch: u64) {
        debug!(epoch, "scheduling computer reply");
        let shared = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(COMPUTER_REPLY_DELAY).await;
            shared.fire_reply(epoch);
        });
        *self.inner.pending.lock().unwrap() = Some(handle);
    }

    #[instrument(skip(self))]
    fn fire_reply(&self, epoch: u64) {
        let snapshot = {
            let mut session = self.inner.session.lock().unwrap();
            if session.epoch() != epoch {
                debug!(
                    scheduled = epoch,
                    current = session.epoch(),
                    "dropping stale computer reply"
                );
                return;
            }
            session.play_computer_move();
            session.snapshot()
        };
        self.inner.tx.send_replace(snapshot);
    }

    fn abort_pending(&self) {
        if let Some(handle) = self.inner.pending.lock().unwrap().take() {
            debug!("aborting pending computer reply");
            handle.abort();
        }
    }
}
