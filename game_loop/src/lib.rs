//! Fixed-timestep driver for the Pong simulation core
//!
//! One ticking thread advances the game at a 30 ms cadence and publishes a
//! fresh snapshot each tick. Rendering and input stay behind small seams so
//! a presentation layer plugs in without touching the simulation: the
//! renderer receives one [`Snapshot`] per tick, and the input layer writes
//! the shared [`ControlFlags`].

pub mod controls;
pub mod fsm;
pub mod input;

pub use controls::{Control, ControlFlags};
pub use fsm::{LoopAction, LoopFsm, LoopState};
pub use input::control_for_key;

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use game_core::{Events, GameRng, GameState, Params, Snapshot};
use tracing::{debug, info, warn};

/// Render collaborator: receives one self-consistent snapshot per tick.
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot);
}

/// Fixed-timestep game loop: Stopped -> Running -> Stopped
///
/// The ticking thread is the sole writer of game state. Readers get the
/// latest published snapshot, either pushed through the [`Renderer`] or
/// pulled via [`GameLoop::latest`]; either way a snapshot is a whole tick,
/// never a partial update.
pub struct GameLoop {
    flags: Arc<ControlFlags>,
    latest: Arc<Mutex<Snapshot>>,
    inner: Mutex<Inner>,
}

struct Inner {
    fsm: LoopFsm,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            flags: Arc::new(ControlFlags::new()),
            latest: Arc::new(Mutex::new(GameState::new().snapshot(0))),
            inner: Mutex::new(Inner {
                fsm: LoopFsm::new(),
                stop_tx: None,
                handle: None,
            }),
        }
    }

    /// Shared control-flag sink for the input collaborator.
    pub fn controls(&self) -> Arc<ControlFlags> {
        Arc::clone(&self.flags)
    }

    /// Latest published snapshot, for externally triggered draw paths.
    pub fn latest(&self) -> Snapshot {
        *self.latest.lock().unwrap()
    }

    /// Whether the ticking thread is currently running.
    pub fn is_running(&self) -> bool {
        self.inner.lock().unwrap().fsm.is_running()
    }

    /// Start ticking with an entropy-seeded serve jitter source.
    pub fn start<R>(&self, renderer: R) -> bool
    where
        R: Renderer + Send + 'static,
    {
        self.start_with_rng(renderer, GameRng::from_entropy())
    }

    /// Start ticking. Returns false if the loop is already running.
    pub fn start_with_rng<R>(&self, renderer: R, rng: GameRng) -> bool
    where
        R: Renderer + Send + 'static,
    {
        let mut inner = self.inner.lock().unwrap();
        if !inner.fsm.transition(LoopAction::Start) {
            return false;
        }

        // A previous run may still be draining its final wait; join it so
        // the new thread is the sole writer.
        if let Some(handle) = inner.handle.take() {
            let _ = handle.join();
        }

        let (stop_tx, stop_rx) = mpsc::channel();
        let flags = Arc::clone(&self.flags);
        let latest = Arc::clone(&self.latest);
        let handle = std::thread::spawn(move || run_loop(renderer, rng, flags, latest, stop_rx));

        inner.stop_tx = Some(stop_tx);
        inner.handle = Some(handle);
        info!("game loop started");
        true
    }

    /// Signal the ticking thread to exit.
    ///
    /// Never blocks, and is safe before `start` or repeatedly; the thread
    /// observes the signal within one tick interval and mutates no further
    /// state afterwards.
    pub fn stop(&self) {
        let mut inner = self.inner.lock().unwrap();
        if !inner.fsm.transition(LoopAction::Stop) {
            return;
        }
        if let Some(stop_tx) = inner.stop_tx.take() {
            // A send failure means the thread is already gone; nothing to do.
            let _ = stop_tx.send(());
        }
        info!("game loop stop requested");
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.stop();
        let handle = match self.inner.lock() {
            Ok(mut inner) => inner.handle.take(),
            Err(_) => None,
        };
        if let Some(handle) = handle {
            let _ = handle.join();
        }
    }
}

fn run_loop<R: Renderer>(
    mut renderer: R,
    mut rng: GameRng,
    flags: Arc<ControlFlags>,
    latest: Arc<Mutex<Snapshot>>,
    stop_rx: Receiver<()>,
) {
    let mut game = GameState::new();
    let mut events = Events::new();
    let mut tick: u32 = 0;

    publish(&latest, game.snapshot(tick));

    loop {
        // The wait doubles as the stop check, so a tick is never interrupted
        // between the paddle and ball updates.
        match stop_rx.recv_timeout(Params::TICK_INTERVAL) {
            Ok(()) => {
                debug!(tick, "stop signal observed");
                break;
            }
            Err(RecvTimeoutError::Disconnected) => {
                warn!(tick, "stop channel dropped while waiting, exiting");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        tick += 1;
        events.clear();
        let controls = flags.sample();
        game.tick(controls, &mut rng, &mut events);

        if events.left_scored {
            info!(
                left = game.score.left,
                right = game.score.right,
                "left player scored"
            );
        }
        if events.right_scored {
            info!(
                left = game.score.left,
                right = game.score.right,
                "right player scored"
            );
        }

        let snapshot = game.snapshot(tick);
        publish(&latest, snapshot);
        renderer.draw(&snapshot);
    }
}

fn publish(latest: &Mutex<Snapshot>, snapshot: Snapshot) {
    *latest.lock().unwrap() = snapshot;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn init_tracing() {
        use tracing_subscriber::EnvFilter;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Forwards every drawn snapshot to a channel for inspection.
    struct ChannelRenderer {
        tx: Sender<Snapshot>,
    }

    impl Renderer for ChannelRenderer {
        fn draw(&mut self, snapshot: &Snapshot) {
            let _ = self.tx.send(*snapshot);
        }
    }

    #[test]
    fn test_stop_before_start_is_a_noop() {
        init_tracing();
        let game_loop = GameLoop::new();
        game_loop.stop();
        game_loop.stop();
        assert!(!game_loop.is_running());
    }

    #[test]
    fn test_double_start_rejected() {
        init_tracing();
        let game_loop = GameLoop::new();
        let (tx, _rx) = mpsc::channel();

        assert!(game_loop.start_with_rng(ChannelRenderer { tx: tx.clone() }, GameRng::new(1)));
        assert!(
            !game_loop.start_with_rng(ChannelRenderer { tx }, GameRng::new(2)),
            "Second start while running must be rejected"
        );
        assert!(game_loop.is_running());
        game_loop.stop();
        assert!(!game_loop.is_running());
    }

    #[test]
    fn test_loop_publishes_advancing_snapshots() {
        init_tracing();
        let game_loop = GameLoop::new();
        let (tx, rx) = mpsc::channel();
        assert!(game_loop.start_with_rng(ChannelRenderer { tx }, GameRng::new(7)));

        let first = rx.recv_timeout(Duration::from_secs(2)).expect("first frame");
        let second = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("second frame");

        assert!(second.tick > first.tick, "Ticks advance monotonically");
        assert!(
            game_loop.latest().tick >= first.tick,
            "Pulled snapshot is at least as fresh as the first pushed one"
        );
        game_loop.stop();
    }

    #[test]
    fn test_stop_halts_state_mutation() {
        init_tracing();
        let game_loop = GameLoop::new();
        let (tx, rx) = mpsc::channel();
        assert!(game_loop.start_with_rng(ChannelRenderer { tx }, GameRng::new(7)));
        rx.recv_timeout(Duration::from_secs(2)).expect("first frame");

        game_loop.stop();
        // Drain anything in flight; the thread exits within one interval.
        while rx.recv_timeout(Duration::from_millis(100)).is_ok() {}

        let frozen = game_loop.latest();
        std::thread::sleep(Duration::from_millis(120));
        assert_eq!(
            game_loop.latest(),
            frozen,
            "No state mutation after stop is observed"
        );
        assert!(!game_loop.is_running());
    }

    #[test]
    fn test_restart_after_stop() {
        init_tracing();
        let game_loop = GameLoop::new();

        let (tx, rx) = mpsc::channel();
        assert!(game_loop.start_with_rng(ChannelRenderer { tx }, GameRng::new(3)));
        rx.recv_timeout(Duration::from_secs(2)).expect("first run frame");
        game_loop.stop();

        let (tx, rx) = mpsc::channel();
        assert!(
            game_loop.start_with_rng(ChannelRenderer { tx }, GameRng::new(4)),
            "Start after stop must succeed"
        );
        rx.recv_timeout(Duration::from_secs(2))
            .expect("second run frame");
        game_loop.stop();
    }

    #[test]
    fn test_held_key_steers_left_paddle() {
        init_tracing();
        let game_loop = GameLoop::new();
        let controls = game_loop.controls();
        controls.key_down("a");

        let (tx, rx) = mpsc::channel();
        assert!(game_loop.start_with_rng(ChannelRenderer { tx }, GameRng::new(11)));

        // Wait a handful of ticks for the held key to take effect.
        let mut snapshot = rx.recv_timeout(Duration::from_secs(2)).expect("frame");
        while snapshot.tick < 5 {
            snapshot = rx.recv_timeout(Duration::from_secs(2)).expect("frame");
        }

        assert!(
            snapshot.paddle_left_y < game_core::Params::PADDLE_START_Y,
            "Held up-key must move the left paddle up, got y={}",
            snapshot.paddle_left_y
        );
        assert_eq!(
            snapshot.paddle_right_y,
            game_core::Params::PADDLE_START_Y,
            "Right paddle stays put"
        );
        game_loop.stop();
    }
}
