//! Timer-driven slideshow over a [`Carousel`]
//!
//! The driver task owns the carousel. Timer ticks and manual commands are
//! handled by the same loop, so every change to the current index happens
//! in order on one queue. Views read the position through
//! [`SlideshowHandle::subscribe`] and never mutate it directly.

use crate::{carousel::Carousel, error::CarouselError};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{Duration, Instant, Interval, MissedTickBehavior},
};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Snapshot published to subscribers after every change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideState {
    pub index: usize,
    pub total: usize,
    pub playing: bool,
}

impl SlideState {
    fn of<T>(carousel: &Carousel<T>, playing: bool) -> Self {
        Self {
            index: carousel.current_index(),
            total: carousel.len(),
            playing,
        }
    }

    /// Whether the indicator or thumbnail at `idx` should be highlighted
    pub fn is_current(&self, idx: usize) -> bool {
        self.index == idx
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Advance,
    Retreat,
    Select(usize),
    Pause,
    Resume,
    Toggle,
}

/// Builder for a slideshow driver
#[derive(Debug)]
pub struct Slideshow<T> {
    carousel: Carousel<T>,
    playing: bool,
}

impl<T: Send + Sync + 'static> Slideshow<T> {
    pub fn new(carousel: Carousel<T>) -> Self {
        Self {
            carousel,
            playing: true,
        }
    }

    /// Start without automatic advance until [`SlideshowHandle::resume`]
    pub fn paused(mut self) -> Self {
        self.playing = false;
        self
    }

    /// Start the driver on the current tokio runtime.
    ///
    /// The first tick fires one full interval after this call.
    pub fn spawn(self) -> Result<SlideshowHandle<T>, CarouselError> {
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| CarouselError::NoRuntime)?;

        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let items = Arc::clone(self.carousel.items());
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SlideState::of(&self.carousel, self.playing));

        tracing::debug!(
            id,
            total = items.len(),
            interval_ms = self.carousel.tick_interval().as_millis() as u64,
            playing = self.playing,
            "starting slideshow"
        );

        let task = runtime.spawn(drive(self.carousel, self.playing, command_rx, state_tx));

        Ok(SlideshowHandle {
            id,
            items,
            commands: command_tx,
            state: state_rx,
            task: Some(task),
        })
    }
}

fn new_ticker(period: Duration) -> Interval {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    // A suspended host should not fast-forward through slides on wake
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

async fn drive<T>(
    mut carousel: Carousel<T>,
    mut playing: bool,
    mut commands: mpsc::UnboundedReceiver<Command>,
    state: watch::Sender<SlideState>,
) {
    let period = carousel.tick_interval();
    let mut ticker = new_ticker(period);

    loop {
        tokio::select! {
            _ = ticker.tick(), if playing => {
                carousel.advance();
                tracing::trace!(index = carousel.current_index(), "slideshow tick");
            }
            command = commands.recv() => {
                let Some(command) = command else {
                    break;
                };

                match command {
                    Command::Advance => {
                        carousel.advance();
                    }
                    Command::Retreat => {
                        carousel.retreat();
                    }
                    Command::Select(idx) => {
                        if !carousel.select_index(idx) {
                            tracing::debug!(idx, total = carousel.len(), "ignoring out of range slide");
                            continue;
                        }
                    }
                    Command::Pause => {
                        if !playing {
                            continue;
                        }
                        playing = false;
                    }
                    Command::Resume => {
                        if playing {
                            continue;
                        }
                        playing = true;
                        ticker = new_ticker(period);
                    }
                    Command::Toggle => {
                        playing = !playing;
                        if playing {
                            ticker = new_ticker(period);
                        }
                    }
                }
            }
        }

        state.send_replace(SlideState::of(&carousel, playing));
    }

    tracing::debug!("slideshow driver stopped");
}

/// Owner of a running slideshow.
///
/// Dropping the handle cancels the timer; [`SlideshowHandle::shutdown`] does
/// the same and waits for the driver to finish.
#[derive(Debug)]
pub struct SlideshowHandle<T> {
    id: u64,
    items: Arc<[T]>,
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<SlideState>,
    task: Option<JoinHandle<()>>,
}

impl<T> SlideshowHandle<T> {
    /// Unique per spawned slideshow
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    pub fn state(&self) -> SlideState {
        *self.state.borrow()
    }

    pub fn current_item(&self) -> &T {
        &self.items[self.state().index]
    }

    /// Read-only feed of position changes, starting from the current one
    pub fn subscribe(&self) -> watch::Receiver<SlideState> {
        let mut rx = self.state.clone();
        rx.mark_unchanged();
        rx
    }

    pub fn advance(&self) {
        self.send(Command::Advance);
    }

    pub fn retreat(&self) {
        self.send(Command::Retreat);
    }

    /// Out of range indices are ignored by the driver
    pub fn select_index(&self, idx: usize) {
        self.send(Command::Select(idx));
    }

    pub fn pause(&self) {
        self.send(Command::Pause);
    }

    pub fn resume(&self) {
        self.send(Command::Resume);
    }

    /// Flip playback relative to the driver's state, not the last snapshot
    pub fn toggle(&self) {
        self.send(Command::Toggle);
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel the timer and wait for the driver to exit
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }

        tracing::debug!(id = self.id, "slideshow shut down");
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            tracing::debug!(id = self.id, ?command, "slideshow already stopped");
        }
    }
}

impl<T> Drop for SlideshowHandle<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_outside_runtime_fails() {
        let carousel = Carousel::new(vec![1, 2, 3]).unwrap();
        let err = Slideshow::new(carousel).spawn().unwrap_err();
        assert_eq!(err, CarouselError::NoRuntime);
    }

    #[test]
    fn test_slide_state_highlight() {
        let state = SlideState {
            index: 2,
            total: 8,
            playing: true,
        };
        assert!(state.is_current(2));
        assert!(!state.is_current(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state_published() {
        let carousel = Carousel::new(vec!['a', 'b', 'c']).unwrap();
        let handle = Slideshow::new(carousel).spawn().unwrap();

        assert_eq!(
            handle.state(),
            SlideState {
                index: 0,
                total: 3,
                playing: true,
            }
        );
        assert_eq!(*handle.current_item(), 'a');
        assert!(handle.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_are_unique() {
        let first = Slideshow::new(Carousel::new(vec![1]).unwrap())
            .spawn()
            .unwrap();
        let second = Slideshow::new(Carousel::new(vec![1]).unwrap())
            .spawn()
            .unwrap();
        assert_ne!(first.id(), second.id());
    }
}
