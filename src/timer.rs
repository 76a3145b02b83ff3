//! Per-game countable-seconds timers.

use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::{GameKind, PresentationSink, Scheduler, Severity, Task, TaskId};

/// Elapsed-time bookkeeping for one game.
///
/// `running` and `paused` are independent: a running timer that is paused
/// keeps its tick source armed but does not count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerState {
    elapsed: u64,
    running: bool,
    paused: bool,
    run: u64,
    tick_source: Option<TaskId>,
}

impl TimerState {
    /// Whole seconds counted so far.
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Whether a tick source is armed.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Whether ticks are suppressed.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// `MM:SS`, zero padded. Minutes keep growing past 99.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.elapsed / 60, self.elapsed % 60)
    }
}

/// One timer per [`GameKind`].
///
/// Nothing here stops two timers from running at once; the session
/// coordinator resets every other timer before activating one.
#[derive(Debug, Clone)]
pub struct TimerRegistry {
    timers: [TimerState; 3],
    tick_interval: Duration,
}

impl TimerRegistry {
    /// Creates stopped timers at zero that tick every `tick_interval`.
    #[instrument]
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            timers: [TimerState::default(); 3],
            tick_interval,
        }
    }

    /// State of `game`'s timer.
    pub fn state(&self, game: GameKind) -> &TimerState {
        &self.timers[game.index()]
    }

    /// Formatted elapsed time for `game`.
    pub fn format(&self, game: GameKind) -> String {
        self.state(game).display()
    }

    /// Number of timers with an armed tick source.
    pub fn running_count(&self) -> usize {
        self.timers.iter().filter(|t| t.running).count()
    }

    /// Arms `game`'s tick source. A running timer is re-armed from its
    /// current elapsed value, not reset. Clears `paused`.
    #[instrument(skip(self, scheduler, sink))]
    pub fn start(
        &mut self,
        game: GameKind,
        scheduler: &mut dyn Scheduler,
        sink: &mut dyn PresentationSink,
    ) {
        let interval = self.tick_interval;
        let timer = &mut self.timers[game.index()];
        if let Some(id) = timer.tick_source.take() {
            scheduler.cancel(id);
        }
        timer.run += 1;
        timer.paused = false;
        timer.running = true;
        timer.tick_source = Some(scheduler.schedule_every(
            interval,
            Task::Tick {
                game,
                run: timer.run,
            },
        ));
        info!(%game, elapsed = timer.elapsed, "Timer started");
        sink.update_timer_display(game, &timer.display());
    }

    /// Disarms `game`'s tick source. Elapsed time is kept.
    #[instrument(skip(self, scheduler))]
    pub fn stop(&mut self, game: GameKind, scheduler: &mut dyn Scheduler) {
        let timer = &mut self.timers[game.index()];
        if let Some(id) = timer.tick_source.take() {
            scheduler.cancel(id);
        }
        if timer.running {
            debug!(%game, elapsed = timer.elapsed, "Timer stopped");
        }
        timer.running = false;
    }

    /// Stops `game`'s timer and zeroes it.
    #[instrument(skip(self, scheduler, sink))]
    pub fn reset(
        &mut self,
        game: GameKind,
        scheduler: &mut dyn Scheduler,
        sink: &mut dyn PresentationSink,
    ) {
        self.stop(game, scheduler);
        let timer = &mut self.timers[game.index()];
        timer.elapsed = 0;
        timer.paused = false;
        sink.update_timer_display(game, &timer.display());
    }

    /// Flips `paused` and tells the player. Returns the new paused flag.
    #[instrument(skip(self, sink))]
    pub fn toggle_pause(&mut self, game: GameKind, sink: &mut dyn PresentationSink) -> bool {
        let timer = &mut self.timers[game.index()];
        timer.paused = !timer.paused;
        info!(%game, paused = timer.paused, "Pause toggled");
        sink.notify(
            if timer.paused {
                "Game paused"
            } else {
                "Game resumed"
            },
            Severity::Success,
        );
        timer.paused
    }

    /// Applies one tick. Ticks from an earlier run are ignored.
    /// Returns whether elapsed time advanced.
    pub fn tick(&mut self, game: GameKind, run: u64, sink: &mut dyn PresentationSink) -> bool {
        let timer = &mut self.timers[game.index()];
        if !timer.running || timer.run != run {
            debug!(%game, run, current = timer.run, "Dropping stale tick");
            return false;
        }
        if timer.paused {
            return false;
        }
        timer.elapsed += 1;
        sink.update_timer_display(game, &timer.display());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordingSink, TaskQueue};

    fn run_for(
        registry: &mut TimerRegistry,
        queue: &mut TaskQueue,
        sink: &mut RecordingSink,
        secs: u64,
    ) {
        let until = queue.now() + Duration::from_secs(secs);
        while let Some(task) = queue.pop_due(until) {
            if let Task::Tick { game, run } = task {
                registry.tick(game, run, sink);
            }
        }
    }

    #[test]
    fn test_format_pads_minutes_and_seconds() {
        let mut state = TimerState::default();
        assert_eq!(state.display(), "00:00");
        state.elapsed = 65;
        assert_eq!(state.display(), "01:05");
        state.elapsed = 6000;
        assert_eq!(state.display(), "100:00");
    }

    #[test]
    fn test_pause_freezes_elapsed_without_stopping() {
        let mut registry = TimerRegistry::new(Duration::from_secs(1));
        let mut queue = TaskQueue::new();
        let mut sink = RecordingSink::new();
        let game = GameKind::WordGrid;

        registry.start(game, &mut queue, &mut sink);
        run_for(&mut registry, &mut queue, &mut sink, 2);
        registry.toggle_pause(game, &mut sink);
        run_for(&mut registry, &mut queue, &mut sink, 5);

        assert_eq!(registry.state(game).elapsed(), 2);
        assert!(registry.state(game).running());

        registry.toggle_pause(game, &mut sink);
        run_for(&mut registry, &mut queue, &mut sink, 1);
        assert_eq!(registry.state(game).elapsed(), 3);
        assert_eq!(
            sink.notifications(),
            vec![
                ("Game paused", Severity::Success),
                ("Game resumed", Severity::Success)
            ]
        );
    }

    #[test]
    fn test_restart_keeps_elapsed_and_single_tick_source() {
        let mut registry = TimerRegistry::new(Duration::from_secs(1));
        let mut queue = TaskQueue::new();
        let mut sink = RecordingSink::new();
        let game = GameKind::LogicGrid;

        registry.start(game, &mut queue, &mut sink);
        run_for(&mut registry, &mut queue, &mut sink, 3);
        registry.start(game, &mut queue, &mut sink);
        run_for(&mut registry, &mut queue, &mut sink, 2);

        assert_eq!(registry.state(game).elapsed(), 5);
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn test_reset_zeroes_and_stops() {
        let mut registry = TimerRegistry::new(Duration::from_secs(1));
        let mut queue = TaskQueue::new();
        let mut sink = RecordingSink::new();
        let game = GameKind::MatchingCards;

        registry.start(game, &mut queue, &mut sink);
        run_for(&mut registry, &mut queue, &mut sink, 4);
        registry.toggle_pause(game, &mut sink);
        registry.reset(game, &mut queue, &mut sink);

        let state = registry.state(game);
        assert_eq!(state.elapsed(), 0);
        assert!(!state.running());
        assert!(!state.paused());
        assert_eq!(queue.pending(), 0);
        assert_eq!(sink.last_timer(game), Some("00:00"));
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut registry = TimerRegistry::new(Duration::from_secs(1));
        let mut queue = TaskQueue::new();
        let mut sink = RecordingSink::new();
        let game = GameKind::LogicGrid;

        registry.start(game, &mut queue, &mut sink);
        registry.start(game, &mut queue, &mut sink);

        assert!(!registry.tick(game, 1, &mut sink));
        assert!(registry.tick(game, 2, &mut sink));
        assert_eq!(registry.state(game).elapsed(), 1);
    }
}
