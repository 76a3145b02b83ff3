//! Session coordination: which game is live and when its clock starts.

use tracing::{debug, info, instrument};

use crate::{GameKind, PresentationSink, Scheduler, Selection, TimerRegistry};

/// Which game is active and whether it has seen its first interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    selection: Option<Selection>,
    has_started: [bool; 3],
}

impl SessionState {
    /// The active game, if a game (not the tips panel) is selected.
    pub fn active_game(&self) -> Option<GameKind> {
        self.selection.and_then(Selection::game)
    }

    /// Current tab, if any has been chosen.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Whether `game` has received its first interaction.
    pub fn has_started(&self, game: GameKind) -> bool {
        self.has_started[game.index()]
    }
}

/// Owns the session state and the timers, and keeps at most one timer live.
///
/// Timers only start through [`SessionCoordinator::notify_first_interaction`].
#[derive(Debug, Clone)]
pub struct SessionCoordinator {
    state: SessionState,
    timers: TimerRegistry,
}

impl SessionCoordinator {
    /// Creates a coordinator with nothing selected.
    #[instrument(skip(timers))]
    pub fn new(timers: TimerRegistry) -> Self {
        Self {
            state: SessionState::default(),
            timers,
        }
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The timers.
    pub fn timers(&self) -> &TimerRegistry {
        &self.timers
    }

    /// The active game, if any.
    pub fn active_game(&self) -> Option<GameKind> {
        self.state.active_game()
    }

    /// Whether `game`'s timer is paused.
    pub fn is_paused(&self, game: GameKind) -> bool {
        self.timers.state(game).paused()
    }

    /// Seconds counted for `game`.
    pub fn elapsed(&self, game: GameKind) -> u64 {
        self.timers.state(game).elapsed()
    }

    /// Stops and zeroes every timer, clears every started flag, then makes
    /// `selection` current. The new game's timer stays stopped until its
    /// first interaction.
    #[instrument(skip(self, scheduler, sink))]
    pub fn switch_to(
        &mut self,
        selection: Selection,
        scheduler: &mut dyn Scheduler,
        sink: &mut dyn PresentationSink,
    ) {
        for game in GameKind::ALL {
            self.timers.stop(game, scheduler);
            self.timers.reset(game, scheduler, sink);
            self.state.has_started[game.index()] = false;
        }
        self.state.selection = Some(selection);
        info!(%selection, "Switched selection");
        sink.show(selection);
    }

    /// Starts `game`'s timer the first time it is touched.
    /// Returns whether this call started it.
    #[instrument(skip(self, scheduler, sink))]
    pub fn notify_first_interaction(
        &mut self,
        game: GameKind,
        scheduler: &mut dyn Scheduler,
        sink: &mut dyn PresentationSink,
    ) -> bool {
        if self.state.has_started[game.index()] {
            return false;
        }
        self.state.has_started[game.index()] = true;
        debug!(%game, "First interaction");
        self.timers.start(game, scheduler, sink);
        true
    }

    /// Zeroes `game`'s timer and clears its started flag for a new puzzle.
    #[instrument(skip(self, scheduler, sink))]
    pub fn restart(
        &mut self,
        game: GameKind,
        scheduler: &mut dyn Scheduler,
        sink: &mut dyn PresentationSink,
    ) {
        self.timers.reset(game, scheduler, sink);
        self.state.has_started[game.index()] = false;
    }

    /// Stops `game`'s timer on completion. Elapsed time stays visible.
    #[instrument(skip(self, scheduler))]
    pub fn finish(&mut self, game: GameKind, scheduler: &mut dyn Scheduler) {
        self.timers.stop(game, scheduler);
        info!(%game, elapsed = self.elapsed(game), "Game finished");
    }

    /// Toggles pause on `game`. Returns the new paused flag.
    #[instrument(skip(self, sink))]
    pub fn toggle_pause(&mut self, game: GameKind, sink: &mut dyn PresentationSink) -> bool {
        self.timers.toggle_pause(game, sink)
    }

    /// Routes a timer tick.
    pub fn on_tick(&mut self, game: GameKind, run: u64, sink: &mut dyn PresentationSink) {
        self.timers.tick(game, run, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordingSink, TaskQueue};
    use std::time::Duration;

    fn coordinator() -> (SessionCoordinator, TaskQueue, RecordingSink) {
        (
            SessionCoordinator::new(TimerRegistry::new(Duration::from_secs(1))),
            TaskQueue::new(),
            RecordingSink::new(),
        )
    }

    #[test]
    fn test_first_interaction_is_idempotent() {
        let (mut session, mut queue, mut sink) = coordinator();
        let game = GameKind::LogicGrid;
        session.switch_to(Selection::Game(game), &mut queue, &mut sink);

        assert!(session.notify_first_interaction(game, &mut queue, &mut sink));
        assert!(!session.notify_first_interaction(game, &mut queue, &mut sink));
        assert_eq!(queue.pending(), 1);
        assert!(session.state().has_started(game));
    }

    #[test]
    fn test_switch_clears_every_game() {
        let (mut session, mut queue, mut sink) = coordinator();
        session.switch_to(Selection::Game(GameKind::WordGrid), &mut queue, &mut sink);
        session.notify_first_interaction(GameKind::WordGrid, &mut queue, &mut sink);

        session.switch_to(Selection::Tips, &mut queue, &mut sink);

        assert_eq!(session.active_game(), None);
        assert_eq!(session.state().selection(), Some(Selection::Tips));
        assert_eq!(session.timers().running_count(), 0);
        assert!(GameKind::ALL.iter().all(|g| !session.state().has_started(*g)));
        assert_eq!(queue.pending(), 0);
    }
}
