//! The hub: routes input to the live game and runs due tasks.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use crate::{
    BundledPuzzles, Deferred, GameKind, HubConfig, HubError, HubErrorKind, InputEvent,
    LogicGridController, LogicGridPuzzle, MatchingCardsController, PresentationSink, PuzzleSource,
    Rejection, Scheduler, Selection, SessionCoordinator, Severity, Symbol, Task, TaskId,
    TaskQueue, TimerRegistry, WordGridController, WordGridPuzzle,
};

/// Everything a controller may touch while handling one input or task.
pub(crate) struct Effects<'a> {
    pub(crate) session: &'a mut SessionCoordinator,
    pub(crate) scheduler: &'a mut dyn Scheduler,
    pub(crate) sink: &'a mut dyn PresentationSink,
    pub(crate) rng: &'a mut StdRng,
    pub(crate) config: &'a HubConfig,
}

impl Effects<'_> {
    pub(crate) fn is_paused(&self, game: GameKind) -> bool {
        self.session.is_paused(game)
    }

    pub(crate) fn elapsed(&self, game: GameKind) -> u64 {
        self.session.elapsed(game)
    }

    pub(crate) fn first_interaction(&mut self, game: GameKind) -> bool {
        self.session
            .notify_first_interaction(game, &mut *self.scheduler, &mut *self.sink)
    }

    pub(crate) fn restart(&mut self, game: GameKind) {
        self.session
            .restart(game, &mut *self.scheduler, &mut *self.sink);
    }

    pub(crate) fn finish(&mut self, game: GameKind) {
        self.session.finish(game, &mut *self.scheduler);
    }

    pub(crate) fn toggle_pause(&mut self, game: GameKind) {
        self.session.toggle_pause(game, &mut *self.sink);
    }

    /// Schedules a one-shot resolution tagged with `generation`.
    pub(crate) fn defer(
        &mut self,
        delay: Duration,
        game: GameKind,
        generation: u64,
        action: Deferred,
    ) -> TaskId {
        self.scheduler.schedule_once(
            delay,
            Task::Resolve {
                game,
                generation,
                action,
            },
        )
    }

    pub(crate) fn notify(&mut self, text: &str, severity: Severity) {
        self.sink.notify(text, severity);
    }
}

/// What every puzzle controller answers to.
pub(crate) trait PuzzleController {
    /// Which tab this controller serves.
    const GAME: GameKind;

    /// Deals a fresh puzzle.
    fn initialize(&mut self, fx: &mut Effects<'_>) -> Result<(), HubError>;

    /// Applies one input aimed at this game.
    fn handle(&mut self, event: &InputEvent, fx: &mut Effects<'_>) -> Result<(), HubError>;

    /// Runs a deferred resolution. Stale generations are dropped.
    fn on_deferred(&mut self, generation: u64, action: Deferred, _fx: &mut Effects<'_>) {
        debug!(game = %Self::GAME, generation, ?action, "No deferred work");
    }

    /// Drops any pending deferred work when the tab is left.
    fn retire(&mut self, _scheduler: &mut dyn Scheduler) {}
}

#[derive(Debug)]
struct Runtime<S> {
    session: SessionCoordinator,
    scheduler: Box<dyn Scheduler>,
    sink: S,
    rng: StdRng,
    config: HubConfig,
}

impl<S: PresentationSink> Runtime<S> {
    fn effects(&mut self) -> Effects<'_> {
        Effects {
            session: &mut self.session,
            scheduler: self.scheduler.as_mut(),
            sink: &mut self.sink,
            rng: &mut self.rng,
            config: &self.config,
        }
    }
}

/// Builds a [`Hub`] with custom content or a custom scheduler.
#[derive(Debug)]
pub struct HubBuilder {
    config: HubConfig,
    scheduler: Option<Box<dyn Scheduler>>,
    logic_source: Box<dyn PuzzleSource<LogicGridPuzzle>>,
    word_source: Box<dyn PuzzleSource<WordGridPuzzle>>,
    card_source: Box<dyn PuzzleSource<Symbol>>,
}

impl HubBuilder {
    /// Starts from the bundled puzzles and a fresh task queue.
    pub fn new(config: HubConfig) -> Self {
        Self {
            config,
            scheduler: None,
            logic_source: Box::new(BundledPuzzles),
            word_source: Box::new(BundledPuzzles),
            card_source: Box::new(BundledPuzzles),
        }
    }

    /// Replaces the virtual-time task queue.
    pub fn with_scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.scheduler = Some(Box::new(scheduler));
        self
    }

    /// Replaces the sudoku catalog.
    pub fn with_logic_source(
        mut self,
        source: impl PuzzleSource<LogicGridPuzzle> + 'static,
    ) -> Self {
        self.logic_source = Box::new(source);
        self
    }

    /// Replaces the crossword catalog.
    pub fn with_word_source(mut self, source: impl PuzzleSource<WordGridPuzzle> + 'static) -> Self {
        self.word_source = Box::new(source);
        self
    }

    /// Replaces the memory symbol set.
    pub fn with_card_source(mut self, source: impl PuzzleSource<Symbol> + 'static) -> Self {
        self.card_source = Box::new(source);
        self
    }

    /// Finishes the hub around `sink`. Nothing is selected yet.
    #[instrument(skip_all)]
    pub fn build<S: PresentationSink>(self, sink: S) -> Hub<S> {
        let rng = match self.config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        info!(seed = ?self.config.seed(), "Building hub");
        Hub {
            logic_grid: LogicGridController::new(self.logic_source, *self.config.logic_difficulty()),
            word_grid: WordGridController::new(self.word_source),
            matching_cards: MatchingCardsController::new(
                self.card_source,
                *self.config.cards_difficulty(),
            ),
            runtime: Runtime {
                session: SessionCoordinator::new(TimerRegistry::new(self.config.tick_interval())),
                scheduler: self
                    .scheduler
                    .unwrap_or_else(|| Box::new(TaskQueue::new())),
                sink,
                rng,
                config: self.config,
            },
        }
    }
}

/// The game hub.
///
/// Single-threaded: input goes through [`Hub::dispatch`] and the clock only
/// moves through [`Hub::advance`].
#[derive(Debug)]
pub struct Hub<S> {
    runtime: Runtime<S>,
    logic_grid: LogicGridController,
    word_grid: WordGridController,
    matching_cards: MatchingCardsController,
}

impl<S: PresentationSink> Hub<S> {
    /// Creates a hub with the bundled puzzles.
    pub fn new(config: HubConfig, sink: S) -> Self {
        HubBuilder::new(config).build(sink)
    }

    /// Applies one input event.
    ///
    /// Rejections come back as errors. Those meant for the player have
    /// already been shown through the sink by the time this returns.
    #[instrument(skip(self, event), fields(action = event.action()))]
    pub fn dispatch(&mut self, event: InputEvent) -> Result<(), HubError> {
        let result = self.route(&event);
        if let Err(err) = &result {
            match err.kind().rejection() {
                Rejection::Notify => {
                    warn!(error = %err, "Input rejected");
                    self.runtime
                        .sink
                        .notify(&err.kind().to_string(), Severity::Error);
                }
                Rejection::Silent => debug!(error = %err, "Input ignored"),
            }
        }
        result
    }

    fn route(&mut self, event: &InputEvent) -> Result<(), HubError> {
        if let InputEvent::SelectGame { selection } = event {
            return self.select(*selection);
        }
        let Some(game) = event.game() else {
            return Ok(());
        };
        if self.runtime.session.active_game() != Some(game) {
            return Err(HubError::new(HubErrorKind::NotActive(game)));
        }

        let mut fx = self.runtime.effects();
        match game {
            GameKind::LogicGrid => self.logic_grid.handle(event, &mut fx),
            GameKind::WordGrid => self.word_grid.handle(event, &mut fx),
            GameKind::MatchingCards => self.matching_cards.handle(event, &mut fx),
        }
    }

    #[instrument(skip(self))]
    fn select(&mut self, selection: Selection) -> Result<(), HubError> {
        let mut fx = self.runtime.effects();
        self.logic_grid.retire(&mut *fx.scheduler);
        self.word_grid.retire(&mut *fx.scheduler);
        self.matching_cards.retire(&mut *fx.scheduler);
        fx.session
            .switch_to(selection, &mut *fx.scheduler, &mut *fx.sink);

        match selection {
            Selection::Game(GameKind::LogicGrid) => self.logic_grid.initialize(&mut fx),
            Selection::Game(GameKind::WordGrid) => self.word_grid.initialize(&mut fx),
            Selection::Game(GameKind::MatchingCards) => self.matching_cards.initialize(&mut fx),
            Selection::Tips => Ok(()),
        }
    }

    /// Moves the clock forward by `delta`, running every task that comes due.
    #[instrument(skip(self))]
    pub fn advance(&mut self, delta: Duration) {
        let until = self.runtime.scheduler.now() + delta;
        while let Some(task) = self.runtime.scheduler.pop_due(until) {
            self.run_task(task);
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::Tick { game, run } => {
                self.runtime
                    .session
                    .on_tick(game, run, &mut self.runtime.sink);
            }
            Task::Resolve {
                game,
                generation,
                action,
            } => {
                let mut fx = self.runtime.effects();
                match game {
                    GameKind::LogicGrid => self.logic_grid.on_deferred(generation, action, &mut fx),
                    GameKind::WordGrid => self.word_grid.on_deferred(generation, action, &mut fx),
                    GameKind::MatchingCards => {
                        self.matching_cards.on_deferred(generation, action, &mut fx)
                    }
                }
            }
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.runtime.scheduler.now()
    }

    /// Tasks waiting in the scheduler.
    pub fn pending_tasks(&self) -> usize {
        self.runtime.scheduler.pending()
    }

    /// The session coordinator.
    pub fn session(&self) -> &SessionCoordinator {
        &self.runtime.session
    }

    /// The sudoku controller.
    pub fn logic_grid(&self) -> &LogicGridController {
        &self.logic_grid
    }

    /// The crossword controller.
    pub fn word_grid(&self) -> &WordGridController {
        &self.word_grid
    }

    /// The memory controller.
    pub fn matching_cards(&self) -> &MatchingCardsController {
        &self.matching_cards
    }

    /// The sink.
    pub fn sink(&self) -> &S {
        &self.runtime.sink
    }

    /// The sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.runtime.sink
    }

    /// Active configuration.
    pub fn config(&self) -> &HubConfig {
        &self.runtime.config
    }
}
