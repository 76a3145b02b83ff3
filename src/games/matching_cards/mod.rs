//! Memory pairs: flip two cards, keep them if they match.

use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

use crate::hub::{Effects, PuzzleController};
use crate::{
    AuxCounter, BundledPuzzles, CellRef, CellStyle, Deferred, Difficulty, GameKind, HubError,
    HubErrorKind, InputEvent, PuzzleSource, PuzzleView, Scheduler, Score, Severity, TaskId,
    move_bonus, time_bonus,
};

/// A card face.
pub type Symbol = &'static str;

const SYMBOLS: [Symbol; 12] = [
    "🍎", "🍌", "🍇", "🍓", "🍒", "🍍", "🥝", "🍉", "🍋", "🍑", "🥥", "🍐",
];

const MATCH_POINTS: u32 = 50;
const HINT_PENALTY: u32 = 30;

/// Deck shape for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// Grid columns.
    pub columns: usize,
    /// Grid rows.
    pub rows: usize,
    /// Pairs dealt.
    pub pairs: usize,
}

impl CardLayout {
    /// 4×4 on easy, 5×4 on medium, 6×4 on hard.
    pub const fn for_tier(tier: Difficulty) -> Self {
        match tier {
            Difficulty::Easy => Self {
                columns: 4,
                rows: 4,
                pairs: 8,
            },
            Difficulty::Medium => Self {
                columns: 5,
                rows: 4,
                pairs: 10,
            },
            Difficulty::Hard => Self {
                columns: 6,
                rows: 4,
                pairs: 12,
            },
        }
    }
}

impl PuzzleSource<Symbol> for BundledPuzzles {
    fn catalog(&self, tier: Difficulty) -> &[Symbol] {
        &SYMBOLS[..CardLayout::for_tier(tier).pairs]
    }
}

/// Where a card stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardState {
    /// Face down.
    Hidden,
    /// Face up, waiting for its partner.
    Revealed,
    /// Paired and out of play.
    Matched,
}

/// One card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    symbol: Symbol,
    state: CardState,
}

impl Card {
    /// Face.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// State.
    pub fn state(&self) -> CardState {
        self.state
    }
}

/// Memory controller.
///
/// Flips lock while a pair resolves or a hint is showing. Resolutions run
/// as deferred tasks tagged with the deal's generation.
#[derive(Debug)]
pub struct MatchingCardsController {
    source: Box<dyn PuzzleSource<Symbol>>,
    difficulty: Difficulty,
    layout: CardLayout,
    cards: Vec<Card>,
    revealed: Vec<usize>,
    locked: bool,
    peeking: bool,
    moves: u32,
    pairs: u32,
    matched_pairs: u32,
    score: Score,
    generation: u64,
    solved: bool,
    settle_task: Option<TaskId>,
    peek_task: Option<TaskId>,
}

impl MatchingCardsController {
    /// Creates an empty controller.
    pub fn new(source: Box<dyn PuzzleSource<Symbol>>, difficulty: Difficulty) -> Self {
        Self {
            source,
            difficulty,
            layout: CardLayout::for_tier(difficulty),
            cards: Vec::new(),
            revealed: Vec::new(),
            locked: false,
            peeking: false,
            moves: 0,
            pairs: 0,
            matched_pairs: 0,
            score: Score::default(),
            generation: 0,
            solved: false,
            settle_task: None,
            peek_task: None,
        }
    }

    /// The deck in slot order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deck shape.
    pub fn layout(&self) -> CardLayout {
        self.layout
    }

    /// Active tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Pairs of flips made.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs in the deck.
    pub fn pairs(&self) -> u32 {
        self.pairs
    }

    /// Pairs found.
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score.value()
    }

    /// Whether flips are refused.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether a hint is showing.
    pub fn is_peeking(&self) -> bool {
        self.peeking
    }

    /// Whether every pair has been found.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Deal generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn show(&self, slot: usize, fx: &mut Effects<'_>) {
        let cell = CellRef::Slot(slot);
        fx.sink.mark_cell(Self::GAME, cell, CellStyle::Flipped);
        fx.sink.write_cell(Self::GAME, cell, self.cards[slot].symbol);
    }

    fn hide(&self, slot: usize, fx: &mut Effects<'_>) {
        let cell = CellRef::Slot(slot);
        fx.sink.mark_cell(Self::GAME, cell, CellStyle::Blank);
        fx.sink.write_cell(Self::GAME, cell, "");
    }

    /// Turns a face-down card up.
    #[instrument(skip(self, fx))]
    pub(crate) fn flip(&mut self, slot: usize, fx: &mut Effects<'_>) -> Result<(), HubError> {
        if fx.is_paused(Self::GAME) {
            return Err(HubError::new(HubErrorKind::Paused));
        }
        if self.locked || self.peeking {
            return Err(HubError::new(HubErrorKind::FlipsLocked));
        }
        match self.cards.get(slot) {
            Some(card) if card.state == CardState::Hidden => {}
            _ => return Err(HubError::new(HubErrorKind::CardUnavailable(slot))),
        }
        fx.first_interaction(Self::GAME);

        self.cards[slot].state = CardState::Revealed;
        self.revealed.push(slot);
        self.show(slot, fx);
        debug!(slot, symbol = self.cards[slot].symbol, "Card flipped");

        if let [first, second] = self.revealed[..] {
            self.locked = true;
            self.moves += 1;
            fx.sink
                .update_aux_counter(Self::GAME, AuxCounter::Moves, self.moves);
            let delay = if self.cards[first].symbol == self.cards[second].symbol {
                fx.config.match_delay()
            } else {
                fx.config.mismatch_delay()
            };
            self.settle_task = Some(fx.defer(
                delay,
                Self::GAME,
                self.generation,
                Deferred::SettlePair,
            ));
        }
        Ok(())
    }

    fn settle_pair(&mut self, fx: &mut Effects<'_>) {
        self.settle_task = None;
        if let [first, second] = self.revealed[..] {
            if self.cards[first].symbol == self.cards[second].symbol {
                for slot in [first, second] {
                    self.cards[slot].state = CardState::Matched;
                    fx.sink
                        .mark_cell(Self::GAME, CellRef::Slot(slot), CellStyle::Matched);
                }
                self.matched_pairs += 1;
                self.score.award(MATCH_POINTS);
                fx.sink.update_score(Self::GAME, self.score.value());
                debug!(first, second, matched = self.matched_pairs, "Pair matched");
                if self.matched_pairs == self.pairs {
                    self.complete(fx);
                }
            } else {
                for slot in [first, second] {
                    self.cards[slot].state = CardState::Hidden;
                    // A showing hint turns them over when it ends.
                    if !self.peeking {
                        self.hide(slot, fx);
                    }
                }
                debug!(first, second, "Pair mismatched");
            }
        }
        self.revealed.clear();
        self.locked = false;
    }

    fn complete(&mut self, fx: &mut Effects<'_>) {
        fx.finish(Self::GAME);
        let bonus = time_bonus(fx.elapsed(Self::GAME), 5)
            + move_bonus(self.moves, self.pairs)
            + self.difficulty.completion_bonus();
        self.score.award(bonus);
        self.solved = true;
        fx.sink.update_score(Self::GAME, self.score.value());
        fx.notify(
            &format!("Congratulations! You completed {} difficulty!", self.difficulty),
            Severity::Success,
        );
        info!(
            moves = self.moves,
            bonus,
            score = self.score.value(),
            "Memory cleared"
        );
    }

    /// Shows every unmatched card for a while. Always costs points, even
    /// when a pair is resolving or a hint is already showing.
    #[instrument(skip(self, fx))]
    pub(crate) fn use_hint(&mut self, fx: &mut Effects<'_>) -> Result<(), HubError> {
        if fx.is_paused(Self::GAME) {
            return Err(HubError::new(HubErrorKind::Paused));
        }

        if let Some(id) = self.peek_task.take() {
            fx.scheduler.cancel(id);
        }
        self.peeking = true;
        for slot in 0..self.cards.len() {
            if self.cards[slot].state == CardState::Hidden {
                self.show(slot, fx);
            }
        }
        self.score.penalize(HINT_PENALTY);
        fx.sink.update_score(Self::GAME, self.score.value());
        let duration = fx.config.peek_duration();
        self.peek_task = Some(fx.defer(
            duration,
            Self::GAME,
            self.generation,
            Deferred::EndPeek,
        ));
        info!(score = self.score.value(), "Memory hint shown");
        Ok(())
    }

    /// Turns the hint cards back over. A pair still waiting to settle stays
    /// face up and locked.
    fn end_peek(&mut self, fx: &mut Effects<'_>) {
        self.peek_task = None;
        self.peeking = false;
        let settling = self.settle_task.is_some();
        for slot in 0..self.cards.len() {
            match self.cards[slot].state {
                CardState::Matched => {}
                CardState::Revealed if settling => {}
                _ => {
                    self.cards[slot].state = CardState::Hidden;
                    self.hide(slot, fx);
                }
            }
        }
        if !settling {
            self.revealed.clear();
            self.locked = false;
        }
    }

    /// Switches tier and deals a new deck.
    #[instrument(skip(self, fx))]
    pub(crate) fn change_difficulty(
        &mut self,
        tier: Difficulty,
        fx: &mut Effects<'_>,
    ) -> Result<(), HubError> {
        self.difficulty = tier;
        self.initialize(fx)
    }
}

impl PuzzleController for MatchingCardsController {
    const GAME: GameKind = GameKind::MatchingCards;

    #[instrument(skip(self, fx), fields(difficulty = %self.difficulty))]
    fn initialize(&mut self, fx: &mut Effects<'_>) -> Result<(), HubError> {
        let layout = CardLayout::for_tier(self.difficulty);
        let symbols = self.source.catalog(self.difficulty);
        let pairs = layout.pairs.min(symbols.len());
        if pairs == 0 {
            return Err(HubError::new(HubErrorKind::NoPuzzles(Self::GAME)));
        }

        let mut deck: Vec<Symbol> = symbols
            .choose_multiple(&mut *fx.rng, pairs)
            .flat_map(|symbol| [*symbol, *symbol])
            .collect();
        deck.shuffle(&mut *fx.rng);

        self.retire(&mut *fx.scheduler);
        self.generation += 1;
        self.layout = layout;
        self.cards = deck
            .into_iter()
            .map(|symbol| Card {
                symbol,
                state: CardState::Hidden,
            })
            .collect();
        self.revealed.clear();
        self.locked = false;
        self.peeking = false;
        self.moves = 0;
        self.pairs = u32::try_from(pairs).unwrap_or(u32::MAX);
        self.matched_pairs = 0;
        self.score = Score::default();
        self.solved = false;

        fx.restart(Self::GAME);
        fx.sink.render(
            Self::GAME,
            &PuzzleView::MatchingCards {
                difficulty: self.difficulty,
                columns: layout.columns,
                rows: layout.rows,
                slots: self.cards.len(),
            },
        );
        fx.sink.update_score(Self::GAME, 0);
        fx.sink
            .update_aux_counter(Self::GAME, AuxCounter::Moves, 0);
        info!(pairs, generation = self.generation, "Memory dealt");
        Ok(())
    }

    fn handle(&mut self, event: &InputEvent, fx: &mut Effects<'_>) -> Result<(), HubError> {
        match event {
            InputEvent::FlipCard { slot, .. } => self.flip(*slot, fx),
            InputEvent::NewGame { .. } => self.initialize(fx),
            InputEvent::Hint { .. } => self.use_hint(fx),
            InputEvent::Difficulty { tier, .. } => self.change_difficulty(*tier, fx),
            InputEvent::PauseToggle { .. } => {
                fx.toggle_pause(Self::GAME);
                Ok(())
            }
            InputEvent::SelectCell { .. }
            | InputEvent::SelectClue { .. }
            | InputEvent::EnterValue { .. }
            | InputEvent::Check { .. }
            | InputEvent::Reveal { .. }
            | InputEvent::SelectGame { .. } => Err(HubError::new(HubErrorKind::Unsupported {
                game: Self::GAME,
                action: event.action(),
            })),
        }
    }

    fn on_deferred(&mut self, generation: u64, action: Deferred, fx: &mut Effects<'_>) {
        if generation != self.generation {
            debug!(generation, current = self.generation, ?action, "Dropping stale resolution");
            return;
        }
        match action {
            Deferred::SettlePair => self.settle_pair(fx),
            Deferred::EndPeek => self.end_peek(fx),
        }
    }

    fn retire(&mut self, scheduler: &mut dyn Scheduler) {
        for id in [self.settle_task.take(), self.peek_task.take()]
            .into_iter()
            .flatten()
        {
            scheduler.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_layouts_fit_the_grid() {
        for tier in Difficulty::iter() {
            let layout = CardLayout::for_tier(tier);
            assert_eq!(layout.columns * layout.rows, layout.pairs * 2, "{tier}");
            assert_eq!(PuzzleSource::<Symbol>::catalog(&BundledPuzzles, tier).len(), layout.pairs);
        }
    }

    #[test]
    fn test_symbols_are_distinct() {
        let mut symbols = SYMBOLS.to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), SYMBOLS.len());
    }
}
