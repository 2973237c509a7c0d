//! A play session: owns the catalog, the puzzle deck, the round state and the
//! random source, and feeds events through the round state machine.

use crate::catalog::EmojiCatalog;
use crate::puzzle::{Puzzle, PuzzleBuilder};
use crate::round::{self, Effect, PuzzleView, RoundEvent, RoundRules, RoundState};
use crate::{debug_puzzle, debug_round};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub struct GameSession {
    catalog: EmojiCatalog,
    puzzles: Vec<Puzzle>,
    round: RoundState,
    rules: RoundRules,
    rng: StdRng,
}

impl GameSession {
    pub fn new(catalog: EmojiCatalog, puzzles: Vec<Puzzle>, rules: RoundRules, rng: StdRng) -> Self {
        GameSession {
            catalog,
            puzzles,
            round: RoundState {
                remaining_seconds: rules.round_seconds,
                ..RoundState::default()
            },
            rules,
            rng,
        }
    }

    /// Builds up to `target` puzzles from `catalog` and deals them in random
    /// order. A fixed `seed` makes the whole session reproducible.
    pub fn build(catalog: EmojiCatalog, target: usize, rules: RoundRules, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut puzzles = PuzzleBuilder::new(&catalog, &mut rng).build(target);
        puzzles.shuffle(&mut rng);
        Self::new(catalog, puzzles, rules, rng)
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn rules(&self) -> &RoundRules {
        &self.rules
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.puzzles.get(self.round.active_puzzle)
    }

    /// Feeds one event through the state machine and returns the effects the
    /// presentation layer should apply.
    pub fn handle(&mut self, event: RoundEvent, now: f64) -> Vec<Effect> {
        if event == RoundEvent::Restart && !self.round.is_active() {
            self.puzzles.shuffle(&mut self.rng);
            debug_puzzle!("Deck reshuffled ({} puzzles)", self.puzzles.len());
        }

        let (next, effects) = round::transition(&self.round, &self.puzzles, &event, now, &self.rules);
        self.round = next;

        effects
            .into_iter()
            .map(|effect| match effect {
                Effect::ShowPuzzle(view) => Effect::ShowPuzzle(self.present(view)),
                other => other,
            })
            .collect()
    }

    /// Shuffles the card order and re-rolls any hint that is not locked.
    fn present(&mut self, mut view: PuzzleView) -> PuzzleView {
        view.hints.shuffle(&mut self.rng);
        for hint in view.hints.iter_mut().filter(|h| !h.locked) {
            let keyword = hint.label.split(' ').next().unwrap_or_default();
            if let Some(glyph) = self.catalog.random_glyph(keyword, &mut self.rng) {
                debug_round!(self.round.rounds_played, "re-rolled hint {} to {}", hint.label, glyph);
                hint.emoji = glyph.to_string();
            }
        }
        view
    }
}
