use crate::debug_input;
use crate::error::GameError;
use crate::hud::{HudLayout, HudState};
use crate::input::{self, UiEvent};
use crate::render::Renderer;
use crate::round::RoundEvent;
use crate::session::GameSession;
use log::info;
use macroquad::prelude::{get_time, next_frame};

/// Owns the session and the HUD, and drives both from the frame loop.
pub struct Game {
    session: GameSession,
    hud: HudState,
    layout: HudLayout,
}

impl Game {
    pub fn new(session: GameSession, width: f32, height: f32) -> Self {
        let hud = HudState::new(session.rules().round_seconds);
        Game {
            session,
            hud,
            layout: HudLayout::new(width, height),
        }
    }

    pub fn hud(&self) -> &HudState {
        &self.hud
    }

    pub fn layout(&self) -> &HudLayout {
        &self.layout
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Starts the first round. Returns true when the cards need baking.
    pub fn start(&mut self, now: f64) -> bool {
        let effects = self.session.handle(RoundEvent::Start, now);
        self.hud.apply(&effects)
    }

    /// Feeds this frame's UI events through the session, then ticks the
    /// clock once. Returns true when a new puzzle needs baking.
    pub fn step(&mut self, events: &[UiEvent], now: f64) -> bool {
        let mut rebake = false;
        for event in events {
            if let UiEvent::Resize { width, height } = *event {
                debug_input!("Window resized to {}x{}", width, height);
                self.layout = HudLayout::new(width, height);
                continue;
            }
            if let Some(round_event) = event.to_round_event(&self.hud.guess) {
                let effects = self.session.handle(round_event, now);
                rebake |= self.hud.apply(&effects);
            }
        }

        let effects = self.session.handle(RoundEvent::Tick, now);
        rebake |= self.hud.apply(&effects);
        rebake
    }

    fn rebake(&self, renderer: &mut Renderer) -> Result<(), GameError> {
        if let Some(view) = &self.hud.puzzle {
            renderer.bake_cards(view)?;
        }
        Ok(())
    }

    pub async fn run(&mut self, renderer: &mut Renderer) -> Result<(), GameError> {
        info!("Starting main loop...");
        let started = get_time();
        if self.start(started) {
            self.rebake(renderer)?;
        }

        while !Renderer::window_should_close() {
            let events = input::poll(&mut self.hud, &self.layout);
            let now = get_time();
            if self.step(&events, now) {
                self.rebake(renderer)?;
            }

            renderer.draw_frame(&self.hud, &self.layout, (now - started) as f32);
            next_frame().await;
        }

        info!(
            "Exiting Emoji Guess after {} rounds with score {}.",
            self.session.round().rounds_played,
            self.session.score()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EmojiCatalog, EmojiEntry};
    use crate::puzzle::{Hint, Puzzle};
    use crate::round::{Controls, RoundPhase, RoundRules, WRONG_GUESS_MESSAGE, correct_message};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rainbow_game() -> Game {
        let puzzle = Puzzle {
            word: "RAINBOW".to_string(),
            hints: [
                Hint::new("🌧️", "rain", 0),
                Hint::new("🎀", "bow", 1),
                Hint::new("🎨", "colors", 2),
                Hint::new("☀️", "sun", 3),
            ],
        };
        let catalog = EmojiCatalog::new(vec![EmojiEntry::new("rain", "🌧️")]);
        let session = GameSession::new(
            catalog,
            vec![puzzle],
            RoundRules::default(),
            StdRng::seed_from_u64(9),
        );
        Game::new(session, 1100.0, 760.0)
    }

    fn type_guess(game: &mut Game, guess: &str) {
        for c in guess.chars() {
            game.hud.type_char(c);
        }
    }

    #[test]
    fn test_start_shows_puzzle() {
        let mut game = rainbow_game();
        assert!(game.start(0.0));
        assert_eq!(game.hud().controls, Controls::PLAYING);
        assert_eq!(game.hud().word_length_text(), "Word length: 7");
        assert_eq!(game.hud().countdown, 30);
    }

    #[test]
    fn test_typed_guess_wins_round() {
        let mut game = rainbow_game();
        game.start(0.0);
        type_guess(&mut game, "Rainbow");

        let rebake = game.step(&[UiEvent::EnterInGuess], 4.2);
        assert!(!rebake);
        assert_eq!(game.hud().message, correct_message("RAINBOW"));
        assert_eq!(game.hud().score, 26);
        assert_eq!(game.hud().controls, Controls::BETWEEN_ROUNDS);
        assert_eq!(game.session().round().phase, RoundPhase::Won);
    }

    #[test]
    fn test_wrong_guess_keeps_playing() {
        let mut game = rainbow_game();
        game.start(0.0);
        type_guess(&mut game, "storm");
        game.step(&[UiEvent::SubmitClick], 1.0);
        assert_eq!(game.hud().message, WRONG_GUESS_MESSAGE);
        assert!(game.hud().message_is_error);
        assert!(game.session().round().is_active());
    }

    #[test]
    fn test_next_after_win_rebakes() {
        let mut game = rainbow_game();
        game.start(0.0);
        type_guess(&mut game, "rainbow");
        game.step(&[UiEvent::SubmitClick], 1.0);

        assert!(game.step(&[UiEvent::NextClick], 2.0));
        assert!(game.session().round().is_active());
        assert_eq!(game.hud().countdown, 30);
    }

    #[test]
    fn test_ticks_count_down_to_expiry() {
        let mut game = rainbow_game();
        game.start(0.0);
        game.step(&[], 26.5);
        assert_eq!(game.hud().countdown, 4);
        assert!(game.hud().countdown_warning);

        game.step(&[], 30.0);
        assert_eq!(game.session().round().phase, RoundPhase::Expired);
        assert_eq!(game.hud().controls, Controls::BETWEEN_ROUNDS);
    }

    #[test]
    fn test_resize_rebuilds_layout() {
        let mut game = rainbow_game();
        game.start(0.0);
        game.step(&[UiEvent::Resize { width: 800.0, height: 600.0 }], 0.5);
        assert!(game.layout().matches(800.0, 600.0));
        assert!(game.session().round().is_active());
    }
}
