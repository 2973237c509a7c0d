use crate::debug_input;
use crate::hud::{Button, HudLayout, HudState};
use crate::round::RoundEvent;
use macroquad::prelude::{
    KeyCode, MouseButton, Vec2, get_char_pressed, is_key_pressed, is_mouse_button_pressed,
    mouse_position, screen_height, screen_width,
};

/// User-generated events, before they reach the round state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    SubmitClick,
    NextClick,
    RestartClick,
    EnterInGuess,
    Resize { width: f32, height: f32 },
}

impl UiEvent {
    /// Maps a UI event to its round event. Resizes only affect layout.
    pub fn to_round_event(&self, guess: &str) -> Option<RoundEvent> {
        match self {
            UiEvent::SubmitClick | UiEvent::EnterInGuess => Some(RoundEvent::Submit(guess.to_string())),
            UiEvent::NextClick => Some(RoundEvent::Next),
            UiEvent::RestartClick => Some(RoundEvent::Restart),
            UiEvent::Resize { .. } => None,
        }
    }
}

impl From<Button> for UiEvent {
    fn from(button: Button) -> Self {
        match button {
            Button::Submit => UiEvent::SubmitClick,
            Button::Next => UiEvent::NextClick,
            Button::Restart => UiEvent::RestartClick,
        }
    }
}

/// The event for a click at `point`, if it lands on an enabled button.
pub fn click_target(hud: &HudState, layout: &HudLayout, point: Vec2) -> Option<UiEvent> {
    layout
        .button_at(point)
        .filter(|button| hud.is_enabled(*button))
        .map(UiEvent::from)
}

/// Enter submits only while the guess field accepts input.
pub fn enter_target(hud: &HudState) -> Option<UiEvent> {
    hud.controls.guess.then_some(UiEvent::EnterInGuess)
}

/// Collects this frame's input. Typed characters go straight into the HUD
/// guess field; everything else comes back as events.
pub fn poll(hud: &mut HudState, layout: &HudLayout) -> Vec<UiEvent> {
    let mut events = Vec::new();

    let (width, height) = (screen_width(), screen_height());
    if !layout.matches(width, height) {
        events.push(UiEvent::Resize { width, height });
    }

    while let Some(c) = get_char_pressed() {
        hud.type_char(c);
    }
    if is_key_pressed(KeyCode::Backspace) {
        hud.backspace();
    }

    if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
        events.extend(enter_target(hud));
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        events.extend(click_target(hud, layout, Vec2::new(x, y)));
    }

    if !events.is_empty() {
        debug_input!("Frame input: {:?}", events);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Controls;

    fn center(layout: &HudLayout, button: Button) -> Vec2 {
        let rect = layout.button_rect(button);
        Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0)
    }

    #[test]
    fn test_ui_events_map_to_round_events() {
        assert_eq!(
            UiEvent::SubmitClick.to_round_event("snow man"),
            Some(RoundEvent::Submit("snow man".to_string()))
        );
        assert_eq!(
            UiEvent::EnterInGuess.to_round_event("x"),
            Some(RoundEvent::Submit("x".to_string()))
        );
        assert_eq!(UiEvent::NextClick.to_round_event(""), Some(RoundEvent::Next));
        assert_eq!(UiEvent::RestartClick.to_round_event(""), Some(RoundEvent::Restart));
        assert_eq!(
            UiEvent::Resize { width: 10.0, height: 10.0 }.to_round_event(""),
            None
        );
    }

    #[test]
    fn test_clicks_on_disabled_buttons_are_dropped() {
        let layout = HudLayout::new(1100.0, 760.0);
        let mut hud = HudState::new(30);
        hud.controls = Controls::PLAYING;

        assert_eq!(
            click_target(&hud, &layout, center(&layout, Button::Submit)),
            Some(UiEvent::SubmitClick)
        );
        assert_eq!(click_target(&hud, &layout, center(&layout, Button::Next)), None);
        assert_eq!(click_target(&hud, &layout, center(&layout, Button::Restart)), None);

        hud.controls = Controls::BETWEEN_ROUNDS;
        assert_eq!(click_target(&hud, &layout, center(&layout, Button::Submit)), None);
        assert_eq!(
            click_target(&hud, &layout, center(&layout, Button::Next)),
            Some(UiEvent::NextClick)
        );
        assert_eq!(
            click_target(&hud, &layout, center(&layout, Button::Restart)),
            Some(UiEvent::RestartClick)
        );
    }

    #[test]
    fn test_enter_requires_guess_field() {
        let mut hud = HudState::new(30);
        assert_eq!(enter_target(&hud), None);
        hud.controls = Controls::PLAYING;
        assert_eq!(enter_target(&hud), Some(UiEvent::EnterInGuess));
    }
}
