use crate::assets::{self, EMOJI_FONT_ASSET};
use crate::config::{
    BACKGROUND_COLOR, CAMERA_FOV_DEG, CARD_GRADIENT_END, CARD_TEXTURE_SIZE, ERROR_TEXT_COLOR,
    FLOOR_COLOR, HUD_PANEL_HEIGHT,
};
use crate::debug_render;
use crate::error::RenderError;
use crate::hud::{Button, HudLayout, HudState};
use crate::puzzle::Hint;
use crate::round::PuzzleView;
use crate::scene;
use crate::utils::{hex_color, lerp_color, shade, with_alpha};
use macroquad::prelude::*;

const EMOJI_FONT_SIZE: u16 = 180;
const MONOGRAM_FONT_SIZE: u16 = 150;
const LABEL_FONT_SIZE: u16 = 46;
const INSET_ALPHA: f32 = 0.18;
const INSET_MARGIN: f32 = 0.0625; // Fraction of the texture edge

const HUD_FONT_SIZE: u16 = 24;
const HUD_SMALL_FONT_SIZE: u16 = 20;
const EMOJI_LINE_FONT_SIZE: u16 = 40;

// Handles drawing the card scene and HUD using macroquad
pub struct Renderer {
    texture_size: u32,
    cards: Vec<RenderTarget>,
    emoji_font: Option<Font>,
    coverage: Option<GlyphCoverage>,
    floor: Mesh,
}

/// Answers which characters the loaded card font can draw.
pub struct GlyphCoverage {
    font: fontdue::Font,
}

impl GlyphCoverage {
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .ok()
            .map(|font| GlyphCoverage { font })
    }

    /// True when every visible character of `text` has a glyph. Empty text
    /// is never covered.
    pub fn covers(&self, text: &str) -> bool {
        let mut visible = text.chars().filter(|c| !is_modifier(*c)).peekable();
        visible.peek().is_some() && visible.all(|c| self.font.lookup_glyph_index(c) != 0)
    }
}

// Joiners, variation selectors and skin tones have no outline of their own
fn is_modifier(c: char) -> bool {
    matches!(c, '\u{200d}' | '\u{fe0e}' | '\u{fe0f}') || ('\u{1f3fb}'..='\u{1f3ff}').contains(&c)
}

/// What goes in the middle of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFace {
    Glyph(String),
    /// Initial of the label, for glyphs the card font cannot draw
    Monogram(char),
}

pub fn card_face(hint: &Hint, coverage: Option<&GlyphCoverage>) -> CardFace {
    match coverage {
        Some(coverage) if coverage.covers(&hint.emoji) => {
            CardFace::Glyph(hint.emoji.chars().filter(|c| !is_modifier(*c)).collect())
        }
        _ => CardFace::Monogram(
            hint.label
                .chars()
                .find(|c| c.is_alphanumeric())
                .map_or('?', |c| c.to_ascii_uppercase()),
        ),
    }
}

/// Checks that a hint can be baked at `size` pixels.
pub fn check_bake(size: u32, hint: &Hint) -> Result<(), RenderError> {
    if size == 0 {
        return Err(RenderError::TextureSize(size));
    }
    if hint.emoji.trim().is_empty() {
        return Err(RenderError::EmptyGlyph(hint.label.clone()));
    }
    Ok(())
}

fn floor_mesh() -> Mesh {
    let (positions, indices) = scene::floor_disc();
    let base = hex_color(FLOOR_COLOR);
    let fog = hex_color(BACKGROUND_COLOR);
    let vertices = positions
        .into_iter()
        .map(|p| {
            let color = shade(base, scene::light_at(p, Vec3::Y), fog, scene::fog_factor(p));
            Vertex::new(p.x, p.y, p.z, 0.0, 0.0, color)
        })
        .collect();
    Mesh {
        vertices,
        indices,
        texture: None,
    }
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            texture_size: CARD_TEXTURE_SIZE,
            cards: Vec::new(),
            emoji_font: None,
            coverage: None,
            floor: floor_mesh(),
        }
    }

    // Load the card font from embedded assets, falling back to the default font
    pub fn load_fonts(&mut self) {
        let Some((name, bytes)) = assets::card_font() else {
            log::warn!("No card font embedded, using default font");
            return;
        };
        match load_ttf_font_from_bytes(&bytes) {
            Ok(font) => {
                self.emoji_font = Some(font);
                self.coverage = GlyphCoverage::from_bytes(&bytes);
            }
            Err(e) => {
                log::warn!("Failed to load card font {}: {}", name, e);
                return;
            }
        }
        if name != EMOJI_FONT_ASSET {
            log::info!(
                "{} not bundled; glyphs missing from {} are drawn as monograms",
                EMOJI_FONT_ASSET,
                name
            );
        }
    }

    /// Bakes one texture per hint. Existing textures are replaced only once
    /// every hint has baked.
    pub fn bake_cards(&mut self, view: &PuzzleView) -> Result<(), RenderError> {
        let mut cards = Vec::with_capacity(view.hints.len());
        for hint in &view.hints {
            cards.push(self.bake_card(hint)?);
        }
        set_default_camera();
        debug_render!("Baked {} card textures at {}px", cards.len(), self.texture_size);
        self.cards = cards;
        Ok(())
    }

    fn bake_card(&self, hint: &Hint) -> Result<RenderTarget, RenderError> {
        check_bake(self.texture_size, hint)?;
        let size = self.texture_size as f32;
        let target = render_target(self.texture_size, self.texture_size);
        target.texture.set_filter(FilterMode::Linear);

        set_camera(&Camera2D {
            render_target: Some(target.clone()),
            zoom: vec2(2.0 / size, 2.0 / size),
            target: vec2(size / 2.0, size / 2.0),
            ..Default::default()
        });
        clear_background(BLANK);

        // Diagonal gradient, accent in the top-left corner
        let start = hex_color(hint.accent());
        let end = hex_color(CARD_GRADIENT_END);
        let mid = lerp_color(start, end, 0.5);
        let gradient = Mesh {
            vertices: vec![
                Vertex::new(0.0, 0.0, 0.0, 0.0, 0.0, start),
                Vertex::new(size, 0.0, 0.0, 1.0, 0.0, mid),
                Vertex::new(size, size, 0.0, 1.0, 1.0, end),
                Vertex::new(0.0, size, 0.0, 0.0, 1.0, mid),
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
            texture: None,
        };
        draw_mesh(&gradient);

        let margin = size * INSET_MARGIN;
        draw_rectangle(
            margin,
            margin,
            size - 2.0 * margin,
            size - 2.0 * margin,
            with_alpha(WHITE, INSET_ALPHA),
        );

        match card_face(hint, self.coverage.as_ref()) {
            CardFace::Glyph(glyph) => {
                let emoji_font = self.emoji_font.as_ref();
                let emoji_dims = measure_text(&glyph, emoji_font, EMOJI_FONT_SIZE, 1.0);
                draw_text_ex(
                    &glyph,
                    (size - emoji_dims.width) / 2.0,
                    size * 0.55,
                    TextParams {
                        font: emoji_font,
                        font_size: EMOJI_FONT_SIZE,
                        color: WHITE,
                        ..Default::default()
                    },
                );
            }
            CardFace::Monogram(initial) => {
                debug_render!("No glyph for {} in card font, drawing monogram", hint.label);
                let (cx, cy) = (size / 2.0, size * 0.42);
                draw_circle_lines(cx, cy, size * 0.22, 10.0, with_alpha(WHITE, 0.85));
                let text = initial.to_string();
                let dims = measure_text(&text, None, MONOGRAM_FONT_SIZE, 1.0);
                draw_text_ex(
                    &text,
                    cx - dims.width / 2.0,
                    cy + dims.offset_y / 2.0,
                    TextParams {
                        font_size: MONOGRAM_FONT_SIZE,
                        color: WHITE,
                        ..Default::default()
                    },
                );
            }
        }

        let label = hint.label.to_uppercase();
        let label_dims = measure_text(&label, None, LABEL_FONT_SIZE, 1.0);
        draw_text_ex(
            &label,
            (size - label_dims.width) / 2.0,
            size - margin - 40.0,
            TextParams {
                font_size: LABEL_FONT_SIZE,
                color: WHITE,
                ..Default::default()
            },
        );

        Ok(target)
    }

    pub fn draw_frame(&self, hud: &HudState, layout: &HudLayout, elapsed: f32) {
        clear_background(hex_color(BACKGROUND_COLOR));

        self.draw_scene(layout, elapsed);

        set_default_camera();
        self.draw_emoji_line(hud, layout);
        Self::draw_hud(hud, layout);
    }

    fn draw_scene(&self, layout: &HudLayout, elapsed: f32) {
        let scene_height = layout.scene_height();
        set_camera(&Camera3D {
            position: scene::camera_position(),
            target: vec3(0.0, 0.0, 0.0),
            up: Vec3::Y,
            fovy: CAMERA_FOV_DEG.to_radians(),
            aspect: Some(scene::scene_aspect(layout.width, scene_height)),
            viewport: Some(scene::scene_viewport(layout.width, layout.height, HUD_PANEL_HEIGHT)),
            ..Default::default()
        });

        draw_mesh(&self.floor);

        let normal = scene::card_normal(elapsed);
        let fog = hex_color(BACKGROUND_COLOR);
        for (corners, card) in scene::all_cards(elapsed).iter().zip(&self.cards) {
            let vertices = corners
                .iter()
                .zip(scene::CARD_UVS)
                .map(|(p, uv)| {
                    let tint = shade(WHITE, scene::light_at(*p, normal), fog, scene::fog_factor(*p));
                    Vertex::new(p.x, p.y, p.z, uv.x, uv.y, tint)
                })
                .collect();
            let mesh = Mesh {
                vertices,
                indices: scene::CARD_INDICES.to_vec(),
                texture: Some(card.texture.clone()),
            };
            draw_mesh(&mesh);
        }
    }

    fn draw_emoji_line(&self, hud: &HudState, layout: &HudLayout) {
        let Some(view) = &hud.puzzle else {
            return;
        };
        let faces: Vec<CardFace> = view
            .hints
            .iter()
            .map(|hint| card_face(hint, self.coverage.as_ref()))
            .collect();
        let font = self.emoji_font.as_ref();
        let y = layout.panel.y - 16.0;

        if faces.iter().all(|face| matches!(face, CardFace::Glyph(_))) {
            let line: String = hud.emoji_line().chars().filter(|c| !is_modifier(*c)).collect();
            let dims = measure_text(&line, font, EMOJI_LINE_FONT_SIZE, 1.0);
            draw_text_ex(
                &line,
                (layout.width - dims.width) / 2.0,
                y,
                TextParams {
                    font,
                    font_size: EMOJI_LINE_FONT_SIZE,
                    color: WHITE,
                    ..Default::default()
                },
            );
            return;
        }

        // Mixed line: glyphs in the card font, monograms in the default font
        let tokens: Vec<(String, Option<&Font>)> = faces
            .into_iter()
            .map(|face| match face {
                CardFace::Glyph(glyph) => (glyph, font),
                CardFace::Monogram(initial) => (initial.to_string(), None),
            })
            .collect();
        let gap = EMOJI_LINE_FONT_SIZE as f32 * 0.5;
        let widths: Vec<f32> = tokens
            .iter()
            .map(|(text, font)| measure_text(text, *font, EMOJI_LINE_FONT_SIZE, 1.0).width)
            .collect();
        let total = widths.iter().sum::<f32>() + gap * (widths.len().saturating_sub(1)) as f32;

        let mut x = (layout.width - total) / 2.0;
        for ((text, font), width) in tokens.iter().zip(widths) {
            draw_text_ex(
                text,
                x,
                y,
                TextParams {
                    font: *font,
                    font_size: EMOJI_LINE_FONT_SIZE,
                    color: WHITE,
                    ..Default::default()
                },
            );
            x += width + gap;
        }
    }

    fn draw_hud(hud: &HudState, layout: &HudLayout) {
        let panel = layout.panel;
        draw_rectangle(panel.x, panel.y, panel.w, panel.h, Color::from_rgba(0, 0, 0, 170));

        let text_params = |color: Color, font_size: u16| TextParams {
            font_size,
            color,
            ..Default::default()
        };
        let error_color = hex_color(ERROR_TEXT_COLOR);

        // Status row
        let status_y = panel.y + 36.0;
        let countdown_color = if hud.countdown_warning { error_color } else { WHITE };
        draw_text_ex(
            &format!("Time: {}s", hud.countdown),
            layout.input.x,
            status_y,
            text_params(countdown_color, HUD_FONT_SIZE),
        );
        draw_text_ex(
            &format!("Score: {}", hud.score),
            layout.input.x + 160.0,
            status_y,
            text_params(WHITE, HUD_FONT_SIZE),
        );
        let word_length = hud.word_length_text();
        let dims = measure_text(&word_length, None, HUD_FONT_SIZE, 1.0);
        draw_text_ex(
            &word_length,
            panel.right() - dims.width - layout.input.x,
            status_y,
            text_params(LIGHTGRAY, HUD_FONT_SIZE),
        );

        // Guess field
        let input = layout.input;
        let field_alpha = if hud.controls.guess { 0.12 } else { 0.05 };
        draw_rectangle(input.x, input.y, input.w, input.h, with_alpha(WHITE, field_alpha));
        draw_rectangle_lines(input.x, input.y, input.w, input.h, 2.0, with_alpha(WHITE, 0.4));
        let (guess, guess_color) = if hud.guess.is_empty() && hud.controls.guess {
            ("Type your guess".to_string(), GRAY)
        } else if hud.controls.guess {
            (format!("{}_", hud.guess), WHITE)
        } else {
            (hud.guess.clone(), GRAY)
        };
        draw_text_ex(
            &guess,
            input.x + 12.0,
            input.y + input.h * 0.68,
            text_params(guess_color, HUD_FONT_SIZE),
        );

        for button in Button::ALL {
            Self::draw_button(button, layout.button_rect(button), hud.is_enabled(button));
        }

        // Status message
        let message_color = if hud.message_is_error { error_color } else { WHITE };
        draw_text_ex(
            &hud.message,
            layout.input.x,
            panel.y + 150.0,
            text_params(message_color, HUD_SMALL_FONT_SIZE),
        );
    }

    fn draw_button(button: Button, rect: Rect, enabled: bool) {
        let (fill, text_color) = if enabled {
            (hex_color(0x7c3aed), WHITE)
        } else {
            (Color::from_rgba(60, 60, 70, 255), GRAY)
        };
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
        let caption = button.caption();
        let dims = measure_text(caption, None, HUD_FONT_SIZE, 1.0);
        draw_text_ex(
            caption,
            rect.x + (rect.w - dims.width) / 2.0,
            rect.y + rect.h * 0.68,
            TextParams {
                font_size: HUD_FONT_SIZE,
                color: text_color,
                ..Default::default()
            },
        );
    }

    pub fn window_should_close() -> bool {
        is_key_down(KeyCode::Escape) || is_quit_requested()
    }
}
