//! Geometry of the 3D card scene: where the four hint cards sit, how the group
//! sways and bobs over time, the floor disc beneath them, and the per-vertex
//! lighting and fog applied to both.

use crate::config::{
    AMBIENT_LIGHT, BOB_AMPLITUDE, BOB_FREQ, CAMERA_POSITION, CARD_SIZE, CARD_SPACING_X,
    CARD_SPACING_Y, FILL_LIGHT, FILL_LIGHT_COLOR, FILL_LIGHT_POSITION, FILL_LIGHT_RANGE,
    FLOOR_RADIUS, FLOOR_SEGMENTS, FLOOR_Y, FOG_FAR, FOG_NEAR, HINTS_PER_PUZZLE, KEY_LIGHT,
    KEY_LIGHT_POSITION, SWAY_X_AMPLITUDE, SWAY_X_FREQ, SWAY_Y_AMPLITUDE, SWAY_Y_FREQ,
};
use crate::utils::hex_to_rgb;
use macroquad::math::{EulerRot, Quat, Vec2, Vec3};

/// Card centre in group space. Cards fill a 2x2 grid, left to right and top
/// to bottom.
pub fn card_anchor(index: usize) -> Vec3 {
    let column = if index % 2 == 0 { -1.0 } else { 1.0 };
    let row = if index % 4 < 2 { 1.0 } else { -1.0 };
    Vec3::new(column * CARD_SPACING_X, row * CARD_SPACING_Y, 0.0)
}

/// Slow sway of the whole card group, in radians around Y and X.
pub fn group_angles(elapsed: f32) -> (f32, f32) {
    (
        (elapsed * SWAY_Y_FREQ).sin() * SWAY_Y_AMPLITUDE,
        (elapsed * SWAY_X_FREQ).sin() * SWAY_X_AMPLITUDE,
    )
}

pub fn group_rotation(elapsed: f32) -> Quat {
    let (yaw, pitch) = group_angles(elapsed);
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

/// Vertical bob of one card. The phase offset keeps the cards out of step.
pub fn card_bob(elapsed: f32, index: usize) -> f32 {
    (elapsed * BOB_FREQ + index as f32).sin() * BOB_AMPLITUDE
}

/// World-space corners of a card: top-left, top-right, bottom-right,
/// bottom-left.
pub fn card_corners(index: usize, elapsed: f32) -> [Vec3; 4] {
    let half = CARD_SIZE / 2.0;
    let center = card_anchor(index) + Vec3::Y * card_bob(elapsed, index);
    let rotation = group_rotation(elapsed);
    [
        Vec3::new(-half, half, 0.0),
        Vec3::new(half, half, 0.0),
        Vec3::new(half, -half, 0.0),
        Vec3::new(-half, -half, 0.0),
    ]
    .map(|corner| rotation * (center + corner))
}

/// Texture coordinates matching `card_corners`. Baked cards keep their top
/// row at v = 0.
pub const CARD_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

pub const CARD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// All cards of a puzzle, in hint order.
pub fn all_cards(elapsed: f32) -> [[Vec3; 4]; HINTS_PER_PUZZLE] {
    std::array::from_fn(|i| card_corners(i, elapsed))
}

/// A flat disc under the cards as a triangle fan: the centre vertex first,
/// then the rim.
pub fn floor_disc() -> (Vec<Vec3>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(FLOOR_SEGMENTS + 1);
    let mut indices = Vec::with_capacity(FLOOR_SEGMENTS * 3);

    vertices.push(Vec3::new(0.0, FLOOR_Y, 0.0));
    for i in 0..FLOOR_SEGMENTS {
        let angle = i as f32 / FLOOR_SEGMENTS as f32 * std::f32::consts::TAU;
        vertices.push(Vec3::new(
            angle.cos() * FLOOR_RADIUS,
            FLOOR_Y,
            angle.sin() * FLOOR_RADIUS,
        ));
    }
    for i in 0..FLOOR_SEGMENTS {
        let next = (i + 1) % FLOOR_SEGMENTS;
        indices.extend([0, (i + 1) as u16, (next + 1) as u16]);
    }
    (vertices, indices)
}

pub fn camera_position() -> Vec3 {
    Vec3::from_array(CAMERA_POSITION)
}

/// Facing direction of every card, which turns with the group sway.
pub fn card_normal(elapsed: f32) -> Vec3 {
    group_rotation(elapsed) * Vec3::Z
}

fn fill_color() -> Vec3 {
    let (r, g, b) = hex_to_rgb(FILL_LIGHT_COLOR);
    Vec3::new(r as f32, g as f32, b as f32) / 255.0
}

/// Per-channel light reaching a point with unit `normal`: white ambient, a
/// white directional key light and a violet point fill. Channels cap at 1.
pub fn light_at(position: Vec3, normal: Vec3) -> Vec3 {
    let key_dir = Vec3::from_array(KEY_LIGHT_POSITION).normalize();
    let key = KEY_LIGHT * normal.dot(key_dir).max(0.0);

    let to_fill = Vec3::from_array(FILL_LIGHT_POSITION) - position;
    let falloff = (1.0 - to_fill.length() / FILL_LIGHT_RANGE).max(0.0).powi(2);
    let fill = FILL_LIGHT * falloff * normal.dot(to_fill.normalize_or_zero()).max(0.0);

    (Vec3::splat(AMBIENT_LIGHT + key) + fill_color() * fill).min(Vec3::ONE)
}

/// Linear fog by distance from the camera: 0 inside `FOG_NEAR`, 1 beyond
/// `FOG_FAR`.
pub fn fog_factor(position: Vec3) -> f32 {
    let distance = position.distance(camera_position());
    ((distance - FOG_NEAR) / (FOG_FAR - FOG_NEAR)).clamp(0.0, 1.0)
}

/// Aspect ratio of the scene area, guarded against a collapsed window.
pub fn scene_aspect(width: f32, height: f32) -> f32 {
    if height < 1.0 { 1.0 } else { width / height }
}

/// GL viewport `(x, y, w, h)` for the area above the HUD panel. GL counts
/// rows from the bottom, so the panel height becomes the y offset.
pub fn scene_viewport(width: f32, height: f32, panel_height: f32) -> (i32, i32, i32, i32) {
    let panel = panel_height.min(height).max(0.0);
    (0, panel as i32, width as i32, (height - panel) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_card_anchors_form_grid() {
        assert_eq!(card_anchor(0), Vec3::new(-1.35, 1.25, 0.0));
        assert_eq!(card_anchor(1), Vec3::new(1.35, 1.25, 0.0));
        assert_eq!(card_anchor(2), Vec3::new(-1.35, -1.25, 0.0));
        assert_eq!(card_anchor(3), Vec3::new(1.35, -1.25, 0.0));
    }

    #[test]
    fn test_group_angles() {
        let (yaw, pitch) = group_angles(0.0);
        assert_approx_eq!(yaw, 0.0);
        assert_approx_eq!(pitch, 0.0);

        let t = 10.0;
        let (yaw, pitch) = group_angles(t);
        assert_approx_eq!(yaw, (t * 0.2f32).sin() * 0.12);
        assert_approx_eq!(pitch, (t * 0.16f32).sin() * 0.06);
        assert!(yaw.abs() <= SWAY_Y_AMPLITUDE);
    }

    #[test]
    fn test_card_bob_is_phase_shifted() {
        assert_approx_eq!(card_bob(0.0, 0), 0.0);
        assert_approx_eq!(card_bob(0.0, 1), 1.0f32.sin() * 0.05);
        assert_approx_eq!(card_bob(2.0, 3), (2.0f32 * 1.5 + 3.0).sin() * 0.05);
    }

    #[test]
    fn test_card_corners_at_rest() {
        let corners = card_corners(0, 0.0);
        let half = CARD_SIZE / 2.0;
        assert_approx_eq!(corners[0].x, -1.35 - half);
        assert_approx_eq!(corners[0].y, 1.25 + half);
        assert_approx_eq!(corners[2].x, -1.35 + half);
        assert_approx_eq!(corners[2].y, 1.25 - half);
        for corner in corners {
            assert_approx_eq!(corner.z, 0.0);
        }
    }

    #[test]
    fn test_card_keeps_its_size_while_swaying() {
        let corners = card_corners(3, 7.3);
        assert_approx_eq!(corners[0].distance(corners[1]), CARD_SIZE, 1e-4);
        assert_approx_eq!(corners[1].distance(corners[2]), CARD_SIZE, 1e-4);
    }

    #[test]
    fn test_floor_disc() {
        let (vertices, indices) = floor_disc();
        assert_eq!(vertices.len(), FLOOR_SEGMENTS + 1);
        assert_eq!(indices.len(), FLOOR_SEGMENTS * 3);
        for v in &vertices[1..] {
            assert_approx_eq!(v.y, FLOOR_Y);
            assert_approx_eq!(Vec2::new(v.x, v.z).length(), FLOOR_RADIUS, 1e-4);
        }
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn test_scene_aspect() {
        assert_approx_eq!(scene_aspect(1100.0, 570.0), 1100.0 / 570.0);
        assert_approx_eq!(scene_aspect(800.0, 0.0), 1.0);
    }

    #[test]
    fn test_card_normal_faces_camera_at_rest() {
        let normal = card_normal(0.0);
        assert_approx_eq!(normal.z, 1.0);
        assert_approx_eq!(card_normal(4.0).length(), 1.0, 1e-5);
    }

    #[test]
    fn test_surfaces_facing_away_get_ambient_only() {
        let light = light_at(Vec3::ZERO, -Vec3::Z);
        assert_approx_eq!(light.x, AMBIENT_LIGHT);
        assert_approx_eq!(light.y, AMBIENT_LIGHT);
        assert_approx_eq!(light.z, AMBIENT_LIGHT);
    }

    #[test]
    fn test_fill_light_tints_cards_violet() {
        let lower_left = light_at(card_anchor(2), Vec3::Z);
        let upper_right = light_at(card_anchor(1), Vec3::Z);

        // Violet fill: blue and red outweigh green
        assert!(lower_left.z >= lower_left.x);
        assert!(lower_left.x > lower_left.y);
        assert!(lower_left.max_element() <= 1.0);
        // The fill sits low on the left
        assert!(lower_left.x > upper_right.x);
    }

    #[test]
    fn test_fog_grows_with_distance() {
        let camera = camera_position();
        assert_approx_eq!(fog_factor(camera + Vec3::new(0.0, 0.0, -5.0)), 0.0);
        assert_approx_eq!(fog_factor(camera + Vec3::new(0.0, 0.0, -15.0)), 0.5, 1e-5);
        assert_approx_eq!(fog_factor(camera + Vec3::new(0.0, 0.0, -40.0)), 1.0);

        // Back of the floor is hazier than the front
        let front = fog_factor(Vec3::new(0.0, FLOOR_Y, FLOOR_RADIUS));
        let back = fog_factor(Vec3::new(0.0, FLOOR_Y, -FLOOR_RADIUS));
        assert_approx_eq!(front, 0.0);
        assert!(back > 0.3 && back < 0.45);
    }

    #[test]
    fn test_scene_viewport_sits_above_panel() {
        assert_eq!(scene_viewport(1100.0, 760.0, 190.0), (0, 190, 1100, 570));
        assert_eq!(scene_viewport(300.0, 100.0, 190.0), (0, 100, 300, 0));
    }
}
