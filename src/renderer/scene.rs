//! Paints a `GameState` onto a drawing surface

use super::surface::{Color, DrawSurface, Font};
use crate::consts::*;
use crate::sim::GameState;

pub const GAME_OVER_MESSAGE: &str = "Game Over! Press 'R' to Restart";

/// Clear the surface and draw the whole frame
pub fn draw_frame(surface: &mut impl DrawSurface, state: &GameState) {
    surface.clear_rect(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT);
    draw_background(surface, state);
    draw_player(surface, state);
    draw_obstacles(surface, state);
    draw_score(surface, state);
    if state.is_over() {
        draw_game_over(surface);
    }
}

fn draw_background(surface: &mut impl DrawSurface, state: &GameState) {
    let band_x = state.backdrop.band_x;
    // Second copy covers the strip the first one has scrolled away from
    surface.fill_rect(band_x, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT, Color::SKY);
    surface.fill_rect(
        band_x + SURFACE_WIDTH,
        0.0,
        SURFACE_WIDTH,
        SURFACE_HEIGHT,
        Color::SKY,
    );

    surface.fill_circle(SUN_X, SUN_Y, SUN_RADIUS, Color::SUN);

    let cloud_x = state.backdrop.cloud_x;
    for i in 0..3 {
        surface.fill_circle(
            cloud_x + i as f32 * CLOUD_PUFF_SPACING,
            CLOUD_Y,
            CLOUD_PUFF_RADIUS,
            Color::CLOUD,
        );
    }
}

fn draw_player(surface: &mut impl DrawSurface, state: &GameState) {
    let p = &state.player;
    surface.fill_rect(p.pos.x, p.pos.y, p.size.x, p.size.y, Color::PLAYER);
}

fn draw_obstacles(surface: &mut impl DrawSurface, state: &GameState) {
    for o in &state.obstacles {
        surface.fill_rect(o.pos.x, o.pos.y, o.size.x, o.size.y, Color::OBSTACLE);
    }
}

fn draw_score(surface: &mut impl DrawSurface, state: &GameState) {
    let text = format!("Score: {}", state.score);
    surface.fill_text(&text, 10.0, 20.0, Font::HUD, Color::TEXT);
}

fn draw_game_over(surface: &mut impl DrawSurface) {
    surface.fill_text(
        GAME_OVER_MESSAGE,
        SURFACE_WIDTH / 4.0,
        SURFACE_HEIGHT / 2.0,
        Font::BANNER,
        Color::TEXT,
    );
}
