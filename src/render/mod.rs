//! Rendering collaborator boundary
//!
//! The simulation never draws; it hands the shell a per-frame list of
//! rectangle and text draw commands with all geometry and values already
//! computed. Rasterizing them is the shell's problem.

use glam::Vec2;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::depth::{X_POSITIONS_LEFT, X_POSITIONS_RIGHT, Y_POSITIONS, Rect, SIZE_SCALERS};
use crate::sim::{GamePhase, GameState};

/// An sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

pub const DARK_BLUE: Color = Color::rgb(0, 82, 172);
pub const BLUE: Color = Color::rgb(0, 121, 241);
pub const RAY_WHITE: Color = Color::rgb(245, 245, 245);
pub const GRAY: Color = Color::rgb(130, 130, 130);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// One draw request for the shell
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Color,
    },
    /// Vertical gradient fill
    GradientV {
        rect: Rect,
        top: Color,
        bottom: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Color scheme for a frame
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub font: Color,
    pub road: Color,
    pub marker: Color,
    pub buildings: Color,
    pub racer: Color,
    pub player: Color,
    pub stats: Color,
    pub sky_top: Color,
    pub sky_bottom: Color,
    pub ground: Color,
}

impl Palette {
    pub fn classic() -> Self {
        Self {
            font: DARK_BLUE,
            road: DARK_BLUE,
            marker: DARK_BLUE,
            buildings: DARK_BLUE,
            racer: BLUE,
            player: DARK_BLUE,
            stats: RAY_WHITE,
            sky_top: DARK_BLUE,
            sky_bottom: RAY_WHITE,
            ground: GRAY,
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            font: BLACK,
            road: BLACK,
            marker: WHITE,
            buildings: BLACK,
            racer: BLACK,
            player: BLACK,
            stats: WHITE,
            sky_top: WHITE,
            sky_bottom: WHITE,
            ground: WHITE,
        }
    }

    pub fn for_settings(settings: &Settings) -> Self {
        if settings.high_contrast {
            Self::high_contrast()
        } else {
            Self::classic()
        }
    }
}

/// Build the complete draw list for the current frame
pub fn build_frame(state: &GameState, highscore: u32, settings: &Settings) -> Vec<DrawCommand> {
    let palette = Palette::for_settings(settings);
    let mut out = Vec::new();
    match state.phase {
        GamePhase::Logo => logo_screen(state, &palette, &mut out),
        GamePhase::Title => title_screen(&palette, &mut out),
        GamePhase::Playing => {
            background(&palette, &mut out);
            road(&palette, &mut out);
            road_markers(&palette, &mut out);
            buildings(&palette, &mut out);
            if settings.show_stats {
                stats_overlay(state, &palette, &mut out);
            }
            racers(state, &palette, &mut out);
            out.push(DrawCommand::Rect {
                rect: state.player.rect(&state.depth_table),
                color: palette.player,
            });
        }
        GamePhase::End => {
            road(&palette, &mut out);
            road_markers(&palette, &mut out);
            game_over_screen(state, highscore, &palette, &mut out);
        }
    }
    out
}

/// Logo text reveals one letter at a time over the logo phase
fn logo_screen(state: &GameState, palette: &Palette, out: &mut Vec<DrawCommand>) {
    const LOGO: &str = "DODGER";
    let progress = (state.frame as f32 / LOGO_DURATION_TICKS as f32).min(1.0);
    let visible = ((LOGO.len() as f32 * progress * 2.0) as usize).min(LOGO.len());
    out.push(DrawCommand::Text {
        text: LOGO[..visible].to_string(),
        pos: Vec2::new(WIN_WIDTH * 0.25, WIN_HEIGHT * 0.4),
        size: 126.0,
        color: palette.font,
    });
}

fn title_screen(palette: &Palette, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::Text {
        text: "Dodger".to_string(),
        pos: Vec2::new(WIN_WIDTH * 0.25, WIN_HEIGHT * 0.25),
        size: 124.0,
        color: palette.font,
    });
    out.push(DrawCommand::Text {
        text: "Press Space To Start".to_string(),
        pos: Vec2::new(WIN_WIDTH * 0.10, HALF_HEIGHT),
        size: 64.0,
        color: palette.font,
    });
}

/// Sky fades down toward the horizon, ground fades toward the bottom edge
fn background(palette: &Palette, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::GradientV {
        rect: Rect::new(0.0, 0.0, WIN_WIDTH, HALF_HEIGHT),
        top: palette.sky_top,
        bottom: palette.sky_bottom,
    });
    out.push(DrawCommand::GradientV {
        rect: Rect::new(0.0, HALF_HEIGHT, WIN_WIDTH, HALF_HEIGHT),
        top: palette.sky_bottom,
        bottom: palette.ground,
    });
}

/// The road narrows toward the horizon: one slab per depth tier, spanning
/// the left lane's left edge to the right lane's right edge at that tier
fn road(palette: &Palette, out: &mut Vec<DrawCommand>) {
    for tier in 0..DEPTH_TIERS {
        let left = CELL_WIDTH * X_POSITIONS_LEFT[tier];
        let right = CELL_WIDTH * (X_POSITIONS_RIGHT[tier] + SIZE_SCALERS[tier]);
        let top = WIN_HEIGHT - CELL_HEIGHT * Y_POSITIONS[tier];
        let bottom = if tier + 1 < DEPTH_TIERS {
            WIN_HEIGHT - CELL_HEIGHT * Y_POSITIONS[tier + 1]
        } else {
            WIN_HEIGHT
        };
        out.push(DrawCommand::Rect {
            rect: Rect::new(left, top, right - left, bottom - top),
            color: palette.road,
        });
    }
}

/// Dashed centerline markers between the lanes, one dash per tier
fn road_markers(palette: &Palette, out: &mut Vec<DrawCommand>) {
    for tier in 0..DEPTH_TIERS {
        let scale = SIZE_SCALERS[tier];
        let y = WIN_HEIGHT - CELL_HEIGHT * Y_POSITIONS[tier];
        for boundary in [0.30f32, 0.70] {
            let left = CELL_WIDTH * X_POSITIONS_LEFT[tier];
            let right = CELL_WIDTH * (X_POSITIONS_RIGHT[tier] + scale);
            let x = left + (right - left) * boundary;
            out.push(DrawCommand::Rect {
                rect: Rect::new(x, y, 6.0 * scale, CELL_HEIGHT * 0.4 * scale),
                color: palette.marker,
            });
        }
    }
}

/// Fixed skyline on both sides of the road
fn buildings(palette: &Palette, out: &mut Vec<DrawCommand>) {
    const HEIGHTS: [f32; 4] = [2.2, 3.1, 2.6, 1.8];
    for (i, h) in HEIGHTS.iter().enumerate() {
        let w = CELL_WIDTH * 0.45;
        let height = CELL_HEIGHT * h;
        // Left side, then mirrored on the right
        out.push(DrawCommand::Rect {
            rect: Rect::new(w * i as f32, HALF_HEIGHT - height, w, height),
            color: palette.buildings,
        });
        out.push(DrawCommand::Rect {
            rect: Rect::new(WIN_WIDTH - w * (i + 1) as f32, HALF_HEIGHT - height, w, height),
            color: palette.buildings,
        });
    }
}

fn stats_overlay(state: &GameState, palette: &Palette, out: &mut Vec<DrawCommand>) {
    let lines = [
        format!("Score: {}", state.score),
        format!("Speed: {}", state.display_speed()),
        format!("Distance: {}", state.distance_traveled()),
    ];
    for (i, text) in lines.into_iter().enumerate() {
        out.push(DrawCommand::Text {
            text,
            pos: Vec2::new(WIN_WIDTH * 0.02, WIN_HEIGHT * 0.02 + 40.0 * i as f32),
            size: 36.0,
            color: palette.stats,
        });
    }
}

fn racers(state: &GameState, palette: &Palette, out: &mut Vec<DrawCommand>) {
    for racer in &state.racers {
        if let Some(rect) = racer.current_rect() {
            out.push(DrawCommand::Rect {
                rect,
                color: palette.racer,
            });
        }
    }
}

fn game_over_screen(
    state: &GameState,
    highscore: u32,
    palette: &Palette,
    out: &mut Vec<DrawCommand>,
) {
    let lines = [
        ("Game Over".to_string(), WIN_HEIGHT * 0.20, 96.0),
        (format!("Score: {}", state.score), WIN_HEIGHT * 0.45, 36.0),
        (format!("Highscore: {}", highscore), WIN_HEIGHT * 0.52, 36.0),
        ("Press R To Restart".to_string(), WIN_HEIGHT * 0.65, 64.0),
    ];
    for (text, y, size) in lines {
        out.push(DrawCommand::Text {
            text,
            pos: Vec2::new(WIN_WIDTH * 0.20, y),
            size,
            color: palette.font,
        });
    }
}
