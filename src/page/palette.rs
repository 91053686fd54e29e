use bevy::prelude::*;

pub const YELLOW: Color = Color::srgb(0.906, 0.827, 0.576);
pub const WHITE_70: Color = Color::srgba(1.0, 1.0, 1.0, 0.7);
pub const WHITE_20: Color = Color::srgba(1.0, 1.0, 1.0, 0.2);
pub const PANEL: Color = Color::srgba(1.0, 1.0, 1.0, 0.06);
pub const PAGE_BG: Color = Color::BLACK;
