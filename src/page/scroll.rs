use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::math::curve::EaseFunction;
use bevy::prelude::*;

use super::navbar::NavTarget;
use crate::anim::FadeTo;
use crate::app::host::ScrollLock;
use crate::core::components::{ScrollArea, SectionId};
use crate::core::config::LandingConfig;

pub const LINE_HEIGHT_PX: f32 = 24.0;

/// Fades the section in the first time its top crosses the trigger line.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollReveal {
    pub revealed: bool,
}

/// Distance from the top of the column to section `idx` given every section's height.
pub fn section_offset(heights: &[f32], idx: usize) -> f32 {
    heights.iter().take(idx).sum()
}

/// `top` is the section's top edge relative to the viewport.
pub fn reveal_triggered(top: f32, viewport_height: f32, trigger_ratio: f32) -> bool {
    top <= viewport_height * trigger_ratio.clamp(0.0, 1.0)
}

/// Logical heights of the spawned sections in document order.
fn section_heights(q_sections: &Query<(&SectionId, &ComputedNode)>) -> Vec<(SectionId, f32)> {
    let mut sections: Vec<_> = q_sections
        .iter()
        .map(|(id, node)| (*id, node.size().y * node.inverse_scale_factor()))
        .collect();
    sections.sort_by_key(|(id, _)| *id as usize);
    sections
}

fn max_scroll(sections: &[(SectionId, f32)], viewport_height: f32) -> f32 {
    let content: f32 = sections.iter().map(|(_, h)| h).sum();
    (content - viewport_height).max(0.0)
}

pub fn scroll_main(
    mut wheel: EventReader<MouseWheel>,
    lock: Res<ScrollLock>,
    q_sections: Query<(&SectionId, &ComputedNode)>,
    mut q_area: Query<(&mut ScrollPosition, &ComputedNode), With<ScrollArea>>,
) {
    let mut dy = 0.0;
    for ev in wheel.read() {
        dy += match ev.unit {
            MouseScrollUnit::Line => ev.y * LINE_HEIGHT_PX,
            MouseScrollUnit::Pixel => ev.y,
        };
    }
    if dy == 0.0 || lock.locked {
        return;
    }
    let sections = section_heights(&q_sections);
    for (mut pos, node) in &mut q_area {
        let viewport = node.size().y * node.inverse_scale_factor();
        pos.offset_y = (pos.offset_y - dy).clamp(0.0, max_scroll(&sections, viewport));
    }
}

pub fn handle_nav_clicks(
    lock: Res<ScrollLock>,
    q_links: Query<(&Interaction, &NavTarget), Changed<Interaction>>,
    q_sections: Query<(&SectionId, &ComputedNode)>,
    mut q_area: Query<(&mut ScrollPosition, &ComputedNode), With<ScrollArea>>,
) {
    if lock.locked {
        return;
    }
    for (interaction, target) in &q_links {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let sections = section_heights(&q_sections);
        let Some(idx) = sections.iter().position(|(id, _)| *id == target.0) else {
            continue;
        };
        let heights: Vec<f32> = sections.iter().map(|(_, h)| *h).collect();
        let offset = section_offset(&heights, idx);
        for (mut pos, node) in &mut q_area {
            let viewport = node.size().y * node.inverse_scale_factor();
            pos.offset_y = offset.min(max_scroll(&sections, viewport));
        }
        debug!(target: "page", "nav -> #{} at {offset:.0}px", target.0.anchor());
    }
}

pub fn reveal_sections_on_scroll(
    mut commands: Commands,
    cfg: Res<LandingConfig>,
    q_area: Query<(&ScrollPosition, &ComputedNode), With<ScrollArea>>,
    q_heights: Query<(&SectionId, &ComputedNode)>,
    mut q_reveal: Query<(Entity, &SectionId, &mut ScrollReveal)>,
) {
    let Ok((pos, node)) = q_area.single() else {
        return;
    };
    let viewport = node.size().y * node.inverse_scale_factor();
    if viewport <= 0.0 {
        // Layout has not run yet.
        return;
    }
    let sections = section_heights(&q_heights);
    let heights: Vec<f32> = sections.iter().map(|(_, h)| *h).collect();
    for (e, id, mut reveal) in &mut q_reveal {
        if reveal.revealed {
            continue;
        }
        let Some(idx) = sections.iter().position(|(s, _)| s == id) else {
            continue;
        };
        let top = section_offset(&heights, idx) - pos.offset_y;
        if reveal_triggered(top, viewport, cfg.reveal.trigger_ratio) {
            reveal.revealed = true;
            commands.entity(e).insert(FadeTo::new(
                0.0,
                1.0,
                cfg.reveal.section_fade_secs,
                EaseFunction::QuadraticOut,
            ));
            debug!(target: "page", "revealing #{}", id.anchor());
        }
    }
}
