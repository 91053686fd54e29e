use bevy::prelude::*;

use super::content::PageContent;
use super::{faded_text, palette};
use crate::anim::Faded;
use crate::core::components::{BrandFont, SectionId};

pub const LOGO_IMAGE: &str = "images/logo.png";

/// Clickable navbar entry scrolling to the target section.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTarget(pub SectionId);

/// Spawns the navbar under `group` and returns it; the caller parents it.
pub fn spawn_navbar(
    commands: &mut Commands,
    group: Entity,
    content: &PageContent,
    asset_server: Option<&AssetServer>,
) -> Entity {
    let mut bar = commands.spawn((
        Node {
            width: Val::Percent(100.0),
            padding: UiRect::axes(Val::Px(40.0), Val::Px(20.0)),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            flex_shrink: 0.0,
            ..default()
        },
        BackgroundColor(palette::PANEL.with_alpha(0.0)),
        Faded::background(group, palette::PANEL),
    ));
    bar.with_children(|bar| {
        bar.spawn((
            Button,
            NavTarget(SectionId::Hero),
            Node {
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|brand| {
            if let Some(server) = asset_server {
                brand.spawn((
                    ImageNode::new(server.load(LOGO_IMAGE)).with_color(Color::NONE),
                    Faded::image(group, Color::WHITE),
                    Node {
                        width: Val::Px(32.0),
                        height: Val::Px(32.0),
                        ..default()
                    },
                ));
            }
            brand.spawn(faded_text(
                content.brand.clone(),
                28.0,
                Color::WHITE,
                group,
                BrandFont::Display,
            ));
        });

        bar.spawn(Node {
            column_gap: Val::Px(28.0),
            ..default()
        })
        .with_children(|links| {
            for link in &content.nav {
                let Some(target) = SectionId::from_anchor(&link.anchor) else {
                    warn!(target: "page", "nav link '{}' has unknown anchor '{}'", link.label, link.anchor);
                    continue;
                };
                links
                    .spawn((Button, NavTarget(target), Node::default()))
                    .with_children(|b| {
                        b.spawn(faded_text(
                            link.label.clone(),
                            16.0,
                            Color::WHITE,
                            group,
                            BrandFont::Body,
                        ));
                    });
            }
        });
    });
    bar.id()
}
