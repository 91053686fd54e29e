use bevy::prelude::*;

use super::session::LoaderSession;
use crate::anim::{FadeGroup, Faded};
use crate::core::components::{BrandFont, LoaderUiRoot};
use crate::page::palette;

pub const NOISE_IMAGE: &str = "images/noise.png";

#[derive(Component)]
pub struct LoaderLogo;

#[derive(Component)]
pub struct ProgressFill;

#[derive(Component)]
pub struct ProgressLabel;

pub fn spawn_loader_ui(mut commands: Commands, asset_server: Option<Res<AssetServer>>) {
    let root = commands
        .spawn((
            LoaderUiRoot,
            FadeGroup::VISIBLE,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            GlobalZIndex(100),
        ))
        .id();
    // Self-referencing group: the root's own background follows its alpha.
    commands
        .entity(root)
        .insert(Faded::background(root, Color::BLACK));

    commands.entity(root).with_children(|p| {
        if let Some(server) = asset_server.as_ref() {
            let tint = Color::srgba(1.0, 1.0, 1.0, 0.2);
            p.spawn((
                ImageNode::new(server.load(NOISE_IMAGE)).with_color(tint),
                Faded::image(root, tint),
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
            ));
        }

        p.spawn(Node {
            width: Val::Percent(100.0),
            max_width: Val::Px(448.0),
            padding: UiRect::horizontal(Val::Px(16.0)),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(32.0),
            ..default()
        })
        .with_children(|col| {
            let mut logo_cmd = col.spawn((
                LoaderLogo,
                FadeGroup::HIDDEN,
                Transform::from_scale(Vec3::splat(0.8)),
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(8.0),
                    ..default()
                },
            ));
            let logo = logo_cmd.id();
            logo_cmd.with_children(|l| {
                let yellow = palette::YELLOW;
                l.spawn((
                    Text::new("COCKTAIL"),
                    TextFont::from_font_size(48.0),
                    TextColor(yellow.with_alpha(0.0)),
                    Faded::text(logo, yellow),
                    BrandFont::Display,
                ));
                let dim = palette::WHITE_70;
                l.spawn((
                    Text::new("Premium Experience"),
                    TextFont::from_font_size(16.0),
                    TextColor(dim.with_alpha(0.0)),
                    Faded::text(logo, dim),
                    BrandFont::Body,
                ));
            });

            let track = palette::WHITE_20;
            col.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(4.0),
                    overflow: Overflow::clip(),
                    ..default()
                },
                BorderRadius::MAX,
                BackgroundColor(track),
                Faded::background(root, track),
            ))
            .with_children(|t| {
                t.spawn((
                    ProgressFill,
                    Node {
                        width: Val::Percent(0.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(palette::YELLOW),
                    Faded::background(root, palette::YELLOW),
                ));
            });

            col.spawn(Node {
                width: Val::Percent(100.0),
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            })
            .with_children(|row| {
                row.spawn((
                    Text::new("Loading assets"),
                    TextFont::from_font_size(14.0),
                    TextColor(palette::WHITE_70),
                    Faded::text(root, palette::WHITE_70),
                    BrandFont::Body,
                ));
                row.spawn((
                    ProgressLabel,
                    Text::new("0%"),
                    TextFont::from_font_size(16.0),
                    TextColor(Color::WHITE),
                    Faded::text(root, Color::WHITE),
                    BrandFont::Body,
                ));
            });
        });
    });
}

/// Push session state into the splash: logo entrance, bar width, label, fade-out.
pub fn update_loader_ui(
    session: Res<LoaderSession>,
    mut q_root: Query<&mut FadeGroup, (With<LoaderUiRoot>, Without<LoaderLogo>)>,
    mut q_logo: Query<(&mut FadeGroup, &mut Transform), With<LoaderLogo>>,
    mut q_fill: Query<&mut Node, With<ProgressFill>>,
    mut q_label: Query<&mut Text, With<ProgressLabel>>,
) {
    let opacity = session.gate().loader_opacity();
    let timeline = session.timeline();
    let progress = session.progress();

    for mut group in &mut q_root {
        if group.alpha != opacity {
            group.alpha = opacity;
        }
    }
    for (mut group, mut tf) in &mut q_logo {
        let alpha = timeline.logo_alpha() * opacity;
        if group.alpha != alpha {
            group.alpha = alpha;
        }
        let scale = Vec3::splat(timeline.logo_scale());
        if tf.scale != scale {
            tf.scale = scale;
        }
    }
    let width = Val::Percent(progress.percent() as f32);
    for mut node in &mut q_fill {
        if node.width != width {
            node.width = width;
        }
    }
    let label = progress.label();
    for mut text in &mut q_label {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}
