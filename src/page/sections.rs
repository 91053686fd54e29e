//! Section layouts. Each section root is its own [`FadeGroup`] so it can be
//! revealed on scroll independently of the others.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::math::curve::EaseFunction;
use bevy::prelude::*;

use super::content::{PageContent, PriceItem};
use super::menu::{MenuArrow, MenuSlideField, MenuTab};
use super::scroll::ScrollReveal;
use super::{faded_text, palette};
use crate::anim::{FadeGroup, FadeTo, Faded, Tween};
use crate::core::components::{BrandFont, ScrollArea, SectionId};
use crate::core::config::LandingConfig;

pub const HERO_LEAVES: [&str; 2] = ["images/hero-left-leaf.png", "images/hero-right-leaf.png"];
pub const COCKTAIL_LEAVES: [&str; 2] = [
    "images/cocktail-left-leaf.png",
    "images/cocktail-right-leaf.png",
];

/// Scale-up played once when the hero mounts.
#[derive(Component, Debug, Clone, Copy)]
pub struct HeroEntrance {
    pub tween: Tween,
}

fn section_root(id: SectionId) -> impl Bundle {
    (
        id,
        ScrollReveal::default(),
        FadeGroup::HIDDEN,
        Node {
            width: Val::Percent(100.0),
            min_height: Val::Vh(100.0),
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: UiRect::axes(Val::Px(64.0), Val::Px(96.0)),
            row_gap: Val::Px(32.0),
            ..default()
        },
    )
}

fn heading(p: &mut ChildSpawnerCommands, text: &str, group: Entity) {
    p.spawn(faded_text(text, 56.0, Color::WHITE, group, BrandFont::Display));
}

fn image(
    p: &mut ChildSpawnerCommands,
    server: Option<&AssetServer>,
    path: &str,
    group: Entity,
    node: Node,
) {
    if let Some(server) = server {
        p.spawn((
            ImageNode::new(server.load(path.to_owned())).with_color(Color::NONE),
            Faded::image(group, Color::WHITE),
            node,
        ));
    }
}

fn leaf_node(left: bool) -> Node {
    Node {
        position_type: PositionType::Absolute,
        width: Val::Px(220.0),
        bottom: Val::Px(0.0),
        left: if left { Val::Px(0.0) } else { Val::Auto },
        right: if left { Val::Auto } else { Val::Px(0.0) },
        ..default()
    }
}

pub fn spawn_sections(
    commands: &mut Commands,
    scroll_area: Entity,
    content: &PageContent,
    server: Option<&AssetServer>,
) {
    let roots = [
        spawn_cocktails(commands, content, server),
        spawn_about(commands, content, server),
        spawn_art(commands, content, server),
        spawn_menu(commands, content, server),
        spawn_contact(commands, content),
    ];
    commands.entity(scroll_area).add_children(&roots);
}

/// Hero only exists once the page is revealed; it goes in front of the other sections.
pub fn spawn_hero(
    mut commands: Commands,
    cfg: Res<LandingConfig>,
    content: Res<PageContent>,
    asset_server: Option<Res<AssetServer>>,
    q_area: Query<Entity, With<ScrollArea>>,
) {
    let Ok(area) = q_area.single() else {
        warn!(target: "page", "no scroll area; hero not mounted");
        return;
    };
    let server = asset_server.as_deref();
    let hero = &content.hero;
    let mut root = commands.spawn((
        section_root(SectionId::Hero),
        Transform::from_scale(Vec3::splat(0.95)),
    ));
    let group = root.id();
    root.insert((
        ScrollReveal { revealed: true },
        FadeTo::new(0.0, 1.0, cfg.reveal.section_fade_secs, EaseFunction::QuadraticOut),
        HeroEntrance {
            tween: Tween::new(0.95, 1.0, cfg.reveal.section_fade_secs, EaseFunction::QuadraticOut),
        },
    ));
    root.with_children(|p| {
        image(p, server, HERO_LEAVES[0], group, leaf_node(true));
        image(p, server, HERO_LEAVES[1], group, leaf_node(false));
        p.spawn(faded_text(&hero.title, 160.0, palette::YELLOW, group, BrandFont::Display));
        p.spawn(Node {
            width: Val::Percent(100.0),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::FlexEnd,
            ..default()
        })
        .with_children(|row| {
            row.spawn(Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            })
            .with_children(|col| {
                col.spawn(faded_text(&hero.kicker, 16.0, Color::WHITE, group, BrandFont::Body));
                col.spawn(faded_text(&hero.tagline, 40.0, palette::YELLOW, group, BrandFont::Display));
            });
            row.spawn(Node {
                max_width: Val::Px(360.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(12.0),
                ..default()
            })
            .with_children(|col| {
                col.spawn(faded_text(&hero.body, 16.0, palette::WHITE_70, group, BrandFont::Body));
                col.spawn(faded_text(&hero.cta, 16.0, Color::WHITE, group, BrandFont::Body));
            });
        });
    });
    let hero_entity = root.id();
    commands.entity(area).insert_children(0, &[hero_entity]);
    info!(target: "page", "hero mounted");
}

pub fn animate_hero_entrance(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut HeroEntrance, &mut Transform)>,
) {
    for (e, mut entrance, mut tf) in &mut q {
        entrance.tween.advance(time.delta_secs());
        tf.scale = Vec3::splat(entrance.tween.value());
        if entrance.tween.is_finished() {
            commands.entity(e).remove::<HeroEntrance>();
        }
    }
}

fn price_list(p: &mut ChildSpawnerCommands, title: &str, items: &[PriceItem], group: Entity) {
    p.spawn(Node {
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(20.0),
        min_width: Val::Px(320.0),
        ..default()
    })
    .with_children(|col| {
        col.spawn(faded_text(title, 18.0, Color::WHITE, group, BrandFont::Body));
        for item in items {
            col.spawn(Node {
                justify_content: JustifyContent::SpaceBetween,
                column_gap: Val::Px(24.0),
                ..default()
            })
            .with_children(|row| {
                row.spawn(Node {
                    flex_direction: FlexDirection::Column,
                    ..default()
                })
                .with_children(|c| {
                    c.spawn(faded_text(&item.name, 22.0, palette::YELLOW, group, BrandFont::Display));
                    c.spawn(faded_text(
                        format!("{} | {}", item.country, item.detail),
                        14.0,
                        palette::WHITE_70,
                        group,
                        BrandFont::Body,
                    ));
                });
                row.spawn(faded_text(&item.price, 18.0, Color::WHITE, group, BrandFont::Body));
            });
        }
    });
}

fn spawn_cocktails(
    commands: &mut Commands,
    content: &PageContent,
    server: Option<&AssetServer>,
) -> Entity {
    let mut root = commands.spawn(section_root(SectionId::Cocktails));
    let group = root.id();
    let cocktails = &content.cocktails;
    root.with_children(|p| {
        image(p, server, COCKTAIL_LEAVES[0], group, leaf_node(true));
        image(p, server, COCKTAIL_LEAVES[1], group, leaf_node(false));
        p.spawn(Node {
            width: Val::Percent(100.0),
            justify_content: JustifyContent::SpaceBetween,
            column_gap: Val::Px(48.0),
            ..default()
        })
        .with_children(|row| {
            price_list(row, "Most popular cocktails:", &cocktails.popular, group);
            price_list(row, "Most loved mocktails:", &cocktails.loved, group);
        });
    });
    root.id()
}

fn spawn_about(
    commands: &mut Commands,
    content: &PageContent,
    server: Option<&AssetServer>,
) -> Entity {
    let mut root = commands.spawn(section_root(SectionId::About));
    let group = root.id();
    let about = &content.about;
    root.with_children(|p| {
        p.spawn((
            Node {
                padding: UiRect::axes(Val::Px(16.0), Val::Px(6.0)),
                ..default()
            },
            BorderRadius::MAX,
            BackgroundColor(Color::NONE),
            Faded::background(group, Color::WHITE),
        ))
        .with_children(|badge| {
            badge.spawn(faded_text(&about.badge, 14.0, Color::BLACK, group, BrandFont::Body));
        });
        heading(p, &about.heading, group);
        p.spawn(Node {
            width: Val::Percent(100.0),
            justify_content: JustifyContent::SpaceBetween,
            column_gap: Val::Px(40.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn(Node {
                max_width: Val::Px(520.0),
                ..default()
            })
            .with_children(|c| {
                c.spawn(faded_text(&about.body, 16.0, palette::WHITE_70, group, BrandFont::Body));
            });
            row.spawn(Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            })
            .with_children(|c| {
                c.spawn(faded_text(&about.rating, 40.0, Color::WHITE, group, BrandFont::Display));
                c.spawn(faded_text(&about.patrons, 14.0, palette::WHITE_70, group, BrandFont::Body));
            });
        });
        p.spawn(Node {
            width: Val::Percent(100.0),
            column_gap: Val::Px(16.0),
            ..default()
        })
        .with_children(|row| {
            for path in &about.images {
                image(
                    row,
                    server,
                    path,
                    group,
                    Node {
                        flex_grow: 1.0,
                        height: Val::Px(280.0),
                        ..default()
                    },
                );
            }
        });
    });
    root.id()
}

fn spawn_art(commands: &mut Commands, content: &PageContent, server: Option<&AssetServer>) -> Entity {
    let mut root = commands.spawn(section_root(SectionId::Art));
    let group = root.id();
    let art = &content.art;
    root.with_children(|p| {
        p.spawn(faded_text(&art.heading, 120.0, palette::WHITE_20, group, BrandFont::Display));
        p.spawn(Node {
            width: Val::Percent(100.0),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            column_gap: Val::Px(32.0),
            ..default()
        })
        .with_children(|row| {
            let (left, right) = art.features.split_at(art.features.len().div_ceil(2));
            for column in [left, right] {
                row.spawn(Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(12.0),
                    ..default()
                })
                .with_children(|c| {
                    for feature in column {
                        c.spawn(faded_text(
                            format!("- {feature}"),
                            16.0,
                            palette::WHITE_70,
                            group,
                            BrandFont::Body,
                        ));
                    }
                });
            }
        });
        if !art.image.is_empty() {
            image(
                p,
                server,
                &art.image,
                group,
                Node {
                    width: Val::Percent(60.0),
                    height: Val::Px(360.0),
                    ..default()
                },
            );
        }
        p.spawn(faded_text(&art.caption, 16.0, palette::WHITE_70, group, BrandFont::Body));
        p.spawn(faded_text(&art.title, 48.0, Color::WHITE, group, BrandFont::Display));
        p.spawn(faded_text(&art.subtitle, 16.0, palette::YELLOW, group, BrandFont::Body));
    });
    root.id()
}

fn spawn_menu(commands: &mut Commands, content: &PageContent, server: Option<&AssetServer>) -> Entity {
    let mut root = commands.spawn(section_root(SectionId::Menu));
    let group = root.id();
    let menu = &content.menu;
    let first = menu.slides.first().cloned().unwrap_or_default();
    root.with_children(|p| {
        heading(p, &menu.heading, group);
        p.spawn(Node {
            column_gap: Val::Px(32.0),
            ..default()
        })
        .with_children(|tabs| {
            for (i, slide) in menu.slides.iter().enumerate() {
                let color = if i == 0 { palette::YELLOW } else { palette::WHITE_70 };
                tabs.spawn((
                    Button,
                    MenuTab(i),
                    faded_text(&slide.name, 20.0, color, group, BrandFont::Display),
                ));
            }
        });
        p.spawn(Node {
            width: Val::Percent(100.0),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Button,
                MenuArrow(-1),
                faded_text("<", 32.0, Color::WHITE, group, BrandFont::Body),
            ));
            if let Some(server) = server {
                row.spawn((
                    MenuSlideField::Image,
                    ImageNode::new(server.load(first.image.clone())).with_color(Color::NONE),
                    Faded::image(group, Color::WHITE),
                    Node {
                        width: Val::Px(360.0),
                        height: Val::Px(360.0),
                        ..default()
                    },
                ));
            }
            row.spawn((
                Button,
                MenuArrow(1),
                faded_text(">", 32.0, Color::WHITE, group, BrandFont::Body),
            ));
        });
        p.spawn((
            MenuSlideField::Name,
            faded_text(&first.name, 16.0, palette::WHITE_70, group, BrandFont::Body),
        ));
        p.spawn((
            MenuSlideField::Title,
            faded_text(&first.title, 40.0, palette::YELLOW, group, BrandFont::Display),
        ));
        p.spawn((
            MenuSlideField::Description,
            faded_text(&first.description, 16.0, Color::WHITE, group, BrandFont::Body),
        ));
    });
    root.id()
}

fn contact_block(p: &mut ChildSpawnerCommands, title: &str, lines: Vec<String>, group: Entity) {
    p.spawn(Node {
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        row_gap: Val::Px(6.0),
        ..default()
    })
    .with_children(|c| {
        c.spawn(faded_text(title, 14.0, palette::YELLOW, group, BrandFont::Body));
        for line in lines {
            c.spawn(faded_text(line, 18.0, Color::WHITE, group, BrandFont::Body));
        }
    });
}

fn spawn_contact(commands: &mut Commands, content: &PageContent) -> Entity {
    let mut root = commands.spawn(section_root(SectionId::Contact));
    let group = root.id();
    let contact = &content.contact;
    root.with_children(|p| {
        heading(p, &contact.heading, group);
        contact_block(p, "Visit Our Bar", vec![contact.address.clone()], group);
        contact_block(p, "Contact Us", vec![contact.phone.clone(), contact.email.clone()], group);
        contact_block(
            p,
            "Open Every Day",
            contact
                .hours
                .iter()
                .map(|h| format!("{} : {}", h.day, h.time))
                .collect(),
            group,
        );
        contact_block(p, "Socials", contact.socials.clone(), group);
    });
    root.id()
}
