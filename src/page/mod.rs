//! Static landing page: navbar, hero and content sections inside one scroll column.
//! Everything is spawned hidden; the host reveals it once the splash is gone.

pub mod content;
pub mod fonts;
pub mod menu;
pub mod navbar;
pub mod palette;
pub mod scroll;
pub mod sections;

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use crate::anim::fade::apply_fade_groups;
use crate::anim::{FadeGroup, Faded};
use crate::app::host::ScrollLock;
use crate::app::state::AppState;
use crate::core::components::{BrandFont, MainContent, ScrollArea};
use crate::core::system::system_order::PresentationSet;
use crate::loader::BrandFonts;

pub use content::PageContent;

pub struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<PageContent>() {
            let content = match PageContent::embedded() {
                Ok(c) => c,
                Err(e) => {
                    error!(target: "page", "{e:#}; rendering empty sections");
                    PageContent::default()
                }
            };
            app.insert_resource(content);
        }
        // Headless tests run without InputPlugin.
        app.add_event::<MouseWheel>();
        app.init_resource::<menu::MenuCarousel>()
            .init_resource::<BrandFonts>()
            .init_resource::<ScrollLock>()
            .add_systems(Startup, spawn_page)
            .add_systems(OnEnter(AppState::Revealed), sections::spawn_hero)
            .add_systems(
                Update,
                (
                    fonts::apply_brand_fonts,
                    scroll::scroll_main,
                    (
                        scroll::handle_nav_clicks,
                        scroll::reveal_sections_on_scroll,
                        sections::animate_hero_entrance,
                        menu::handle_menu_tabs,
                        menu::render_menu_slide,
                    )
                        .chain()
                        .run_if(in_state(AppState::Revealed)),
                )
                    .in_set(PresentationSet)
                    .before(apply_fade_groups),
            );
    }
}

/// Text node whose colour follows `group`'s opacity.
pub fn faded_text(
    text: impl Into<String>,
    size: f32,
    color: Color,
    group: Entity,
    font: BrandFont,
) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(size),
        TextColor(color.with_alpha(0.0)),
        Faded::text(group, color),
        font,
    )
}

pub fn spawn_page(
    mut commands: Commands,
    content: Res<PageContent>,
    asset_server: Option<Res<AssetServer>>,
) {
    let server = asset_server.as_deref();
    let main = commands
        .spawn((
            MainContent,
            FadeGroup::HIDDEN,
            Visibility::Hidden,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(palette::PAGE_BG.with_alpha(0.0)),
        ))
        .id();
    commands
        .entity(main)
        .insert(Faded::background(main, palette::PAGE_BG));

    let nav = navbar::spawn_navbar(&mut commands, main, &content, server);
    let scroll_area = commands
        .spawn((
            ScrollArea,
            Node {
                width: Val::Percent(100.0),
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::scroll_y(),
                ..default()
            },
            ScrollPosition::default(),
        ))
        .id();
    commands.entity(main).add_children(&[nav, scroll_area]);
    sections::spawn_sections(&mut commands, scroll_area, &content, server);
    info!(target: "page", "page spawned hidden ({} nav links)", content.nav.len());
}
