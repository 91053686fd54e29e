use bevy::prelude::*;

use super::content::PageContent;
use super::palette;
use crate::anim::Faded;

/// Selected slide of the menu section.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuCarousel {
    pub index: usize,
}

impl MenuCarousel {
    /// Move by `delta` slides, wrapping at both ends.
    pub fn step(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        let len = len as i64;
        self.index = (self.index as i64 + delta as i64).rem_euclid(len) as usize;
    }

    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.index = index;
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTab(pub usize);

/// Previous (-1) / next (+1) arrow.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuArrow(pub i32);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSlideField {
    Name,
    Title,
    Description,
    Image,
}

pub fn handle_menu_tabs(
    content: Res<PageContent>,
    mut carousel: ResMut<MenuCarousel>,
    q_tabs: Query<(&Interaction, &MenuTab), Changed<Interaction>>,
    q_arrows: Query<(&Interaction, &MenuArrow), Changed<Interaction>>,
) {
    let len = content.menu.slides.len();
    for (interaction, tab) in &q_tabs {
        if *interaction == Interaction::Pressed {
            carousel.select(tab.0, len);
        }
    }
    for (interaction, arrow) in &q_arrows {
        if *interaction == Interaction::Pressed {
            carousel.step(arrow.0, len);
        }
    }
}

/// Push the selected slide into the menu widgets. Runs only when the selection changed.
pub fn render_menu_slide(
    carousel: Res<MenuCarousel>,
    content: Res<PageContent>,
    asset_server: Option<Res<AssetServer>>,
    mut q_tabs: Query<(&MenuTab, &mut Faded)>,
    mut q_text: Query<(&MenuSlideField, &mut Text)>,
    mut q_image: Query<(&MenuSlideField, &mut ImageNode)>,
) {
    if !carousel.is_changed() {
        return;
    }
    let Some(slide) = content.menu.slides.get(carousel.index) else {
        return;
    };
    for (tab, mut faded) in &mut q_tabs {
        faded.base = if tab.0 == carousel.index {
            palette::YELLOW
        } else {
            palette::WHITE_70
        };
    }
    for (field, mut text) in &mut q_text {
        let value = match field {
            MenuSlideField::Name => &slide.name,
            MenuSlideField::Title => &slide.title,
            MenuSlideField::Description => &slide.description,
            MenuSlideField::Image => continue,
        };
        if text.0 != *value {
            text.0 = value.clone();
        }
    }
    if let Some(server) = asset_server {
        for (field, mut image) in &mut q_image {
            if *field == MenuSlideField::Image {
                image.image = server.load(slide.image.clone());
            }
        }
    }
    debug!(target: "page", "menu slide {} ({})", carousel.index, slide.name);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_both_ways() {
        let mut c = MenuCarousel::default();
        c.step(-1, 4);
        assert_eq!(c.index, 3);
        c.step(1, 4);
        assert_eq!(c.index, 0);
        c.step(6, 4);
        assert_eq!(c.index, 2);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut c = MenuCarousel { index: 1 };
        c.select(9, 4);
        assert_eq!(c.index, 1);
        c.select(3, 4);
        assert_eq!(c.index, 3);
    }

    #[test]
    fn empty_menu_stays_at_zero() {
        let mut c = MenuCarousel { index: 2 };
        c.step(1, 0);
        assert_eq!(c.index, 0);
    }
}
