use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;

pub const EMBEDDED_PAGE_RON: &str = include_str!("../../assets/content/page.ron");

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct NavLink {
    pub label: String,
    /// Anchor of the target section (`"cocktails"`, `"about"`, ...).
    pub anchor: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct HeroContent {
    pub title: String,
    pub kicker: String,
    pub tagline: String,
    pub body: String,
    pub cta: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PriceItem {
    pub name: String,
    pub country: String,
    pub detail: String,
    pub price: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CocktailsContent {
    pub popular: Vec<PriceItem>,
    pub loved: Vec<PriceItem>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AboutContent {
    pub badge: String,
    pub heading: String,
    pub body: String,
    pub rating: String,
    pub patrons: String,
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ArtContent {
    pub heading: String,
    pub features: Vec<String>,
    pub image: String,
    pub caption: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct MenuSlide {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct MenuContent {
    pub heading: String,
    pub slides: Vec<MenuSlide>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct OpeningHours {
    pub day: String,
    pub time: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ContactContent {
    pub heading: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: Vec<OpeningHours>,
    pub socials: Vec<String>,
}

/// Static copy for every section of the page.
#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PageContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub hero: HeroContent,
    pub cocktails: CocktailsContent,
    pub about: AboutContent,
    pub art: ArtContent,
    pub menu: MenuContent,
    pub contact: ContactContent,
}

impl PageContent {
    pub fn embedded() -> anyhow::Result<Self> {
        ron::from_str(EMBEDDED_PAGE_RON).context("parse embedded page.ron")
    }

    pub fn from_ron(text: &str) -> anyhow::Result<Self> {
        ron::from_str(text).context("parse page content")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::SectionId;

    #[test]
    fn embedded_content_parses() {
        let content = PageContent::embedded().expect("embedded page.ron");
        assert!(!content.brand.is_empty());
        assert!(!content.cocktails.popular.is_empty());
        assert!(!content.menu.slides.is_empty());
        assert!(!content.contact.hours.is_empty());
    }

    #[test]
    fn every_nav_link_targets_a_section() {
        let content = PageContent::embedded().expect("embedded page.ron");
        for link in &content.nav {
            assert!(
                SectionId::from_anchor(&link.anchor).is_some(),
                "nav link '{}' points at unknown anchor '{}'",
                link.label,
                link.anchor
            );
        }
    }

    #[test]
    fn partial_content_fills_defaults() {
        let content = PageContent::from_ron(r#"(brand: "Test Bar")"#).unwrap();
        assert_eq!(content.brand, "Test Bar");
        assert!(content.nav.is_empty());
        assert_eq!(content.hero, HeroContent::default());
    }

    #[test]
    fn malformed_content_is_an_error() {
        let err = PageContent::from_ron("(brand: 42").unwrap_err();
        assert!(format!("{err:#}").contains("parse page content"));
    }
}
