use bevy::prelude::*;

/// Root of the page below the splash (navbar + scroll column).
#[derive(Component)]
pub struct MainContent;

/// The scrollable column holding every section.
#[derive(Component)]
pub struct ScrollArea;

/// Root of the splash screen; despawned when the loader unmounts.
#[derive(Component)]
pub struct LoaderUiRoot;

/// Page sections in document order.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Cocktails,
    About,
    Art,
    Menu,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::Cocktails,
        SectionId::About,
        SectionId::Art,
        SectionId::Menu,
        SectionId::Contact,
    ];

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::Cocktails => "cocktails",
            SectionId::About => "about",
            SectionId::Art => "art",
            SectionId::Menu => "menu",
            SectionId::Contact => "contact",
        }
    }
}

/// Which preloaded face a text node wants once fonts are ready.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandFont {
    Display,
    Body,
}

impl BrandFont {
    /// Position in `manifest.fonts`.
    pub fn index(self) -> usize {
        match self {
            BrandFont::Display => 0,
            BrandFont::Body => 1,
        }
    }
}
