use crate::core::config::ManifestConfig;

/// One countable entry of the manifest. Every image is its own slot; all fonts
/// share a single trailing slot, so `total = images + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestSlot {
    Image(usize),
    Fonts,
}

/// Fixed, ordered list of resources to preload before the page is revealed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetManifest {
    images: Vec<String>,
    fonts: Vec<String>,
}

impl AssetManifest {
    pub fn new(images: Vec<String>, fonts: Vec<String>) -> Self {
        Self { images, fonts }
    }

    pub fn from_config(cfg: &ManifestConfig) -> Self {
        Self::new(cfg.images.clone(), cfg.fonts.clone())
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    pub fn total(&self) -> usize {
        self.images.len() + 1
    }

    /// Dense index of a slot in `0..total()`.
    pub fn index_of(&self, slot: ManifestSlot) -> Option<usize> {
        match slot {
            ManifestSlot::Image(i) if i < self.images.len() => Some(i),
            ManifestSlot::Image(_) => None,
            ManifestSlot::Fonts => Some(self.images.len()),
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = ManifestSlot> + '_ {
        (0..self.images.len())
            .map(ManifestSlot::Image)
            .chain(std::iter::once(ManifestSlot::Fonts))
    }

    pub fn describe(&self, slot: ManifestSlot) -> &str {
        match slot {
            ManifestSlot::Image(i) => self.images.get(i).map_or("<unknown image>", String::as_str),
            ManifestSlot::Fonts => "fonts",
        }
    }
}
