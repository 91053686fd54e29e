use bevy::prelude::*;

use crate::core::components::BrandFont;
use crate::loader::BrandFonts;

/// Swap every tagged text node onto its preloaded face. Nodes keep the default
/// font when their face failed to load.
pub fn apply_brand_fonts(
    fonts: Res<BrandFonts>,
    mut q: Query<(&BrandFont, &mut TextFont)>,
) {
    if fonts.0.is_empty() {
        return;
    }
    for (brand, mut text_font) in &mut q {
        let Some(Some(handle)) = fonts.0.get(brand.index()) else {
            continue;
        };
        if text_font.font != *handle {
            text_font.font = handle.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_face_replaces_default_and_missing_face_is_skipped() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let display = Handle::<Font>::weak_from_u128(7);
        app.insert_resource(BrandFonts(vec![Some(display.clone()), None]));
        app.add_systems(Update, apply_brand_fonts);
        let title = app
            .world_mut()
            .spawn((TextFont::default(), BrandFont::Display))
            .id();
        let body = app
            .world_mut()
            .spawn((TextFont::default(), BrandFont::Body))
            .id();
        app.update();
        assert_eq!(app.world().get::<TextFont>(title).unwrap().font, display);
        assert_eq!(
            app.world().get::<TextFont>(body).unwrap().font,
            Handle::<Font>::default()
        );
    }
}
