use bevy::math::curve::EaseFunction;
use bevy::prelude::*;

use super::tween::Tween;
use crate::core::system::system_order::PresentationSet;

/// Opacity shared by every [`Faded`] node pointing at this entity.
/// bevy_ui has no subtree opacity, so colours are multiplied per node instead.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FadeGroup {
    pub alpha: f32,
}

impl FadeGroup {
    pub const VISIBLE: Self = Self { alpha: 1.0 };
    pub const HIDDEN: Self = Self { alpha: 0.0 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadedKind {
    Background,
    Text,
    Image,
}

/// A colour that follows `group`'s alpha. `base` is the fully-visible colour.
#[derive(Component, Debug, Clone, Copy)]
pub struct Faded {
    pub group: Entity,
    pub base: Color,
    pub kind: FadedKind,
}

impl Faded {
    pub fn background(group: Entity, base: Color) -> Self {
        Self { group, base, kind: FadedKind::Background }
    }
    pub fn text(group: Entity, base: Color) -> Self {
        Self { group, base, kind: FadedKind::Text }
    }
    pub fn image(group: Entity, base: Color) -> Self {
        Self { group, base, kind: FadedKind::Image }
    }
}

/// Animates a [`FadeGroup`]'s alpha; removed once finished.
#[derive(Component, Debug, Clone, Copy)]
pub struct FadeTo {
    pub tween: Tween,
}

impl FadeTo {
    pub fn new(from: f32, to: f32, secs: f32, ease: EaseFunction) -> Self {
        Self { tween: Tween::new(from, to, secs, ease) }
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeFinished {
    pub group: Entity,
}

pub struct FadePlugin;

impl Plugin for FadePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FadeFinished>().add_systems(
            Update,
            (animate_fades, apply_fade_groups)
                .chain()
                .in_set(PresentationSet),
        );
    }
}

pub fn animate_fades(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut FadeTo, &mut FadeGroup)>,
    mut finished: EventWriter<FadeFinished>,
) {
    let dt = time.delta_secs();
    for (e, mut fade, mut group) in &mut q {
        fade.tween.advance(dt);
        group.alpha = fade.tween.value().clamp(0.0, 1.0);
        if fade.tween.is_finished() {
            commands.entity(e).remove::<FadeTo>();
            finished.write(FadeFinished { group: e });
        }
    }
}

pub fn apply_fade_groups(
    groups: Query<&FadeGroup>,
    mut q: Query<(
        &Faded,
        Option<&mut BackgroundColor>,
        Option<&mut TextColor>,
        Option<&mut ImageNode>,
    )>,
) {
    for (faded, bg, text, image) in &mut q {
        // A despawned group leaves its members fully visible.
        let group_alpha = groups.get(faded.group).map_or(1.0, |g| g.alpha);
        let color = faded.base.with_alpha(faded.base.alpha() * group_alpha);
        match faded.kind {
            FadedKind::Background => {
                if let Some(mut bg) = bg {
                    if bg.0 != color {
                        bg.0 = color;
                    }
                }
            }
            FadedKind::Text => {
                if let Some(mut text) = text {
                    if text.0 != color {
                        text.0 = color;
                    }
                }
            }
            FadedKind::Image => {
                if let Some(mut image) = image {
                    if image.color != color {
                        image.color = color;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
        app.add_plugins(FadePlugin);
        app
    }

    #[test]
    fn group_alpha_multiplies_member_colours() {
        let mut app = app();
        let group = app.world_mut().spawn(FadeGroup { alpha: 0.5 }).id();
        let base = Color::srgba(1.0, 0.8, 0.0, 0.8);
        let member = app
            .world_mut()
            .spawn((BackgroundColor(base), Faded::background(group, base)))
            .id();
        app.update();
        let bg = app.world().get::<BackgroundColor>(member).unwrap();
        assert!((bg.0.alpha() - 0.4).abs() < 1e-5);
    }

    #[derive(Resource, Default)]
    struct Finished(Vec<Entity>);

    fn record_finished(mut ev: EventReader<FadeFinished>, mut seen: ResMut<Finished>) {
        seen.0.extend(ev.read().map(|f| f.group));
    }

    #[test]
    fn fade_to_reaches_target_and_reports_once() {
        let mut app = app();
        app.init_resource::<Finished>();
        app.add_systems(Update, record_finished.after(PresentationSet));
        let group = app
            .world_mut()
            .spawn((FadeGroup::HIDDEN, FadeTo::new(0.0, 1.0, 0.3, EaseFunction::QuadraticInOut)))
            .id();
        for _ in 0..8 {
            app.update();
        }
        assert_eq!(app.world().get::<FadeGroup>(group).unwrap().alpha, 1.0);
        assert!(app.world().get::<FadeTo>(group).is_none());
        assert_eq!(app.world().resource::<Finished>().0, vec![group]);
    }
}
