//! Small tween + group-opacity toolkit used by the splash and the page.
pub mod fade;
pub mod tween;

pub use fade::{FadeFinished, FadeGroup, FadePlugin, FadeTo, Faded, FadedKind};
pub use tween::{eased, Tween};
