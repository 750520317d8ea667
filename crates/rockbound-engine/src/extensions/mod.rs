// extensions/mod.rs
//
// Optional systems decoupled from the core world. Scenes opt in through
// `EngineContext::tweens`.

pub mod easing;
pub mod tween;

pub use easing::{ease, Easing};
pub use tween::{Tween, TweenEnd, TweenState};
