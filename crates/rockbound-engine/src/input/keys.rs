//! Browser `KeyboardEvent.keyCode` values used by the games.

pub const ENTER: u32 = 13;
pub const SHIFT: u32 = 16;
pub const SPACE: u32 = 32;
pub const ARROW_LEFT: u32 = 37;
pub const ARROW_UP: u32 = 38;
pub const ARROW_RIGHT: u32 = 39;
pub const ARROW_DOWN: u32 = 40;
pub const A: u32 = 65;
pub const D: u32 = 68;
pub const E: u32 = 69;
