/// How an entity appears on screen.
///
/// The browser renderer owns the textures; Rust only names a cell in the
/// shared atlas grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Column in the atlas grid.
    pub col: f32,
    /// Row in the atlas grid.
    pub row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Mirror the sprite horizontally.
    pub flip_x: bool,
}

impl SpriteComponent {
    /// Sprite showing a single atlas cell.
    pub fn cell(col: f32, row: f32) -> Self {
        Self {
            col,
            row,
            ..Default::default()
        }
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            col: 0.0,
            row: 0.0,
            alpha: 1.0,
            flip_x: false,
        }
    }
}
