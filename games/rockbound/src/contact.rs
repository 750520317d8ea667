//! Entity tags and what touching each one means to the player.

pub const PLAYER: &str = "player";
pub const ENEMY: &str = "enemy";
pub const KEY: &str = "key";
pub const DOOR: &str = "door";
pub const COIN: &str = "coin";
pub const POWERUP: &str = "powerup";
pub const ROCK_FLOOR: &str = "rockfloor";
pub const ROCK: &str = "rock";

/// What the player just touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Hazard,
    KeyItem,
    Door,
    Coin,
    Powerup,
    Terrain,
    Other,
}

impl ContactKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            ENEMY => ContactKind::Hazard,
            KEY => ContactKind::KeyItem,
            DOOR => ContactKind::Door,
            COIN => ContactKind::Coin,
            POWERUP => ContactKind::Powerup,
            ROCK_FLOOR | ROCK => ContactKind::Terrain,
            _ => ContactKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_tags() {
        assert_eq!(ContactKind::from_tag(ENEMY), ContactKind::Hazard);
        assert_eq!(ContactKind::from_tag(KEY), ContactKind::KeyItem);
        assert_eq!(ContactKind::from_tag(DOOR), ContactKind::Door);
        assert_eq!(ContactKind::from_tag(COIN), ContactKind::Coin);
        assert_eq!(ContactKind::from_tag(POWERUP), ContactKind::Powerup);
        assert_eq!(ContactKind::from_tag(ROCK), ContactKind::Terrain);
        assert_eq!(ContactKind::from_tag(ROCK_FLOOR), ContactKind::Terrain);
    }

    #[test]
    fn unknown_tag_is_other() {
        assert_eq!(ContactKind::from_tag(""), ContactKind::Other);
        assert_eq!(ContactKind::from_tag(PLAYER), ContactKind::Other);
    }
}
