use wasm_bindgen::prelude::*;

pub mod actors;
pub mod contact;
pub mod door;
pub mod enemy;
pub mod game;
pub mod game_over;
pub mod hud;
pub mod inventory;
pub mod layout;
pub mod level;
pub mod pickup;
pub mod player;
pub mod terrain;
pub mod tuning;

use game::Rockbound;

rockbound_web::export_game!(Rockbound, "rockbound", Rockbound::new(rockbound_web::browser_store()));
