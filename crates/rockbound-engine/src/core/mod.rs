pub mod director;
pub mod physics;
pub mod storage;
pub mod time;
pub mod world;
