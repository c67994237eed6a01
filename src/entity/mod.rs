//! The moving cast: the shared actor primitive, the player and the ghosts.

pub mod actor;
pub mod ghost;
pub mod player;
pub mod speed;
pub mod targeting;
