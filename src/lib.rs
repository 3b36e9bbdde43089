//! This is a plugin for Bevy game engine to decide which waypoints of a route
//! overlay are shown as a traveler advances along it
//!

pub mod config;
pub mod plugin;
pub mod route;
pub mod visibility;

pub mod prelude;
