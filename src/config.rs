//! Scalars tuning how aggressively the overlay hides visited waypoints
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Tuning of the visible window
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Resource, Clone, Copy, PartialEq, Eq, Debug, Reflect)]
#[reflect(Resource)]
pub struct VisibilityConfig {
	/// Chebyshev distance in tiles at which the traveler is considered to
	/// have reached a waypoint
	hide_distance: u32,
	/// Number of ticks a reached waypoint remains drawn before hiding, `0`
	/// hides it on the tick it is reached
	hide_delay_ticks: u32,
	/// Upper bound on the number of waypoints drawn at once
	max_visible_tiles: u32,
}

impl Default for VisibilityConfig {
	fn default() -> Self {
		VisibilityConfig {
			hide_distance: DEFAULT_HIDE_DISTANCE,
			hide_delay_ticks: DEFAULT_HIDE_DELAY_TICKS,
			max_visible_tiles: DEFAULT_MAX_VISIBLE_TILES,
		}
	}
}

impl VisibilityConfig {
	/// Create a new instance of [VisibilityConfig]. A window of zero tiles
	/// could never show anything so `max_visible_tiles` must be at least `1`
	pub fn new(hide_distance: u32, hide_delay_ticks: u32, max_visible_tiles: u32) -> Self {
		if max_visible_tiles == 0 {
			panic!("VisibilityConfig `max_visible_tiles` must be at least 1");
		}
		VisibilityConfig {
			hide_distance,
			hide_delay_ticks,
			max_visible_tiles,
		}
	}
	/// From a `ron` file generate the [VisibilityConfig]
	#[cfg(feature = "ron")]
	pub fn from_ron(path: String) -> Self {
		let file = std::fs::File::open(path).expect("Failed opening VisibilityConfig file");
		let config: VisibilityConfig = match ron::de::from_reader(file) {
			Ok(config) => config,
			Err(e) => panic!("Failed deserializing VisibilityConfig: {}", e),
		};
		// route through the constructor so a bad file is caught on load
		VisibilityConfig::new(
			config.hide_distance,
			config.hide_delay_ticks,
			config.max_visible_tiles,
		)
	}
	/// Get the hide distance in tiles
	pub fn get_hide_distance(&self) -> u32 {
		self.hide_distance
	}
	/// Get the hide delay in ticks
	pub fn get_hide_delay_ticks(&self) -> u32 {
		self.hide_delay_ticks
	}
	/// Get the size of the visible window
	pub fn get_max_visible_tiles(&self) -> usize {
		self.max_visible_tiles as usize
	}
	/// Set the hide distance in tiles
	pub fn set_hide_distance(&mut self, tiles: u32) {
		self.hide_distance = tiles;
	}
	/// Set the hide delay in ticks
	pub fn set_hide_delay_ticks(&mut self, ticks: u32) {
		self.hide_delay_ticks = ticks;
	}
	/// Set the size of the visible window, values below `1` are raised to `1`
	pub fn set_max_visible_tiles(&mut self, count: u32) {
		self.max_visible_tiles = count.max(1);
	}
}
