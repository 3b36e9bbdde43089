//! Useful structures and tools used by the visibility window
//!

use bevy::prelude::*;

/// Length of a single game tick in seconds. Apply it to Bevy's fixed clock
/// with `Time::<Fixed>::from_seconds(GAME_TICK_SECONDS)` so that
/// [crate::prelude::VisibilityEngine::update] runs once per game tick
pub const GAME_TICK_SECONDS: f64 = 0.6;
/// Default Chebyshev distance at which a waypoint starts hiding
pub const DEFAULT_HIDE_DISTANCE: u32 = 5;
/// Default number of ticks a waypoint stays pending before it hides
pub const DEFAULT_HIDE_DELAY_TICKS: u32 = 5;
/// Default size of the visible window
pub const DEFAULT_MAX_VISIBLE_TILES: u32 = 30;

/// A tile of the game world, `x` and `y` on the tile grid and `plane` being
/// the level/floor the tile sits on
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct WorldTile {
	/// Column on the tile grid
	x: i32,
	/// Row on the tile grid
	y: i32,
	/// Level of the world the tile belongs to
	plane: i32,
}

impl WorldTile {
	/// Create a new instance of [WorldTile]
	pub fn new(x: i32, y: i32, plane: i32) -> Self {
		WorldTile { x, y, plane }
	}
	/// Get the `x` grid position
	pub fn get_x(&self) -> i32 {
		self.x
	}
	/// Get the `y` grid position
	pub fn get_y(&self) -> i32 {
		self.y
	}
	/// Get the plane (level) of the tile
	pub fn get_plane(&self) -> i32 {
		self.plane
	}
	/// Chebyshev distance, `max(|dx|, |dy|)`, between two tiles. Tiles on
	/// different planes can never be reached from one another so `None` is
	/// returned for them
	pub fn chebyshev_distance(&self, other: &WorldTile) -> Option<u32> {
		if self.plane != other.plane {
			return None;
		}
		let dx = self.x.abs_diff(other.x);
		let dy = self.y.abs_diff(other.y);
		Some(dx.max(dy))
	}
	/// Whether `other` lies on the same plane and within `distance` tiles
	pub fn is_within(&self, other: &WorldTile, distance: u32) -> bool {
		self.chebyshev_distance(other)
			.is_some_and(|d| d <= distance)
	}
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn distance_same_tile() {
		let a = WorldTile::new(3001, 3230, 0);
		assert_eq!(Some(0), a.chebyshev_distance(&a));
	}
	#[test]
	fn distance_takes_largest_axis() {
		let a = WorldTile::new(0, 0, 0);
		let b = WorldTile::new(-3, 7, 0);
		assert_eq!(Some(7), a.chebyshev_distance(&b));
		assert_eq!(Some(7), b.chebyshev_distance(&a));
	}
	#[test]
	fn distance_diagonal_counts_as_one_step() {
		let a = WorldTile::new(10, 10, 1);
		let b = WorldTile::new(11, 11, 1);
		assert_eq!(Some(1), a.chebyshev_distance(&b));
	}
	#[test]
	fn distance_other_plane_is_unreachable() {
		let a = WorldTile::new(5, 5, 0);
		let b = WorldTile::new(5, 5, 1);
		assert_eq!(None, a.chebyshev_distance(&b));
		assert!(!a.is_within(&b, u32::MAX));
	}
	#[test]
	fn distance_extreme_coordinates_do_not_overflow() {
		let a = WorldTile::new(i32::MIN, 0, 0);
		let b = WorldTile::new(i32::MAX, 0, 0);
		assert_eq!(Some(u32::MAX), a.chebyshev_distance(&b));
	}
	#[test]
	fn within_is_inclusive() {
		let a = WorldTile::new(0, 0, 0);
		let b = WorldTile::new(5, 2, 0);
		assert!(a.is_within(&b, 5));
		assert!(!a.is_within(&b, 4));
	}
}
