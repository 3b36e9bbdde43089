//! Per-waypoint visibility state
//!
//! ```text
//!            reached, delay > 0
//!  Active ----------------------> Pending(n) --tick--> Pending(n - 1)
//!     |                               |
//!     | reached, delay == 0           | tick with n == 1
//!     v                               v
//!   Hidden <--------------------------+
//! ```
//!
//! `Hidden` is terminal, only discarding the tile lets the waypoint show again
//!

use bevy::prelude::*;

/// Where a [ManagedTile] is in its lifecycle
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Reflect)]
pub enum TileState {
	/// Drawn and waiting for the traveler to come close
	#[default]
	Active,
	/// Reached by the traveler, still drawn while the countdown runs. The
	/// value is the number of ticks remaining and is always above zero
	Pending(u32),
	/// No longer drawn
	Hidden,
}

/// A waypoint admitted into the visible window
#[derive(Clone, Copy, PartialEq, Eq, Debug, Reflect)]
pub struct ManagedTile {
	/// Node index of the waypoint within its route
	index: usize,
	/// Lifecycle state
	state: TileState,
}

impl ManagedTile {
	/// Create a new [ManagedTile] in the [TileState::Active] state
	pub fn new(index: usize) -> Self {
		ManagedTile {
			index,
			state: TileState::Active,
		}
	}
	/// Get the node index of the waypoint
	pub fn get_index(&self) -> usize {
		self.index
	}
	/// Get the current state
	pub fn get_state(&self) -> TileState {
		self.state
	}
	/// Ticks left before a pending tile hides
	pub fn get_ticks_remaining(&self) -> Option<u32> {
		match self.state {
			TileState::Pending(n) => Some(n),
			_ => None,
		}
	}
	/// Whether the traveler may still trigger this tile
	pub fn is_active(&self) -> bool {
		self.state == TileState::Active
	}
	/// Whether the countdown is running
	pub fn is_pending(&self) -> bool {
		matches!(self.state, TileState::Pending(_))
	}
	/// Whether the tile has been hidden
	pub fn is_hidden(&self) -> bool {
		self.state == TileState::Hidden
	}
	/// The traveler has come within range of the waypoint. An active tile
	/// starts counting down `delay_ticks`, or hides straight away when there
	/// is no delay. Pending and hidden tiles are left alone
	pub fn reach(&mut self, delay_ticks: u32) -> TileState {
		if self.is_active() {
			self.state = if delay_ticks == 0 {
				TileState::Hidden
			} else {
				TileState::Pending(delay_ticks)
			};
		}
		self.state
	}
	/// Advance the countdown of a pending tile by one tick, returns `true`
	/// when this tick hid the tile
	pub fn tick(&mut self) -> bool {
		if let TileState::Pending(n) = self.state {
			if n <= 1 {
				self.state = TileState::Hidden;
				return true;
			}
			self.state = TileState::Pending(n - 1);
		}
		false
	}
}
