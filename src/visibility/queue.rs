//! The window of waypoints currently being tracked
//!
//! Waypoints are admitted strictly in route order so the queue is always
//! sorted by node index. Hidden tiles at the front are retired as soon as they
//! hide, the front of the queue is therefore the first waypoint still drawn
//! and everything before it has already scrolled out of the window
//!
//! ```text
//!  retired (hidden)      queue                  not admitted yet
//!  0  1  2  3 | [4 P] [5 A] [6 A] [7 A] | 8  9  10 ...
//!              ^ front                   ^ next_node
//! ```
//!

use std::collections::VecDeque;

use crate::prelude::*;
use bevy::prelude::*;

/// Ordered collection of [ManagedTile]s forming the active window
#[derive(Clone, Debug, Default)]
pub struct VisibilityQueue {
	/// Tiles in admission order, strictly increasing node indices
	tiles: VecDeque<ManagedTile>,
	/// Node index from which the next admission scans for a waypoint
	next_node: usize,
}

impl VisibilityQueue {
	/// Create a new empty [VisibilityQueue] able to hold `capacity` tiles
	/// without reallocating
	pub fn with_capacity(capacity: usize) -> Self {
		VisibilityQueue {
			tiles: VecDeque::with_capacity(capacity),
			next_node: 0,
		}
	}
	/// Get a reference to the tracked tiles
	pub fn get(&self) -> &VecDeque<ManagedTile> {
		&self.tiles
	}
	/// Node index from which the next admission scans
	pub fn get_next_node(&self) -> usize {
		self.next_node
	}
	/// Whether no tile is being tracked
	pub fn is_empty(&self) -> bool {
		self.tiles.is_empty()
	}
	/// Number of tracked tiles
	pub fn len(&self) -> usize {
		self.tiles.len()
	}
	/// Forget every tile and start scanning from the beginning of the route
	pub fn clear(&mut self) {
		self.tiles.clear();
		self.next_node = 0;
	}
	/// Discard all state and admit the first `max_visible` waypoints of the route
	pub fn fill(&mut self, route: &Route, max_visible: usize) {
		self.clear();
		while self.admit_next(route, max_visible).is_some() {}
	}
	/// Admit the next waypoint of the route not yet tracked provided the
	/// window has a free slot. Returns the node index of the admitted waypoint
	pub fn admit_next(&mut self, route: &Route, max_visible: usize) -> Option<usize> {
		if self.live_count() >= max_visible {
			return None;
		}
		let index = route.next_waypoint_from(self.next_node)?;
		self.tiles.push_back(ManagedTile::new(index));
		self.next_node = index + 1;
		Some(index)
	}
	/// Whether every waypoint of the route has been admitted at some point
	pub fn has_admitted_all(&self, route: &Route) -> bool {
		route.next_waypoint_from(self.next_node).is_none()
	}
	/// Number of tiles which are still drawn (active or pending)
	pub fn live_count(&self) -> usize {
		self.tiles.iter().filter(|t| !t.is_hidden()).count()
	}
	/// Advance every pending countdown by one tick. Returns the node indices
	/// of tiles hidden by this tick
	pub fn age(&mut self) -> Vec<usize> {
		let mut hidden = Vec::new();
		for tile in self.tiles.iter_mut() {
			if tile.tick() {
				hidden.push(tile.get_index());
			}
		}
		self.retire_hidden();
		hidden
	}
	/// The first tile the traveler can still trigger, i.e neither pending
	/// nor hidden
	pub fn next_evaluable(&self) -> Option<&ManagedTile> {
		self.tiles.iter().find(|t| t.is_active())
	}
	/// Get the tile tracking the waypoint at node `index`
	pub fn get_tile(&self, index: usize) -> Option<&ManagedTile> {
		self.tiles
			.binary_search_by_key(&index, |t| t.get_index())
			.ok()
			.and_then(|i| self.tiles.get(i))
	}
	/// Get a mutable reference to the tile tracking node `index`
	pub fn get_tile_mut(&mut self, index: usize) -> Option<&mut ManagedTile> {
		match self.tiles.binary_search_by_key(&index, |t| t.get_index()) {
			Ok(i) => self.tiles.get_mut(i),
			Err(_) => None,
		}
	}
	/// Drop hidden tiles from the front so that the front is always drawn
	pub fn retire_hidden(&mut self) {
		while self.tiles.front().is_some_and(|t| t.is_hidden()) {
			if let Some(tile) = self.tiles.pop_front() {
				trace!("Retired waypoint {}", tile.get_index());
			}
		}
	}
	/// Whether every admitted tile has hidden and nothing is left to admit,
	/// the point at which the window wraps back to the start of the route
	pub fn is_exhausted(&self, route: &Route) -> bool {
		self.next_node > 0
			&& self.tiles.iter().all(|t| t.is_hidden())
			&& self.has_admitted_all(route)
	}
	/// Node index of the first waypoint still drawn. Every waypoint before it
	/// has hidden. When the queue is empty this is where the next admission
	/// will start scanning
	pub fn first_visible(&self) -> usize {
		match self.tiles.front() {
			Some(tile) => tile.get_index(),
			None => self.next_node,
		}
	}
}
