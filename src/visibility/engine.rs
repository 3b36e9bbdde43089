//! Drives the [VisibilityQueue] across ticks and answers which waypoints are
//! drawn in between them
//!

use std::collections::BTreeSet;

use crate::prelude::*;
use bevy::prelude::*;

/// What a call to [VisibilityEngine::update] did
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
	/// Nothing was evaluated, the engine is switched off, the route is being
	/// edited or an input is missing
	Idle,
	/// The window was aged and evaluated against the traveler
	Advanced,
	/// Every waypoint of the route hid during this tick and the window was
	/// rebuilt from the start of the route
	Wrapped,
}

/// Tracks which waypoints of the active [Route] are drawn. Call
/// [VisibilityEngine::update] once per game tick
#[derive(Resource, Clone, Debug)]
pub struct VisibilityEngine {
	/// When `false` hiding is switched off and every waypoint is drawn
	enabled: bool,
	/// While the route is being authored every waypoint is drawn
	edit_mode: bool,
	/// Identity of the route the queue was built for
	current_route: Option<RouteId>,
	/// The active window
	queue: VisibilityQueue,
}

impl Default for VisibilityEngine {
	fn default() -> Self {
		VisibilityEngine {
			enabled: true,
			edit_mode: false,
			current_route: None,
			queue: VisibilityQueue::default(),
		}
	}
}

impl VisibilityEngine {
	/// Create a new instance of [VisibilityEngine] with capacity for a
	/// window of `max_visible_tiles`
	pub fn new(max_visible_tiles: usize) -> Self {
		VisibilityEngine {
			queue: VisibilityQueue::with_capacity(max_visible_tiles),
			..Default::default()
		}
	}
	/// Whether hiding is switched on
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}
	/// Switch hiding on or off, switching off discards all window state
	pub fn set_enabled(&mut self, enabled: bool) {
		self.enabled = enabled;
		if !enabled {
			self.reset();
		}
	}
	/// Whether the route is being authored
	pub fn is_edit_mode(&self) -> bool {
		self.edit_mode
	}
	/// Mark the route as being authored (or not). The window is kept as is,
	/// an edit that changes the nodes of the route must also call
	/// [VisibilityEngine::reset]
	pub fn set_edit_mode(&mut self, edit_mode: bool) {
		self.edit_mode = edit_mode;
	}
	/// Identity of the route the window belongs to
	pub fn get_tracked_route(&self) -> Option<RouteId> {
		self.current_route
	}
	/// Get a reference to the window
	pub fn get_queue(&self) -> &VisibilityQueue {
		&self.queue
	}
	/// Discard all window state, the next update rebuilds it from the start
	/// of the active route
	pub fn reset(&mut self) {
		self.queue.clear();
		self.current_route = None;
	}
	/// Advance the window by one tick
	///
	/// 1. A route the engine has not seen before gets a fresh window
	/// 2. Pending tiles count down
	/// 3. The first tile which is neither pending nor hidden is tested
	///    against the traveler, if there is no such tile the next waypoint is
	///    admitted into the window and tested instead
	/// 4. Once every waypoint of the route has hidden the window wraps back
	///    to the start of the route
	///
	/// Only a single tile is tested per tick so that waypoints hide in route
	/// order, one after the other, even when the traveler is standing in a
	/// dense cluster of them
	pub fn update(
		&mut self,
		route: Option<&Route>,
		traveler: Option<WorldTile>,
		config: &VisibilityConfig,
	) -> TickOutcome {
		if !self.enabled || self.edit_mode {
			return TickOutcome::Idle;
		}
		let Some(route) = route else {
			return TickOutcome::Idle;
		};
		if route.next_waypoint_from(0).is_none() {
			return TickOutcome::Idle;
		}
		let Some(traveler) = traveler else {
			return TickOutcome::Idle;
		};
		let max_visible = config.get_max_visible_tiles();
		if self.current_route != Some(route.get_id()) {
			debug!("Tracking route {:?} `{}`", route.get_id(), route.get_name());
			self.current_route = Some(route.get_id());
			self.queue.fill(route, max_visible);
		}

		for index in self.queue.age() {
			debug!("Waypoint {} hidden", index);
		}

		let candidate = self
			.queue
			.next_evaluable()
			.map(|tile| tile.get_index())
			.or_else(|| self.queue.admit_next(route, max_visible));
		if let Some(index) = candidate {
			let reached = route
				.get_waypoint(index)
				.is_some_and(|tile| traveler.is_within(&tile, config.get_hide_distance()));
			if reached {
				if let Some(tile) = self.queue.get_tile_mut(index) {
					let state = tile.reach(config.get_hide_delay_ticks());
					debug!("Waypoint {} reached, now {:?}", index, state);
				}
				self.queue.retire_hidden();
			}
		}

		if self.queue.is_exhausted(route) {
			debug!("Route {:?} complete, wrapping window", route.get_id());
			self.queue.fill(route, max_visible);
			return TickOutcome::Wrapped;
		}
		TickOutcome::Advanced
	}
	/// The window of `route` if it is the route being tracked
	fn tracked_queue(&self, route: &Route) -> Option<&VisibilityQueue> {
		if self.current_route == Some(route.get_id()) {
			Some(&self.queue)
		} else {
			None
		}
	}
	/// Node indices of the drawn waypoints of `route` in ascending order.
	///
	/// The window spans `max_visible_tiles` waypoints counted from the first
	/// waypoint that has not hidden. Waypoints inside that span which have not
	/// been admitted yet are drawn until the traveler proves otherwise. A
	/// route which is not being tracked yet is treated as a fresh window
	fn window<'a>(
		&'a self,
		route: &'a Route,
		config: &VisibilityConfig,
	) -> impl Iterator<Item = usize> + 'a {
		let queue = self.tracked_queue(route);
		let first = queue.map_or(0, |q| q.first_visible());
		route
			.waypoint_indices_from(first)
			.take(config.get_max_visible_tiles())
			.filter(move |i| {
				queue
					.and_then(|q| q.get_tile(*i))
					.is_none_or(|t| !t.is_hidden())
			})
	}
	/// Whether the node at `index` should be drawn. Lap markers and indices
	/// outside of the route are never drawn
	pub fn is_visible(&self, route: &Route, index: usize, config: &VisibilityConfig) -> bool {
		if !self.enabled || self.edit_mode {
			return true;
		}
		match route.get_node(index) {
			Some(RouteNode::Waypoint(_)) => self
				.window(route, config)
				.take_while(|i| *i <= index)
				.any(|i| i == index),
			Some(RouteNode::LapMarker(_)) | None => false,
		}
	}
	/// Node indices of every waypoint that should be drawn
	pub fn visible_indices(&self, route: &Route, config: &VisibilityConfig) -> BTreeSet<usize> {
		if !self.enabled || self.edit_mode {
			return route.waypoint_indices().collect();
		}
		self.window(route, config).collect()
	}
}
