//! Logic relating to advancing the [VisibilityEngine] each game tick and
//! handing the result to renderers
//!

use std::collections::BTreeSet;

use crate::prelude::*;
use bevy::prelude::*;

/// Snapshot of [VisibilityEngine::visible_indices] for the [ActiveRoute],
/// refreshed whenever the engine, the route or the config changes. Renderers
/// read this instead of querying the engine themselves
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct VisibleWaypoints(BTreeSet<usize>);

impl VisibleWaypoints {
	/// Get the node indices of every drawn waypoint
	pub fn get(&self) -> &BTreeSet<usize> {
		&self.0
	}
	/// Whether the node at `index` is drawn
	pub fn contains(&self, index: usize) -> bool {
		self.0.contains(&index)
	}
	/// Number of drawn waypoints
	pub fn len(&self) -> usize {
		self.0.len()
	}
	/// Whether nothing is drawn
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Sent when every waypoint of a route has hidden and the window starts over
/// from the first waypoint, i.e the traveler completed a circuit of the route
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRouteWrapped(RouteId);

impl EventRouteWrapped {
	/// Create a new instance of [EventRouteWrapped]
	pub fn new(route: RouteId) -> Self {
		EventRouteWrapped(route)
	}
	/// Get the route which wrapped
	pub fn get_route(&self) -> RouteId {
		self.0
	}
}

/// Advance the [VisibilityEngine] by one tick using the current
/// [TravelerPosition]
pub fn tick_visibility_engine(
	mut engine: ResMut<VisibilityEngine>,
	active_route: Res<ActiveRoute>,
	traveler: Res<TravelerPosition>,
	config: Res<VisibilityConfig>,
	mut event_wrapped: EventWriter<EventRouteWrapped>,
) {
	let route = active_route.get();
	// idle ticks leave the engine untouched, don't wake up the publisher for them
	let outcome = engine
		.bypass_change_detection()
		.update(route, traveler.get(), &config);
	match outcome {
		TickOutcome::Idle => {}
		TickOutcome::Advanced => engine.set_changed(),
		TickOutcome::Wrapped => {
			engine.set_changed();
			if let Some(route) = route {
				info!("Route `{}` wrapped back to its first waypoint", route.get_name());
				event_wrapped.write(EventRouteWrapped::new(route.get_id()));
			}
		}
	}
}

/// Refresh [VisibleWaypoints] when anything feeding into it has changed
pub fn publish_visible_waypoints(
	engine: Res<VisibilityEngine>,
	active_route: Res<ActiveRoute>,
	config: Res<VisibilityConfig>,
	mut visible: ResMut<VisibleWaypoints>,
) {
	if !(engine.is_changed() || active_route.is_changed() || config.is_changed()) {
		return;
	}
	let indices = match active_route.get() {
		Some(route) => engine.visible_indices(route, &config),
		None => BTreeSet::new(),
	};
	visible.set_if_neq(VisibleWaypoints(indices));
}
