//! Defines the Bevy [Plugin] for RouteVisibility
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod control_layer;
pub mod tick_layer;

/// Order in which the systems of the plugin run within a schedule
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum OrderingSet {
	/// Apply lifecycle requests (reset, enable/disable, edit mode)
	Control,
	/// Advance the engine by a game tick
	Tick,
	/// Refresh [VisibleWaypoints] for renderers
	Publish,
}

/// Adds the visibility engine, its inputs and systems to an [App]. The
/// engine advances in [FixedUpdate], configure `Time::<Fixed>` with
/// [GAME_TICK_SECONDS] (or whatever the game tick is) so that it runs once
/// per tick
pub struct RouteVisibilityPlugin;

impl Plugin for RouteVisibilityPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.register_type::<WorldTile>()
			.register_type::<RouteId>()
			.register_type::<RouteNode>()
			.register_type::<Route>()
			.register_type::<VisibilityConfig>()
			.register_type::<TileState>()
			.register_type::<ManagedTile>()
			.init_resource::<VisibilityConfig>()
			.init_resource::<VisibilityEngine>()
			.init_resource::<ActiveRoute>()
			.init_resource::<TravelerPosition>()
			.init_resource::<VisibleWaypoints>()
			.add_event::<control_layer::EventResetVisibility>()
			.add_event::<control_layer::EventSetVisibilityEnabled>()
			.add_event::<control_layer::EventSetEditMode>()
			.add_event::<tick_layer::EventRouteWrapped>()
			.configure_sets(Update, (OrderingSet::Control, OrderingSet::Publish).chain())
			.add_systems(
				Update,
				(
					control_layer::process_control_events.in_set(OrderingSet::Control),
					tick_layer::publish_visible_waypoints.in_set(OrderingSet::Publish),
				),
			)
			.add_systems(
				FixedUpdate,
				tick_layer::tick_visibility_engine.in_set(OrderingSet::Tick),
			);
	}
}
