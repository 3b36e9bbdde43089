//! Read a route and config from `ron` files and run them through the engine
//!

use bevy_route_visibility_plugin::prelude::*;

fn assets() -> String {
	env!("CARGO_MANIFEST_DIR").to_string() + "/assets/"
}

#[test]
fn config_from_ron() {
	let config = VisibilityConfig::from_ron(assets() + "visibility_config.ron");
	assert_eq!(VisibilityConfig::default(), config);
}

#[test]
fn route_from_ron() {
	let route = Route::from_ron(assets() + "example_loop.ron");
	assert_eq!(RouteId::new(1), route.get_id());
	assert_eq!("Example loop", route.get_name());
	assert_eq!(9, route.len());
	assert_eq!(8, route.waypoint_count());
	assert_eq!(Some(RouteNode::LapMarker(2)), route.get_node(4).copied());
	assert_eq!(2, route.lap_at(7));
}

#[test]
fn loaded_route_hides_second_lap_in_order() {
	let route = Route::from_ron(assets() + "example_loop.ron");
	let config = VisibilityConfig::from_ron(assets() + "visibility_config.ron");
	let mut engine = VisibilityEngine::default();
	// the whole loop sits within the default hide distance of its centre so
	// the waypoints hide one per tick and each one after its delay
	let centre = Some(WorldTile::new(3002, 3231, 0));
	let mut hidden_order = Vec::new();
	let mut previous = engine.visible_indices(&route, &config);
	for _ in 0..40 {
		if engine.update(Some(&route), centre, &config) == TickOutcome::Wrapped {
			break;
		}
		let current = engine.visible_indices(&route, &config);
		hidden_order.extend(previous.difference(&current).copied());
		previous = current;
	}
	assert_eq!(vec![0, 1, 2, 3, 5, 6, 7], hidden_order);
}

#[test]
#[should_panic]
fn missing_file() {
	Route::from_ron(assets() + "does_not_exist.ron");
}
