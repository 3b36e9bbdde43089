//! Walk a traveler around routes and check the drawn waypoints tick by tick
//!

use std::collections::BTreeSet;

use bevy_route_visibility_plugin::prelude::*;

/// Square loop `(0,0) (2,0) (2,2) (0,2)` on plane 0
fn square() -> Route {
	let nodes = vec![
		RouteNode::Waypoint(WorldTile::new(0, 0, 0)),
		RouteNode::Waypoint(WorldTile::new(2, 0, 0)),
		RouteNode::Waypoint(WorldTile::new(2, 2, 0)),
		RouteNode::Waypoint(WorldTile::new(0, 2, 0)),
	];
	Route::from_nodes(RouteId::new(1), "square", nodes)
}

/// `laps` circuits of a 20 waypoint track with a lap marker between circuits,
/// waypoints are 10 tiles apart so only one is ever in range
fn circuit(laps: u32) -> Route {
	let mut route = Route::new(RouteId::new(2), "circuit");
	for lap in 1..=laps {
		if lap > 1 {
			route.push_lap_marker(lap);
		}
		for i in 0..20 {
			route.push_waypoint(WorldTile::new(i * 10, 0, 0));
		}
	}
	route
}

fn set(indices: &[usize]) -> BTreeSet<usize> {
	indices.iter().copied().collect()
}

#[test]
fn square_loop_scenario() {
	let route = square();
	let config = VisibilityConfig::new(1, 2, 30);
	let mut engine = VisibilityEngine::default();
	let far = Some(WorldTile::new(100, 100, 0));
	assert_eq!(set(&[0, 1, 2, 3]), engine.visible_indices(&route, &config));
	// traveler steps onto the first waypoint and stays there
	let start = Some(WorldTile::new(0, 0, 0));
	engine.update(Some(&route), start, &config);
	let tile = engine.get_queue().get_tile(0).unwrap();
	assert_eq!(Some(2), tile.get_ticks_remaining());
	engine.update(Some(&route), start, &config);
	let tile = engine.get_queue().get_tile(0).unwrap();
	assert_eq!(Some(1), tile.get_ticks_remaining());
	engine.update(Some(&route), start, &config);
	assert_eq!(set(&[1, 2, 3]), engine.visible_indices(&route, &config));
	// visit the remaining corners, each needs one tick to trigger and two to hide
	let mut wrapped = false;
	for corner in [(2, 0), (2, 2), (0, 2)] {
		let position = Some(WorldTile::new(corner.0, corner.1, 0));
		for _ in 0..3 {
			wrapped |= engine.update(Some(&route), position, &config) == TickOutcome::Wrapped;
		}
		engine.update(Some(&route), far, &config);
	}
	assert!(wrapped);
	assert_eq!(set(&[0, 1, 2, 3]), engine.visible_indices(&route, &config));
}

#[test]
fn hidden_waypoints_stay_hidden_until_wrap() {
	let route = circuit(1);
	let config = VisibilityConfig::new(0, 3, 5);
	let mut engine = VisibilityEngine::default();
	let mut hidden: BTreeSet<usize> = BTreeSet::new();
	let mut most_hidden = 0;
	let mut wraps = 0;
	// walk slowly along the track, 4 ticks on each waypoint
	for i in 0..20 {
		for _ in 0..4 {
			let outcome = engine.update(Some(&route), Some(WorldTile::new(i * 10, 0, 0)), &config);
			if outcome == TickOutcome::Wrapped {
				wraps += 1;
				hidden.clear();
				continue;
			}
			for index in hidden.iter() {
				assert!(!engine.is_visible(&route, *index, &config), "{} reappeared", index);
			}
			let first_visible = engine.get_queue().first_visible();
			for index in route.waypoint_indices().take_while(|n| *n < first_visible) {
				hidden.insert(index);
			}
			most_hidden = most_hidden.max(hidden.len());
		}
	}
	assert_eq!(1, wraps);
	assert_eq!(19, most_hidden);
}

#[test]
fn window_never_exceeds_max_visible() {
	let route = circuit(3);
	let config = VisibilityConfig::new(0, 2, 7);
	let mut engine = VisibilityEngine::default();
	for tick in 0..400 {
		let i = (tick / 3) % 20;
		engine.update(Some(&route), Some(WorldTile::new(i * 10, 0, 0)), &config);
		let live = engine
			.get_queue()
			.get()
			.iter()
			.filter(|t| !t.is_hidden())
			.count();
		assert!(live <= config.get_max_visible_tiles());
		assert!(engine.visible_indices(&route, &config).len() <= config.get_max_visible_tiles());
	}
}

#[test]
fn delay_hides_exactly_after_d_ticks() {
	for delay in 0..6 {
		let route = square();
		let config = VisibilityConfig::new(0, delay, 30);
		let mut engine = VisibilityEngine::default();
		let start = Some(WorldTile::new(0, 0, 0));
		// tick T, the waypoint is reached
		engine.update(Some(&route), start, &config);
		for _ in 0..delay {
			assert!(engine.is_visible(&route, 0, &config), "delay {}", delay);
			engine.update(Some(&route), Some(WorldTile::new(50, 50, 0)), &config);
		}
		assert!(!engine.is_visible(&route, 0, &config), "delay {}", delay);
	}
}

#[test]
fn hides_in_route_order_through_lap_marker() {
	let route = circuit(2);
	let config = VisibilityConfig::new(0, 0, 4);
	let mut engine = VisibilityEngine::default();
	// the second lap starts after the marker at node 20
	let mut first_visible = Vec::new();
	for _ in 0..2 {
		for i in 0..20 {
			engine.update(Some(&route), Some(WorldTile::new(i * 10, 0, 0)), &config);
			first_visible.push(engine.visible_indices(&route, &config).first().copied());
		}
	}
	// the first waypoint drawn steps through the route one waypoint per tick
	// and skips over the lap marker
	assert_eq!(Some(1), first_visible[0]);
	assert_eq!(Some(19), first_visible[18]);
	assert_eq!(Some(21), first_visible[19]);
	assert_eq!(Some(22), first_visible[20]);
	// once the final waypoint hides the route starts again
	assert_eq!(Some(0), first_visible[39]);
	assert_eq!(set(&[0, 1, 2, 3]), engine.visible_indices(&route, &config));
}

#[test]
fn dense_cluster_is_hidden_one_by_one() {
	let mut route = Route::new(RouteId::new(3), "cluster");
	for i in 0..6 {
		route.push_waypoint(WorldTile::new(i % 2, i / 2, 0));
	}
	let config = VisibilityConfig::new(5, 0, 30);
	let mut engine = VisibilityEngine::default();
	let centre = Some(WorldTile::new(1, 1, 0));
	for expected in (1..6).rev() {
		engine.update(Some(&route), centre, &config);
		assert_eq!(expected, engine.visible_indices(&route, &config).len());
	}
	assert_eq!(TickOutcome::Wrapped, engine.update(Some(&route), centre, &config));
	assert_eq!(6, engine.visible_indices(&route, &config).len());
}

#[test]
fn authoring_shows_every_waypoint() {
	let route = circuit(2);
	let config = VisibilityConfig::new(0, 0, 3);
	let mut engine = VisibilityEngine::default();
	for i in 0..5 {
		engine.update(Some(&route), Some(WorldTile::new(i * 10, 0, 0)), &config);
	}
	engine.set_edit_mode(true);
	let all: BTreeSet<usize> = route.waypoint_indices().collect();
	assert_eq!(all, engine.visible_indices(&route, &config));
	assert_eq!(40, all.len());
	assert!(!all.contains(&20));
}
