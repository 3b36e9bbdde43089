//! A route is an ordered series of nodes recorded by the user, each node being
//! either a [WorldTile] the traveler should pass through or a marker
//! declaring the lap that is in effect from that point forward
//!
//! ```text
//!  index:   0    1    2    3        4    5    6    7
//!         [wp] [wp] [wp] [wp] [lap 2] [wp] [wp] [wp]
//! ```
//!
//! Routes are authored and persisted elsewhere, the visibility engine only
//! ever reads them
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Identity of a [Route]. The engine compares it between ticks to detect the
/// active route being swapped for another
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct RouteId(u64);

impl RouteId {
	/// Create a new instance of [RouteId]
	pub fn new(id: u64) -> Self {
		RouteId(id)
	}
	/// Get the raw id
	pub fn get(&self) -> u64 {
		self.0
	}
}

/// A single element of a [Route]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Reflect)]
pub enum RouteNode {
	/// A tile the traveler passes through, it occupies a slot of the visible window
	Waypoint(WorldTile),
	/// Zero-width divider, the lap number applies to every following waypoint
	LapMarker(u32),
}

impl RouteNode {
	/// Get the tile of a [RouteNode::Waypoint]
	pub fn as_waypoint(&self) -> Option<WorldTile> {
		match self {
			RouteNode::Waypoint(tile) => Some(*tile),
			RouteNode::LapMarker(_) => None,
		}
	}
	/// Whether the node takes part in the visible window
	pub fn is_waypoint(&self) -> bool {
		matches!(self, RouteNode::Waypoint(_))
	}
}

/// An ordered series of [RouteNode]s
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, PartialEq, Debug, Default, Reflect)]
pub struct Route {
	/// Identity which stays stable for as long as the route is active
	id: RouteId,
	/// Display name
	name: String,
	/// Waypoints and lap markers in travel order
	nodes: Vec<RouteNode>,
}

impl Route {
	/// Create a new empty [Route]
	pub fn new(id: RouteId, name: &str) -> Self {
		Route {
			id,
			name: name.to_string(),
			nodes: Vec::new(),
		}
	}
	/// Create a new [Route] from an existing series of nodes
	pub fn from_nodes(id: RouteId, name: &str, nodes: Vec<RouteNode>) -> Self {
		Route {
			id,
			name: name.to_string(),
			nodes,
		}
	}
	/// From a `ron` file generate a [Route]
	#[cfg(feature = "ron")]
	pub fn from_ron(path: String) -> Self {
		let file = std::fs::File::open(path).expect("Failed opening Route file");
		match ron::de::from_reader(file) {
			Ok(route) => route,
			Err(e) => panic!("Failed deserializing Route: {}", e),
		}
	}
	/// Get the identity of the route
	pub fn get_id(&self) -> RouteId {
		self.id
	}
	/// Get the display name
	pub fn get_name(&self) -> &str {
		&self.name
	}
	/// Get a reference to all nodes
	pub fn get_nodes(&self) -> &[RouteNode] {
		&self.nodes
	}
	/// Get the node at `index`
	pub fn get_node(&self, index: usize) -> Option<&RouteNode> {
		self.nodes.get(index)
	}
	/// Get the tile of the node at `index` if it is a waypoint
	pub fn get_waypoint(&self, index: usize) -> Option<WorldTile> {
		self.nodes.get(index).and_then(|n| n.as_waypoint())
	}
	/// Append a waypoint
	pub fn push_waypoint(&mut self, tile: WorldTile) -> &mut Self {
		self.nodes.push(RouteNode::Waypoint(tile));
		self
	}
	/// Append a lap marker
	pub fn push_lap_marker(&mut self, lap: u32) -> &mut Self {
		self.nodes.push(RouteNode::LapMarker(lap));
		self
	}
	/// Number of nodes, lap markers included
	pub fn len(&self) -> usize {
		self.nodes.len()
	}
	/// Whether the route has no nodes at all
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
	/// Number of waypoints, lap markers excluded
	pub fn waypoint_count(&self) -> usize {
		self.nodes.iter().filter(|n| n.is_waypoint()).count()
	}
	/// Node indices of every waypoint in travel order
	pub fn waypoint_indices(&self) -> impl Iterator<Item = usize> + '_ {
		self.nodes
			.iter()
			.enumerate()
			.filter(|(_, n)| n.is_waypoint())
			.map(|(i, _)| i)
	}
	/// Node indices of the waypoints at or after the node `start`
	pub fn waypoint_indices_from(&self, start: usize) -> impl Iterator<Item = usize> + '_ {
		self.nodes
			.iter()
			.enumerate()
			.skip(start)
			.filter(|(_, n)| n.is_waypoint())
			.map(|(i, _)| i)
	}
	/// Find the first waypoint at or after the node `start`
	pub fn next_waypoint_from(&self, start: usize) -> Option<usize> {
		self.waypoint_indices_from(start).next()
	}
	/// The lap in effect at node `index`. Laps are numbered from `1` and
	/// a [RouteNode::LapMarker] applies to itself and every node after it
	pub fn lap_at(&self, index: usize) -> u32 {
		let mut lap = 1;
		for node in self.nodes.iter().take(index.saturating_add(1)) {
			if let RouteNode::LapMarker(n) = node {
				lap = *n;
			}
		}
		lap
	}
	/// Lap numbers declared by the markers of the route, in order
	pub fn get_laps(&self) -> Vec<u32> {
		self.nodes
			.iter()
			.filter_map(|n| match n {
				RouteNode::LapMarker(lap) => Some(*lap),
				RouteNode::Waypoint(_) => None,
			})
			.collect()
	}
}

/// The [Route] currently being travelled, if any
#[derive(Resource, Default, Debug, Clone)]
pub struct ActiveRoute(Option<Route>);

impl ActiveRoute {
	/// Create a new instance of [ActiveRoute]
	pub fn new(route: Option<Route>) -> Self {
		ActiveRoute(route)
	}
	/// Get a reference to the active route
	pub fn get(&self) -> Option<&Route> {
		self.0.as_ref()
	}
	/// Get a mutable reference to the active route. Any structural change
	/// to its nodes must be followed by an
	/// [crate::prelude::EventResetVisibility]
	pub fn get_mut(&mut self) -> Option<&mut Route> {
		self.0.as_mut()
	}
	/// Replace the active route
	pub fn set(&mut self, route: Option<Route>) {
		self.0 = route;
	}
}

/// The tile the traveler stands on, `None` while it is unknown (loading
/// screens, logged out, etc)
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct TravelerPosition(Option<WorldTile>);

impl TravelerPosition {
	/// Create a new instance of [TravelerPosition]
	pub fn new(tile: Option<WorldTile>) -> Self {
		TravelerPosition(tile)
	}
	/// Get the current tile
	pub fn get(&self) -> Option<WorldTile> {
		self.0
	}
	/// Update the current tile
	pub fn set(&mut self, tile: Option<WorldTile>) {
		self.0 = tile;
	}
}
