//! `use bevy_route_visibility_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::visibility::{engine::*, managed_tile::*, queue::*, utilities::*, *};

#[doc(hidden)]
pub use crate::{
	config::*,
	plugin::{control_layer::*, tick_layer::*, *},
	route::*,
};
