//! Lifecycle controls sent by the route editor and the host application
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Discard the window so it is rebuilt from the first waypoint on the next
/// tick. Must be sent after any structural edit of the [ActiveRoute] (adding,
/// removing or reordering nodes) as the admitted indices no longer line up
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct EventResetVisibility;

/// Switch hiding on or off. Switching off draws every waypoint and discards
/// the window
#[derive(Event, Debug, Clone, Copy)]
pub struct EventSetVisibilityEnabled(bool);

impl EventSetVisibilityEnabled {
	/// Create a new instance of [EventSetVisibilityEnabled]
	pub fn new(enabled: bool) -> Self {
		EventSetVisibilityEnabled(enabled)
	}
	/// Get the requested state
	pub fn get(&self) -> bool {
		self.0
	}
}

/// Enter or leave authoring of the route, while authoring every waypoint is
/// drawn and the engine stops advancing
#[derive(Event, Debug, Clone, Copy)]
pub struct EventSetEditMode(bool);

impl EventSetEditMode {
	/// Create a new instance of [EventSetEditMode]
	pub fn new(edit_mode: bool) -> Self {
		EventSetEditMode(edit_mode)
	}
	/// Get the requested state
	pub fn get(&self) -> bool {
		self.0
	}
}

/// Apply control events to the [VisibilityEngine]. Resets are applied last
/// so that a reset sent alongside a mode change always leaves a clean window
pub fn process_control_events(
	mut events_enabled: EventReader<EventSetVisibilityEnabled>,
	mut events_edit: EventReader<EventSetEditMode>,
	mut events_reset: EventReader<EventResetVisibility>,
	mut engine: ResMut<VisibilityEngine>,
) {
	// only the latest request of each kind matters
	if let Some(event) = events_enabled.read().last() {
		if engine.is_enabled() != event.get() {
			info!("Route visibility enabled: {}", event.get());
			engine.set_enabled(event.get());
		}
	}
	if let Some(event) = events_edit.read().last() {
		if engine.is_edit_mode() != event.get() {
			debug!("Route edit mode: {}", event.get());
			engine.set_edit_mode(event.get());
		}
	}
	if events_reset.read().count() > 0 {
		debug!("Route visibility reset");
		engine.reset();
	}
}
