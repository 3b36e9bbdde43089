//! Hiding the waypoints of a route overlay as a traveler moves along it.
//!
//! Long routes, or routes looping over the same circuit for several laps,
//! quickly turn an overlay into an unreadable tangle. Instead only a window of
//! upcoming waypoints is drawn and each waypoint disappears shortly after the
//! traveler reaches it.
//!
//! ```text
//!  route:   0   1   2   3   4   5   6   7   8   9
//!          [H] [H] [P] [A] [A] [A] [ ] [ ] [ ] [ ]
//!                   |<---- window ---->|
//! ```
//!
//! Definitions:
//!
//! * Tick - one discrete step of the game clock, the engine is advanced exactly once per tick
//! * Managed tile - the visibility state of one waypoint admitted into the window: Active (`A`), Pending (`P`, reached and counting down) or Hidden (`H`)
//! * Window - up to `max_visible_tiles` waypoints counted from the first waypoint that has not hidden
//! * Admission - adding the next waypoint of the route to the queue of managed tiles once a slot is free
//! * Wraparound - once every waypoint has hidden the window is rebuilt from the start of the route so the next lap is drawn again
//! * Chebyshev distance - `max(|dx|, |dy|)`, the tile grid distance used to decide whether a waypoint has been reached
//!

pub mod engine;
pub mod managed_tile;
pub mod queue;
pub mod utilities;
