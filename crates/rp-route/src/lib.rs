//! `rp-route` — route planning over an `rp-graph` street graph.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`route`]   | `Route`, `path_length_m`                                    |
//! | [`planner`] | `Planner` trait, `AStarPlanner`, `plan`, `plan_multi`       |
//! | [`guard`]   | `check_span` pre-flight distance cap                        |
//! | [`request`] | `route_between`, `snap_waypoints`                           |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                              |
//!
//! # Concurrency
//!
//! Planning is synchronous and CPU-bound and touches nothing outside its own
//! call.  Run it off the I/O thread (a worker pool or `spawn_blocking`), give
//! every request its own graph, and impose any timeout from outside:
//! abandoning a call leaves no shared state behind.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Route`.               |

pub mod error;
pub mod guard;
pub mod planner;
pub mod request;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use guard::{check_span, request_span_m};
pub use planner::{AStarPlanner, Planner, plan, plan_multi};
pub use request::{route_between, snap_waypoints};
pub use route::{Route, path_length_m};
