//! Geofenced attendance verification.
//!
//! A reading (position + accuracy radius) is checked against a classroom boundary: an
//! accuracy gate first, then planar point-in-polygon membership with an inclusive
//! boundary. The core (`geom`, `contain`, `verify`) is pure; storage is reached only
//! through the `boundary::BoundaryStore` port injected into `service::AttendanceService`.
//!
//! Layout
//! - `geom`: validated `Point` / `Polygon` value types and their GeoJSON shape.
//! - `contain`: accuracy gate and ray-casting membership.
//! - `verify`: `Reading`, `Verdict` and the end-to-end check.
//! - `boundary`: boundary records, the store port, memory and JSON-file adapters.
//! - `service`: request parsing and the check-attendance flow.

pub mod api;
pub mod boundary;
pub mod cfg;
pub mod contain;
pub mod error;
pub mod geom;
pub mod sample;
pub mod service;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GateCfg;
pub use error::GeofenceError;
pub use geom::{Point, Polygon};
pub use verify::{verify, Reading, Reason, Verdict};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundary::{Boundary, BoundaryId, BoundaryStore, JsonFileStore, MemoryStore};
    pub use crate::cfg::GateCfg;
    pub use crate::contain::{contains, is_acceptable};
    pub use crate::geom::{Point, Polygon};
    pub use crate::service::{AttendanceService, CheckRequest};
    pub use crate::verify::{verify, Reading, Reason, Verdict};
}
