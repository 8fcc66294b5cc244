#![forbid(unsafe_code)]

//! Interactive edge routing for node-link diagrams (headless).
//!
//! Given an edge between two shapes with known positions (or a dangling anchor while a
//! connection is being drawn), this crate computes the routed polyline, answers parametric
//! point/tangent queries along it, and maintains the draggable handles used to edit the path.
//! Strategies are pluggable through a string-keyed [`EdgeRouterRegistry`]; `"polyline"` and
//! `"manhattan"` ship with the crate.
//!
//! The engine never talks to a renderer or event loop. `route`, `point_at`, `derivative_at` and
//! [`place_edge_label`] are pure reads safe to call many times per frame; only explicit
//! handle operations mutate an edge.

pub mod anchors;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod model;
pub mod routing;
pub mod space;

pub use error::{Error, Result};
pub use geometry::{Bounds, Dimension, Point};
pub use labels::{EdgeLabelPlacement, LabelSide, LabelTransform, place_edge_label};
pub use model::{
    AnchorKind, ConnectableShape, DanglingAnchor, EdgeEnd, EdgeEndpoint, ResolvedHandleMove,
    RoutableEdge, RoutingHandle, RoutingHandleKind,
};
pub use routing::{
    EdgeRouter, EdgeRouterRegistry, ManhattanEdgeRouter, ManhattanRouterOptions,
    PolylineEdgeRouter, PolylineRouterOptions, RoutedPoint, RoutedPointKind,
};
pub use space::{CoordinateSpace, translate_point};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
