//! The routable edge entity and its transient editing state.
//!
//! Edges reference their endpoints as resolved values (shape bounds plus coordinate space), not
//! as live model elements; the model layer re-resolves them whenever the diagram changes. Routing
//! handles are derived editing state: they are owned by the edge, rebuilt on edit-mode entry and
//! never serialized.

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point};
use crate::space::CoordinateSpace;

/// Boundary model used when computing anchor points on a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorKind {
    #[default]
    Rectangle,
    Ellipse,
    Diamond,
}

/// A shape an edge end is attached to. `bounds` is expressed in `parent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectableShape {
    pub id: String,
    pub bounds: Bounds,
    pub parent: CoordinateSpace,
    #[serde(default)]
    pub anchor_kind: AnchorKind,
    /// Extra clearance for this endpoint, added on top of the strategy's anchor offset.
    #[serde(default)]
    pub anchor_correction: f64,
}

impl ConnectableShape {
    pub fn new(id: impl Into<String>, bounds: Bounds, parent: CoordinateSpace) -> Self {
        ConnectableShape {
            id: id.into(),
            bounds,
            parent,
            anchor_kind: AnchorKind::Rectangle,
            anchor_correction: 0.0,
        }
    }
}

/// A free-floating edge end, alive while the user drags an end off its shape.
/// `position` is expressed in the edge's own space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DanglingAnchor {
    pub id: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EdgeEndpoint {
    Shape(ConnectableShape),
    Dangling(DanglingAnchor),
}

impl EdgeEndpoint {
    pub fn shape(&self) -> Option<&ConnectableShape> {
        match self {
            EdgeEndpoint::Shape(s) => Some(s),
            EdgeEndpoint::Dangling(_) => None,
        }
    }

    pub fn dangling_position(&self) -> Option<Point> {
        match self {
            EdgeEndpoint::Shape(_) => None,
            EdgeEndpoint::Dangling(d) => Some(d.position),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingHandleKind {
    Junction,
    Line,
    Source,
    Target,
    #[serde(rename = "mh-25")]
    Mh25,
    #[serde(rename = "mh-50")]
    Mh50,
    #[serde(rename = "mh-75")]
    Mh75,
}

impl RoutingHandleKind {
    /// Volatile handles sit on a segment rather than on a stored bend point. Dragging one
    /// promotes it to a junction backed by a freshly inserted bend point.
    pub fn is_volatile(self) -> bool {
        matches!(
            self,
            RoutingHandleKind::Line
                | RoutingHandleKind::Mh25
                | RoutingHandleKind::Mh50
                | RoutingHandleKind::Mh75
        )
    }
}

/// Grab point for interactive edge editing.
///
/// `point_index` addresses the bend-point list: `-2` is the source end, `-1` the volatile slot
/// before the first bend point, `0..n-1` the bend points, `n` the target end. Indices are
/// re-derivable from the bend-point list after every mutation the engine performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingHandle {
    pub kind: RoutingHandleKind,
    pub point_index: i32,
    pub edit_mode: bool,
    /// Edit-layer state; the engine carries these but never reads them.
    pub selected: bool,
    pub hover_feedback: bool,
    pub dangling_anchor: Option<String>,
}

impl RoutingHandle {
    pub fn new(kind: RoutingHandleKind, point_index: i32) -> Self {
        RoutingHandle {
            kind,
            point_index,
            edit_mode: false,
            selected: false,
            hover_feedback: false,
            dangling_anchor: None,
        }
    }
}

/// One accumulated handle drag, applied atomically with the rest of its gesture.
/// `handle` indexes `RoutableEdge::routing_handles`; promotion only ever appends new handles,
/// so indices captured at gesture start stay valid for the whole batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedHandleMove {
    pub handle: usize,
    pub from_position: Option<Point>,
    pub to_position: Point,
}

/// An edge the routing engine can work on.
///
/// `routing_points` are the persistent user bend points, in the edge's own space (`parent`).
/// Routed points returned by a strategy live in that same space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutableEdge {
    pub id: String,
    /// Registry key of the strategy to use; `None` selects the registry default.
    #[serde(default)]
    pub router_kind: Option<String>,
    pub source: Option<EdgeEndpoint>,
    pub target: Option<EdgeEndpoint>,
    #[serde(default)]
    pub parent: CoordinateSpace,
    #[serde(default)]
    pub routing_points: Vec<Point>,
    #[serde(skip)]
    pub routing_handles: Vec<RoutingHandle>,
}

impl RoutableEdge {
    pub fn new(id: impl Into<String>) -> Self {
        RoutableEdge {
            id: id.into(),
            router_kind: None,
            source: None,
            target: None,
            parent: CoordinateSpace::root(),
            routing_points: Vec::new(),
            routing_handles: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: EdgeEndpoint) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_target(mut self, target: EdgeEndpoint) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_parent(mut self, parent: CoordinateSpace) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_router_kind(mut self, kind: impl Into<String>) -> Self {
        self.router_kind = Some(kind.into());
        self
    }

    pub fn with_routing_points(mut self, points: Vec<Point>) -> Self {
        self.routing_points = points;
        self
    }

    /// Extra anchor clearance for the given end, 0 when the end is unresolved or dangling.
    pub fn anchor_correction(&self, end: EdgeEnd) -> f64 {
        let endpoint = match end {
            EdgeEnd::Source => self.source.as_ref(),
            EdgeEnd::Target => self.target.as_ref(),
        };
        endpoint
            .and_then(EdgeEndpoint::shape)
            .map(|s| s.anchor_correction)
            .unwrap_or(0.0)
    }
}

/// Which end of an edge an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Source,
    Target,
}
