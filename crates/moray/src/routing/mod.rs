//! The routing strategy contract and the pieces every strategy shares.
//!
//! A strategy turns a [`RoutableEdge`] into a list of [`RoutedPoint`]s in the edge's own space
//! and maintains the edge's routing handles while the user edits it. Everything that works the
//! same across strategies lives here as provided trait methods and free functions: arc-length
//! point queries, handle position resolution, route-segment bracketing and volatile-handle
//! promotion. Strategies supply the route itself, handle creation and cleanup.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, euclidean_distance};
use crate::model::{
    EdgeEndpoint, ResolvedHandleMove, RoutableEdge, RoutingHandle, RoutingHandleKind,
};

pub mod manhattan;
pub mod polyline;

mod registry;

pub use manhattan::{ManhattanEdgeRouter, ManhattanRouterOptions};
pub use polyline::{PolylineEdgeRouter, PolylineRouterOptions};
pub use registry::EdgeRouterRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutedPointKind {
    Source,
    Linear,
    Target,
}

/// One point of a computed route, in the edge's own space.
///
/// `point_index` is set only on `Linear` points that come from a stored bend point and holds
/// that bend point's index; synthetic points (anchors, manhattan corners) carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutedPoint {
    pub kind: RoutedPointKind,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub point_index: Option<usize>,
}

impl RoutedPoint {
    pub fn source(p: Point) -> Self {
        RoutedPoint {
            kind: RoutedPointKind::Source,
            x: p.x,
            y: p.y,
            point_index: None,
        }
    }

    pub fn target(p: Point) -> Self {
        RoutedPoint {
            kind: RoutedPointKind::Target,
            x: p.x,
            y: p.y,
            point_index: None,
        }
    }

    pub fn linear(p: Point, point_index: Option<usize>) -> Self {
        RoutedPoint {
            kind: RoutedPointKind::Linear,
            x: p.x,
            y: p.y,
            point_index,
        }
    }

    pub fn point(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

/// A routing strategy. Stateless; one instance serves every edge that names its kind.
pub trait EdgeRouter: Send + Sync {
    /// Registry key, e.g. `"polyline"`.
    fn kind(&self) -> &'static str;

    /// Computes the route. Pure read; returns an empty vec when either endpoint is unresolved.
    /// Non-empty routes start with a `Source` point and end with a `Target` point.
    fn route(&self, edge: &RoutableEdge) -> Vec<RoutedPoint>;

    /// Populates `edge.routing_handles` for edit mode. Callers clear the handles again when the
    /// edit session ends.
    fn create_routing_handles(&self, edge: &mut RoutableEdge);

    /// Position of a non-endpoint handle, or `None` when the strategy cannot place it.
    fn inner_handle_position(
        &self,
        edge: &RoutableEdge,
        route: &[RoutedPoint],
        handle: &RoutingHandle,
    ) -> Option<Point>;

    /// Strategy hook for simplifying `edge.routing_points` after structural edits. The default
    /// does nothing. When `update_handles` is set, implementations rebuild the handle list so
    /// all point indices are freshly derived.
    fn cleanup_routing_points(&self, edge: &mut RoutableEdge, update_handles: bool) {
        let _ = (edge, update_handles);
    }

    /// Position at the normalized arc-length parameter `t` in `[0, 1]`.
    fn point_at(&self, edge: &RoutableEdge, t: f64) -> Option<Point> {
        route_point_at(&self.route(edge), t)
    }

    /// Direction (unnormalized `end - start`) of the segment containing `t`.
    fn derivative_at(&self, edge: &RoutableEdge, t: f64) -> Option<Point> {
        route_derivative_at(&self.route(edge), t)
    }

    /// Current position of a routing handle, `None` when it cannot be derived.
    fn get_handle_position(
        &self,
        edge: &RoutableEdge,
        route: &[RoutedPoint],
        handle: &RoutingHandle,
    ) -> Option<Point> {
        match handle.kind {
            RoutingHandleKind::Source => {
                if let Some(EdgeEndpoint::Dangling(d)) = &edge.source {
                    Some(d.position)
                } else {
                    route.first().map(RoutedPoint::point)
                }
            }
            RoutingHandleKind::Target => {
                if let Some(EdgeEndpoint::Dangling(d)) = &edge.target {
                    Some(d.position)
                } else {
                    route.last().map(RoutedPoint::point)
                }
            }
            _ => self.inner_handle_position(edge, route, handle).or_else(|| {
                let index = handle.point_index;
                if index >= 0 && (index as usize) < edge.routing_points.len() {
                    Some(edge.routing_points[index as usize])
                } else {
                    None
                }
            }),
        }
    }

    /// Applies a gesture's accumulated handle moves in order. Volatile handles are promoted to
    /// junctions first: a new bend point is inserted after the handle's slot, the moved handle
    /// and every handle with a greater index shift up by one, and two fresh line handles are
    /// appended for the segments on either side of the new junction. Junction moves then simply
    /// overwrite their bend point.
    fn apply_handle_moves(&self, edge: &mut RoutableEdge, moves: &[ResolvedHandleMove]) {
        for m in moves {
            debug_assert!(
                m.handle < edge.routing_handles.len(),
                "handle move does not address this edge's handle list"
            );
            let Some(handle) = edge.routing_handles.get(m.handle) else {
                continue;
            };
            let mut index = handle.point_index;
            if handle.kind.is_volatile() {
                let insert_at = (index + 1).max(0) as usize;
                let seed = m
                    .from_position
                    .or_else(|| edge.routing_points.get(index.max(0) as usize).copied())
                    .unwrap_or(m.to_position);
                edge.routing_points.insert(insert_at, seed);
                for (j, h) in edge.routing_handles.iter_mut().enumerate() {
                    if j == m.handle {
                        h.kind = RoutingHandleKind::Junction;
                        h.point_index += 1;
                    } else if h.point_index > index {
                        h.point_index += 1;
                    }
                }
                edge.routing_handles
                    .push(RoutingHandle::new(RoutingHandleKind::Line, index));
                edge.routing_handles
                    .push(RoutingHandle::new(RoutingHandleKind::Line, index + 1));
                index += 1;
                tracing::trace!(edge = %edge.id, handle = m.handle, index, "promoted volatile routing handle");
            }
            if index >= 0 && (index as usize) < edge.routing_points.len() {
                edge.routing_points[index as usize] = m.to_position;
            }
        }
    }
}

/// Position at parameter `t` on an already computed route.
pub fn route_point_at(route: &[RoutedPoint], t: f64) -> Option<Point> {
    let (start, end, lambda) = linear_route_segment(route, t)?;
    Some(crate::geometry::linear(start, end, lambda))
}

/// Direction of the segment containing `t` on an already computed route.
pub fn route_derivative_at(route: &[RoutedPoint], t: f64) -> Option<Point> {
    let (start, end, _) = linear_route_segment(route, t)?;
    Some(Point {
        x: end.x - start.x,
        y: end.y - start.y,
    })
}

/// Locates the segment containing the normalized arc-length parameter `t` and the interpolation
/// fraction within it. Segments shorter than `1e-8` are never selected.
fn linear_route_segment(route: &[RoutedPoint], t: f64) -> Option<(Point, Point, f64)> {
    if !(0.0..=1.0).contains(&t) || route.len() < 2 {
        return None;
    }
    let mut segment_lengths = Vec::with_capacity(route.len() - 1);
    let mut total_length = 0.0;
    for pair in route.windows(2) {
        let length = euclidean_distance(pair[0].point(), pair[1].point());
        segment_lengths.push(length);
        total_length += length;
    }
    let t_as_length = t * total_length;
    let mut accumulated = 0.0;
    for (i, &length) in segment_lengths.iter().enumerate() {
        let new_accumulated = accumulated + length;
        if length > 1e-8 && new_accumulated >= t_as_length {
            let lambda = (t_as_length - accumulated).max(0.0) / length;
            return Some((route[i].point(), route[i + 1].point(), lambda));
        }
        accumulated = new_accumulated;
    }
    // Floating point accumulation can leave t * total just beyond the last segment end.
    Some((
        route[route.len() - 2].point(),
        route[route.len() - 1].point(),
        1.0,
    ))
}

/// Brackets a handle between routed points. A routed point's effective index is its
/// `point_index` when set, the bend count for the target point, and `-2` otherwise. The result
/// is the routed point with the greatest effective index `<=` the handle's (first one wins) and
/// the one with the smallest effective index `>` it (first one wins).
pub fn find_route_segment(
    route: &[RoutedPoint],
    bend_count: usize,
    handle_index: i32,
) -> (Option<RoutedPoint>, Option<RoutedPoint>) {
    let effective_index = |p: &RoutedPoint| -> i32 {
        match p.point_index {
            Some(i) => i as i32,
            None if p.kind == RoutedPointKind::Target => bend_count as i32,
            None => -2,
        }
    };
    let mut start: Option<&RoutedPoint> = None;
    let mut end: Option<&RoutedPoint> = None;
    for p in route {
        let i = effective_index(p);
        if i <= handle_index && start.is_none_or(|s| i > effective_index(s)) {
            start = Some(p);
        }
        if i > handle_index && end.is_none_or(|e| i < effective_index(e)) {
            end = Some(p);
        }
    }
    (start.copied(), end.copied())
}
