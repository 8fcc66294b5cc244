//! Axis-aligned routing: every segment of the route is horizontal or vertical.
//!
//! Synthetic corners are derived per call and never stored; only the user's bend points persist.
//! The corner layout (which axis a leg travels first) is private to this strategy, everything
//! else follows the shared contract in [`crate::routing`].

use crate::anchors::edge_end_anchors;
use crate::geometry::{Point, almost_equals, center_of_line, max_distance};
use crate::model::{EdgeEnd, EdgeEndpoint, RoutableEdge, RoutingHandle, RoutingHandleKind};
use crate::routing::{EdgeRouter, RoutedPoint, find_route_segment, route_point_at};
use crate::space::translate_point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManhattanRouterOptions {
    /// Bend points closer than this (Chebyshev) to their anchor are dropped from the route.
    pub min_point_distance: f64,
    /// Base clearance between an anchor and the shape boundary.
    pub anchor_offset: f64,
}

impl Default for ManhattanRouterOptions {
    fn default() -> Self {
        ManhattanRouterOptions {
            min_point_distance: 3.0,
            anchor_offset: 0.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct ManhattanEdgeRouter {
    options: ManhattanRouterOptions,
}

impl ManhattanEdgeRouter {
    pub const KIND: &'static str = "manhattan";

    pub fn new(options: ManhattanRouterOptions) -> Self {
        ManhattanEdgeRouter { options }
    }

    pub fn options(&self) -> &ManhattanRouterOptions {
        &self.options
    }
}

impl EdgeRouter for ManhattanEdgeRouter {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn route(&self, edge: &RoutableEdge) -> Vec<RoutedPoint> {
        let Some((source_anchor, target_anchor)) =
            edge_end_anchors(edge, self.options.anchor_offset)
        else {
            return Vec::new();
        };

        let bend_count = edge.routing_points.len();
        let mut bends: Vec<(Point, usize)> = Vec::new();
        for (i, &p) in edge.routing_points.iter().enumerate() {
            let keep = (i > 0 && i < bend_count - 1)
                || (i == 0
                    && max_distance(source_anchor, p)
                        >= self.options.min_point_distance
                            + edge.anchor_correction(EdgeEnd::Source))
                || (i == bend_count - 1
                    && max_distance(p, target_anchor)
                        >= self.options.min_point_distance
                            + edge.anchor_correction(EdgeEnd::Target));
            if keep {
                bends.push((p, i));
            }
        }

        let source_axis = exit_axis(edge.source.as_ref(), source_anchor, edge);
        let target_axis = exit_axis(edge.target.as_ref(), target_anchor, edge);

        let mut result = Vec::with_capacity(bends.len() + 4);
        result.push(RoutedPoint::source(source_anchor));

        if bends.is_empty() {
            let fallback = dominant_axis(source_anchor, target_anchor);
            push_bend_free_corners(
                &mut result,
                source_anchor,
                target_anchor,
                source_axis.unwrap_or(fallback),
                target_axis.unwrap_or(fallback),
            );
        } else {
            let mut prev = source_anchor;
            let mut depart =
                source_axis.unwrap_or_else(|| dominant_axis(source_anchor, bends[0].0));
            for &(p, index) in &bends {
                depart = push_leg_corner(&mut result, prev, p, depart);
                result.push(RoutedPoint::linear(p, Some(index)));
                prev = p;
            }
            // The last leg arrives along the target's entry axis when one is known.
            let depart_last = match target_axis {
                Some(entry) => entry.perpendicular(),
                None => depart,
            };
            push_leg_corner(&mut result, prev, target_anchor, depart_last);
        }

        result.push(RoutedPoint::target(target_anchor));
        result
    }

    /// As polyline, except a bend-free edge gets three fractional grab points along the
    /// synthetic route instead of a single line handle; the slot before the first bend point
    /// spans several segments here.
    fn create_routing_handles(&self, edge: &mut RoutableEdge) {
        let bend_count = edge.routing_points.len();
        edge.routing_handles
            .push(RoutingHandle::new(RoutingHandleKind::Source, -2));
        if bend_count == 0 {
            edge.routing_handles
                .push(RoutingHandle::new(RoutingHandleKind::Mh25, -1));
            edge.routing_handles
                .push(RoutingHandle::new(RoutingHandleKind::Mh50, -1));
            edge.routing_handles
                .push(RoutingHandle::new(RoutingHandleKind::Mh75, -1));
        } else {
            edge.routing_handles
                .push(RoutingHandle::new(RoutingHandleKind::Line, -1));
            for i in 0..bend_count {
                edge.routing_handles
                    .push(RoutingHandle::new(RoutingHandleKind::Junction, i as i32));
                edge.routing_handles
                    .push(RoutingHandle::new(RoutingHandleKind::Line, i as i32));
            }
        }
        edge.routing_handles
            .push(RoutingHandle::new(RoutingHandleKind::Target, bend_count as i32));
    }

    fn inner_handle_position(
        &self,
        edge: &RoutableEdge,
        route: &[RoutedPoint],
        handle: &RoutingHandle,
    ) -> Option<Point> {
        match handle.kind {
            RoutingHandleKind::Mh25 => route_point_at(route, 0.25),
            RoutingHandleKind::Mh50 => route_point_at(route, 0.5),
            RoutingHandleKind::Mh75 => route_point_at(route, 0.75),
            RoutingHandleKind::Line => {
                let (start, end) =
                    find_route_segment(route, edge.routing_points.len(), handle.point_index);
                if let (Some(start), Some(end)) = (start, end) {
                    Some(center_of_line(start.point(), end.point()))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Drops bend points that duplicate a neighbor or sit axis-collinear between both
    /// neighbors; they produce no corner. Rebuilding the handles re-derives every point index.
    fn cleanup_routing_points(&self, edge: &mut RoutableEdge, update_handles: bool) {
        let points = &mut edge.routing_points;
        let mut removed = 0usize;
        let mut i = 0;
        while i < points.len() {
            let duplicate = i > 0
                && almost_equals(points[i].x, points[i - 1].x)
                && almost_equals(points[i].y, points[i - 1].y);
            let collinear = i > 0
                && i + 1 < points.len()
                && ((almost_equals(points[i - 1].x, points[i].x)
                    && almost_equals(points[i].x, points[i + 1].x))
                    || (almost_equals(points[i - 1].y, points[i].y)
                        && almost_equals(points[i].y, points[i + 1].y)));
            if duplicate || collinear {
                points.remove(i);
                removed += 1;
            } else {
                i += 1;
            }
        }
        if removed > 0 {
            tracing::trace!(edge = %edge.id, removed, "simplified manhattan bend points");
        }
        if update_handles {
            edge.routing_handles.clear();
            self.create_routing_handles(edge);
        }
    }
}

/// Axis along which an edge leaves (or enters) a shape, judged from where the anchor sits
/// relative to the shape's center. `None` for dangling ends and for the center-fallback anchor.
fn exit_axis(
    endpoint: Option<&EdgeEndpoint>,
    anchor: Point,
    edge: &RoutableEdge,
) -> Option<Axis> {
    let shape = endpoint?.shape()?;
    let center = translate_point(shape.bounds.center(), &shape.parent, &edge.parent);
    let dx = anchor.x - center.x;
    let dy = anchor.y - center.y;
    if almost_equals(dx, 0.0) && almost_equals(dy, 0.0) {
        return None;
    }
    if dy.abs() * shape.bounds.width > dx.abs() * shape.bounds.height {
        Some(Axis::Vertical)
    } else {
        Some(Axis::Horizontal)
    }
}

fn dominant_axis(from: Point, to: Point) -> Axis {
    if (to.y - from.y).abs() > (to.x - from.x).abs() {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

/// Pushes the synthetic corner of the leg `from -> to` (nothing when the leg is already
/// axis-aligned) and returns the depart axis for the next leg, which turns at `to`.
fn push_leg_corner(result: &mut Vec<RoutedPoint>, from: Point, to: Point, depart: Axis) -> Axis {
    if almost_equals(from.x, to.x) {
        if almost_equals(from.y, to.y) {
            return depart;
        }
        return Axis::Horizontal;
    }
    if almost_equals(from.y, to.y) {
        return Axis::Vertical;
    }
    let corner = match depart {
        Axis::Horizontal => Point {
            x: to.x,
            y: from.y,
        },
        Axis::Vertical => Point {
            x: from.x,
            y: to.y,
        },
    };
    result.push(RoutedPoint::linear(corner, None));
    // One corner flips the travel axis; the next leg turns back at `to`.
    depart
}

/// Corners for a bend-free edge. Anchors exiting along different axes meet with one corner;
/// same-axis exits take the classic two-corner staircase through the midline.
fn push_bend_free_corners(
    result: &mut Vec<RoutedPoint>,
    source_anchor: Point,
    target_anchor: Point,
    exit: Axis,
    entry: Axis,
) {
    if almost_equals(source_anchor.x, target_anchor.x)
        || almost_equals(source_anchor.y, target_anchor.y)
    {
        return;
    }
    if exit != entry {
        let corner = match exit {
            Axis::Horizontal => Point {
                x: target_anchor.x,
                y: source_anchor.y,
            },
            Axis::Vertical => Point {
                x: source_anchor.x,
                y: target_anchor.y,
            },
        };
        result.push(RoutedPoint::linear(corner, None));
        return;
    }
    match exit {
        Axis::Horizontal => {
            let mid_x = 0.5 * (source_anchor.x + target_anchor.x);
            result.push(RoutedPoint::linear(
                Point {
                    x: mid_x,
                    y: source_anchor.y,
                },
                None,
            ));
            result.push(RoutedPoint::linear(
                Point {
                    x: mid_x,
                    y: target_anchor.y,
                },
                None,
            ));
        }
        Axis::Vertical => {
            let mid_y = 0.5 * (source_anchor.y + target_anchor.y);
            result.push(RoutedPoint::linear(
                Point {
                    x: source_anchor.x,
                    y: mid_y,
                },
                None,
            ));
            result.push(RoutedPoint::linear(
                Point {
                    x: target_anchor.x,
                    y: mid_y,
                },
                None,
            ));
        }
    }
}
