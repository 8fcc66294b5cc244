//! Straight-segment routing: anchors connected directly through the user's bend points.

use std::f64::consts::PI;

use crate::anchors::edge_end_anchors;
use crate::geometry::{Point, angle_between_points, center_of_line, max_distance};
use crate::model::{EdgeEnd, RoutableEdge, RoutingHandle, RoutingHandleKind};
use crate::routing::{EdgeRouter, RoutedPoint, find_route_segment};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineRouterOptions {
    /// Bend points closer than this (Chebyshev) to their anchor are dropped from the route.
    pub min_point_distance: f64,
    /// Angle in radians below which a near-straight edit-mode junction is hidden from the
    /// rendered route.
    pub remove_angle_threshold: f64,
    /// Base clearance between an anchor and the shape boundary.
    pub anchor_offset: f64,
}

impl Default for PolylineRouterOptions {
    fn default() -> Self {
        PolylineRouterOptions {
            min_point_distance: 2.0,
            remove_angle_threshold: 0.1,
            anchor_offset: 0.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct PolylineEdgeRouter {
    options: PolylineRouterOptions,
}

impl PolylineEdgeRouter {
    pub const KIND: &'static str = "polyline";

    pub fn new(options: PolylineRouterOptions) -> Self {
        PolylineEdgeRouter { options }
    }

    pub fn options(&self) -> &PolylineRouterOptions {
        &self.options
    }

    /// Removes interior routed points whose junction handle is in edit mode and whose adjacent
    /// segments are within the angle threshold of collinear. Cosmetic: the stored bend points
    /// stay untouched, the point merely vanishes from the rendered route while the user drags
    /// its neighborhood straight.
    fn filter_edit_mode_handles(
        &self,
        mut route: Vec<RoutedPoint>,
        edge: &RoutableEdge,
    ) -> Vec<RoutedPoint> {
        if edge.routing_handles.is_empty() {
            return route;
        }
        let mut i = 0;
        while i < route.len() {
            let curr = route[i];
            if let Some(point_index) = curr.point_index {
                let handle = edge.routing_handles.iter().find(|h| {
                    h.kind == RoutingHandleKind::Junction && h.point_index == point_index as i32
                });
                if handle.is_some_and(|h| h.edit_mode) && i > 0 && i + 1 < route.len() {
                    let prev = route[i - 1];
                    let next = route[i + 1];
                    let prev_diff = Point {
                        x: prev.x - curr.x,
                        y: prev.y - curr.y,
                    };
                    let next_diff = Point {
                        x: next.x - curr.x,
                        y: next.y - curr.y,
                    };
                    let straight = angle_between_points(prev_diff, next_diff)
                        .is_some_and(|angle| (PI - angle).abs() < self.options.remove_angle_threshold);
                    if straight {
                        route.remove(i);
                        continue;
                    }
                }
            }
            i += 1;
        }
        route
    }
}

impl EdgeRouter for PolylineEdgeRouter {
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
        let mut result = Vec::with_capacity(bend_count + 2);
        result.push(RoutedPoint::source(source_anchor));
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
                result.push(RoutedPoint::linear(p, Some(i)));
            }
        }
        result.push(RoutedPoint::target(target_anchor));
        self.filter_edit_mode_handles(result, edge)
    }

    fn create_routing_handles(&self, edge: &mut RoutableEdge) {
        let bend_count = edge.routing_points.len();
        edge.routing_handles
            .push(RoutingHandle::new(RoutingHandleKind::Source, -2));
        edge.routing_handles
            .push(RoutingHandle::new(RoutingHandleKind::Line, -1));
        for i in 0..bend_count {
            edge.routing_handles
                .push(RoutingHandle::new(RoutingHandleKind::Junction, i as i32));
            edge.routing_handles
                .push(RoutingHandle::new(RoutingHandleKind::Line, i as i32));
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
        if handle.kind == RoutingHandleKind::Line {
            let (start, end) =
                find_route_segment(route, edge.routing_points.len(), handle.point_index);
            if let (Some(start), Some(end)) = (start, end) {
                return Some(center_of_line(start.point(), end.point()));
            }
        }
        None
    }
}
