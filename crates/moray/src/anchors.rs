//! Anchor computation: where an edge visually attaches to a shape.
//!
//! An anchor is the point on a shape's boundary (grown by `offset`) facing a reference point.
//! All functions here are pure; [`translated_anchor`] composes the coordinate-space bookkeeping
//! around them.

use crate::geometry::{Bounds, Point};
use crate::model::{AnchorKind, EdgeEndpoint, RoutableEdge};
use crate::space::{CoordinateSpace, translate_point};

/// Anchor on an axis-aligned rectangle.
///
/// When the reference point projects onto the horizontal span the anchor sits on the top or
/// bottom edge at `x = ref_point.x`, pushed `offset` along the outward normal; symmetrically for
/// the vertical span. A reference diagonally outside has no perpendicular drop onto any side and
/// falls back to the center, without offset.
pub fn compute_rectangle_anchor(bounds: Bounds, ref_point: Point, offset: f64) -> Point {
    if ref_point.x >= bounds.x && ref_point.x <= bounds.x + bounds.width {
        let y = if ref_point.y < bounds.y + 0.5 * bounds.height {
            bounds.y - offset
        } else {
            bounds.y + bounds.height + offset
        };
        return Point { x: ref_point.x, y };
    }
    if ref_point.y >= bounds.y && ref_point.y <= bounds.y + bounds.height {
        let x = if ref_point.x < bounds.x + 0.5 * bounds.width {
            bounds.x - offset
        } else {
            bounds.x + bounds.width + offset
        };
        return Point { x, y: ref_point.y };
    }
    bounds.center()
}

/// Anchor on the axis-aligned ellipse inscribed in `bounds`, radii grown by `offset`.
pub fn compute_ellipse_anchor(bounds: Bounds, ref_point: Point, offset: f64) -> Point {
    let center = bounds.center();
    let dx = ref_point.x - center.x;
    let dy = ref_point.y - center.y;
    // A reference at the exact center leaves the ray direction undefined; return a
    // deterministic point instead of propagating NaN.
    if dx.abs() <= 1e-12 && dy.abs() <= 1e-12 {
        return center;
    }
    let rx = (0.5 * bounds.width + offset).max(1e-9);
    let ry = (0.5 * bounds.height + offset).max(1e-9);
    let nx = dx / rx;
    let ny = dy / ry;
    let t = 1.0 / (nx * nx + ny * ny).sqrt();
    Point {
        x: center.x + dx * t,
        y: center.y + dy * t,
    }
}

/// Anchor on the rhombus joining the side midpoints of `bounds`, pushed `offset` along the
/// ray away from the center.
pub fn compute_diamond_anchor(bounds: Bounds, ref_point: Point, offset: f64) -> Point {
    let center = bounds.center();
    let vx = ref_point.x - center.x;
    let vy = ref_point.y - center.y;
    if !(vx.is_finite() && vy.is_finite()) || (vx.abs() <= 1e-12 && vy.abs() <= 1e-12) {
        return center;
    }
    let hw = (0.5 * bounds.width).max(1e-9);
    let hh = (0.5 * bounds.height).max(1e-9);
    // |vx|/hw + |vy|/hh == 1 on the rhombus boundary.
    let denom = vx.abs() / hw + vy.abs() / hh;
    if !(denom.is_finite() && denom > 0.0) {
        return center;
    }
    let t = 1.0 / denom;
    let len = (vx * vx + vy * vy).sqrt();
    let push = offset / len;
    Point {
        x: center.x + vx * (t + push),
        y: center.y + vy * (t + push),
    }
}

pub fn compute_anchor(kind: AnchorKind, bounds: Bounds, ref_point: Point, offset: f64) -> Point {
    match kind {
        AnchorKind::Rectangle => compute_rectangle_anchor(bounds, ref_point, offset),
        AnchorKind::Ellipse => compute_ellipse_anchor(bounds, ref_point, offset),
        AnchorKind::Diamond => compute_diamond_anchor(bounds, ref_point, offset),
    }
}

/// Anchor for an edge end, in the edge's own space.
///
/// Translates `ref_point` from `ref_space` into the endpoint's parent space, computes the anchor
/// there with `base_offset` plus the endpoint's own correction, and translates the result into
/// `edge_space`. A dangling endpoint's anchor is its current drag position, which already lives
/// in the edge's space.
pub fn translated_anchor(
    endpoint: &EdgeEndpoint,
    ref_point: Point,
    ref_space: &CoordinateSpace,
    edge_space: &CoordinateSpace,
    base_offset: f64,
) -> Point {
    match endpoint {
        EdgeEndpoint::Shape(shape) => {
            let local_ref = translate_point(ref_point, ref_space, &shape.parent);
            let anchor = compute_anchor(
                shape.anchor_kind,
                shape.bounds,
                local_ref,
                base_offset + shape.anchor_correction,
            );
            translate_point(anchor, &shape.parent, edge_space)
        }
        EdgeEndpoint::Dangling(d) => d.position,
    }
}

/// Source and target anchors for an edge, in the edge's own space. `None` when either endpoint
/// is unresolved.
///
/// With bend points, each anchor aims at the nearest bend point (edge space). Without them, the
/// source anchor aims at the center of the target's bounds expressed in the *target's* parent
/// space, and vice versa. The asymmetry in reference spaces is part of the contract; do not
/// normalize it.
pub fn edge_end_anchors(edge: &RoutableEdge, anchor_offset: f64) -> Option<(Point, Point)> {
    let source = edge.source.as_ref()?;
    let target = edge.target.as_ref()?;
    let anchors = if let (Some(&first), Some(&last)) =
        (edge.routing_points.first(), edge.routing_points.last())
    {
        (
            translated_anchor(source, first, &edge.parent, &edge.parent, anchor_offset),
            translated_anchor(target, last, &edge.parent, &edge.parent, anchor_offset),
        )
    } else {
        let (start_ref, start_ref_space) = endpoint_center(target, edge);
        let (end_ref, end_ref_space) = endpoint_center(source, edge);
        (
            translated_anchor(source, start_ref, start_ref_space, &edge.parent, anchor_offset),
            translated_anchor(target, end_ref, end_ref_space, &edge.parent, anchor_offset),
        )
    };
    Some(anchors)
}

fn endpoint_center<'a>(
    endpoint: &'a EdgeEndpoint,
    edge: &'a RoutableEdge,
) -> (Point, &'a CoordinateSpace) {
    match endpoint {
        EdgeEndpoint::Shape(s) => (s.bounds.center(), &s.parent),
        EdgeEndpoint::Dangling(d) => (d.position, &edge.parent),
    }
}
