//! Edge label placement.
//!
//! Computes the transform (translate, optional rotate, translate) that puts a label alongside
//! its edge, based on a parametric point/tangent query into the edge's router. Pure function of
//! the current route; the caller applies the transform to the label's visual node.

use serde::{Deserialize, Serialize};

use crate::geometry::{Dimension, Point, linear, to_degrees};
use crate::model::RoutableEdge;
use crate::routing::EdgeRouter;

/// Which side of the line the label sits on, relative to the line's direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSide {
    Left,
    Right,
    Top,
    Bottom,
    /// Centered on the line itself.
    On,
}

/// Declarative placement policy attached to an edge label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeLabelPlacement {
    /// Rotate the label to touch the edge tangentially.
    pub rotate: bool,
    pub side: LabelSide,
    /// Between 0 (source anchor) and 1 (target anchor).
    pub position: f64,
    /// Space between label and edge.
    pub offset: f64,
}

impl Default for EdgeLabelPlacement {
    fn default() -> Self {
        EdgeLabelPlacement {
            rotate: true,
            side: LabelSide::Top,
            position: 0.5,
            offset: 7.0,
        }
    }
}

/// The computed label transform: translate to `position`, rotate by `rotation_degrees` when
/// present, then translate by `alignment`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelTransform {
    pub position: Point,
    pub rotation_degrees: Option<f64>,
    pub alignment: Point,
}

/// Places a label of `label_size` on `edge` according to `placement`.
///
/// `None` when the label has no valid size yet or the edge has no usable route at the requested
/// parameter; the caller leaves the label untransformed in that case.
pub fn place_edge_label(
    router: &dyn EdgeRouter,
    edge: &RoutableEdge,
    label_size: Dimension,
    placement: &EdgeLabelPlacement,
) -> Option<LabelTransform> {
    if !label_size.is_valid() {
        return None;
    }
    let t = placement.position.clamp(0.0, 1.0);
    let point_on_edge = router.point_at(edge, t)?;
    let derivative_on_edge = router.derivative_at(edge, t)?;
    let angle = to_degrees(derivative_on_edge.y.atan2(derivative_on_edge.x));
    if placement.rotate {
        // Flip by 180 degrees when the tangent points leftwards so text never reads
        // upside-down.
        let flipped_angle = if angle.abs() > 90.0 {
            if angle < 0.0 { angle + 180.0 } else { angle - 180.0 }
        } else {
            angle
        };
        Some(LabelTransform {
            position: point_on_edge,
            rotation_degrees: Some(flipped_angle),
            alignment: rotated_alignment(label_size, placement, flipped_angle != angle),
        })
    } else {
        Some(LabelTransform {
            position: point_on_edge,
            rotation_degrees: None,
            alignment: static_alignment(label_size, placement, angle),
        })
    }
}

fn rotated_alignment(size: Dimension, placement: &EdgeLabelPlacement, flip: bool) -> Point {
    if placement.side == LabelSide::On {
        return Point {
            x: -0.5 * size.height,
            y: 0.5 * size.height,
        };
    }
    let x;
    let mut y = 0.0;
    if flip {
        x = if placement.position < 0.3333333 {
            -size.width - placement.offset
        } else if placement.position < 0.6666666 {
            0.5 * size.width
        } else {
            placement.offset
        };
        match placement.side {
            LabelSide::Left | LabelSide::Bottom => y = size.height,
            LabelSide::Right | LabelSide::Top => y = -placement.offset,
            LabelSide::On => {}
        }
    } else {
        x = if placement.position < 0.3333333 {
            placement.offset
        } else if placement.position < 0.6666666 {
            0.5 * size.width
        } else {
            -size.width - placement.offset
        };
        match placement.side {
            LabelSide::Right | LabelSide::Bottom => y = size.height,
            LabelSide::Left | LabelSide::Top => y = -placement.offset,
            LabelSide::On => {}
        }
    }
    Point { x, y }
}

/// Quadrant of the tangent angle for non-rotated labels, with a normalized `[0, 1]` position
/// inside the quadrant.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Quadrant {
    side: QuadrantSide,
    position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuadrantSide {
    Left,
    Top,
    Right,
    Bottom,
}

fn quadrant(angle: f64) -> Quadrant {
    if angle.abs() > 135.0 {
        let position = if angle > 0.0 { angle - 135.0 } else { angle + 225.0 };
        Quadrant {
            side: QuadrantSide::Left,
            position: position / 90.0,
        }
    } else if angle < -45.0 {
        Quadrant {
            side: QuadrantSide::Top,
            position: (angle + 135.0) / 90.0,
        }
    } else if angle < 45.0 {
        Quadrant {
            side: QuadrantSide::Right,
            position: (angle + 45.0) / 90.0,
        }
    } else {
        Quadrant {
            side: QuadrantSide::Bottom,
            position: (angle - 45.0) / 90.0,
        }
    }
}

/// Two-segment interpolation: toward `p1` across the first half of the quadrant, from `p2`
/// toward `p3` across the second.
fn linear_flip(p0: Point, p1: Point, p2: Point, p3: Point, position: f64) -> Point {
    if position < 0.5 {
        linear(p0, p1, 2.0 * position)
    } else {
        linear(p2, p3, 2.0 * position - 1.0)
    }
}

fn static_alignment(size: Dimension, placement: &EdgeLabelPlacement, angle: f64) -> Point {
    if placement.side == LabelSide::On {
        return Point {
            x: -0.5 * size.height,
            y: 0.5 * size.height,
        };
    }
    let q = quadrant(angle);
    let offset = placement.offset;
    // Six reference offsets around the label box; the side/quadrant table below interpolates
    // between them so the label slides smoothly as the tangent angle sweeps a quadrant.
    let mid_left = Point {
        x: offset,
        y: 0.5 * size.height,
    };
    let top_left = Point {
        x: offset,
        y: size.height,
    };
    let top_right = Point {
        x: -size.width - offset,
        y: size.height,
    };
    let mid_right = Point {
        x: -size.width - offset,
        y: 0.5 * size.height,
    };
    let bottom_right = Point {
        x: -size.width - offset,
        y: -offset,
    };
    let bottom_left = Point {
        x: offset,
        y: -offset,
    };
    match placement.side {
        LabelSide::Left => match q.side {
            QuadrantSide::Left => linear(top_left, top_right, q.position),
            QuadrantSide::Top => linear(top_right, bottom_right, q.position),
            QuadrantSide::Right => linear(bottom_right, bottom_left, q.position),
            QuadrantSide::Bottom => linear(bottom_left, top_left, q.position),
        },
        LabelSide::Right => match q.side {
            QuadrantSide::Left => linear(bottom_right, bottom_left, q.position),
            QuadrantSide::Top => linear(bottom_left, top_left, q.position),
            QuadrantSide::Right => linear(top_left, top_right, q.position),
            QuadrantSide::Bottom => linear(top_right, bottom_right, q.position),
        },
        LabelSide::Top => match q.side {
            QuadrantSide::Left | QuadrantSide::Right => {
                linear(bottom_right, bottom_left, q.position)
            }
            QuadrantSide::Top | QuadrantSide::Bottom => {
                linear_flip(bottom_left, mid_left, mid_right, bottom_right, q.position)
            }
        },
        LabelSide::Bottom => match q.side {
            QuadrantSide::Left | QuadrantSide::Right => linear(top_left, top_right, q.position),
            QuadrantSide::Top | QuadrantSide::Bottom => {
                linear_flip(top_right, mid_right, mid_left, top_left, q.position)
            }
        },
        LabelSide::On => Point::ORIGIN,
    }
}
