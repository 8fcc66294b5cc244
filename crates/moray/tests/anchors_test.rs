use moray::anchors::{
    compute_diamond_anchor, compute_ellipse_anchor, compute_rectangle_anchor, edge_end_anchors,
    translated_anchor,
};
use moray::geometry::{Bounds, Point};
use moray::model::{ConnectableShape, EdgeEndpoint, RoutableEdge};
use moray::space::CoordinateSpace;

fn p(x: f64, y: f64) -> Point {
    Point { x, y }
}

fn b(x: f64, y: f64, width: f64, height: f64) -> Bounds {
    Bounds {
        x,
        y,
        width,
        height,
    }
}

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn anchors_rectangle_hits_all_four_sides_with_offset() {
    let bounds = b(0.0, 0.0, 100.0, 50.0);
    assert_eq!(
        compute_rectangle_anchor(bounds, p(30.0, -20.0), 5.0),
        p(30.0, -5.0)
    );
    assert_eq!(
        compute_rectangle_anchor(bounds, p(30.0, 100.0), 5.0),
        p(30.0, 55.0)
    );
    assert_eq!(
        compute_rectangle_anchor(bounds, p(-40.0, 25.0), 5.0),
        p(-5.0, 25.0)
    );
    assert_eq!(
        compute_rectangle_anchor(bounds, p(150.0, 25.0), 5.0),
        p(105.0, 25.0)
    );
}

#[test]
fn anchors_rectangle_without_offset_lies_on_the_boundary() {
    let bounds = b(10.0, 10.0, 40.0, 20.0);
    assert_eq!(
        compute_rectangle_anchor(bounds, p(25.0, 0.0), 0.0),
        p(25.0, 10.0)
    );
    assert_eq!(
        compute_rectangle_anchor(bounds, p(100.0, 15.0), 0.0),
        p(50.0, 15.0)
    );
}

#[test]
fn anchors_rectangle_diagonal_reference_falls_back_to_center() {
    let bounds = b(0.0, 0.0, 100.0, 50.0);
    // Beyond a corner there is no perpendicular drop onto a side.
    assert_eq!(
        compute_rectangle_anchor(bounds, p(150.0, -20.0), 5.0),
        p(50.0, 25.0)
    );
    assert_eq!(
        compute_rectangle_anchor(bounds, p(-10.0, 70.0), 5.0),
        p(50.0, 25.0)
    );
}

#[test]
fn anchors_ellipse_lies_on_the_grown_boundary() {
    let bounds = b(0.0, 0.0, 20.0, 20.0);
    assert!(approx(
        compute_ellipse_anchor(bounds, p(30.0, 10.0), 0.0),
        p(20.0, 10.0)
    ));
    assert!(approx(
        compute_ellipse_anchor(bounds, p(30.0, 10.0), 5.0),
        p(25.0, 10.0)
    ));
    assert!(approx(
        compute_ellipse_anchor(bounds, p(10.0, -10.0), 0.0),
        p(10.0, 0.0)
    ));
    // Reference at the center has no direction; deterministic fallback.
    assert!(approx(
        compute_ellipse_anchor(bounds, p(10.0, 10.0), 0.0),
        p(10.0, 10.0)
    ));
}

#[test]
fn anchors_ellipse_diagonal_reference_stays_on_the_circle() {
    let bounds = b(0.0, 0.0, 20.0, 20.0);
    let anchor = compute_ellipse_anchor(bounds, p(30.0, 30.0), 0.0);
    let center = p(10.0, 10.0);
    let r = ((anchor.x - center.x).powi(2) + (anchor.y - center.y).powi(2)).sqrt();
    assert!((r - 10.0).abs() < 1e-9);
}

#[test]
fn anchors_diamond_lies_on_the_rhombus_and_pushes_outward() {
    let bounds = b(0.0, 0.0, 20.0, 20.0);
    assert!(approx(
        compute_diamond_anchor(bounds, p(30.0, 10.0), 0.0),
        p(20.0, 10.0)
    ));
    assert!(approx(
        compute_diamond_anchor(bounds, p(30.0, 10.0), 5.0),
        p(25.0, 10.0)
    ));
    // On the rhombus |vx|/hw + |vy|/hh == 1.
    let anchor = compute_diamond_anchor(bounds, p(40.0, 25.0), 0.0);
    let v = p(anchor.x - 10.0, anchor.y - 10.0);
    assert!((v.x.abs() / 10.0 + v.y.abs() / 10.0 - 1.0).abs() < 1e-9);
    assert!(approx(
        compute_diamond_anchor(bounds, p(10.0, 10.0), 0.0),
        p(10.0, 10.0)
    ));
}

#[test]
fn anchors_translated_anchor_adds_the_endpoint_correction() {
    let root = CoordinateSpace::root();
    let mut shape = ConnectableShape::new("n", b(0.0, 0.0, 100.0, 50.0), root.clone());
    shape.anchor_correction = 3.0;
    let endpoint = EdgeEndpoint::Shape(shape);
    let edge = RoutableEdge::new("e");

    let anchor = translated_anchor(&endpoint, p(30.0, -20.0), &root, &edge.parent, 2.0);
    assert_eq!(anchor, p(30.0, -5.0));
}

#[test]
fn anchors_translated_anchor_moves_between_spaces() {
    let root = CoordinateSpace::root();
    let nested = root.child("container", p(100.0, 100.0));
    let shape = ConnectableShape::new("n", b(0.0, 0.0, 10.0, 10.0), nested);
    let endpoint = EdgeEndpoint::Shape(shape);
    let edge = RoutableEdge::new("e");

    // Reference is given in root space; the anchor comes back in root space too.
    let anchor = translated_anchor(&endpoint, p(105.0, 200.0), &root, &edge.parent, 0.0);
    assert_eq!(anchor, p(105.0, 110.0));
}

#[test]
fn anchors_edge_end_anchors_aim_at_the_other_center_without_bends() {
    let root = CoordinateSpace::root();
    let edge = RoutableEdge::new("e")
        .with_source(EdgeEndpoint::Shape(ConnectableShape::new(
            "a",
            b(0.0, 0.0, 100.0, 100.0),
            root.clone(),
        )))
        .with_target(EdgeEndpoint::Shape(ConnectableShape::new(
            "b",
            b(200.0, 0.0, 100.0, 100.0),
            root.clone(),
        )));

    let (source, target) = edge_end_anchors(&edge, 0.0).unwrap();
    assert_eq!(source, p(100.0, 50.0));
    assert_eq!(target, p(200.0, 50.0));
}

#[test]
fn anchors_edge_end_anchors_keep_the_asymmetric_reference_spaces() {
    // The source sits inside a nested container; the bend-free reference for each side is the
    // other side's raw bounds center in the other side's parent space. That asymmetry is part
    // of the contract.
    let root = CoordinateSpace::root();
    let nested = root.child("container", p(100.0, 100.0));
    let edge = RoutableEdge::new("e")
        .with_source(EdgeEndpoint::Shape(ConnectableShape::new(
            "a",
            b(0.0, 0.0, 10.0, 10.0),
            nested,
        )))
        .with_target(EdgeEndpoint::Shape(ConnectableShape::new(
            "b",
            b(200.0, 105.0, 10.0, 10.0),
            root.clone(),
        )));

    let (source, target) = edge_end_anchors(&edge, 0.0).unwrap();
    assert_eq!(source, p(110.0, 110.0));
    assert_eq!(target, p(200.0, 105.0));
}

#[test]
fn anchors_edge_end_anchors_aim_at_bend_points_when_present() {
    let root = CoordinateSpace::root();
    let edge = RoutableEdge::new("e")
        .with_source(EdgeEndpoint::Shape(ConnectableShape::new(
            "a",
            b(0.0, 0.0, 10.0, 10.0),
            root.clone(),
        )))
        .with_target(EdgeEndpoint::Shape(ConnectableShape::new(
            "b",
            b(30.0, 15.0, 10.0, 10.0),
            root.clone(),
        )))
        .with_routing_points(vec![p(5.0, 20.0)]);

    let (source, target) = edge_end_anchors(&edge, 0.0).unwrap();
    assert_eq!(source, p(5.0, 10.0));
    assert_eq!(target, p(30.0, 20.0));
}

#[test]
fn anchors_edge_end_anchors_need_both_endpoints() {
    let root = CoordinateSpace::root();
    let edge = RoutableEdge::new("e").with_source(EdgeEndpoint::Shape(ConnectableShape::new(
        "a",
        b(0.0, 0.0, 10.0, 10.0),
        root,
    )));
    assert_eq!(edge_end_anchors(&edge, 0.0), None);
}
