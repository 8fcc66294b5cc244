use moray::geometry::{
    Point, angle_between_points, center_of_line, euclidean_distance, linear, manhattan_distance,
    max_distance, to_degrees, to_radians,
};

fn p(x: f64, y: f64) -> Point {
    Point { x, y }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn geometry_distances_agree_on_axis_aligned_segments() {
    assert!(approx(euclidean_distance(p(0.0, 0.0), p(3.0, 4.0)), 5.0));
    assert!(approx(manhattan_distance(p(0.0, 0.0), p(3.0, 4.0)), 7.0));
    assert!(approx(max_distance(p(0.0, 0.0), p(3.0, 4.0)), 4.0));
    // On a horizontal segment all three coincide.
    assert!(approx(euclidean_distance(p(1.0, 2.0), p(6.0, 2.0)), 5.0));
    assert!(approx(manhattan_distance(p(1.0, 2.0), p(6.0, 2.0)), 5.0));
    assert!(approx(max_distance(p(1.0, 2.0), p(6.0, 2.0)), 5.0));
}

#[test]
fn geometry_linear_interpolates_endpoints_and_midpoint() {
    let a = p(10.0, 20.0);
    let b = p(30.0, -20.0);
    assert_eq!(linear(a, b, 0.0), a);
    assert_eq!(linear(a, b, 1.0), b);
    assert_eq!(center_of_line(a, b), p(20.0, 0.0));
}

#[test]
fn geometry_angle_between_points_covers_the_usual_cases() {
    let right = angle_between_points(p(1.0, 0.0), p(0.0, 1.0)).unwrap();
    assert!(approx(right, std::f64::consts::FRAC_PI_2));
    let opposite = angle_between_points(p(1.0, 0.0), p(-1.0, 0.0)).unwrap();
    assert!(approx(opposite, std::f64::consts::PI));
    let same = angle_between_points(p(2.0, 0.0), p(5.0, 0.0)).unwrap();
    assert!(approx(same, 0.0));
}

#[test]
fn geometry_angle_between_points_is_none_for_zero_vectors() {
    assert_eq!(angle_between_points(Point::ORIGIN, p(1.0, 0.0)), None);
    assert_eq!(angle_between_points(p(1.0, 0.0), Point::ORIGIN), None);
}

#[test]
fn geometry_degree_radian_conversions_round_trip() {
    assert!(approx(to_degrees(std::f64::consts::PI), 180.0));
    assert!(approx(to_radians(90.0), std::f64::consts::FRAC_PI_2));
    assert!(approx(to_degrees(to_radians(37.5)), 37.5));
}
