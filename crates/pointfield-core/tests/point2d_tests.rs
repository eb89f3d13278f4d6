use pointfield_core::math::PI;
use pointfield_core::point2d::Point2D;
use pointfield_core::vec2d::Vec2D;

#[test]
fn test_new_and_default() {
    let p = Point2D::new(5.0, 8.0);
    assert_eq!(p.x(), 5.0);
    assert_eq!(p.y(), 8.0);
    assert_eq!(Point2D::default().components(), [0.0, 0.0]);
}

#[test]
fn test_distance_to() {
    assert_eq!(Point2D::new(0.0, 0.0).distance_to([3.0, 4.0]), 5.0);
    assert_eq!(Point2D::new(1.0, 1.0).distance_to(Point2D::new(1.0, 1.0)), 0.0);
}

#[test]
fn test_angle_to() {
    let origin = Point2D::new(0.0, 0.0);
    assert_eq!(origin.angle_to([1.0, 0.0]), 0.0);
    assert!((origin.angle_to([0.0, 1.0]) - PI / 2.0).abs() < 1e-6);
    assert!((origin.angle_to_deg([-1.0, 0.0]) - 180.0).abs() < 1e-4);
    assert!((Point2D::new(2.0, 2.0).angle_to([2.0, 0.0]) + PI / 2.0).abs() < 1e-6);
}

#[test]
fn test_translate_variants() {
    let mut p = Point2D::new(1.0, 1.0);
    p.translate([2.0, 3.0]);
    assert_eq!(p.components(), [3.0, 4.0]);
    p.translate_x(-3.0).translate_y(1.0);
    assert_eq!(p.components(), [0.0, 5.0]);
}

#[test]
fn test_add_sub_single_axis() {
    let mut p = Point2D::new(1.0, 1.0);
    p.add([2.0, 2.0]);
    assert_eq!(p.components(), [3.0, 3.0]);
    p.add_x([2.0, 9.0]);
    assert_eq!(p.components(), [5.0, 3.0]);
    p.add_y([9.0, 2.0]);
    assert_eq!(p.components(), [5.0, 5.0]);
    p.sub_x([1.0, 9.0]);
    assert_eq!(p.components(), [4.0, 5.0]);
    p.sub_y([9.0, 1.0]);
    assert_eq!(p.components(), [4.0, 4.0]);
    p.sub(Vec2D::new(4.0, 4.0));
    assert_eq!(p.components(), [0.0, 0.0]);
}

#[test]
fn test_multiply() {
    let mut p = Point2D::new(2.0, -3.0);
    p.multiply(2.0);
    assert_eq!(p.components(), [4.0, -6.0]);
    p.multiply_x(0.5).multiply_y(-1.0);
    assert_eq!(p.components(), [2.0, 6.0]);
    p.scale(0.0);
    assert_eq!(p.components(), [0.0, 0.0]);
}

#[test]
fn test_lerp_endpoints() {
    let mut p = Point2D::new(1.0, 2.0);
    p.lerp([9.0, -4.0], 0.0);
    assert_eq!(p.components(), [1.0, 2.0]);
    p.lerp([9.0, -4.0], 1.0);
    assert_eq!(p.components(), [9.0, -4.0]);
}

#[test]
fn test_lerp_halfway() {
    let mut p = Point2D::new(0.0, 0.0);
    p.lerp(Point2D::new(10.0, 20.0), 0.5);
    assert_eq!(p.components(), [5.0, 10.0]);
}

#[test]
fn test_vector_between() {
    let a = Point2D::new(1.0, 1.0);
    let v = a.vector_between([4.0, 5.0]);
    assert!((v.magnitude() - 5.0).abs() < 1e-5);
    assert!((v.x() - 3.0).abs() < 1e-5 && (v.y() - 4.0).abs() < 1e-5);
    assert!((v.direction() - a.angle_to([4.0, 5.0])).abs() < 1e-6);
}

#[test]
fn test_vector_between_same_point_is_zero() {
    let a = Point2D::new(2.0, 2.0);
    let v = a.vector_between(a);
    assert_eq!(v.magnitude(), 0.0);
}

#[test]
fn test_clone_is_independent() {
    let original = Point2D::new(3.0, 3.0);
    let mut copy = original.clone();
    copy.translate([1.0, 1.0]);
    assert_eq!(original.components(), [3.0, 3.0]);
    assert_eq!(copy.components(), [4.0, 4.0]);
}
