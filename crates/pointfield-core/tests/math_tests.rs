use pointfield_core::math::*;

#[test]
fn test_lerp_basic() {
    assert!((lerp(0.0, 1.0, 0.0) - 0.0).abs() < 1e-6);
    assert!((lerp(0.0, 1.0, 1.0) - 1.0).abs() < 1e-6);
    assert!((lerp(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    assert!((lerp(2.0, 4.0, 0.25) - 2.5).abs() < 1e-6);
}

#[test]
fn test_lerp_overshoots_past_one() {
    assert!((lerp(0.0, 10.0, 1.5) - 15.0).abs() < 1e-5);
}

#[test]
fn test_distance_and_angle() {
    assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
    assert_eq!(angle(1.0, 0.0), 0.0);
    assert!((angle(0.0, 1.0) - HALF_PI).abs() < 1e-6);
}

#[test]
fn test_degree_conversions_invert() {
    assert!((180.0 * TO_RAD - PI).abs() < 1e-6);
    assert!((PI * TO_DEG - 180.0).abs() < 1e-4);
    assert!((TAU - 2.0 * PI).abs() < 1e-6);
}

#[test]
fn test_fade_in_and_out() {
    assert_eq!(fade_in(0.0, 100.0), 0.0);
    assert_eq!(fade_in(50.0, 100.0), 0.5);
    assert_eq!(fade_in(100.0, 100.0), 1.0);
    assert_eq!(fade_out(0.0, 100.0), 1.0);
    assert_eq!(fade_out(25.0, 100.0), 0.75);
    assert_eq!(fade_out(100.0, 100.0), 0.0);
}

#[test]
fn test_fade_in_out_is_triangle() {
    assert_eq!(fade_in_out(0.0, 100.0), 0.0);
    assert_eq!(fade_in_out(25.0, 100.0), 0.5);
    assert_eq!(fade_in_out(50.0, 100.0), 1.0);
    assert_eq!(fade_in_out(75.0, 100.0), 0.5);
    assert_eq!(fade_in_out(100.0, 100.0), 0.0);
}

#[test]
fn test_random_range() {
    let mut seed = 7;
    for _ in 0..10_000 {
        let r = random(&mut seed);
        assert!(r >= 0.0 && r < 1.0, "random out of [0,1): {}", r);
    }
}

#[test]
fn test_random_is_reproducible() {
    let mut a = 42;
    let mut b = 42;
    for _ in 0..100 {
        assert_eq!(random(&mut a), random(&mut b));
    }
    assert_eq!(a, b, "seeds should advance identically");
}

#[test]
fn test_rand_range_bounds() {
    let mut seed = 1;
    for _ in 0..1000 {
        let r = rand_range(&mut seed, 3.0);
        assert!(r > -3.0 && r <= 3.0, "rand_range(3) out of range: {}", r);
        let s = rand(&mut seed, 10.0);
        assert!(s >= 0.0 && s < 10.0, "rand(10) out of range: {}", s);
    }
}
