use pointfield_core::controller::ParticleController;
use pointfield_core::error::Error;

#[test]
fn test_controller_new_initializes_correctly() {
    let particles = ParticleController::new(10, 40).unwrap();

    assert_eq!(particles.count(), 10);
    assert_eq!(particles.max(), 40);

    for i in 0..40 {
        assert_eq!(particles.get_vertex(i), [0.0, 0.0], "vertex[{i}] should be zero");
        assert_eq!(particles.get_velocity(i), [0.0, 0.0], "velocity[{i}] should be zero");
        assert_eq!(particles.get_life(i), 0.0, "life[{i}] should be zero");
        assert_eq!(particles.get_ttl(i), 0.0, "ttl[{i}] should be zero");
    }
}

#[test]
fn test_controller_stores_share_shape() {
    let particles = ParticleController::new(7, 9).unwrap();
    for (count, len) in [
        (particles.life().count(), particles.life().xs().len()),
        (particles.vertices().count(), particles.vertices().xs().len()),
        (particles.velocities().count(), particles.velocities().ys().len()),
    ] {
        assert_eq!(count, 7);
        assert_eq!(len, 9);
    }
}

#[test]
fn test_controller_rejects_count_over_max() {
    let err = ParticleController::new(11, 10).unwrap_err();
    assert_eq!(err, Error::CountExceedsMax { count: 11, max: 10 });
}

#[test]
fn test_controller_index_isolation() {
    let mut particles = ParticleController::new(3, 10).unwrap();

    particles
        .set_vertex(1, 10.0, 20.0)
        .set_velocity(1, 1.0, -1.0)
        .set_life(1, 0.0)
        .set_ttl(1, 100.0);

    assert_eq!(particles.get_vertex(1), [10.0, 20.0]);
    assert_eq!(particles.get_velocity(1), [1.0, -1.0]);
    assert_eq!(particles.get_life(1), 0.0);
    assert_eq!(particles.get_ttl(1), 100.0);

    for i in [0, 2] {
        assert_eq!(particles.get_vertex(i), [0.0, 0.0], "vertex[{i}] touched");
        assert_eq!(particles.get_velocity(i), [0.0, 0.0], "velocity[{i}] touched");
        assert_eq!(particles.get_life(i), 0.0, "life[{i}] touched");
        assert_eq!(particles.get_ttl(i), 0.0, "ttl[{i}] touched");
    }
}

#[test]
fn test_life_and_ttl_are_independent_components() {
    let mut particles = ParticleController::new(1, 1).unwrap();
    particles.set_life(0, 5.0);
    particles.set_ttl(0, 50.0);
    particles.set_life(0, 6.0);
    assert_eq!(particles.get_ttl(0), 50.0);
    assert_eq!(particles.life().get(0), [6.0, 50.0]);
}

#[test]
fn test_value_views() {
    let mut particles = ParticleController::new(1, 1).unwrap();
    particles.set_vertex(0, 3.0, 4.0).set_velocity(0, 0.0, 2.0);

    let p = particles.get_vertex_point2d(0);
    assert_eq!(p.distance_to([0.0, 0.0]), 5.0);

    let mut v = particles.get_velocity_vec2d(0);
    v.rotate_deg(90.0);
    assert_eq!(particles.get_velocity(0), [0.0, 2.0], "materialized values are copies");
}

#[test]
fn test_reset_clears_every_store() {
    let mut particles = ParticleController::new(2, 2).unwrap();
    particles
        .set_vertex(0, 1.0, 1.0)
        .set_velocity(0, 1.0, 1.0)
        .set_life(0, 1.0)
        .set_ttl(0, 1.0)
        .set_vertex(1, 2.0, 2.0);

    particles.reset(0);
    assert_eq!(particles.get_vertex(0), [0.0, 0.0]);
    assert_eq!(particles.get_velocity(0), [0.0, 0.0]);
    assert_eq!(particles.life().get(0), [0.0, 0.0]);
    assert_eq!(particles.get_vertex(1), [2.0, 2.0]);
}

#[test]
fn test_bulk_integration_pass() {
    let mut particles = ParticleController::new(4, 4).unwrap();
    for i in 0..4 {
        particles.set_velocity(i, i as f32, 1.0);
    }

    let (vx, vy) = {
        let v = particles.velocities();
        (v.xs().to_vec(), v.ys().to_vec())
    };
    particles.vertices_mut().update(move |i, x, y| {
        *x += vx[i];
        *y += vy[i];
    });

    assert_eq!(particles.get_vertex(3), [3.0, 1.0]);
    assert_eq!(particles.vertices_mut().count(), 4);
}
