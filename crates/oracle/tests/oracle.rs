use approx::*;
use proptest::prelude::*;

use ccd_oracle::strategies::collisions;
use ccd_oracle::*;
use ccd_physics::V2;

/// Rounding error allowed when moving particles around at the magnitude of `collision`'s coordinates.
fn position_tolerance(collision: &Collision) -> f64 {
    let scale = collision
        .alfa
        .position
        .length()
        .max(collision.beta.position.length())
        .max(1.0);
    1e-9 + 64.0 * f64::EPSILON * scale
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    // Advancing both particles by the collision time leaves their surfaces touching.
    #[test]
    fn touching_at_collision_time(collision in collisions(ScenarioDomains::default())) {
        let d = collision.center_distance_at(collision.collision_time);
        let tolerance = position_tolerance(&collision);
        prop_assert!((d - 2.0 * PARTICLE_RADIUS).abs() <= tolerance, "distance {} (tolerance {})\n{}", d, tolerance, collision);
    }

    // Nothing touches before the collision time.
    #[test]
    fn separated_before_collision_time(collision in collisions(ScenarioDomains::default())) {
        let contact = 2.0 * PARTICLE_RADIUS;
        for step in 0..16 {
            let t = collision.collision_time * step as f64 / 16.0;
            let d = collision.center_distance_at(t);
            prop_assert!(d > contact, "distance {} at t={}\n{}", d, t, collision);
        }

        // And the particles are closing along the line between their centers at the moment of contact, so the
        // distance is still shrinking at the collision time.
        let alfa_end = collision.alfa.advance(collision.collision_time).position;
        let beta_end = collision.beta.advance(collision.collision_time).position;
        let normal = (alfa_end - beta_end).normalize();
        let closing = (collision.alfa.velocity - collision.beta.velocity).dot(&normal);
        prop_assert!(closing < 0.0, "closing speed {}\n{}", closing, collision);
    }

    #[test]
    fn registered_algorithms_are_symmetric(collision in collisions(ScenarioDomains::default())) {
        for algorithm in registered_algorithms() {
            let forward = algorithm.collision_time(&collision.alfa, &collision.beta);
            let backward = algorithm.collision_time(&collision.beta, &collision.alfa);
            prop_assert!(forward.is_some() && backward.is_some(), "{}: {:?} {:?}", algorithm.name, forward, backward);
            prop_assert!(within_tolerance(forward.unwrap(), backward.unwrap(), 1e-9), "{}: {:?} {:?}", algorithm.name, forward, backward);
        }
    }
}

#[test]
fn registered_algorithms_agree_with_oracle() {
    ccd_logging::log_for_tests();

    let config = HarnessConfig {
        cases: 2000,
        check_symmetry: true,
        ..Default::default()
    };
    for algorithm in registered_algorithms() {
        if let Err(e) = check_collisions(&algorithm, &config) {
            panic!("{} failed: {}", algorithm.name, e);
        }
    }
}

#[test]
fn assert_collisions_kinematic() {
    assert_collisions(&kinematic);
}

#[test]
fn assert_collisions_swept() {
    assert_collisions(&swept);
}

#[test]
fn assert_collisions_bisection() {
    assert_collisions(&bisection);
}

#[test]
fn parallel_batches() -> anyhow::Result<()> {
    ccd_logging::log_for_tests();

    let config = HarnessConfig {
        cases: 128,
        seed: Some(7),
        ..Default::default()
    };
    for algorithm in registered_algorithms() {
        check_collisions_parallel(&algorithm, &config, 8, 4)?;
    }
    Ok(())
}

#[test]
fn boundary_scenario() -> anyhow::Result<()> {
    let inputs = ScenarioInputs {
        radius: PARTICLE_RADIUS,
        impact_point: V2::ZERO,
        impact_normal: 0.0,
        alfa: Approach::new(0.0, 1.0),
        beta: Approach::new(0.0, 1.0),
        duration: 1.0,
    };
    let (alfa_contact, beta_contact) = inputs.contact_positions();
    assert_relative_eq!(alfa_contact.x, 1.0);
    assert_relative_eq!(beta_contact.x, -1.0);

    let collision = inputs.build()?;
    assert_relative_eq!(collision.alfa.position.x, 2.0);
    assert_relative_eq!(collision.beta.position.x, -2.0);
    assert_relative_eq!(collision.alfa.velocity.x, -1.0);
    assert_relative_eq!(collision.beta.velocity.x, 1.0);

    for algorithm in registered_algorithms() {
        let t = verify_scenario(&algorithm, &collision, DEFAULT_RELATIVE_TOLERANCE)?;
        assert_relative_eq!(t, 1.0, max_relative = 1e-12);
    }
    Ok(())
}

#[test]
fn near_tangential() -> anyhow::Result<()> {
    let steep = 88.0f64.to_radians();
    for (alfa_dev, beta_dev) in [(steep, steep), (steep, -steep), (-steep, 0.0), (0.0, steep)] {
        for (alfa_speed, beta_speed) in [(1e-2, 1e-2), (1e2, 1e-2), (1.0, 1.0)] {
            for duration in [1e-4, 1.0, 1e4] {
                let collision = ScenarioInputs {
                    radius: PARTICLE_RADIUS,
                    impact_point: V2::new(123.0, -456.0),
                    impact_normal: 0.3,
                    alfa: Approach::new(alfa_dev, alfa_speed),
                    beta: Approach::new(beta_dev, beta_speed),
                    duration,
                }
                .build()?;
                for algorithm in registered_algorithms() {
                    verify_scenario(&algorithm, &collision, DEFAULT_RELATIVE_TOLERANCE)
                        .map_err(|e| anyhow::anyhow!("{}: {}", algorithm.name, e))?;
                }
            }
        }
    }
    Ok(())
}

#[test]
fn near_tangential_domains() {
    // Deviations of up to 88 degrees.
    let config = HarnessConfig {
        cases: 1000,
        domains: ScenarioDomains {
            deviation_margin: 2.0f64.to_radians(),
            ..Default::default()
        },
        ..Default::default()
    };
    for algorithm in registered_algorithms() {
        if let Err(e) = check_collisions(&algorithm, &config) {
            panic!("{} failed: {}", algorithm.name, e);
        }
    }
}

#[test]
fn extreme_scale() -> anyhow::Result<()> {
    let corners = [
        V2::new(1e6, 1e6),
        V2::new(-1e6, 1e6),
        V2::new(1e6, -1e6),
        V2::new(-1e6, -1e6),
    ];
    for impact_point in corners {
        for impact_normal in [-3.0, -1.0, 0.5, 2.5] {
            let collision = ScenarioInputs {
                radius: PARTICLE_RADIUS,
                impact_point,
                impact_normal,
                alfa: Approach::new(0.4, SPEED_MIN),
                beta: Approach::new(-1.1, SPEED_MIN),
                duration: DURATION_MAX,
            }
            .build()?;

            let d = collision.center_distance_at(collision.collision_time);
            assert!((d - 2.0 * PARTICLE_RADIUS).abs() <= position_tolerance(&collision), "{}", d);

            for algorithm in registered_algorithms() {
                verify_scenario(&algorithm, &collision, DEFAULT_RELATIVE_TOLERANCE)
                    .map_err(|e| anyhow::anyhow!("{}: {}", algorithm.name, e))?;
            }
        }
    }
    Ok(())
}

#[test]
fn false_negatives_are_reported() {
    let never = |_: &ParticleState, _: &ParticleState| -> Option<f64> { None };
    let config = HarnessConfig {
        cases: 32,
        ..Default::default()
    };
    let err = check_collisions(&never, &config).unwrap_err();
    let failures = err.failures();
    assert_eq!(failures.len(), 1);
    let failure = failures[0];
    assert!(matches!(failure.error, OracleError::NoCollision { .. }));
    assert!(failure.collision.is_some());

    // Shrunk toward the simplest scenario.
    let inputs = failure.inputs;
    assert!(inputs.impact_point.length() < 1e-3, "{:?}", inputs);
    assert!(inputs.impact_normal.abs() < 1e-3, "{:?}", inputs);
    assert!(inputs.alfa.deviation.abs() < 1e-3, "{:?}", inputs);
    assert!(inputs.alfa.speed < SPEED_MIN * 1.01, "{:?}", inputs);
    assert!(inputs.duration < DURATION_MIN * 1.01, "{:?}", inputs);
}

#[test]
fn mismatches_are_reported() {
    let doubled = |a: &ParticleState, b: &ParticleState| kinematic(a, b).map(|t| t * 2.0);
    let err = check_collisions(&doubled, &Default::default()).unwrap_err();
    let failures = err.failures();
    assert!(matches!(
        failures[0].error,
        OracleError::Mismatch { expected, actual, .. } if actual > expected
    ));
    assert!(err.to_string().contains("impact normal rad"), "{}", err);
}

#[test]
#[should_panic(expected = "no collision reported")]
fn assert_collisions_panics() {
    assert_collisions(&|_: &ParticleState, _: &ParticleState| -> Option<f64> { None });
}

#[test]
fn parallel_failures_are_aggregated() {
    let never = |_: &ParticleState, _: &ParticleState| -> Option<f64> { None };
    let config = HarnessConfig {
        cases: 8,
        ..Default::default()
    };
    match check_collisions_parallel(&never, &config, 4, 2) {
        Err(e @ HarnessError::Batches { .. }) => assert_eq!(e.failures().len(), 4),
        other => panic!("Expected every batch to fail, got {:?}", other),
    }
}
