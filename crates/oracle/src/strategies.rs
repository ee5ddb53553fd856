//! Proptest strategies over the scenario domains.
//!
//! Proptest shrinks floats toward zero, or toward the bound nearest zero when zero is out of range.  So a failing
//! scenario shrinks toward an impact at the origin along the x axis, head-on approaches, minimum speeds, and minimum
//! durations: the simplest configurations that still fail.
use std::f64::consts::PI;

use ccd_physics::V2;
use proptest::prelude::*;

use crate::domains::ScenarioDomains;
use crate::scenario::{Approach, Collision, ScenarioInputs};

prop_compose! {
    /// Points with each coordinate in `[-max, max]`.
    pub fn impact_points(max: f64)(
        x in -max..=max,
        y in -max..=max,
    ) -> V2 {
        V2::new(x, y)
    }
}

prop_compose! {
    pub fn approaches(domains: ScenarioDomains)(
        deviation in -domains.max_deviation()..=domains.max_deviation(),
        speed in domains.speed_min..=domains.speed_max,
    ) -> Approach {
        Approach { deviation, speed }
    }
}

prop_compose! {
    pub fn scenario_inputs(domains: ScenarioDomains)(
        impact_point in impact_points(domains.impact_point_max),
        impact_normal in -PI..=PI,
        alfa in approaches(domains),
        beta in approaches(domains),
        duration in domains.duration_min..=domains.duration_max,
    ) -> ScenarioInputs {
        ScenarioInputs {
            radius: domains.radius,
            impact_point,
            impact_normal,
            alfa,
            beta,
            duration,
        }
    }
}

/// Built scenarios, for tests which only care about the result.
///
/// Inputs which can't be built are filtered out, so only use this with domains that have passed
/// [ScenarioDomains::validate].
pub fn collisions(domains: ScenarioDomains) -> impl Strategy<Value = Collision> {
    scenario_inputs(domains).prop_filter_map("scenario could not be built", |inputs| {
        inputs.build().ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10000))]
        #[test]
        fn draws_stay_in_domain(inputs in scenario_inputs(ScenarioDomains::default())) {
            let d = ScenarioDomains::default();
            prop_assert!(inputs.impact_point.x.abs() <= d.impact_point_max);
            prop_assert!(inputs.impact_point.y.abs() <= d.impact_point_max);
            prop_assert!(inputs.impact_normal.abs() <= PI);
            for a in [inputs.alfa, inputs.beta] {
                prop_assert!(a.deviation.abs() <= d.max_deviation());
                prop_assert!(a.speed >= d.speed_min && a.speed <= d.speed_max);
            }
            prop_assert!(inputs.duration >= d.duration_min && inputs.duration <= d.duration_max);
            prop_assert!(inputs.build().is_ok());
        }

        #[test]
        fn narrowed_domains(inputs in scenario_inputs(ScenarioDomains {
            radius: 3.0,
            impact_point_max: 1.0,
            speed_min: 2.0,
            speed_max: 3.0,
            ..Default::default()
        })) {
            prop_assert!(inputs.impact_point.length() <= 2.0f64.sqrt());
            prop_assert!(inputs.alfa.speed >= 2.0 && inputs.alfa.speed <= 3.0);
            prop_assert_eq!(inputs.radius, 3.0);
        }
    }
}
