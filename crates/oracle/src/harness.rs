//! Verifying collision-time functions against generated scenarios.
//!
//! Every scenario is built to collide at a known time, so a function under test fails a scenario if it reports no
//! collision or a time outside the relative tolerance.  Failures are shrunk by proptest over the scenario inputs and
//! reported with the scenario's trace.
use log::*;
use proptest::test_runner::{
    Config as ProptestConfig, RngAlgorithm, TestCaseError, TestError, TestRng, TestRunner,
};
use rayon::prelude::*;

use crate::domains::ScenarioDomains;
use crate::errors::{HarnessError, HarnessFailure, OracleError};
use crate::particle::ParticleState;
use crate::scenario::{Collision, ScenarioInputs};
use crate::strategies::scenario_inputs;

/// Reported times must satisfy `|actual - expected| <= expected * tolerance`.
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-3;

/// A function which predicts when two particles first touch.
///
/// Implemented for every `Fn(&ParticleState, &ParticleState) -> Option<f64>`, so plain functions and closures work
/// directly.
pub trait CollisionTimeFn {
    fn collision_time(&self, alfa: &ParticleState, beta: &ParticleState) -> Option<f64>;
}

impl<F> CollisionTimeFn for F
where
    F: Fn(&ParticleState, &ParticleState) -> Option<f64>,
{
    fn collision_time(&self, alfa: &ParticleState, beta: &ParticleState) -> Option<f64> {
        self(alfa, beta)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// Scenarios per run, or per batch when running in parallel.
    pub cases: u32,
    pub tolerance: f64,
    pub domains: ScenarioDomains,
    /// Also require `f(beta, alfa)` to agree with `f(alfa, beta)`.
    pub check_symmetry: bool,
    /// Fixes the random draws.  When `None` a fresh seed is picked and logged.
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            // Picks up `PROPTEST_CASES`.
            cases: ProptestConfig::default().cases,
            tolerance: DEFAULT_RELATIVE_TOLERANCE,
            domains: Default::default(),
            check_symmetry: false,
            seed: None,
        }
    }
}

/// Is `actual` within relative `tolerance` of `expected`?  NaN never is.
pub fn within_tolerance(expected: f64, actual: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= expected * tolerance
}

/// Check one scenario, returning the time `f` reported.
pub fn verify_scenario<F>(f: &F, collision: &Collision, tolerance: f64) -> Result<f64, OracleError>
where
    F: CollisionTimeFn + ?Sized,
{
    let expected = collision.collision_time;
    let actual = f
        .collision_time(&collision.alfa, &collision.beta)
        .ok_or_else(|| OracleError::NoCollision {
            expected,
            trace: collision.trace.clone(),
        })?;

    if !within_tolerance(expected, actual, tolerance) {
        return Err(OracleError::Mismatch {
            expected,
            actual,
            tolerance,
            trace: collision.trace.clone(),
        });
    }

    Ok(actual)
}

/// Check that swapping the particles doesn't change the answer.
pub fn verify_symmetry<F>(f: &F, collision: &Collision, tolerance: f64) -> Result<(), OracleError>
where
    F: CollisionTimeFn + ?Sized,
{
    let forward = f.collision_time(&collision.alfa, &collision.beta);
    let backward = f.collision_time(&collision.beta, &collision.alfa);
    let agree = match (forward, backward) {
        (None, None) => true,
        (Some(a), Some(b)) => (a - b).abs() <= collision.collision_time * tolerance,
        _ => false,
    };

    if agree {
        Ok(())
    } else {
        Err(OracleError::Asymmetric {
            forward,
            backward,
            trace: collision.trace.clone(),
        })
    }
}

fn run_scenario<F>(f: &F, inputs: &ScenarioInputs, config: &HarnessConfig) -> Result<(), OracleError>
where
    F: CollisionTimeFn + ?Sized,
{
    let collision = inputs.build()?;
    verify_scenario(f, &collision, config.tolerance)?;
    if config.check_symmetry {
        verify_symmetry(f, &collision, config.tolerance)?;
    }
    Ok(())
}

fn proptest_config(config: &HarnessConfig) -> ProptestConfig {
    ProptestConfig {
        cases: config.cases,
        // There's no source file to persist next to.
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn seeded_runner(config: &HarnessConfig, seed: u64, batch: u64) -> TestRunner {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&seed.to_le_bytes());
    bytes[8..16].copy_from_slice(&batch.to_le_bytes());
    TestRunner::new_with_rng(
        proptest_config(config),
        TestRng::from_seed(RngAlgorithm::ChaCha, &bytes),
    )
}

fn run_with<F>(mut runner: TestRunner, f: &F, config: &HarnessConfig) -> Result<(), HarnessError>
where
    F: CollisionTimeFn + ?Sized,
{
    let strategy = scenario_inputs(config.domains);
    let result = runner.run(&strategy, |inputs| {
        run_scenario(f, &inputs, config).map_err(|e| {
            debug!("Scenario failed, shrinking: {}", e);
            TestCaseError::fail(e.to_string())
        })
    });

    match result {
        Ok(()) => Ok(()),
        Err(TestError::Abort(reason)) => Err(HarnessError::Aborted(reason.to_string())),
        Err(TestError::Fail(reason, inputs)) => {
            // Replay the minimal case to get the typed error back.
            let error = match run_scenario(f, &inputs, config) {
                Err(e) => e,
                Ok(()) => {
                    return Err(HarnessError::Aborted(format!(
                        "scenario {:?} failed with {} but passed when replayed; is the function under test pure?",
                        inputs, reason
                    )))
                }
            };
            Err(HarnessError::Failed(Box::new(HarnessFailure {
                inputs,
                collision: inputs.build().ok(),
                error,
            })))
        }
    }
}

/// Verify `f` against `config.cases` generated scenarios.
pub fn check_collisions<F>(f: &F, config: &HarnessConfig) -> Result<(), HarnessError>
where
    F: CollisionTimeFn + ?Sized,
{
    config.domains.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "Verifying collision times against {} scenarios, seed={}",
        config.cases, seed
    );

    let result = run_with(seeded_runner(config, seed, 0), f, config);
    match &result {
        Ok(()) => info!("All {} scenarios passed", config.cases),
        Err(e) => warn!("Verification failed: {}", e),
    }
    result
}

/// Like [check_collisions], but runs `batches` independent runs of `config.cases` scenarios on a pool of `threads`
/// threads.  Zero threads means one per CPU.
///
/// Every batch runs to completion, and all failures are reported together.
pub fn check_collisions_parallel<F>(
    f: &F,
    config: &HarnessConfig,
    batches: usize,
    threads: usize,
) -> Result<(), HarnessError>
where
    F: CollisionTimeFn + Sync + ?Sized,
{
    config.domains.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|n| format!("Oracle thread {}", n))
        .build()?;
    info!(
        "Verifying collision times in {} batches of {} scenarios on {} threads, seed={}",
        batches,
        config.cases,
        pool.current_num_threads(),
        seed
    );

    let failures = pool.install(|| {
        (0..batches)
            .into_par_iter()
            .filter_map(|batch| {
                let result = run_with(seeded_runner(config, seed, batch as u64), f, config);
                debug!("Batch {} finished, passed={}", batch, result.is_ok());
                result.err()
            })
            .collect::<Vec<_>>()
    });

    if failures.is_empty() {
        info!("All {} batches passed", batches);
        return Ok(());
    }

    for failure in failures.iter() {
        warn!("Verification failed: {}", failure);
    }
    Err(HarnessError::Batches { batches, failures })
}

/// Verify `f` with the default configuration, panicking with the minimal failing scenario.
///
/// Meant to be called from `#[test]` functions.
pub fn assert_collisions<F>(f: &F)
where
    F: CollisionTimeFn + ?Sized,
{
    assert_collisions_with(f, &Default::default());
}

pub fn assert_collisions_with<F>(f: &F, config: &HarnessConfig)
where
    F: CollisionTimeFn + ?Sized,
{
    if let Err(e) = check_collisions(f, config) {
        let scenario = e
            .failures()
            .first()
            .and_then(|failure| failure.collision.as_ref())
            .map(|c| c.to_string())
            .unwrap_or_default();
        panic!("{}\n{}", e, scenario);
    }
}
