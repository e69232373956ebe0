//! Implements empirical tests for the distribution of hash values over slots.
use crate::generate::Generate;
use ndarray::prelude::*;
use ndarray::Zip;
use num_traits::{Float, NumAssignOps};
use openhash_core::Hasher;
use rand::prelude::*;
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::fmt::Debug;
use std::hash::Hash;

/// A result of a Chi-square test.
#[derive(Debug)]
pub struct Chi2Statistic<V> {
    pub chi2: V,
    pub dof: usize,
    pub p_value: V,
}

/// Calculates the chi-square statistic.
pub fn chi2<V>(observed: ArrayView1<V>, expected: ArrayView1<V>) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64> + Into<f64>,
{
    debug_assert_eq!(observed.len(), expected.len(), "Dimensions must match");
    debug_assert!(observed.len() > 1, "Need at least 2 categories");

    let chi2: V = Zip::from(observed)
        .and(expected)
        .fold(V::zero(), |acc, &obs, &exp| {
            let diff = obs - exp;
            acc + diff * diff / exp
        });

    let dof = observed.len() - 1;
    let p_value = match ChiSquared::new(dof as f64) {
        Ok(dist) => (1.0 - dist.cdf(chi2.into())).into(),
        Err(_) => V::nan(),
    };

    Chi2Statistic { chi2, dof, p_value }
}

/// Performs a Chi-square uniformity test.
pub fn chi2_uniformity<'a, V, A>(observed: A) -> Chi2Statistic<V>
where
    V: 'a + Float + NumAssignOps + From<f64> + Into<f64>,
    A: AsArray<'a, V>,
{
    let observed: ArrayView1<V> = observed.into();
    let total: V = observed.sum();
    let expected_value = total / (observed.len() as f64).into();
    let expected = Array1::<V>::from_elem(observed.dim(), expected_value);

    chi2(observed, expected.view())
}

/// Tests that a hasher family spreads values uniformly over the slots of a table.
///
/// Each trial seeds a fresh hasher, hashes `num_slots * num_values_per_slot` unique values, reduces
/// the hashes to slot indices the way the table does and runs a chi-square uniformity test on the
/// slot counts. The family passes if the number of passing trials is within three standard
/// deviations of what `alpha` predicts.
///
/// # Parameters
///
/// - `rng`: A random number generator used for seeds and values.
/// - `num_slots`: Number of slots of the simulated table.
/// - `num_values_per_slot`: Expected number of values per slot.
/// - `num_trials`: Number of independent hashers to test.
/// - `alpha`: Significance level of each trial.
pub fn slot_uniformity<R, K, H>(
    rng: &mut R,
    num_slots: usize,
    num_values_per_slot: usize,
    num_trials: usize,
    alpha: f64,
) where
    R: Rng,
    K: Eq + Hash + Debug + Generate<R>,
    H: Hasher<K>,
{
    let mut num_passes = 0;
    let mut p_values = Vec::with_capacity(num_trials);

    for _ in 0..num_trials {
        let hasher = H::from_seed(rng.next_u64());
        let values = K::generate_many(
            rng,
            &K::GenerateParams::default(),
            num_slots * num_values_per_slot,
        );

        let mut observed = Array1::<f64>::zeros(num_slots);
        for value in values.iter() {
            observed[hasher.hash(value) as usize % num_slots] += 1.0;
        }

        let statistic = chi2_uniformity::<f64, _>(&observed);
        if statistic.p_value >= alpha {
            num_passes += 1;
        }
        p_values.push(statistic.p_value);
    }

    let pass_rate = 1.0 - alpha;
    let confidence = 3.0 * ((pass_rate * (1.0 - pass_rate)) / num_trials as f64).sqrt();
    let expected_passes = num_trials as f64 * (pass_rate - confidence);

    assert!(
        num_passes as f64 >= expected_passes,
        "Slot uniformity test has failed: {} of {} trials passed, expected {:.1}, p-values: {:?}",
        num_passes,
        num_trials,
        expected_passes,
        p_values
    );
}
