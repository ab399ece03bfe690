//! Sampling primitives shared by the generators.
//!
//! - [`Categorical`]: weighted draw over a fixed set of categories
//! - [`SkewedIds`]: Dirichlet-weighted draw over a set of identifiers
//! - [`RngStreams`]: independent, reproducible RNG streams from one master seed

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::distributions::{WeightedError, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Dirichlet, Distribution};
use tracing::debug;

use crate::config::SkewSeeding;
use crate::error::DatasetError;

/// Weighted categorical distribution over `T`.
///
/// Weights are relative; they are normalized by their sum before sampling.
#[derive(Debug, Clone)]
pub struct Categorical<T> {
    choices: Vec<T>,
    index: WeightedIndex<f64>,
    probabilities: Vec<f64>,
}

impl<T: Clone> Categorical<T> {
    /// Builds a distribution from parallel choice and weight slices.
    pub fn new(choices: &[T], weights: &[f64]) -> Result<Self, DatasetError> {
        if choices.len() != weights.len() {
            return Err(DatasetError::WeightCountMismatch {
                weights: weights.len(),
                categories: choices.len(),
            });
        }

        // WeightedIndex accepts infinite weights and then panics building its sampler.
        let total: f64 = weights.iter().sum();
        if weights.iter().any(|w| !w.is_finite()) || !total.is_finite() {
            return Err(WeightedError::InvalidWeight.into());
        }

        let index = WeightedIndex::new(weights)?;
        let probabilities = weights.iter().map(|w| w / total).collect();

        Ok(Self {
            choices: choices.to_vec(),
            index,
            probabilities,
        })
    }

    pub fn sample(&self, rng: &mut impl Rng) -> T {
        self.choices[self.sample_index(rng)].clone()
    }

    /// Position of a sampled choice in [`Self::choices`].
    pub fn sample_index(&self, rng: &mut impl Rng) -> usize {
        self.index.sample(rng)
    }

    /// Normalized probability of each choice, in choice order.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn choices(&self) -> &[T] {
        &self.choices
    }
}

/// Identifier sampler with a fixed, Dirichlet-drawn weight per identifier.
///
/// Low concentration values give a heavy skew: a small share of identifiers
/// receives most of the draws.
#[derive(Debug, Clone)]
pub struct SkewedIds {
    ids: Vec<u32>,
    index: Option<WeightedIndex<f64>>,
}

impl SkewedIds {
    /// Draws one weight vector from a symmetric Dirichlet over `ids`.
    ///
    /// `table` names the referenced table in the error for an empty id set.
    pub fn dirichlet(
        ids: &[u32],
        concentration: f64,
        table: &'static str,
        rng: &mut impl Rng,
    ) -> Result<Self, DatasetError> {
        match ids.len() {
            0 => Err(DatasetError::EmptyReference { table }),
            // A Dirichlet needs at least two components; one id takes every draw.
            1 => Ok(Self {
                ids: ids.to_vec(),
                index: None,
            }),
            n => {
                let dirichlet = Dirichlet::new_with_size(concentration, n)
                    .map_err(|e| DatasetError::Distribution(e.to_string()))?;
                let weights: Vec<f64> = dirichlet.sample(rng);
                debug!(
                    table,
                    n,
                    concentration,
                    max_weight = weights.iter().copied().fold(0.0, f64::max),
                    "Drew skew weights"
                );
                Ok(Self {
                    ids: ids.to_vec(),
                    index: Some(WeightedIndex::new(&weights)?),
                })
            }
        }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        match &self.index {
            Some(index) => self.ids[index.sample(rng)],
            None => self.ids[0],
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Factory for named RNG streams derived from a master seed.
///
/// The same name always yields the same sequence for a given seed, regardless
/// of the order in which streams are created.
#[derive(Debug, Clone, Copy)]
pub struct RngStreams {
    master_seed: u64,
}

impl RngStreams {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn stream(&self, name: &str) -> StdRng {
        let mut hasher = DefaultHasher::new();
        self.master_seed.hash(&mut hasher);
        name.hash(&mut hasher);
        StdRng::seed_from_u64(hasher.finish())
    }

    /// RNG for the engagement skew weights.
    pub fn skew(&self, seeding: SkewSeeding) -> StdRng {
        match seeding {
            SkewSeeding::Derived => self.stream("skew"),
            SkewSeeding::Fixed(seed) => StdRng::seed_from_u64(seed),
            SkewSeeding::Entropy => StdRng::from_entropy(),
        }
    }
}
