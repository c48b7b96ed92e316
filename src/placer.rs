// Scatters non-overlapping eyes over the canvas.
// Visual: a field of red discs of mixed sizes, none intersecting; on a crowded
// canvas you simply get fewer eyes than asked for.

use crate::types::{Dimensions, Eye};
use rand::Rng;
use std::ops::RangeInclusive;

/// Where candidate eyes come from. Production draws them at random; tests script them.
pub trait CandidateSource {
    fn next_candidate(&mut self, dims: Dimensions, radius: &RangeInclusive<u32>) -> Eye;
}

/// Uniform center in `[0,width) x [0,height)`, uniform integer radius.
pub struct RandomCandidates<R> {
    rng: R,
}

impl<R: Rng> RandomCandidates<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CandidateSource for RandomCandidates<R> {
    fn next_candidate(&mut self, dims: Dimensions, radius: &RangeInclusive<u32>) -> Eye {
        let x = self.rng.random_range(0.0..dims.width as f32);
        let y = self.rng.random_range(0.0..dims.height as f32);
        let r = self.rng.random_range(radius.clone());
        Eye::new(x, y, r as f32)
    }
}

/// The eyes currently on screen. Replaced wholesale on every placement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircleSet {
    eyes: Vec<Eye>,
}

impl CircleSet {
    pub fn iter(&self) -> std::slice::Iter<'_, Eye> {
        self.eyes.iter()
    }

    pub fn len(&self) -> usize {
        self.eyes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eyes.is_empty()
    }

    /// Adds `eye` unless it overlaps one already in the set.
    fn try_insert(&mut self, eye: Eye) -> bool {
        if self.eyes.iter().any(|prev| eye.overlaps(prev)) {
            return false;
        }
        self.eyes.push(eye);
        true
    }
}

impl<'a> IntoIterator for &'a CircleSet {
    type Item = &'a Eye;
    type IntoIter = std::slice::Iter<'a, Eye>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Draw candidates until `target` eyes fit or `max_attempts` draws are spent.
/// Visual: the returned set is what the next frame paints; nothing is shown yet.
pub fn place<S: CandidateSource>(
    dims: Dimensions,
    target: usize,
    max_attempts: usize,
    radius: &RangeInclusive<u32>,
    source: &mut S,
) -> CircleSet {
    let mut set = CircleSet::default();
    if dims.is_empty() || radius.is_empty() {
        tracing::debug!(width = dims.width, height = dims.height, "empty canvas, no eyes placed");
        return set;
    }

    let mut attempts = 0;
    while set.len() < target && attempts < max_attempts {
        let candidate = source.next_candidate(dims, radius);
        set.try_insert(candidate);
        attempts += 1;
    }

    tracing::debug!(
        placed = set.len(),
        target,
        attempts,
        width = dims.width,
        height = dims.height,
        "eyes placed"
    );
    set
}
