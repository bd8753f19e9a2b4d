//! Random sources the roll engine draws dice from.
//!
//! The engine never reaches for a global RNG. Callers inject a
//! [`RandomSource`]: an [`RngSource`] wrapping any `rand` generator for
//! live play, or a [`ScriptedSource`] replaying a fixed sequence.

use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::Die;
use crate::error::{MechError, MechResult};

/// A capability that produces one uniformly distributed face per call.
///
/// Draws must be independent across calls. A failing source aborts the
/// whole roll; the engine never substitutes a default face.
pub trait RandomSource {
    /// Draw one value in `1..=die.sides()`.
    fn draw(&mut self, die: Die) -> MechResult<u32>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn draw(&mut self, die: Die) -> MechResult<u32> {
        (**self).draw(die)
    }
}

/// Draw a face and reject anything the die cannot show.
pub(crate) fn draw_face<S: RandomSource + ?Sized>(source: &mut S, die: Die) -> MechResult<u32> {
    let value = source.draw(die)?;
    if die.has_face(value) {
        Ok(value)
    } else {
        Err(MechError::FaceOutOfRange {
            value,
            sides: die.sides(),
        })
    }
}

/// A random source backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consume the source and return the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// A reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from the operating system.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn draw(&mut self, die: Die) -> MechResult<u32> {
        Ok(self.rng.random_range(1..=die.sides()))
    }
}

/// A random source that replays a fixed sequence of faces.
///
/// Useful for tests and for replaying a recorded roll. Returns
/// [`MechError::SourceExhausted`] once the sequence runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<u32>,
}

impl ScriptedSource {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, _die: Die) -> MechResult<u32> {
        self.values.pop_front().ok_or(MechError::SourceExhausted)
    }
}
