//! Masker module: probabilistic homoglyph substitution
//!
//! One forward pass over the input. Each character whose lowercase form
//! has a table entry is independently replaced with probability `p`;
//! the replacement is drawn uniformly from that key's variants.

use crate::table::HomoglyphTable;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the masker and the process boundary around it.
#[derive(Debug, Error)]
pub enum MaskError {
    /// The input argument is not valid UTF-8 text.
    #[error("input is not valid UTF-8 text")]
    InvalidText,
    /// Probability outside the closed interval [0, 1].
    #[error("probability must be between 0 and 1, got {0}")]
    ProbabilityOutOfRange(f64),
    /// The destination file could not be written.
    #[error("failed to write masked text to {path:?}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Replaces characters with homoglyph variants from a fixed table.
#[derive(Debug)]
pub struct Masker<'t> {
    table: &'t HomoglyphTable,
}

impl Masker<'static> {
    /// Create a masker over the built-in table.
    pub fn new() -> Self {
        Self {
            table: HomoglyphTable::builtin(),
        }
    }
}

impl Default for Masker<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Masker<'t> {
    /// Create a masker over a caller-supplied table.
    pub fn with_table(table: &'t HomoglyphTable) -> Self {
        Self { table }
    }

    /// Mask `text`, replacing each mapped character with probability
    /// `probability`.
    pub fn mask(&self, text: &str, probability: f64) -> Result<String, MaskError> {
        self.mask_with_rng(text, probability, &mut rand::thread_rng())
    }

    /// Mask with a specific RNG (for testing).
    ///
    /// Validation happens before any character is processed; once it
    /// passes, the pass cannot fail. The draw is strictly-less-than, so
    /// probability 0 never substitutes and probability 1 always does.
    pub fn mask_with_rng<R: Rng>(
        &self,
        text: &str,
        probability: f64,
        rng: &mut R,
    ) -> Result<String, MaskError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(MaskError::ProbabilityOutOfRange(probability));
        }

        let mut masked = String::with_capacity(text.len());
        for ch in text.chars() {
            match self.table.variants_for(ch) {
                Some(variants) if rng.gen::<f64>() < probability => {
                    let variant = variants.choose(rng).copied().unwrap_or(ch);
                    if ch.is_uppercase() {
                        // Upper-casing a caseless variant is a no-op.
                        masked.extend(variant.to_uppercase());
                    } else {
                        masked.push(variant);
                    }
                }
                _ => masked.push(ch),
            }
        }

        Ok(masked)
    }
}
