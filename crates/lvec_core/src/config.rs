//! # Buffer Configuration
//!
//! Capacity and growth settings, loaded from TOML once at startup.
//!
//! ```toml
//! initial_capacity = 10
//! minimum_capacity = 2
//! growth_factor = 1.5
//! # Optional storage budget in bytes.
//! max_bytes = 65536
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BufferError, BufferResult};

/// Configuration for a [`Buffer`](crate::Buffer).
///
/// Validated at load and at buffer creation; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BufferConfig {
    /// Slots allocated when a buffer is created.
    pub initial_capacity: usize,
    /// Floor below which `shrink_to_fit` never reduces capacity.
    ///
    /// Must not exceed `initial_capacity`.
    pub minimum_capacity: usize,
    /// Multiplier applied to capacity when more room is needed.
    pub growth_factor: f64,
    /// Storage budget in bytes. Any (re)allocation past it fails.
    ///
    /// Counts allocated bytes: storage is held in whole 16-byte blocks,
    /// so ten 4-byte elements need a budget of 48, not 40.
    pub max_bytes: Option<usize>,
}

impl BufferConfig {
    /// Default initial capacity in slots.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Default shrink floor in slots.
    pub const DEFAULT_MINIMUM_CAPACITY: usize = 2;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            minimum_capacity: Self::DEFAULT_MINIMUM_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            max_bytes: None,
        }
    }

    /// Sets the storage budget.
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    /// Sets the initial capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Parses and validates a TOML document.
    ///
    /// Missing keys fall back to their defaults; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidConfig`] if the document does not parse
    /// or a value is out of range.
    pub fn from_toml_str(source: &str) -> BufferResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| BufferError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidConfig`] if the file cannot be read,
    /// does not parse, or holds an out-of-range value.
    pub fn from_toml_file(path: impl AsRef<Path>) -> BufferResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| BufferError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Checks every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> BufferResult<()> {
        if self.initial_capacity == 0 {
            return Err(BufferError::InvalidConfig(
                "initial_capacity must be at least 1".into(),
            ));
        }
        if self.minimum_capacity == 0 {
            return Err(BufferError::InvalidConfig(
                "minimum_capacity must be at least 1".into(),
            ));
        }
        if self.minimum_capacity > self.initial_capacity {
            return Err(BufferError::InvalidConfig(format!(
                "minimum_capacity ({}) must not exceed initial_capacity ({})",
                self.minimum_capacity, self.initial_capacity
            )));
        }
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(BufferError::InvalidConfig(format!(
                "growth_factor must be finite and greater than 1, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new()
    }
}
