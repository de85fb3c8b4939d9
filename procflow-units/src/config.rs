use std::num::NonZeroUsize;

use procflow_core::Device;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Mixer, Reactor, Separator, Unit};

/// A serializable description of a [`Unit`].
///
/// The `kind` field selects the model:
///
/// ```toml
/// kind = "mixer"
/// inputs = 3
/// ```
///
/// A reactor takes an optional `double` flag, which defaults to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnitConfig {
    Separator,
    Mixer {
        inputs: usize,
    },
    Reactor {
        #[serde(default)]
        double: bool,
    },
}

/// Errors that may occur when building a [`Unit`] from a [`UnitConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a mixer needs at least one input")]
    NoMixerInputs,
}

impl UnitConfig {
    /// Builds an unwired unit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoMixerInputs`] for a mixer with zero inputs.
    pub fn build(self) -> Result<Unit, ConfigError> {
        let unit: Unit = match self {
            Self::Separator => Separator::new().into(),
            Self::Mixer { inputs } => NonZeroUsize::new(inputs)
                .map(Mixer::new)
                .ok_or(ConfigError::NoMixerInputs)?
                .into(),
            Self::Reactor { double } => Reactor::new(double).into(),
        };

        tracing::debug!(
            device = unit.kind(),
            inputs = unit.input_capacity(),
            outputs = unit.output_capacity(),
            "built unit from config"
        );

        Ok(unit)
    }
}

impl From<&Unit> for UnitConfig {
    fn from(unit: &Unit) -> Self {
        match unit {
            Unit::Separator(_) => Self::Separator,
            Unit::Mixer(mixer) => Self::Mixer {
                inputs: mixer.input_capacity(),
            },
            Unit::Reactor(reactor) => Self::Reactor {
                double: reactor.is_double(),
            },
        }
    }
}
