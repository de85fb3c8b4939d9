//! Shared fixtures for the integration tests.

use procflow_core::{Device, DeviceError, StreamId, Streams};
use procflow_units::{ConfigError, Unit, UnitConfig};
use serde::{Deserialize, Serialize};
use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

/// Builds a mass rate in kilograms per second.
#[must_use]
pub fn kg_per_s(value: f64) -> MassRate {
    MassRate::new::<kilogram_per_second>(value)
}

/// Reads a stream's mass flow in kilograms per second.
#[must_use]
pub fn flow(streams: &Streams, id: StreamId) -> f64 {
    streams[id].mass_flow().get::<kilogram_per_second>()
}

/// A single-unit test case: a unit description plus its inlet mass flows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Inlet mass flows in kg/s, one per input.
    pub feeds: Vec<f64>,
    pub unit: UnitConfig,
}

/// Why a [`Case`] could not be run.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CaseError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Device(#[from] DeviceError),
}

impl Case {
    /// Builds the unit, wires one stream per feed plus fresh outlet streams,
    /// updates once, and returns the outlet mass flows in kg/s.
    ///
    /// # Errors
    ///
    /// Fails if the unit cannot be built, if there are more feeds than the unit
    /// accepts, or if there are fewer feeds than the unit requires.
    pub fn run(&self) -> Result<Vec<f64>, CaseError> {
        let mut unit: Unit = self.unit.build()?;
        let mut streams = Streams::new();

        for &feed in &self.feeds {
            unit.add_input(streams.create_with(kg_per_s(feed)))?;
        }

        let outputs: Vec<_> = (0..unit.output_capacity())
            .map(|_| streams.create())
            .collect();
        for &output in &outputs {
            unit.add_output(output)?;
        }

        unit.update_outputs(&mut streams)?;

        Ok(outputs.iter().map(|&id| flow(&streams, id)).collect())
    }
}
