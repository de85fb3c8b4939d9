//! Device models for procflow.
//!
//! Each model fixes its own input and output counts and its own rule for
//! computing outlet mass flows:
//!
//! - [`Separator`]: one input split evenly into two outputs
//! - [`Mixer`]: any fixed number of inputs combined into one output
//! - [`Reactor`]: one input passed to one output, or split evenly into two
//!
//! [`Unit`] holds any one of them behind the [`Device`](procflow_core::Device)
//! interface, and [`UnitConfig`] describes a unit in a serializable form.
//!
//! Capacities are fixed when a model is constructed.
//! Mutable port access only attaches streams; a port cannot be replaced:
//!
//! ```compile_fail
//! use procflow_core::{Device, Port, Ports};
//! use procflow_units::Separator;
//!
//! let mut separator = Separator::new();
//! *separator.inputs_mut() = Ports::new(Port::Input, 0);
//! ```

mod config;
mod mixer;
mod reactor;
mod separator;
mod unit;

pub use config::{ConfigError, UnitConfig};
pub use mixer::Mixer;
pub use reactor::Reactor;
pub use separator::Separator;
pub use unit::Unit;
