//! Core abstractions for procflow, a toy process flow simulator.
//!
//! This crate defines what every device model builds on:
//!
//! - [`Stream`] — a named carrier of a single mass flow value
//! - [`Streams`] — the caller-owned arena that stores every [`Stream`] of a run
//! - [`StreamId`] — a non-owning handle into a [`Streams`] arena
//! - [`Ports`] — a bounded, ordered set of stream handles on one side of a device
//! - [`PortsMut`] — attach-only access to a device's [`Ports`]
//! - [`Device`] — the capability shared by all device models
//! - [`DeviceError`] — the errors every device reports uniformly
//!
//! Devices never own streams. A caller creates streams in a [`Streams`] arena,
//! attaches their handles to devices, and passes the arena to
//! [`Device::update_outputs`] whenever outputs should be recomputed.

mod device;
mod error;
mod stream;

pub use device::{Device, DeviceState, Flows, Port, Ports, PortsMut};
pub use error::DeviceError;
pub use stream::{Stream, StreamId, Streams};
