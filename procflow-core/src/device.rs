mod flows;
mod ports;

use uom::{ConstZero, si::f64::MassRate};

use crate::{DeviceError, Stream, StreamId, Streams};

pub use flows::Flows;
pub use ports::{Port, Ports, PortsMut};

/// Wiring progress of a [`Device`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceState {
    /// At least one port still has free slots.
    Building,
    /// Both ports are full and outputs can be computed.
    Ready,
}

/// The capability shared by every device model.
///
/// A `Device` holds two [`Ports`]: one for input streams and one for output
/// streams, each with a capacity fixed at construction.
/// Streams are attached one at a time with [`add_input()`] and [`add_output()`]
/// until both ports are full, after which [`update_outputs()`] can be called
/// any number of times.
///
/// ## Implementing `Device`
///
/// A model provides access to its two ports and implements [`balance()`],
/// the arithmetic rule mapping inlet mass flows to outlet mass flows.
/// Capacity checks, arity checks, and reading and writing streams are handled
/// by the provided methods, so every model reports the same [`DeviceError`]s.
///
/// Ports are only ever exposed mutably through [`PortsMut`], which can attach
/// streams but cannot replace a port, so capacities stay as constructed.
///
/// [`add_input()`]: Device::add_input
/// [`add_output()`]: Device::add_output
/// [`update_outputs()`]: Device::update_outputs
/// [`balance()`]: Device::balance
pub trait Device {
    /// A short lowercase name for the model, such as `"separator"`.
    fn kind(&self) -> &'static str;

    /// Returns the input port.
    fn inputs(&self) -> &Ports;

    /// Returns the output port.
    fn outputs(&self) -> &Ports;

    /// Returns attach-only access to the input port.
    fn inputs_mut(&mut self) -> PortsMut<'_>;

    /// Returns attach-only access to the output port.
    fn outputs_mut(&mut self) -> PortsMut<'_>;

    /// Computes outlet mass flows from inlet mass flows.
    ///
    /// Every element of `flows.outlet_mut()` must be written.
    fn balance(&self, flows: Flows<'_>);

    /// Returns the number of input streams this device requires.
    fn input_capacity(&self) -> usize {
        self.inputs().capacity()
    }

    /// Returns the number of output streams this device requires.
    fn output_capacity(&self) -> usize {
        self.outputs().capacity()
    }

    /// Returns [`DeviceState::Ready`] once both ports are full.
    fn state(&self) -> DeviceState {
        if self.inputs().is_full() && self.outputs().is_full() {
            DeviceState::Ready
        } else {
            DeviceState::Building
        }
    }

    /// Attaches a stream as the next input.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::CapacityExceeded`] if the input port is full.
    fn add_input(&mut self, id: StreamId) -> Result<(), DeviceError> {
        self.inputs_mut().attach(id)?;
        tracing::debug!(
            device = self.kind(),
            port = %Port::Input,
            stream = %id,
            "attached stream"
        );
        Ok(())
    }

    /// Attaches a stream as the next output.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::CapacityExceeded`] if the output port is full.
    fn add_output(&mut self, id: StreamId) -> Result<(), DeviceError> {
        self.outputs_mut().attach(id)?;
        tracing::debug!(
            device = self.kind(),
            port = %Port::Output,
            stream = %id,
            "attached stream"
        );
        Ok(())
    }

    /// Recomputes every output stream's mass flow from the current inputs.
    ///
    /// All handles are resolved before any stream is written, so on error
    /// the arena is left untouched.
    /// Calling this twice with unchanged inputs writes the same values twice.
    ///
    /// # Errors
    ///
    /// - [`DeviceError::ArityMismatch`] if either port is not exactly full,
    ///   checking inputs first.
    /// - [`DeviceError::UnknownStream`] if an attached handle is not in `streams`.
    fn update_outputs(&self, streams: &mut Streams) -> Result<(), DeviceError> {
        let inputs = self.inputs().require_full()?;
        let outputs = self.outputs().require_full()?;

        let inlet = inputs
            .iter()
            .map(|&id| {
                streams
                    .get(id)
                    .map(Stream::mass_flow)
                    .ok_or(DeviceError::UnknownStream(id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(&id) = outputs.iter().find(|&&id| streams.get(id).is_none()) {
            return Err(DeviceError::UnknownStream(id));
        }

        let mut outlet = vec![MassRate::ZERO; outputs.len()];
        self.balance(Flows::new(&inlet, &mut outlet));

        for (&id, mass_flow) in outputs.iter().zip(outlet) {
            streams[id].set_mass_flow(mass_flow);
        }

        Ok(())
    }
}
