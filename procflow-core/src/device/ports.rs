use std::fmt;

use crate::{DeviceError, StreamId};

/// Which side of a device a stream is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    Input,
    Output,
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

/// A bounded, ordered set of stream handles on one side of a device.
///
/// The capacity is fixed at construction.
/// Handles are kept in attachment order and can never exceed the capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ports {
    port: Port,
    capacity: usize,
    streams: Vec<StreamId>,
}

impl Ports {
    /// Creates an empty port that accepts up to `capacity` streams.
    #[must_use]
    pub fn new(port: Port, capacity: usize) -> Self {
        Self {
            port,
            capacity,
            streams: Vec::with_capacity(capacity),
        }
    }

    /// Returns the maximum number of streams.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of attached streams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Returns `true` if no streams are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Returns `true` once `len() == capacity()`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.streams.len() == self.capacity
    }

    /// Returns the attached handles in attachment order.
    #[must_use]
    pub fn as_slice(&self) -> &[StreamId] {
        &self.streams
    }

    /// Appends a handle.
    ///
    /// The same handle may be attached more than once.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::CapacityExceeded`] if the port is already full.
    pub(crate) fn attach(&mut self, id: StreamId) -> Result<(), DeviceError> {
        if self.is_full() {
            return Err(DeviceError::CapacityExceeded {
                port: self.port,
                capacity: self.capacity,
            });
        }
        self.streams.push(id);
        Ok(())
    }

    /// Returns the attached handles if the port is exactly full.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::ArityMismatch`] otherwise.
    pub fn require_full(&self) -> Result<&[StreamId], DeviceError> {
        if self.is_full() {
            Ok(&self.streams)
        } else {
            Err(DeviceError::ArityMismatch {
                port: self.port,
                expected: self.capacity,
                actual: self.streams.len(),
            })
        }
    }
}

/// Attach-only access to a device's [`Ports`].
///
/// Devices hand this out from [`Device::inputs_mut`](crate::Device::inputs_mut)
/// and [`Device::outputs_mut`](crate::Device::outputs_mut) instead of
/// `&mut Ports`, so callers can append streams but can never replace a port
/// or change its capacity:
///
/// ```compile_fail
/// use procflow_core::{Port, Ports, PortsMut};
///
/// let mut ports = Ports::new(Port::Input, 1);
/// let mut handle = PortsMut::new(&mut ports);
/// *handle = Ports::new(Port::Input, 0);
/// ```
#[derive(Debug)]
pub struct PortsMut<'a> {
    ports: &'a mut Ports,
}

impl<'a> PortsMut<'a> {
    /// Wraps a port owned by the device.
    pub fn new(ports: &'a mut Ports) -> Self {
        Self { ports }
    }

    /// Appends a handle.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::CapacityExceeded`] if the port is already full.
    pub fn attach(&mut self, id: StreamId) -> Result<(), DeviceError> {
        self.ports.attach(id)
    }
}
