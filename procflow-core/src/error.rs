use thiserror::Error;

use crate::{Port, StreamId};

/// Errors that may occur when wiring or updating a [`Device`](crate::Device).
///
/// Every device model reports failures through this one type, so callers can
/// handle errors without knowing which model produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// A stream was attached to a port that is already full.
    ///
    /// The port is left unchanged; nothing is truncated or overwritten.
    #[error("{port} port is full: capacity is {capacity}")]
    CapacityExceeded { port: Port, capacity: usize },

    /// An update was requested while a port was not exactly full.
    ///
    /// Attach the missing streams and retry.
    #[error("{port} port needs {expected} streams, found {actual}")]
    ArityMismatch {
        port: Port,
        expected: usize,
        actual: usize,
    },

    /// An attached handle does not refer to a stream in the given arena.
    #[error("stream `{0}` is not in this arena")]
    UnknownStream(StreamId),
}
