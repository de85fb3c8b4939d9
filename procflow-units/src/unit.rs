use procflow_core::{Device, Flows, Ports, PortsMut};

use crate::{Mixer, Reactor, Separator};

/// Any one of the device models.
///
/// `Unit` lets callers hold devices of different kinds in one collection and
/// drive them through the [`Device`] interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    Separator(Separator),
    Mixer(Mixer),
    Reactor(Reactor),
}

macro_rules! dispatch {
    ($unit:expr, $device:ident => $body:expr) => {
        match $unit {
            Unit::Separator($device) => $body,
            Unit::Mixer($device) => $body,
            Unit::Reactor($device) => $body,
        }
    };
}

impl Device for Unit {
    fn kind(&self) -> &'static str {
        dispatch!(self, device => device.kind())
    }

    fn inputs(&self) -> &Ports {
        dispatch!(self, device => device.inputs())
    }

    fn outputs(&self) -> &Ports {
        dispatch!(self, device => device.outputs())
    }

    fn inputs_mut(&mut self) -> PortsMut<'_> {
        dispatch!(self, device => device.inputs_mut())
    }

    fn outputs_mut(&mut self) -> PortsMut<'_> {
        dispatch!(self, device => device.outputs_mut())
    }

    fn balance(&self, flows: Flows<'_>) {
        dispatch!(self, device => device.balance(flows));
    }
}

impl From<Separator> for Unit {
    fn from(separator: Separator) -> Self {
        Self::Separator(separator)
    }
}

impl From<Mixer> for Unit {
    fn from(mixer: Mixer) -> Self {
        Self::Mixer(mixer)
    }
}

impl From<Reactor> for Unit {
    fn from(reactor: Reactor) -> Self {
        Self::Reactor(reactor)
    }
}
