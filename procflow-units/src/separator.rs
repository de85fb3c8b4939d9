use procflow_core::{Device, Flows, Port, Ports, PortsMut};

/// Splits one input stream evenly into two output streams.
///
/// Each output receives half of the input mass flow.
/// Zero and negative inputs are halved like any other value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    inputs: Ports,
    outputs: Ports,
}

impl Separator {
    pub const INPUTS: usize = 1;
    pub const OUTPUTS: usize = 2;

    /// Creates a separator with no streams attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inputs: Ports::new(Port::Input, Self::INPUTS),
            outputs: Ports::new(Port::Output, Self::OUTPUTS),
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Separator {
    fn kind(&self) -> &'static str {
        "separator"
    }

    fn inputs(&self) -> &Ports {
        &self.inputs
    }

    fn outputs(&self) -> &Ports {
        &self.outputs
    }

    fn inputs_mut(&mut self) -> PortsMut<'_> {
        PortsMut::new(&mut self.inputs)
    }

    fn outputs_mut(&mut self) -> PortsMut<'_> {
        PortsMut::new(&mut self.outputs)
    }

    fn balance(&self, mut flows: Flows<'_>) {
        let half = flows.inlet()[0] / 2.0;
        flows.outlet_mut().fill(half);
    }
}
