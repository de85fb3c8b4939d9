use procflow_core::{Device, Flows, Port, Ports, PortsMut};

/// Passes one input stream to one output, or splits it evenly across two.
///
/// A double reactor writes half the input to each of its two outputs;
/// a single reactor writes the whole input to its one output.
/// Either way the outputs sum to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reactor {
    inputs: Ports,
    outputs: Ports,
}

impl Reactor {
    pub const INPUTS: usize = 1;

    /// Creates a reactor with two outputs if `is_double` is set, otherwise one.
    #[must_use]
    pub fn new(is_double: bool) -> Self {
        let outputs = if is_double { 2 } else { 1 };
        Self {
            inputs: Ports::new(Port::Input, Self::INPUTS),
            outputs: Ports::new(Port::Output, outputs),
        }
    }

    /// Creates a reactor with one output.
    #[must_use]
    pub fn single() -> Self {
        Self::new(false)
    }

    /// Creates a reactor with two outputs.
    #[must_use]
    pub fn double() -> Self {
        Self::new(true)
    }

    /// Returns `true` if this reactor has two outputs.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.outputs.capacity() == 2
    }
}

impl Device for Reactor {
    fn kind(&self) -> &'static str {
        "reactor"
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
        let inlet = flows.inlet()[0];
        let outlet = flows.outlet_mut();

        #[allow(clippy::cast_precision_loss)]
        let per_output = inlet / outlet.len() as f64;

        outlet.fill(per_output);
    }
}
