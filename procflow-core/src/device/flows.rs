use uom::si::f64::MassRate;

/// Inlet mass flows and outlet slots handed to [`Device::balance`].
///
/// Only [`Device::update_outputs`] builds a `Flows`, after checking both
/// ports are exactly full, so `inlet().len()` always equals the input capacity
/// and `outlet_mut().len()` always equals the output capacity.
///
/// ```compile_fail
/// use procflow_core::Flows;
///
/// let _ = Flows::new(&[], &mut []);
/// ```
///
/// [`Device::balance`]: crate::Device::balance
/// [`Device::update_outputs`]: crate::Device::update_outputs
#[derive(Debug)]
pub struct Flows<'a> {
    inlet: &'a [MassRate],
    outlet: &'a mut [MassRate],
}

impl<'a> Flows<'a> {
    pub(crate) fn new(inlet: &'a [MassRate], outlet: &'a mut [MassRate]) -> Self {
        Self { inlet, outlet }
    }

    /// Returns the inlet mass flows, in input attachment order.
    #[must_use]
    pub fn inlet(&self) -> &[MassRate] {
        self.inlet
    }

    /// Returns the outlet slots, in output attachment order.
    pub fn outlet_mut(&mut self) -> &mut [MassRate] {
        &mut *self.outlet
    }
}
