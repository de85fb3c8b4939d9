use std::num::NonZeroUsize;

use procflow_core::{Device, Flows, Port, Ports, PortsMut};
use uom::{ConstZero, si::f64::MassRate};

/// Combines a fixed number of input streams into one output stream.
///
/// The total inlet mass flow is divided by the number of outputs and written
/// to every output.
/// With the single output a mixer has, the output carries the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mixer {
    inputs: Ports,
    outputs: Ports,
}

impl Mixer {
    pub const OUTPUTS: usize = 1;

    /// Creates a mixer that requires exactly `inputs` input streams.
    #[must_use]
    pub fn new(inputs: NonZeroUsize) -> Self {
        Self {
            inputs: Ports::new(Port::Input, inputs.get()),
            outputs: Ports::new(Port::Output, Self::OUTPUTS),
        }
    }
}

impl Device for Mixer {
    fn kind(&self) -> &'static str {
        "mixer"
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
        let total = flows
            .inlet()
            .iter()
            .fold(MassRate::ZERO, |acc, &m_dot| acc + m_dot);

        let outlet = flows.outlet_mut();

        #[allow(clippy::cast_precision_loss)]
        let per_output = total / outlet.len() as f64;

        outlet.fill(per_output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use procflow_core::{DeviceError, DeviceState, StreamId, Streams};
    use proptest::prelude::*;
    use uom::si::mass_rate::kilogram_per_second;

    fn kg_per_s(value: f64) -> MassRate {
        MassRate::new::<kilogram_per_second>(value)
    }

    fn mixer(inputs: usize) -> Mixer {
        Mixer::new(NonZeroUsize::new(inputs).unwrap())
    }

    /// Returns a fully wired mixer, its input handles, and its output handle.
    fn wired(streams: &mut Streams, feeds: &[f64]) -> (Mixer, Vec<StreamId>, StreamId) {
        let mut mixer = mixer(feeds.len());
        let inputs: Vec<_> = feeds
            .iter()
            .map(|&feed| streams.create_with(kg_per_s(feed)))
            .collect();
        for &input in &inputs {
            mixer.add_input(input).unwrap();
        }

        let output = streams.create();
        mixer.add_output(output).unwrap();

        (mixer, inputs, output)
    }

    #[test]
    fn capacities_follow_construction() {
        let mixer = mixer(3);
        assert_eq!(mixer.input_capacity(), 3);
        assert_eq!(mixer.output_capacity(), 1);
    }

    #[test]
    fn ten_and_five_mix_to_the_total_not_the_mean() {
        let mut streams = Streams::new();
        let (mixer, _, output) = wired(&mut streams, &[10.0, 5.0]);

        mixer.update_outputs(&mut streams).unwrap();

        assert_relative_eq!(
            streams[output].mass_flow().get::<kilogram_per_second>(),
            15.0
        );
    }

    #[test]
    fn single_input_passes_through() {
        let mut streams = Streams::new();
        let (mixer, _, output) = wired(&mut streams, &[4.25]);

        mixer.update_outputs(&mut streams).unwrap();

        assert_relative_eq!(
            streams[output].mass_flow().get::<kilogram_per_second>(),
            4.25
        );
    }

    #[test]
    fn follows_inputs_across_updates() {
        let mut streams = Streams::new();
        let (mixer, inputs, output) = wired(&mut streams, &[1.0, 2.0, 3.0]);

        mixer.update_outputs(&mut streams).unwrap();
        let first = streams[output].mass_flow();
        mixer.update_outputs(&mut streams).unwrap();
        assert_eq!(streams[output].mass_flow(), first);

        streams[inputs[1]].set_mass_flow(kg_per_s(12.0));
        mixer.update_outputs(&mut streams).unwrap();
        assert_relative_eq!(
            streams[output].mass_flow().get::<kilogram_per_second>(),
            16.0
        );
    }

    #[test]
    fn update_without_output_is_an_arity_mismatch() {
        let mut streams = Streams::new();
        let mut mixer = mixer(2);
        mixer.add_input(streams.create()).unwrap();
        mixer.add_input(streams.create()).unwrap();

        assert_eq!(
            mixer.update_outputs(&mut streams),
            Err(DeviceError::ArityMismatch {
                port: Port::Output,
                expected: 1,
                actual: 0,
            })
        );
    }

    #[test]
    fn output_port_cannot_grow_or_shrink() {
        let mut streams = Streams::new();
        let mut mixer = mixer(1);
        mixer.add_input(streams.create_with(kg_per_s(3.0))).unwrap();

        assert_eq!(
            mixer.update_outputs(&mut streams),
            Err(DeviceError::ArityMismatch {
                port: Port::Output,
                expected: 1,
                actual: 0,
            })
        );

        let output = streams.create();
        mixer.outputs_mut().attach(output).unwrap();
        assert!(mixer.outputs_mut().attach(streams.create()).is_err());
        assert_eq!(mixer.output_capacity(), Mixer::OUTPUTS);

        mixer.update_outputs(&mut streams).unwrap();
        assert_relative_eq!(
            streams[output].mass_flow().get::<kilogram_per_second>(),
            3.0
        );
    }

    #[test]
    fn update_with_missing_input_is_an_arity_mismatch() {
        let mut streams = Streams::new();
        let mut mixer = mixer(3);
        mixer.add_input(streams.create()).unwrap();
        mixer.add_output(streams.create()).unwrap();
        assert_eq!(mixer.state(), DeviceState::Building);

        assert_eq!(
            mixer.update_outputs(&mut streams),
            Err(DeviceError::ArityMismatch {
                port: Port::Input,
                expected: 3,
                actual: 1,
            })
        );
    }

    #[test]
    fn rejects_inputs_and_outputs_beyond_capacity() {
        let mut streams = Streams::new();
        let (mut mixer, _, _) = wired(&mut streams, &[1.0, 1.0]);
        assert_eq!(mixer.state(), DeviceState::Ready);

        assert_eq!(
            mixer.add_input(streams.create()),
            Err(DeviceError::CapacityExceeded {
                port: Port::Input,
                capacity: 2,
            })
        );
        assert_eq!(
            mixer.add_output(streams.create()),
            Err(DeviceError::CapacityExceeded {
                port: Port::Output,
                capacity: 1,
            })
        );
    }

    proptest! {
        #[test]
        fn output_is_the_inlet_total(feeds in prop::collection::vec(0.0_f64..1e6, 1..8)) {
            let mut streams = Streams::new();
            let (mixer, _, output) = wired(&mut streams, &feeds);

            mixer.update_outputs(&mut streams).unwrap();

            let total: f64 = feeds.iter().sum();
            let actual = streams[output].mass_flow().get::<kilogram_per_second>();
            prop_assert!((actual - total).abs() <= 1e-9 * total.max(1.0));
        }
    }
}
