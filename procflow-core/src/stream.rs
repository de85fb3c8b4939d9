use std::{
    fmt,
    ops::{Index, IndexMut},
    slice,
};

use uom::{
    ConstZero,
    si::{f64::MassRate, mass_rate::kilogram_per_second},
};

/// A handle to a [`Stream`] stored in a [`Streams`] arena.
///
/// Handles are cheap to copy and never own the stream they refer to.
/// Ids are assigned sequentially, starting at 1, by the arena that creates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StreamId(usize);

impl StreamId {
    /// Returns the numeric id.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    fn index(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

/// Formats the id as the stream's name, e.g. `s3`.
impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// A named carrier of a single mass flow value.
///
/// A new stream carries zero mass flow until [`Stream::set_mass_flow`] is called.
/// Its id and name are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    id: StreamId,
    name: String,
    mass_flow: MassRate,
}

impl Stream {
    fn new(id: StreamId, mass_flow: MassRate) -> Self {
        Self {
            id,
            name: id.to_string(),
            mass_flow,
        }
    }

    /// Returns the handle that identifies this stream in its arena.
    #[must_use]
    pub fn id(&self) -> StreamId {
        self.id
    }

    /// Returns the stream's name, derived from its id.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current mass flow.
    ///
    /// Zero if the mass flow has never been set.
    #[must_use]
    pub fn mass_flow(&self) -> MassRate {
        self.mass_flow
    }

    /// Overwrites the mass flow.
    pub fn set_mass_flow(&mut self, mass_flow: MassRate) {
        self.mass_flow = mass_flow;
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stream {} {} kg/s",
            self.name,
            self.mass_flow.get::<kilogram_per_second>()
        )
    }
}

/// The caller-owned arena holding every [`Stream`] of a run.
///
/// Devices refer to streams only through [`StreamId`] handles issued here,
/// so one stream can be an output of one device and an input of another
/// without either device owning it.
///
/// Indexing with a handle from another arena panics if the handle is out of
/// range, and silently refers to a different stream otherwise.
/// Keep one arena per run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Streams {
    streams: Vec<Stream>,
}

impl Streams {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stream with zero mass flow and returns its handle.
    pub fn create(&mut self) -> StreamId {
        self.create_with(MassRate::ZERO)
    }

    /// Creates a stream with the given mass flow and returns its handle.
    pub fn create_with(&mut self, mass_flow: MassRate) -> StreamId {
        let id = StreamId(self.streams.len() + 1);
        self.streams.push(Stream::new(id, mass_flow));
        id
    }

    /// Returns the stream for `id`, or `None` if this arena did not issue it.
    #[must_use]
    pub fn get(&self, id: StreamId) -> Option<&Stream> {
        id.index().and_then(|i| self.streams.get(i))
    }

    /// Returns the stream for `id` mutably, or `None` if this arena did not issue it.
    #[must_use]
    pub fn get_mut(&mut self, id: StreamId) -> Option<&mut Stream> {
        id.index().and_then(|i| self.streams.get_mut(i))
    }

    /// Returns the number of streams in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Returns `true` if no streams have been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Iterates over the streams in creation order.
    pub fn iter(&self) -> slice::Iter<'_, Stream> {
        self.streams.iter()
    }
}

impl Index<StreamId> for Streams {
    type Output = Stream;

    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    fn index(&self, id: StreamId) -> &Stream {
        self.get(id)
            .unwrap_or_else(|| panic!("stream `{id}` is not in this arena"))
    }
}

impl IndexMut<StreamId> for Streams {
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    fn index_mut(&mut self, id: StreamId) -> &mut Stream {
        self.get_mut(id)
            .unwrap_or_else(|| panic!("stream `{id}` is not in this arena"))
    }
}

impl<'a> IntoIterator for &'a Streams {
    type Item = &'a Stream;
    type IntoIter = slice::Iter<'a, Stream>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
