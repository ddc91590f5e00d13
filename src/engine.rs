//! The consumed surface of the external frame-processing engine.
//!
//! The engine owns nodes, frames, and scheduling; this crate only needs the
//! narrow slice modeled here: a node can materialize a frame, a frame carries
//! a property container, and the engine can register a per-frame callback
//! that builds one output frame from the input frames at the same index.
//! An engine binding implements [`Frame`] and [`Node`] for its own types.

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::Result;
use crate::map::PropMap;

/// Per-frame callback registered with the engine.
///
/// The engine may evaluate different frame indices from multiple worker
/// threads, so the callback must be pure with respect to the frame index and
/// free of shared mutable state.
pub type FrameModifier<F> = Arc<dyn Fn(&[F], usize) -> F + Send + Sync>;

/// A video or audio frame exposing its property container.
pub trait Frame {
    fn props(&self) -> &PropMap;
    fn props_mut(&mut self) -> &mut PropMap;
}

/// A handle to a lazy sequence of frames produced by the engine.
///
/// Handles are cheap to clone; cloning never copies frame data.
pub trait Node: Clone {
    type Frame: Frame + Clone;

    /// Materializes the frame at index `n`.
    ///
    /// Synchronous; any blocking happens inside the engine.
    ///
    /// # Errors
    ///
    /// Whatever the engine reports, e.g. an out-of-range index.
    fn get_frame(&self, n: usize) -> Result<Self::Frame>;

    /// Registers a per-frame callback: output frame `n` is produced from the
    /// frames of `inputs` at index `n`. The callback runs lazily, once per
    /// requested output frame.
    fn modify_frames(&self, inputs: &[Self], modifier: FrameModifier<Self::Frame>) -> Self;
}

/// Object-safe view of a node for property resolution.
///
/// Implemented for every [`Node`], so [`PropSource`] does not force the
/// accessors to be generic over the concrete node type.
pub trait FrameAccess {
    /// Materializes frame `n` and clones its property container.
    ///
    /// # Errors
    ///
    /// Propagates the engine's frame-materialization failure.
    fn frame_props(&self, n: usize) -> Result<PropMap>;
}

impl<N: Node> FrameAccess for N {
    fn frame_props(&self, n: usize) -> Result<PropMap> {
        Ok(self.get_frame(n)?.props().clone())
    }
}

/// Anything that can yield a property container: a node (through its
/// representative frame), a frame, or a raw container.
#[derive(Clone, Copy)]
pub enum PropSource<'a> {
    /// Props come from the node's first frame, materialized on demand.
    Node(&'a dyn FrameAccess),
    /// Props are read from the frame directly.
    Frame(&'a dyn Frame),
    /// A bare container.
    Map(&'a PropMap),
}

impl<'a> PropSource<'a> {
    pub(crate) fn resolve(self) -> Result<Cow<'a, PropMap>> {
        match self {
            PropSource::Node(node) => Ok(Cow::Owned(node.frame_props(0)?)),
            PropSource::Frame(frame) => Ok(Cow::Borrowed(frame.props())),
            PropSource::Map(map) => Ok(Cow::Borrowed(map)),
        }
    }
}

impl<'a> From<&'a PropMap> for PropSource<'a> {
    fn from(map: &'a PropMap) -> Self {
        PropSource::Map(map)
    }
}

impl<'a, F: Frame> From<&'a F> for PropSource<'a> {
    fn from(frame: &'a F) -> Self {
        PropSource::Frame(frame)
    }
}
