//! Typed access to frame properties and property merging across nodes.

use std::borrow::Cow;
use std::sync::Arc;

use log::{debug, trace};

use crate::engine::{Frame, FrameModifier, Node, PropSource};
use crate::error::{CustomError, FramePropError, Result};
use crate::map::{FromPropValue, PropMap};

/// Default function label when the caller supplies none.
const GET_PROP: &str = "get_prop";

fn resolve_source<'a>(
    src: PropSource<'a>,
    key: &str,
    function: &str,
) -> Result<Cow<'a, PropMap>, FramePropError> {
    src.resolve().map_err(|err| {
        debug!("failed to resolve property source for {key}: {err}");
        FramePropError::unknown(key, function)
    })
}

fn lookup<T: FromPropValue>(
    props: &PropMap,
    key: &str,
    function: &str,
) -> Result<T, FramePropError> {
    let Some(value) = props.get(key) else {
        return Err(FramePropError::missing_key(key, function));
    };

    trace!("prop {key} holds {}", value.type_name());

    T::from_prop(value)
        .ok_or_else(|| FramePropError::wrong_type(key, T::TYPE_NAME, value.type_name(), function))
}

/// Fetches property `key` from `src`, expecting a value of type `T`.
///
/// `src` may be a node (its first frame's props are used), a frame, or a raw
/// [`PropMap`]. Errors are attributed to `func` when given, otherwise to
/// `get_prop` itself. The expected type is usually inferred from the binding:
///
/// ```
/// use frameprops::PropMap;
///
/// let mut props = PropMap::new();
/// props.insert("_Matrix", 1i64);
///
/// let matrix: i64 = frameprops::get_prop(&props, "_Matrix", None)?;
/// assert_eq!(matrix, 1);
/// # Ok::<(), frameprops::FramePropError>(())
/// ```
///
/// # Errors
///
/// [`FramePropError`] when the key is absent, holds a value of another type,
/// or the source's frame cannot be materialized.
pub fn get_prop<'a, T: FromPropValue>(
    src: impl Into<PropSource<'a>>,
    key: impl AsRef<str>,
    func: Option<&str>,
) -> Result<T, FramePropError> {
    let key = key.as_ref();
    let function = func.unwrap_or(GET_PROP);

    let props = resolve_source(src.into(), key, function)?;
    lookup(&props, key, function)
}

/// Like [`get_prop`], but applies `cast` to the value after the type check.
///
/// The cast only ever sees a value that already satisfied `T`.
///
/// # Errors
///
/// Same conditions as [`get_prop`].
pub fn get_prop_cast<'a, T: FromPropValue, C>(
    src: impl Into<PropSource<'a>>,
    key: impl AsRef<str>,
    cast: impl FnOnce(T) -> C,
    func: Option<&str>,
) -> Result<C, FramePropError> {
    get_prop(src, key, func).map(cast)
}

/// Like [`get_prop`], but returns `default` when the key is absent or holds
/// a wrong-typed value. Any default is valid, including zero or empty values.
///
/// # Errors
///
/// Only a failure materializing the source's frame; lookup failures yield
/// `default` instead.
pub fn get_prop_or<'a, T: FromPropValue>(
    src: impl Into<PropSource<'a>>,
    key: impl AsRef<str>,
    default: T,
) -> Result<T, FramePropError> {
    let key = key.as_ref();

    let props = resolve_source(src.into(), key, GET_PROP)?;
    Ok(lookup(&props, key, GET_PROP).unwrap_or(default))
}

/// Combines [`get_prop_cast`] and [`get_prop_or`]: the cast applies to a
/// type-checked value, the default covers a missing key or a mismatch.
///
/// # Errors
///
/// Only a failure materializing the source's frame.
pub fn get_prop_cast_or<'a, T: FromPropValue, C>(
    src: impl Into<PropSource<'a>>,
    key: impl AsRef<str>,
    cast: impl FnOnce(T) -> C,
    default: C,
) -> Result<C, FramePropError> {
    let key = key.as_ref();

    let props = resolve_source(src.into(), key, GET_PROP)?;
    Ok(lookup::<T>(&props, key, GET_PROP).map(cast).unwrap_or(default))
}

/// Merges the frame properties of several nodes into one output node.
///
/// The output's non-property frame content comes from `clips[main_idx]`; its
/// per-frame property container starts as a copy of that input's and is then
/// overwritten key-by-key with every other input's props in input order,
/// skipping `main_idx`. The merge runs lazily inside the engine's per-frame
/// callback and is pure with respect to the frame index, so the engine may
/// evaluate it from multiple worker threads.
///
/// A single input is returned unchanged.
///
/// # Errors
///
/// A `Value`-category [`CustomError`] when `clips` is empty or `main_idx` is
/// out of range.
pub fn merge_clip_props<N: Node>(mut clips: Vec<N>, main_idx: usize) -> Result<N> {
    if clips.is_empty() {
        return Err(CustomError::value("No clips given to merge!").function("merge_clip_props"));
    }

    if clips.len() == 1 {
        return Ok(clips.remove(0));
    }

    if main_idx >= clips.len() {
        return Err(
            CustomError::value("Main index {main_idx} out of range for {clips} clips!")
                .arg("main_idx", main_idx)
                .arg("clips", clips.len())
                .function("merge_clip_props"),
        );
    }

    debug!("merging props of {} clips, main index {main_idx}", clips.len());

    let modifier: FrameModifier<N::Frame> = Arc::new(move |frames, _n| {
        let mut dst = frames[main_idx].clone();

        for (i, frame) in frames.iter().enumerate() {
            if i == main_idx {
                continue;
            }

            dst.props_mut().update(frame.props());
        }

        dst
    });

    Ok(clips[0].modify_frames(&clips, modifier))
}
