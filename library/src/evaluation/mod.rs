//! Pure evaluation of the animation model.
//!
//! The interpolator maps a track's keyframes and a progress point to a
//! value; the snapshot builder folds all of an element's tracks into one
//! resolved style for an instant. Both are side-effect free and safe to
//! call concurrently. The live preview and the CSS exporter share them so
//! the export matches the preview at every sampled time point.

pub mod interpolator;
pub mod snapshot;

pub use interpolator::evaluate;
pub use snapshot::{StyleSnapshot, StyleSnapshotBuilder};
