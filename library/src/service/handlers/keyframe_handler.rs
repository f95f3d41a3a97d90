//! Keyframe mutations on a single track.
//!
//! Keyframe lists are re-sorted (stable, ascending by time) after every
//! insert or time update, so index-based addressing is only valid until the
//! next mutation; callers must not cache indices.

use std::sync::{Arc, RwLock};

use log::debug;
use ordered_float::OrderedFloat;
use uuid::Uuid;

use crate::animation::CubicBezier;
use crate::error::EditorError;
use crate::model::keyframe::Keyframe;
use crate::model::project::Project;
use crate::model::property::PropertyValue;
use crate::model::track::Track;
use crate::service::handlers::lock_helpers::with_project_write;

/// Partial keyframe update. `None` leaves a field untouched; for `easing`,
/// `Some(None)` clears the per-segment override back to the track default.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct KeyframeUpdate {
    pub time: Option<f64>,
    pub value: Option<PropertyValue>,
    pub easing: Option<Option<CubicBezier>>,
}

pub struct KeyframeHandler;

impl KeyframeHandler {
    /// Insert a keyframe into an element's track, then restore time order.
    ///
    /// A non-finite or out-of-range time is rejected before anything is
    /// stored; the track is never left holding a clamped approximation.
    pub fn add_keyframe(
        project: &Arc<RwLock<Project>>,
        element_id: Uuid,
        property: &str,
        keyframe: Keyframe,
    ) -> Result<(), EditorError> {
        if !Keyframe::is_valid_time(keyframe.time()) {
            return Err(EditorError::InvalidKeyframe(format!(
                "time {} is not a finite offset in [0, 1]",
                keyframe.time()
            )));
        }
        with_project_write(project, |proj| {
            let track = track_mut(proj, element_id, property)?;
            track.keyframes.push(keyframe);
            track.sort_keyframes();
            proj.touch();
            debug!("Added keyframe to '{property}' on element {element_id}");
            Ok(())
        })
    }

    /// Merge fields into the keyframe at `index`, re-sorting if its time
    /// changed.
    pub fn update_keyframe(
        project: &Arc<RwLock<Project>>,
        element_id: Uuid,
        property: &str,
        index: usize,
        update: KeyframeUpdate,
    ) -> Result<(), EditorError> {
        if let Some(time) = update.time {
            if !Keyframe::is_valid_time(time) {
                return Err(EditorError::InvalidKeyframe(format!(
                    "time {time} is not a finite offset in [0, 1]"
                )));
            }
        }
        with_project_write(project, |proj| {
            let track = track_mut(proj, element_id, property)?;
            if index >= track.keyframes.len() {
                return Err(EditorError::KeyframeIndexOutOfBounds {
                    property: property.to_string(),
                    index,
                });
            }

            let keyframe = &mut track.keyframes[index];
            let mut time_changed = false;
            if let Some(time) = update.time {
                time_changed = keyframe.time.into_inner() != time;
                keyframe.time = OrderedFloat(time);
            }
            if let Some(value) = update.value {
                keyframe.value = value;
            }
            if let Some(easing) = update.easing {
                keyframe.easing = easing;
            }
            if time_changed {
                track.sort_keyframes();
            }
            proj.touch();
            Ok(())
        })
    }

    pub fn remove_keyframe(
        project: &Arc<RwLock<Project>>,
        element_id: Uuid,
        property: &str,
        index: usize,
    ) -> Result<(), EditorError> {
        with_project_write(project, |proj| {
            let track = track_mut(proj, element_id, property)?;
            if index >= track.keyframes.len() {
                return Err(EditorError::KeyframeIndexOutOfBounds {
                    property: property.to_string(),
                    index,
                });
            }
            track.keyframes.remove(index);
            proj.touch();
            debug!("Removed keyframe {index} from '{property}' on element {element_id}");
            Ok(())
        })
    }
}

fn track_mut<'a>(
    proj: &'a mut Project,
    element_id: Uuid,
    property: &str,
) -> Result<&'a mut Track, EditorError> {
    let element = proj
        .get_element_mut(element_id)
        .ok_or(EditorError::ElementNotFound(element_id))?;
    element
        .animation
        .get_track_mut(property)
        .ok_or_else(|| EditorError::TrackNotFound {
            element: element_id,
            property: property.to_string(),
        })
}
