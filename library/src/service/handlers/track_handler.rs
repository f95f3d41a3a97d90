//! Animation track management: one track per CSS property per element.

use std::sync::{Arc, RwLock};

use log::debug;
use uuid::Uuid;

use crate::catalog;
use crate::error::EditorError;
use crate::model::keyframe::Keyframe;
use crate::model::project::Project;
use crate::model::property::PropertyValue;
use crate::model::track::Track;
use crate::service::handlers::lock_helpers::{with_project_read, with_project_write};

pub struct TrackHandler;

impl TrackHandler {
    /// Add a track for `property` to an element.
    ///
    /// Property names are unique within an element; a second track for an
    /// already-tracked property is rejected with `TrackAlreadyExists`, not
    /// silently ignored. The new track is seeded with a keyframe at time 0
    /// holding the element's current style value (catalog default when the
    /// style has none), so the timeline starts from what the canvas shows.
    pub fn add_track(
        project: &Arc<RwLock<Project>>,
        element_id: Uuid,
        property: &str,
        duration: f64,
    ) -> Result<(), EditorError> {
        with_project_write(project, |proj| {
            let element = proj
                .get_element_mut(element_id)
                .ok_or(EditorError::ElementNotFound(element_id))?;

            if element.animation.has_track(property) {
                return Err(EditorError::TrackAlreadyExists {
                    element: element_id,
                    property: property.to_string(),
                });
            }

            let initial = element
                .style
                .get(property)
                .cloned()
                .or_else(|| catalog::property_config(property).map(|p| p.default_value.to_value()))
                .unwrap_or_else(|| PropertyValue::from(0.0));

            let mut track = Track::new(property, duration);
            track.keyframes.push(Keyframe::new(0.0, initial));
            element.animation.tracks.push(track);
            proj.touch();
            debug!("Added '{property}' track to element {element_id}");
            Ok(())
        })
    }

    pub fn remove_track(
        project: &Arc<RwLock<Project>>,
        element_id: Uuid,
        property: &str,
    ) -> Result<(), EditorError> {
        with_project_write(project, |proj| {
            let element = proj
                .get_element_mut(element_id)
                .ok_or(EditorError::ElementNotFound(element_id))?;

            let before = element.animation.tracks.len();
            element.animation.tracks.retain(|t| t.property != property);
            if element.animation.tracks.len() == before {
                return Err(EditorError::TrackNotFound {
                    element: element_id,
                    property: property.to_string(),
                });
            }
            proj.touch();
            debug!("Removed '{property}' track from element {element_id}");
            Ok(())
        })
    }

    /// Tracks of an element. Reads never fail: a missing element yields an
    /// empty list so UI layers can render "no animation".
    pub fn get_tracks(
        project: &Arc<RwLock<Project>>,
        element_id: Uuid,
    ) -> Result<Vec<Track>, EditorError> {
        with_project_read(project, |proj| {
            Ok(proj
                .get_element(element_id)
                .map(|e| e.animation.tracks.clone())
                .unwrap_or_default())
        })
    }

    /// Propagate a timeline duration change to every track of an element.
    /// Keyframe times are relative fractions and are left untouched.
    pub fn set_track_durations(
        project: &Arc<RwLock<Project>>,
        element_id: Uuid,
        duration: f64,
    ) -> Result<(), EditorError> {
        with_project_write(project, |proj| {
            let element = proj
                .get_element_mut(element_id)
                .ok_or(EditorError::ElementNotFound(element_id))?;
            element.animation.duration = duration;
            for track in &mut element.animation.tracks {
                track.duration = duration;
            }
            proj.touch();
            Ok(())
        })
    }
}
