//! # Virtual Stick
//!
//! Turns one finger's drag inside a UI region into a normalized `Vec2`.
//!
//! The stick follows exactly one touch at a time:
//! 1. A drag beginning in the region latches its touch id and start position.
//! 2. Every frame the latched touch is re-read and mapped to a deflection.
//! 3. Lifting the latched finger (or lifting every finger) releases the latch.
//!
//! Two mappings are available, see [`StickSettings::uses_delta_input`].

use bevy::prelude::*;

use crate::prelude::stick_settings::StickSettings;
use crate::prelude::touch_frame::TouchSample;

/// Anything that exposes a stick deflection.
///
/// Presenters and gameplay code read through this instead of a concrete stick type.
pub trait StickInputSource {
    /// Current deflection, both axes in `-1.0..=1.0` and length at most `1.0`.
    fn stick_input(&self) -> Vec2;
}

/// The touch a stick is following and where it started.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct TrackingSession {
    pub touch_id: u64,
    pub origin: Vec2,
}

#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct VirtualStick {
    settings: StickSettings,
    input: Vec2,
    session: Option<TrackingSession>,
}

impl VirtualStick {
    pub fn new(settings: StickSettings) -> Self {
        Self {
            settings,
            input: Vec2::ZERO,
            session: None,
        }
    }

    pub fn settings(&self) -> &StickSettings {
        &self.settings
    }

    pub fn session(&self) -> Option<&TrackingSession> {
        self.session.as_ref()
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Latches onto `touch_id` unless a finger is already tracked.
    ///
    /// Ignored when no touches are active or `touch_id` is not among them.
    pub fn on_drag_begin(&mut self, touch_id: u64, touches: &[TouchSample]) {
        if self.session.is_some() {
            return;
        }
        let Some(touch) = find_touch(touches, touch_id) else { return; };

        self.session = Some(TrackingSession {
            touch_id,
            origin: touch.position,
        });
        debug!("virtual stick latched touch {touch_id} at {}", touch.position);
    }

    /// Recomputes the input from the current touches. Call once per frame.
    pub fn tick(&mut self, touches: &[TouchSample]) {
        if touches.is_empty() {
            self.reset();
            return;
        }

        let Some(session) = self.session else {
            self.input = Vec2::ZERO;
            return;
        };
        // The latched finger is gone but its end event hasn't arrived yet.
        let Some(touch) = find_touch(touches, session.touch_id) else {
            self.input = Vec2::ZERO;
            return;
        };

        let raw = if self.settings.uses_delta_input {
            touch.delta
        } else {
            touch.position - session.origin
        };
        self.input = normalized_deflection(raw, self.settings.active_limit());
    }

    /// Releases the latch if `touch_id` is the tracked finger.
    ///
    /// Ends from other fingers are ignored, as are ends arriving when no touch is active;
    /// the next [`tick`](Self::tick) resets the stick in that case.
    pub fn on_drag_end(&mut self, touch_id: u64, touches: &[TouchSample]) {
        if touches.is_empty() {
            return;
        }
        let Some(session) = self.session else { return; };
        if session.touch_id != touch_id {
            return;
        }

        self.session = None;
        debug!("virtual stick released touch {touch_id}");
    }

    fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            debug!("virtual stick dropped touch {} with no touches left", session.touch_id);
        }
        self.input = Vec2::ZERO;
    }
}

impl StickInputSource for VirtualStick {
    fn stick_input(&self) -> Vec2 {
        self.input
    }
}

fn find_touch(touches: &[TouchSample], touch_id: u64) -> Option<&TouchSample> {
    touches.iter().find(|touch| touch.id == touch_id)
}

/// Caps `raw` at length `limit` without turning it, then scales it into the unit circle.
///
/// Zero, non-finite input or a non-positive limit yields `Vec2::ZERO`.
pub fn normalized_deflection(raw: Vec2, limit: f32) -> Vec2 {
    if !raw.is_finite() || !(limit > f32::EPSILON) {
        return Vec2::ZERO;
    }

    let length = raw.length();
    if length <= limit {
        raw / limit
    } else if length.is_finite() {
        raw / length
    } else {
        // Squaring overflowed; shrink into range first to keep the direction.
        (raw / raw.abs().max_element()).normalize_or_zero()
    }
}
