//! The two-pick measurement session.

use mesh_measure::{MeasureError, Measurement, measure};
use mesh_snap::Snap;
use nalgebra::Point3;
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{MeasurementReport, Pick};

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PickState {
    /// Nothing picked.
    #[default]
    NoPick,
    /// First feature picked, waiting for the second.
    FirstPicked,
    /// Both features picked and measured.
    SecondPicked,
}

impl PickState {
    /// Check if a measurement is complete.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::SecondPicked)
    }
}

/// Which pick slot an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PickSlot {
    /// The first pick.
    First,
    /// The second pick.
    Second,
}

/// State change notifications for UI layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SessionEvent {
    /// A pick was stored in a slot.
    PickCommitted(PickSlot),
    /// The second pick was measured against the first.
    MeasurementCompleted,
    /// The second pick became the first.
    RepickedFirst,
    /// The second pick was dropped.
    RepickedSecond,
    /// Everything was dropped.
    Cleared,
}

/// Result of a commit action.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// The hover candidate was stored in the given slot.
    Committed(PickSlot),
    /// There was no candidate to commit.
    Ignored,
    /// The candidate could not be measured against the first pick and was
    /// not stored.
    Rejected(MeasureError),
}

/// Sequences two picks into one measurement.
///
/// The host feeds pointer moves through [`hover`](Self::hover) (with the
/// classification of the hit, or `None`) and confirm actions through
/// [`commit`](Self::commit). The classification stored at hover time is
/// what gets committed, so the result matches what was previewed.
///
/// # Example
///
/// ```
/// use mesh_pick::{CommitOutcome, PickSession, PickSlot, PickState};
/// use mesh_snap::{DetectionRadius, Snap};
/// use mesh_types::{Feature, Point3};
///
/// fn vertex(x: f64, y: f64) -> Snap {
///     let p = Point3::new(x, y, 0.0);
///     Snap {
///         feature: Feature::Vertex(p),
///         intersect_point: p,
///         face_normal: None,
///         node_id: 1,
///         fragment_id: None,
///         viewport_index: None,
///         radius: DetectionRadius { snap: 0.1, marker: 0.05 },
///     }
/// }
///
/// let mut session = PickSession::new();
/// session.hover(Some(vertex(0.0, 0.0)));
/// assert_eq!(session.commit(), CommitOutcome::Committed(PickSlot::First));
///
/// session.hover(Some(vertex(3.0, 4.0)));
/// assert!((session.preview().unwrap().distance().unwrap() - 5.0).abs() < 1e-10);
/// assert_eq!(session.commit(), CommitOutcome::Committed(PickSlot::Second));
///
/// assert_eq!(session.state(), PickState::SecondPicked);
/// let report = session.report().unwrap();
/// assert!((report.delta_y.unwrap() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PickSession {
    first: Option<Pick>,
    second: Option<Pick>,
    candidate: Option<Pick>,
    preview: Option<Measurement>,
    measurement: Option<Measurement>,
    events: Vec<SessionEvent>,
}

impl PickSession {
    /// Start an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> PickState {
        match (&self.first, &self.second) {
            (None, _) => PickState::NoPick,
            (Some(_), None) => PickState::FirstPicked,
            (Some(_), Some(_)) => PickState::SecondPicked,
        }
    }

    /// First pick, if any.
    #[must_use]
    pub const fn first(&self) -> Option<&Pick> {
        self.first.as_ref()
    }

    /// Second pick, if any.
    #[must_use]
    pub const fn second(&self) -> Option<&Pick> {
        self.second.as_ref()
    }

    /// Classification of the last hovered hit, awaiting commit.
    #[must_use]
    pub const fn candidate(&self) -> Option<&Pick> {
        self.candidate.as_ref()
    }

    /// Live measurement from the first pick to the hover position.
    #[must_use]
    pub const fn preview(&self) -> Option<&Measurement> {
        self.preview.as_ref()
    }

    /// Committed measurement, once both picks are in.
    #[must_use]
    pub const fn measurement(&self) -> Option<&Measurement> {
        self.measurement.as_ref()
    }

    /// Viewport the classifier should be restricted to.
    ///
    /// Set while waiting for the second pick of 2D content, so both picks
    /// come from the same viewport.
    #[must_use]
    pub fn viewport_lock(&self) -> Option<u32> {
        match self.state() {
            PickState::FirstPicked => self.first.as_ref().and_then(|p| p.viewport_index),
            PickState::NoPick | PickState::SecondPicked => None,
        }
    }

    /// Record the classification of the latest pointer position.
    ///
    /// While waiting for the second pick this also refreshes the preview
    /// measurement. Nothing is committed. Returns the preview.
    pub fn hover(&mut self, snap: Option<Snap>) -> Option<&Measurement> {
        self.candidate = snap.map(Pick::from);
        self.refresh_preview();
        self.preview.as_ref()
    }

    /// Record a pointer position that snapped to nothing.
    ///
    /// While waiting for the second pick, the preview measures from the
    /// first pick to the raw cursor point as if it were a vertex.
    pub fn hover_cursor(&mut self, point: Point3<f64>) -> Option<&Measurement> {
        self.candidate = None;
        self.preview = match (self.state(), &self.first) {
            (PickState::FirstPicked, Some(first)) => {
                measure(&first.target(), &Pick::cursor(point).target()).ok()
            }
            _ => None,
        };
        self.preview.as_ref()
    }

    /// Commit the current hover candidate.
    ///
    /// - No pick yet: the candidate becomes the first pick.
    /// - First pick only: the candidate is measured against it and becomes
    ///   the second pick. Identical features and unmeasurable pairs are
    ///   rejected and nothing changes.
    /// - Both picks: the second pick becomes the first and the candidate
    ///   stays pending for the next commit.
    pub fn commit(&mut self) -> CommitOutcome {
        let Some(candidate) = self.candidate.take() else {
            return CommitOutcome::Ignored;
        };

        match (self.first.take(), self.second.take()) {
            (None, _) => {
                info!(kind = %candidate.kind(), "first pick committed");
                self.first = Some(candidate);
                self.preview = None;
                self.events.push(SessionEvent::PickCommitted(PickSlot::First));
                CommitOutcome::Committed(PickSlot::First)
            }
            (Some(first), None) => match measure(&first.target(), &candidate.target()) {
                Ok(measurement) => {
                    info!(
                        first = %first.kind(),
                        second = %candidate.kind(),
                        "second pick committed"
                    );
                    self.first = Some(first);
                    self.second = Some(candidate);
                    self.measurement = Some(measurement);
                    self.preview = None;
                    self.events.push(SessionEvent::PickCommitted(PickSlot::Second));
                    self.events.push(SessionEvent::MeasurementCompleted);
                    CommitOutcome::Committed(PickSlot::Second)
                }
                Err(err) => {
                    debug!(error = %err, "second pick rejected");
                    self.first = Some(first);
                    self.candidate = Some(candidate);
                    CommitOutcome::Rejected(err)
                }
            },
            (Some(_), Some(second)) => {
                info!(kind = %second.kind(), "restarting from previous second pick");
                self.first = Some(second);
                self.measurement = None;
                self.candidate = Some(candidate);
                self.refresh_preview();
                self.events.push(SessionEvent::PickCommitted(PickSlot::First));
                CommitOutcome::Committed(PickSlot::First)
            }
        }
    }

    /// Pick the first feature again.
    ///
    /// With both picks in, the second pick is promoted to first. With only
    /// a first pick, the session is cleared.
    pub fn repick_first(&mut self) {
        match self.state() {
            PickState::SecondPicked => {
                info!("second pick promoted to first");
                self.first = self.second.take();
                self.measurement = None;
                self.refresh_preview();
                self.events.push(SessionEvent::RepickedFirst);
            }
            PickState::FirstPicked => self.clear(),
            PickState::NoPick => {}
        }
    }

    /// Pick the second feature again, keeping the first.
    pub fn repick_second(&mut self) {
        if self.second.take().is_some() {
            info!("second pick dropped");
            self.measurement = None;
            self.refresh_preview();
            self.events.push(SessionEvent::RepickedSecond);
        }
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        info!("pick session cleared");
        self.first = None;
        self.second = None;
        self.candidate = None;
        self.preview = None;
        self.measurement = None;
        self.events.push(SessionEvent::Cleared);
    }

    /// Take the notifications raised since the last call.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Flat summary of the committed measurement.
    #[must_use]
    pub fn report(&self) -> Option<MeasurementReport> {
        let (first, second, measurement) = (
            self.first.as_ref()?,
            self.second.as_ref()?,
            self.measurement.as_ref()?,
        );
        Some(MeasurementReport::new(
            first.kind(),
            second.kind(),
            measurement,
        ))
    }

    fn refresh_preview(&mut self) {
        self.preview = match (self.state(), &self.first, &self.candidate) {
            (PickState::FirstPicked, Some(first), Some(candidate)) => {
                measure(&first.target(), &candidate.target()).ok()
            }
            _ => None,
        };
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use mesh_snap::DetectionRadius;
    use mesh_types::{EdgeFeature, Feature};

    fn snap(feature: Feature, at: Point3<f64>, viewport_index: Option<u32>) -> Snap {
        Snap {
            feature,
            intersect_point: at,
            face_normal: None,
            node_id: 1,
            fragment_id: None,
            viewport_index,
            radius: DetectionRadius {
                snap: 0.1,
                marker: 0.05,
            },
        }
    }

    fn vertex(x: f64, y: f64, z: f64) -> Snap {
        let p = Point3::new(x, y, z);
        snap(Feature::Vertex(p), p, None)
    }

    fn measured(a: Snap, b: Snap) -> PickSession {
        let mut session = PickSession::new();
        session.hover(Some(a));
        session.commit();
        session.hover(Some(b));
        session.commit();
        session
    }

    #[test]
    fn commit_without_candidate_is_ignored() {
        let mut session = PickSession::new();
        assert_eq!(session.commit(), CommitOutcome::Ignored);
        session.hover(None);
        assert_eq!(session.commit(), CommitOutcome::Ignored);
        assert_eq!(session.state(), PickState::NoPick);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn identical_second_pick_is_rejected() {
        let mut session = PickSession::new();
        session.hover(Some(vertex(1.0, 1.0, 1.0)));
        session.commit();
        assert!(session.hover(Some(vertex(1.0, 1.0, 1.0))).is_none());
        assert_eq!(
            session.commit(),
            CommitOutcome::Rejected(MeasureError::IdenticalFeatures)
        );
        assert_eq!(session.state(), PickState::FirstPicked);
        assert!(session.measurement().is_none());
        assert!(session.candidate().is_some());
    }

    #[test]
    fn cursor_rubber_band_does_not_commit() {
        let mut session = PickSession::new();
        assert!(session.hover_cursor(Point3::new(5.0, 0.0, 0.0)).is_none());
        session.hover(Some(vertex(0.0, 0.0, 0.0)));
        session.commit();

        let preview = session.hover_cursor(Point3::new(0.0, 2.0, 0.0)).unwrap();
        assert!((preview.distance().unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(session.commit(), CommitOutcome::Ignored);
        assert_eq!(session.state(), PickState::FirstPicked);
    }

    #[test]
    fn commit_after_measurement_restarts_from_second() {
        let mut session = measured(vertex(0.0, 0.0, 0.0), vertex(3.0, 4.0, 0.0));
        session.drain_events();

        session.hover(Some(vertex(3.0, 4.0, 12.0)));
        assert_eq!(session.commit(), CommitOutcome::Committed(PickSlot::First));
        assert_eq!(session.state(), PickState::FirstPicked);
        assert_eq!(
            session.first().unwrap().feature,
            Feature::Vertex(Point3::new(3.0, 4.0, 0.0))
        );
        // The restart classification is reused for the next commit.
        assert!((session.preview().unwrap().distance().unwrap() - 12.0).abs() < 1e-12);
        assert_eq!(session.commit(), CommitOutcome::Committed(PickSlot::Second));
        assert!((session.report().unwrap().distance.unwrap() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn repick_rules() {
        let mut session = measured(vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0));
        session.repick_second();
        assert_eq!(session.state(), PickState::FirstPicked);
        assert!(session.report().is_none());

        let mut session = measured(vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0));
        session.repick_first();
        assert_eq!(session.state(), PickState::FirstPicked);
        assert_eq!(
            session.first().unwrap().feature,
            Feature::Vertex(Point3::new(1.0, 0.0, 0.0))
        );

        session.repick_first();
        assert_eq!(session.state(), PickState::NoPick);

        session.repick_second();
        assert_eq!(session.state(), PickState::NoPick);
    }

    #[test]
    fn events_follow_transitions() {
        let mut session = measured(vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0));
        session.repick_second();
        session.clear();
        assert_eq!(
            session.drain_events(),
            vec![
                SessionEvent::PickCommitted(PickSlot::First),
                SessionEvent::PickCommitted(PickSlot::Second),
                SessionEvent::MeasurementCompleted,
                SessionEvent::RepickedSecond,
                SessionEvent::Cleared,
            ]
        );
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn viewport_lock_follows_first_pick() {
        let edge = |y: f64| {
            Feature::Edge(EdgeFeature::segment(
                Point3::new(0.0, y, 0.0),
                Point3::new(1.0, y, 0.0),
            ))
        };
        let mut session = PickSession::new();
        session.hover(Some(snap(edge(0.0), Point3::new(0.5, 0.0, 0.0), Some(2))));
        assert_eq!(session.viewport_lock(), None);
        session.commit();
        assert_eq!(session.viewport_lock(), Some(2));

        session.hover(Some(snap(edge(1.0), Point3::new(0.5, 1.0, 0.0), Some(2))));
        session.commit();
        assert_eq!(session.viewport_lock(), None);

        session.repick_second();
        assert_eq!(session.viewport_lock(), Some(2));
        session.clear();
        assert_eq!(session.viewport_lock(), None);
    }
}
