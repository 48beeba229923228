use std::fmt;

use chrono::Duration;
use path_core::model::{ActivityFamily, ActivityKind, ActivityOutcome, NodeId, PathSettings};
use path_core::seed::{quiz_bank, tutorial_steps};
use path_core::{Clock, Locale};
use storage::{ProgressSnapshot, ProgressStore};

use crate::activities::{
    AnswerFeedback, QuizProgress, QuizSession, TutorialProgress, TutorialSession, VideoWatch,
};
use crate::error::{QuizError, SessionError};
use crate::progression::{IgnoreReason, ProgressionController, TapOutcome, Transition};

/// The activity whose modal is currently on screen.
#[derive(Debug, Clone)]
pub enum ActiveActivity {
    Tutorial(TutorialSession),
    Video(VideoWatch),
    Quiz(QuizSession),
}

impl ActiveActivity {
    #[must_use]
    pub fn node(&self) -> NodeId {
        match self {
            ActiveActivity::Tutorial(t) => t.node(),
            ActiveActivity::Video(v) => v.node(),
            ActiveActivity::Quiz(q) => q.node(),
        }
    }

    #[must_use]
    pub fn family(&self) -> ActivityFamily {
        match self {
            ActiveActivity::Tutorial(_) => ActivityFamily::Tutorial,
            ActiveActivity::Video(_) => ActivityFamily::Video,
            ActiveActivity::Quiz(_) => ActivityFamily::Quiz,
        }
    }
}

/// One learner session: the path plus at most one open activity.
///
/// Owns the progression controller, so every path mutation goes through
/// here. Activity outcomes are reported to the controller when the
/// activity closes; a lockout immediately reopens the activity it points
/// back to.
pub struct PathSession {
    clock: Clock,
    settings: PathSettings,
    controller: ProgressionController,
    active: Option<ActiveActivity>,
}

impl PathSession {
    #[must_use]
    pub fn new(settings: PathSettings, clock: Clock) -> Self {
        Self {
            clock,
            settings,
            controller: ProgressionController::seeded(settings.locale()),
            active: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &PathSettings {
        &self.settings
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.settings.locale()
    }

    #[must_use]
    pub fn controller(&self) -> &ProgressionController {
        &self.controller
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.controller.snapshot()
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveActivity> {
        self.active.as_ref()
    }

    /// Move a fixed clock forward; a real-time clock ignores this.
    pub fn advance_clock(&mut self, delta: Duration) {
        self.clock.advance(delta);
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.settings = self.settings.with_locale(locale);
        self.controller.set_locale(locale);
        tracing::debug!(%locale, "locale changed");
    }

    /// Drop any open activity and start the path over.
    pub fn reset(&mut self) {
        self.active = None;
        self.controller.reset();
    }

    /// Tap a node. Opens its activity when the node is current.
    pub fn tap(&mut self, id: NodeId) -> TapOutcome {
        if let Some(active) = &self.active {
            tracing::debug!(node = %id, open = %active.node(), "tap while an activity is open");
            return TapOutcome::Ignored(IgnoreReason::ActivityOpen);
        }

        let outcome = self.controller.on_node_tapped(id);
        if let TapOutcome::Open { node, activity } = outcome {
            if let Err(err) = self.open_activity(node, activity) {
                tracing::error!(node = %node, %err, "failed to open activity");
                return TapOutcome::Ignored(IgnoreReason::Unavailable);
            }
        }
        outcome
    }

    fn open_activity(&mut self, node: NodeId, activity: ActivityKind) -> Result<(), SessionError> {
        let opened = match activity {
            ActivityKind::Tutorial => {
                ActiveActivity::Tutorial(TutorialSession::open(node, tutorial_steps())?)
            }
            ActivityKind::Video(level) => ActiveActivity::Video(VideoWatch::open(
                node,
                level,
                self.clock.now(),
                self.settings.video_required(),
            )),
            ActivityKind::Quiz(level) => {
                let bank = quiz_bank(level).map_err(QuizError::from)?;
                ActiveActivity::Quiz(QuizSession::open(
                    node,
                    bank,
                    self.settings.max_incorrect_attempts(),
                ))
            }
        };
        tracing::debug!(node = %node, %activity, "activity opened");
        self.active = Some(opened);
        Ok(())
    }

    /// Close the open activity and report `outcome` for it.
    fn finish(&mut self, node: NodeId, outcome: ActivityOutcome) -> Transition {
        self.active = None;
        let transition = self.controller.on_activity_finished(node, outcome);
        if let Some((node, activity)) = transition.reshow() {
            let reopenable = self
                .controller
                .store()
                .get(node)
                .is_some_and(|target| !target.is_locked());
            if !reopenable {
                tracing::debug!(node = %node, "reshow target is locked, not reopening");
            } else if let Err(err) = self.open_activity(node, activity) {
                tracing::error!(node = %node, %err, "failed to reopen activity");
            }
        }
        transition
    }

    /// Dismiss whatever is open, reporting the outcome it reached so far.
    pub fn close_activity(&mut self) -> Option<Transition> {
        let active = self.active.as_ref()?;
        let node = active.node();
        let outcome = match active {
            ActiveActivity::Tutorial(tutorial) => tutorial.outcome(),
            // The close button never counts as watching the video.
            ActiveActivity::Video(_) => ActivityOutcome::Failure,
            ActiveActivity::Quiz(quiz) => quiz.outcome(),
        };
        Some(self.finish(node, outcome))
    }

    fn wrong_activity(&self, expected: ActivityFamily) -> SessionError {
        match &self.active {
            None => SessionError::NoActivity,
            Some(active) => SessionError::WrongActivity {
                expected,
                open: active.family(),
            },
        }
    }

    fn tutorial_mut(&mut self) -> Result<&mut TutorialSession, SessionError> {
        match self.active {
            Some(ActiveActivity::Tutorial(ref mut tutorial)) => Ok(tutorial),
            _ => Err(self.wrong_activity(ActivityFamily::Tutorial)),
        }
    }

    fn video(&self) -> Result<&VideoWatch, SessionError> {
        match self.active {
            Some(ActiveActivity::Video(ref video)) => Ok(video),
            _ => Err(self.wrong_activity(ActivityFamily::Video)),
        }
    }

    fn quiz_mut(&mut self) -> Result<&mut QuizSession, SessionError> {
        match self.active {
            Some(ActiveActivity::Quiz(ref mut quiz)) => Ok(quiz),
            _ => Err(self.wrong_activity(ActivityFamily::Quiz)),
        }
    }

    //
    // ─── TUTORIAL ──────────────────────────────────────────────────────────────
    //

    /// Next page. Returns the transition once the last page is passed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if no tutorial is open.
    pub fn tutorial_next(&mut self) -> Result<Option<Transition>, SessionError> {
        let tutorial = self.tutorial_mut()?;
        match tutorial.next()? {
            TutorialProgress::Step(_) => Ok(None),
            TutorialProgress::Finished => {
                let node = tutorial.node();
                Ok(Some(self.finish(node, ActivityOutcome::Success)))
            }
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError` if no tutorial is open.
    pub fn tutorial_previous(&mut self) -> Result<usize, SessionError> {
        Ok(self.tutorial_mut()?.previous()?)
    }

    /// # Errors
    ///
    /// Returns `SessionError` if no tutorial is open.
    pub fn tutorial_skip(&mut self) -> Result<Transition, SessionError> {
        let tutorial = self.tutorial_mut()?;
        tutorial.skip()?;
        let node = tutorial.node();
        Ok(self.finish(node, ActivityOutcome::Skipped))
    }

    //
    // ─── VIDEO ─────────────────────────────────────────────────────────────────
    //

    /// Time left before "continue" becomes available.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if no video is open.
    pub fn video_remaining(&self) -> Result<Duration, SessionError> {
        Ok(self.video()?.remaining(self.clock.now()))
    }

    /// Press "continue". Does nothing until the required time has passed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if no video is open.
    pub fn video_continue(&mut self) -> Result<Option<Transition>, SessionError> {
        let video = self.video()?;
        let now = self.clock.now();
        if !video.is_watched(now) {
            tracing::debug!(node = %video.node(), "continue pressed before video was watched");
            return Ok(None);
        }
        let (node, outcome) = (video.node(), video.outcome(now));
        Ok(Some(self.finish(node, outcome)))
    }

    /// Close the player without completing the video.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if no video is open.
    pub fn video_close(&mut self) -> Result<Transition, SessionError> {
        let node = self.video()?.node();
        Ok(self.finish(node, ActivityOutcome::Failure))
    }

    //
    // ─── QUIZ ──────────────────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `SessionError` if no quiz is open or the answer is rejected.
    pub fn quiz_answer(&mut self, option: usize) -> Result<AnswerFeedback, SessionError> {
        Ok(self.quiz_mut()?.answer(option)?)
    }

    /// # Errors
    ///
    /// Returns `SessionError` if no quiz is open or nothing was checked.
    pub fn quiz_proceed(&mut self) -> Result<QuizProgress, SessionError> {
        Ok(self.quiz_mut()?.proceed()?)
    }

    /// Close the quiz modal, reporting pass, lockout, or early exit.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if no quiz is open.
    pub fn quiz_close(&mut self) -> Result<Transition, SessionError> {
        let quiz = self.quiz_mut()?;
        let (node, outcome) = (quiz.node(), quiz.outcome());
        Ok(self.finish(node, outcome))
    }
}

impl fmt::Debug for PathSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathSession")
            .field("settings", &self.settings)
            .field("active", &self.active.as_ref().map(ActiveActivity::family))
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use path_core::model::{Level, PathSettingsDraft};
    use path_core::seed::{BASIC_QUIZ_NODE, BASIC_VIDEO_NODE, TUTORIAL_NODE};
    use path_core::time::fixed_clock;

    fn session() -> PathSession {
        let settings = PathSettingsDraft {
            locale: Some(Locale::En),
            ..PathSettingsDraft::default()
        }
        .validate()
        .unwrap();
        PathSession::new(settings, fixed_clock())
    }

    #[test]
    fn tapping_current_node_opens_its_activity() {
        let mut session = session();
        let outcome = session.tap(TUTORIAL_NODE);
        assert!(matches!(outcome, TapOutcome::Open { .. }));
        assert_eq!(
            session.active().map(ActiveActivity::family),
            Some(ActivityFamily::Tutorial)
        );
        assert_eq!(
            session.tap(TUTORIAL_NODE),
            TapOutcome::Ignored(IgnoreReason::ActivityOpen)
        );
    }

    #[test]
    fn tutorial_walkthrough_completes_node() {
        let mut session = session();
        session.tap(TUTORIAL_NODE);
        for _ in 0..3 {
            assert_eq!(session.tutorial_next().unwrap(), None);
        }
        let transition = session.tutorial_next().unwrap().unwrap();
        assert!(!transition.is_noop());
        assert!(session.active().is_none());
        assert_eq!(session.snapshot().current, Some(BASIC_VIDEO_NODE));
    }

    #[test]
    fn skipping_tutorial_keeps_it_current() {
        let mut session = session();
        session.tap(TUTORIAL_NODE);
        session.tutorial_skip().unwrap();
        assert_eq!(session.snapshot().current, Some(TUTORIAL_NODE));
    }

    #[test]
    fn video_requires_full_watch() {
        let mut session = session();
        session.tap(TUTORIAL_NODE);
        while session.tutorial_next().unwrap().is_none() {}

        session.tap(BASIC_VIDEO_NODE);
        session.advance_clock(Duration::seconds(10));
        assert_eq!(session.video_continue().unwrap(), None);
        assert_eq!(session.video_remaining().unwrap(), Duration::seconds(10));

        session.advance_clock(Duration::seconds(10));
        let transition = session.video_continue().unwrap().unwrap();
        assert!(!transition.is_noop());
        assert_eq!(session.snapshot().current, Some(BASIC_QUIZ_NODE));
    }

    #[test]
    fn lockout_reopens_basic_video() {
        let mut session = session();
        session.tap(TUTORIAL_NODE);
        while session.tutorial_next().unwrap().is_none() {}
        session.tap(BASIC_VIDEO_NODE);
        session.advance_clock(Duration::seconds(20));
        session.video_continue().unwrap();

        session.tap(BASIC_QUIZ_NODE);
        // Answer key for the first basic question is option 2.
        for _ in 0..2 {
            session.quiz_answer(0).unwrap();
            session.quiz_proceed().unwrap();
        }
        assert_eq!(session.quiz_answer(0).unwrap(), AnswerFeedback::LockedOut);
        let transition = session.quiz_close().unwrap();

        assert_eq!(
            transition.reshow(),
            Some((BASIC_VIDEO_NODE, ActivityKind::Video(Level::Basic)))
        );
        assert!(matches!(session.active(), Some(ActiveActivity::Video(_))));
        let snapshot = session.snapshot();
        assert!(!snapshot.node(BASIC_VIDEO_NODE).unwrap().completed);
        assert!(snapshot.node(BASIC_QUIZ_NODE).unwrap().locked);
    }

    #[test]
    fn wrong_activity_is_reported() {
        let mut session = session();
        assert_eq!(session.quiz_answer(0), Err(SessionError::NoActivity));
        session.tap(TUTORIAL_NODE);
        assert_eq!(
            session.video_close(),
            Err(SessionError::WrongActivity {
                expected: ActivityFamily::Video,
                open: ActivityFamily::Tutorial
            })
        );
    }

    #[test]
    fn closing_video_early_keeps_node_open() {
        let mut session = session();
        session.tap(TUTORIAL_NODE);
        while session.tutorial_next().unwrap().is_none() {}
        session.tap(BASIC_VIDEO_NODE);
        session.advance_clock(Duration::seconds(30));
        let transition = session.close_activity().unwrap();
        assert!(transition.is_noop());
        assert_eq!(session.snapshot().current, Some(BASIC_VIDEO_NODE));
    }

    #[test]
    fn reset_closes_open_activity() {
        let mut session = session();
        session.tap(TUTORIAL_NODE);
        session.reset();
        assert!(session.active().is_none());
        assert_eq!(session.snapshot().current, Some(TUTORIAL_NODE));
    }
}
