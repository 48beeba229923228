use path_core::model::{ActivityOutcome, NodeId, TutorialStep};

use crate::error::TutorialError;

/// Result of pressing "next".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialProgress {
    Step(usize),
    /// "Next" on the last page finishes the tutorial.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TutorialState {
    Open,
    Finished,
    Skipped,
}

/// Paged onboarding walkthrough.
#[derive(Debug, Clone)]
pub struct TutorialSession {
    node: NodeId,
    steps: Vec<TutorialStep>,
    current: usize,
    state: TutorialState,
}

impl TutorialSession {
    /// # Errors
    ///
    /// Returns `TutorialError::NoSteps` if `steps` is empty.
    pub fn open(node: NodeId, steps: Vec<TutorialStep>) -> Result<Self, TutorialError> {
        if steps.is_empty() {
            return Err(TutorialError::NoSteps);
        }
        Ok(Self {
            node,
            steps,
            current: 0,
            state: TutorialState::Open,
        })
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn step_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn current_step(&self) -> &TutorialStep {
        &self.steps[self.current]
    }

    fn ensure_open(&self) -> Result<(), TutorialError> {
        match self.state {
            TutorialState::Open => Ok(()),
            TutorialState::Finished | TutorialState::Skipped => Err(TutorialError::Closed),
        }
    }

    /// # Errors
    ///
    /// Returns `TutorialError::Closed` after the tutorial was finished or skipped.
    pub fn next(&mut self) -> Result<TutorialProgress, TutorialError> {
        self.ensure_open()?;
        if self.current + 1 < self.steps.len() {
            self.current += 1;
            Ok(TutorialProgress::Step(self.current))
        } else {
            self.state = TutorialState::Finished;
            Ok(TutorialProgress::Finished)
        }
    }

    /// Go back one page; stays put on the first page.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::Closed` after the tutorial was finished or skipped.
    pub fn previous(&mut self) -> Result<usize, TutorialError> {
        self.ensure_open()?;
        self.current = self.current.saturating_sub(1);
        Ok(self.current)
    }

    /// # Errors
    ///
    /// Returns `TutorialError::Closed` after the tutorial was finished or skipped.
    pub fn skip(&mut self) -> Result<(), TutorialError> {
        self.ensure_open()?;
        self.state = TutorialState::Skipped;
        Ok(())
    }

    /// Closing without reaching the end counts as a skip.
    #[must_use]
    pub fn outcome(&self) -> ActivityOutcome {
        match self.state {
            TutorialState::Finished => ActivityOutcome::Success,
            TutorialState::Open | TutorialState::Skipped => ActivityOutcome::Skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_core::seed::{TUTORIAL_NODE, tutorial_steps};

    fn session() -> TutorialSession {
        TutorialSession::open(TUTORIAL_NODE, tutorial_steps()).unwrap()
    }

    #[test]
    fn next_through_every_page_finishes() {
        let mut tutorial = session();
        assert_eq!(tutorial.next().unwrap(), TutorialProgress::Step(1));
        assert_eq!(tutorial.next().unwrap(), TutorialProgress::Step(2));
        assert_eq!(tutorial.next().unwrap(), TutorialProgress::Step(3));
        assert_eq!(tutorial.next().unwrap(), TutorialProgress::Finished);
        assert_eq!(tutorial.outcome(), ActivityOutcome::Success);
        assert_eq!(tutorial.next(), Err(TutorialError::Closed));
    }

    #[test]
    fn previous_stops_at_first_page() {
        let mut tutorial = session();
        assert_eq!(tutorial.previous().unwrap(), 0);
        tutorial.next().unwrap();
        assert_eq!(tutorial.previous().unwrap(), 0);
        assert_eq!(tutorial.current_step().title_key, "tutorialStep1Title");
    }

    #[test]
    fn skip_and_early_close_report_skipped() {
        let mut tutorial = session();
        assert_eq!(tutorial.outcome(), ActivityOutcome::Skipped);
        tutorial.skip().unwrap();
        assert_eq!(tutorial.outcome(), ActivityOutcome::Skipped);
    }

    #[test]
    fn empty_tutorial_is_rejected() {
        let err = TutorialSession::open(TUTORIAL_NODE, Vec::new()).unwrap_err();
        assert_eq!(err, TutorialError::NoSteps);
    }
}
