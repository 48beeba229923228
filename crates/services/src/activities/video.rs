use chrono::{DateTime, Duration, Utc};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use path_core::model::{ActivityOutcome, Level, NodeId};
use path_core::seed::{video_id, video_title_key};

//
// ─── WATCH STATE ───────────────────────────────────────────────────────────────
//

/// One opening of a video modal.
///
/// A video counts as watched once it has stayed open for the required
/// duration; playback position is not tracked.
#[derive(Debug, Clone)]
pub struct VideoWatch {
    node: NodeId,
    level: Level,
    opened_at: DateTime<Utc>,
    required: Duration,
}

impl VideoWatch {
    #[must_use]
    pub fn open(node: NodeId, level: Level, opened_at: DateTime<Utc>, required: Duration) -> Self {
        Self {
            node,
            level,
            opened_at,
            required,
        }
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn video_id(&self) -> &'static str {
        video_id(self.level)
    }

    #[must_use]
    pub fn title_key(&self) -> &'static str {
        video_title_key(self.level)
    }

    #[must_use]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Whether the "continue" button is available at `now`.
    #[must_use]
    pub fn is_watched(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.opened_at) >= self.required
    }

    /// Time left before the video counts as watched, never negative.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        let left = self.required - now.signed_duration_since(self.opened_at);
        left.max(Duration::zero())
    }

    /// Outcome of closing the modal at `now`.
    #[must_use]
    pub fn outcome(&self, now: DateTime<Utc>) -> ActivityOutcome {
        if self.is_watched(now) {
            ActivityOutcome::Success
        } else {
            ActivityOutcome::Failure
        }
    }
}

//
// ─── TIMER ─────────────────────────────────────────────────────────────────────
//

/// Background countdown that signals once when a video's required time is up.
///
/// Cancelling (or dropping) the timer aborts the countdown, so a modal that
/// was dismissed early never receives a late completion.
#[derive(Debug)]
pub struct WatchTimer {
    task: JoinHandle<()>,
    fired: oneshot::Receiver<()>,
    done: Option<bool>,
}

impl WatchTimer {
    /// Start the countdown. Must be called from inside a tokio runtime.
    #[must_use]
    pub fn start(required: std::time::Duration) -> Self {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            tokio::time::sleep(required).await;
            // The receiver may already be gone if the modal closed.
            let _ = tx.send(());
        });
        Self {
            task,
            fired: rx,
            done: None,
        }
    }

    /// Wait for the countdown. `true` if it completed, `false` if cancelled.
    pub async fn wait(&mut self) -> bool {
        if let Some(done) = self.done {
            return done;
        }
        let fired = (&mut self.fired).await.is_ok();
        self.done = Some(fired);
        fired
    }

    /// Non-blocking check whether the countdown has completed.
    pub fn has_fired(&mut self) -> bool {
        if let Some(done) = self.done {
            return done;
        }
        match self.fired.try_recv() {
            Ok(()) => {
                self.done = Some(true);
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.done = Some(false);
                false
            }
        }
    }

    /// Stop the countdown. A later `wait` returns `false`.
    pub fn cancel(&mut self) {
        self.task.abort();
        self.fired.close();
    }
}

impl Drop for WatchTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_core::seed::BASIC_VIDEO_NODE;
    use path_core::time::fixed_now;

    fn watch() -> VideoWatch {
        VideoWatch::open(BASIC_VIDEO_NODE, Level::Basic, fixed_now(), Duration::seconds(20))
    }

    #[test]
    fn closing_before_required_time_fails() {
        let video = watch();
        let now = fixed_now() + Duration::seconds(19);
        assert!(!video.is_watched(now));
        assert_eq!(video.remaining(now), Duration::seconds(1));
        assert_eq!(video.outcome(now), ActivityOutcome::Failure);
    }

    #[test]
    fn closing_after_required_time_succeeds() {
        let video = watch();
        let now = fixed_now() + Duration::seconds(20);
        assert!(video.is_watched(now));
        assert_eq!(video.remaining(now), Duration::zero());
        assert_eq!(video.outcome(now), ActivityOutcome::Success);
        assert_eq!(video.video_id(), "kCc8FmEb1nY");
    }

    #[tokio::test(start_paused = true)]
    async fn timer_fires_after_required_time() {
        let mut timer = WatchTimer::start(std::time::Duration::from_secs(20));
        assert!(!timer.has_fired());
        tokio::time::advance(std::time::Duration::from_secs(21)).await;
        assert!(timer.wait().await);
        assert!(timer.has_fired());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let mut timer = WatchTimer::start(std::time::Duration::from_secs(20));
        tokio::time::advance(std::time::Duration::from_secs(5)).await;
        timer.cancel();
        tokio::time::advance(std::time::Duration::from_secs(30)).await;
        assert!(!timer.wait().await);
        assert!(!timer.has_fired());
    }
}
