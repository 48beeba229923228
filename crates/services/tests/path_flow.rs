use path_core::Locale;
use path_core::model::{ActivityKind, Level, NodeId, PathSettings};
use path_core::seed::{
    ADVANCED_QUIZ_NODE, ADVANCED_VIDEO_NODE, BASIC_QUIZ_NODE, BASIC_VIDEO_NODE, TUTORIAL_NODE,
};
use path_core::time::fixed_clock;
use services::{
    ActiveActivity, AnswerFeedback, PathSession, ProgressEvent, QuizProgress, TapOutcome,
    WatchTimer,
};

const BASIC_KEY: [usize; 6] = [2, 0, 1, 3, 1, 2];
const ADVANCED_KEY: [usize; 6] = [3, 1, 0, 3, 1, 2];

fn session() -> PathSession {
    PathSession::new(PathSettings::default().with_locale(Locale::En), fixed_clock())
}

fn locked(session: &PathSession, id: NodeId) -> bool {
    session.snapshot().node(id).unwrap().locked
}

fn completed(session: &PathSession, id: NodeId) -> bool {
    session.snapshot().node(id).unwrap().completed
}

fn finish_tutorial(session: &mut PathSession) {
    assert!(matches!(session.tap(TUTORIAL_NODE), TapOutcome::Open { .. }));
    while session.tutorial_next().unwrap().is_none() {}
}

fn watch_video(session: &mut PathSession, node: NodeId) {
    assert!(matches!(session.tap(node), TapOutcome::Open { .. }));
    let required = session.settings().video_required();
    session.advance_clock(required);
    assert!(session.video_continue().unwrap().is_some());
}

fn pass_quiz(session: &mut PathSession, node: NodeId, key: &[usize]) -> services::Transition {
    assert!(matches!(session.tap(node), TapOutcome::Open { .. }));
    for correct in key {
        assert_eq!(session.quiz_answer(*correct).unwrap(), AnswerFeedback::Correct);
        session.quiz_proceed().unwrap();
    }
    session.quiz_close().unwrap()
}

#[test]
fn fresh_session_unlocks_only_the_tutorial() {
    let session = session();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.current, Some(TUTORIAL_NODE));
    assert!(!snapshot.all_completed);
    for node in &snapshot.nodes[1..] {
        assert!(node.locked, "{} should start locked", node.id);
    }
}

#[test]
fn finishing_tutorial_unlocks_basic_video_only() {
    let mut session = session();
    finish_tutorial(&mut session);

    assert!(completed(&session, TUTORIAL_NODE));
    assert!(!locked(&session, BASIC_VIDEO_NODE));
    for id in [BASIC_QUIZ_NODE, ADVANCED_VIDEO_NODE, ADVANCED_QUIZ_NODE] {
        assert!(locked(&session, id));
        assert!(!completed(&session, id));
    }
}

#[test]
fn full_video_watch_unlocks_basic_quiz() {
    let mut session = session();
    finish_tutorial(&mut session);
    watch_video(&mut session, BASIC_VIDEO_NODE);

    assert!(completed(&session, BASIC_VIDEO_NODE));
    assert!(!locked(&session, BASIC_QUIZ_NODE));
}

#[test]
fn mixed_misses_on_basic_quiz_send_learner_back_to_video() {
    let mut session = session();
    finish_tutorial(&mut session);
    watch_video(&mut session, BASIC_VIDEO_NODE);

    session.tap(BASIC_QUIZ_NODE);
    session.quiz_answer((BASIC_KEY[0] + 1) % 4).unwrap();
    session.quiz_proceed().unwrap();
    session.quiz_answer(BASIC_KEY[0]).unwrap();
    assert_eq!(session.quiz_proceed().unwrap(), QuizProgress::NextQuestion(1));
    session.quiz_answer((BASIC_KEY[1] + 1) % 4).unwrap();
    session.quiz_proceed().unwrap();
    assert_eq!(
        session.quiz_answer((BASIC_KEY[1] + 2) % 4).unwrap(),
        AnswerFeedback::LockedOut
    );

    let transition = session.quiz_close().unwrap();
    assert!(transition.events.contains(&ProgressEvent::Reverted(BASIC_VIDEO_NODE)));
    assert!(!completed(&session, BASIC_VIDEO_NODE));
    assert!(locked(&session, BASIC_QUIZ_NODE));
    assert!(matches!(session.active(), Some(ActiveActivity::Video(_))));

    // Watching again restores access with a fresh attempt counter.
    let required = session.settings().video_required();
    session.advance_clock(required);
    session.video_continue().unwrap();
    assert!(!locked(&session, BASIC_QUIZ_NODE));
    session.tap(BASIC_QUIZ_NODE);
    match session.active() {
        Some(ActiveActivity::Quiz(quiz)) => assert_eq!(quiz.incorrect_attempts(), 0),
        other => panic!("expected quiz, got {other:?}"),
    }
}

#[test]
fn advanced_quiz_lockout_reopens_advanced_video() {
    let mut session = session();
    finish_tutorial(&mut session);
    watch_video(&mut session, BASIC_VIDEO_NODE);
    pass_quiz(&mut session, BASIC_QUIZ_NODE, &BASIC_KEY);
    watch_video(&mut session, ADVANCED_VIDEO_NODE);

    session.tap(ADVANCED_QUIZ_NODE);
    for _ in 0..2 {
        session.quiz_answer((ADVANCED_KEY[0] + 1) % 4).unwrap();
        session.quiz_proceed().unwrap();
    }
    session.quiz_answer((ADVANCED_KEY[0] + 1) % 4).unwrap();
    let transition = session.quiz_close().unwrap();

    assert_eq!(
        transition.reshow(),
        Some((ADVANCED_VIDEO_NODE, ActivityKind::Video(Level::Advanced)))
    );
    assert!(completed(&session, BASIC_QUIZ_NODE));
    assert!(!completed(&session, ADVANCED_VIDEO_NODE));
    assert!(locked(&session, ADVANCED_QUIZ_NODE));
}

#[test]
fn passing_final_quiz_celebrates_once() {
    let mut session = session();
    finish_tutorial(&mut session);
    watch_video(&mut session, BASIC_VIDEO_NODE);
    pass_quiz(&mut session, BASIC_QUIZ_NODE, &BASIC_KEY);
    watch_video(&mut session, ADVANCED_VIDEO_NODE);
    let transition = pass_quiz(&mut session, ADVANCED_QUIZ_NODE, &ADVANCED_KEY);

    assert!(transition.celebrates());
    assert!(session.snapshot().all_completed);
    assert_eq!(session.snapshot().current, None);

    // Completed nodes only show an informational message.
    assert!(matches!(
        session.tap(ADVANCED_QUIZ_NODE),
        TapOutcome::AlreadyCompleted { .. }
    ));
    assert!(session.active().is_none());
}

#[test]
fn locked_nodes_ignore_taps() {
    let mut session = session();
    assert!(matches!(session.tap(ADVANCED_QUIZ_NODE), TapOutcome::Ignored(_)));
    assert!(session.active().is_none());
}

#[test]
fn locale_switch_retitles_nodes() {
    let mut session = session();
    let english = session.snapshot().node(BASIC_QUIZ_NODE).unwrap().title.clone();
    session.set_locale(Locale::Es);
    let spanish = session.snapshot().node(BASIC_QUIZ_NODE).unwrap().title.clone();
    assert_ne!(english, spanish);
    assert_eq!(session.locale(), Locale::Es);
}

#[tokio::test(start_paused = true)]
async fn watch_timer_gates_video_completion() {
    let mut session = session();
    finish_tutorial(&mut session);
    session.tap(BASIC_VIDEO_NODE);

    let required = session.settings().video_required();
    let mut timer = WatchTimer::start(required.to_std().unwrap());
    tokio::time::advance(std::time::Duration::from_secs(5)).await;
    assert!(!timer.has_fired());

    assert!(timer.wait().await);
    session.advance_clock(required);
    session.video_continue().unwrap().unwrap();
    assert!(!locked(&session, BASIC_QUIZ_NODE));
    assert!(session.video_remaining().is_err());
}

fn assert_single_current(session: &PathSession) {
    let snapshot = session.snapshot();
    if snapshot.all_completed {
        assert_eq!(snapshot.open_count(), 0);
        assert_eq!(snapshot.current, None);
    } else {
        assert_eq!(snapshot.open_count(), 1, "{snapshot:?}");
        assert!(snapshot.current.is_some());
    }
}

fn lock_out(session: &mut PathSession, node: NodeId, key: &[usize]) {
    assert!(matches!(session.tap(node), TapOutcome::Open { .. }));
    loop {
        let feedback = session.quiz_answer((key[0] + 1) % 4).unwrap();
        if feedback == AnswerFeedback::LockedOut {
            break;
        }
        session.quiz_proceed().unwrap();
    }
    let transition = session.quiz_close().unwrap();
    assert!(transition.notice().is_some());
}

#[test]
fn exactly_one_node_is_current_throughout() {
    let mut session = session();
    assert_single_current(&session);

    finish_tutorial(&mut session);
    assert_single_current(&session);
    watch_video(&mut session, BASIC_VIDEO_NODE);
    assert_single_current(&session);

    lock_out(&mut session, BASIC_QUIZ_NODE, &BASIC_KEY);
    assert_single_current(&session);
    // The reopened video is closed early, then watched properly.
    session.close_activity().unwrap();
    assert_single_current(&session);
    watch_video(&mut session, BASIC_VIDEO_NODE);
    assert_single_current(&session);

    pass_quiz(&mut session, BASIC_QUIZ_NODE, &BASIC_KEY);
    assert_single_current(&session);
    watch_video(&mut session, ADVANCED_VIDEO_NODE);
    assert_single_current(&session);

    lock_out(&mut session, ADVANCED_QUIZ_NODE, &ADVANCED_KEY);
    assert_single_current(&session);
    let required = session.settings().video_required();
    session.advance_clock(required);
    session.video_continue().unwrap().unwrap();
    assert_single_current(&session);

    pass_quiz(&mut session, ADVANCED_QUIZ_NODE, &ADVANCED_KEY);
    assert_single_current(&session);
    assert!(session.snapshot().all_completed);
}
