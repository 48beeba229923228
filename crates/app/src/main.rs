use std::fmt;

use path_core::model::{NodeId, ParseIdError, PathSettings, PathSettingsDraft, SettingsError};
use path_core::{Clock, Locale, LocaleError};
use serde_json::{Value, json};
use services::{
    ActiveActivity, AnswerFeedback, Notice, PathSession, ProgressEvent, SessionError, TapOutcome,
    Transition, WatchTimer,
};
use storage::ProgressSnapshot;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidLocale(LocaleError),
    Settings(SettingsError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidLocale(err) => write!(f, "{err}"),
            ArgsError::Settings(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number(flag: &'static str, raw: &str) -> Result<u32, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidNumber {
        flag,
        raw: raw.to_string(),
    })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--locale es|en] [--video-secs <n>] [--max-attempts <n>]");
    eprintln!();
    eprintln!("Commands (one per line on stdin):");
    eprintln!("  tap <id> | show | reset | locale es|en|toggle");
    eprintln!("  tutorial next|prev|skip");
    eprintln!("  video finish|close|wait");
    eprintln!("  quiz answer <n> | quiz continue | quiz close");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LEARN_LOCALE, LEARN_VIDEO_SECS, LEARN_MAX_ATTEMPTS, RUST_LOG");
}

/// Build settings from the environment, then let flags override it.
fn parse_settings(args: &mut impl Iterator<Item = String>) -> Result<PathSettings, ArgsError> {
    let mut draft = PathSettingsDraft::new();
    if let Ok(raw) = std::env::var("LEARN_LOCALE") {
        draft.locale = Some(raw.parse().map_err(ArgsError::InvalidLocale)?);
    }
    if let Ok(raw) = std::env::var("LEARN_VIDEO_SECS") {
        draft.video_required_secs = Some(parse_number("LEARN_VIDEO_SECS", &raw)?);
    }
    if let Ok(raw) = std::env::var("LEARN_MAX_ATTEMPTS") {
        draft.max_incorrect_attempts = Some(parse_number("LEARN_MAX_ATTEMPTS", &raw)?);
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--locale" => {
                let value = require_value(args, "--locale")?;
                draft.locale = Some(value.parse().map_err(ArgsError::InvalidLocale)?);
            }
            "--video-secs" => {
                let value = require_value(args, "--video-secs")?;
                draft.video_required_secs = Some(parse_number("--video-secs", &value)?);
            }
            "--max-attempts" => {
                let value = require_value(args, "--max-attempts")?;
                draft.max_incorrect_attempts = Some(parse_number("--max-attempts", &value)?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    draft.validate().map_err(ArgsError::Settings)
}

//
// ─── COMMANDS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Show,
    Reset,
    Locale(Locale),
    ToggleLocale,
    Tap(NodeId),
    TutorialNext,
    TutorialPrevious,
    TutorialSkip,
    VideoFinish,
    VideoClose,
    VideoWait,
    QuizAnswer(usize),
    QuizContinue,
    QuizClose,
}

#[derive(Debug)]
enum CommandError {
    Unknown(String),
    InvalidId(ParseIdError),
    InvalidLocale(LocaleError),
    InvalidOption(String),
    Session(SessionError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(line) => write!(f, "unknown command: {line}"),
            CommandError::InvalidId(err) => write!(f, "{err}"),
            CommandError::InvalidLocale(err) => write!(f, "{err}"),
            CommandError::InvalidOption(raw) => write!(f, "invalid answer option: {raw}"),
            CommandError::Session(err) => write!(f, "{err}"),
        }
    }
}

impl From<SessionError> for CommandError {
    fn from(err: SessionError) -> Self {
        CommandError::Session(err)
    }
}

impl Command {
    fn parse(line: &str) -> Result<Self, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            ["show"] => Self::Show,
            ["reset"] => Self::Reset,
            ["locale", "toggle"] => Self::ToggleLocale,
            ["locale", code] => Self::Locale(code.parse().map_err(CommandError::InvalidLocale)?),
            ["tap", id] => Self::Tap(id.parse().map_err(CommandError::InvalidId)?),
            ["tutorial", "next"] => Self::TutorialNext,
            ["tutorial", "prev"] => Self::TutorialPrevious,
            ["tutorial", "skip"] => Self::TutorialSkip,
            ["video", "finish"] => Self::VideoFinish,
            ["video", "close"] => Self::VideoClose,
            ["video", "wait"] => Self::VideoWait,
            ["quiz", "answer", option] => Self::QuizAnswer(
                option
                    .parse()
                    .map_err(|_| CommandError::InvalidOption((*option).to_string()))?,
            ),
            ["quiz", "continue"] => Self::QuizContinue,
            ["quiz", "close"] => Self::QuizClose,
            _ => return Err(CommandError::Unknown(line.to_string())),
        };
        Ok(command)
    }
}

//
// ─── RENDERING ─────────────────────────────────────────────────────────────────
//

fn render_snapshot(snapshot: &ProgressSnapshot) -> Value {
    serde_json::to_value(snapshot).unwrap_or(Value::Null)
}

fn render_notice(notice: Notice, locale: Locale) -> Value {
    json!({
        "title": locale.translate(notice.title_key),
        "message": locale.translate(notice.message_key),
    })
}

fn render_tap(outcome: &TapOutcome, locale: Locale) -> Value {
    match outcome {
        TapOutcome::Open { node, activity } => {
            json!({ "open": { "node": node, "activity": activity.to_string() } })
        }
        TapOutcome::AlreadyCompleted { node, message_key } => {
            json!({ "already_completed": { "node": node, "message": locale.translate(message_key) } })
        }
        TapOutcome::Ignored(reason) => json!({
            "ignored": format!("{reason:?}"),
            "message": reason.message_key().map(|key| locale.translate(key)),
        }),
    }
}

fn render_transition(session: &PathSession, transition: &Transition) -> Value {
    let locale = session.locale();
    let events: Vec<String> = transition
        .events
        .iter()
        .map(|event| match event {
            ProgressEvent::Completed(id) => format!("completed {id}"),
            ProgressEvent::Unlocked(id) => format!("unlocked {id}"),
            ProgressEvent::Reverted(id) => format!("reverted {id}"),
            ProgressEvent::Relocked(id) => format!("relocked {id}"),
            ProgressEvent::ReshowActivity { node, activity } => {
                format!("reshow {activity} at {node}")
            }
            ProgressEvent::Celebrate => locale.translate("allLevelsCompleted").to_string(),
        })
        .collect();
    let notice = transition.notice().map(|notice| {
        let mut rendered = render_notice(notice, locale);
        if notice.message_key == "completedLevel" {
            let title = session
                .snapshot()
                .node(transition.node)
                .map(|node| node.title.clone())
                .unwrap_or_default();
            rendered["message"] = json!(format!("{} {title}", locale.translate("completedLevel")));
        }
        rendered
    });
    json!({
        "node": transition.node,
        "outcome": transition.outcome.to_string(),
        "events": events,
        "notice": notice,
    })
}

fn render_active(session: &PathSession) -> Value {
    let locale = session.locale();
    match session.active() {
        None => Value::Null,
        Some(ActiveActivity::Tutorial(tutorial)) => {
            let step = tutorial.current_step();
            json!({
                "tutorial": {
                    "step": tutorial.step_index() + 1,
                    "of": tutorial.step_count(),
                    "title": locale.translate(&step.title_key),
                    "text": locale.translate(&step.text_key),
                }
            })
        }
        Some(ActiveActivity::Video(video)) => {
            let remaining = session
                .video_remaining()
                .map_or(0, |left| left.num_seconds());
            json!({
                "video": {
                    "id": video.video_id(),
                    "title": locale.translate(video.title_key()),
                    "remaining_secs": remaining,
                }
            })
        }
        Some(ActiveActivity::Quiz(quiz)) => {
            let question = quiz.current_question().map(|question| {
                let options: Vec<&str> = question
                    .option_keys()
                    .iter()
                    .map(|key| locale.translate(key))
                    .collect();
                json!({
                    "counter": locale.question_counter(quiz.question_index() + 1, quiz.bank().len()),
                    "prompt": locale.translate(question.prompt_key()),
                    "options": options,
                })
            });
            json!({
                "quiz": {
                    "title": locale.translate(quiz.bank().title_key()),
                    "question": question,
                    "feedback": quiz
                        .feedback()
                        .and_then(|feedback| feedback.notice())
                        .map(|notice| render_notice(notice, locale)),
                    "incorrect_attempts": quiz.incorrect_attempts(),
                }
            })
        }
    }
}

//
// ─── DRIVER ────────────────────────────────────────────────────────────────────
//

async fn execute(session: &mut PathSession, command: Command) -> Result<Value, CommandError> {
    let locale = session.locale();
    let result = match command {
        Command::Show => Value::Null,
        Command::Reset => {
            session.reset();
            Value::Null
        }
        Command::Locale(locale) => {
            session.set_locale(locale);
            json!({ "locale": locale.code() })
        }
        Command::ToggleLocale => {
            session.set_locale(locale.toggled());
            json!({ "locale": session.locale().code() })
        }
        Command::Tap(id) => render_tap(&session.tap(id), locale),
        Command::TutorialNext => match session.tutorial_next()? {
            Some(transition) => render_transition(session, &transition),
            None => Value::Null,
        },
        Command::TutorialPrevious => json!({ "step": session.tutorial_previous()? + 1 }),
        Command::TutorialSkip => {
            let transition = session.tutorial_skip()?;
            render_transition(session, &transition)
        }
        Command::VideoFinish => match session.video_continue()? {
            Some(transition) => render_transition(session, &transition),
            None => json!({ "message": locale.translate("please_watch_video") }),
        },
        Command::VideoClose => {
            let transition = session.video_close()?;
            render_transition(session, &transition)
        }
        Command::VideoWait => {
            let remaining = session.video_remaining()?.to_std().unwrap_or_default();
            let mut timer = WatchTimer::start(remaining);
            if timer.wait().await {
                json!({ "message": locale.translate("video_completed_message") })
            } else {
                json!({ "message": locale.translate("please_watch_video") })
            }
        }
        Command::QuizAnswer(option) => {
            let feedback = session.quiz_answer(option)?;
            let attempts_left = match feedback {
                AnswerFeedback::Incorrect { attempts_left } => Some(attempts_left),
                AnswerFeedback::Correct | AnswerFeedback::LockedOut => None,
            };
            json!({
                "correct": feedback == AnswerFeedback::Correct,
                "attempts_left": attempts_left,
                "notice": feedback.notice().map(|notice| render_notice(notice, locale)),
            })
        }
        Command::QuizContinue => {
            let progress = session.quiz_proceed()?;
            json!({
                "progress": format!("{progress:?}"),
                "notice": progress.notice().map(|notice| render_notice(notice, locale)),
            })
        }
        Command::QuizClose => {
            let transition = session.quiz_close()?;
            render_transition(session, &transition)
        }
    };
    Ok(result)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let settings = parse_settings(&mut args).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing::info!(
        locale = %settings.locale(),
        video_secs = settings.video_required_secs(),
        max_attempts = settings.max_incorrect_attempts(),
        "starting learning path"
    );
    let mut session = PathSession::new(settings, Clock::default_clock());
    println!("{}", json!({ "snapshot": render_snapshot(&session.snapshot()) }));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let report = match Command::parse(line) {
            Ok(command) => match execute(&mut session, command).await {
                Ok(result) => json!({
                    "result": result,
                    "active": render_active(&session),
                    "snapshot": render_snapshot(&session.snapshot()),
                }),
                Err(err) => json!({ "error": err.to_string() }),
            },
            Err(err) => json!({ "error": err.to_string() }),
        };
        println!("{report}");
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("services=info,app=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
