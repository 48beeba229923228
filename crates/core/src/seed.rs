//! The fixed five-step path and the content bound to it.

use crate::locale::Locale;
use crate::model::{
    ActivityKind, Level, Node, NodeId, QuizBank, QuizBankError, QuizQuestion, TutorialStep,
};

/// Node ids in path order.
pub const TUTORIAL_NODE: NodeId = NodeId::new(1);
pub const BASIC_VIDEO_NODE: NodeId = NodeId::new(2);
pub const BASIC_QUIZ_NODE: NodeId = NodeId::new(3);
pub const ADVANCED_VIDEO_NODE: NodeId = NodeId::new(4);
pub const ADVANCED_QUIZ_NODE: NodeId = NodeId::new(5);

const PATH: [(NodeId, &str, ActivityKind); 5] = [
    (TUTORIAL_NODE, "introduction", ActivityKind::Tutorial),
    (
        BASIC_VIDEO_NODE,
        "basicConcepts",
        ActivityKind::Video(Level::Basic),
    ),
    (
        BASIC_QUIZ_NODE,
        "intermediateLevel",
        ActivityKind::Quiz(Level::Basic),
    ),
    (
        ADVANCED_VIDEO_NODE,
        "advancedLevel",
        ActivityKind::Video(Level::Advanced),
    ),
    (
        ADVANCED_QUIZ_NODE,
        "finalChallenge",
        ActivityKind::Quiz(Level::Advanced),
    ),
];

const BASIC_ANSWERS: [usize; 6] = [2, 0, 1, 3, 1, 2];
const ADVANCED_ANSWERS: [usize; 6] = [3, 1, 0, 3, 1, 2];
const OPTIONS_PER_QUESTION: usize = 4;

/// Fresh path state: the tutorial is open, everything after it is locked.
#[must_use]
pub fn seed_nodes(locale: Locale) -> Vec<Node> {
    PATH.iter()
        .enumerate()
        .map(|(index, (id, title_key, activity))| {
            let node = Node::new(*id, *title_key, *activity).localized(locale);
            if index == 0 { node.unlocked() } else { node }
        })
        .collect()
}

/// Embedded video for each video level.
#[must_use]
pub fn video_id(level: Level) -> &'static str {
    match level {
        Level::Basic => "kCc8FmEb1nY",
        Level::Advanced => "7xTGNNLPyMI",
    }
}

/// Translation key of the video title shown in the player header.
#[must_use]
pub fn video_title_key(level: Level) -> &'static str {
    match level {
        Level::Basic => "videoTitle",
        Level::Advanced => "advancedVideoTitle",
    }
}

/// Built-in question bank for `level`.
///
/// # Errors
///
/// Returns `QuizBankError` only if the built-in tables are inconsistent.
pub fn quiz_bank(level: Level) -> Result<QuizBank, QuizBankError> {
    let (title_key, question_prefix, option_prefix, answers) = match level {
        Level::Basic => ("quiz_title", "quiz_question", "quiz_q", BASIC_ANSWERS),
        Level::Advanced => (
            "advanced_quiz_title",
            "advanced_quiz_question",
            "advanced_q",
            ADVANCED_ANSWERS,
        ),
    };

    let questions = answers
        .iter()
        .enumerate()
        .map(|(i, correct)| {
            let n = i + 1;
            let options = (1..=OPTIONS_PER_QUESTION)
                .map(|o| format!("{option_prefix}{n}_option_{o}"))
                .collect();
            QuizQuestion::new(format!("{question_prefix}_{n}"), options, *correct)
        })
        .collect::<Result<Vec<_>, _>>()?;

    QuizBank::new(level, title_key, questions)
}

/// Onboarding pages shown by the tutorial node.
#[must_use]
pub fn tutorial_steps() -> Vec<TutorialStep> {
    (1..=4)
        .map(|n| TutorialStep::new(format!("tutorialStep{n}Title"), format!("tutorialStep{n}Text")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_path_unlocks_only_the_tutorial() {
        let nodes = seed_nodes(Locale::Es);
        assert_eq!(nodes.len(), 5);
        assert!(nodes[0].is_current());
        assert!(nodes[1..].iter().all(|n| n.is_locked() && !n.is_completed()));
        assert_eq!(nodes[0].activity(), ActivityKind::Tutorial);
        assert_eq!(nodes[4].activity(), ActivityKind::Quiz(Level::Advanced));
    }

    #[test]
    fn ids_follow_path_order() {
        let ids: Vec<_> = seed_nodes(Locale::En).iter().map(Node::id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn quiz_keys_resolve_in_both_locales() {
        for level in [Level::Basic, Level::Advanced] {
            let bank = quiz_bank(level).unwrap();
            assert_eq!(bank.len(), 6);
            for question in bank.questions() {
                for locale in [Locale::Es, Locale::En] {
                    assert_ne!(locale.translate(question.prompt_key()), question.prompt_key());
                    for option in question.option_keys() {
                        assert_ne!(locale.translate(option), option.as_str());
                    }
                }
            }
        }
    }

    #[test]
    fn basic_quiz_first_answer_is_transformer() {
        let bank = quiz_bank(Level::Basic).unwrap();
        let first = &bank.questions()[0];
        let correct = &first.option_keys()[first.correct_option()];
        assert_eq!(
            Locale::En.translate(correct),
            "A Transformer with attention mechanism"
        );
    }

    #[test]
    fn tutorial_has_four_translated_steps() {
        let steps = tutorial_steps();
        assert_eq!(steps.len(), 4);
        assert_eq!(Locale::En.translate(&steps[0].title_key), "Node Path");
    }
}
