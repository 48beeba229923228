/// One page of the onboarding tutorial. Both fields are translation keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialStep {
    pub title_key: String,
    pub text_key: String,
}

impl TutorialStep {
    #[must_use]
    pub fn new(title_key: impl Into<String>, text_key: impl Into<String>) -> Self {
        Self {
            title_key: title_key.into(),
            text_key: text_key.into(),
        }
    }
}
