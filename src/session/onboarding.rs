//! Onboarding questionnaire flow.

use std::collections::BTreeMap;

use crate::error::AuthError;

/// Number of breaths counted in the warm-up.
pub const BREATH_COUNT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
    pub options: &'static [&'static str],
}

pub static QUESTIONS: [Question; 3] = [
    Question {
        id: 1,
        text: "How often do you experience anxiety?",
        options: &["Rarely", "Sometimes", "Often", "Almost daily"],
    },
    Question {
        id: 2,
        text: "What usually triggers your stress?",
        options: &["Work", "Relationships", "Health", "Future uncertainty", "Other"],
    },
    Question {
        id: 3,
        text: "What's your goal for using this app?",
        options: &[
            "Reduce anxiety",
            "Improve emotional awareness",
            "Better stress management",
            "All of the above",
        ],
    },
];

impl Question {
    /// Match an answer by option text (any case) or 1-based option number.
    pub fn match_option(&self, answer: &str) -> Option<&'static str> {
        let answer = answer.trim();
        if let Ok(n) = answer.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| self.options.get(i)).copied();
        }
        self.options
            .iter()
            .copied()
            .find(|option| option.eq_ignore_ascii_case(answer))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    /// Warm-up breathing with this many breaths left.
    Breathing { remaining: u8 },
    /// Waiting for an answer to `QUESTIONS[index]`.
    Question { index: usize },
    Complete,
}

/// Breathing warm-up followed by the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    answers: BTreeMap<u8, String>,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Breathing {
                remaining: BREATH_COUNT,
            },
            answers: BTreeMap::new(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.step == OnboardingStep::Complete
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.step {
            OnboardingStep::Question { index } => QUESTIONS.get(index),
            _ => None,
        }
    }

    /// Count one breath; the questions start after the last one.
    pub fn breathe(&mut self) -> OnboardingStep {
        if let OnboardingStep::Breathing { remaining } = self.step {
            self.step = match remaining.saturating_sub(1) {
                0 => OnboardingStep::Question { index: 0 },
                left => OnboardingStep::Breathing { remaining: left },
            };
        }
        self.step
    }

    pub fn skip_breathing(&mut self) {
        if matches!(self.step, OnboardingStep::Breathing { .. }) {
            self.step = OnboardingStep::Question { index: 0 };
        }
    }

    /// Answer the current question. Answering during the warm-up ends it.
    pub fn answer(&mut self, answer: &str) -> Result<OnboardingStep, AuthError> {
        self.skip_breathing();
        let question = self.current_question().ok_or(AuthError::OnboardingFinished)?;
        let option = question
            .match_option(answer)
            .ok_or_else(|| AuthError::InvalidAnswer {
                question: question.id,
                answer: answer.trim().to_string(),
            })?;

        self.answers.insert(question.id, option.to_string());
        if let OnboardingStep::Question { index } = self.step {
            self.step = if index + 1 < QUESTIONS.len() {
                OnboardingStep::Question { index: index + 1 }
            } else {
                OnboardingStep::Complete
            };
        }
        Ok(self.step)
    }

    pub fn answers(&self) -> &BTreeMap<u8, String> {
        &self.answers
    }

    /// The answer map, once every question has been answered.
    pub fn into_answers(self) -> Option<BTreeMap<u8, String>> {
        self.is_complete().then_some(self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breathing_then_questions() {
        let mut flow = OnboardingFlow::new();
        for _ in 0..BREATH_COUNT - 1 {
            assert!(matches!(flow.breathe(), OnboardingStep::Breathing { .. }));
        }
        assert_eq!(flow.breathe(), OnboardingStep::Question { index: 0 });
        assert_eq!(flow.current_question().unwrap().id, 1);
    }

    #[test]
    fn test_full_questionnaire() {
        let mut flow = OnboardingFlow::new();
        flow.skip_breathing();
        assert_eq!(flow.answer("often").unwrap(), OnboardingStep::Question { index: 1 });
        assert_eq!(flow.answer("4").unwrap(), OnboardingStep::Question { index: 2 });
        assert_eq!(flow.answer("All of the above").unwrap(), OnboardingStep::Complete);

        let answers = flow.into_answers().unwrap();
        assert_eq!(answers[&1], "Often");
        assert_eq!(answers[&2], "Future uncertainty");
        assert_eq!(answers[&3], "All of the above");
    }

    #[test]
    fn test_invalid_answer_keeps_step() {
        let mut flow = OnboardingFlow::new();
        flow.skip_breathing();
        let err = flow.answer("Never").unwrap_err();
        assert_eq!(
            err,
            AuthError::InvalidAnswer {
                question: 1,
                answer: "Never".to_string()
            }
        );
        assert!(flow.answer("0").is_err());
        assert!(flow.answer("5").is_err());
        assert_eq!(flow.step(), OnboardingStep::Question { index: 0 });
    }

    #[test]
    fn test_answer_after_complete() {
        let mut flow = OnboardingFlow::new();
        for answer in ["1", "1", "1"] {
            flow.answer(answer).unwrap();
        }
        assert_eq!(flow.answer("1"), Err(AuthError::OnboardingFinished));
    }

    #[test]
    fn test_incomplete_has_no_answers() {
        let mut flow = OnboardingFlow::new();
        flow.answer("Rarely").unwrap();
        assert_eq!(flow.answers().len(), 1);
        assert!(flow.into_answers().is_none());
    }
}
