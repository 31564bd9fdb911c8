use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

pub const QUESTION_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; 4],
}

pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        text: "How long have you been experiencing these symptoms?",
        options: ["Less than 24 hours", "1-3 days", "4-7 days", "More than a week"],
    },
    Question {
        text: "What is the intensity of your main symptom?",
        options: ["Mild", "Moderate", "Severe", "Very Severe"],
    },
    Question {
        text: "Are you experiencing any of these emergency symptoms?",
        options: ["Difficulty breathing", "Chest pain", "Severe headache", "None of the above"],
    },
    Question {
        text: "Have you taken any medication for these symptoms?",
        options: ["Yes, it helped", "Yes, no effect", "No, haven't tried any", "Not sure"],
    },
    Question {
        text: "Do you have any chronic medical conditions?",
        options: ["Diabetes", "Heart condition", "Asthma", "None"],
    },
];

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("expected {QUESTION_COUNT} answers, got {0}")]
    WrongAnswerCount(usize),
}

/// Linear five-step questionnaire. Answering the last step produces the
/// final score; earlier answers just advance the step.
#[derive(Default)]
pub struct Assessment {
    current_step: usize,
    answers: HashMap<usize, String>,
    score: Option<u32>,
}

impl Assessment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn answer_question(&mut self, step: usize, answer: impl Into<String>) {
        if step >= QUESTION_COUNT {
            return;
        }
        self.answers.insert(step, answer.into());
        if step < QUESTION_COUNT - 1 {
            self.current_step = step + 1;
        } else {
            self.score = Some(self.answers.values().map(|a| answer_points(a)).sum());
        }
    }

    pub fn previous_step(&mut self) {
        if self.current_step > 0 {
            self.current_step -= 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn answer_points(answer: &str) -> u32 {
    match answer {
        "Severe" | "Very Severe" => 3,
        "Moderate" => 2,
        _ => 1,
    }
}

/// Replays a complete answer list through the step machine.
pub fn score_answers(answers: &[String]) -> Result<u32, AssessmentError> {
    if answers.len() != QUESTION_COUNT {
        return Err(AssessmentError::WrongAnswerCount(answers.len()));
    }
    let mut assessment = Assessment::new();
    for (step, answer) in answers.iter().enumerate() {
        assessment.answer_question(step, answer);
    }
    // All five steps answered, so the score is set.
    Ok(assessment.score().unwrap_or(0))
}
