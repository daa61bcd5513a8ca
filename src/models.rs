use crate::error::QuizError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Largest second factor asked for any table.
pub const MAX_FACTOR: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub factor1: u32,
    pub factor2: u32,
    pub answer: u64,
}

impl Question {
    pub fn new(factor1: u32, factor2: u32) -> Self {
        Self {
            factor1,
            factor2,
            answer: u64::from(factor1) * u64::from(factor2),
        }
    }

    /// Draws the first factor from `tables` and the second from `1..=12`.
    /// Returns `None` only for an empty table set.
    pub fn random<R: Rng>(rng: &mut R, tables: &[u32]) -> Option<Self> {
        let factor1 = *tables.choose(rng)?;
        let factor2 = rng.gen_range(1..=MAX_FACTOR);
        Some(Self::new(factor1, factor2))
    }

    pub fn prompt(&self) -> String {
        format!("{} × {} = ?", self.factor1, self.factor2)
    }

    pub fn reveal(&self) -> String {
        format!("{} × {} = {}", self.factor1, self.factor2, self.answer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub seconds: u32,
    pub auto_skip: bool,
}

/// A validated quiz configuration. Built through `QuizConfig::new` or
/// `ConfigForm::validate`, so the table set is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    tables: Vec<u32>,
    problem_count: u32,
    timer: Option<TimerConfig>,
}

impl QuizConfig {
    pub fn new(
        tables: Vec<u32>,
        problem_count: u32,
        timer: Option<TimerConfig>,
    ) -> Result<Self, QuizError> {
        if tables.is_empty() {
            return Err(QuizError::EmptyTableSelection);
        }
        if let Some(&bad) = tables.iter().find(|&&t| t == 0) {
            return Err(QuizError::InvalidTable(bad));
        }
        let mut tables = tables;
        tables.sort_unstable();
        tables.dedup();

        Ok(Self {
            tables,
            problem_count: problem_count.max(1),
            timer,
        })
    }

    pub fn tables(&self) -> &[u32] {
        &self.tables
    }

    pub fn problem_count(&self) -> u32 {
        self.problem_count
    }

    pub fn timer(&self) -> Option<TimerConfig> {
        self.timer
    }

    pub fn auto_skip(&self) -> bool {
        self.timer.is_some_and(|t| t.auto_skip)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct,
    Incorrect,
    /// Input could not be read as a number; nothing was recorded.
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn new(text: impl Into<String>, kind: FeedbackKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Countdown shown while a question is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub remaining: u32,
    pub active: bool,
    pub warning: bool,
}

/// Remaining seconds at or below which the countdown is drawn as a warning.
pub const WARNING_SECONDS: u32 = 3;

impl Countdown {
    pub fn start(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            active: true,
            warning: false,
        }
    }

    /// One second passed. Returns true when the countdown just ran out.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining <= WARNING_SECONDS {
            self.warning = true;
        }
        self.remaining == 0
    }

    pub fn is_warning(&self) -> bool {
        self.warning
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Configuring,
    Quiz,
    QuizQuitConfirm,
    Summary,
}
