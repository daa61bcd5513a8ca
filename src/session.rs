use crate::models::{Countdown, Feedback, FeedbackKind, Question, QuizConfig};
use crate::scoring::ScoreSummary;
use crate::utils::ParsedAnswer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingAnswer,
    /// Answer or auto-skip recorded; waiting for the pause to run out.
    ShowingFeedback,
}

/// Everything that belongs to one run through the problem set.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub config: QuizConfig,
    pub question: Question,
    pub score: u32,
    pub total_answered: u32,
    pub phase: Phase,
    pub countdown: Option<Countdown>,
    pub feedback: Option<Feedback>,
    pub input_buffer: String,
    pub cursor_position: usize,
}

impl QuizSession {
    pub fn new(config: QuizConfig, question: Question) -> Self {
        let mut session = Self {
            config,
            question,
            score: 0,
            total_answered: 0,
            phase: Phase::AwaitingAnswer,
            countdown: None,
            feedback: None,
            input_buffer: String::new(),
            cursor_position: 0,
        };
        session.present(question);
        session
    }

    /// Puts a fresh question up: clears feedback and input, reopens
    /// submission and resets the countdown display.
    pub fn present(&mut self, question: Question) {
        self.question = question;
        self.phase = Phase::AwaitingAnswer;
        self.feedback = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.countdown = self.config.timer().map(|t| Countdown::start(t.seconds));
    }

    pub fn accepting_answers(&self) -> bool {
        self.phase == Phase::AwaitingAnswer
    }

    /// Records an attempt. `celebration` is shown when the answer is right.
    /// Returns whether it was.
    pub fn record_answer(&mut self, value: ParsedAnswer, celebration: &str) -> bool {
        self.stop_countdown();
        self.phase = Phase::ShowingFeedback;
        self.total_answered += 1;

        let correct = value.matches(self.question.answer);
        if correct {
            self.score += 1;
            self.feedback = Some(Feedback::new(celebration, FeedbackKind::Correct));
        } else {
            self.feedback = Some(Feedback::new(
                format!("❌ Not quite! {}", self.question.reveal()),
                FeedbackKind::Incorrect,
            ));
        }
        correct
    }

    /// Countdown hit zero. Returns true when a missed attempt was recorded.
    pub fn record_timeout(&mut self) -> bool {
        self.stop_countdown();
        if self.config.auto_skip() {
            self.phase = Phase::ShowingFeedback;
            self.total_answered += 1;
            self.feedback = Some(Feedback::new(
                format!("⏰ Time's up! {}", self.question.reveal()),
                FeedbackKind::Incorrect,
            ));
            true
        } else {
            self.feedback = Some(Feedback::new("⏰ Time's up!", FeedbackKind::Incorrect));
            false
        }
    }

    pub fn reject_input(&mut self, message: impl Into<String>) {
        self.feedback = Some(Feedback::new(message, FeedbackKind::Prompt));
    }

    fn stop_countdown(&mut self) {
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.active = false;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total_answered >= self.config.problem_count()
    }

    pub fn question_number(&self) -> u32 {
        (self.total_answered + 1).min(self.config.problem_count())
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.score, self.total_answered)
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor_position);
        self.input_buffer.insert(byte_idx, c);
        self.cursor_position += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            let byte_idx = self.byte_index(self.cursor_position - 1);
            self.input_buffer.remove(byte_idx);
            self.cursor_position -= 1;
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_position < self.input_buffer.chars().count() {
            self.cursor_position += 1;
        }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimerConfig;

    fn session_with(timer: Option<TimerConfig>, problems: u32) -> QuizSession {
        let config = QuizConfig::new(vec![3], problems, timer).unwrap();
        QuizSession::new(config, Question::new(3, 4))
    }

    #[test]
    fn test_new_session_starts_clean() {
        let session = session_with(None, 5);
        assert_eq!(session.score, 0);
        assert_eq!(session.total_answered, 0);
        assert!(session.accepting_answers());
        assert!(session.countdown.is_none());
        assert_eq!(session.question_number(), 1);
    }

    #[test]
    fn test_countdown_created_with_timer() {
        let timer = TimerConfig {
            seconds: 8,
            auto_skip: false,
        };
        let session = session_with(Some(timer), 5);
        assert_eq!(session.countdown, Some(Countdown::start(8)));
    }

    #[test]
    fn test_correct_answer() {
        let mut session = session_with(None, 5);
        assert!(session.record_answer(ParsedAnswer::Value(12), "🎉 Fantastic!"));
        assert_eq!(session.score, 1);
        assert_eq!(session.total_answered, 1);
        assert!(!session.accepting_answers());
        let feedback = session.feedback.clone().unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Correct);
        assert_eq!(feedback.text, "🎉 Fantastic!");
    }

    #[test]
    fn test_wrong_answer_reveals_solution() {
        let mut session = session_with(None, 5);
        assert!(!session.record_answer(ParsedAnswer::Value(13), "unused"));
        assert_eq!(session.score, 0);
        assert_eq!(session.total_answered, 1);
        assert_eq!(
            session.feedback.unwrap().text,
            "❌ Not quite! 3 × 4 = 12"
        );
    }

    #[test]
    fn test_out_of_range_answer_counts_as_wrong() {
        let mut session = session_with(None, 5);
        assert!(!session.record_answer(ParsedAnswer::OutOfRange, "unused"));
        assert_eq!((session.score, session.total_answered), (0, 1));
        assert_eq!(session.feedback.unwrap().kind, FeedbackKind::Incorrect);
    }

    #[test]
    fn test_timeout_without_auto_skip_leaves_question_open() {
        let timer = TimerConfig {
            seconds: 3,
            auto_skip: false,
        };
        let mut session = session_with(Some(timer), 5);
        assert!(!session.record_timeout());
        assert_eq!(session.total_answered, 0);
        assert!(session.accepting_answers());
        assert!(!session.countdown.unwrap().active);
        assert_eq!(session.feedback.unwrap().text, "⏰ Time's up!");
    }

    #[test]
    fn test_timeout_with_auto_skip_records_a_miss() {
        let timer = TimerConfig {
            seconds: 3,
            auto_skip: true,
        };
        let mut session = session_with(Some(timer), 5);
        assert!(session.record_timeout());
        assert_eq!(session.total_answered, 1);
        assert_eq!(session.score, 0);
        assert!(!session.accepting_answers());
        assert_eq!(
            session.feedback.unwrap().text,
            "⏰ Time's up! 3 × 4 = 12"
        );
    }

    #[test]
    fn test_present_resets_question_state() {
        let mut session = session_with(None, 5);
        session.insert_char('9');
        session.record_answer(ParsedAnswer::Value(9), "x");
        session.present(Question::new(3, 7));
        assert!(session.accepting_answers());
        assert!(session.feedback.is_none());
        assert!(session.input_buffer.is_empty());
        assert_eq!(session.cursor_position, 0);
        assert_eq!(session.question.answer, 21);
        assert_eq!(session.total_answered, 1);
    }

    #[test]
    fn test_completion() {
        let mut session = session_with(None, 2);
        session.record_answer(ParsedAnswer::Value(12), "x");
        assert!(!session.is_complete());
        session.present(Question::new(3, 1));
        session.record_answer(ParsedAnswer::Value(0), "x");
        assert!(session.is_complete());
        assert_eq!(session.question_number(), 2);
        assert_eq!(session.summary().percentage, 50);
    }

    #[test]
    fn test_input_editing_at_cursor() {
        let mut session = session_with(None, 5);
        session.insert_char('1');
        session.insert_char('3');
        session.cursor_left();
        session.insert_char('2');
        assert_eq!(session.input_buffer, "123");
        assert_eq!(session.cursor_position, 2);

        session.backspace();
        assert_eq!(session.input_buffer, "13");
        assert_eq!(session.cursor_position, 1);

        session.cursor_right();
        session.cursor_right();
        assert_eq!(session.cursor_position, 2);

        session.cursor_left();
        session.cursor_left();
        session.cursor_left();
        session.backspace();
        assert_eq!(session.input_buffer, "13");
        assert_eq!(session.cursor_position, 0);
    }
}
