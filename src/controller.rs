use crate::config::ConfigForm;
use crate::error::QuizError;
use crate::logger;
use crate::models::{AppState, Question, QuizConfig};
use crate::scheduler::{Deferred, Due, FEEDBACK_DELAY, Scheduler, TICK_PERIOD};
use crate::scoring::{ScoreSummary, celebration};
use crate::session::QuizSession;
use crate::utils::parse_answer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Drives the whole game: configuration, the question loop and the summary.
///
/// All timing goes through the internal `Scheduler`; call `advance` with the
/// elapsed time to let countdown ticks and post-answer pauses fire.
#[derive(Debug)]
pub struct QuizController<R = StdRng> {
    app_state: AppState,
    form: ConfigForm,
    selection_error: Option<String>,
    session: Option<QuizSession>,
    summary: Option<ScoreSummary>,
    scheduler: Scheduler,
    rng: R,
}

impl QuizController<StdRng> {
    pub fn new(form: ConfigForm) -> Self {
        Self::with_rng(form, StdRng::from_entropy())
    }
}

impl<R> QuizController<R> {
    pub fn with_rng(form: ConfigForm, rng: R) -> Self {
        Self {
            app_state: AppState::Configuring,
            form,
            selection_error: None,
            session: None,
            summary: None,
            scheduler: Scheduler::new(),
            rng,
        }
    }

    pub fn app_state(&self) -> AppState {
        self.app_state
    }

    pub fn form(&self) -> &ConfigForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ConfigForm {
        &mut self.form
    }

    pub fn selection_error(&self) -> Option<&str> {
        self.selection_error.as_deref()
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        self.session.as_mut()
    }

    pub fn summary(&self) -> Option<&ScoreSummary> {
        self.summary.as_ref()
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn pending_transition(&self) -> Option<Deferred> {
        self.scheduler.pending()
    }

    /// Abandons whatever is running. No tick or pause scheduled before this
    /// call will fire afterwards.
    pub fn return_to_configuration(&mut self) {
        self.scheduler.cancel_all();
        self.session = None;
        self.summary = None;
        self.app_state = AppState::Configuring;
        logger::log("Returned to configuration");
    }

    pub fn request_quit(&mut self) {
        if self.app_state == AppState::Quiz {
            self.app_state = AppState::QuizQuitConfirm;
        }
    }

    pub fn cancel_quit(&mut self) {
        if self.app_state == AppState::QuizQuitConfirm {
            self.app_state = AppState::Quiz;
        }
    }
}

impl<R: Rng> QuizController<R> {
    /// Validates the form and begins a session. On failure the message is
    /// kept for the configuration screen and nothing else changes.
    pub fn start(&mut self) -> Result<(), QuizError> {
        let config = match self.form.validate() {
            Ok(config) => config,
            Err(e) => {
                logger::log(&format!("Start rejected: {:?}", e));
                self.selection_error = Some(e.to_string());
                return Err(e);
            }
        };
        self.selection_error = None;
        logger::log(&format!(
            "Starting session: tables {:?}, {} problems, timer {:?}",
            config.tables(),
            config.problem_count(),
            config.timer()
        ));
        self.begin(config);
        Ok(())
    }

    /// Runs the same configuration again with the score reset.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        match self.session.as_ref().map(|s| s.config.clone()) {
            Some(config) => {
                logger::log("Restarting session with same configuration");
                self.begin(config);
                Ok(())
            }
            None => self.start(),
        }
    }

    fn begin(&mut self, config: QuizConfig) {
        self.scheduler.cancel_all();
        self.summary = None;
        let question = self.draw_question(config.tables());
        self.session = Some(QuizSession::new(config, question));
        self.app_state = AppState::Quiz;
        self.arm_countdown();
    }

    /// Submits whatever is in the session's input buffer.
    pub fn submit_input(&mut self) -> Result<bool, QuizError> {
        let raw = match self.session.as_ref() {
            Some(session) => session.input_buffer.clone(),
            None => return Err(QuizError::NotAcceptingAnswers),
        };
        self.submit_answer(&raw)
    }

    /// Evaluates `raw` against the current question. Returns whether the
    /// answer was correct.
    pub fn submit_answer(&mut self, raw: &str) -> Result<bool, QuizError> {
        if self.app_state != AppState::Quiz {
            return Err(QuizError::NotAcceptingAnswers);
        }
        let Some(session) = self.session.as_mut() else {
            return Err(QuizError::NotAcceptingAnswers);
        };
        if !session.accepting_answers() {
            return Err(QuizError::NotAcceptingAnswers);
        }

        let Some(value) = parse_answer(raw) else {
            session.reject_input(QuizError::NotANumber.to_string());
            return Err(QuizError::NotANumber);
        };

        self.scheduler.cancel_countdown();
        let message = celebration(&mut self.rng);
        let correct = session.record_answer(value, message);
        logger::log(&format!(
            "Answered {} for {}: {} ({}/{})",
            raw.trim(),
            session.question.prompt(),
            if correct { "correct" } else { "incorrect" },
            session.score,
            session.total_answered
        ));
        self.schedule_transition();
        Ok(correct)
    }

    /// Lets `elapsed` of virtual time pass, firing every due event in order.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now() + elapsed;
        while let Some(due) = self.scheduler.pop_due(until) {
            match due {
                Due::Tick => self.on_tick(),
                Due::Deferred(Deferred::NextQuestion) => self.next_question(),
                Due::Deferred(Deferred::ShowResults) => self.end_session(),
            }
        }
        self.scheduler.settle(until);
    }

    fn on_tick(&mut self) {
        let Some(session) = self.session.as_mut() else {
            self.scheduler.cancel_countdown();
            return;
        };
        let Some(countdown) = session.countdown.as_mut() else {
            self.scheduler.cancel_countdown();
            return;
        };

        if countdown.tick() {
            self.scheduler.cancel_countdown();
            let skipped = session.record_timeout();
            logger::log(&format!(
                "Time up on {} (auto-skip: {})",
                session.question.prompt(),
                skipped
            ));
            if skipped {
                self.schedule_transition();
            }
        }
    }

    fn schedule_transition(&mut self) {
        let complete = self.session.as_ref().is_some_and(QuizSession::is_complete);
        let action = if complete {
            Deferred::ShowResults
        } else {
            Deferred::NextQuestion
        };
        self.scheduler.defer(FEEDBACK_DELAY, action);
    }

    fn next_question(&mut self) {
        let Some(tables) = self.session.as_ref().map(|s| s.config.tables().to_vec()) else {
            return;
        };
        let question = self.draw_question(&tables);
        if let Some(session) = self.session.as_mut() {
            session.present(question);
        }
        self.arm_countdown();
    }

    fn arm_countdown(&mut self) {
        let timed = self
            .session
            .as_ref()
            .is_some_and(|s| s.config.timer().is_some());
        if timed {
            self.scheduler.start_countdown(TICK_PERIOD);
        } else {
            self.scheduler.cancel_countdown();
        }
    }

    fn end_session(&mut self) {
        self.scheduler.cancel_all();
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let summary = session.summary();
        logger::log(&format!(
            "Session complete: {}/{} ({}%)",
            summary.score, summary.total, summary.percentage
        ));
        self.summary = Some(summary);
        self.app_state = AppState::Summary;
    }

    fn draw_question(&mut self, tables: &[u32]) -> Question {
        // QuizConfig guarantees a non-empty table set.
        Question::random(&mut self.rng, tables).unwrap_or_else(|| Question::new(1, 1))
    }
}
