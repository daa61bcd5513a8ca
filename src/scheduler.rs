//! Virtual-time scheduling for the countdown and the post-answer pause.
//!
//! The controller never touches a wall clock. The binary measures real
//! elapsed time and hands it to `QuizController::advance`, and tests hand in
//! whatever durations they like.

use std::time::Duration;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);
pub const FEEDBACK_DELAY: Duration = Duration::from_secs(2);

/// What happens when the post-answer pause runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    NextQuestion,
    ShowResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    Tick,
    Deferred(Deferred),
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    next_at: Duration,
    period: Duration,
}

#[derive(Debug, Clone, Copy)]
struct OneShot {
    at: Duration,
    action: Deferred,
}

/// Holds at most one repeating countdown and at most one deferred action.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    countdown: Option<Interval>,
    deferred: Option<OneShot>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Replaces any running countdown; the first tick lands one period out.
    pub fn start_countdown(&mut self, period: Duration) {
        self.countdown = Some(Interval {
            next_at: self.now + period,
            period,
        });
    }

    pub fn cancel_countdown(&mut self) {
        self.countdown = None;
    }

    #[cfg(test)]
    pub fn countdown_active(&self) -> bool {
        self.countdown.is_some()
    }

    /// Replaces any pending deferred action.
    pub fn defer(&mut self, delay: Duration, action: Deferred) {
        self.deferred = Some(OneShot {
            at: self.now + delay,
            action,
        });
    }

    pub fn pending(&self) -> Option<Deferred> {
        self.deferred.map(|d| d.action)
    }

    pub fn cancel_all(&mut self) {
        self.countdown = None;
        self.deferred = None;
    }

    /// Pops the earliest event due at or before `until` and moves the clock
    /// to it. Ties go to the countdown.
    pub fn pop_due(&mut self, until: Duration) -> Option<Due> {
        let tick_at = self.countdown.map(|c| c.next_at).filter(|&t| t <= until);
        let deferred_at = self.deferred.map(|d| d.at).filter(|&t| t <= until);

        match (tick_at, deferred_at) {
            (Some(t), d) if d.is_none_or(|d| t <= d) => {
                self.now = t;
                if let Some(countdown) = self.countdown.as_mut() {
                    countdown.next_at = t + countdown.period;
                }
                Some(Due::Tick)
            }
            (_, Some(d)) => {
                self.now = d;
                self.deferred.take().map(|one| Due::Deferred(one.action))
            }
            _ => None,
        }
    }

    /// Moves the clock to `until` once nothing more is due.
    pub fn settle(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }
}
