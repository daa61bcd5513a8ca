pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod logger;
pub mod models;
pub mod scheduler;
pub mod scoring;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use config::{ConfigForm, Settings};
pub use controller::QuizController;
pub use error::{ConfigError, QuizError};
pub use input::{handle_key, ConfigCursor, InputOutcome};
pub use models::{AppState, Countdown, Feedback, FeedbackKind, Question, QuizConfig, TimerConfig};
pub use scoring::{ScoreSummary, Tier};
pub use session::QuizSession;
pub use ui::{draw_app, draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
