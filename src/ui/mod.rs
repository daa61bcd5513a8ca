pub mod layout;
mod menu;
mod quiz;
mod summary;

pub use layout::{calculate_config_chunks, calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;

use crate::controller::QuizController;
use crate::input::ConfigCursor;
use crate::models::AppState;
use ratatui::Frame;

/// Renders whichever screen the controller is on.
pub fn draw_app<R>(f: &mut Frame, controller: &QuizController<R>, cursor: &ConfigCursor) {
    match controller.app_state() {
        AppState::Configuring => draw_menu(
            f,
            controller.form(),
            cursor,
            controller.selection_error(),
        ),
        AppState::Quiz => {
            if let Some(session) = controller.session() {
                draw_quiz(f, session);
            }
        }
        AppState::QuizQuitConfirm => draw_quit_confirmation(f),
        AppState::Summary => {
            if let Some(summary) = controller.summary() {
                draw_summary(f, summary);
            }
        }
    }
}
