use crate::controller::QuizController;
use crate::models::{AppState, MAX_FACTOR};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Tables,
    Problems,
    Timer,
    TimerSeconds,
    AutoSkip,
    Start,
}

impl ConfigField {
    const ORDER: [ConfigField; 6] = [
        ConfigField::Tables,
        ConfigField::Problems,
        ConfigField::Timer,
        ConfigField::TimerSeconds,
        ConfigField::AutoSkip,
        ConfigField::Start,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    /// Timer-only fields are greyed out and skipped while the timer is off.
    pub fn enabled(self, timer_enabled: bool) -> bool {
        timer_enabled || !matches!(self, ConfigField::TimerSeconds | ConfigField::AutoSkip)
    }
}

/// Focus on the configuration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigCursor {
    pub field: ConfigField,
    pub table: u32,
}

impl Default for ConfigCursor {
    fn default() -> Self {
        Self {
            field: ConfigField::Tables,
            table: 1,
        }
    }
}

impl ConfigCursor {
    fn step(&mut self, forward: bool, timer_enabled: bool) {
        let len = ConfigField::ORDER.len();
        let mut idx = self.field.index();
        loop {
            idx = if forward {
                (idx + 1).min(len - 1)
            } else {
                idx.saturating_sub(1)
            };
            let candidate = ConfigField::ORDER[idx];
            if candidate.enabled(timer_enabled) || idx == 0 || idx == len - 1 {
                self.field = candidate;
                return;
            }
        }
    }
}

pub fn handle_key<R: Rng>(
    controller: &mut QuizController<R>,
    cursor: &mut ConfigCursor,
    key: KeyEvent,
) -> InputOutcome {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputOutcome::Exit;
    }

    match controller.app_state() {
        AppState::Configuring => handle_config_input(controller, cursor, key),
        AppState::Quiz => handle_quiz_input(controller, key),
        AppState::QuizQuitConfirm => handle_quit_confirm_input(controller, key),
        AppState::Summary => handle_summary_input(controller, key),
    }
}

pub fn handle_config_input<R: Rng>(
    controller: &mut QuizController<R>,
    cursor: &mut ConfigCursor,
    key: KeyEvent,
) -> InputOutcome {
    let timer_enabled = controller.form().timer_enabled;
    match key.code {
        KeyCode::Esc => return InputOutcome::Exit,
        KeyCode::Up => cursor.step(false, timer_enabled),
        KeyCode::Down | KeyCode::Tab => cursor.step(true, timer_enabled),
        KeyCode::Left if cursor.field == ConfigField::Tables => {
            cursor.table = if cursor.table <= 1 {
                MAX_FACTOR
            } else {
                cursor.table - 1
            };
        }
        KeyCode::Right if cursor.field == ConfigField::Tables => {
            cursor.table = cursor.table % MAX_FACTOR + 1;
        }
        KeyCode::Char(' ') => {
            let form = controller.form_mut();
            match cursor.field {
                ConfigField::Tables => form.toggle_table(cursor.table),
                ConfigField::Timer => form.timer_enabled = !form.timer_enabled,
                ConfigField::AutoSkip => form.auto_skip = !form.auto_skip,
                _ => {}
            }
        }
        KeyCode::Char('a') if cursor.field == ConfigField::Tables => {
            let form = controller.form_mut();
            if form.tables.len() as u32 == MAX_FACTOR {
                form.tables.clear();
            } else {
                form.tables = (1..=MAX_FACTOR).collect();
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let form = controller.form_mut();
            match cursor.field {
                ConfigField::Problems => form.problems.push(c),
                ConfigField::TimerSeconds => form.timer_seconds.push(c),
                _ => {}
            }
        }
        KeyCode::Backspace => {
            let form = controller.form_mut();
            match cursor.field {
                ConfigField::Problems => {
                    form.problems.pop();
                }
                ConfigField::TimerSeconds => {
                    form.timer_seconds.pop();
                }
                _ => {}
            }
        }
        KeyCode::Enter => {
            // Failure leaves the message on the controller for the screen.
            let _ = controller.start();
        }
        _ => {}
    }
    InputOutcome::Continue
}

pub fn handle_quiz_input<R: Rng>(
    controller: &mut QuizController<R>,
    key: KeyEvent,
) -> InputOutcome {
    match key.code {
        KeyCode::Esc => controller.request_quit(),
        KeyCode::Enter => {
            // Rejections are shown through the session feedback.
            let _ = controller.submit_input();
        }
        _ => {
            let Some(session) = controller.session_mut() else {
                return InputOutcome::Continue;
            };
            if !session.accepting_answers() {
                return InputOutcome::Continue;
            }
            match key.code {
                KeyCode::Left => session.cursor_left(),
                KeyCode::Right => session.cursor_right(),
                KeyCode::Backspace => session.backspace(),
                KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => session.insert_char(c),
                _ => {}
            }
        }
    }
    InputOutcome::Continue
}

pub fn handle_quit_confirm_input<R: Rng>(
    controller: &mut QuizController<R>,
    key: KeyEvent,
) -> InputOutcome {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => controller.return_to_configuration(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => controller.cancel_quit(),
        _ => {}
    }
    InputOutcome::Continue
}

pub fn handle_summary_input<R: Rng>(
    controller: &mut QuizController<R>,
    key: KeyEvent,
) -> InputOutcome {
    match key.code {
        KeyCode::Esc => return InputOutcome::Exit,
        KeyCode::Char('r') | KeyCode::Enter => {
            let _ = controller.restart();
        }
        KeyCode::Char('m') => controller.return_to_configuration(),
        _ => {}
    }
    InputOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigForm;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn new_controller() -> QuizController {
        QuizController::with_rng(ConfigForm::default(), StdRng::seed_from_u64(9))
    }

    fn type_str(c: &mut QuizController, cursor: &mut ConfigCursor, s: &str) {
        for ch in s.chars() {
            handle_key(c, cursor, press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_ctrl_c_exits_from_any_screen() {
        let mut c = new_controller();
        let mut cursor = ConfigCursor::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut c, &mut cursor, ctrl_c), InputOutcome::Exit);
    }

    #[test]
    fn test_enter_without_tables_shows_error() {
        let mut c = new_controller();
        let mut cursor = ConfigCursor::default();
        handle_key(&mut c, &mut cursor, press(KeyCode::Enter));
        assert_eq!(c.app_state(), AppState::Configuring);
        assert!(c.selection_error().is_some());
    }

    #[test]
    fn test_toggle_tables_and_wrap() {
        let mut c = new_controller();
        let mut cursor = ConfigCursor::default();
        handle_key(&mut c, &mut cursor, press(KeyCode::Left));
        assert_eq!(cursor.table, 12);
        handle_key(&mut c, &mut cursor, press(KeyCode::Char(' ')));
        handle_key(&mut c, &mut cursor, press(KeyCode::Right));
        assert_eq!(cursor.table, 1);
        handle_key(&mut c, &mut cursor, press(KeyCode::Char(' ')));
        assert!(c.form().is_selected(12));
        assert!(c.form().is_selected(1));
    }

    #[test]
    fn test_select_all_tables() {
        let mut c = new_controller();
        let mut cursor = ConfigCursor::default();
        handle_key(&mut c, &mut cursor, press(KeyCode::Char('a')));
        assert_eq!(c.form().tables.len(), 12);
        handle_key(&mut c, &mut cursor, press(KeyCode::Char('a')));
        assert!(c.form().tables.is_empty());
    }

    #[test]
    fn test_timer_fields_skipped_when_timer_off() {
        let mut c = new_controller();
        let mut cursor = ConfigCursor::default();
        handle_key(&mut c, &mut cursor, press(KeyCode::Down));
        handle_key(&mut c, &mut cursor, press(KeyCode::Down));
        assert_eq!(cursor.field, ConfigField::Timer);
        handle_key(&mut c, &mut cursor, press(KeyCode::Down));
        assert_eq!(cursor.field, ConfigField::Start);

        handle_key(&mut c, &mut cursor, press(KeyCode::Up));
        assert_eq!(cursor.field, ConfigField::Timer);
        handle_key(&mut c, &mut cursor, press(KeyCode::Char(' ')));
        assert!(c.form().timer_enabled);
        handle_key(&mut c, &mut cursor, press(KeyCode::Down));
        assert_eq!(cursor.field, ConfigField::TimerSeconds);
    }

    #[test]
    fn test_edit_problem_count() {
        let mut c = new_controller();
        let mut cursor = ConfigCursor {
            field: ConfigField::Problems,
            table: 1,
        };
        handle_key(&mut c, &mut cursor, press(KeyCode::Backspace));
        handle_key(&mut c, &mut cursor, press(KeyCode::Backspace));
        type_str(&mut c, &mut cursor, "5x");
        assert_eq!(c.form().problems, "5");
    }

    #[test]
    fn test_typing_and_submitting_an_answer() {
        let mut c = new_controller();
        c.form_mut().toggle_table(3);
        let mut cursor = ConfigCursor::default();
        handle_key(&mut c, &mut cursor, press(KeyCode::Enter));
        assert_eq!(c.app_state(), AppState::Quiz);

        let answer = c.session().unwrap().question.answer.to_string();
        type_str(&mut c, &mut cursor, &format!("a{}", answer));
        assert_eq!(c.session().unwrap().input_buffer, answer);

        handle_key(&mut c, &mut cursor, press(KeyCode::Enter));
        let session = c.session().unwrap();
        assert_eq!((session.score, session.total_answered), (1, 1));

        // Typing is ignored while feedback is shown.
        type_str(&mut c, &mut cursor, "7");
        assert_eq!(c.session().unwrap().input_buffer, answer);
    }

    #[test]
    fn test_escape_then_confirm_returns_to_configuration() {
        let mut c = new_controller();
        c.form_mut().toggle_table(3);
        c.start().unwrap();
        let mut cursor = ConfigCursor::default();

        handle_key(&mut c, &mut cursor, press(KeyCode::Esc));
        assert_eq!(c.app_state(), AppState::QuizQuitConfirm);
        handle_key(&mut c, &mut cursor, press(KeyCode::Char('n')));
        assert_eq!(c.app_state(), AppState::Quiz);

        handle_key(&mut c, &mut cursor, press(KeyCode::Esc));
        handle_key(&mut c, &mut cursor, press(KeyCode::Char('y')));
        assert_eq!(c.app_state(), AppState::Configuring);
        assert!(c.form().is_selected(3));
    }

    #[test]
    fn test_summary_keys() {
        let mut c = new_controller();
        c.form_mut().toggle_table(2);
        c.form_mut().problems = "1".to_string();
        c.start().unwrap();
        c.submit_answer("0").unwrap();
        c.advance(std::time::Duration::from_secs(2));
        assert_eq!(c.app_state(), AppState::Summary);

        let mut cursor = ConfigCursor::default();
        handle_key(&mut c, &mut cursor, press(KeyCode::Char('r')));
        assert_eq!(c.app_state(), AppState::Quiz);

        c.submit_answer("0").unwrap();
        c.advance(std::time::Duration::from_secs(2));
        handle_key(&mut c, &mut cursor, press(KeyCode::Char('m')));
        assert_eq!(c.app_state(), AppState::Configuring);

        assert_eq!(
            handle_key(&mut c, &mut cursor, press(KeyCode::Esc)),
            InputOutcome::Exit
        );
    }
}
