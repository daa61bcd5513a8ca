use crate::models::{Countdown, FeedbackKind};
use crate::session::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{cursor_column, truncate_string};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn draw_countdown(f: &mut Frame, area: ratatui::layout::Rect, countdown: &Countdown, total: u32) {
    let color = if countdown.is_warning() {
        Color::Red
    } else {
        Color::Green
    };
    let ratio = if total == 0 {
        0.0
    } else {
        f64::from(countdown.remaining) / f64::from(total)
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("⏱ Time"))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}s", countdown.remaining));
    f.render_widget(gauge, area);
}

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_quiz_chunks(f.area());

    let progress = format!(
        "Question {} / {}   Score: {} / {}",
        session.question_number(),
        session.config.problem_count(),
        session.score,
        session.total_answered
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question_area = layout.question_area;
    let inner_top = question_area.height.saturating_sub(3) / 2;
    let mut question_lines = vec![Line::from(""); inner_top as usize];
    question_lines.push(Line::from(Span::styled(
        session.question.prompt(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    let question = Paragraph::new(question_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, question_area);

    match (session.countdown, session.config.timer()) {
        (Some(countdown), Some(timer)) => {
            draw_countdown(f, layout.timer_area, &countdown, timer.seconds);
        }
        _ => {
            let untimed = Paragraph::new("No time limit")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("⏱ Time"));
            f.render_widget(untimed, layout.timer_area);
        }
    }

    let accepting = session.accepting_answers();
    let answer_text = if session.input_buffer.is_empty() && accepting {
        Span::styled(
            "[Type your answer here...]",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::from(session.input_buffer.as_str())
    };
    let answer = Paragraph::new(Line::from(answer_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Your Answer")
            .border_style(if accepting {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            }),
    );
    f.render_widget(answer, layout.answer_area);

    if accepting {
        let col = cursor_column(&session.input_buffer, session.cursor_position) as u16;
        let cursor_x = layout.answer_area.x + 1 + col;
        let cursor_y = layout.answer_area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }

    if let Some(feedback) = &session.feedback {
        let color = match feedback.kind {
            FeedbackKind::Correct => Color::Green,
            FeedbackKind::Incorrect => Color::Red,
            FeedbackKind::Prompt => Color::Yellow,
        };
        let width = layout.feedback_area.width.saturating_sub(2) as usize;
        let feedback = Paragraph::new(truncate_string(&feedback.text, width))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(feedback, layout.feedback_area);
    } else {
        f.render_widget(
            Block::default().borders(Borders::ALL),
            layout.feedback_area,
        );
    }

    let help_text = vec![Line::from(vec![
        key_span("Enter"),
        Span::from(" Submit  "),
        key_span("Esc"),
        Span::from(" Back to Settings  "),
        key_span("Ctrl+C"),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Back to Settings")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Stop this quiz and return to the settings?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Back to Settings)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        key_span("Ctrl+C"),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
