use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::ConfigForm;
use crate::input::{ConfigCursor, ConfigField};
use crate::models::MAX_FACTOR;
use crate::ui::layout::calculate_config_chunks;
use crate::utils::truncate_string;

const TABLES_PER_ROW: u32 = 6;

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn field_style(focused: bool, enabled: bool) -> Style {
    if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn table_lines(form: &ConfigForm, cursor: &ConfigCursor) -> Vec<Line<'static>> {
    let focused = cursor.field == ConfigField::Tables;
    (0..MAX_FACTOR / TABLES_PER_ROW)
        .map(|row| {
            let spans: Vec<Span> = (1..=TABLES_PER_ROW)
                .map(|col| {
                    let table = row * TABLES_PER_ROW + col;
                    let style = field_style(focused && cursor.table == table, true);
                    Span::styled(
                        format!(" {} {:>2}× ", checkbox(form.is_selected(table)), table),
                        style,
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn option_line<'a>(label: &'a str, value: String, focused: bool, enabled: bool) -> Line<'a> {
    let marker = if focused { "▶ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, field_style(focused, enabled)),
        Span::styled(format!("{:<24}", label), field_style(focused, enabled)),
        Span::styled(value, field_style(focused, enabled)),
    ])
}

pub fn draw_menu(
    f: &mut Frame,
    form: &ConfigForm,
    cursor: &ConfigCursor,
    selection_error: Option<&str>,
) {
    let layout = calculate_config_chunks(f.area());

    let title = Paragraph::new("Times Tables Drill v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let tables_focused = cursor.field == ConfigField::Tables;
    let tables = Paragraph::new(table_lines(form, cursor)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Pick your times tables")
            .border_style(if tables_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            }),
    );
    f.render_widget(tables, layout.tables_area);

    let timer_on = form.timer_enabled;
    let is = |field: ConfigField| cursor.field == field;
    let options = vec![
        option_line(
            "Number of problems",
            form.problems.clone(),
            is(ConfigField::Problems),
            true,
        ),
        option_line(
            "Countdown timer",
            checkbox(timer_on).to_string(),
            is(ConfigField::Timer),
            true,
        ),
        option_line(
            "Seconds per question",
            form.timer_seconds.clone(),
            is(ConfigField::TimerSeconds),
            timer_on,
        ),
        option_line(
            "Skip when time runs out",
            checkbox(form.auto_skip).to_string(),
            is(ConfigField::AutoSkip),
            timer_on,
        ),
        Line::from(""),
        option_line("🚀 Start!", String::new(), is(ConfigField::Start), true),
    ];
    let options = Paragraph::new(options)
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    if let Some(error) = selection_error {
        let error = Paragraph::new(truncate_string(error, layout.error_area.width as usize))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(error, layout.error_area);
    }

    let help_text = vec![Line::from(vec![
        key_span("↑/↓"),
        Span::from(" Field  "),
        key_span("←/→"),
        Span::from(" Table  "),
        key_span("Space"),
        Span::from(" Toggle  "),
        key_span("a"),
        Span::from(" All  "),
        key_span("Enter"),
        Span::from(" Start  "),
        key_span("Esc/Ctrl+C"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
