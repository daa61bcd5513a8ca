use crate::scoring::ScoreSummary;
use crate::ui::layout::calculate_summary_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, summary: &ScoreSummary) {
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new("Quiz Complete!")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let percent_color = match summary.percentage {
        80.. => Color::Green,
        60..=79 => Color::Yellow,
        _ => Color::Red,
    };

    let mut summary_text = Text::default();
    summary_text.push_line(Line::from(""));
    summary_text.push_line(Line::from(Span::styled(
        format!("{}%", summary.percentage),
        Style::default()
            .fg(percent_color)
            .add_modifier(Modifier::BOLD),
    )));
    summary_text.push_line(Line::from(""));
    summary_text.push_line(Line::from(format!(
        "You got {} out of {} correct",
        summary.score, summary.total
    )));
    summary_text.push_line(Line::from(""));
    summary_text.push_line(Line::from(summary.message()));

    let content = Paragraph::new(summary_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(content, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Try Again  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" New Settings  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
