use crossbeam_channel::{select, tick, unbounded, Receiver};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::thread;
use std::time::{Duration, Instant};
use times_tables_drill::{
    draw_app, handle_key, logger, ConfigCursor, InputOutcome, QuizController, Settings,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(100);

fn spawn_key_reader() -> io::Result<Receiver<KeyEvent>> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name("times-tables-drill::keys".to_string())
        .spawn(move || loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(key).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    logger::log(&format!("Key reader stopped: {}", e));
                    break;
                }
            }
        })?;
    Ok(rx)
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    settings: &Settings,
) -> io::Result<()> {
    let mut controller = QuizController::new(settings.to_form());
    let mut cursor = ConfigCursor::default();

    let keys = spawn_key_reader()?;
    let frames = tick(FRAME_INTERVAL);
    let mut last = Instant::now();

    loop {
        terminal.draw(|f| draw_app(f, &controller, &cursor))?;

        let key = select! {
            recv(keys) -> key => match key {
                Ok(key) => Some(key),
                Err(_) => return Ok(()),
            },
            recv(frames) -> _ => None,
        };

        // Let due ticks fire before the key is applied.
        let now = Instant::now();
        controller.advance(now - last);
        last = now;

        if let Some(key) = key
            && handle_key(&mut controller, &mut cursor, key) == InputOutcome::Exit
        {
            return Ok(());
        }
    }
}

fn main() -> io::Result<()> {
    let settings = Settings::load();
    logger::init(&settings.log_path());
    logger::log("Starting times-tables-drill");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &settings);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
