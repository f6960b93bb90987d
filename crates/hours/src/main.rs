use std::time::{Duration, Instant};

use chrono::{Local, NaiveTime};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use hours_config::Config;
use hours_core::{PoemWord, poem};
use hours_field::{ContactId, Engine, EngineConfig, Gradient};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
};

mod logging;
mod render;

use render::{FieldView, cell_to_world};

/// Poem shown when no `poem_path` is configured.
const BUNDLED_POEM: &str = include_str!("../poem.txt");

/// Activity added by the space bar.
const KEY_PUMP: f64 = 0.1;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(err) = logging::init() {
        eprintln!("logging disabled: {err}");
    }

    let config = Config::load()?;
    let app = App::new(&config)?;

    let terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;
    let result = app.run(terminal);
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// Read the configured poem, or the bundled one when none is configured.
fn load_words(config: &Config) -> Vec<PoemWord> {
    match &config.poem_path {
        Some(path) => poem::load(path).unwrap_or_else(|err| {
            tracing::warn!(%err, "no poem loaded; the field will be empty");
            Vec::new()
        }),
        None => poem::parse(BUNDLED_POEM),
    }
}

/// Terminal host for the word field.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    engine: Engine,
    /// Last background reported by the engine.
    gradient: Gradient,
    frame_interval: Duration,
    evaluate_interval: Duration,
    last_evaluate: Option<Instant>,
    /// Pinned clock from the config, if any.
    fixed_time: Option<NaiveTime>,
    /// Where the field was last drawn, for mapping mouse cells to world points.
    field_area: Rect,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded configuration.
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let engine_config = EngineConfig {
            transition_window_minutes: config.transition_window_minutes,
            half_extents: glam::DVec2::new(config.world.width, config.world.height) / 2.0,
            activity_pump: config.activity.pump_per_contact,
            activity_decay_per_tick: config.activity_decay_per_tick(),
            seed: config.seed,
        };
        let engine = Engine::new(engine_config, load_words(config));

        Ok(Self {
            running: false,
            engine,
            gradient: Gradient::BLACK,
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(config.timing.frame_rate)),
            evaluate_interval: Duration::from_secs(config.timing.evaluate_interval_secs),
            last_evaluate: None,
            fixed_time: config.clock.fixed_time()?,
            field_area: Rect::default(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut next_frame = Instant::now();
        while self.running {
            self.evaluate_if_due();
            if let Some(gradient) = self.engine.tick().background {
                self.gradient = gradient;
            }
            terminal.draw(|frame| self.render(frame))?;

            let now = Instant::now();
            next_frame = (next_frame + self.frame_interval).max(now);
            self.handle_crossterm_events(next_frame)?;
        }
        tracing::info!("exiting");
        Ok(())
    }

    fn evaluate_if_due(&mut self) {
        if self
            .last_evaluate
            .is_some_and(|at| at.elapsed() < self.evaluate_interval)
        {
            return;
        }
        let time = self.fixed_time.unwrap_or_else(|| Local::now().time());
        self.engine.evaluate(&time);
        self.last_evaluate = Some(Instant::now());
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let [field, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        self.field_area = field;

        frame.render_widget(
            FieldView {
                gradient: self.gradient,
                words: self.engine.particles(),
                half_extents: self.engine.half_extents(),
            },
            field,
        );

        let blend = self.engine.blend();
        let status = Line::from(vec![
            format!(" {} ", blend.phase).bold(),
            format!("→ {} {:>3.0}%  ", blend.next, blend.blend * 100.0).dark_gray(),
            "q".bold(),
            " quit  ".dark_gray(),
            "space".bold(),
            " stir  ".dark_gray(),
            "mouse".bold(),
            " attract".dark_gray(),
        ]);
        frame.render_widget(status, footer);
    }

    /// Reads crossterm events until `deadline`, so the next frame starts on time.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                _ => {}
            }
            if timeout.is_zero() {
                break;
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.engine.pump_activity(KEY_PUMP),
            _ => {}
        }
    }

    /// Each mouse button is its own contact.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let point = cell_to_world(
            mouse.column,
            mouse.row,
            self.field_area,
            self.engine.half_extents(),
        );
        match mouse.kind {
            MouseEventKind::Down(button) => {
                self.engine.add_attractor(contact_id(button), point);
            }
            MouseEventKind::Drag(button) => {
                self.engine.move_attractor(contact_id(button), point);
            }
            MouseEventKind::Up(button) => {
                self.engine.remove_attractor(contact_id(button));
            }
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

const fn contact_id(button: MouseButton) -> ContactId {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
    }
}
