//! A self-drawing page indicator for the terminal.
//!
//! Run the binary to swipe through a strip of demo pages with a row of
//! tapering dots underneath that tracks them.
//! Run with `--print-config` to dump the effective configuration.

mod app;
mod config;
mod core;
mod ui;

use std::fs::File;
use std::io::{self, stderr};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    pager::DemoPager,
    state::AppState,
};
use crate::config::AppConfig;
use crate::core::color::Rgb;
use crate::core::options::Easing;
use crate::core::pager::Pager;
use crate::ui::{
    indicator_widget::{indicator_rows, DotCanvas},
    layout::AppLayout,
    pager_widget::PagerWidget,
    theme::Theme,
};

/// Animation frame interval (~60 fps).
const FRAME: Duration = Duration::from_millis(16);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Tapering page-indicator dots that follow a pager")]
struct Cli {
    /// Number of demo pages.
    #[arg(default_value_t = 12)]
    pages: usize,

    /// Page to start on (0-based).
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Visible dot slots.
    #[arg(long)]
    dot_count: Option<usize>,

    /// Full dot diameter, in braille dots.
    #[arg(long)]
    dot_size: Option<f32>,

    /// Centre-to-centre dot spacing, in braille dots.
    #[arg(long)]
    dot_space: Option<f32>,

    /// Colour of unselected dots (`#rrggbb`).
    #[arg(long)]
    color_default: Option<Rgb>,

    /// Colour of the selected dot (`#rrggbb`).
    #[arg(long)]
    color_selected: Option<Rgb>,

    /// Nominal swipe duration that progress is measured against.
    #[arg(long)]
    duration_ms: Option<u64>,

    /// `linear` or `accelerate_decelerate`.
    #[arg(long)]
    easing: Option<Easing>,

    /// Disable tap-to-navigate on the dots.
    #[arg(long)]
    no_navigation: bool,

    /// Fraction of the remaining distance the pager closes per frame.
    #[arg(long)]
    swipe_speed: Option<f64>,

    /// Write logs here instead of stderr (filter with `RUST_LOG`).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration and exit.
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Flags win over the config file.
    fn apply(&self, config: &mut AppConfig) {
        let o = &mut config.indicator;
        if let Some(v) = self.dot_count {
            o.dot_count = v;
        }
        if let Some(v) = self.dot_size {
            o.dot_size = v;
        }
        if let Some(v) = self.dot_space {
            o.dot_space = v;
        }
        if let Some(v) = self.color_default {
            o.color_default = v;
        }
        if let Some(v) = self.color_selected {
            o.color_selected = v;
        }
        if let Some(v) = self.duration_ms {
            o.animation_duration_ms = v;
        }
        if let Some(v) = self.easing {
            o.easing = v;
        }
        if self.no_navigation {
            o.page_navigation_enabled = false;
        }
        if let Some(v) = self.swipe_speed {
            config.swipe_speed = v.clamp(0.05, 0.95);
        }
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr) // never pollute stdout
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── drawing ──────────

fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    state.terminal_area = area;
    let layout = AppLayout::from_area(area, indicator_rows(&state.indicator));

    state.pager.set_page_width(layout.pager_area.width);
    frame.render_widget(
        PagerWidget::new(state.pager.pages(), state.pager.position()),
        layout.pager_area,
    );

    let dots = DotCanvas::prepare(&mut state.indicator, layout.indicator_area);
    tracing::trace!(dots = dots.circle_count(), "indicator frame");
    frame.render_widget(dots, layout.indicator_area);

    render_status(frame, state, layout.status_area);
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let left = match &state.status_message {
        Some(msg) => Span::styled(format!(" {msg}"), Theme::status_message_style()),
        None => Span::styled(
            format!(" {}", state.config.status_bar_hint()),
            Theme::status_bar_style(),
        ),
    };
    let position = if state.pager.page_count() == 0 {
        "no pages ".to_string()
    } else {
        format!(
            "{}/{} ",
            state.pager.current_index() + 1,
            state.pager.page_count()
        )
    };
    let pad = usize::from(area.width)
        .saturating_sub(left.width())
        .saturating_sub(position.len());
    let line = Line::from(vec![
        left,
        Span::styled(" ".repeat(pad), Theme::status_bar_style()),
        Span::styled(position, Theme::status_bar_style()),
    ]);
    frame.render_widget(Paragraph::new(line).style(Theme::status_bar_style()), area);
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let mut config = AppConfig::load();
    cli.apply(&mut config);

    if cli.print_config {
        print!("{}", config.serialise());
        return Ok(());
    }

    let pager = DemoPager::new(cli.pages, cli.start, config.swipe_speed);
    let mut state = AppState::new(pager, config);
    tracing::debug!(pages = cli.pages, start = cli.start, "starting");

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;
    state.terminal_area = Rect::new(0, 0, size.width, size.height);

    let mut events = spawn_event_reader(FRAME);

    // ── event loop ────────────────────────────────────────────
    loop {
        // Only repaint when the pager moved, the indicator asked for it,
        // or something else on screen changed.
        if state.take_redraw() {
            terminal.draw(|frame| render(frame, &mut state))?;
        }

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
            AppEvent::Resize(w, h) => {
                state.terminal_area = Rect::new(0, 0, w, h);
                state.dirty = true;
            }
            AppEvent::Tick => state.tick(),
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
