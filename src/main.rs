//! Demo application: two screens, a click counter and a quit key.

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::Duration;

use boxui::settings::{self, Settings};
use boxui::tui::console::PlatformConsole;
use boxui::tui::terminal_guard::{ConsoleGuard, TerminationSignal};
use boxui::ui::core::button::{Button, ButtonRegistry};
use boxui::ui::core::console::{dimensions_or_default, ConsoleAdapter};
use boxui::ui::core::error::Result;
use boxui::ui::core::geom::{make_box, Size};
use boxui::ui::core::painter::Renderer;
use boxui::ui::runtime::{EventLoop, LoopState};

const HOME: usize = 0;
const ABOUT: usize = 1;

#[derive(Clone, Default)]
struct AppState {
    screen: Rc<Cell<usize>>,
    clicks: Rc<Cell<u32>>,
}

struct Screen {
    draw: fn(&mut Renderer<'_, PlatformConsole>, &AppState, Size) -> Result<()>,
    buttons: fn(&AppState, Size) -> Vec<Button>,
}

static SCREENS: [Screen; 2] = [
    Screen {
        draw: draw_home,
        buttons: home_buttons,
    },
    Screen {
        draw: draw_about,
        buttons: about_buttons,
    },
];

fn draw_home(r: &mut Renderer<'_, PlatformConsole>, state: &AppState, size: Size) -> Result<()> {
    let area = size.area();
    r.border(area, 1)?;
    r.centered_text(make_box(area.w, 1, 0, 2), "boxui demo", true, true)?;
    let count = format!("clicks: {:<6}", state.clicks.get());
    r.centered_text(make_box(area.w, 1, 0, 4), &count, true, true)?;
    Ok(())
}

fn home_buttons(state: &AppState, size: Size) -> Vec<Button> {
    let mid = size.columns / 2;
    let clicks = state.clicks.clone();
    let screen = state.screen.clone();
    vec![
        Button::new(make_box(12, 3, mid.saturating_sub(13), 7), "+1")
            .on_click(move || clicks.set(clicks.get().saturating_add(1))),
        Button::new(make_box(12, 3, mid.saturating_add(1), 7), "About")
            .on_click(move || screen.set(ABOUT)),
    ]
}

fn draw_about(r: &mut Renderer<'_, PlatformConsole>, _state: &AppState, size: Size) -> Result<()> {
    let area = size.area();
    r.border(area, 1)?;
    r.centered_text(make_box(area.w, 1, 0, 2), "About", true, true)?;
    r.centered_text(
        make_box(area.w, 1, 0, 4),
        "Click a button, or press the quit key to leave.",
        true,
        true,
    )?;
    Ok(())
}

fn about_buttons(state: &AppState, size: Size) -> Vec<Button> {
    let screen = state.screen.clone();
    vec![Button::new(
        make_box(12, 3, (size.columns / 2).saturating_sub(6), 7),
        "Back",
    )
    .on_click(move || screen.set(HOME))]
}

fn clear_screen(console: &mut PlatformConsole) -> io::Result<()> {
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::Hide
    )?;
    console.flush()
}

fn run(console: &mut PlatformConsole, settings: &Settings) -> io::Result<()> {
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    let _signals = boxui::tui::terminal_guard::install_termination_signals(
        signal_tx,
        boxui::tui::console::emergency_restore,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let state = AppState::default();
    let mut registry = ButtonRegistry::new();
    let mut event_loop = match settings.quit_key() {
        Some(key) => EventLoop::with_quit_key(key),
        None => EventLoop::new(),
    };
    let tick = Duration::from_millis(settings.tick_ms.max(1));
    let mut shown: Option<(usize, Size)> = None;

    loop {
        let size = dimensions_or_default(&*console, settings.fallback_size());
        let current = state.screen.get().min(SCREENS.len() - 1);
        let screen = &SCREENS[current];

        if shown != Some((current, size)) {
            clear_screen(console)?;
            registry.release_all();
            for button in (screen.buttons)(&state, size) {
                if let Err(err) = registry.register(button) {
                    tracing::error!(error = %err, "button not registered");
                }
            }
            shown = Some((current, size));
        }

        {
            let mut renderer = Renderer::new(&mut *console);
            if let Err(err) = (screen.draw)(&mut renderer, &state, size) {
                tracing::warn!(error = %err, screen = current, "screen draw failed");
            }
            for button in registry.iter() {
                if let Err(err) = renderer.button(button) {
                    tracing::warn!(error = %err, label = button.label(), "button draw failed");
                }
            }
            renderer.flush()?;
        }

        if event_loop.step(&mut *console, &mut registry)? == LoopState::Stopped {
            break;
        }
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "termination signal");
            break;
        }
        std::thread::sleep(tick);
    }

    registry.release_all();
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0),
        crossterm::cursor::Show
    )?;
    Ok(())
}

fn main() -> io::Result<()> {
    let _logging = boxui::logging::init();

    if let Err(err) = settings::ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    let settings = settings::load_settings().unwrap_or_default();

    let mut guard = ConsoleGuard::new(PlatformConsole::stdout())?;
    let result = run(&mut guard, &settings);
    if let Err(err) = &result {
        tracing::error!(error = %err, "demo exited with error");
    }
    guard.restore()?;
    result
}
