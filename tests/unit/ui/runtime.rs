use super::*;
use crate::ui::backend::headless::HeadlessConsole;
use crate::ui::core::button::Button;
use crate::ui::core::event::{KeyCode, KeyModifiers};
use crate::ui::core::geom::make_box;
use std::cell::Cell;
use std::rc::Rc;

fn counting_registry() -> (ButtonRegistry, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let mut registry = ButtonRegistry::new();
    registry
        .register(Button::new(make_box(10, 3, 5, 5), "+1").on_click(move || c.set(c.get() + 1)))
        .unwrap();
    (registry, count)
}

#[test]
fn idle_tick_keeps_running() {
    let mut console = HeadlessConsole::new(80, 24);
    let (mut registry, count) = counting_registry();
    let mut lp = EventLoop::new();

    assert_eq!(lp.step(&mut console, &mut registry).unwrap(), LoopState::Running);
    assert_eq!(count.get(), 0);
}

#[test]
fn left_click_dispatches_to_registry() {
    let mut console = HeadlessConsole::new(80, 24);
    let (mut registry, count) = counting_registry();
    let mut lp = EventLoop::new();

    console.push_event(InputEvent::left_click(7, 6));
    console.push_event(InputEvent::left_click(100, 100));

    assert!(lp.step(&mut console, &mut registry).unwrap().is_running());
    assert_eq!(count.get(), 1);
    assert!(lp.step(&mut console, &mut registry).unwrap().is_running());
    assert_eq!(count.get(), 1);
}

#[test]
fn other_mouse_buttons_are_ignored() {
    let mut console = HeadlessConsole::new(80, 24);
    let (mut registry, count) = counting_registry();
    let mut lp = EventLoop::new();

    console.push_event(InputEvent::MousePress {
        button: MouseButton::Right,
        column: 7,
        row: 6,
    });
    lp.step(&mut console, &mut registry).unwrap();
    assert_eq!(count.get(), 0);
}

#[test]
fn step_handles_one_event_per_call() {
    let mut console = HeadlessConsole::new(80, 24);
    let (mut registry, count) = counting_registry();
    let mut lp = EventLoop::new();

    for _ in 0..3 {
        console.push_event(InputEvent::left_click(6, 6));
    }
    lp.step(&mut console, &mut registry).unwrap();
    assert_eq!(count.get(), 1);
    assert_eq!(console.pending_events(), 2);
}

#[test]
fn platform_quit_key_stops_the_loop() {
    let mut console =
        HeadlessConsole::new(80, 24).with_quit_key(Key::simple(KeyCode::Esc));
    let (mut registry, _) = counting_registry();
    let mut lp = EventLoop::new();

    console.push_event(InputEvent::Key(Key::simple(KeyCode::Char('q'))));
    console.push_event(InputEvent::Key(Key::simple(KeyCode::Esc)));

    assert_eq!(lp.step(&mut console, &mut registry).unwrap(), LoopState::Running);
    assert_eq!(lp.step(&mut console, &mut registry).unwrap(), LoopState::Stopped);
}

#[test]
fn stopped_is_terminal() {
    let mut console = HeadlessConsole::new(80, 24);
    let (mut registry, count) = counting_registry();
    let mut lp = EventLoop::new();

    console.push_event(InputEvent::Key(Key::simple(KeyCode::Char('q'))));
    console.push_event(InputEvent::left_click(7, 6));

    assert_eq!(lp.step(&mut console, &mut registry).unwrap(), LoopState::Stopped);
    assert_eq!(lp.step(&mut console, &mut registry).unwrap(), LoopState::Stopped);
    assert_eq!(count.get(), 0);
    assert_eq!(console.pending_events(), 1);
}

#[test]
fn configured_quit_key_overrides_platform_key() {
    let mut console = HeadlessConsole::new(80, 24);
    let (mut registry, _) = counting_registry();
    let mut lp = EventLoop::with_quit_key(Key::ctrl(KeyCode::Char('c')));

    console.push_event(InputEvent::Key(Key::simple(KeyCode::Char('q'))));
    console.push_event(InputEvent::Key(Key::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));

    assert!(lp.step(&mut console, &mut registry).unwrap().is_running());
    assert!(!lp.step(&mut console, &mut registry).unwrap().is_running());
}

#[test]
fn resize_is_not_a_click() {
    let mut console = HeadlessConsole::new(80, 24);
    let (mut registry, count) = counting_registry();
    let mut lp = EventLoop::new();

    console.push_event(InputEvent::Resize(7, 6));
    assert!(lp.step(&mut console, &mut registry).unwrap().is_running());
    assert_eq!(count.get(), 0);
}

#[test]
fn explicit_stop() {
    let mut lp = EventLoop::default();
    assert_eq!(lp.state(), LoopState::Running);
    lp.stop();
    assert_eq!(lp.state(), LoopState::Stopped);
}
