use super::*;
use crate::ui::backend::headless::HeadlessConsole;
use crate::ui::core::geom::make_box;

fn border_cells(console: &HeadlessConsole) -> Vec<(u16, u16)> {
    let area = console.buffer().area();
    let mut out = Vec::new();
    for y in 0..area.h {
        for x in 0..area.w {
            if console.buffer().cell(x, y) == Some("#") {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn text_is_written_at_the_requested_cell() {
    let mut console = HeadlessConsole::new(10, 3);
    Renderer::new(&mut console).text(2, 1, "hi").unwrap();
    assert_eq!(console.buffer().row(1), "  hi      ");
}

#[test]
fn thin_border_is_a_hollow_rectangle() {
    let mut console = HeadlessConsole::new(8, 6);
    Renderer::new(&mut console)
        .border(make_box(5, 4, 1, 1), 1)
        .unwrap();

    assert_eq!(console.buffer().row(0), "        ");
    assert_eq!(console.buffer().row(1), " #####  ");
    assert_eq!(console.buffer().row(2), " #   #  ");
    assert_eq!(console.buffer().row(3), " #   #  ");
    assert_eq!(console.buffer().row(4), " #####  ");
    assert_eq!(console.buffer().row(5), "        ");
}

#[test]
fn border_touches_exactly_the_edge_band() {
    for (w, h, t) in [(6, 6, 2), (9, 5, 2), (7, 7, 3), (4, 4, 2), (10, 3, 1)] {
        let rect = make_box(w, h, 2, 1);
        let mut console = HeadlessConsole::new(16, 10);
        Renderer::new(&mut console).border(rect, t).unwrap();

        let mut expected = Vec::new();
        for y in 0..h {
            for x in 0..w {
                if x < t || x >= w - t || y < t || y >= h - t {
                    expected.push((x + rect.x, y + rect.y));
                }
            }
        }
        expected.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(border_cells(&console), expected, "w={w} h={h} t={t}");
    }
}

#[test]
fn too_thick_border_fails_without_drawing() {
    for (w, h, t) in [(3, 10, 2), (10, 3, 2), (1, 1, 1), (0, 0, 1)] {
        let mut console = HeadlessConsole::new(12, 12);
        let err = Renderer::new(&mut console)
            .border(make_box(w, h, 0, 0), t)
            .unwrap_err();
        assert!(matches!(
            err,
            UiError::BorderTooThick { width, height, thickness }
                if width == w && height == h && thickness == t
        ));
        assert!(console.writes().is_empty());
        assert!(err.to_string().contains("too thick"));
    }
}

#[test]
fn zero_thickness_draws_nothing() {
    let mut console = HeadlessConsole::new(5, 5);
    Renderer::new(&mut console)
        .border(make_box(3, 3, 0, 0), 0)
        .unwrap();
    assert!(console.writes().is_empty());
}

#[test]
fn centered_text_uses_center_position() {
    let mut console = HeadlessConsole::new(20, 5);
    Renderer::new(&mut console)
        .centered_text(make_box(10, 3, 5, 1), "abcd", true, true)
        .unwrap();
    assert_eq!(console.writes(), &[(Pos::new(8, 2), "abcd".to_string())]);

    console.clear_writes();
    Renderer::new(&mut console)
        .centered_text(make_box(10, 3, 5, 1), "abcd", false, true)
        .unwrap();
    assert_eq!(console.writes(), &[(Pos::new(0, 2), "abcd".to_string())]);
}

#[test]
fn button_draws_border_and_centered_label() {
    let mut console = HeadlessConsole::new(12, 4);
    let button = Button::new(make_box(8, 3, 1, 0), "Go");
    Renderer::new(&mut console).button(&button).unwrap();

    assert_eq!(console.buffer().row(0), " ########   ");
    assert_eq!(console.buffer().row(1), " #  Go  #   ");
    assert_eq!(console.buffer().row(2), " ########   ");
}

#[test]
fn button_label_is_truncated_to_fit() {
    let mut console = HeadlessConsole::new(10, 3);
    let button = Button::new(make_box(5, 3, 0, 0), "Continue");
    Renderer::new(&mut console).button(&button).unwrap();
    assert_eq!(console.buffer().row(1), "#Con#     ");
}

#[test]
fn flat_button_draws_label_only() {
    let mut console = HeadlessConsole::new(10, 1);
    let button = Button::new(make_box(6, 1, 2, 0), "ok");
    Renderer::new(&mut console).button(&button).unwrap();
    assert_eq!(console.buffer().row(0), "    ok    ");
}

#[test]
fn truncate_respects_grapheme_width() {
    assert_eq!(truncate_to_width("你好吗", 5), "你好");
    assert_eq!(truncate_to_width("abc", 0), "");
    assert_eq!(truncate_to_width("abc", 10), "abc");
    assert_eq!(display_width("你a"), 3);
}

#[test]
fn flush_reaches_console() {
    let mut console = HeadlessConsole::new(1, 1);
    Renderer::new(&mut console).flush().unwrap();
    assert_eq!(console.flushes(), 1);
}
