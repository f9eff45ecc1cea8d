//! Composing rendered blocks with the layout functions.

use spark_gloss::{
    Position, Renderer, Style, join_horizontal, join_vertical, normal_border, place,
    place_horizontal, place_vertical, strip_ansi,
};

fn boxed(text: &str) -> String {
    Renderer::new(false).render(&Style::new().border(normal_border()), text)
}

#[test]
fn join_horizontal_plain_scenario() {
    let out = join_horizontal(Position::Top, &["a\nbb", "c"]);
    assert_eq!(strip_ansi(&out), "a c\nbb ");
}

#[test]
fn join_horizontal_centers_short_block() {
    let out = join_horizontal(Position::Center, &[boxed("a"), "b".to_string()]);
    assert_eq!(out, "┌─┐ \n│a│b\n└─┘ ");
}

#[test]
fn join_vertical_centers_narrow_block() {
    let out = join_vertical(Position::Center, &[boxed("a").as_str(), "b"]);
    assert_eq!(out, "┌─┐\n│a│\n└─┘\n b ");
}

#[test]
fn join_vertical_right_aligns_styled_lines() {
    let bold = Renderer::new(false).render(&Style::new().bold(true), "ab");
    let out = join_vertical(Position::Right, &[bold.as_str(), "wide"]);
    assert_eq!(out, "  \x1b[1mab\x1b[0m\nwide");
}

#[test]
fn place_plain_scenario() {
    assert_eq!(
        place(5, 3, Position::Center, Position::Center, "x"),
        "     \n  x  \n     "
    );
}

#[test]
fn place_rendered_box() {
    let out = place(7, 5, Position::Center, Position::Center, &boxed("a"));
    assert_eq!(
        out,
        "       \n  ┌─┐  \n  │a│  \n  └─┘  \n       "
    );
}

#[test]
fn place_keeps_escape_codes_of_cut_lines() {
    let styled = "\x1b[31mabcdef\x1b[0m";
    let out = place(3, 1, Position::Left, Position::Top, styled);
    assert_eq!(out, "\x1b[31mabc\x1b[0m");
}

#[test]
fn place_horizontal_and_vertical_compose() {
    let out = place_vertical(3, Position::Bottom, &place_horizontal(4, Position::Right, "ab"));
    assert_eq!(out, "    \n    \n  ab");
    assert_eq!(out, place(4, 3, Position::Right, Position::Bottom, "ab"));
}
