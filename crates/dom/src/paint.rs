//! Painter and hit test for element trees.
//!
//! Geometry attributes `x`/`y`/`w`/`h` position an element relative to its
//! parent. Three tags paint: `panel` draws a bordered box, `cell` a filled
//! box with its text centered, `label` a bare text run. Unknown tags paint
//! nothing themselves; their children still paint, offset by the parent's
//! position. Styles cascade: a child inherits colors it does not set.

use tui_arcade_term::Surface;
use tui_arcade_types::CellStyle;

use crate::element::{Element, Node, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Rect {
    fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x.saturating_add(self.w)
            && y < self.y.saturating_add(self.h)
    }
}

/// Paint a tree onto a surface, root at the surface origin.
pub fn paint(root: &Element, surface: &mut Surface) {
    paint_at(root, (0, 0), CellStyle::default(), surface);
}

/// Resolve a surface point to the element it lands on.
///
/// Children are visited in document order and painted-later wins, so the
/// result is the deepest, latest element whose box contains the point.
pub fn hit_test<'a>(root: &'a Element, x: u16, y: u16) -> Option<&'a Element> {
    hit_at(root, (0, 0), x, y)
}

fn paint_at(element: &Element, base: (u16, u16), inherited: CellStyle, surface: &mut Surface) {
    let rect = rect_of(element, base);
    let style = resolve(inherited, element.style);

    match element.tag.as_str() {
        "panel" => draw_panel(rect, style, surface),
        "cell" => draw_cell(element, rect, style, surface),
        "label" => draw_label(element, rect, style, surface),
        _ => {}
    }

    for child in &element.children {
        if let Node::Element(child_element) = child {
            paint_at(child_element, (rect.x, rect.y), style, surface);
        }
    }
}

fn hit_at<'a>(element: &'a Element, base: (u16, u16), x: u16, y: u16) -> Option<&'a Element> {
    let rect = rect_of(element, base);
    let mut hit = rect.contains(x, y).then_some(element);
    for child in &element.children {
        if let Node::Element(child_element) = child {
            if let Some(deeper) = hit_at(child_element, (rect.x, rect.y), x, y) {
                hit = Some(deeper);
            }
        }
    }
    hit
}

fn rect_of(element: &Element, base: (u16, u16)) -> Rect {
    let x = base.0.saturating_add(attr_u16(element, "x").unwrap_or(0));
    let y = base.1.saturating_add(attr_u16(element, "y").unwrap_or(0));
    let w = attr_u16(element, "w").unwrap_or_else(|| default_width(element));
    let h = attr_u16(element, "h").unwrap_or(1);
    Rect { x, y, w, h }
}

fn attr_u16(element: &Element, name: &str) -> Option<u16> {
    element.get_attr(name).and_then(|v| v.trim().parse().ok())
}

fn default_width(element: &Element) -> u16 {
    let text = element.text_content();
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX).max(1)
}

fn resolve(inherited: CellStyle, style: Style) -> CellStyle {
    CellStyle {
        fg: style.fg.unwrap_or(inherited.fg),
        bg: style.bg.unwrap_or(inherited.bg),
        bold: inherited.bold || style.bold,
        dim: inherited.dim || style.dim,
    }
}

fn draw_panel(rect: Rect, style: CellStyle, surface: &mut Surface) {
    surface.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let right = rect.x.saturating_add(rect.w - 1);
    let bottom = rect.y.saturating_add(rect.h - 1);
    for x in rect.x.saturating_add(1)..right {
        surface.put_char(x, rect.y, '─', style);
        surface.put_char(x, bottom, '─', style);
    }
    for y in rect.y.saturating_add(1)..bottom {
        surface.put_char(rect.x, y, '│', style);
        surface.put_char(right, y, '│', style);
    }
    surface.put_char(rect.x, rect.y, '┌', style);
    surface.put_char(right, rect.y, '┐', style);
    surface.put_char(rect.x, bottom, '└', style);
    surface.put_char(right, bottom, '┘', style);
}

fn draw_cell(element: &Element, rect: Rect, style: CellStyle, surface: &mut Surface) {
    surface.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);
    let text = element.text_content();
    if text.is_empty() {
        return;
    }
    let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let tx = rect.x.saturating_add(rect.w.saturating_sub(len) / 2);
    let ty = rect.y.saturating_add(rect.h / 2);
    surface.put_str(tx, ty, &text, style);
}

fn draw_label(element: &Element, rect: Rect, style: CellStyle, surface: &mut Surface) {
    surface.put_str(rect.x, rect.y, &element.text_content(), style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::create_element;
    use tui_arcade_types::Rgb;

    fn char_at(surface: &Surface, x: u16, y: u16) -> char {
        surface.get(x, y).unwrap().ch
    }

    #[test]
    fn panel_draws_border_box() {
        let mut surface = Surface::new(8, 5);
        let panel = Element::new("panel").attr("w", 6).attr("h", 4);
        paint(&panel, &mut surface);

        assert_eq!(char_at(&surface, 0, 0), '┌');
        assert_eq!(char_at(&surface, 5, 0), '┐');
        assert_eq!(char_at(&surface, 0, 3), '└');
        assert_eq!(char_at(&surface, 5, 3), '┘');
        assert_eq!(char_at(&surface, 2, 0), '─');
        assert_eq!(char_at(&surface, 0, 1), '│');
        assert_eq!(char_at(&surface, 2, 1), ' ');
    }

    #[test]
    fn cell_centers_its_text() {
        let mut surface = Surface::new(10, 3);
        let cell = Element::new("cell")
            .attr("x", 1)
            .attr("y", 0)
            .attr("w", 5)
            .attr("h", 3)
            .child("X");
        paint(&cell, &mut surface);

        assert_eq!(char_at(&surface, 3, 1), 'X');
    }

    #[test]
    fn children_are_positioned_relative_to_parent() {
        let mut surface = Surface::new(12, 6);
        let tree = Element::new("panel").attr("x", 2).attr("y", 1).attr("w", 9).attr("h", 4).child(
            Element::new("label").attr("x", 2).attr("y", 1).child("hi"),
        );
        paint(&tree, &mut surface);

        assert_eq!(char_at(&surface, 4, 2), 'h');
        assert_eq!(char_at(&surface, 5, 2), 'i');
    }

    #[test]
    fn unknown_tag_paints_children_only() {
        let mut surface = Surface::new(8, 2);
        let tree = Element::new("group")
            .attr("x", 3)
            .child(Element::new("label").child("ok"));
        paint(&tree, &mut surface);

        assert_eq!(char_at(&surface, 3, 0), 'o');
        assert_eq!(char_at(&surface, 4, 0), 'k');
        assert_eq!(char_at(&surface, 0, 0), ' ');
    }

    #[test]
    fn child_inherits_colors_it_does_not_set() {
        let mut surface = Surface::new(6, 2);
        let tree = create_element(
            "panel",
            [("w", "6"), ("h", "2"), ("style", "fg: #112233")],
            [Node::from(Element::new("label").child("a"))],
        );
        paint(&tree, &mut surface);

        let cell = surface.get(0, 0).unwrap();
        assert_eq!(cell.style.fg, Rgb::new(0x11, 0x22, 0x33));
    }

    #[test]
    fn hit_test_finds_deepest_element() {
        let board = Element::new("panel")
            .attr("w", 11)
            .attr("h", 7)
            .child(
                Element::new("cell")
                    .attr("x", 1)
                    .attr("y", 1)
                    .attr("w", 3)
                    .attr("h", 1)
                    .attr("row", 0)
                    .attr("col", 0),
            )
            .child(
                Element::new("cell")
                    .attr("x", 4)
                    .attr("y", 1)
                    .attr("w", 3)
                    .attr("h", 1)
                    .attr("row", 0)
                    .attr("col", 1),
            );

        let hit = hit_test(&board, 5, 1).unwrap();
        assert_eq!(hit.get_attr("col"), Some("1"));

        let hit = hit_test(&board, 2, 1).unwrap();
        assert_eq!(hit.get_attr("col"), Some("0"));

        // Between cells the panel itself is hit.
        let hit = hit_test(&board, 9, 5).unwrap();
        assert_eq!(hit.tag, "panel");
    }

    #[test]
    fn hit_test_outside_root_is_none() {
        let board = Element::new("panel").attr("w", 4).attr("h", 4);
        assert!(hit_test(&board, 4, 0).is_none());
        assert!(hit_test(&board, 0, 4).is_none());
    }

    #[test]
    fn panel_at_the_coordinate_limit_clips_without_wrapping() {
        let mut surface = Surface::new(6, 4);
        let panel = Element::new("panel")
            .attr("x", u16::MAX)
            .attr("y", u16::MAX)
            .attr("w", 5)
            .attr("h", 3);
        paint(&panel, &mut surface);

        // Every border and fill write lands outside the surface.
        for y in 0..4 {
            for x in 0..6 {
                assert_eq!(char_at(&surface, x, y), ' ');
            }
        }
        assert!(hit_test(&panel, 5, 3).is_none());
    }

    #[test]
    fn later_sibling_wins_overlap() {
        let tree = Element::new("panel")
            .attr("w", 6)
            .attr("h", 3)
            .child(Element::new("cell").attr("w", 6).attr("h", 3).attr("id", "under"))
            .child(Element::new("cell").attr("w", 6).attr("h", 3).attr("id", "over"));

        let hit = hit_test(&tree, 2, 1).unwrap();
        assert_eq!(hit.get_attr("id"), Some("over"));
    }
}
