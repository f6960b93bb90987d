//! Painting the word field into a terminal buffer.

use glam::DVec2;
use hours_core::Rgba;
use hours_field::{Gradient, Particle};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Convert an engine color to a terminal color.
pub fn to_color(color: Rgba) -> Color {
    let (r, g, b) = color.to_rgb8();
    Color::Rgb(r, g, b)
}

/// World point under the center of a terminal cell.
///
/// World space has its origin at the center with y up; the area's top-left
/// cell maps near `(-hw, hh)`.
pub fn cell_to_world(column: u16, row: u16, area: Rect, half_extents: DVec2) -> DVec2 {
    let fx = (f64::from(column.saturating_sub(area.x)) + 0.5) / f64::from(area.width.max(1));
    let fy = (f64::from(row.saturating_sub(area.y)) + 0.5) / f64::from(area.height.max(1));
    DVec2::new(
        (fx * 2.0 - 1.0) * half_extents.x,
        (1.0 - fy * 2.0) * half_extents.y,
    )
}

/// Terminal cell containing a world point, if it is on screen.
pub fn world_to_cell(point: DVec2, area: Rect, half_extents: DVec2) -> Option<(u16, u16)> {
    if area.is_empty() || half_extents.x <= 0.0 || half_extents.y <= 0.0 {
        return None;
    }
    let fx = (point.x / half_extents.x + 1.0) / 2.0;
    let fy = (1.0 - point.y / half_extents.y) / 2.0;
    if !(0.0..1.0).contains(&fx) || !(0.0..1.0).contains(&fy) {
        return None;
    }
    let column = (fx * f64::from(area.width)) as u16;
    let row = (fy * f64::from(area.height)) as u16;
    Some((area.x + column, area.y + row))
}

/// Fraction of the way down the area for a row, 0 at the top.
fn row_fraction(row: u16, area: Rect) -> f64 {
    if area.height <= 1 {
        0.0
    } else {
        f64::from(row - area.y) / f64::from(area.height - 1)
    }
}

/// Gradient background with the words composited on top.
pub struct FieldView<'a> {
    pub gradient: Gradient,
    pub words: &'a [Particle],
    pub half_extents: DVec2,
}

impl Widget for FieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in area.top()..area.bottom() {
            let bg = to_color(self.gradient.at(row_fraction(row, area)));
            for column in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((column, row)) {
                    cell.set_char(' ').set_bg(bg);
                }
            }
        }

        for word in self.words {
            let Some((column, row)) = world_to_cell(word.position, area, self.half_extents) else {
                continue;
            };
            // fade by blending toward the background behind the word
            let behind = self.gradient.at(row_fraction(row, area));
            let fg = to_color(behind.lerp(word.color(), word.opacity.clamp(0.0, 1.0)));
            let style = if word.is_focus() {
                Style::new().fg(fg).add_modifier(Modifier::BOLD)
            } else {
                Style::new().fg(fg)
            };

            let len = word.text().chars().count() as u16;
            let start = column.saturating_sub(len / 2).max(area.left());
            for (x, ch) in (start..area.right()).zip(word.text().chars()) {
                if let Some(cell) = buf.cell_mut((x, row)) {
                    cell.set_char(ch).set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hours_core::{Phase, PoemWord};

    use super::*;

    const HALF: DVec2 = DVec2::new(480.0, 320.0);

    #[test]
    fn test_world_origin_is_screen_center() {
        let area = Rect::new(0, 0, 120, 40);
        assert_eq!(world_to_cell(DVec2::ZERO, area, HALF), Some((60, 20)));
        assert_eq!(world_to_cell(DVec2::new(-480.0, 320.0), area, HALF), Some((0, 0)));
        assert_eq!(world_to_cell(DVec2::new(480.0, 0.0), area, HALF), None);
    }

    #[test]
    fn test_cell_round_trip_lands_in_same_cell() {
        let area = Rect::new(2, 1, 80, 24);
        for (column, row) in [(2, 1), (41, 12), (81, 24)] {
            let world = cell_to_world(column, row, area, HALF);
            assert_eq!(world_to_cell(world, area, HALF), Some((column, row)));
        }
    }

    #[test]
    fn test_y_points_up() {
        let area = Rect::new(0, 0, 10, 10);
        let top = cell_to_world(5, 0, area, HALF);
        let bottom = cell_to_world(5, 9, area, HALF);
        assert!(top.y > 0.0 && bottom.y < 0.0);
    }

    #[test]
    fn test_words_are_drawn_over_the_gradient() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        let mut word = Particle::new(PoemWord::new("sun", Phase::Morning), DVec2::ZERO);
        word.opacity = 1.0;
        let gradient = Gradient {
            top: Rgba::rgb(0.0, 0.0, 0.0),
            bottom: Rgba::rgb(0.0, 0.0, 1.0),
        };
        FieldView {
            gradient,
            words: std::slice::from_ref(&word),
            half_extents: HALF,
        }
        .render(area, &mut buf);

        let text: String = (9..12).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert_eq!(text, "sun");
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(0, 4)].bg, Color::Rgb(0, 0, 255));
    }
}
