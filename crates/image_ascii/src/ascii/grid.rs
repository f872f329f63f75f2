use std::fmt::Write;

/// One output cell: a character plus an optional RGB annotation.
///
/// The color is present only for grids produced in colored mode; plain and
/// image-masked grids carry characters alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphCell {
    pub ch: char,
    pub color: Option<[u8; 3]>,
}

impl GlyphCell {
    pub fn plain(ch: char) -> Self {
        Self { ch, color: None }
    }

    pub fn colored(ch: char, color: [u8; 3]) -> Self {
        Self { ch, color: Some(color) }
    }
}

/// Row-major glyph grid of `height` rows by `width` columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<GlyphCell>,
}

impl GlyphGrid {
    pub fn new(width: u16, height: u16, cells: Vec<GlyphCell>) -> Self {
        assert_eq!(usize::from(width) * usize::from(height), cells.len());
        Self { width, height, cells }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GlyphCell]> + '_ {
        self.cells.chunks(usize::from(self.width).max(1))
    }

    /// Rows joined with line breaks; color annotations are ignored.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.cells.len() + usize::from(self.height));
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                text.push('\n');
            }
            text.extend(row.iter().map(|cell| cell.ch));
        }
        text
    }

    /// Markup fragment with one color-tagged span per annotated glyph and
    /// `<br>`-separated rows, valid in any markup sink. `&`, `<` and `>`
    /// are escaped since ramps may contain them.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(self.cells.len() * 8);
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                html.push_str("<br>");
            }
            for cell in row {
                match cell.color {
                    Some([r, g, b]) => {
                        let _ = write!(html, "<span style=\"color: rgb({r}, {g}, {b})\">");
                        push_escaped(&mut html, cell.ch);
                        html.push_str("</span>");
                    },
                    None => push_escaped(&mut html, cell.ch),
                }
            }
        }
        html
    }
}

fn push_escaped(html: &mut String, ch: char) {
    match ch {
        '&' => html.push_str("&amp;"),
        '<' => html.push_str("&lt;"),
        '>' => html.push_str("&gt;"),
        _ => html.push(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_grid(width: u16, height: u16, ch: char) -> GlyphGrid {
        let cells = vec![GlyphCell::plain(ch); usize::from(width) * usize::from(height)];
        GlyphGrid::new(width, height, cells)
    }

    #[test]
    fn grid_has_requested_shape() {
        let grid = plain_grid(7, 3, '*');
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 7));
    }

    #[test]
    fn text_rows_are_joined_with_line_breaks() {
        let grid = plain_grid(2, 2, '#');
        assert_eq!(grid.to_text(), "##\n##");
    }

    #[test]
    fn html_wraps_colored_cells_in_spans() {
        let cells = vec![
            GlyphCell::colored('@', [255, 0, 0]),
            GlyphCell::colored(' ', [0, 0, 255]),
        ];
        let grid = GlyphGrid::new(2, 1, cells);
        assert_eq!(
            grid.to_html(),
            "<span style=\"color: rgb(255, 0, 0)\">@</span>\
             <span style=\"color: rgb(0, 0, 255)\"> </span>"
        );
    }

    #[test]
    fn html_rows_are_separated_by_breaks() {
        let cells = vec![
            GlyphCell::plain('#'),
            GlyphCell::plain('#'),
            GlyphCell::colored('@', [7, 8, 9]),
            GlyphCell::plain('.'),
        ];
        let grid = GlyphGrid::new(2, 2, cells);
        assert_eq!(
            grid.to_html(),
            "##<br><span style=\"color: rgb(7, 8, 9)\">@</span>."
        );
    }

    #[test]
    fn html_escapes_markup_characters() {
        let cells = vec![
            GlyphCell::plain('<'),
            GlyphCell::plain('&'),
            GlyphCell::colored('>', [1, 2, 3]),
        ];
        let grid = GlyphGrid::new(3, 1, cells);
        assert_eq!(
            grid.to_html(),
            "&lt;&amp;<span style=\"color: rgb(1, 2, 3)\">&gt;</span>"
        );
    }

    #[test]
    #[should_panic]
    fn mismatched_cell_count_panics() {
        GlyphGrid::new(2, 2, vec![GlyphCell::plain(' ')]);
    }
}
