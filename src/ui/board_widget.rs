use crate::game::{Board, Cell};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Terminal columns taken by one board cell.
pub const CELL_WIDTH: u16 = 3;

/// Width of the `"  ║"` frame left of the first cell.
const LEFT_FRAME: u16 = 3;
/// Width of the `" ║"` frame right of the last cell.
const RIGHT_FRAME: u16 = 2;
/// Column-number line and top border above the first row.
const HEADER_LINES: u16 = 2;
/// Bottom border and selection indicator below the last row.
const FOOTER_LINES: u16 = 2;

/// Marker and colour for each cell value.
pub fn marker(cell: Cell) -> (&'static str, Color) {
    match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Player1 => (" \u{25cf} ", Color::Red),
        Cell::Player2 => (" \u{25cf} ", Color::Yellow),
    }
}

/// Where the board landed on screen, for mapping mouse positions back to
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Screen x of the first cell of column 0.
    pub cells_x: u16,
    pub area: Rect,
    pub columns: usize,
}

impl BoardLayout {
    /// Column under screen position `(x, y)`: `(x - cells_x) / CELL_WIDTH`.
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        if y < self.area.y || y >= self.area.bottom() || x < self.cells_x {
            return None;
        }
        let column = usize::from((x - self.cells_x) / CELL_WIDTH);
        (column < self.columns).then_some(column)
    }
}

/// Render the framed board, top row first, centred horizontally in `area`.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    area: Rect,
) -> BoardLayout {
    let columns = board.columns();
    let inner_width = CELL_WIDTH * columns as u16;
    let width = LEFT_FRAME + inner_width + RIGHT_FRAME;
    let height = HEADER_LINES + board.rows() as u16 + FOOTER_LINES;
    let board_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y,
        width: width.min(area.width),
        height: height.min(area.height),
    };

    let selected = Style::default().fg(Color::Cyan);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw(" ".repeat(LEFT_FRAME as usize))];
    for col in 0..columns {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                selected.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    lines.push(Line::from(col_line));

    let rule = "\u{2550}".repeat(inner_width as usize + 1);
    lines.push(Line::from(format!("  \u{2554}{rule}\u{2557}")));

    for row in (0..board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  \u{2551}")];
        for col in 0..columns {
            let (symbol, color) = marker(board.get(row, col));
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  \u{255a}{rule}\u{255d}")));

    let mut indicator_line = vec![Span::raw(" ".repeat(LEFT_FRAME as usize))];
    for col in 0..columns {
        if col == selected_column {
            indicator_line.push(Span::styled(" \u{25b2} ", selected));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    frame.render_widget(Paragraph::new(lines), board_area);

    BoardLayout {
        cells_x: board_area.x + LEFT_FRAME,
        area: board_area,
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> BoardLayout {
        BoardLayout {
            cells_x: 13,
            area: Rect::new(10, 5, 26, 10),
            columns: 7,
        }
    }

    #[test]
    fn test_column_at_maps_cell_strips() {
        let layout = layout();
        assert_eq!(layout.column_at(13, 7), Some(0));
        assert_eq!(layout.column_at(15, 7), Some(0));
        assert_eq!(layout.column_at(16, 7), Some(1));
        assert_eq!(layout.column_at(13 + 3 * 6 + 2, 7), Some(6));
    }

    #[test]
    fn test_column_at_outside_board() {
        let layout = layout();
        assert_eq!(layout.column_at(12, 7), None);
        assert_eq!(layout.column_at(13 + 3 * 7, 7), None);
        assert_eq!(layout.column_at(14, 4), None);
        assert_eq!(layout.column_at(14, 15), None);
    }

    #[test]
    fn test_markers_are_distinct() {
        let empty = marker(Cell::Empty);
        let one = marker(Cell::Player1);
        let two = marker(Cell::Player2);
        assert_ne!(empty, one);
        assert_ne!(one, two);
        assert_ne!(empty, two);
    }
}
