use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::game::{Board, Cell, Player};

/// One line of comma-separated values, newline terminated.
pub fn format_values(values: &[u8]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("{}\n", parts.join(","))
}

/// One-hot encoding of the chosen column.
pub fn one_hot(column: usize, columns: usize) -> Vec<u8> {
    (0..columns).map(|c| u8::from(c == column)).collect()
}

fn parse_values(path: &Path, text: &str) -> Result<Vec<u8>, ExportError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|part| {
            part.trim().parse::<u8>().map_err(|_| ExportError::Malformed {
                path: path.to_path_buf(),
                reason: format!("bad value {:?}", part.trim()),
            })
        })
        .collect()
}

/// Rebuild a board from an exported state file.
///
/// Pieces go straight through [`Board::drop_piece`]; the snapshot is trusted
/// to already respect gravity.
pub fn load_state(path: &Path, rows: usize, columns: usize) -> Result<Board, ExportError> {
    let text = fs::read_to_string(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let values = parse_values(path, &text)?;
    if values.len() != rows * columns {
        return Err(ExportError::Malformed {
            path: path.to_path_buf(),
            reason: format!(
                "expected {} values for a {rows}x{columns} board, found {}",
                rows * columns,
                values.len()
            ),
        });
    }

    let mut board = Board::new(rows, columns)?;
    for (idx, &value) in values.iter().enumerate() {
        let player = match Cell::from_value(value) {
            Some(Cell::Empty) => continue,
            Some(Cell::Player1) => Player::One,
            Some(Cell::Player2) => Player::Two,
            None => {
                return Err(ExportError::Malformed {
                    path: path.to_path_buf(),
                    reason: format!("cell value {value} at index {idx} is not 0, 1 or 2"),
                })
            }
        };
        board.drop_piece(idx / columns, idx % columns, player);
    }
    Ok(board)
}
