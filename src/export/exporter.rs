use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::snapshot::{format_values, one_hot};
use crate::error::ExportError;
use crate::game::Board;

const STATE_PREFIX: &str = "ExportedState";
const MOVE_PREFIX: &str = "ExportedMove";

/// Writes board snapshots as numbered training files.
///
/// Each export takes the lowest index `N` with no `ExportedState<N>.txt`
/// yet, so gaps left by deleted files get filled first.
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Exporter { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn state_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{STATE_PREFIX}{index}.txt"))
    }

    pub fn move_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{MOVE_PREFIX}{index}.txt"))
    }

    /// Lowest index whose state file does not exist yet.
    pub fn next_index(&self) -> usize {
        (0..)
            .find(|&n| !self.state_path(n).exists())
            .unwrap_or_default()
    }

    /// Write the flattened board to the next free `ExportedState<N>.txt`.
    pub fn export_state(&self, board: &Board) -> Result<usize, ExportError> {
        self.ensure_dir()?;
        let index = self.next_index();
        write_atomic(&self.state_path(index), &format_values(&board.flatten()))?;
        info!(index, dir = %self.dir.display(), "exported board state");
        Ok(index)
    }

    /// Write the board and the column played from it under one index.
    pub fn export_pair(&self, board: &Board, column: usize) -> Result<usize, ExportError> {
        self.ensure_dir()?;
        let index = self.next_index();
        let move_values = one_hot(column, board.columns());
        write_atomic(&self.move_path(index), &format_values(&move_values))?;
        write_atomic(&self.state_path(index), &format_values(&board.flatten()))?;
        info!(index, column, dir = %self.dir.display(), "exported state and move");
        Ok(index)
    }

    fn ensure_dir(&self) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir).map_err(|e| ExportError::Io {
            path: self.dir.clone(),
            source: e,
        })
    }
}

/// Write via a temporary sibling and rename it into place.
fn write_atomic(path: &Path, contents: &str) -> Result<(), ExportError> {
    let tmp = path.with_extension("txt.tmp");
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, contents).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)
}
