use std::path::Path;

use crate::error::Result;
use crate::model::Board;

/// Save a board snapshot as pretty JSON.
pub fn save_board(board: &Board, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(board)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "board saved");
    Ok(())
}

/// Load a board snapshot, rejecting one whose ids or back-references are inconsistent.
pub fn load_board(path: &Path) -> Result<Board> {
    let json = std::fs::read_to_string(path)?;
    let board: Board = serde_json::from_str(&json)?;
    board.validate_links()?;
    tracing::info!(
        path = %path.display(),
        projects = board.projects.len(),
        "board loaded"
    );
    Ok(board)
}
