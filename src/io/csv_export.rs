use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::model::Board;

/// Export every task to a semicolon-delimited CSV file.
///
/// Columns: Project ; Milestone ; Task ; Assignee ; Due Date ; Progress ; Status
/// Dates are formatted as YYYY-MM-DD. Returns the number of tasks written.
pub fn export_csv(board: &Board, path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)?;
    let count = write_report(board, file)?;
    tracing::info!(path = %path.display(), tasks = count, "tasks exported");
    Ok(count)
}

/// Write the task report to any writer.
pub fn write_report<W: Write>(board: &Board, writer: W) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);

    wtr.write_record([
        "Project",
        "Milestone",
        "Task",
        "Assignee",
        "Due Date",
        "Progress",
        "Status",
    ])?;

    let mut count = 0;
    for project in &board.projects {
        for milestone in &project.milestones {
            for task in &milestone.tasks {
                let assignee = board
                    .user(task.assigned_to)
                    .map(|u| u.name.as_str())
                    .unwrap_or("Unassigned");
                let due = task.due_date.format("%Y-%m-%d").to_string();
                let progress = task.progress.to_string();
                wtr.write_record([
                    project.name.as_str(),
                    milestone.title.as_str(),
                    task.title.as_str(),
                    assignee,
                    due.as_str(),
                    progress.as_str(),
                    task.status().label(),
                ])?;
                count += 1;
            }
        }
    }

    wtr.flush()?;
    Ok(count)
}
