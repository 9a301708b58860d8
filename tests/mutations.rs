use chrono::NaiveDate;
use project_dashboard::model::metrics::{milestone_progress, project_progress};
use project_dashboard::model::seed::initial_board;
use project_dashboard::model::{
    MilestoneId, NewMilestone, NewTask, ProjectId, TaskId, UserId,
};
use project_dashboard::DashboardError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(title: &str, milestone: u32) -> NewTask {
    NewTask {
        title: title.into(),
        description: "Tidy up".into(),
        assigned_to: Some(UserId(2)),
        due_date: Some(date(2024, 4, 10)),
        milestone_id: MilestoneId(milestone),
    }
}

#[test]
fn set_progress_changes_only_that_task() {
    let before = initial_board();
    let after = before.set_task_progress(TaskId(6), 100).unwrap();

    assert_eq!(after.task(TaskId(6)).unwrap().progress, 100);
    // The previous snapshot is untouched.
    assert_eq!(before.task(TaskId(6)).unwrap().progress, 0);

    for (old, new) in before.tasks().zip(after.tasks()) {
        if old.id != TaskId(6) {
            assert_eq!(old, new);
        }
    }

    let milestone = after.milestone(MilestoneId(2)).unwrap();
    assert_eq!(milestone_progress(milestone), 55);
    assert_eq!(project_progress(after.project(ProjectId(1)).unwrap()), 57);
}

#[test]
fn set_progress_clamps_and_rejects_unknown_task() {
    let board = initial_board();
    let clamped = board.set_task_progress(TaskId(1), 250).unwrap();
    assert_eq!(clamped.task(TaskId(1)).unwrap().progress, 100);

    let err = board.set_task_progress(TaskId(99), 10).unwrap_err();
    assert!(matches!(err, DashboardError::UnknownTask(TaskId(99))));
}

#[test]
fn toggle_complete_sets_full_or_zero() {
    let board = initial_board();
    let done = board.toggle_task_complete(TaskId(3), true).unwrap();
    assert_eq!(done.task(TaskId(3)).unwrap().progress, 100);
    let reset = done.toggle_task_complete(TaskId(3), false).unwrap();
    assert_eq!(reset.task(TaskId(3)).unwrap().progress, 0);
}

#[test]
fn add_task_appends_with_next_id() {
    let board = initial_board();
    let before = board.milestone(MilestoneId(4)).unwrap().tasks.len();

    let (board, id) = board.add_task(draft("Release notes", 4)).unwrap();
    assert_eq!(id, TaskId(15));

    let milestone = board.milestone(MilestoneId(4)).unwrap();
    assert_eq!(milestone.tasks.len(), before + 1);
    let task = milestone.tasks.last().unwrap();
    assert_eq!(task.id, TaskId(15));
    assert_eq!(task.progress, 0);
    assert_eq!(task.milestone_id, MilestoneId(4));
    assert_eq!(task.assigned_to, UserId(2));
    assert_eq!(board.tasks().count(), 15);
}

#[test]
fn add_task_with_blank_title_is_rejected() {
    let board = initial_board();
    let err = board.add_task(draft("  ", 1)).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "Please fill in all required fields for the task: title is missing"
    );
    assert_eq!(board.tasks().count(), 14);
}

#[test]
fn add_task_requires_assignee_and_due_date() {
    let board = initial_board();

    let mut no_assignee = draft("Docs", 1);
    no_assignee.assigned_to = None;
    assert!(board.add_task(no_assignee).unwrap_err().is_validation());

    let mut no_date = draft("Docs", 1);
    no_date.due_date = None;
    assert!(board.add_task(no_date).unwrap_err().is_validation());
}

#[test]
fn add_task_to_missing_milestone_is_an_error() {
    let board = initial_board();
    let err = board.add_task(draft("Docs", 42)).unwrap_err();
    assert!(matches!(err, DashboardError::UnknownMilestone(MilestoneId(42))));
}

#[test]
fn add_milestone_appends_empty_milestone() {
    let board = initial_board();
    let (board, id) = board
        .add_milestone(NewMilestone {
            title: "Reporting".into(),
            project_id: ProjectId(3),
            due_date: Some(date(2024, 5, 30)),
        })
        .unwrap();

    assert_eq!(id, MilestoneId(6));
    let project = board.project(ProjectId(3)).unwrap();
    assert_eq!(project.milestones.len(), 2);
    let milestone = project.milestones.last().unwrap();
    assert!(milestone.tasks.is_empty());
    assert_eq!(milestone.project_id, ProjectId(3));
    assert_eq!(milestone_progress(milestone), 0);
    // An empty milestone drags the project mean down: (72 + 0) / 2.
    assert_eq!(project_progress(project), 36);
}

#[test]
fn add_milestone_to_missing_project_is_an_error() {
    let board = initial_board();
    let err = board
        .add_milestone(NewMilestone {
            title: "Ghost".into(),
            project_id: ProjectId(7),
            due_date: Some(date(2024, 5, 30)),
        })
        .unwrap_err();
    assert!(matches!(err, DashboardError::UnknownProject(ProjectId(7))));
}
