use std::time::{Duration, Instant};

use chrono::NaiveDate;
use project_dashboard::model::seed::initial_board;
use project_dashboard::model::{
    Committed, Dashboard, MilestoneId, NewMilestone, NewTask, ProjectId, Role, Session, TaskId,
    UserId,
};
use project_dashboard::DashboardError;

const DELAY: Duration = Duration::from_millis(800);

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task_draft(title: &str) -> NewTask {
    NewTask {
        title: title.into(),
        description: String::new(),
        assigned_to: Some(UserId(3)),
        due_date: Some(date(2024, 4, 14)),
        milestone_id: MilestoneId(4),
    }
}

fn manager() -> Session {
    Session::new(initial_board(), Role::ProjectManager).with_submit_delay(DELAY)
}

#[test]
fn role_change_selects_first_user_of_role() {
    let mut session = Session::new(initial_board(), Role::Developer);
    assert_eq!(session.current_user().unwrap().id, UserId(1));

    session.change_role(Role::ProjectManager);
    assert_eq!(session.current_user().unwrap().name, "David Wilson");

    session.change_role(Role::Executive);
    assert_eq!(session.current_user().unwrap().id, UserId(5));
    assert!(matches!(session.dashboard().unwrap(), Dashboard::Executive(_)));

    session.change_role(Role::Developer);
    assert_eq!(session.current_user().unwrap().id, UserId(1));
}

#[test]
fn select_user_must_match_role() {
    let mut session = Session::new(initial_board(), Role::Developer);
    session.select_user(UserId(2)).unwrap();
    assert_eq!(session.current_user().unwrap().id, UserId(2));

    let err = session.select_user(UserId(5)).unwrap_err();
    assert!(matches!(err, DashboardError::NotPermitted { .. }));
    let err = session.select_user(UserId(77)).unwrap_err();
    assert!(matches!(err, DashboardError::UnknownUser(UserId(77))));
}

#[test]
fn developer_sees_only_own_tasks() {
    let session = Session::new(initial_board(), Role::Developer);
    let Dashboard::Developer(view) = session.dashboard().unwrap() else {
        panic!("expected developer dashboard");
    };
    let summary = view.summary(chrono::Utc::now());
    let ids: Vec<TaskId> = summary.tasks.iter().map(|a| a.task.id).collect();
    assert_eq!(ids, vec![TaskId(1), TaskId(3), TaskId(6), TaskId(9), TaskId(12)]);
    assert_eq!(summary.total(), 5);
    assert_eq!(summary.completed, 0);
    assert_eq!(summary.in_progress, 4);
    assert_eq!(summary.overdue, 5);
    assert_eq!(summary.tasks[0].project_name, "E-commerce Platform Redesign");
    assert_eq!(summary.tasks[0].milestone_title, "UI/UX Design Phase");
}

#[test]
fn developer_updates_own_task_only() {
    let mut session = Session::new(initial_board(), Role::Developer);

    session.set_task_progress(TaskId(1), 100).unwrap();
    assert_eq!(session.board().task(TaskId(1)).unwrap().progress, 100);

    let err = session.set_task_progress(TaskId(2), 90).unwrap_err();
    assert!(matches!(
        err,
        DashboardError::NotAssignee {
            task: TaskId(2),
            user: UserId(1)
        }
    ));
    assert_eq!(session.board().task(TaskId(2)).unwrap().progress, 60);

    session.toggle_task_complete(TaskId(3), true).unwrap();
    assert_eq!(session.board().task(TaskId(3)).unwrap().progress, 100);
}

#[test]
fn only_one_task_is_edited_at_a_time() {
    let mut session = Session::new(initial_board(), Role::Developer);
    session.begin_editing(TaskId(1)).unwrap();
    session.begin_editing(TaskId(3)).unwrap();
    assert_eq!(session.editing_task(), Some(TaskId(3)));

    assert!(session.begin_editing(TaskId(2)).is_err());
    assert_eq!(session.editing_task(), Some(TaskId(3)));

    session.finish_editing();
    assert_eq!(session.editing_task(), None);

    session.begin_editing(TaskId(6)).unwrap();
    session.change_role(Role::Executive);
    assert_eq!(session.editing_task(), None);
}

#[test]
fn executive_and_manager_cannot_edit_progress() {
    let mut session = Session::new(initial_board(), Role::Executive);
    let err = session.set_task_progress(TaskId(1), 50).unwrap_err();
    assert!(matches!(err, DashboardError::NotPermitted { role: Role::Executive }));

    session.change_role(Role::ProjectManager);
    assert!(session.toggle_task_complete(TaskId(1), true).is_err());
    assert_eq!(session.board(), &initial_board());
}

#[test]
fn developer_cannot_create_tasks() {
    let mut session = Session::new(initial_board(), Role::Developer);
    let err = session.submit_task(task_draft("Sneaky"), Instant::now()).unwrap_err();
    assert!(matches!(err, DashboardError::NotPermitted { role: Role::Developer }));
    assert!(!session.has_pending());
}

#[test]
fn task_commits_after_the_delay() {
    let mut session = manager();
    let start = Instant::now();
    session.task_form.open = true;
    session.submit_task(task_draft("Beta rollout"), start).unwrap();
    assert!(session.task_form.is_pending());

    assert!(session.poll(start + Duration::from_millis(500)).is_empty());
    assert_eq!(session.board().tasks().count(), 14);

    let committed = session.poll(start + DELAY);
    assert_eq!(committed.len(), 1);
    assert!(matches!(committed[0], Ok(Committed::Task(TaskId(15)))));
    assert_eq!(session.board().tasks().count(), 15);
    assert!(!session.task_form.open);
    assert!(!session.has_pending());
}

#[test]
fn duplicate_submit_is_refused_while_pending() {
    let mut session = manager();
    let start = Instant::now();
    session.submit_task(task_draft("First"), start).unwrap();
    let err = session
        .submit_task(task_draft("Second"), start + Duration::from_millis(100))
        .unwrap_err();
    assert!(matches!(err, DashboardError::SubmissionPending));

    session.poll(start + DELAY);
    let titles: Vec<&str> = session
        .board()
        .milestone(MilestoneId(4))
        .unwrap()
        .tasks
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Unit testing implementation", "App store submission", "First"]
    );
}

#[test]
fn blank_title_never_reaches_the_queue() {
    let mut session = manager();
    let err = session.submit_task(task_draft(""), Instant::now()).unwrap_err();
    assert!(err.is_validation());
    assert!(!session.has_pending());
    assert_eq!(session.board().tasks().count(), 14);
}

#[test]
fn sequential_commits_use_fresh_ids() {
    let mut session = manager();
    let start = Instant::now();

    session.submit_task(task_draft("One"), start).unwrap();
    session.poll(start + DELAY);
    session.submit_task(task_draft("Two"), start + DELAY).unwrap();
    let committed = session.poll(start + DELAY * 2);

    assert!(matches!(committed[0], Ok(Committed::Task(TaskId(16)))));
}

#[test]
fn task_and_milestone_forms_run_independently() {
    let mut session = manager();
    let start = Instant::now();
    session.submit_task(task_draft("Store assets"), start).unwrap();
    session
        .submit_milestone(
            NewMilestone {
                title: "Launch".into(),
                project_id: ProjectId(2),
                due_date: Some(date(2024, 5, 1)),
            },
            start,
        )
        .unwrap();

    let committed: Vec<Committed> = session
        .poll(start + DELAY)
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(
        committed,
        vec![Committed::Task(TaskId(15)), Committed::Milestone(MilestoneId(6))]
    );
}

#[test]
fn dangling_milestone_surfaces_on_commit() {
    let mut session = manager();
    let start = Instant::now();
    let mut draft = task_draft("Lost");
    draft.milestone_id = MilestoneId(99);
    session.submit_task(draft, start).unwrap();

    let committed = session.poll(start + DELAY);
    assert!(matches!(
        committed[0],
        Err(DashboardError::UnknownMilestone(MilestoneId(99)))
    ));
    assert_eq!(session.board(), &initial_board());
    assert!(!session.has_pending());
}

#[test]
fn manager_view_lists_developers_as_assignees() {
    let session = manager();
    let Dashboard::Manager(view) = session.dashboard().unwrap() else {
        panic!("expected manager dashboard");
    };
    let names: Vec<&str> = view.assignees().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice Johnson", "Bob Smith", "Carol Davis"]);
    assert_eq!(view.milestone_summaries(chrono::Utc::now()).len(), 5);
}

#[test]
fn queued_drafts_commit_what_the_manager_view_would() {
    let milestone = NewMilestone {
        title: "Launch".into(),
        project_id: ProjectId(2),
        due_date: Some(date(2024, 5, 1)),
    };
    let mut expected = manager();
    let Dashboard::Manager(view) = expected.dashboard().unwrap() else {
        panic!("expected manager dashboard");
    };
    let (board, _) = view.add_task(task_draft("Store assets")).unwrap();
    expected.replace_board(board);
    let Dashboard::Manager(view) = expected.dashboard().unwrap() else {
        panic!("expected manager dashboard");
    };
    let (expected, _) = view.add_milestone(milestone.clone()).unwrap();

    let mut session = manager();
    let start = Instant::now();
    session.submit_task(task_draft("Store assets"), start).unwrap();
    session.submit_milestone(milestone, start).unwrap();
    session.poll(start + DELAY);

    assert_eq!(session.board(), &expected);
}
