pub mod board;
pub mod metrics;
pub mod pending;
pub mod project;
pub mod seed;
pub mod task;
pub mod user;
pub mod view;

pub use board::{Board, NewMilestone, NewTask};
pub use metrics::{milestone_progress, project_progress, ExecutiveMetrics, ManagerStats};
pub use pending::{FormState, Pending};
pub use project::{Milestone, MilestoneId, Project, ProjectId, ProjectStatus};
pub use task::{is_overdue, Task, TaskId, TaskStatus};
pub use user::{Role, User, UserId};
pub use view::{Committed, Dashboard, Session};
