//! The fixed dataset the dashboard starts from.

use chrono::NaiveDate;

use super::board::Board;
use super::project::{Milestone, MilestoneId, Project, ProjectId, ProjectStatus};
use super::task::{Task, TaskId};
use super::user::{Role, User, UserId};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn user(id: u32, name: &str, role: Role, email: &str) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        role,
        email: email.to_string(),
    }
}

fn task(
    id: u32,
    title: &str,
    description: &str,
    progress: u8,
    assigned_to: u32,
    due_date: NaiveDate,
    milestone: u32,
) -> Task {
    Task {
        id: TaskId(id),
        title: title.to_string(),
        description: description.to_string(),
        progress,
        assigned_to: UserId(assigned_to),
        due_date,
        milestone_id: MilestoneId(milestone),
    }
}

fn milestone(id: u32, title: &str, project: u32, due_date: NaiveDate, tasks: Vec<Task>) -> Milestone {
    Milestone {
        id: MilestoneId(id),
        title: title.to_string(),
        project_id: ProjectId(project),
        due_date,
        tasks,
    }
}

fn project(id: u32, name: &str, description: &str, milestones: Vec<Milestone>) -> Project {
    Project {
        id: ProjectId(id),
        name: name.to_string(),
        description: description.to_string(),
        status: ProjectStatus::Active,
        milestones,
    }
}

/// Five users, three projects, five milestones and fourteen tasks.
pub fn initial_board() -> Board {
    let users = vec![
        user(1, "Alice Johnson", Role::Developer, "alice@company.com"),
        user(2, "Bob Smith", Role::Developer, "bob@company.com"),
        user(3, "Carol Davis", Role::Developer, "carol@company.com"),
        user(4, "David Wilson", Role::ProjectManager, "david@company.com"),
        user(5, "Eva Brown", Role::Executive, "eva@company.com"),
    ];

    let projects = vec![
        project(
            1,
            "E-commerce Platform Redesign",
            "Complete overhaul of the customer-facing e-commerce platform",
            vec![
                milestone(
                    1,
                    "UI/UX Design Phase",
                    1,
                    date(2024, 2, 15),
                    vec![
                        task(
                            1,
                            "Create wireframes for product pages",
                            "Design wireframes for all product listing and detail pages",
                            85,
                            1,
                            date(2024, 2, 10),
                            1,
                        ),
                        task(
                            2,
                            "Design checkout flow",
                            "Create user-friendly checkout process design",
                            60,
                            2,
                            date(2024, 2, 12),
                            1,
                        ),
                        task(
                            3,
                            "Mobile responsive design",
                            "Ensure all designs work perfectly on mobile devices",
                            30,
                            1,
                            date(2024, 2, 14),
                            1,
                        ),
                    ],
                ),
                milestone(
                    2,
                    "Frontend Development",
                    1,
                    date(2024, 3, 20),
                    vec![
                        task(
                            4,
                            "Implement product catalog",
                            "Build the product listing and filtering functionality",
                            45,
                            2,
                            date(2024, 3, 5),
                            2,
                        ),
                        task(
                            5,
                            "Shopping cart functionality",
                            "Develop add to cart, remove items, and cart management",
                            20,
                            3,
                            date(2024, 3, 10),
                            2,
                        ),
                        task(
                            6,
                            "Payment integration",
                            "Integrate with payment gateway and handle transactions",
                            0,
                            1,
                            date(2024, 3, 18),
                            2,
                        ),
                    ],
                ),
            ],
        ),
        project(
            2,
            "Mobile App Development",
            "Native mobile application for iOS and Android",
            vec![
                milestone(
                    3,
                    "Core Features",
                    2,
                    date(2024, 3, 30),
                    vec![
                        task(
                            7,
                            "User authentication system",
                            "Implement login, registration, and password recovery",
                            100,
                            3,
                            date(2024, 1, 25),
                            3,
                        ),
                        task(
                            8,
                            "Push notifications",
                            "Set up push notification system for user engagement",
                            75,
                            2,
                            date(2024, 2, 20),
                            3,
                        ),
                        task(
                            9,
                            "Offline data sync",
                            "Enable app to work offline and sync when connected",
                            40,
                            1,
                            date(2024, 3, 25),
                            3,
                        ),
                    ],
                ),
                milestone(
                    4,
                    "Testing & Deployment",
                    2,
                    date(2024, 4, 15),
                    vec![
                        task(
                            10,
                            "Unit testing implementation",
                            "Write comprehensive unit tests for all components",
                            25,
                            3,
                            date(2024, 4, 5),
                            4,
                        ),
                        task(
                            11,
                            "App store submission",
                            "Prepare and submit app to iOS App Store and Google Play",
                            0,
                            2,
                            date(2024, 4, 12),
                            4,
                        ),
                    ],
                ),
            ],
        ),
        project(
            3,
            "Data Analytics Dashboard",
            "Internal dashboard for business intelligence and reporting",
            vec![
                milestone(
                    5,
                    "Backend Infrastructure",
                    3,
                    date(2024, 2, 28),
                    vec![
                        task(
                            12,
                            "Database schema design",
                            "Design efficient database structure for analytics data",
                            90,
                            1,
                            date(2024, 1, 30),
                            5,
                        ),
                        task(
                            13,
                            "API development",
                            "Create RESTful APIs for data retrieval and manipulation",
                            70,
                            3,
                            date(2024, 2, 25),
                            5,
                        ),
                        task(
                            14,
                            "Data processing pipeline",
                            "Set up automated data processing and ETL workflows",
                            55,
                            2,
                            date(2024, 2, 26),
                            5,
                        ),
                    ],
                ),
            ],
        ),
    ];

    Board::new(users, projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_board_is_consistent() {
        let board = initial_board();
        assert_eq!(board.users.len(), 5);
        assert_eq!(board.projects.len(), 3);
        assert_eq!(board.milestones().count(), 5);
        assert_eq!(board.tasks().count(), 14);
        board.validate_links().unwrap();
    }
}
