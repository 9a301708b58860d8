use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The dashboard a user sees. Each role gets a different slice of access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Developer,
    ProjectManager,
    Executive,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Developer, Role::ProjectManager, Role::Executive];

    /// Short label used by the role selector.
    pub fn label(self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::ProjectManager => "Manager",
            Role::Executive => "Executive",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Developer => f.write_str("developer"),
            Role::ProjectManager => f.write_str("project manager"),
            Role::Executive => f.write_str("executive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    pub email: String,
}

impl User {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Initials for the avatar badge, e.g. "Alice Johnson" -> "AJ".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&Role::ProjectManager).unwrap();
        assert_eq!(json, "\"project_manager\"");
        let role: Role = serde_json::from_str("\"executive\"").unwrap();
        assert_eq!(role, Role::Executive);
    }

    #[test]
    fn name_helpers() {
        let user = User {
            id: UserId(1),
            name: "Alice Johnson".into(),
            role: Role::Developer,
            email: "alice@company.com".into(),
        };
        assert_eq!(user.first_name(), "Alice");
        assert_eq!(user.initials(), "AJ");
    }
}
