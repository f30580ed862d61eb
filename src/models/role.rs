//! Actor roles and the identity carried by each authenticated actor.

use serde::{Deserialize, Serialize};

/// Which kind of actor is logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    None,
    HrStaff,
    Employee,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::None => "none",
            Role::HrStaff => "hrStaff",
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }
}

/// The authenticated actor.
///
/// Each variant carries the identity its login flow issued, so an identity
/// can only exist alongside a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    HrStaff { email: String },
    Employee { employee_id: String },
    Admin { email: String },
}

impl Actor {
    pub fn role(&self) -> Role {
        match self {
            Actor::HrStaff { .. } => Role::HrStaff,
            Actor::Employee { .. } => Role::Employee,
            Actor::Admin { .. } => Role::Admin,
        }
    }

    pub fn identity(&self) -> &str {
        match self {
            Actor::HrStaff { email } | Actor::Admin { email } => email,
            Actor::Employee { employee_id } => employee_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_role_and_identity() {
        let hr = Actor::HrStaff {
            email: "a@b.com".to_string(),
        };
        assert_eq!(hr.role(), Role::HrStaff);
        assert_eq!(hr.identity(), "a@b.com");

        let employee = Actor::Employee {
            employee_id: "EMP-7".to_string(),
        };
        assert_eq!(employee.role(), Role::Employee);
        assert_eq!(employee.identity(), "EMP-7");
    }

    #[test]
    fn test_role_serializes_camel_case() {
        assert_eq!(serde_json::to_string(&Role::HrStaff).unwrap(), "\"hrStaff\"");
        assert_eq!(Role::None.as_str(), "none");
    }
}
