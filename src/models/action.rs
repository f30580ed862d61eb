//! Actions a mounted page can request from the console.

use serde::{Deserialize, Serialize};

use super::{AdminSection, HrPage};

/// A navigation or authentication request, as posted by a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    SelectHr,
    SelectEmployee,
    SelectAdmin,
    Back,
    LoginHr { email: String },
    LoginEmployee { employee_id: String },
    LoginAdmin { email: String, password: String },
    LogoutHr,
    LogoutEmployee,
    LogoutAdmin,
    SelectHrPage { page: HrPage },
    ViewTasks,
    OpenAdminSection { section: AdminSection },
    ViewCompany { company_id: String },
    BackToInterviewCalls,
    BackToAdminDashboard,
}

/// The callback an action goes through, without its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    SelectHr,
    SelectEmployee,
    SelectAdmin,
    Back,
    LoginHr,
    LoginEmployee,
    LoginAdmin,
    LogoutHr,
    LogoutEmployee,
    LogoutAdmin,
    SelectHrPage,
    ViewTasks,
    OpenAdminSection,
    ViewCompany,
    BackToInterviewCalls,
    BackToAdminDashboard,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::SelectHr => ActionKind::SelectHr,
            Action::SelectEmployee => ActionKind::SelectEmployee,
            Action::SelectAdmin => ActionKind::SelectAdmin,
            Action::Back => ActionKind::Back,
            Action::LoginHr { .. } => ActionKind::LoginHr,
            Action::LoginEmployee { .. } => ActionKind::LoginEmployee,
            Action::LoginAdmin { .. } => ActionKind::LoginAdmin,
            Action::LogoutHr => ActionKind::LogoutHr,
            Action::LogoutEmployee => ActionKind::LogoutEmployee,
            Action::LogoutAdmin => ActionKind::LogoutAdmin,
            Action::SelectHrPage { .. } => ActionKind::SelectHrPage,
            Action::ViewTasks => ActionKind::ViewTasks,
            Action::OpenAdminSection { .. } => ActionKind::OpenAdminSection,
            Action::ViewCompany { .. } => ActionKind::ViewCompany,
            Action::BackToInterviewCalls => ActionKind::BackToInterviewCalls,
            Action::BackToAdminDashboard => ActionKind::BackToAdminDashboard,
        }
    }
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::SelectHr => "selectHr",
            ActionKind::SelectEmployee => "selectEmployee",
            ActionKind::SelectAdmin => "selectAdmin",
            ActionKind::Back => "back",
            ActionKind::LoginHr => "loginHr",
            ActionKind::LoginEmployee => "loginEmployee",
            ActionKind::LoginAdmin => "loginAdmin",
            ActionKind::LogoutHr => "logoutHr",
            ActionKind::LogoutEmployee => "logoutEmployee",
            ActionKind::LogoutAdmin => "logoutAdmin",
            ActionKind::SelectHrPage => "selectHrPage",
            ActionKind::ViewTasks => "viewTasks",
            ActionKind::OpenAdminSection => "openAdminSection",
            ActionKind::ViewCompany => "viewCompany",
            ActionKind::BackToInterviewCalls => "backToInterviewCalls",
            ActionKind::BackToAdminDashboard => "backToAdminDashboard",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_deserializes_tagged() {
        let action: Action = serde_json::from_value(json!({
            "type": "loginEmployee",
            "employeeId": "EMP-1"
        }))
        .unwrap();
        assert_eq!(
            action,
            Action::LoginEmployee {
                employee_id: "EMP-1".to_string()
            }
        );

        let action: Action = serde_json::from_value(json!({
            "type": "openAdminSection",
            "section": "jobPortal"
        }))
        .unwrap();
        assert_eq!(
            action,
            Action::OpenAdminSection {
                section: AdminSection::JobPortal
            }
        );
    }

    #[test]
    fn test_kind_name_matches_serialized_tag() {
        let action = Action::ViewCompany {
            company_id: "c1".to_string(),
        };
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], action.kind().as_str());
        assert_eq!(value["companyId"], "c1");
        assert_eq!(
            serde_json::to_value(ActionKind::BackToAdminDashboard).unwrap(),
            "backToAdminDashboard"
        );
    }

    #[test]
    fn test_unknown_action_rejected() {
        let result: Result<Action, _> = serde_json::from_value(json!({ "type": "setRole" }));
        assert!(result.is_err());
    }
}
