//! The composed view handed to the front end.

use serde::Serialize;

use super::{ActionKind, Role};

/// The single page component mounted for the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "component",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Page {
    Home,
    HrLogin,
    EmployeeLogin,
    AdminLogin,
    EmployeeDashboard { employee_id: String },
    HrDashboard,
    ManageEmployees,
    Categories,
    Tasks,
    Attendance,
    Goals,
    AdminDashboard,
    InterviewCalls,
    CompanyDetails { company_id: String },
    CompanyPage,
    StudentPage,
    JobPortalPage,
    SchedulePage,
    OfferPage,
    ReportPage,
}

/// Back button shown above an admin sub-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BackAffordance {
    BackToAdminDashboard,
    BackToInterviewCalls,
}

/// Everything a front end needs to render the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub role: Role,
    pub identity: Option<String>,
    /// Id of the open HR session record; null until the store answers.
    pub session_id: Option<String>,
    pub page: Page,
    pub back: Option<BackAffordance>,
    /// Callbacks the mounted page receives.
    pub actions: Vec<ActionKind>,
}

impl View {
    pub fn exposes(&self, kind: ActionKind) -> bool {
        self.actions.contains(&kind)
    }
}
