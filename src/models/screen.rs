//! Screen identifiers for the console.
//!
//! Screens that only make sense for one role carry that role's sub-state, so
//! an admin sub-screen outside the admin app (or a company drill-down outside
//! the company details page) cannot be represented.

use serde::{Deserialize, Serialize};

use super::Role;

/// The top-level screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    HrLogin,
    EmployeeLogin,
    AdminLogin,
    HrApp(HrPage),
    EmployeeApp,
    AdminApp(AdminView),
}

impl Screen {
    /// The role that must be active while this screen is shown.
    pub fn required_role(&self) -> Role {
        match self {
            Screen::Home | Screen::HrLogin | Screen::EmployeeLogin | Screen::AdminLogin => {
                Role::None
            }
            Screen::HrApp(_) => Role::HrStaff,
            Screen::EmployeeApp => Role::Employee,
            Screen::AdminApp(_) => Role::Admin,
        }
    }

    pub fn is_login(&self) -> bool {
        matches!(
            self,
            Screen::HrLogin | Screen::EmployeeLogin | Screen::AdminLogin
        )
    }
}

/// Pages reachable from the HR sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HrPage {
    #[default]
    Dashboard,
    Employees,
    Category,
    Tasks,
    Attendance,
    Goals,
}

impl HrPage {
    pub const ALL: [HrPage; 6] = [
        HrPage::Dashboard,
        HrPage::Employees,
        HrPage::Category,
        HrPage::Tasks,
        HrPage::Attendance,
        HrPage::Goals,
    ];
}

/// Sections the admin dashboard links to directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdminSection {
    InterviewCalls,
    CompanyPage,
    StudentPage,
    JobPortal,
    SchedulePage,
    OfferPage,
    ReportPage,
}

impl AdminSection {
    pub const ALL: [AdminSection; 7] = [
        AdminSection::InterviewCalls,
        AdminSection::CompanyPage,
        AdminSection::StudentPage,
        AdminSection::JobPortal,
        AdminSection::SchedulePage,
        AdminSection::OfferPage,
        AdminSection::ReportPage,
    ];
}

/// The active admin sub-screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdminView {
    #[default]
    Dashboard,
    Section(AdminSection),
    /// Drill-down from interview calls; only reachable with a company id.
    CompanyDetails(CompanyId),
}

/// Identifier of the company selected from the interview calls list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    /// Returns `None` for blank identifiers.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role() {
        assert_eq!(Screen::Home.required_role(), Role::None);
        assert_eq!(Screen::AdminLogin.required_role(), Role::None);
        assert_eq!(Screen::HrApp(HrPage::Goals).required_role(), Role::HrStaff);
        assert_eq!(Screen::EmployeeApp.required_role(), Role::Employee);
        assert_eq!(
            Screen::AdminApp(AdminView::Dashboard).required_role(),
            Role::Admin
        );
    }

    #[test]
    fn test_company_id_rejects_blank() {
        assert!(CompanyId::parse("").is_none());
        assert!(CompanyId::parse("   ").is_none());
        assert_eq!(CompanyId::parse(" c1 ").unwrap().as_str(), "c1");
    }

    #[test]
    fn test_default_screen_is_home() {
        assert_eq!(Screen::default(), Screen::Home);
        assert_eq!(AdminView::default(), AdminView::Dashboard);
        assert_eq!(HrPage::default(), HrPage::Dashboard);
    }
}
