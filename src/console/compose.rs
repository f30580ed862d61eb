//! Root composition: maps the console state to the one page that is mounted
//! and the callbacks that page is handed.

use crate::models::{
    ActionKind, Actor, AdminSection, AdminView, BackAffordance, HrPage, Page, Screen, View,
};

/// Builds the view for a screen, the active actor, and the open session id.
pub fn compose(screen: &Screen, actor: Option<&Actor>, session_id: Option<String>) -> View {
    let (page, back, actions) = match screen {
        Screen::Home => (
            Page::Home,
            None,
            vec![
                ActionKind::SelectHr,
                ActionKind::SelectEmployee,
                ActionKind::SelectAdmin,
            ],
        ),
        Screen::HrLogin => (
            Page::HrLogin,
            None,
            vec![ActionKind::LoginHr, ActionKind::Back],
        ),
        Screen::EmployeeLogin => (
            Page::EmployeeLogin,
            None,
            vec![ActionKind::LoginEmployee, ActionKind::Back],
        ),
        Screen::AdminLogin => (
            Page::AdminLogin,
            None,
            vec![ActionKind::LoginAdmin, ActionKind::Back],
        ),
        Screen::EmployeeApp => (
            Page::EmployeeDashboard {
                employee_id: actor.map(|a| a.identity().to_string()).unwrap_or_default(),
            },
            None,
            vec![ActionKind::LogoutEmployee],
        ),
        Screen::HrApp(page) => hr_page(*page),
        Screen::AdminApp(view) => admin_page(view),
    };

    View {
        role: screen.required_role(),
        identity: actor.map(|a| a.identity().to_string()),
        session_id: match screen {
            Screen::HrApp(_) => session_id,
            _ => None,
        },
        page,
        back,
        actions,
    }
}

fn hr_page(page: HrPage) -> (Page, Option<BackAffordance>, Vec<ActionKind>) {
    let mut actions = vec![ActionKind::SelectHrPage, ActionKind::LogoutHr];
    let mounted = match page {
        HrPage::Dashboard => {
            actions.push(ActionKind::ViewTasks);
            Page::HrDashboard
        }
        HrPage::Employees => Page::ManageEmployees,
        HrPage::Category => Page::Categories,
        HrPage::Tasks => Page::Tasks,
        HrPage::Attendance => Page::Attendance,
        HrPage::Goals => Page::Goals,
    };
    (mounted, None, actions)
}

fn admin_page(view: &AdminView) -> (Page, Option<BackAffordance>, Vec<ActionKind>) {
    match view {
        AdminView::Dashboard => (
            Page::AdminDashboard,
            None,
            vec![ActionKind::OpenAdminSection, ActionKind::LogoutAdmin],
        ),
        AdminView::CompanyDetails(company_id) => (
            Page::CompanyDetails {
                company_id: company_id.as_str().to_string(),
            },
            Some(BackAffordance::BackToInterviewCalls),
            vec![ActionKind::BackToInterviewCalls, ActionKind::LogoutAdmin],
        ),
        AdminView::Section(section) => {
            let mut actions = vec![ActionKind::BackToAdminDashboard, ActionKind::LogoutAdmin];
            let mounted = match section {
                AdminSection::InterviewCalls => {
                    actions.push(ActionKind::ViewCompany);
                    Page::InterviewCalls
                }
                AdminSection::CompanyPage => Page::CompanyPage,
                AdminSection::StudentPage => Page::StudentPage,
                AdminSection::JobPortal => Page::JobPortalPage,
                AdminSection::SchedulePage => Page::SchedulePage,
                AdminSection::OfferPage => Page::OfferPage,
                AdminSection::ReportPage => Page::ReportPage,
            };
            (mounted, Some(BackAffordance::BackToAdminDashboard), actions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompanyId, Role};

    const ADMIN_ACTIONS: [ActionKind; 5] = [
        ActionKind::OpenAdminSection,
        ActionKind::ViewCompany,
        ActionKind::BackToInterviewCalls,
        ActionKind::BackToAdminDashboard,
        ActionKind::LogoutAdmin,
    ];

    fn hr_actor() -> Actor {
        Actor::HrStaff {
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn test_home_offers_role_selection_only() {
        let view = compose(&Screen::Home, None, None);
        assert_eq!(view.page, Page::Home);
        assert_eq!(view.role, Role::None);
        assert!(view.identity.is_none());
        assert_eq!(view.actions.len(), 3);
        assert!(!view.exposes(ActionKind::LogoutHr));
    }

    #[test]
    fn test_hr_pages_never_receive_admin_callbacks() {
        let actor = hr_actor();
        for page in HrPage::ALL {
            let view = compose(&Screen::HrApp(page), Some(&actor), None);
            assert_eq!(view.role, Role::HrStaff);
            assert!(view.back.is_none());
            for kind in ADMIN_ACTIONS {
                assert!(!view.exposes(kind), "{page:?} exposes {kind}");
            }
            assert_eq!(view.exposes(ActionKind::ViewTasks), page == HrPage::Dashboard);
        }
    }

    #[test]
    fn test_session_id_only_shown_in_hr_app() {
        let actor = hr_actor();
        let view = compose(
            &Screen::HrApp(HrPage::Dashboard),
            Some(&actor),
            Some("s1".to_string()),
        );
        assert_eq!(view.session_id.as_deref(), Some("s1"));
        assert_eq!(view.identity.as_deref(), Some("a@b.com"));

        let view = compose(&Screen::Home, None, Some("s1".to_string()));
        assert!(view.session_id.is_none());
    }

    #[test]
    fn test_back_affordance_per_admin_sub_screen() {
        let dashboard = compose(&Screen::AdminApp(AdminView::Dashboard), None, None);
        assert!(dashboard.back.is_none());

        for section in AdminSection::ALL {
            let view = compose(&Screen::AdminApp(AdminView::Section(section)), None, None);
            assert_eq!(view.back, Some(BackAffordance::BackToAdminDashboard));
            assert!(view.exposes(ActionKind::BackToAdminDashboard));
            assert!(!view.exposes(ActionKind::BackToInterviewCalls));
        }

        let details = compose(
            &Screen::AdminApp(AdminView::CompanyDetails(CompanyId::parse("c1").unwrap())),
            None,
            None,
        );
        assert_eq!(details.back, Some(BackAffordance::BackToInterviewCalls));
        assert!(!details.exposes(ActionKind::BackToAdminDashboard));
        assert_eq!(
            details.page,
            Page::CompanyDetails {
                company_id: "c1".to_string()
            }
        );
    }

    #[test]
    fn test_only_interview_calls_can_view_company() {
        for section in AdminSection::ALL {
            let view = compose(&Screen::AdminApp(AdminView::Section(section)), None, None);
            assert_eq!(
                view.exposes(ActionKind::ViewCompany),
                section == AdminSection::InterviewCalls
            );
        }
    }

    #[test]
    fn test_employee_dashboard_carries_identity() {
        let actor = Actor::Employee {
            employee_id: "EMP-9".to_string(),
        };
        let view = compose(&Screen::EmployeeApp, Some(&actor), None);
        assert_eq!(
            view.page,
            Page::EmployeeDashboard {
                employee_id: "EMP-9".to_string()
            }
        );
        assert_eq!(view.actions, vec![ActionKind::LogoutEmployee]);
    }

    #[test]
    fn test_view_serializes_for_front_end() {
        let view = compose(
            &Screen::AdminApp(AdminView::CompanyDetails(CompanyId::parse("c1").unwrap())),
            None,
            None,
        );
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["role"], "admin");
        assert_eq!(value["page"]["component"], "companyDetails");
        assert_eq!(value["page"]["companyId"], "c1");
        assert_eq!(value["back"], "backToInterviewCalls");
        assert!(value["sessionId"].is_null());
    }
}
