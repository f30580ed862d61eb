//! The console state machine.
//!
//! `Console` is the single owner of the view state. Pages never set state
//! directly; they request one of the named transitions below (or post an
//! [`Action`]), and the console keeps the role, the screen and the session
//! record in step.

mod compose;
mod navigator;
mod session;

pub use compose::compose;
pub use navigator::{Navigator, Transition};
pub use session::SessionController;

use std::sync::Arc;

use crate::auth::CredentialChecker;
use crate::errors::ConsoleError;
use crate::models::{
    Action, ActionKind, AdminSection, AdminView, CompanyId, HrPage, Role, Screen, View,
};
use crate::store::SessionStore;

pub struct Console {
    session: SessionController,
    navigator: Navigator,
    revision: i64,
}

impl Console {
    pub fn new(credentials: Arc<dyn CredentialChecker>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            session: SessionController::new(credentials, store),
            navigator: Navigator::default(),
            revision: 0,
        }
    }

    pub fn role(&self) -> Role {
        self.session.role()
    }

    pub fn screen(&self) -> &Screen {
        self.navigator.screen()
    }

    /// Number of transitions applied since start.
    pub fn revision(&self) -> i64 {
        self.revision
    }

    pub fn view(&self) -> View {
        compose(
            self.navigator.screen(),
            self.session.actor(),
            self.session.open_session_id(),
        )
    }

    /// Applies an action, provided the current view exposes it.
    pub fn dispatch(&mut self, action: Action) -> Result<View, ConsoleError> {
        let kind = action.kind();
        if !self.view().exposes(kind) {
            return Err(ConsoleError::NotAvailable { action: kind });
        }

        match action {
            Action::SelectHr => self.select_hr(),
            Action::SelectEmployee => self.select_employee(),
            Action::SelectAdmin => self.select_admin(),
            Action::Back => self.back(),
            Action::LoginHr { email } => self.login_hr(&email),
            Action::LoginEmployee { employee_id } => self.login_employee(&employee_id),
            Action::LoginAdmin { email, password } => self.login_admin(&email, &password),
            Action::LogoutHr => self.logout_hr(),
            Action::LogoutEmployee => self.logout_employee(),
            Action::LogoutAdmin => self.logout_admin(),
            Action::SelectHrPage { page } => self.select_hr_page(page),
            Action::ViewTasks => self.view_tasks(),
            Action::OpenAdminSection { section } => self.open_admin_section(section),
            Action::ViewCompany { company_id } => self.view_company(&company_id),
            Action::BackToInterviewCalls => self.back_to_interview_calls(),
            Action::BackToAdminDashboard => self.back_to_admin_dashboard(),
        }?;

        Ok(self.view())
    }

    fn record(&mut self, kind: ActionKind, transition: Transition) -> Result<(), ConsoleError> {
        match transition {
            Transition::Applied => {
                self.revision += 1;
                debug_assert_eq!(self.navigator.screen().required_role(), self.session.role());
                tracing::debug!(action = %kind, revision = self.revision, "transition applied");
                Ok(())
            }
            Transition::Ignored => Err(ConsoleError::NotAvailable { action: kind }),
        }
    }

    fn require_screen(&self, expected: &Screen, kind: ActionKind) -> Result<(), ConsoleError> {
        if self.navigator.screen() == expected {
            Ok(())
        } else {
            Err(ConsoleError::NotAvailable { action: kind })
        }
    }

    pub fn select_hr(&mut self) -> Result<(), ConsoleError> {
        let transition = self.navigator.select_hr();
        self.record(ActionKind::SelectHr, transition)
    }

    pub fn select_employee(&mut self) -> Result<(), ConsoleError> {
        let transition = self.navigator.select_employee();
        self.record(ActionKind::SelectEmployee, transition)
    }

    pub fn select_admin(&mut self) -> Result<(), ConsoleError> {
        let transition = self.navigator.select_admin();
        self.record(ActionKind::SelectAdmin, transition)
    }

    pub fn back(&mut self) -> Result<(), ConsoleError> {
        let transition = self.navigator.back();
        self.record(ActionKind::Back, transition)
    }

    pub fn login_hr(&mut self, email: &str) -> Result<(), ConsoleError> {
        self.require_screen(&Screen::HrLogin, ActionKind::LoginHr)?;
        self.session.login_hr(email)?;
        let transition = self.navigator.enter_hr_app();
        self.record(ActionKind::LoginHr, transition)
    }

    pub fn login_employee(&mut self, employee_id: &str) -> Result<(), ConsoleError> {
        self.require_screen(&Screen::EmployeeLogin, ActionKind::LoginEmployee)?;
        self.session.login_employee(employee_id)?;
        let transition = self.navigator.enter_employee_app();
        self.record(ActionKind::LoginEmployee, transition)
    }

    pub fn login_admin(&mut self, email: &str, password: &str) -> Result<(), ConsoleError> {
        self.require_screen(&Screen::AdminLogin, ActionKind::LoginAdmin)?;
        self.session.login_admin(email, password)?;
        let transition = self.navigator.enter_admin_app();
        self.record(ActionKind::LoginAdmin, transition)
    }

    pub fn logout_hr(&mut self) -> Result<(), ConsoleError> {
        if !matches!(self.navigator.screen(), Screen::HrApp(_)) {
            return Err(ConsoleError::NotAvailable {
                action: ActionKind::LogoutHr,
            });
        }
        self.session.logout_hr();
        let transition = self.navigator.leave_hr_app();
        self.record(ActionKind::LogoutHr, transition)
    }

    pub fn logout_employee(&mut self) -> Result<(), ConsoleError> {
        self.require_screen(&Screen::EmployeeApp, ActionKind::LogoutEmployee)?;
        self.session.logout_employee();
        let transition = self.navigator.leave_employee_app();
        self.record(ActionKind::LogoutEmployee, transition)
    }

    pub fn logout_admin(&mut self) -> Result<(), ConsoleError> {
        if !matches!(self.navigator.screen(), Screen::AdminApp(_)) {
            return Err(ConsoleError::NotAvailable {
                action: ActionKind::LogoutAdmin,
            });
        }
        self.session.logout_admin();
        let transition = self.navigator.leave_admin_app();
        self.record(ActionKind::LogoutAdmin, transition)
    }

    pub fn select_hr_page(&mut self, page: HrPage) -> Result<(), ConsoleError> {
        let transition = self.navigator.select_hr_page(page);
        self.record(ActionKind::SelectHrPage, transition)
    }

    pub fn view_tasks(&mut self) -> Result<(), ConsoleError> {
        let transition = self.navigator.view_tasks();
        self.record(ActionKind::ViewTasks, transition)
    }

    pub fn open_admin_section(&mut self, section: AdminSection) -> Result<(), ConsoleError> {
        let transition = self.navigator.open_admin_section(section);
        self.record(ActionKind::OpenAdminSection, transition)
    }

    pub fn view_company(&mut self, company_id: &str) -> Result<(), ConsoleError> {
        let at_interview_calls = self.navigator.screen()
            == &Screen::AdminApp(AdminView::Section(AdminSection::InterviewCalls));
        if at_interview_calls && CompanyId::parse(company_id).is_none() {
            tracing::warn!("guard violation: company details requested without a company id");
            return Err(ConsoleError::MissingCompanyId);
        }
        let transition = self.navigator.view_company(company_id);
        self.record(ActionKind::ViewCompany, transition)
    }

    pub fn back_to_interview_calls(&mut self) -> Result<(), ConsoleError> {
        let transition = self.navigator.back_to_interview_calls();
        self.record(ActionKind::BackToInterviewCalls, transition)
    }

    pub fn back_to_admin_dashboard(&mut self) -> Result<(), ConsoleError> {
        let transition = self.navigator.back_to_admin_dashboard();
        self.record(ActionKind::BackToAdminDashboard, transition)
    }
}
