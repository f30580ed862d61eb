//! Screen navigator.
//!
//! Every transition is total: it applies when the current screen is one of
//! its source states and is otherwise ignored, leaving the screen untouched.

use crate::models::{AdminSection, AdminView, CompanyId, HrPage, Screen};

/// Outcome of a navigator transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

#[derive(Debug, Default)]
pub struct Navigator {
    screen: Screen,
}

impl Navigator {
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    fn go(&mut self, next: Screen) -> Transition {
        tracing::debug!(from = ?self.screen, to = ?next, "screen transition");
        self.screen = next;
        Transition::Applied
    }

    fn go_from_home(&mut self, next: Screen) -> Transition {
        match self.screen {
            Screen::Home => self.go(next),
            _ => Transition::Ignored,
        }
    }

    pub fn select_hr(&mut self) -> Transition {
        self.go_from_home(Screen::HrLogin)
    }

    pub fn select_employee(&mut self) -> Transition {
        self.go_from_home(Screen::EmployeeLogin)
    }

    pub fn select_admin(&mut self) -> Transition {
        self.go_from_home(Screen::AdminLogin)
    }

    /// Back from any login screen to home.
    pub fn back(&mut self) -> Transition {
        if self.screen.is_login() {
            self.go(Screen::Home)
        } else {
            Transition::Ignored
        }
    }

    /// Successful HR login; always starts on the dashboard.
    pub fn enter_hr_app(&mut self) -> Transition {
        match self.screen {
            Screen::HrLogin => self.go(Screen::HrApp(HrPage::Dashboard)),
            _ => Transition::Ignored,
        }
    }

    pub fn enter_employee_app(&mut self) -> Transition {
        match self.screen {
            Screen::EmployeeLogin => self.go(Screen::EmployeeApp),
            _ => Transition::Ignored,
        }
    }

    /// Successful admin login; always starts on the admin dashboard.
    pub fn enter_admin_app(&mut self) -> Transition {
        match self.screen {
            Screen::AdminLogin => self.go(Screen::AdminApp(AdminView::Dashboard)),
            _ => Transition::Ignored,
        }
    }

    pub fn leave_hr_app(&mut self) -> Transition {
        match self.screen {
            Screen::HrApp(_) => self.go(Screen::Home),
            _ => Transition::Ignored,
        }
    }

    pub fn leave_employee_app(&mut self) -> Transition {
        match self.screen {
            Screen::EmployeeApp => self.go(Screen::Home),
            _ => Transition::Ignored,
        }
    }

    /// Admin logout lands back on the admin login screen, dropping any drill-down.
    pub fn leave_admin_app(&mut self) -> Transition {
        match self.screen {
            Screen::AdminApp(_) => self.go(Screen::AdminLogin),
            _ => Transition::Ignored,
        }
    }

    pub fn select_hr_page(&mut self, page: HrPage) -> Transition {
        match self.screen {
            Screen::HrApp(_) => self.go(Screen::HrApp(page)),
            _ => Transition::Ignored,
        }
    }

    /// Dashboard shortcut to the task list.
    pub fn view_tasks(&mut self) -> Transition {
        match self.screen {
            Screen::HrApp(HrPage::Dashboard) => self.go(Screen::HrApp(HrPage::Tasks)),
            _ => Transition::Ignored,
        }
    }

    pub fn open_admin_section(&mut self, section: AdminSection) -> Transition {
        match self.screen {
            Screen::AdminApp(AdminView::Dashboard) => {
                self.go(Screen::AdminApp(AdminView::Section(section)))
            }
            _ => Transition::Ignored,
        }
    }

    pub fn view_company(&mut self, company_id: &str) -> Transition {
        match self.screen {
            Screen::AdminApp(AdminView::Section(AdminSection::InterviewCalls)) => {
                match CompanyId::parse(company_id) {
                    Some(id) => self.go(Screen::AdminApp(AdminView::CompanyDetails(id))),
                    None => Transition::Ignored,
                }
            }
            _ => Transition::Ignored,
        }
    }

    pub fn back_to_interview_calls(&mut self) -> Transition {
        match self.screen {
            Screen::AdminApp(AdminView::CompanyDetails(_)) => self.go(Screen::AdminApp(
                AdminView::Section(AdminSection::InterviewCalls),
            )),
            _ => Transition::Ignored,
        }
    }

    pub fn back_to_admin_dashboard(&mut self) -> Transition {
        match self.screen {
            Screen::AdminApp(AdminView::Section(_)) => {
                self.go(Screen::AdminApp(AdminView::Dashboard))
            }
            _ => Transition::Ignored,
        }
    }
}
