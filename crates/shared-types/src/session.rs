use crate::{
    resolve_view, AppError, Directory, RoutingPolicy, School, Tab, User, ViewId,
};

pub const INVALID_SCHOOL_CODE: &str = r#"Invalid school code. Try "TOWN01" or "ELITE99"."#;
pub const INVALID_CREDENTIALS: &str =
    r#"Invalid credentials. Try "admin@town.com" or "student@town.com"."#;

/// Which screen of the two-step sign-in form to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    SchoolCode,
    Credentials,
}

/// The signed-in user, their school and the selected tab.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSession {
    pub user: User,
    pub school: School,
    pub tab: Tab,
}

/// Who is using the app right now.
///
/// Every state change goes through the methods below; there is no
/// timeout, token or persistence.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Unauthenticated { pending_school: Option<School> },
    Authenticated(ActiveSession),
}

impl Default for Session {
    fn default() -> Self {
        Session::Unauthenticated {
            pending_school: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_step(&self) -> Option<LoginStep> {
        match self {
            Session::Unauthenticated {
                pending_school: None,
            } => Some(LoginStep::SchoolCode),
            Session::Unauthenticated {
                pending_school: Some(_),
            } => Some(LoginStep::Credentials),
            Session::Authenticated(_) => None,
        }
    }

    /// School picked in step one, if any.
    pub fn pending_school(&self) -> Option<&School> {
        match self {
            Session::Unauthenticated { pending_school } => pending_school.as_ref(),
            Session::Authenticated(_) => None,
        }
    }

    /// Step one: look up the school code and remember the school.
    ///
    /// Ignored once authenticated.
    pub fn verify_school(&mut self, directory: &Directory, code: &str) -> Result<&School, AppError> {
        let Session::Unauthenticated { pending_school } = self else {
            return Err(AppError::bad_request("Already signed in."));
        };
        let school = directory
            .find_school_by_code(code)
            .ok_or_else(|| AppError::not_found(INVALID_SCHOOL_CODE))?;
        Ok(pending_school.insert(school.clone()))
    }

    /// Step two: match the email against the pending school.
    ///
    /// The password is accepted as-is. On success the tab resets to the dashboard.
    pub fn sign_in(
        &mut self,
        directory: &Directory,
        email: &str,
        _password: &str,
    ) -> Result<&ActiveSession, AppError> {
        let school = self
            .pending_school()
            .cloned()
            .ok_or_else(|| AppError::bad_request("Enter a school code first."))?;
        let user = directory
            .find_user(email.trim(), &school.id)
            .cloned()
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        *self = Session::Authenticated(ActiveSession {
            user,
            school,
            tab: Tab::dashboard(),
        });
        self.active()
            .ok_or_else(|| AppError::internal("sign-in did not complete"))
    }

    /// Back from step two to step one.
    pub fn change_school(&mut self) {
        if let Session::Unauthenticated { pending_school } = self {
            *pending_school = None;
        }
    }

    pub fn sign_out(&mut self) {
        *self = Session::default();
    }

    /// Switch tabs. Returns whether anything changed; a no-op while signed out.
    pub fn select_tab(&mut self, tab: impl Into<Tab>) -> bool {
        match self {
            Session::Authenticated(active) => {
                let tab = tab.into();
                if active.tab == tab {
                    return false;
                }
                active.tab = tab;
                true
            }
            Session::Unauthenticated { .. } => false,
        }
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        match self {
            Session::Authenticated(active) => Some(active),
            Session::Unauthenticated { .. } => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.active().is_some()
    }

    /// What the main area shows, or `None` when signed out.
    pub fn current_view(&self, policy: RoutingPolicy) -> Option<ViewId> {
        self.active()
            .map(|a| resolve_view(a.user.role, &a.tab, policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppErrorKind, Screen};
    use pretty_assertions::assert_eq;

    fn signed_in(email: &str, code: &str) -> Session {
        let dir = Directory::seeded();
        let mut session = Session::new();
        session.verify_school(&dir, code).unwrap();
        session.sign_in(&dir, email, "anything").unwrap();
        session
    }

    #[test]
    fn starts_at_school_code_step() {
        let session = Session::new();
        assert_eq!(session.login_step(), Some(LoginStep::SchoolCode));
        assert!(session.active().is_none());
    }

    #[test]
    fn valid_code_moves_to_credentials() {
        let dir = Directory::seeded();
        let mut session = Session::new();
        let school = session.verify_school(&dir, "elite99").unwrap();
        assert_eq!(school.id, "s2");
        assert_eq!(session.login_step(), Some(LoginStep::Credentials));
    }

    #[test]
    fn bad_code_stays_on_first_step() {
        let dir = Directory::seeded();
        let mut session = Session::new();
        let err = session.verify_school(&dir, "NOPE").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, INVALID_SCHOOL_CODE);
        assert_eq!(session.login_step(), Some(LoginStep::SchoolCode));
    }

    #[test]
    fn sign_in_resets_tab_to_dashboard() {
        let session = signed_in("teacher@town.com", "TOWN01");
        let active = session.active().unwrap();
        assert_eq!(active.user.id, "u2");
        assert_eq!(active.school.id, "s1");
        assert!(active.tab.is_dashboard());
    }

    #[test]
    fn wrong_school_email_is_generic_credential_error() {
        let dir = Directory::seeded();
        let mut session = Session::new();
        session.verify_school(&dir, "ELITE99").unwrap();
        let err = session.sign_in(&dir, "admin@town.com", "pw").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, INVALID_CREDENTIALS);
        assert_eq!(session.login_step(), Some(LoginStep::Credentials));
    }

    #[test]
    fn sign_in_without_school_is_rejected() {
        let dir = Directory::seeded();
        let mut session = Session::new();
        let err = session.sign_in(&dir, "admin@town.com", "pw").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
    }

    #[test]
    fn change_school_returns_to_first_step() {
        let dir = Directory::seeded();
        let mut session = Session::new();
        session.verify_school(&dir, "TOWN01").unwrap();
        session.change_school();
        assert_eq!(session.login_step(), Some(LoginStep::SchoolCode));
        assert!(session.pending_school().is_none());
    }

    #[test]
    fn select_tab_changes_view() {
        let mut session = signed_in("teacher@town.com", "TOWN01");
        assert!(session.select_tab("classes"));
        assert!(!session.select_tab("classes"));
        assert_eq!(
            session.current_view(RoutingPolicy::Dedicated),
            Some(ViewId::Screen(Screen::TeacherClasses))
        );
    }

    #[test]
    fn select_tab_is_ignored_when_signed_out() {
        let mut session = Session::new();
        assert!(!session.select_tab("users"));
        assert_eq!(session.current_view(RoutingPolicy::Dedicated), None);
    }

    #[test]
    fn sign_out_clears_everything() {
        let mut session = signed_in("admin@elite.com", "ELITE99");
        session.select_tab("fees");
        session.sign_out();
        assert_eq!(session, Session::default());
        assert!(session.pending_school().is_none());
        assert_eq!(session.current_view(RoutingPolicy::Dedicated), None);
    }

    #[test]
    fn verify_school_after_sign_in_is_rejected() {
        let dir = Directory::seeded();
        let mut session = signed_in("admin@town.com", "TOWN01");
        assert!(session.verify_school(&dir, "ELITE99").is_err());
        assert_eq!(session.active().unwrap().school.id, "s1");
    }
}
