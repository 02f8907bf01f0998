use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{ActiveSession, AppError, Directory, LoginStep, School, Session, Tab};

/// The one session for this window. Views read it; only the methods below
/// change it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::new()),
        }
    }

    pub fn login_step(&self) -> Option<LoginStep> {
        self.session.read().login_step()
    }

    pub fn pending_school(&self) -> Option<School> {
        self.session.read().pending_school().cloned()
    }

    pub fn active(&self) -> Option<ActiveSession> {
        self.session.read().active().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn verify_school(&mut self, directory: &Directory, code: &str) -> Result<School, AppError> {
        let result = self
            .session
            .write()
            .verify_school(directory, code)
            .cloned();
        match &result {
            Ok(school) => tracing::info!(school = %school.code, "School code accepted"),
            Err(err) => tracing::warn!(code = %code.trim(), error = %err.message, "School code rejected"),
        }
        result
    }

    pub fn sign_in(
        &mut self,
        directory: &Directory,
        email: &str,
        password: &str,
    ) -> Result<ActiveSession, AppError> {
        let result = self
            .session
            .write()
            .sign_in(directory, email, password)
            .cloned();
        match &result {
            Ok(active) => tracing::info!(
                user = %active.user.id,
                role = %active.user.role,
                school = %active.school.code,
                "Signed in"
            ),
            Err(err) => tracing::warn!(error = %err.message, "Sign-in failed"),
        }
        result
    }

    pub fn change_school(&mut self) {
        self.session.write().change_school();
    }

    pub fn sign_out(&mut self) {
        let user = self.active().map(|a| a.user.id);
        self.session.write().sign_out();
        tracing::info!(user = ?user, "Signed out");
    }

    pub fn select_tab(&mut self, tab: impl Into<Tab>) {
        let tab = tab.into();
        if self.session.write().select_tab(tab.clone()) {
            tracing::debug!(tab = %tab, "Tab selected");
        }
    }
}

/// Hook to access the session.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Hook to access the seed directory.
pub fn use_directory() -> Rc<Directory> {
    use_context::<Rc<Directory>>()
}
