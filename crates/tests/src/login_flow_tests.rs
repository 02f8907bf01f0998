use pretty_assertions::assert_eq;
use shared_types::{
    AppErrorKind, Directory, LoginStep, Session, UserRole, INVALID_CREDENTIALS,
    INVALID_SCHOOL_CODE,
};

use crate::common::{self, SEED_LOGINS};

#[test]
fn every_seed_login_signs_in_whatever_the_password() {
    let dir = Directory::seeded();
    for (code, email) in SEED_LOGINS {
        for password in ["", "hunter2", "correct horse battery staple"] {
            let mut session = Session::new();
            session.verify_school(&dir, code).unwrap();
            let active = session.sign_in(&dir, email, password).unwrap();
            assert_eq!(active.user.email, *email);
            assert!(active.tab.is_dashboard());
        }
    }
}

#[test]
fn school_codes_match_case_insensitively() {
    let dir = Directory::seeded();
    for code in ["town01", "Town01", " TOWN01 "] {
        let mut session = Session::new();
        let school = session.verify_school(&dir, code).unwrap();
        assert_eq!(school.name, "Townsville International");
    }
}

#[test]
fn unknown_code_is_rejected_with_hint() {
    let dir = Directory::seeded();
    let mut session = Session::new();
    for code in ["", "TOWN", "TOWN011", "ELITE"] {
        let err = session.verify_school(&dir, code).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, INVALID_SCHOOL_CODE);
    }
    assert_eq!(session.login_step(), Some(LoginStep::SchoolCode));
}

#[test]
fn email_from_another_school_is_rejected() {
    let dir = Directory::seeded();
    let mut session = Session::new();
    session.verify_school(&dir, "ELITE99").unwrap();

    let err = session.sign_in(&dir, "admin@town.com", "x").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, INVALID_CREDENTIALS);
    assert_eq!(session.login_step(), Some(LoginStep::Credentials));
}

#[test]
fn change_school_then_sign_in_elsewhere() {
    let dir = Directory::seeded();
    let mut session = Session::new();
    session.verify_school(&dir, "TOWN01").unwrap();
    session.change_school();
    assert_eq!(session.login_step(), Some(LoginStep::SchoolCode));

    session.verify_school(&dir, "ELITE99").unwrap();
    let active = session.sign_in(&dir, "admin@elite.com", "").unwrap();
    assert_eq!(active.school.id, "s2");
    assert_eq!(active.user.role, UserRole::Admin);
}

#[test]
fn sign_out_returns_to_the_first_step() {
    let dir = Directory::seeded();
    let mut session = common::sign_in(&dir, "TOWN01", "parent@town.com");
    session.select_tab("messages");

    session.sign_out();
    assert!(!session.is_authenticated());
    assert_eq!(session.login_step(), Some(LoginStep::SchoolCode));
    assert_eq!(session.pending_school(), None);
}

#[test]
fn signing_in_again_starts_on_the_dashboard() {
    let dir = Directory::seeded();
    let mut session = common::sign_in(&dir, "TOWN01", "teacher@town.com");
    assert!(session.select_tab("exams"));
    session.sign_out();

    session.verify_school(&dir, "TOWN01").unwrap();
    let active = session.sign_in(&dir, "teacher@town.com", "").unwrap();
    assert!(active.tab.is_dashboard());
}
