use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdGraduationCap, LdLock, LdMail};
use dioxus_free_icons::Icon;
use shared_types::LoginStep;
use shared_ui::{
    AccentScope, AvatarSize, Button, ButtonVariant, Card, CardContent, Input, UserAvatar,
};

use crate::routes::Route;
use crate::session::{use_directory, use_session};

/// Two-step sign-in: school code, then email and password.
///
/// The form takes on the school's accent once the code is accepted.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let directory = use_directory();

    let mut school_code = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);

    if session.is_authenticated() {
        navigator().push(Route::Workspace {});
    }

    let step = session.login_step().unwrap_or(LoginStep::SchoolCode);
    let pending = session.pending_school();
    let brand = pending
        .as_ref()
        .and_then(|s| Some((s.logo_url.clone()?, s.name.clone(), s.monogram())));
    let accent = pending
        .as_ref()
        .map(|s| s.primary_color.clone())
        .unwrap_or_default();

    let handle_verify = {
        let directory = directory.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            error_msg.set(None);
            if let Err(err) = session.verify_school(&directory, &school_code()) {
                error_msg.set(Some(err.message));
            }
        }
    };

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);
        match session.sign_in(&directory, &email(), &password()) {
            Ok(_) => {
                password.set(String::new());
                navigator().push(Route::Workspace {});
            }
            Err(err) => error_msg.set(Some(err.message)),
        }
    };

    let (title, subtitle) = match &pending {
        Some(school) => (
            format!("Welcome to {}", school.name),
            "Please sign in to continue.",
        ),
        None => (
            "Find Your School".to_string(),
            "Enter the code provided by your administration.",
        ),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        AccentScope { color: accent, class: "auth-page",
            Card { class: "auth-card",
                CardContent {
                    div { class: "auth-heading",
                        div { class: "auth-logo",
                            if let Some((logo, name, initials)) = brand {
                                UserAvatar { src: logo, name, initials, size: AvatarSize::Large }
                            } else {
                                Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 32, height: 32 }
                            }
                        }
                        h1 { class: "auth-title", "{title}" }
                        p { class: "auth-subtitle", "{subtitle}" }
                    }

                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    match step {
                        LoginStep::SchoolCode => rsx! {
                            form { class: "auth-form", onsubmit: handle_verify,
                                div { class: "auth-field",
                                    Input {
                                        label: "School Code",
                                        placeholder: "e.g. TOWN01",
                                        value: school_code(),
                                        required: true,
                                        on_input: move |e: FormEvent| school_code.set(e.value()),
                                    }
                                }
                                Button { button_type: "submit", full_width: true,
                                    "Continue"
                                    Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 }
                                }
                            }
                        },
                        LoginStep::Credentials => rsx! {
                            form { class: "auth-form", onsubmit: handle_sign_in,
                                div { class: "auth-field",
                                    Input {
                                        label: "Email Address",
                                        input_type: "email",
                                        placeholder: "you@school.com",
                                        value: email(),
                                        required: true,
                                        icon: rsx! { Icon::<LdMail> { icon: LdMail, width: 16, height: 16 } },
                                        on_input: move |e: FormEvent| email.set(e.value()),
                                    }
                                }
                                div { class: "auth-field",
                                    Input {
                                        label: "Password",
                                        input_type: "password",
                                        placeholder: "Any password works in the demo",
                                        value: password(),
                                        icon: rsx! { Icon::<LdLock> { icon: LdLock, width: 16, height: 16 } },
                                        on_input: move |e: FormEvent| password.set(e.value()),
                                    }
                                }
                                Button { button_type: "submit", full_width: true, "Sign In" }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    full_width: true,
                                    onclick: move |_| {
                                        error_msg.set(None);
                                        session.change_school();
                                    },
                                    "Change School"
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
