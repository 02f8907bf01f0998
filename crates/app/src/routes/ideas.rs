use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSparkles;
use dioxus_free_icons::Icon;
use shared_types::{AppError, AssignmentIdea};
use shared_ui::{Badge, BadgeTone, Button, ErrorAlert, Input, Modal};

pub type IdeaFuture = Pin<Box<dyn Future<Output = Result<Vec<AssignmentIdea>, AppError>>>>;

/// Something that turns a topic into assignment suggestions.
pub trait IdeaSource {
    fn generate(&self, topic: String) -> IdeaFuture;
}

/// Asks the server, which holds the API key.
pub struct ServerIdeaSource;

impl IdeaSource for ServerIdeaSource {
    fn generate(&self, topic: String) -> IdeaFuture {
        Box::pin(async move {
            server::api::generate_assignment_ideas(topic)
                .await
                .map_err(|e| {
                    let raw = e.to_string();
                    AppError::from_server_error(&raw)
                        .unwrap_or_else(|| AppError::upstream(AppError::friendly_message(&raw)))
                })
        })
    }
}

/// Context wrapper so views can reach the injected source.
#[derive(Clone)]
pub struct IdeaSourceContext(pub Rc<dyn IdeaSource>);

pub fn use_idea_source() -> Rc<dyn IdeaSource> {
    use_context::<IdeaSourceContext>().0
}

/// Topic in, a few assignment suggestions out.
///
/// Closing the modal cancels a request still in flight, so a late reply
/// never lands in a closed dialog.
#[component]
pub fn AssignmentIdeasModal(open: bool, on_close: EventHandler<()>) -> Element {
    let source = use_idea_source();

    let mut topic = use_signal(String::new);
    let mut ideas = use_signal(Vec::<AssignmentIdea>::new);
    let mut generating = use_signal(|| false);
    let mut error_msg = use_signal(|| None::<String>);
    let mut in_flight = use_signal(|| None::<Task>);

    let mut cancel = move || {
        if let Some(task) = in_flight.write().take() {
            task.cancel();
            tracing::debug!("Idea request cancelled");
        }
        generating.set(false);
    };

    use_drop(move || {
        if let Some(task) = in_flight.peek().as_ref() {
            task.cancel();
        }
    });

    let handle_generate = move |evt: FormEvent| {
        evt.prevent_default();
        let requested = topic().trim().to_string();
        if requested.is_empty() || generating() {
            return;
        }
        cancel();
        generating.set(true);
        error_msg.set(None);

        let source = source.clone();
        let task = spawn(async move {
            let result = source.generate(requested.clone()).await;
            generating.set(false);
            in_flight.set(None);
            match result {
                Ok(found) => {
                    tracing::info!(topic = %requested, count = found.len(), "Assignment ideas ready");
                    ideas.set(found);
                }
                Err(err) => {
                    tracing::warn!(topic = %requested, kind = ?err.kind, "Assignment ideas failed");
                    let shown = err.field_errors.get("topic").cloned().unwrap_or(err.message);
                    error_msg.set(Some(shown));
                }
            }
        });
        in_flight.set(Some(task));
    };

    let handle_close = move |_| {
        cancel();
        topic.set(String::new());
        ideas.set(Vec::new());
        error_msg.set(None);
        on_close.call(());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./ideas.css") }

        Modal {
            open,
            on_close: handle_close,
            title: "Create Assignment",
            description: "Describe a topic and get a few ready-made assignment ideas.",

            form { class: "ideas-form", onsubmit: handle_generate,
                Input {
                    label: "Topic",
                    placeholder: "e.g. Photosynthesis, Fractions, World War II",
                    value: topic(),
                    disabled: generating(),
                    on_input: move |e: FormEvent| topic.set(e.value()),
                }
                Button {
                    button_type: "submit",
                    busy: generating(),
                    busy_label: "Generating ideas...",
                    disabled: topic().trim().is_empty(),
                    Icon::<LdSparkles> { icon: LdSparkles, width: 16, height: 16 }
                    "Generate Ideas"
                }
            }

            if !ideas().is_empty() {
                ul { class: "ideas-list",
                    for idea in ideas() {
                        li { class: "ideas-item", key: "{idea.title}",
                            div { class: "ideas-item-header",
                                h4 { "{idea.title}" }
                                Badge { tone: BadgeTone::Info, "{idea.estimated_time}" }
                            }
                            p { "{idea.description}" }
                        }
                    }
                }
            }

            ErrorAlert {
                title: "Could not generate ideas",
                message: error_msg(),
                on_dismiss: move |_| error_msg.set(None),
            }
        }
    }
}
