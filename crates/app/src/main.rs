use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{Directory, FeatureFlags, RoutingPolicy};

mod format_helpers;
mod routes;
mod session;

use routes::ideas::{IdeaSourceContext, ServerIdeaSource};
use routes::Route;
use session::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();

        server::telemetry::init_telemetry(config.features.telemetry);
        server::health::record_start_time();

        tracing::info!(
            ai_ideas = config.features.ai_ideas,
            routing = ?config.navigation.routing,
            "EduNexus starting"
        );

        let router =
            dioxus::server::router(App).merge(server::health::health_router());
        Ok(server::telemetry::with_request_ids(router))
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Seed data is built once and shared read-only by every view.
    use_context_provider(|| {
        let directory = Directory::seeded();
        if let Err(err) = directory.check_integrity() {
            tracing::error!(error = %err.message, "Seed data failed integrity check");
        }
        Rc::new(directory)
    });
    use_context_provider(SessionState::new);
    use_context_provider(|| IdeaSourceContext(Rc::new(ServerIdeaSource)));

    // Fetch flags and routing policy once (defaults on error).
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;
    let policy_resource =
        use_server_future(move || async move { server::api::get_routing_policy().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();
    let policy = policy_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(RoutingPolicy::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(|| policy);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
