//! Root Application Component
//!
//! Sets up routing between the two block phases: the authoring page
//! (editor over the demo block instance) and the preview page, which
//! renders a persisted configuration the way a visitor would see it.

use leptos::*;
use leptos_router::*;

use centreboard_shared::BlockInstanceId;

use crate::blocks;
use crate::components::{CentreBlockEdit, CentreView};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <nav class="top-nav">
                <A href="/">"Edit"</A>
                <A href=move || format!("/preview/{}", blocks::demo_instance())>"Preview"</A>
            </nav>
            <main>
                <Routes>
                    <Route path="/" view=EditorPage />
                    <Route path="/preview/:instance" view=PreviewPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Authoring page over the demo block instance
#[component]
fn EditorPage() -> impl IntoView {
    let instance = blocks::demo_instance();
    view! { <CentreBlockEdit instance=instance /> }
}

/// Display page: reads the persisted configuration verbatim and
/// renders it without any network access
#[component]
fn PreviewPage() -> impl IntoView {
    let params = use_params_map();
    let instance = move || {
        params
            .with(|p| p.get("instance").cloned())
            .and_then(|raw| BlockInstanceId::parse(&raw))
    };

    view! {
        {move || match instance() {
            Some(id) => {
                let config = blocks::load_configuration(id);
                view! { <CentreView config=config /> }.into_view()
            }
            None => view! {
                <div class="centre-block-placeholder">
                    "Unknown block instance."
                </div>
            }
            .into_view(),
        }}
    }
}
