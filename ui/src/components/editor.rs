//! Authoring-phase component
//!
//! Fetches the centre list on mount, lets the user pick a centre, and
//! embeds the fetched detail record into the block configuration. The
//! detail fetch is tagged with the slug it was issued for; the state
//! machine discards completions whose tag no longer matches the
//! current selection, so rapid re-selection can never embed stale
//! data.

use leptos::*;

use centreboard_shared::{BlockEditor, BlockInstanceId, DetailPhase, ListPhase};

use crate::blocks;
use crate::client::{DirectoryApi, HttpDirectoryClient};
use crate::components::CentreDetailCard;

/// Block settings panel plus live preview
#[component]
pub fn CentreBlockEdit(instance: BlockInstanceId) -> impl IntoView {
    let editor = create_rw_signal(BlockEditor::new(blocks::load_configuration(instance)));

    let load_list = move || {
        editor.update(|e| e.begin_list_load());
        spawn_local(async move {
            let client = HttpDirectoryClient::from_origin();
            match client.list_centres().await {
                Ok(centres) => editor.update(|e| e.list_loaded(centres)),
                Err(err) => {
                    tracing::warn!("Centre list fetch failed: {}", err);
                    editor.update(|e| e.list_failed(err.to_string()));
                }
            }
        });
    };

    // Fetch the centre list on mount; retries are user-triggered
    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            load_list();
        }
    });

    let on_select = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let mut fetch_slug = None;
        editor.update(|e| fetch_slug = e.select(&value));
        editor.with_untracked(|e| blocks::store_configuration(instance, &e.config));

        if let Some(slug) = fetch_slug {
            spawn_local(async move {
                let client = HttpDirectoryClient::from_origin();
                match client.centre_detail(&slug).await {
                    Ok(detail) => {
                        let mut applied = false;
                        editor.update(|e| applied = e.detail_loaded(&slug, detail));
                        if applied {
                            editor.with_untracked(|e| {
                                blocks::store_configuration(instance, &e.config)
                            });
                        }
                    }
                    Err(err) => {
                        tracing::warn!("Detail fetch failed for {}: {}", slug, err);
                        editor.update(|e| {
                            e.detail_failed(&slug, err.to_string());
                        });
                    }
                }
            });
        }
    };

    view! {
        <div class="centre-block-editor">
            <div class="settings-panel">
                <h2>"Collection Centre Settings"</h2>

                <label for="centre-select">"Select a Centre"</label>
                <select
                    id="centre-select"
                    prop:value=move || editor.with(|e| e.config.selected_slug.clone())
                    disabled=move || editor.with(|e| e.list == ListPhase::Loading)
                    on:change=on_select
                >
                    <option value="">"-- Select a Centre --"</option>
                    {move || editor.with(|e| e.summaries()
                        .iter()
                        .map(|centre| {
                            let selected = centre.slug == e.config.selected_slug;
                            view! {
                                <option value=centre.slug.clone() selected=selected>
                                    {centre.name.clone()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>())}
                </select>

                {move || editor.with(|e| match &e.list {
                    ListPhase::Loading => Some(view! {
                        <p class="loading">"Loading centres..."</p>
                    }.into_view()),
                    ListPhase::Failed(message) => Some(view! {
                        <div class="notice notice-error">
                            <p>{message.clone()}</p>
                            <button on:click=move |_| load_list()>"Retry"</button>
                        </div>
                    }.into_view()),
                    _ => None,
                })}

                {move || editor.with(|e| match &e.detail {
                    DetailPhase::Loading { .. } => Some(view! {
                        <p class="loading">"Loading centre details..."</p>
                    }.into_view()),
                    DetailPhase::Failed(message) => Some(view! {
                        <div class="notice notice-error">
                            <p>{message.clone()}</p>
                        </div>
                    }.into_view()),
                    _ => None,
                })}
            </div>

            <div class="preview">
                {move || editor.with(|e| match e.config.embedded_detail.clone() {
                    Some(detail) => view! {
                        <CentreDetailCard detail=detail />
                    }.into_view(),
                    None => view! {
                        <div class="centre-block-placeholder">
                            "Please select a collection centre from the block settings."
                        </div>
                    }.into_view(),
                })}
            </div>
        </div>
    }
}
