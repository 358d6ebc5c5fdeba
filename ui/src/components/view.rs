//! Display-phase rendering
//!
//! Renders strictly from the persisted [`BlockConfiguration`]; no
//! network access happens on this path. Text interpolation goes
//! through Leptos text nodes, which escape on the way into the DOM.

use leptos::*;

use centreboard_shared::{dial_href, BlockConfiguration, CentreDetail};

/// Static block render for visitors
///
/// With no embedded detail this renders a neutral placeholder; it must
/// never error, whatever state the configuration is in.
#[component]
pub fn CentreView(config: BlockConfiguration) -> impl IntoView {
    match config.embedded_detail {
        Some(detail) => view! {
            <CentreDetailCard detail=detail />
        }
        .into_view(),
        None => view! {
            <div class="centre-block-placeholder">
                "No collection centre selected."
            </div>
        }
        .into_view(),
    }
}

/// Detail card shared by the display phase and the editor preview
#[component]
pub fn CentreDetailCard(detail: CentreDetail) -> impl IntoView {
    let phone = detail.phone.clone();
    let map_link = detail.map_link.clone();

    view! {
        <div class="centre-block">
            <h3>{detail.name}</h3>
            <div class="address">
                <p>{detail.address}</p>
                <p>{detail.city}</p>
            </div>
            // Tap-to-call only when a phone value is present; href
            // formatting is best effort and never throws
            {dial_href(&phone).map(|href| view! {
                <p class="phone">
                    <a href=href>{phone.clone()}</a>
                </p>
            })}
            <div class="opening-hours">
                <h4>"Opening Hours"</h4>
                <ul>
                    {detail.hours.into_iter().map(|day| view! {
                        <li>
                            <span class="day">{day.day}":"</span>
                            <span class="hours">{day.hours}</span>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
            {(!map_link.is_empty()).then(|| view! {
                <a
                    href=map_link.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="directions-link"
                >
                    "Get Directions"
                </a>
            })}
        </div>
    }
}
