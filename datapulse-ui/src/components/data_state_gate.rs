//! Data-State Gate
//!
//! Banner explaining why a block has no content and where to fix it.
//! Renders nothing once the data is ready.

use datapulse_console::{DataState, RETRY_LABEL};
use leptos::*;
use leptos_router::*;

/// Gate banner for a non-ready data state
#[component]
pub fn DataStateGate(
    state: DataState,
    /// Invoked by the retry button, shown only for `Error`
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    state.copy().map(|copy| {
        let retry = state.is_retryable().then(|| {
            view! {
                <button
                    type="button"
                    class="button button--ghost"
                    on:click=move |_| {
                        if let Some(on_retry) = on_retry.as_ref() {
                            on_retry.call(());
                        }
                    }
                >
                    {RETRY_LABEL}
                </button>
            }
        });

        view! {
            <div
                class=banner_class(compact)
                data-testid="data-state-banner"
                data-state=state.as_str()
            >
                <div>
                    <p class="data-state__title">{copy.title}</p>
                    <p class="data-state__description">{copy.description}</p>
                </div>
                <div class="data-state__actions">
                    {retry}
                    <A href=copy.cta_path class="button button--primary">
                        {copy.cta_label}
                    </A>
                </div>
            </div>
        }
    })
}

fn banner_class(compact: bool) -> &'static str {
    if compact {
        "data-state data-state--compact"
    } else {
        "data-state"
    }
}
