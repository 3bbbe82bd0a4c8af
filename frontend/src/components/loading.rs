use leptos::*;
use shared::SpinnerSize;

use super::loading_spinner::LoadingSpinner;

/// Section-level placeholder shown while a page's data loads.
#[component]
pub fn Loading(#[prop(optional)] size: SpinnerSize) -> impl IntoView {
    view! {
        <div class="loading">
            <LoadingSpinner size=size class="py-12" />
        </div>
    }
}

/// Blocks the whole viewport during an operation the user has to wait for.
#[component]
pub fn LoadingOverlay(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Please wait".to_string());

    view! {
        <div class="modal-backdrop">
            <LoadingSpinner size=SpinnerSize::Large label=label />
        </div>
    }
}
