use leptos::*;
use shared::{SpinnerConfig, SpinnerSize};

const DEFAULT_LABEL: &str = "Loading";

/// Animated indicator for in-progress work.
///
/// The outer container receives `class`; the inner element carries the spin
/// marker and the dimension pair for `size`.
#[component]
pub fn LoadingSpinner(
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let config = SpinnerConfig {
        size,
        class_name: class,
    };
    let label = label.unwrap_or_else(|| DEFAULT_LABEL.to_string());

    view! {
        <div class=config.container_class() role="status" aria-label=label>
            <div class=config.indicator_class()></div>
        </div>
    }
}
