use leptos::*;
use shared::SpinnerSize;

use crate::components::{Loading, LoadingOverlay, LoadingSpinner};

/// Reads `?size=` from the page URL for the featured spinner.
fn size_from_query() -> SpinnerSize {
    let size = window()
        .location()
        .search()
        .ok()
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("size"));

    SpinnerSize::from_attr(size.as_deref())
}

#[component]
pub fn App() -> impl IntoView {
    let featured = size_from_query();
    log::debug!("Featured spinner size: {}", featured.as_str());

    let (show_overlay, set_show_overlay) = create_signal(false);

    view! {
        <main class="spinner-gallery">
            <section>
                <h2>"Featured"</h2>
                <LoadingSpinner size=featured />
            </section>

            <section>
                <h2>"Sizes"</h2>
                <div class="flex gap-4">
                    <LoadingSpinner size=SpinnerSize::Small />
                    <LoadingSpinner />
                    <LoadingSpinner size=SpinnerSize::Large />
                </div>
            </section>

            <section>
                <h2>"Custom class"</h2>
                <LoadingSpinner class="text-amber-500 p-4" />
            </section>

            <section>
                <h2>"Page loading"</h2>
                <Loading />
            </section>

            <button
                type="button"
                class="btn btn-primary"
                on:click=move |_| set_show_overlay.set(true)
            >
                "Show overlay"
            </button>

            <Show when=move || show_overlay.get()>
                <div on:click=move |_| set_show_overlay.set(false)>
                    <LoadingOverlay />
                </div>
            </Show>
        </main>
    }
}
