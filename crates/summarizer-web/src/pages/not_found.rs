/// 404 Not Found page

use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href="/" class="not-found-link">
                "Back to the summarizer"
            </A>
        </div>
    }
}
