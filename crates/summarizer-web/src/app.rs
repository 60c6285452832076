/// Main application component and routing

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::{chat::ChatPage, not_found::NotFoundPage};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/summarizer-web.css"/>
        <Title text="Summarizer"/>
        <Meta name="description" content="Transformer-based text summarization"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Router>
            <Routes>
                <Route path="/" view=ChatPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
