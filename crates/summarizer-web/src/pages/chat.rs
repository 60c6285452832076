/// Summarizer chat page
///
/// Hosts the sidebar and the text composer, and owns the state the sidebar
/// reports into: visibility, archived history, and the current draft.

use chrono::{DateTime, Local, TimeZone, Utc};
use leptos::*;

use crate::components::icons::ChevronRightIcon;
use crate::components::sidebar::{Sidebar, SHOW_SIDEBAR};
use crate::history::ChatHistory;
use crate::utils::format::format_char_count;
use crate::utils::validation::{input_char_count, validate_summary_input, MAX_INPUT_CHARS};

/// Page state behind the sidebar callbacks.
#[derive(Clone, Copy)]
pub struct ChatState {
    pub is_visible: RwSignal<bool>,
    pub history: RwSignal<ChatHistory>,
    pub draft: RwSignal<String>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            is_visible: create_rw_signal(true),
            history: create_rw_signal(ChatHistory::new()),
            draft: create_rw_signal(String::new()),
        }
    }

    /// Archive the draft, sweep expired history, and start over.
    pub fn new_chat<Tz: TimeZone>(&self, now: DateTime<Tz>) {
        let text = self.draft.get_untracked();
        let created_at = now.with_timezone(&Utc);
        self.history.update(|history| {
            history.archive(&text, created_at);
            history.purge_expired(&now);
        });
        self.draft.set(String::new());
    }

    /// Load the archived text at `index` into the draft.
    pub fn select_chat(&self, index: usize) -> bool {
        match self.history.with_untracked(|h| h.get(index).map(|s| s.text.clone())) {
            Some(text) => {
                self.draft.set(text);
                true
            }
            None => {
                log::warn!("chat at position {} is no longer in history", index);
                false
            }
        }
    }

    pub fn load_example(&self, text: String) {
        self.draft.set(text);
    }

    pub fn toggle(&self) {
        self.is_visible.update(|visible| *visible = !*visible);
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let state = ChatState::new();
    let ChatState { is_visible, history, draft } = state;

    #[cfg(feature = "hydrate")]
    create_effect(move |_| schedule_purge(history));

    let entries = Signal::derive(move || history.with(ChatHistory::entries));

    let on_toggle = move |_: ()| state.toggle();

    let char_count = move || {
        format_char_count(draft.with(|d| input_char_count(d)), MAX_INPUT_CHARS)
    };

    let validation_message = move || {
        draft.with(|d| {
            if d.trim().is_empty() {
                None
            } else {
                validate_summary_input(d).err().map(|e| e.to_string())
            }
        })
    };

    view! {
        <div class="app-layout">
            <Sidebar
                on_new_chat=move |_: ()| state.new_chat(Local::now())
                chat_history=entries
                on_select_chat=move |index: usize| {
                    state.select_chat(index);
                }
                on_example_click=move |text: String| state.load_example(text)
                is_visible=is_visible
                on_toggle=on_toggle
            />

            <main class="chat-main">
                <Show when=move || !is_visible.get()>
                    <button
                        class="show-sidebar-btn"
                        title=SHOW_SIDEBAR
                        on:click=move |_| on_toggle(())
                    >
                        <ChevronRightIcon/>
                    </button>
                </Show>

                <div class="composer">
                    <textarea
                        class="composer-input"
                        placeholder="Paste or type the text you want summarized..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                    <div class="composer-footer">
                        <span class="char-count">{char_count}</span>
                        <span class="validation-message">{validation_message}</span>
                    </div>
                </div>
            </main>
        </div>
    }
}

/// Re-arm a timer that sweeps expired history at each daily cutoff.
#[cfg(feature = "hydrate")]
fn schedule_purge(history: RwSignal<ChatHistory>) {
    use crate::utils::time::until_next_cutoff;

    let wait = until_next_cutoff(&Local::now())
        .num_milliseconds()
        .clamp(0, i64::from(u32::MAX)) as u32;

    gloo_timers::callback::Timeout::new(wait, move || {
        history.update(|history| {
            history.purge_expired(&Local::now());
        });
        schedule_purge(history);
    })
    .forget();
}
