/// Sidebar component
///
/// Left sidebar with the summarizer header, a "New chat" action, the list of
/// previous summaries, and the built-in example prompts. Owns no state: every
/// interaction is reported to the host through a callback.

use leptos::*;

use crate::components::icons::*;
use crate::example_prompts::EXAMPLES;
use crate::types::{ChatHistoryEntry, ChatKey};
use crate::utils::time::retention_caption;

pub const HIDE_SIDEBAR: &str = "Hide Sidebar";
pub const SHOW_SIDEBAR: &str = "Show Sidebar";
pub const EMPTY_HISTORY: &str = "No summaries yet. Create your first summary!";

pub fn toggle_title(is_visible: bool) -> &'static str {
    if is_visible {
        HIDE_SIDEBAR
    } else {
        SHOW_SIDEBAR
    }
}

pub fn sidebar_class(is_visible: bool) -> &'static str {
    if is_visible {
        "sidebar"
    } else {
        "sidebar hidden"
    }
}

/// A user activation inside the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    NewChat,
    /// Zero-based position of the activated history row.
    SelectChat(usize),
    ExampleClick(&'static str),
    Toggle,
}

/// Host callbacks, one per kind of activation.
#[derive(Clone, Copy)]
pub struct SidebarHandlers {
    pub on_new_chat: Callback<()>,
    pub on_select_chat: Callback<usize>,
    pub on_example_click: Callback<String>,
    pub on_toggle: Callback<()>,
}

impl SidebarHandlers {
    /// Invoke the callback matching `event`, exactly once.
    pub fn dispatch(&self, event: SidebarEvent) {
        log::debug!("sidebar event: {:?}", event);
        match event {
            SidebarEvent::NewChat => self.on_new_chat.call(()),
            SidebarEvent::SelectChat(index) => self.on_select_chat.call(index),
            SidebarEvent::ExampleClick(text) => self.on_example_click.call(text.to_string()),
            SidebarEvent::Toggle => self.on_toggle.call(()),
        }
    }
}

/// A history entry as laid out in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub index: usize,
    pub key: ChatKey,
    pub title: String,
}

pub fn history_rows(entries: &[ChatHistoryEntry]) -> Vec<HistoryRow> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| HistoryRow {
            index,
            key: entry.key(index),
            title: entry.title.clone(),
        })
        .collect()
}

#[component]
pub fn Sidebar(
    #[prop(into)]
    on_new_chat: Callback<()>,
    /// Previous sessions in display order.
    #[prop(into, optional)]
    chat_history: MaybeSignal<Vec<ChatHistoryEntry>>,
    /// Receives the position of the activated entry, not its id.
    #[prop(into)]
    on_select_chat: Callback<usize>,
    /// Receives the full text of the activated example.
    #[prop(into)]
    on_example_click: Callback<String>,
    #[prop(into)]
    is_visible: MaybeSignal<bool>,
    #[prop(into)]
    on_toggle: Callback<()>,
) -> impl IntoView {
    let handlers = SidebarHandlers {
        on_new_chat,
        on_select_chat,
        on_example_click,
        on_toggle,
    };

    let chat_history = Signal::derive(move || chat_history.get());
    let is_visible = Signal::derive(move || is_visible.get());

    let has_history = move || chat_history.with(|entries| !entries.is_empty());
    let rows = move || chat_history.with(|entries| history_rows(entries));

    view! {
        <aside class=move || sidebar_class(is_visible.get())>
            <div class="sidebar-header">
                <div class="user-info">
                    <div class="user-avatar">"AI"</div>
                    <span class="user-name">"Summarizer"</span>
                </div>
                <button
                    class="toggle-sidebar-btn"
                    title=move || toggle_title(is_visible.get())
                    aria-label=move || toggle_title(is_visible.get())
                    on:click=move |_| handlers.dispatch(SidebarEvent::Toggle)
                >
                    <ChevronLeftIcon/>
                </button>
            </div>

            <div class="sidebar-content">
                <button
                    class="new-chat-btn"
                    on:click=move |_| handlers.dispatch(SidebarEvent::NewChat)
                >
                    <PlusIcon/>
                    "New chat"
                </button>

                <div class="history-info">
                    <ClockIcon/>
                    <span>{retention_caption()}</span>
                </div>

                <div class="history-section">
                    <h3 class="section-title">"Your Summaries"</h3>
                    <div class="chat-list">
                        <Show
                            when=has_history
                            fallback=|| view! {
                                <div class="empty-history">
                                    <p>{EMPTY_HISTORY}</p>
                                </div>
                            }
                        >
                            // Keyed on position too, so a reordered list never
                            // reuses a row holding a stale index.
                            <For
                                each=rows
                                key=|row| (row.index, row.key.clone())
                                children=move |row| view! { <HistoryItem row=row handlers=handlers/> }
                            />
                        </Show>
                    </div>
                </div>

                <div class="examples-section">
                    <h3 class="section-title">"Examples"</h3>
                    <div class="example-list">
                        {EXAMPLES
                            .iter()
                            .map(|example| view! {
                                <button
                                    class="example-item"
                                    on:click=move |_| handlers.dispatch(SidebarEvent::ExampleClick(example.text))
                                >
                                    <ClipboardIcon/>
                                    <span class="example-title">{example.title}</span>
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="sidebar-footer"></div>
        </aside>
    }
}

#[component]
fn HistoryItem(row: HistoryRow, handlers: SidebarHandlers) -> impl IntoView {
    let index = row.index;

    view! {
        <button
            class="chat-item"
            on:click=move |_| handlers.dispatch(SidebarEvent::SelectChat(index))
        >
            <DocumentIcon/>
            <span class="chat-title">{row.title}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        NewChat,
        SelectChat(usize),
        Example(String),
        Toggle,
    }

    fn recording_handlers(calls: Rc<RefCell<Vec<Call>>>) -> SidebarHandlers {
        let new_chat = calls.clone();
        let select = calls.clone();
        let example = calls.clone();
        let toggle = calls;

        SidebarHandlers {
            on_new_chat: Callback::new(move |_: ()| new_chat.borrow_mut().push(Call::NewChat)),
            on_select_chat: Callback::new(move |i: usize| select.borrow_mut().push(Call::SelectChat(i))),
            on_example_click: Callback::new(move |text: String| example.borrow_mut().push(Call::Example(text))),
            on_toggle: Callback::new(move |_: ()| toggle.borrow_mut().push(Call::Toggle)),
        }
    }

    #[test]
    fn test_toggle_title() {
        assert_eq!(toggle_title(true), "Hide Sidebar");
        assert_eq!(toggle_title(false), "Show Sidebar");
    }

    #[test]
    fn test_sidebar_class() {
        assert_eq!(sidebar_class(true), "sidebar");
        assert_eq!(sidebar_class(false), "sidebar hidden");
    }

    #[test]
    fn test_history_rows_keep_input_order() {
        let entries = vec![
            ChatHistoryEntry::new("First").with_id("a"),
            ChatHistoryEntry::new("Second"),
            ChatHistoryEntry::new("Third").with_id("c"),
        ];
        let rows = history_rows(&entries);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows.iter().map(|r| r.index).collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(rows[0].key, ChatKey::Id("a".to_string()));
        assert_eq!(rows[1].key, ChatKey::Position(1));
        assert_eq!(rows[2].title, "Third");
    }

    #[test]
    fn test_history_rows_empty() {
        assert!(history_rows(&[]).is_empty());
    }

    #[test]
    fn test_selecting_weather_report_reports_position_zero() {
        let runtime = create_runtime();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let handlers = recording_handlers(calls.clone());

        let rows = history_rows(&[ChatHistoryEntry::new("Weather Report")]);
        handlers.dispatch(SidebarEvent::SelectChat(rows[0].index));

        assert_eq!(*calls.borrow(), vec![Call::SelectChat(0)]);
        runtime.dispose();
    }

    #[test]
    fn test_each_activation_fires_once() {
        let runtime = create_runtime();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let handlers = recording_handlers(calls.clone());

        handlers.dispatch(SidebarEvent::NewChat);
        handlers.dispatch(SidebarEvent::NewChat);
        handlers.dispatch(SidebarEvent::Toggle);
        handlers.dispatch(SidebarEvent::SelectChat(2));

        assert_eq!(
            *calls.borrow(),
            vec![Call::NewChat, Call::NewChat, Call::Toggle, Call::SelectChat(2)]
        );
        runtime.dispose();
    }

    #[test]
    fn test_example_click_passes_text_verbatim() {
        let runtime = create_runtime();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let handlers = recording_handlers(calls.clone());

        for example in &EXAMPLES {
            handlers.dispatch(SidebarEvent::ExampleClick(example.text));
        }

        let expected: Vec<_> = EXAMPLES
            .iter()
            .map(|e| Call::Example(e.text.to_string()))
            .collect();
        assert_eq!(*calls.borrow(), expected);
        runtime.dispose();
    }
}

/// Class tokens of the rendered `<aside>`, independent of attribute spacing.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn aside_classes(html: &str) -> Vec<String> {
    let start = html.find("<aside").expect("no <aside> in markup");
    let tag = &html[start..start + html[start..].find('>').expect("unclosed <aside>")];
    let class_at = tag.find("class=\"").expect("<aside> has no class") + "class=\"".len();
    let value = &tag[class_at..class_at + tag[class_at..].find('"').expect("unterminated class")];
    value.split_whitespace().map(str::to_string).collect()
}
