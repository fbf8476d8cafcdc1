//! Toast Component
//!
//! Submission results and storage errors. Each notice clears itself on a timer or on click.

use leptos::*;

use crate::state::global::GlobalState;

/// Notice stack in the bottom-right corner
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50 flex flex-col gap-2" role="status">
            <Notice source=state.success kind=NoticeKind::Saved />
            <Notice source=state.error kind=NoticeKind::Failed />
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeKind {
    Saved,
    Failed,
}

impl NoticeKind {
    fn icon(self) -> &'static str {
        match self {
            NoticeKind::Saved => "✓",
            NoticeKind::Failed => "✕",
        }
    }

    fn class(self) -> String {
        let background = match self {
            NoticeKind::Saved => "bg-green-600",
            NoticeKind::Failed => "bg-red-600",
        };
        format!("flex items-center gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg cursor-pointer", background)
    }
}

/// One message slot; empty slots render nothing
#[component]
fn Notice(source: RwSignal<Option<String>>, kind: NoticeKind) -> impl IntoView {
    move || {
        source.get().map(|message| view! {
            <div class=kind.class() title="Dismiss" on:click=move |_| source.set(None)>
                <span class="text-lg">{kind.icon()}</span>
                <span class="text-sm font-medium">{message}</span>
            </div>
        })
    }
}
