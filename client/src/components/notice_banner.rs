//! Dismissible banner for the current `UiState` notice.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        {move || {
            ui.get()
                .notice
                .map(|notice| {
                    view! {
                        <div
                            class="notice"
                            class:notice--error=notice.kind == NoticeKind::Error
                            role="status"
                        >
                            <span>{notice.text}</span>
                            <button class="notice__close" on:click=move |_| ui.update(UiState::dismiss)>
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
