use crate::pages::attendance::types::EntryMode;
use leptos::*;

#[component]
pub fn EntryModeTabs(
    #[prop(into)] active: Signal<EntryMode>,
    on_select: Callback<EntryMode>,
) -> impl IntoView {
    view! {
        <div
            role="tablist"
            class="mb-6 grid w-full max-w-md grid-cols-2 rounded-lg bg-surface-muted p-1"
        >
            {EntryMode::ALL
                .into_iter()
                .map(|mode| {
                    let selected = move || active.get() == mode;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            id=format!("tab-{}", mode.as_str())
                            aria-controls=format!("panel-{}", mode.as_str())
                            aria-selected=move || selected().to_string()
                            class=move || {
                                if selected() {
                                    "rounded-md px-3 py-1.5 text-sm font-medium bg-surface-elevated text-fg shadow-sm"
                                } else {
                                    "rounded-md px-3 py-1.5 text-sm font-medium text-fg-muted hover:text-fg"
                                }
                            }
                            on:click=move |_| on_select.call(mode)
                        >
                            {mode.tab_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
