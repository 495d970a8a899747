use crate::config::TeamMember;
use leptos::*;

fn entry_classes(selected: bool) -> &'static str {
    if selected {
        "bg-action-primary-bg/10 text-action-primary-bg hover:bg-action-primary-bg/15"
    } else {
        "text-fg hover:bg-action-ghost-bg-hover"
    }
}

/// Picking an entry switches the page to that member and dismisses the menu.
fn select_and_close(
    member: TeamMember,
    on_user_select: Callback<TeamMember>,
    on_close: Callback<()>,
) {
    on_user_select.call(member);
    on_close.call(());
}

#[component]
pub fn AdminSidebar(
    #[prop(into)] is_admin: Signal<bool>,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] current_user_id: Signal<String>,
    self_user: TeamMember,
    roster: Vec<TeamMember>,
    on_user_select: Callback<TeamMember>,
    on_close: Callback<()>,
) -> impl IntoView {
    let select = move |member: TeamMember| select_and_close(member, on_user_select, on_close);

    let self_entry = store_value(self_user);
    let is_selected = move |id: &str| current_user_id.with(|current| current == id);

    view! {
        <Show when=move || is_admin.get()>
            <Show when=move || is_open.get()>
                <div
                    class="fixed inset-0 z-40 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></div>
            </Show>
            <aside
                class=move || {
                    format!(
                        "fixed left-0 top-0 z-50 h-screen transition-transform duration-300 ease-in-out {}",
                        if is_open.get() { "translate-x-0" } else { "-translate-x-full" },
                    )
                }
                aria-hidden=move || (!is_open.get()).to_string()
            >
                <div class="flex h-full w-64 flex-col border-r border-border bg-surface-elevated shadow-lg">
                    <div class="flex items-center justify-between border-b border-border p-4">
                        <h2 class="flex items-center gap-2 text-sm font-semibold text-fg">
                            <i class="fas fa-users"></i>
                            {"メニュー"}
                        </h2>
                        <button
                            type="button"
                            aria-label="閉じる"
                            class="h-8 w-8 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=move |_| on_close.call(())
                        >
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                    <nav class="flex-1 overflow-y-auto space-y-1 p-2">
                        <button
                            type="button"
                            class=move || {
                                format!(
                                    "flex w-full items-center justify-start gap-2 rounded-md px-3 py-2 text-sm {}",
                                    entry_classes(self_entry.with_value(|me| is_selected(&me.id))),
                                )
                            }
                            on:click=move |_| select(self_entry.get_value())
                        >
                            <i class="fas fa-user"></i>
                            {"勤怠入力（自分の勤怠）"}
                        </button>
                        <div class="pb-2 pt-4">
                            <p class="px-3 text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                {"管理者"}
                            </p>
                        </div>
                        {roster
                            .clone()
                            .into_iter()
                            .map(|member| {
                                let member = store_value(member);
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            format!(
                                                "flex w-full items-center justify-start rounded-md py-2 pl-8 pr-3 text-sm {}",
                                                entry_classes(member.with_value(|m| is_selected(&m.id))),
                                            )
                                        }
                                        on:click=move |_| select(member.get_value())
                                    >
                                        {member.with_value(|m| m.name.clone())}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </aside>
        </Show>
    }
}
