use super::{
    components::{sidebar::AdminSidebar, table::AttendanceTable, tabs::EntryModeTabs},
    layout::AttendanceFrame,
    types::EntryMode,
    view_model::use_attendance_page_view_model,
};
use leptos::*;

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_page_view_model();
    let user_id = vm.current_user_id();
    let heading = vm.heading();
    let is_admin = vm.is_admin();
    let active_mode = vm.active_mode;
    let open_sidebar = Callback::new(vm.on_open_sidebar());
    let close_sidebar = Callback::new(vm.on_close_sidebar());
    let select_user = Callback::new(vm.on_user_select());
    let select_mode = Callback::new(vm.on_select_mode());

    // Both tables stay mounted so switching tabs keeps their rows.
    let panel = move |mode: EntryMode| {
        view! {
            <div
                role="tabpanel"
                id=format!("panel-{}", mode.as_str())
                aria-labelledby=format!("tab-{}", mode.as_str())
                class=move || if active_mode.get() == mode { "" } else { "hidden" }
            >
                <AttendanceTable mode=mode user_id=user_id />
            </div>
        }
    };

    view! {
        <AdminSidebar
            is_admin=is_admin
            is_open=vm.sidebar_open()
            current_user_id=user_id
            self_user=vm.self_user.clone()
            roster=vm.roster.clone()
            on_user_select=select_user
            on_close=close_sidebar
        />
        <AttendanceFrame>
            <header class="mb-6">
                <div class="flex items-center gap-3">
                    <Show when=move || is_admin.get()>
                        <button
                            type="button"
                            aria-label="メニューを開く"
                            class="inline-flex h-10 w-10 shrink-0 items-center justify-center rounded-md border border-border bg-surface-elevated text-fg hover:bg-action-ghost-bg-hover"
                            on:click=move |ev| open_sidebar.call(ev)
                        >
                            <i class="fas fa-bars"></i>
                        </button>
                    </Show>
                    <div>
                        <h1 class="mb-2 text-2xl font-bold text-fg">{move || heading.get()}</h1>
                        <p class="text-sm text-fg-muted">{"月次の勤怠情報を入力してください"}</p>
                    </div>
                </div>
            </header>

            <EntryModeTabs active=active_mode on_select=select_mode />
            {panel(EntryMode::Actual)}
            {panel(EntryMode::Planned)}
        </AttendanceFrame>
    }
}
