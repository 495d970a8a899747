use super::row::AttendanceRow;
use crate::components::common::{Button, ButtonVariant};
use crate::pages::attendance::{
    types::{EntryMode, RecordField},
    view_model::AttendanceTableViewModel,
};
use leptos::*;

#[component]
pub fn AttendanceTable(
    mode: EntryMode,
    #[prop(into)] user_id: Signal<String>,
    /// Supplied by callers that build the view model themselves.
    #[prop(optional)]
    view_model: Option<AttendanceTableViewModel>,
) -> impl IntoView {
    let vm = view_model.unwrap_or_else(|| AttendanceTableViewModel::new(mode, user_id));
    let record_ids = vm.record_ids();

    view! {
        <div class="space-y-4" data-mode=mode.as_str()>
            <div class="flex items-center justify-end">
                <Button
                    variant=ButtonVariant::Outline
                    class="px-3 py-1.5"
                    on_click=Callback::new(vm.on_add_row())
                >
                    <i class="fas fa-plus"></i>
                    {"行を追加"}
                </Button>
            </div>

            <div class="overflow-hidden rounded-lg border border-border">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="sticky top-0 z-10 bg-surface-muted/50">
                            <tr>
                                {RecordField::ALL
                                    .into_iter()
                                    .map(|field| {
                                        view! {
                                            <th class="whitespace-nowrap px-3 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg">
                                                {field.column_label()}
                                            </th>
                                        }
                                    })
                                    .collect_view()}
                                <th class="whitespace-nowrap px-3 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg">
                                    {"削除"}
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border bg-surface-elevated">
                            <For
                                each=move || record_ids.get()
                                key=|id| id.clone()
                                children=move |id| view! { <AttendanceRow vm=vm id=id /> }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            <div class="flex justify-end">
                <Button class="min-w-[120px] px-6 py-2.5" on_click=Callback::new(vm.on_save())>
                    <i class="fas fa-save"></i>
                    {"保存"}
                </Button>
            </div>
        </div>
    }
}
