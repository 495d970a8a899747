use crate::pages::attendance::{
    types::{EntryMode, RecordField, RecordId, PROJECTS},
    utils::{input_hint, project_prompt},
    view_model::AttendanceTableViewModel,
};
use leptos::{ev, *};

const MUTED_HINT: &str = "placeholder:text-fg-muted/40";

#[component]
pub fn AttendanceRow(vm: AttendanceTableViewModel, id: RecordId) -> impl IntoView {
    let mode = vm.mode;
    let id = store_value(id);

    let value = move |field: RecordField| id.with_value(|id| vm.field_value(id, field));
    let placeholder = move |field: RecordField| id.with_value(|id| vm.placeholder(id, field));
    let hint = move |field: RecordField| input_hint(mode, &placeholder(field), field);
    // Planned hints are only emphasised while the field is still empty.
    let hint_active = move |field: RecordField| {
        mode == EntryMode::Actual && value(field).is_empty() && !placeholder(field).is_empty()
    };
    let hint_class = move |field: RecordField| if hint_active(field) { MUTED_HINT } else { "" };
    let on_input = move |field: RecordField| {
        move |ev: ev::Event| {
            id.with_value(|id| vm.update_field(id, field, event_target_value(&ev)));
        }
    };
    let on_delete = move |_: ev::MouseEvent| id.with_value(|id| vm.delete_row(id));

    view! {
        <tr class="transition-colors hover:bg-surface-muted/30">
            <td class="whitespace-nowrap px-3 py-3">
                <input
                    type="date"
                    class="w-40 rounded-md border border-border bg-surface-elevated px-2 py-1 text-sm"
                    prop:value=move || value(RecordField::Date)
                    on:input=on_input(RecordField::Date)
                />
            </td>
            <td class="whitespace-nowrap px-3 py-3">
                <select
                    class=move || {
                        let muted = if hint_active(RecordField::ProjectName) {
                            "text-fg-muted/50"
                        } else {
                            ""
                        };
                        format!(
                            "w-44 rounded-md border border-border bg-surface-elevated px-2 py-1 text-sm {muted}"
                        )
                    }
                    prop:value=move || value(RecordField::ProjectName)
                    on:change=on_input(RecordField::ProjectName)
                >
                    <option value="">
                        {move || project_prompt(&placeholder(RecordField::ProjectName))}
                    </option>
                    {PROJECTS
                        .into_iter()
                        .map(|project| view! { <option value=project>{project}</option> })
                        .collect_view()}
                </select>
            </td>
            <td class="whitespace-nowrap px-3 py-3">
                <input
                    type="time"
                    class=move || format!(
                        "w-32 rounded-md border border-border bg-surface-elevated px-2 py-1 text-sm {}",
                        hint_class(RecordField::StartTime)
                    )
                    placeholder=move || hint(RecordField::StartTime)
                    prop:value=move || value(RecordField::StartTime)
                    on:input=on_input(RecordField::StartTime)
                />
            </td>
            <td class="whitespace-nowrap px-3 py-3">
                <input
                    type="time"
                    class=move || format!(
                        "w-32 rounded-md border border-border bg-surface-elevated px-2 py-1 text-sm {}",
                        hint_class(RecordField::EndTime)
                    )
                    placeholder=move || hint(RecordField::EndTime)
                    prop:value=move || value(RecordField::EndTime)
                    on:input=on_input(RecordField::EndTime)
                />
            </td>
            <td class="whitespace-nowrap px-3 py-3">
                <input
                    type="text"
                    class=move || format!(
                        "w-24 rounded-md border border-border bg-surface-elevated px-2 py-1 text-sm {}",
                        hint_class(RecordField::BreakTime)
                    )
                    placeholder=move || hint(RecordField::BreakTime)
                    prop:value=move || value(RecordField::BreakTime)
                    on:input=on_input(RecordField::BreakTime)
                />
            </td>
            <td class="px-3 py-3">
                <textarea
                    rows="2"
                    class=move || format!(
                        "min-w-[200px] resize-none rounded-md border border-border bg-surface-elevated px-2 py-1 text-sm {}",
                        hint_class(RecordField::WorkContent)
                    )
                    placeholder=move || hint(RecordField::WorkContent)
                    prop:value=move || value(RecordField::WorkContent)
                    on:input=on_input(RecordField::WorkContent)
                ></textarea>
            </td>
            <td class="whitespace-nowrap px-3 py-3">
                <button
                    type="button"
                    aria-label="削除"
                    class="h-8 w-8 rounded-md text-action-danger-bg hover:bg-action-danger-bg/10"
                    on:click=on_delete
                >
                    <i class="fas fa-trash-alt"></i>
                </button>
            </td>
        </tr>
    }
}
