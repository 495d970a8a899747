use super::{
    repository::{self, SessionStore},
    types::{AttendanceRecord, EntryMode, RecordField, RecordId, SheetError, YearMonth},
    utils::{placeholder_for, AttendanceSheet, RecordIdGenerator, SamplePlannedData},
};
use crate::config::{self, TeamMember};
use crate::state::{
    notifications::{use_notifications, NotificationCenter},
    session::{use_session, SessionState},
};
use crate::utils::time::today_in_app_tz;
use leptos::{ev::MouseEvent, *};

#[derive(Clone)]
pub struct AttendancePageViewModel {
    pub session: RwSignal<SessionState>,
    pub active_mode: RwSignal<EntryMode>,
    pub self_user: TeamMember,
    pub roster: Vec<TeamMember>,
}

impl AttendancePageViewModel {
    pub fn new() -> Self {
        let config = config::current();
        Self {
            session: use_session(),
            active_mode: create_rw_signal(EntryMode::Actual),
            self_user: config.self_user,
            roster: config.roster,
        }
    }

    pub fn current_user_id(&self) -> Signal<String> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.current_user_id.clone()))
    }

    pub fn heading(&self) -> Signal<String> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.heading()))
    }

    pub fn is_admin(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_admin))
    }

    pub fn sidebar_open(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.sidebar_open))
    }

    pub fn on_open_sidebar(&self) -> impl Fn(MouseEvent) {
        let session = self.session;
        move |_ev| session.update(|s| s.open_sidebar())
    }

    pub fn on_close_sidebar(&self) -> impl Fn(()) {
        let session = self.session;
        move |_| session.update(|s| s.close_sidebar())
    }

    pub fn on_user_select(&self) -> impl Fn(TeamMember) {
        let session = self.session;
        move |member: TeamMember| {
            log::debug!("switching attendance sheet to {}", member.id);
            session.update(|s| s.select_user(&member));
        }
    }

    pub fn on_select_mode(&self) -> impl Fn(EntryMode) {
        let active_mode = self.active_mode;
        move |mode| active_mode.set(mode)
    }
}

pub fn use_attendance_page_view_model() -> AttendancePageViewModel {
    match use_context::<AttendancePageViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendancePageViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

/// State and handlers behind one attendance table. Each table owns its sheet.
#[derive(Clone, Copy)]
pub struct AttendanceTableViewModel {
    pub mode: EntryMode,
    pub user_id: Signal<String>,
    pub sheet: RwSignal<AttendanceSheet>,
    ids: StoredValue<RecordIdGenerator>,
    store: StoredValue<SessionStore>,
    notifications: NotificationCenter,
}

impl AttendanceTableViewModel {
    pub fn new(mode: EntryMode, user_id: Signal<String>) -> Self {
        let store = use_context::<SessionStore>().unwrap_or_default();
        Self::with_dependencies(mode, user_id, use_notifications(), store)
    }

    pub fn with_dependencies(
        mode: EntryMode,
        user_id: Signal<String>,
        notifications: NotificationCenter,
        store: SessionStore,
    ) -> Self {
        Self {
            mode,
            user_id,
            sheet: create_rw_signal(AttendanceSheet::new(today_in_app_tz())),
            ids: store_value(RecordIdGenerator::default()),
            store: store_value(store),
            notifications,
        }
    }

    pub fn record_ids(&self) -> Signal<Vec<RecordId>> {
        let sheet = self.sheet;
        Signal::derive(move || {
            sheet.with(|sheet| sheet.records().iter().map(|r| r.id.clone()).collect())
        })
    }

    pub fn field_value(&self, id: &RecordId, field: RecordField) -> String {
        self.sheet.with(|sheet| {
            sheet
                .get(id)
                .map(|record| record.field(field).to_string())
                .unwrap_or_default()
        })
    }

    pub fn placeholder(&self, id: &RecordId, field: RecordField) -> String {
        placeholder_for(self.mode, &SamplePlannedData, id, field)
    }

    pub fn add_row(&self) {
        let id = self.ids.try_update_value(|ids| ids.next_id());
        let Some(id) = id else {
            return;
        };
        let today = today_in_app_tz();
        self.sheet.update(|sheet| {
            sheet.add_row(id, today);
        });
    }

    pub fn delete_row(&self, id: &RecordId) {
        match self.sheet.try_update(|sheet| sheet.delete_row(id)) {
            Some(Ok(removed)) => log::debug!("deleted {} row {}", self.mode.as_str(), removed.id),
            Some(Err(SheetError::LastRowRequired)) => {
                log::warn!("refused to delete the last {} row", self.mode.as_str());
                self.notifications
                    .error(SheetError::LastRowRequired.to_string());
            }
            Some(Err(err)) => log::warn!("delete ignored: {err}"),
            None => {}
        }
    }

    pub fn update_field(&self, id: &RecordId, field: RecordField, value: String) {
        if let Some(Err(err)) = self
            .sheet
            .try_update(|sheet| sheet.update_field(id, field, value))
        {
            log::warn!("update ignored: {err}");
        }
    }

    pub fn save(&self) {
        let records: Vec<AttendanceRecord> =
            self.sheet.with_untracked(|sheet| sheet.records().to_vec());
        let user_id = self.user_id.get_untracked();
        let month = YearMonth::of(today_in_app_tz());
        let mode = self.mode;
        let result = self
            .store
            .with_value(|store| repository::save_records(store, &user_id, month, mode, &records));
        match result {
            Ok(count) => {
                self.notifications
                    .success(mode.saved_title(), format!("{count}件のレコードを保存しました"));
            }
            Err(err) => {
                log::error!("failed to save {} records: {err}", mode.as_str());
                self.notifications.error(err.to_string());
            }
        }
    }

    pub fn on_add_row(&self) -> impl Fn(MouseEvent) {
        let vm = *self;
        move |_ev| vm.add_row()
    }

    pub fn on_save(&self) -> impl Fn(MouseEvent) {
        let vm = *self;
        move |_ev| vm.save()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::notifications::NotificationVariant;
    use crate::test_support::ssr::with_runtime;

    fn table_vm(
        mode: EntryMode,
        user: RwSignal<String>,
    ) -> (AttendanceTableViewModel, NotificationCenter, SessionStore) {
        let center = NotificationCenter::new();
        let store = SessionStore::new();
        let vm = AttendanceTableViewModel::with_dependencies(
            mode,
            user.into(),
            center,
            store.clone(),
        );
        (vm, center, store)
    }

    #[test]
    fn deleting_only_row_notifies_and_keeps_sheet() {
        with_runtime(|| {
            let user = create_rw_signal("me".to_string());
            let (vm, center, _) = table_vm(EntryMode::Actual, user);
            let before = vm.sheet.get_untracked();

            vm.delete_row(&RecordId::seed());

            assert_eq!(vm.sheet.get_untracked(), before);
            let items = center.items().get_untracked();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].title, "エラー");
            assert_eq!(items[0].description, "最低1行は必要です");
            assert_eq!(items[0].variant, NotificationVariant::Destructive);
        });
    }

    #[test]
    fn add_then_delete_keeps_survivor() {
        with_runtime(|| {
            let user = create_rw_signal("me".to_string());
            let (vm, center, _) = table_vm(EntryMode::Planned, user);
            vm.add_row();
            vm.add_row();
            let ids = vm.record_ids().get_untracked();
            assert_eq!(ids.len(), 3);
            assert_ne!(ids[1], ids[2]);

            vm.delete_row(&ids[0]);
            vm.delete_row(&ids[2]);
            assert_eq!(vm.record_ids().get_untracked(), vec![ids[1].clone()]);
            assert!(center.items().get_untracked().is_empty());
        });
    }

    #[test]
    fn update_field_changes_only_that_field() {
        with_runtime(|| {
            let user = create_rw_signal("me".to_string());
            let (vm, _, _) = table_vm(EntryMode::Actual, user);
            vm.add_row();
            let before = vm.sheet.get_untracked();

            vm.update_field(&RecordId::seed(), RecordField::WorkContent, "要件定義".into());

            let after = vm.sheet.get_untracked();
            assert_eq!(vm.field_value(&RecordId::seed(), RecordField::WorkContent), "要件定義");
            let mut expected = before.records()[0].clone();
            expected.work_content = "要件定義".into();
            assert_eq!(after.records()[0], expected);
            assert_eq!(after.records()[1], before.records()[1]);
        });
    }

    #[test]
    fn save_reports_count_and_mode() {
        with_runtime(|| {
            let user = create_rw_signal("yamada".to_string());
            let (vm, center, store) = table_vm(EntryMode::Planned, user);
            vm.add_row();
            vm.save();

            let items = center.items().get_untracked();
            assert_eq!(items[0].title, "予定を保存しました");
            assert_eq!(items[0].description, "2件のレコードを保存しました");
            let month = YearMonth::of(today_in_app_tz());
            let saved = repository::AttendanceStore::load(&store, "yamada", month, EntryMode::Planned)
                .unwrap();
            assert_eq!(saved.len(), 2);
        });
    }

    #[test]
    fn placeholder_depends_on_mode() {
        with_runtime(|| {
            let user = create_rw_signal("me".to_string());
            let (actual, _, _) = table_vm(EntryMode::Actual, user);
            let (planned, _, _) = table_vm(EntryMode::Planned, user);
            assert_eq!(actual.field_value(&RecordId::seed(), RecordField::ProjectName), "");
            assert_eq!(
                actual.placeholder(&RecordId::seed(), RecordField::ProjectName),
                "プロジェクトA"
            );
            assert_eq!(planned.placeholder(&RecordId::seed(), RecordField::ProjectName), "");
        });
    }

    #[test]
    fn switching_user_does_not_touch_records() {
        with_runtime(|| {
            let user = create_rw_signal("me".to_string());
            let (vm, _, _) = table_vm(EntryMode::Actual, user);
            vm.add_row();
            vm.update_field(&RecordId::seed(), RecordField::BreakTime, "1:00".into());
            let before = vm.sheet.get_untracked();

            user.set("oguri".to_string());

            assert_eq!(vm.user_id.get_untracked(), "oguri");
            assert_eq!(vm.sheet.get_untracked(), before);
        });
    }

    #[test]
    fn page_view_model_selects_user_and_keeps_mode() {
        with_runtime(|| {
            let vm = AttendancePageViewModel::new();
            vm.active_mode.set(EntryMode::Planned);
            vm.session.update(|s| s.open_sidebar());
            (vm.on_user_select())(TeamMember::new("yamada", "山田太郎"));
            (vm.on_close_sidebar())(());

            assert_eq!(vm.current_user_id().get_untracked(), "yamada");
            assert_eq!(vm.heading().get_untracked(), "山田太郎さんの勤怠管理");
            assert!(!vm.sidebar_open().get_untracked());
            assert_eq!(vm.active_mode.get_untracked(), EntryMode::Planned);
        });
    }
}
