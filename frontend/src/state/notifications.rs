use leptos::*;

const MAX_VISIBLE: usize = 3;
#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    pub fn notify(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: NotificationVariant,
    ) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let notification = Notification {
            id,
            title: title.into(),
            description: description.into(),
            variant,
        };
        self.items.update(|items| {
            items.push(notification);
            if items.len() > MAX_VISIBLE {
                let overflow = items.len() - MAX_VISIBLE;
                items.drain(..overflow);
            }
        });
        self.schedule_dismiss(id);
        id
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.notify(title, description, NotificationVariant::Default)
    }

    pub fn error(&self, description: impl Into<String>) -> u64 {
        self.notify("エラー", description, NotificationVariant::Destructive)
    }

    pub fn dismiss(&self, id: u64) {
        // The timer may outlive the owning scope.
        let _ = self
            .items
            .try_update(|items| items.retain(|item| item.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let center = *self;
        gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || center.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationCenter {
    match use_context::<NotificationCenter>() {
        Some(center) => center,
        None => {
            let center = NotificationCenter::new();
            provide_context(center);
            center
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn notify_appends_and_dismiss_removes() {
        with_runtime(|| {
            let center = NotificationCenter::new();
            let first = center.success("実績を保存しました", "1件のレコードを保存しました");
            let second = center.error("最低1行は必要です");
            let items = center.items().get();
            assert_eq!(items.len(), 2);
            assert_eq!(items[1].title, "エラー");
            assert_eq!(items[1].variant, NotificationVariant::Destructive);

            center.dismiss(first);
            let items = center.items().get();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, second);
        });
    }

    #[test]
    fn oldest_notifications_are_dropped_past_the_limit() {
        with_runtime(|| {
            let center = NotificationCenter::new();
            let ids: Vec<u64> = (0..5).map(|i| center.success("t", format!("{i}"))).collect();
            let visible: Vec<u64> = center.items().get().iter().map(|n| n.id).collect();
            assert_eq!(visible, ids[2..].to_vec());
        });
    }
}
