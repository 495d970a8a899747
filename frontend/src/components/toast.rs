use crate::state::notifications::{
    use_notifications, Notification, NotificationCenter, NotificationVariant,
};
use leptos::*;

fn variant_classes(variant: NotificationVariant) -> &'static str {
    match variant {
        NotificationVariant::Default => {
            "bg-surface-elevated border-border text-fg"
        }
        NotificationVariant::Destructive => {
            "bg-status-error-bg border-status-error-border text-status-error-text"
        }
    }
}

#[component]
pub fn ToastViewport(#[prop(optional)] center: Option<NotificationCenter>) -> impl IntoView {
    let center = center.unwrap_or_else(use_notifications);
    let items = center.items();

    view! {
        <ol class="fixed bottom-0 right-0 z-[100] flex max-h-screen w-full flex-col gap-2 p-4 md:max-w-[420px]">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item: Notification| {
                    let id = item.id;
                    view! {
                        <li
                            class=format!(
                                "relative flex w-full items-start justify-between gap-3 rounded-md border p-4 shadow-lg {}",
                                variant_classes(item.variant)
                            )
                            role="status"
                        >
                            <div class="grid gap-1">
                                <p class="text-sm font-semibold">{item.title}</p>
                                <p class="text-sm opacity-90">{item.description}</p>
                            </div>
                            <button
                                type="button"
                                aria-label="閉じる"
                                class="opacity-70 hover:opacity-100"
                                on:click=move |_| center.dismiss(id)
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_queued_notifications() {
        let html = render_to_string(move || {
            let center = NotificationCenter::new();
            center.error("最低1行は必要です");
            center.success("実績を保存しました", "1件のレコードを保存しました");
            view! { <ToastViewport center=center /> }
        });
        assert!(html.contains("最低1行は必要です"));
        assert!(html.contains("実績を保存しました"));
        assert!(html.contains("bg-status-error-bg"));
    }

    #[test]
    fn variant_classes_differ() {
        assert_ne!(
            variant_classes(NotificationVariant::Default),
            variant_classes(NotificationVariant::Destructive)
        );
    }
}
