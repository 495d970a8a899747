use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::toast::ToastViewport,
    pages::attendance::{repository::SessionStore, AttendancePage},
    state::notifications::NotificationCenter,
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(NotificationCenter::new());
    provide_context(SessionStore::new());
    view! {
        <Title text="勤怠管理"/>
        <Router>
            <Routes>
                <Route path="/" view=AttendancePage/>
                <Route path="/attendance" view=AttendancePage/>
            </Routes>
        </Router>
        <ToastViewport/>
    }
}
