use crate::config::{AppConfig, TeamMember};
use leptos::*;

/// Whose sheet the page is showing, plus the sidebar flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current_user_id: String,
    pub current_user_name: String,
    pub is_admin: bool,
    pub sidebar_open: bool,
}

impl SessionState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            current_user_id: config.self_user.id.clone(),
            current_user_name: config.self_user.name.clone(),
            is_admin: config.is_admin,
            sidebar_open: false,
        }
    }

    pub fn select_user(&mut self, member: &TeamMember) {
        self.current_user_id = member.id.clone();
        self.current_user_name = member.name.clone();
    }

    pub fn open_sidebar(&mut self) {
        // Only admins get the menu button.
        self.sidebar_open = self.is_admin;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn heading(&self) -> String {
        format!("{}さんの勤怠管理", self.current_user_name)
    }
}

pub fn use_session() -> RwSignal<SessionState> {
    match use_context::<RwSignal<SessionState>>() {
        Some(ctx) => ctx,
        None => {
            let session = create_rw_signal(SessionState::from_config(&crate::config::current()));
            provide_context(session);
            session
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_self_with_closed_sidebar() {
        let state = SessionState::from_config(&AppConfig::default());
        assert_eq!(state.current_user_id, "me");
        assert_eq!(state.heading(), "あなたさんの勤怠管理");
        assert!(state.is_admin);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn select_user_updates_id_and_name_only() {
        let mut state = SessionState::from_config(&AppConfig::default());
        state.open_sidebar();
        state.select_user(&TeamMember::new("tanaka", "田中花子"));
        assert_eq!(state.current_user_id, "tanaka");
        assert_eq!(state.heading(), "田中花子さんの勤怠管理");
        assert!(state.sidebar_open);
        state.close_sidebar();
        assert!(!state.sidebar_open);
    }

    #[test]
    fn non_admin_cannot_open_sidebar() {
        let config = AppConfig {
            is_admin: false,
            ..AppConfig::default()
        };
        let mut state = SessionState::from_config(&config);
        state.open_sidebar();
        assert!(!state.sidebar_open);
    }
}
