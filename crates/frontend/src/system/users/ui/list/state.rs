use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Users,
    Permissions,
    Audit,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Users, AdminTab::Permissions, AdminTab::Audit];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Users => "Usuários",
            AdminTab::Permissions => "Permissões",
            AdminTab::Audit => "Auditoria",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AdminTab::Users => "users",
            AdminTab::Permissions => "shield",
            AdminTab::Audit => "activity",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AdminPanelState {
    pub active_tab: AdminTab,
}

pub fn create_state() -> RwSignal<AdminPanelState> {
    RwSignal::new(AdminPanelState::default())
}
