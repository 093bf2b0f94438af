use serde::{Deserialize, Serialize};

use super::permissions::{Permission, PermissionSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dashboard,
    Clients,
    Contracts,
    Opportunities,
    Reports,
    Admin,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Clients => "clients",
            Section::Contracts => "contracts",
            Section::Opportunities => "opportunities",
            Section::Reports => "reports",
            Section::Admin => "admin",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        NAVIGATION.iter().map(|e| e.section).find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub section: Section,
    pub label: &'static str,
    pub icon: &'static str,
    pub required: Permission,
}

pub const NAVIGATION: [NavigationEntry; 6] = [
    NavigationEntry {
        section: Section::Dashboard,
        label: "Dashboard",
        icon: "layout-dashboard",
        required: Permission::Dashboard,
    },
    NavigationEntry {
        section: Section::Clients,
        label: "Clientes",
        icon: "users",
        required: Permission::Clientes,
    },
    NavigationEntry {
        section: Section::Contracts,
        label: "Contratos",
        icon: "file-text",
        required: Permission::Contratos,
    },
    NavigationEntry {
        section: Section::Opportunities,
        label: "Oportunidades",
        icon: "trending-up",
        required: Permission::Oportunidades,
    },
    NavigationEntry {
        section: Section::Reports,
        label: "Relatórios",
        icon: "bar-chart",
        required: Permission::Relatorios,
    },
    NavigationEntry {
        section: Section::Admin,
        label: "Administração",
        icon: "settings",
        required: Permission::Admin,
    },
];

/// Entries whose required permission is held, in the original order.
pub fn visible_sections(permissions: &PermissionSet, entries: &[NavigationEntry]) -> Vec<NavigationEntry> {
    entries
        .iter()
        .filter(|entry| permissions.contains(entry.required))
        .copied()
        .collect()
}

/// Section to open after login: the dashboard when visible, otherwise the
/// first visible entry. `None` when nothing is visible.
pub fn default_section(visible: &[NavigationEntry]) -> Option<Section> {
    visible
        .iter()
        .find(|e| e.section == Section::Dashboard)
        .or_else(|| visible.first())
        .map(|e| e.section)
}

pub fn can_open(permissions: &PermissionSet, section: Section) -> bool {
    NAVIGATION
        .iter()
        .any(|e| e.section == section && permissions.contains(e.required))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Permission::*;

    fn sections(entries: &[NavigationEntry]) -> Vec<Section> {
        entries.iter().map(|e| e.section).collect()
    }

    #[test]
    fn test_empty_permissions_yield_nothing() {
        let visible = visible_sections(&PermissionSet::new(), &NAVIGATION);
        assert!(visible.is_empty());
        assert_eq!(default_section(&visible), None);
    }

    #[test]
    fn test_order_follows_entries_not_permissions() {
        let forward = PermissionSet::from([Dashboard, Contratos, Admin]);
        let backward = PermissionSet::from([Admin, Contratos, Dashboard]);
        let expected = vec![Section::Dashboard, Section::Contracts, Section::Admin];
        assert_eq!(sections(&visible_sections(&forward, &NAVIGATION)), expected);
        assert_eq!(sections(&visible_sections(&backward, &NAVIGATION)), expected);
    }

    #[test]
    fn test_all_permissions_show_everything() {
        let all: PermissionSet = Permission::ALL.into_iter().collect();
        assert_eq!(visible_sections(&all, &NAVIGATION), NAVIGATION.to_vec());
    }

    #[test]
    fn test_custom_entry_list_is_respected() {
        let entries = [NAVIGATION[4], NAVIGATION[1]];
        let perms = PermissionSet::from([Clientes, Relatorios]);
        assert_eq!(
            sections(&visible_sections(&perms, &entries)),
            vec![Section::Reports, Section::Clients]
        );
    }

    #[test]
    fn test_default_prefers_dashboard() {
        let perms = PermissionSet::from([Clientes, Dashboard]);
        let visible = visible_sections(&perms, &NAVIGATION);
        assert_eq!(default_section(&visible), Some(Section::Dashboard));
    }

    #[test]
    fn test_default_without_dashboard_is_first_visible() {
        let perms = PermissionSet::from([Relatorios, Oportunidades]);
        let visible = visible_sections(&perms, &NAVIGATION);
        assert_eq!(default_section(&visible), Some(Section::Opportunities));
    }

    #[test]
    fn test_can_open() {
        let perms = PermissionSet::from([Clientes]);
        assert!(can_open(&perms, Section::Clients));
        assert!(!can_open(&perms, Section::Admin));
    }

    #[test]
    fn test_section_ids() {
        for entry in NAVIGATION {
            assert_eq!(Section::from_id(entry.section.id()), Some(entry.section));
        }
        assert_eq!(Section::from_id("unknown"), None);
    }
}
