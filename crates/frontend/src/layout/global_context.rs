use arcus_core::system::navigation::{can_open, default_section, visible_sections, Section, NAVIGATION};
use arcus_core::system::permissions::PermissionSet;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const SECTION_PARAM: &str = "section";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// `None` when the user may open no section at all.
    pub active: RwSignal<Option<Section>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Picks the starting section from `?section=` and keeps the URL in sync
    /// afterwards. A section the user may not open is replaced by the default.
    pub fn init_router_integration(&self, permissions: &PermissionSet) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let requested = parse_section_query(&search);
        let start = resolve_section(requested, permissions);
        if requested.is_some() && requested != start {
            log::warn!("section {:?} from the URL is not accessible, using {:?}", requested, start);
        }
        self.active.set(start);

        let this = *self;
        Effect::new(move |_| {
            let Some(section) = this.active.get() else {
                return;
            };
            let new_url = format!("?{}", section_query(section));

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_section(&self, section: Section) {
        log::debug!("open section '{}'", section.id());
        self.active.set(Some(section));
    }

    /// Re-checks the active section after the permissions changed.
    pub fn ensure_accessible(&self, permissions: &PermissionSet) {
        let current = self.active.get_untracked();
        let resolved = resolve_section(current, permissions);
        if resolved != current {
            self.active.set(resolved);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps `requested` when the user may open it, otherwise falls back to the
/// default section of the visible entries.
pub fn resolve_section(requested: Option<Section>, permissions: &PermissionSet) -> Option<Section> {
    match requested {
        Some(section) if can_open(permissions, section) => Some(section),
        _ => default_section(&visible_sections(permissions, &NAVIGATION)),
    }
}

pub fn parse_section_query(search: &str) -> Option<Section> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(SECTION_PARAM).and_then(|id| Section::from_id(id))
}

pub fn section_query(section: Section) -> String {
    serde_qs::to_string(&HashMap::from([(SECTION_PARAM.to_string(), section.id().to_string())]))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcus_core::system::permissions::Permission::*;

    #[test]
    fn test_parse_section_query() {
        assert_eq!(parse_section_query("?section=reports"), Some(Section::Reports));
        assert_eq!(parse_section_query("section=admin"), Some(Section::Admin));
        assert_eq!(parse_section_query("?section=unknown"), None);
        assert_eq!(parse_section_query(""), None);
    }

    #[test]
    fn test_section_query_round_trip() {
        assert_eq!(section_query(Section::Clients), "section=clients");
        let url = format!("?{}", section_query(Section::Opportunities));
        assert_eq!(parse_section_query(&url), Some(Section::Opportunities));
    }

    #[test]
    fn test_resolve_keeps_accessible_request() {
        let perms = PermissionSet::from([Dashboard, Relatorios]);
        assert_eq!(resolve_section(Some(Section::Reports), &perms), Some(Section::Reports));
    }

    #[test]
    fn test_resolve_replaces_forbidden_request() {
        let perms = PermissionSet::from([Clientes, Dashboard]);
        assert_eq!(resolve_section(Some(Section::Admin), &perms), Some(Section::Dashboard));
        assert_eq!(resolve_section(None, &perms), Some(Section::Dashboard));

        let no_dashboard = PermissionSet::from([Oportunidades]);
        assert_eq!(resolve_section(Some(Section::Admin), &no_dashboard), Some(Section::Opportunities));
    }

    #[test]
    fn test_resolve_without_permissions() {
        assert_eq!(resolve_section(Some(Section::Dashboard), &PermissionSet::new()), None);
    }
}
