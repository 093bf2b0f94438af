//! Permission vocabulary and role presets.
//!
//! A permission gates exactly one navigation section. Role presets only
//! pre-fill the user form; authorization always reads the permission set that
//! travels with the user.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Dashboard,
    Clientes,
    Contratos,
    Oportunidades,
    Relatorios,
    Admin,
}

impl Permission {
    /// Canonical order, as shown in the permission editor.
    pub const ALL: [Permission; 6] = [
        Permission::Dashboard,
        Permission::Clientes,
        Permission::Contratos,
        Permission::Oportunidades,
        Permission::Relatorios,
        Permission::Admin,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Permission::Dashboard => "dashboard",
            Permission::Clientes => "clientes",
            Permission::Contratos => "contratos",
            Permission::Oportunidades => "oportunidades",
            Permission::Relatorios => "relatorios",
            Permission::Admin => "admin",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Permission::Dashboard => "Dashboard",
            Permission::Clientes => "Clientes",
            Permission::Contratos => "Contratos",
            Permission::Oportunidades => "Oportunidades",
            Permission::Relatorios => "Relatórios",
            Permission::Admin => "Administração",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Permission::Dashboard => "Acesso ao painel principal",
            Permission::Clientes => "Gestão de clientes",
            Permission::Contratos => "Gestão de contratos",
            Permission::Oportunidades => "Pipeline de vendas",
            Permission::Relatorios => "Análises e relatórios",
            Permission::Admin => "Configurações do sistema",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Ordered, duplicate-free set of permissions.
///
/// Insertion order is kept so the UI lists permissions the way they were
/// granted; equality for authorization purposes goes through [`PermissionSet::same_as`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Permission>", into = "Vec<Permission>")]
pub struct PermissionSet(Vec<Permission>);

impl PermissionSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Appends the permission unless it is already present.
    pub fn insert(&mut self, permission: Permission) {
        if !self.contains(permission) {
            self.0.push(permission);
        }
    }

    pub fn remove(&mut self, permission: Permission) {
        self.0.retain(|p| *p != permission);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    /// Set equality, ignoring order.
    pub fn same_as(&self, other: &PermissionSet) -> bool {
        self.len() == other.len() && self.iter().all(|p| other.contains(p))
    }
}

impl From<Vec<Permission>> for PermissionSet {
    fn from(items: Vec<Permission>) -> Self {
        items.into_iter().collect()
    }
}

impl From<PermissionSet> for Vec<Permission> {
    fn from(set: PermissionSet) -> Self {
        set.0
    }
}

impl<const N: usize> From<[Permission; N]> for PermissionSet {
    fn from(items: [Permission; N]) -> Self {
        items.into_iter().collect()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut set = PermissionSet::new();
        for permission in iter {
            set.insert(permission);
        }
        set
    }
}

/// Job roles that carry a permission preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    GerenteComercial,
    AnalistaComercial,
    AnalistaDeSuporte,
    Coordenador,
    Diretor,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::GerenteComercial,
        Role::AnalistaComercial,
        Role::AnalistaDeSuporte,
        Role::Coordenador,
        Role::Diretor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Role::GerenteComercial => "Gerente Comercial",
            Role::AnalistaComercial => "Analista Comercial",
            Role::AnalistaDeSuporte => "Analista de Suporte",
            Role::Coordenador => "Coordenador",
            Role::Diretor => "Diretor",
        }
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    pub fn preset(&self) -> PermissionSet {
        use Permission::*;
        match self {
            Role::GerenteComercial | Role::Diretor => {
                PermissionSet::from([Dashboard, Clientes, Contratos, Oportunidades, Relatorios, Admin])
            }
            Role::AnalistaComercial => PermissionSet::from([Dashboard, Clientes, Contratos, Oportunidades]),
            Role::AnalistaDeSuporte => PermissionSet::from([Dashboard, Clientes]),
            Role::Coordenador => {
                PermissionSet::from([Dashboard, Clientes, Contratos, Oportunidades, Relatorios])
            }
        }
    }

    /// One-line summary shown on the permission matrix.
    pub fn summary(&self) -> &'static str {
        match self {
            Role::GerenteComercial => "Acesso completo ao sistema",
            Role::AnalistaComercial => "Acesso limitado ao comercial",
            Role::AnalistaDeSuporte => "Acesso básico para suporte",
            Role::Coordenador => "Coordenação comercial sem administração",
            Role::Diretor => "Acesso completo ao sistema",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default permissions for a role name. Unknown roles get `{dashboard}`.
pub fn permissions_for_role(role: &str) -> PermissionSet {
    match Role::from_name(role) {
        Some(role) => role.preset(),
        None => PermissionSet::from([Permission::Dashboard]),
    }
}

pub const SECTORS: [&str; 5] = ["Comercial", "Suporte", "Financeiro", "Operações", "RH"];

#[cfg(test)]
mod tests {
    use super::*;
    use Permission::*;

    #[test]
    fn test_known_role_presets() {
        let cases: [(&str, &[Permission]); 5] = [
            ("Gerente Comercial", &[Dashboard, Clientes, Contratos, Oportunidades, Relatorios, Admin]),
            ("Analista Comercial", &[Dashboard, Clientes, Contratos, Oportunidades]),
            ("Analista de Suporte", &[Dashboard, Clientes]),
            ("Coordenador", &[Dashboard, Clientes, Contratos, Oportunidades, Relatorios]),
            ("Diretor", &[Dashboard, Clientes, Contratos, Oportunidades, Relatorios, Admin]),
        ];
        for (role, expected) in cases {
            let expected: PermissionSet = expected.iter().copied().collect();
            assert!(permissions_for_role(role).same_as(&expected), "role {role}");
        }
    }

    #[test]
    fn test_unknown_role_defaults_to_dashboard() {
        for role in ["", "Estagiário", "gerente comercial", "Assistente de Suporte"] {
            let set = permissions_for_role(role);
            assert!(set.same_as(&PermissionSet::from([Dashboard])), "role {role:?}");
        }
    }

    #[test]
    fn test_permission_set_dedupes_and_keeps_order() {
        let mut set = PermissionSet::from(vec![Clientes, Dashboard, Clientes]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Clientes, Dashboard]);
        set.insert(Admin);
        set.insert(Dashboard);
        assert_eq!(set.len(), 3);
        set.remove(Clientes);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Dashboard, Admin]);
    }

    #[test]
    fn test_same_as_ignores_order() {
        let a = PermissionSet::from([Dashboard, Admin]);
        let b = PermissionSet::from([Admin, Dashboard]);
        assert!(a.same_as(&b));
        assert!(!a.same_as(&PermissionSet::from([Admin])));
    }

    #[test]
    fn test_permission_ids_roundtrip_through_json() {
        let set = PermissionSet::from([Dashboard, Relatorios]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["dashboard","relatorios"]"#);
        assert!(serde_json::from_str::<PermissionSet>(r#"["dashboard","vendas"]"#).is_err());
        for p in Permission::ALL {
            assert_eq!(Permission::from_id(p.id()), Some(p));
        }
    }
}
