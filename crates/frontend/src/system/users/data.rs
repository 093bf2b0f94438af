//! Demo accounts and audit trail of the admin panel.

use arcus_core::system::permissions::{Permission, PermissionSet};
use arcus_core::system::users::{AuditLogEntry, AuditStatus, ManagedUser, UserStatus};

pub fn mock_users() -> Vec<ManagedUser> {
    use Permission::*;
    let user = |id, name: &str, email: &str, role: &str, sector: &str, status, last_login: &str, permissions: &[Permission], created_at: &str| {
        ManagedUser {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            sector: sector.to_string(),
            status,
            last_login: last_login.to_string(),
            permissions: permissions.iter().copied().collect::<PermissionSet>(),
            created_at: created_at.to_string(),
        }
    };

    vec![
        user(
            1,
            "Carlos Silva",
            "gerente@empresa.com",
            "Gerente Comercial",
            "Comercial",
            UserStatus::Ativo,
            "2024-06-18 09:15",
            &[Dashboard, Clientes, Contratos, Oportunidades, Relatorios, Admin],
            "2024-01-15",
        ),
        user(
            2,
            "Ana Santos",
            "analista@empresa.com",
            "Analista Comercial",
            "Comercial",
            UserStatus::Ativo,
            "2024-06-18 08:45",
            &[Dashboard, Clientes, Contratos, Oportunidades],
            "2024-02-01",
        ),
        user(
            3,
            "Pedro Costa",
            "suporte@empresa.com",
            "Analista de Suporte",
            "Suporte",
            UserStatus::Ativo,
            "2024-06-17 16:30",
            &[Dashboard, Clientes],
            "2024-03-10",
        ),
        user(
            4,
            "Maria Oliveira",
            "comercial2@empresa.com",
            "Analista Comercial",
            "Comercial",
            UserStatus::Inativo,
            "2024-06-10 14:20",
            &[Dashboard, Clientes, Oportunidades],
            "2024-01-20",
        ),
    ]
}

pub fn audit_logs() -> Vec<AuditLogEntry> {
    [
        (1, "Carlos Silva", "Login realizado", "Acesso ao sistema via web", "2024-06-18 09:15:23", "192.168.1.100", AuditStatus::Sucesso),
        (2, "Ana Santos", "Cliente criado", "Novo cliente: TechSolutions Corp", "2024-06-18 08:50:15", "192.168.1.105", AuditStatus::Sucesso),
        (3, "Pedro Costa", "Tentativa de acesso negado", "Tentativa de acesso à seção Contratos", "2024-06-17 16:35:45", "192.168.1.110", AuditStatus::Bloqueado),
        (4, "Carlos Silva", "Relatório exportado", "Pipeline de vendas - PDF", "2024-06-17 15:20:30", "192.168.1.100", AuditStatus::Sucesso),
        (5, "Ana Santos", "Oportunidade atualizada", "Expansão de Serviços - ABC Ltda", "2024-06-17 14:10:18", "192.168.1.105", AuditStatus::Sucesso),
    ]
    .into_iter()
    .map(|(id, user, action, details, timestamp, ip, status)| AuditLogEntry {
        id,
        user: user.to_string(),
        action: action.to_string(),
        details: details.to_string(),
        timestamp: timestamp.to_string(),
        ip: ip.to_string(),
        status,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcus_core::shared::search::filter_by_search;
    use arcus_core::system::permissions::permissions_for_role;

    #[test]
    fn test_only_primary_admin_is_protected() {
        let protected: Vec<u32> = mock_users().iter().filter(|u| !u.can_deactivate()).map(|u| u.id).collect();
        assert_eq!(protected, vec![1]);
    }

    #[test]
    fn test_search_by_role() {
        let users = mock_users();
        let analysts = filter_by_search(&users, "analista comercial");
        assert_eq!(analysts.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_active_accounts_match_role_presets() {
        for user in mock_users().iter().filter(|u| u.status == UserStatus::Ativo) {
            assert!(user.permissions.same_as(&permissions_for_role(&user.role)), "{}", user.name);
        }
    }

    #[test]
    fn test_one_blocked_audit_entry() {
        let blocked: Vec<u32> = audit_logs()
            .iter()
            .filter(|l| l.status == AuditStatus::Bloqueado)
            .map(|l| l.id)
            .collect();
        assert_eq!(blocked, vec![3]);
    }
}
