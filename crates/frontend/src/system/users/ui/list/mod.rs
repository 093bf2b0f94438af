mod state;

use arcus_core::shared::format::format_date_br;
use arcus_core::shared::search::filter_by_search;
use arcus_core::system::permissions::{Permission, Role};
use arcus_core::system::users::{next_user_id, AuditStatus, ManagedUser, UserStatus};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::toast::use_toaster;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::users::data::{audit_logs, mock_users};
use crate::system::users::ui::form::UserForm;
use state::{create_state, AdminTab};

/// `None` while closed, `Some(None)` for a new account.
type FormState = Option<Option<ManagedUser>>;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    let state = create_state();
    let tab = Signal::derive(move || state.with(|s| s.active_tab));

    view! {
        <PageFrame page_id="sys_admin--panel" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Painel de Administração"</h1>
                    <span class="page__subtitle">"Gerencie usuários, permissões e monitore atividades do sistema"</span>
                </div>
            </div>

            <div class="page__content">
                <div class="tabs">
                    {AdminTab::ALL.into_iter().map(|t| view! {
                        <button
                            class="tabs__item"
                            class:tabs__item--active=move || tab.get() == t
                            on:click=move |_| state.update(|s| s.active_tab = t)
                        >
                            {icon(t.icon())}
                            {format!(" {}", t.label())}
                        </button>
                    }).collect_view()}
                </div>

                {move || match tab.get() {
                    AdminTab::Users => view! { <UsersTab /> }.into_any(),
                    AdminTab::Permissions => view! { <PermissionsTab /> }.into_any(),
                    AdminTab::Audit => view! { <AuditTab /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn UsersTab() -> impl IntoView {
    let toaster = use_toaster();
    let users = RwSignal::new(mock_users());
    let search = RwSignal::new(String::new());
    let form: RwSignal<FormState> = RwSignal::new(None);

    let filtered = Memo::new(move |_| users.with(|all| filter_by_search(all, &search.get())));
    let next_id = Signal::derive(move || users.with(|all| next_user_id(all)));

    let on_saved = Callback::new(move |saved: ManagedUser| {
        users.update(|all| match all.iter_mut().find(|u| u.id == saved.id) {
            Some(existing) => *existing = saved,
            None => all.push(saved),
        });
        form.set(None);
    });
    let on_close = Callback::new(move |_| form.set(None));

    let deactivate = move |user: ManagedUser| {
        if !user.can_deactivate() {
            log::warn!("refusing to deactivate primary administrator {}", user.id);
            return;
        }
        if !confirm("Tem certeza que deseja desativar este usuário?") {
            return;
        }
        users.update(|all| {
            if let Some(u) = all.iter_mut().find(|u| u.id == user.id) {
                u.status = UserStatus::Inativo;
            }
        });
        log::info!("User {} deactivated", user.id);
        toaster.success("Usuário desativado com sucesso!", user.name);
    };

    view! {
        <div class="section-header">
            <div>
                <h2>"Gestão de Usuários"</h2>
                <span class="page__subtitle">{move || format!("{} usuários encontrados", filtered.get().len())}</span>
            </div>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| form.set(Some(None))>
                {icon("plus")}
                " Novo Usuário"
            </Button>
        </div>

        <div class="filter-panel">
            <div class="filter-panel-content">
                <Input value=search placeholder="Buscar por nome, email ou cargo..." />
            </div>
        </div>

        <div class="list-stack">
            <For
                each=move || filtered.get()
                key=|u: &ManagedUser| (u.id, u.name.clone(), u.status, u.permissions.len())
                children=move |user: ManagedUser| {
                    let for_edit = user.clone();
                    let for_deactivate = user.clone();
                    let protected = !user.can_deactivate();
                    let status_class = if user.status == UserStatus::Ativo {
                        "badge badge--primary"
                    } else {
                        "badge badge--neutral"
                    };
                    view! {
                        <div class="card user-card">
                            <div class="user-card__header">
                                <div class="avatar">{user.name.chars().next().map(String::from).unwrap_or_default()}</div>
                                <div>
                                    <h3>{user.name.clone()}</h3>
                                    <p class="text-muted">{user.email.clone()}</p>
                                    <div class="user-card__badges">
                                        <span class=status_class>{user.status.label()}</span>
                                        <span class="badge badge--outline">{user.role.clone()}</span>
                                        <span class="badge badge--outline">{user.sector.clone()}</span>
                                    </div>
                                </div>
                            </div>
                            <div class="user-card__grid">
                                <div>
                                    <span class="details-label">"Último Acesso"</span>
                                    <span>{user.last_login.clone()}</span>
                                </div>
                                <div>
                                    <span class="details-label">"Permissões"</span>
                                    <span>{format!("{} módulos", user.permissions.len())}</span>
                                </div>
                                <div>
                                    <span class="details-label">"Cadastrado em"</span>
                                    <span>{format_date_br(&user.created_at)}</span>
                                </div>
                            </div>
                            <div class="user-card__badges">
                                {user.permissions.iter().map(|p| view! {
                                    <span class="badge badge--outline badge--small">{p.id()}</span>
                                }).collect_view()}
                            </div>
                            <Flex gap=FlexGap::Small>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| form.set(Some(Some(for_edit.clone())))
                                    attr:title="Editar"
                                >
                                    {icon("edit")}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| deactivate(for_deactivate.clone())
                                    disabled=protected
                                    attr:title="Desativar"
                                >
                                    {icon("trash")}
                                </Button>
                            </Flex>
                        </div>
                    }
                }
            />
        </div>

        {move || form.get().map(|user| view! {
            <UserForm user=user next_id=next_id on_saved=on_saved on_close=on_close />
        })}
    }
}

/// Role preset matrix: which modules each role gets by default.
#[component]
fn PermissionsTab() -> impl IntoView {
    view! {
        <div class="section-header">
            <div>
                <h2>"Controle de Permissões"</h2>
                <span class="page__subtitle">"Gerencie permissões e acessos por perfil de usuário"</span>
            </div>
        </div>
        <div class="card-grid">
            {Role::ALL.into_iter().map(|role| {
                let preset = role.preset();
                view! {
                    <div class="card">
                        <h3 class="card__title">{icon("shield")}{format!(" {}", role.name())}</h3>
                        <p class="card__subtitle">{role.summary()}</p>
                        <div class="permission-matrix">
                            {Permission::ALL.into_iter().map(|p| {
                                let class = if preset.contains(p) { "badge badge--primary" } else { "badge badge--neutral" };
                                view! { <span class=class>{p.label()}</span> }
                            }).collect_view()}
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn AuditTab() -> impl IntoView {
    view! {
        <div class="section-header">
            <div>
                <h2>"Auditoria e Logs"</h2>
                <span class="page__subtitle">"Histórico de ações e acessos no sistema"</span>
            </div>
        </div>
        <div class="card">
            <h3 class="card__title">"Atividades Recentes"</h3>
            {audit_logs().into_iter().map(|entry| {
                let status_class = match entry.status {
                    AuditStatus::Sucesso => "badge badge--primary",
                    AuditStatus::Bloqueado => "badge badge--error",
                };
                view! {
                    <div class="audit-entry">
                        <div>
                            <div class="audit-entry__title">
                                {icon("activity")}
                                <span class="text-strong">{entry.action.clone()}</span>
                                <span class=status_class>{entry.status.label()}</span>
                            </div>
                            <p class="text-muted">{entry.details.clone()}</p>
                            <div class="audit-entry__meta">
                                <span>{format!("Usuário: {}", entry.user)}</span>
                                <span>{format!("IP: {}", entry.ip)}</span>
                            </div>
                        </div>
                        <div class="audit-entry__time">
                            {icon("clock")}
                            <span>{entry.timestamp.clone()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
