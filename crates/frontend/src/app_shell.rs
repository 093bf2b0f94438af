//! Application shell
//!
//! - `AppShell` - auth gate (shows `LoginPage` or `MainLayout`)
//! - `MainLayout` - sidebar plus the active section

use arcus_core::system::navigation::Section;
use arcus_core::system::permissions::Permission;
use leptos::prelude::*;

use crate::dashboards::d400_overview::ui::DashboardOverview;
use crate::dashboards::d401_reports::ui::ReportsPage;
use crate::domain::a001_clients::ui::list::ClientsList;
use crate::domain::a002_contracts::ui::list::ContractsList;
use crate::domain::a003_opportunities::ui::list::OpportunitiesList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequirePermission;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::AdminPanel;

fn section_view(section: Section) -> AnyView {
    match section {
        Section::Dashboard => view! {
            <RequirePermission permission=Permission::Dashboard>
                <DashboardOverview />
            </RequirePermission>
        }
        .into_any(),
        Section::Clients => view! {
            <RequirePermission permission=Permission::Clientes>
                <ClientsList />
            </RequirePermission>
        }
        .into_any(),
        Section::Contracts => view! {
            <RequirePermission permission=Permission::Contratos>
                <ContractsList />
            </RequirePermission>
        }
        .into_any(),
        Section::Opportunities => view! {
            <RequirePermission permission=Permission::Oportunidades>
                <OpportunitiesList />
            </RequirePermission>
        }
        .into_any(),
        Section::Reports => view! {
            <RequirePermission permission=Permission::Relatorios>
                <ReportsPage />
            </RequirePermission>
        }
        .into_any(),
        Section::Admin => view! {
            <RequirePermission permission=Permission::Admin>
                <AdminPanel />
            </RequirePermission>
        }
        .into_any(),
    }
}

#[component]
fn NoAccessibleSections() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__content">
                <div class="alert alert--warning">
                    "Seu perfil não tem acesso a nenhuma seção. Fale com o administrador."
                </div>
            </div>
        </div>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let permissions = Memo::new(move |_| {
        auth_state
            .get()
            .user
            .map(|u| u.permissions)
            .unwrap_or_default()
    });

    // Runs once when the component is created.
    ctx.init_router_integration(&permissions.get_untracked());

    Effect::new(move |_| {
        ctx.ensure_accessible(&permissions.get());
    });

    view! {
        <Shell>
            {move || match ctx.active.get() {
                Some(section) => section_view(section),
                None => view! { <NoAccessibleSections /> }.into_any(),
            }}
        </Shell>
    }
}

/// Application shell - auth gate component.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
