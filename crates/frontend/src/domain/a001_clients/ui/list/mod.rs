use arcus_core::domain::clients::{Client, ClientStatus, PersonKind};
use arcus_core::shared::format::{format_brl, format_date_br};
use arcus_core::shared::search::filter_by_search;
use leptos::prelude::*;
use thaw::*;

use super::details::ClientDetails;
use super::form::ClientForm;
use crate::domain::a001_clients::data::mock_clients;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_current_user;

fn status_badge_class(status: ClientStatus) -> &'static str {
    match status {
        ClientStatus::Ativo => "badge badge--success",
        ClientStatus::Prospecto => "badge badge--warning",
        ClientStatus::Inativo => "badge badge--neutral",
    }
}

/// Which modal is open over the list.
#[derive(Debug, Clone, PartialEq)]
enum ClientModal {
    New,
    Edit(Client),
    Details(Client),
}

#[component]
pub fn ClientsList() -> impl IntoView {
    let user = use_current_user();
    let (sector, user_name) = user
        .get_untracked()
        .map(|u| (u.sector, u.name))
        .unwrap_or_default();

    let all_clients = RwSignal::new(mock_clients(&sector, &user_name));
    let search = RwSignal::new(String::new());
    let modal: RwSignal<Option<ClientModal>> = RwSignal::new(None);

    let filtered = Memo::new(move |_| all_clients.with(|clients| filter_by_search(clients, &search.get())));

    let on_saved = Callback::new(move |saved: Client| {
        all_clients.update(|clients| match clients.iter_mut().find(|c| c.id == saved.id) {
            Some(existing) => *existing = saved,
            None => clients.push(saved),
        });
        modal.set(None);
    });
    let on_close = Callback::new(move |_| modal.set(None));

    view! {
        <PageFrame page_id="a001_clients--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestão de Clientes"</h1>
                    <Badge>{move || filtered.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| modal.set(Some(ClientModal::New))
                    >
                        {icon("plus")}
                        " Novo Cliente"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            {icon("search")}
                            <div style="flex: 1; max-width: 420px;">
                                <Input
                                    value=search
                                    placeholder="Buscar por nome, documento ou email..."
                                />
                            </div>
                            <span class="filter-panel__counter">
                                {move || format!("{} cliente(s) encontrado(s)", filtered.get().len())}
                            </span>
                        </Flex>
                    </div>
                </div>

                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| view! { <div class="empty-state">"Nenhum cliente encontrado."</div> }
                >
                    <div class="card-grid">
                        <For
                            each=move || filtered.get()
                            key=|c| (c.id, c.name.clone(), c.status.label())
                            children=move |client: Client| {
                                let for_details = client.clone();
                                let for_edit = client.clone();
                                let kind_icon = match client.kind {
                                    PersonKind::PJ => "building",
                                    PersonKind::PF => "user",
                                };
                                view! {
                                    <div class="card client-card">
                                        <div class="client-card__header">
                                            <div class="client-card__icon">{icon(kind_icon)}</div>
                                            <div class="client-card__title">
                                                <h3>{client.name.clone()}</h3>
                                                <span class="client-card__document">
                                                    {format!("{}: {}", client.kind.document_label(), client.document)}
                                                </span>
                                            </div>
                                        </div>
                                        <div class="client-card__badges">
                                            <span class=status_badge_class(client.status)>{client.status.label()}</span>
                                            {client.is_base_client.then(|| view! {
                                                <span class="badge badge--outline">"Cliente da Base"</span>
                                            })}
                                        </div>
                                        <div class="client-card__contacts">
                                            <div>{icon("mail")}<span>{client.email.clone()}</span></div>
                                            <div>{icon("phone")}<span>{client.phone.clone()}</span></div>
                                            <div>{icon("map-pin")}<span>{client.address.clone()}</span></div>
                                        </div>
                                        <div class="client-card__numbers">
                                            <div>
                                                <span class="client-card__number">{client.contracts}</span>
                                                <span class="client-card__caption">"Contratos"</span>
                                            </div>
                                            <div>
                                                <span class="client-card__number">{format_brl(client.total_value)}</span>
                                                <span class="client-card__caption">"Valor Total"</span>
                                            </div>
                                        </div>
                                        <div class="client-card__footer">
                                            <span class="client-card__caption">
                                                {format!("Último contato: {}", format_date_br(&client.last_contact))}
                                            </span>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| modal.set(Some(ClientModal::Details(for_details.clone())))
                                                    attr:title="Visualizar"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| modal.set(Some(ClientModal::Edit(for_edit.clone())))
                                                    attr:title="Editar"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                            </Flex>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>

                {move || modal.get().map(|m| match m {
                    ClientModal::New => view! {
                        <ClientForm client=None on_saved=on_saved on_close=on_close />
                    }.into_any(),
                    ClientModal::Edit(client) => view! {
                        <ClientForm client=Some(client) on_saved=on_saved on_close=on_close />
                    }.into_any(),
                    ClientModal::Details(client) => {
                        let for_edit = client.clone();
                        view! {
                            <ClientDetails
                                client=client
                                on_close=on_close
                                on_edit=Callback::new(move |_| modal.set(Some(ClientModal::Edit(for_edit.clone()))))
                            />
                        }.into_any()
                    }
                })}
            </div>
        </PageFrame>
    }
}
