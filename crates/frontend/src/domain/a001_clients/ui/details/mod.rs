use arcus_core::domain::clients::Client;
use arcus_core::domain::contracts::{Contract, ContractStatus};
use arcus_core::shared::format::{format_brl, format_date_br};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_clients::data::{client_contracts, client_interactions, client_opportunities};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

fn contract_badge_class(status: ContractStatus) -> &'static str {
    match status {
        ContractStatus::Ativo => "badge badge--success",
        ContractStatus::Finalizado => "badge badge--neutral",
        ContractStatus::Suspenso => "badge badge--warning",
    }
}

/// Active contracts and value totals of a client's contract history.
fn financial_summary(contracts: &[Contract]) -> (usize, i64, i64) {
    let active = contracts.iter().filter(|c| c.status == ContractStatus::Ativo).count();
    let total: i64 = contracts.iter().map(|c| c.value).sum();
    let average = if contracts.is_empty() { 0 } else { total / contracts.len() as i64 };
    (active, total, average)
}

#[component]
pub fn ClientDetails(client: Client, on_close: Callback<()>, on_edit: Callback<()>) -> impl IntoView {
    let contracts = client_contracts(&client);
    let (active, total, average) = financial_summary(&contracts);
    let interactions = client_interactions();
    let opportunities = client_opportunities();

    view! {
        <ModalFrame
            title="Detalhes do Cliente".to_string()
            subtitle=client.name.clone()
            on_close=on_close
            modal_class="modal--wide"
        >
            <div class="modal-body">
                <div class="details-grid">
                    <div class="card">
                        <h3 class="card__title">{icon("user")}" Informações de Contato"</h3>
                        <div class="details-row">
                            <span class="details-label">{client.kind.document_label()}</span>
                            <span>{client.document.clone()}</span>
                        </div>
                        <div class="details-row">{icon("mail")}<span>{client.email.clone()}</span></div>
                        <div class="details-row">{icon("phone")}<span>{client.phone.clone()}</span></div>
                        <div class="details-row">{icon("map-pin")}<span>{client.address.clone()}</span></div>
                    </div>

                    <div class="card">
                        <h3 class="card__title">{icon("dollar-sign")}" Resumo Financeiro"</h3>
                        <div class="details-row">
                            <span class="details-label">"Contratos Ativos"</span>
                            <span>{active}</span>
                        </div>
                        <div class="details-row">
                            <span class="details-label">"Valor Total"</span>
                            <span>{format_brl(total)}</span>
                        </div>
                        <div class="details-row">
                            <span class="details-label">"Valor Médio"</span>
                            <span>{format_brl(average)}</span>
                        </div>
                    </div>

                    <div class="card">
                        <h3 class="card__title">{icon("calendar")}" Informações do Cadastro"</h3>
                        <div class="details-row">
                            <span class="details-label">"Setor"</span>
                            <span>{client.sector.clone()}</span>
                        </div>
                        <div class="details-row">
                            <span class="details-label">"Cadastrado por"</span>
                            <span>{client.created_by.clone()}</span>
                        </div>
                        <div class="details-row">
                            <span class="details-label">"Último contato"</span>
                            <span>{format_date_br(&client.last_contact)}</span>
                        </div>
                        <div class="details-row">
                            <span class="details-label">"Status"</span>
                            <span>{client.status.label()}</span>
                        </div>
                    </div>
                </div>

                <h3 class="form__section-title">"Histórico de Contratos"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Número"</TableHeaderCell>
                            <TableHeaderCell>"Serviço"</TableHeaderCell>
                            <TableHeaderCell>"Valor"</TableHeaderCell>
                            <TableHeaderCell>"Vigência"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {contracts.into_iter().map(|c| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{c.number.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{c.service.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_brl(c.value)}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        {format!("{} a {}", format_date_br(&c.start_date), format_date_br(&c.end_date))}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <span class=contract_badge_class(c.status)>{c.status.label()}</span>
                                </TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>

                <h3 class="form__section-title">"Interações Recentes"</h3>
                <div class="timeline">
                    {interactions.into_iter().map(|i| view! {
                        <div class="timeline__item">
                            <div class="timeline__header">
                                <span class="badge badge--outline">{i.kind.clone()}</span>
                                <span class="timeline__date">{format_date_br(&i.date)}</span>
                                <span class="timeline__user">{i.user.clone()}</span>
                            </div>
                            <div class="timeline__title">{i.description.clone()}</div>
                            <div class="timeline__notes">{i.notes.clone()}</div>
                        </div>
                    }).collect_view()}
                </div>

                <h3 class="form__section-title">"Oportunidades em Aberto"</h3>
                <div class="card-grid">
                    {opportunities.into_iter().map(|o| view! {
                        <div class="card">
                            <div class="card__title">{o.title}</div>
                            <div class="details-row">
                                <span class=format!("badge badge--{}", o.stage.tone())>{o.stage.label()}</span>
                                <span>{format!("{}%", o.probability)}</span>
                            </div>
                            <div class="details-row">
                                <span>{format_brl(o.value)}</span>
                                <span>{format!("Previsão: {}", format_date_br(o.expected_date))}</span>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Fechar"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_edit.run(())>
                    {icon("edit")}
                    " Editar Cliente"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcus_core::domain::clients::{ClientStatus, PersonKind};

    #[test]
    fn test_financial_summary_of_history() {
        let client = Client {
            id: 1,
            name: "Empresa ABC Ltda".into(),
            document: "12.345.678/0001-90".into(),
            kind: PersonKind::PJ,
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            sector: "Comercial".into(),
            status: ClientStatus::Ativo,
            contracts: 2,
            total_value: 40000,
            last_contact: "2024-06-15".into(),
            is_base_client: true,
            created_by: "Carlos Silva".into(),
        };
        let (active, total, average) = financial_summary(&client_contracts(&client));
        assert_eq!(active, 1);
        assert_eq!(total, 40000);
        assert_eq!(average, 20000);
        assert_eq!(financial_summary(&[]), (0, 0, 0));
    }
}
