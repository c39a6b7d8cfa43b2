// Clients Page - library patron list with add/edit/view/delete actions

use gloo::console;
use library_clients_shared::{
    delete_client, filter_clients, Client, ClientRoutes, ClientStats, DeleteOutcome, ModalState,
};
use yew::prelude::*;

use crate::browser::BrowserWindow;
use crate::components::ClientModal;

#[derive(Properties, PartialEq)]
pub struct ClientsPageProps {
    pub clients: Vec<Client>,
    #[prop_or_default]
    pub routes: ClientRoutes,
    #[prop_or_default]
    pub csrf_token: Option<AttrValue>,
}

#[function_component(ClientsPage)]
pub fn clients_page(props: &ClientsPageProps) -> Html {
    let modal = use_state(ModalState::default);
    let search_query = use_state(String::new);

    let on_search = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search_query.set(input.value());
        })
    };

    let on_add = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(ModalState::open_add()))
    };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            let mut state = (*modal).clone();
            state.close();
            modal.set(state);
        })
    };

    let on_action = {
        let modal = modal.clone();
        let routes = props.routes.clone();
        Callback::from(move |action: RowAction| match action {
            RowAction::View(client) => modal.set(ModalState::view_client(client)),
            RowAction::Edit(client) => {
                modal.set(ModalState::edit_client(client.id, client.fields()))
            }
            RowAction::Delete(client) => {
                let outcome = delete_client(
                    &routes,
                    client.id,
                    &client.full_name(),
                    &BrowserWindow,
                    &BrowserWindow,
                );
                if let DeleteOutcome::Navigated(url) = outcome {
                    console::log!(format!("Deleting client {} via {}", client.id, url));
                }
            }
        })
    };

    let filtered_clients = filter_clients(&props.clients, &search_query);
    let stats = ClientStats::from_clients(&props.clients);

    html! {
        <div class="clients-page">
            <div class="page-header">
                <h1>{"Gestion des Clients"}</h1>
                <button type="button" class="btn-primary" onclick={on_add}>{"+ Ajouter un Client"}</button>
            </div>

            <div class="stats">
                <div class="stat-card">
                    <div class="stat-value">{stats.total}</div>
                    <div class="stat-label">{"Clients"}</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{stats.active_loans}</div>
                    <div class="stat-label">{"Emprunts actifs"}</div>
                </div>
            </div>

            <div class="search-box">
                <input
                    type="search"
                    placeholder="Rechercher un client..."
                    value={(*search_query).clone()}
                    oninput={on_search}
                />
            </div>

            if filtered_clients.is_empty() {
                <div class="empty-state">{"Aucun client trouvé"}</div>
            } else {
                <table class="clients-table">
                    <thead>
                        <tr>
                            <th>{"Nom"}</th>
                            <th>{"Prénom"}</th>
                            <th>{"Email"}</th>
                            <th>{"Téléphone"}</th>
                            <th>{"Emprunts"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for filtered_clients.into_iter().map(|client| {
                            let id = client.id;
                            html! { <ClientRow key={id} {client} on_action={on_action.clone()} /> }
                        })}
                    </tbody>
                </table>
            }

            <ClientModal
                state={(*modal).clone()}
                routes={props.routes.clone()}
                csrf_token={props.csrf_token.clone()}
                on_close={on_close}
            />
        </div>
    }
}

// ===== Client Row Component =====

#[derive(Clone, PartialEq, Debug)]
pub enum RowAction {
    View(Client),
    Edit(Client),
    Delete(Client),
}

#[derive(Properties, PartialEq)]
struct ClientRowProps {
    client: Client,
    on_action: Callback<RowAction>,
}

#[function_component(ClientRow)]
fn client_row(props: &ClientRowProps) -> Html {
    let action = |make: fn(Client) -> RowAction| {
        let client = props.client.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(make(client.clone())))
    };

    let client = &props.client;
    html! {
        <tr>
            <td>{&client.nom}</td>
            <td>{&client.prenom}</td>
            <td>{&client.email}</td>
            <td>{&client.telephone}</td>
            <td>{client.emprunts}</td>
            <td class="actions">
                <button type="button" class="btn-view" onclick={action(RowAction::View)}>{"Voir"}</button>
                <button type="button" class="btn-edit" onclick={action(RowAction::Edit)}>{"Modifier"}</button>
                <button type="button" class="btn-delete" onclick={action(RowAction::Delete)}>{"Supprimer"}</button>
            </td>
        </tr>
    }
}
