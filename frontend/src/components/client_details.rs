use library_clients_shared::Client;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClientDetailsProps {
    pub client: Client,
    pub on_close: Callback<()>,
}

/// Read-only detail panel shown by the "view" action.
#[function_component(ClientDetails)]
pub fn client_details(props: &ClientDetailsProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let client = &props.client;

    html! {
        <>
            <InfoRow icon="👤" label="Nom Complet" value={client.full_name()} />
            <InfoRow icon="📧" label="Email" value={client.email.clone()} />
            <InfoRow icon="📱" label="Téléphone" value={client.telephone.clone()} />
            <InfoRow icon="📅" label="Date d'inscription" value={client.date_inscription.clone()} />
            <InfoRow icon="📚" label="Emprunts actifs" value={client.loans_label()} />
            <div class="form-actions">
                <button type="button" class="btn-secondary" onclick={on_close}>{"Fermer"}</button>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct InfoRowProps {
    icon: AttrValue,
    label: AttrValue,
    value: AttrValue,
}

#[function_component(InfoRow)]
fn info_row(props: &InfoRowProps) -> Html {
    html! {
        <div class="info-row">
            <div class="info-icon">{props.icon.clone()}</div>
            <div class="info-content">
                <div class="info-label">{props.label.clone()}</div>
                <div class="info-value">{props.value.clone()}</div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::components::test_support::{mount_point, settle, texts};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_details_show_exact_values() {
        let root = mount_point();
        let props = ClientDetailsProps {
            client: Client {
                id: 5,
                nom: "Dupont".to_string(),
                prenom: "Jean".to_string(),
                email: "jean@x.com".to_string(),
                telephone: "0600000000".to_string(),
                date_inscription: "12/03/2024".to_string(),
                emprunts: 2,
            },
            on_close: Callback::noop(),
        };
        yew::Renderer::<ClientDetails>::with_root_and_props(root.clone(), props).render();
        settle().await;

        assert_eq!(
            texts(&root, ".info-value"),
            vec!["Dupont Jean", "jean@x.com", "0600000000", "12/03/2024", "2 livre(s)"]
        );
        assert!(root.query_selector("form").unwrap().is_none());
    }
}
