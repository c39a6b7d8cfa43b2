// Client Modal - one overlay reused for the add, edit and view panels

use library_clients_shared::{ClientRoutes, ModalState};
use yew::prelude::*;

use super::{client_details::ClientDetails, client_form::ClientForm};

#[derive(Properties, PartialEq)]
pub struct ClientModalProps {
    pub state: ModalState,
    pub routes: ClientRoutes,
    #[prop_or_default]
    pub csrf_token: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(ClientModal)]
pub fn client_modal(props: &ClientModalProps) -> Html {
    let visible = props.state.is_visible();

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = if let Some(form) = props.state.form(&props.routes) {
        html! {
            <ClientForm
                {form}
                csrf_token={props.csrf_token.clone()}
                on_cancel={props.on_close.clone()}
            />
        }
    } else if let Some(client) = props.state.viewed_client() {
        html! { <ClientDetails client={client.clone()} on_close={props.on_close.clone()} /> }
    } else {
        Html::default()
    };

    html! {
        <div class={classes!("modal", visible.then_some("show"))}>
            if visible {
                <div class="modal-backdrop" onclick={on_close.clone()}></div>
                <div class="modal-content" role="dialog" aria-modal="true">
                    <div class="modal-header">
                        <h2 class="modal-title">{props.state.title().unwrap_or_default()}</h2>
                        <button type="button" class="modal-close" onclick={on_close}>{"×"}</button>
                    </div>
                    <div class="modal-body">
                        {body}
                    </div>
                </div>
            }
        </div>
    }
}
