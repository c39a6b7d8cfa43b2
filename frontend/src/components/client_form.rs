use library_clients_shared::csrf::CSRF_FIELD_NAME;
use library_clients_shared::FormView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClientFormProps {
    pub form: FormView,
    #[prop_or_default]
    pub csrf_token: Option<AttrValue>,
    pub on_cancel: Callback<()>,
}

/// Add/edit form. Submitting it is a regular browser POST to `form.action`;
/// required-field checks are left to the browser.
#[function_component(ClientForm)]
pub fn client_form(props: &ClientFormProps) -> Html {
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let values = &props.form.values;

    html! {
        <form method="post" action={props.form.action.clone()}>
            if let Some(token) = props.csrf_token.clone() {
                <input type="hidden" name={CSRF_FIELD_NAME} value={token} />
            }
            <FormField label="Nom *" name="nom" input_type="text" value={values.nom.clone()} />
            <FormField label="Prénom *" name="prenom" input_type="text" value={values.prenom.clone()} />
            <FormField label="Email *" name="email" input_type="email" value={values.email.clone()} />
            <FormField label="Téléphone *" name="telephone" input_type="tel" value={values.telephone.clone()} />
            <div class="form-actions">
                <button type="submit" class="btn-primary">{props.form.submit_label}</button>
                <button type="button" class="btn-secondary" onclick={on_cancel}>{"Annuler"}</button>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct FormFieldProps {
    label: AttrValue,
    name: AttrValue,
    input_type: AttrValue,
    value: AttrValue,
}

#[function_component(FormField)]
fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.name.clone()}>{props.label.clone()}</label>
            <input
                id={props.name.clone()}
                type={props.input_type.clone()}
                name={props.name.clone()}
                value={props.value.clone()}
                required=true
            />
        </div>
    }
}
