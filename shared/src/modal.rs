//! State of the client modal.
//!
//! The modal shows one of three panels at a time: the blank "add" form, the
//! pre-filled "edit" form or the read-only detail panel. Each operation
//! produces a fresh state value; nothing is looked up from the DOM.

use crate::{Client, ClientFields, ClientRoutes};

pub const TITLE_ADD: &str = "Ajouter un Client";
pub const TITLE_EDIT: &str = "Modifier le Client";
pub const TITLE_VIEW: &str = "Détails du Client";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Add,
    Edit { id: i64, fields: ClientFields },
    View(Client),
}

/// Everything a form panel needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub action: String,
    pub submit_label: &'static str,
    pub values: ClientFields,
}

impl ModalState {
    pub fn open_add() -> Self {
        ModalState::Add
    }

    pub fn edit_client(id: i64, fields: ClientFields) -> Self {
        ModalState::Edit { id, fields }
    }

    pub fn view_client(client: Client) -> Self {
        ModalState::View(client)
    }

    pub fn close(&mut self) {
        *self = ModalState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ModalState::Hidden)
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            ModalState::Hidden => None,
            ModalState::Add => Some(TITLE_ADD),
            ModalState::Edit { .. } => Some(TITLE_EDIT),
            ModalState::View(_) => Some(TITLE_VIEW),
        }
    }

    pub fn form(&self, routes: &ClientRoutes) -> Option<FormView> {
        match self {
            ModalState::Add => Some(FormView {
                action: routes.add(),
                submit_label: "Ajouter",
                values: ClientFields::default(),
            }),
            ModalState::Edit { id, fields } => Some(FormView {
                action: routes.edit(*id),
                submit_label: "Enregistrer",
                values: fields.clone(),
            }),
            ModalState::Hidden | ModalState::View(_) => None,
        }
    }

    pub fn viewed_client(&self) -> Option<&Client> {
        match self {
            ModalState::View(client) => Some(client),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client {
            id: 5,
            nom: "Dupont".to_string(),
            prenom: "Jean".to_string(),
            email: "jean@x.com".to_string(),
            telephone: "0600000000".to_string(),
            date_inscription: "12/03/2024".to_string(),
            emprunts: 3,
        }
    }

    #[test]
    fn test_hidden_by_default() {
        let state = ModalState::default();
        assert!(!state.is_visible());
        assert_eq!(state.title(), None);
        assert_eq!(state.form(&ClientRoutes::default()), None);
    }

    #[test]
    fn test_open_add() {
        let state = ModalState::open_add();
        assert!(state.is_visible());
        assert_eq!(state.title(), Some("Ajouter un Client"));

        let form = state.form(&ClientRoutes::default()).unwrap();
        assert_eq!(form.action, "/clients/add/");
        assert_eq!(form.submit_label, "Ajouter");
        assert_eq!(form.values, ClientFields::default());
    }

    #[test]
    fn test_edit_client_keeps_exact_values() {
        let state = ModalState::edit_client(
            5,
            ClientFields::new("Dupont", "Jean", "jean@x.com", "0600000000"),
        );
        assert!(state.is_visible());
        assert_eq!(state.title(), Some("Modifier le Client"));

        let form = state.form(&ClientRoutes::default()).unwrap();
        assert_eq!(form.action, "/clients/edit/5/");
        assert_eq!(form.submit_label, "Enregistrer");
        assert_eq!(form.values.nom, "Dupont");
        assert_eq!(form.values.prenom, "Jean");
        assert_eq!(form.values.email, "jean@x.com");
        assert_eq!(form.values.telephone, "0600000000");
    }

    #[test]
    fn test_edit_does_not_transform_markup() {
        let state = ModalState::edit_client(
            7,
            ClientFields::new("\"><script>x</script>", " Jean ", "a&b@x.com", "+33 6"),
        );
        let form = state.form(&ClientRoutes::default()).unwrap();
        assert_eq!(form.values.nom, "\"><script>x</script>");
        assert_eq!(form.values.prenom, " Jean ");
        assert_eq!(form.values.email, "a&b@x.com");
    }

    #[test]
    fn test_view_client() {
        let state = ModalState::view_client(client());
        assert!(state.is_visible());
        assert_eq!(state.title(), Some("Détails du Client"));
        assert_eq!(state.form(&ClientRoutes::default()), None);
        assert_eq!(state.viewed_client(), Some(&client()));
    }

    #[test]
    fn test_close_from_every_mode() {
        let states = [
            ModalState::Hidden,
            ModalState::open_add(),
            ModalState::edit_client(1, ClientFields::default()),
            ModalState::view_client(client()),
        ];
        for mut state in states {
            state.close();
            assert!(!state.is_visible());
            assert_eq!(state, ModalState::Hidden);
        }
    }

    #[test]
    fn test_reopening_replaces_previous_mode() {
        let mut state = ModalState::view_client(client());
        assert!(state.viewed_client().is_some());
        state = ModalState::open_add();
        assert_eq!(state.viewed_client(), None);
        assert_eq!(state.title(), Some(TITLE_ADD));
    }
}
