use serde::{Deserialize, Serialize};

pub mod csrf;
pub mod delete;
pub mod modal;
pub mod routes;

pub use delete::{delete_client, Confirm, DeleteOutcome, Navigate};
pub use modal::{FormView, ModalState};
pub use routes::ClientRoutes;

#[derive(Debug, thiserror::Error)]
pub enum ClientDataError {
    #[error("Malformed client data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A library patron as rendered by the server. The page only ever holds
/// transient copies of these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    #[serde(default)]
    pub date_inscription: String,
    #[serde(default)]
    pub emprunts: u32,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nom, self.prenom)
    }

    pub fn loans_label(&self) -> String {
        format!("{} livre(s)", self.emprunts)
    }

    pub fn fields(&self) -> ClientFields {
        ClientFields::from(self)
    }
}

/// The editable subset of a client, posted by the add and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFields {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
}

impl ClientFields {
    pub fn new(
        nom: impl Into<String>,
        prenom: impl Into<String>,
        email: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            nom: nom.into(),
            prenom: prenom.into(),
            email: email.into(),
            telephone: telephone.into(),
        }
    }
}

impl From<&Client> for ClientFields {
    fn from(client: &Client) -> Self {
        Self {
            nom: client.nom.clone(),
            prenom: client.prenom.clone(),
            email: client.email.clone(),
            telephone: client.telephone.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientStats {
    pub total: usize,
    pub active_loans: u64,
}

impl ClientStats {
    pub fn from_clients(clients: &[Client]) -> Self {
        Self {
            total: clients.len(),
            active_loans: clients.iter().map(|c| u64::from(c.emprunts)).sum(),
        }
    }
}

/// Parses the JSON array the server embeds in the page.
pub fn parse_client_list(json: &str) -> Result<Vec<Client>, ClientDataError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(json)?)
}

/// Case-insensitive substring match on name, email and phone.
pub fn filter_clients(clients: &[Client], query: &str) -> Vec<Client> {
    let query = query.trim().to_lowercase();
    clients
        .iter()
        .filter(|c| {
            query.is_empty()
                || c.nom.to_lowercase().contains(&query)
                || c.prenom.to_lowercase().contains(&query)
                || c.email.to_lowercase().contains(&query)
                || c.telephone.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
