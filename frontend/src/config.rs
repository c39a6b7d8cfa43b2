// Page configuration read from the server-rendered host page

use library_clients_shared::{parse_client_list, Client, ClientRoutes};
use web_sys::{Document, Element};

use crate::browser::read_csrf_token;
use crate::error::FrontendError;

pub const MOUNT_ELEMENT_ID: &str = "clients-root";
pub const DATA_ISLAND_ID: &str = "clients-data";
const BASE_ATTRIBUTE: &str = "data-clients-base";

pub struct PageConfig {
    pub mount: Element,
    pub routes: ClientRoutes,
    pub csrf_token: Option<String>,
}

impl PageConfig {
    pub fn from_document(document: &Document) -> Result<Self, FrontendError> {
        let mount = document
            .get_element_by_id(MOUNT_ELEMENT_ID)
            .ok_or(FrontendError::MissingMount(MOUNT_ELEMENT_ID))?;

        let routes = mount
            .get_attribute(BASE_ATTRIBUTE)
            .map(|base| ClientRoutes::new(&base))
            .unwrap_or_default();

        Ok(Self {
            mount,
            routes,
            csrf_token: read_csrf_token(document),
        })
    }
}

/// Clients embedded by the server as a JSON data island. A page without the
/// island simply has no clients to list.
pub fn load_clients(document: &Document) -> Result<Vec<Client>, FrontendError> {
    let Some(island) = document.get_element_by_id(DATA_ISLAND_ID) else {
        return Ok(Vec::new());
    };
    let json = island.text_content().unwrap_or_default();
    Ok(parse_client_list(&json)?)
}
