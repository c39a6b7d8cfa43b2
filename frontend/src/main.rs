use gloo::console;
use yew::prelude::*;

mod browser;
mod components;
mod config;
mod error;
mod pages;

use config::PageConfig;
use error::FrontendError;
use pages::{ClientsPage, ClientsPageProps};

fn main() {
    if let Err(e) = run() {
        console::error!(format!("Clients page failed to start: {}", e));
    }
}

fn run() -> Result<(), FrontendError> {
    let document = web_sys::window()
        .ok_or(FrontendError::NoWindow)?
        .document()
        .ok_or(FrontendError::NoDocument)?;

    let config = PageConfig::from_document(&document)?;
    if config.csrf_token.is_none() {
        console::warn!("No CSRF token found; client forms will be rejected by the server");
    }

    // A broken data island should not take the add form down with it
    let clients = config::load_clients(&document).unwrap_or_else(|e| {
        console::error!(format!("{}", e));
        Vec::new()
    });
    console::log!(format!("Loaded {} clients", clients.len()));

    let props = ClientsPageProps {
        clients,
        routes: config.routes,
        csrf_token: config.csrf_token.map(AttrValue::from),
    };
    yew::Renderer::<ClientsPage>::with_root_and_props(config.mount, props).render();
    Ok(())
}
