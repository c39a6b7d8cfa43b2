pub mod clients;

pub use clients::{ClientsPage, ClientsPageProps};
