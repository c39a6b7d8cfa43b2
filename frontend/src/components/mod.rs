pub mod client_details;
pub mod client_form;
pub mod modal;

pub use modal::ClientModal;
