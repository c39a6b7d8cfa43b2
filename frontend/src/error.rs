use library_clients_shared::ClientDataError;

#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("Browser window is not available")]
    NoWindow,
    #[error("Document is not available")]
    NoDocument,
    #[error("Mount element #{0} not found")]
    MissingMount(&'static str),
    #[error(transparent)]
    ClientData(#[from] ClientDataError),
}
