use crate::ClientRoutes;

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Sends the browser to another URL.
pub trait Navigate {
    fn navigate(&self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Navigated(String),
}

pub fn delete_prompt(name: &str) -> String {
    format!("Êtes-vous sûr de vouloir supprimer le client \"{}\" ?", name)
}

/// Deletion is a plain navigation to the delete endpoint, issued only once
/// the user has confirmed.
pub fn delete_client<C, N>(
    routes: &ClientRoutes,
    id: i64,
    name: &str,
    confirm: &C,
    navigate: &N,
) -> DeleteOutcome
where
    C: Confirm + ?Sized,
    N: Navigate + ?Sized,
{
    if !confirm.confirm(&delete_prompt(name)) {
        return DeleteOutcome::Cancelled;
    }

    let url = routes.delete(id);
    navigate.navigate(&url);
    DeleteOutcome::Navigated(url)
}
