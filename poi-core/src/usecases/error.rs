use thiserror::Error;

use crate::gateways;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Veuillez sélectionner une raison de rejet")]
    ReasonRequired,
    #[error("Vous devez être connecté pour effectuer cette action")]
    Unauthenticated,
    #[error("Veuillez entrer votre mot de passe")]
    MissingPassword,
    #[error("Identifiants incorrects. Veuillez réessayer.")]
    Credentials,
    #[error(transparent)]
    Gateway(#[from] gateways::Error),
}
