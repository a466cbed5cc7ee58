use super::prelude::*;

/// The signed-in moderator, mirrored to persistent storage.
///
/// The record has no expiry: it lives until [`SessionStore::sign_out`].
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    user: Option<User>,
}

impl<S> SessionStore<S>
where
    S: SessionStorage,
{
    /// Picks up a previously persisted session.
    ///
    /// An unreadable record is removed.
    pub fn restore(storage: S) -> Self {
        let user = match storage.load() {
            Ok(user) => user,
            Err(err) => {
                log::warn!("Discarding unreadable session record: {err}");
                storage.clear();
                None
            }
        };
        if let Some(user) = &user {
            log::debug!("Restored session of moderator {}", user.id);
        }
        Self { storage, user }
    }

    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, user: User) {
        if let Err(err) = self.storage.save(&user) {
            log::warn!("Unable to persist session: {err}");
        }
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.storage.clear();
        self.user = None;
    }
}

/// Checks the credentials against the identity backend.
///
/// An empty password is refused before anything is sent.
pub async fn authenticate<G>(gateway: &G, login: &str, password: &str) -> Result<User>
where
    G: IdentityGateway,
{
    if password.is_empty() {
        return Err(Error::MissingPassword);
    }
    match gateway.login(login.trim(), password).await {
        Ok(Some(user)) => {
            log::info!("Moderator {} signed in", user.id);
            Ok(user)
        }
        Ok(None) => {
            log::info!("Login of {login} refused");
            Err(Error::Credentials)
        }
        Err(err) => {
            log::warn!("Login request failed: {err}");
            Err(err.into())
        }
    }
}
