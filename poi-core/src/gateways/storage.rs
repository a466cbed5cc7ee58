use poi_entities::user::User;

use super::Result;

/// Persistence of the single cached session record.
pub trait SessionStorage {
    /// Fails with [`super::Error::Malformed`] if a record exists but
    /// cannot be decoded.
    fn load(&self) -> Result<Option<User>>;
    fn save(&self, user: &User) -> Result<()>;
    fn clear(&self);
}
