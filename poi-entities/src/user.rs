use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<UserId> for i64 {
    fn from(from: UserId) -> Self {
        from.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The authenticated moderator.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id               : UserId,
    pub name             : String,
    pub firstname        : String,
    pub lastname         : String,
    pub email            : String,
    pub phone            : String,
    pub matricule        : String,
    pub partner_id       : Option<i64>,
    pub device_unique_id : Option<String>,
}

/// Reference to a backend user as found in audit fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: UserId,
    pub name: String,
}
