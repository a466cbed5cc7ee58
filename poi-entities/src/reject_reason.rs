use strum::{AsRefStr, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Closed set of reasons a moderator may give for rejecting a place.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RejectReason {
    Duplicate,
    MissingInfo,
    OutOfScope,
    Inappropriate,
    WrongLocation,
}

impl RejectReason {
    pub fn code(self) -> &'static str {
        self.into()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Duplicate => "Doublon",
            Self::MissingInfo => "Information manquante",
            Self::OutOfScope => "Hors charte",
            Self::Inappropriate => "Contenu inapproprié",
            Self::WrongLocation => "Localisation erronée",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// The reason as it is stored by the backend: the code alone,
    /// or `"<code>: <comment>"` if a non-blank comment was given.
    pub fn encode_with_comment(self, comment: Option<&str>) -> String {
        match comment.map(str::trim).filter(|c| !c.is_empty()) {
            Some(comment) => format!("{}: {comment}", self.code()),
            None => self.code().to_owned(),
        }
    }
}
