/// Identity of the person who submitted a place,
/// as known by the ERP backend.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partner {
    pub id          : Option<i64>,
    pub name        : String,
    pub email       : Option<String>,
    pub phone       : Option<String>,
    pub mobile      : Option<String>,
    pub matricule   : Option<String>,
    pub user_status : Option<String>,
    pub function    : Option<String>,
}

impl Partner {
    /// Mobile number if known, landline otherwise.
    pub fn contact_phone(&self) -> Option<&str> {
        self.mobile
            .as_deref()
            .or(self.phone.as_deref())
            .filter(|p| !p.trim().is_empty())
    }

    pub fn user_status_label(&self) -> Option<&str> {
        self.user_status.as_deref().map(|s| match s {
            "approved" => "Approuvé",
            other => other,
        })
    }
}
