use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
mod images;
mod lenient;

pub use self::images::parse_image_list;

#[cfg(feature = "entity-conversions")]
pub use self::conv::*;

/// A place as delivered by the moderation backend.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(deserialize_with = "required_int")]
    pub id                     : i64,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub kind                   : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source                 : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source_id              : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name                   : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub layer                  : Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub centroid_lat           : Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub centroid_lon           : Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub bounding_box_min_lat   : Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub bounding_box_max_lat   : Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub bounding_box_min_lon   : Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub bounding_box_max_lon   : Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_name           : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_number         : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_street         : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_neighbourhood  : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_locality       : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_county         : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_region         : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_country        : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_plus_code      : Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub properties_attraction  : Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub properties_category    : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub properties_subcategory : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub properties_wikidata    : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub properties_wikipedia   : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub properties_description : Option<String>,
    /// JSON encoded (sometimes twice) list of base64 images.
    #[serde(default, deserialize_with = "lenient::string")]
    pub properties_image       : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub validation_status      : Option<String>,
    /// Legacy name of `validation_status`.
    #[serde(default, deserialize_with = "lenient::string")]
    pub status                 : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub date_added             : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub create_date            : Option<String>,
    #[serde(default)]
    pub create_uid             : Option<UserRelation>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub write_date             : Option<String>,
    #[serde(default)]
    pub write_uid              : Option<UserRelation>,
}

fn required_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    lenient::int(deserializer)?.ok_or_else(|| serde::de::Error::custom("expected a numeric id"))
}

/// Reference to a backend user, in one of the shapes the backend uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRelation {
    Pair(i64, String),
    Objects(Vec<UserRelationObject>),
    Object(UserRelationObject),
    Unset(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRelationObject {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl UserRelation {
    pub fn into_pair(self) -> Option<(i64, String)> {
        match self {
            Self::Pair(id, name) => Some((id, name)),
            Self::Objects(objects) => objects.into_iter().next().map(|o| (o.id, o.name)),
            Self::Object(o) => Some((o.id, o.name)),
            Self::Unset(_) => None,
        }
    }
}

/// Rows of a list payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<T> {
    /// Rows that could be decoded.
    pub items: Vec<T>,
    /// Number of rows the backend sent, including malformed ones.
    pub fetched: usize,
}

impl<T> List<T> {
    pub fn skipped(&self) -> usize {
        self.fetched - self.items.len()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            items: vec![],
            fetched: 0,
        }
    }
}

/// Decodes a list payload that is either a bare JSON array or a
/// `{ "data": [...] }` envelope.
///
/// Elements that do not match `T` are skipped but still counted,
/// any other shape yields an empty list.
pub fn parse_list<T>(value: serde_json::Value) -> List<T>
where
    T: serde::de::DeserializeOwned,
{
    let rows = match value {
        serde_json::Value::Array(rows) => rows,
        serde_json::Value::Object(mut obj) => match obj.remove("data") {
            Some(serde_json::Value::Array(rows)) => rows,
            _ => return List::default(),
        },
        _ => return List::default(),
    };
    let fetched = rows.len();
    let items = rows
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect();
    List { items, fetched }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovePlace {
    pub validated_by: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectPlace {
    pub rejection_reason: String,
    pub validated_by: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStatus {
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_run_start: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_run_end: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub error_message: Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationHistoryEntry {
    #[serde(deserialize_with = "required_int")]
    pub poi_id           : i64,
    pub action           : String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub rejection_reason : Option<String>,
    #[serde(deserialize_with = "required_int")]
    pub performed_by     : i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ip_address       : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub action_date      : Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub db: String,
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// User record as returned by the identity backend on login.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id               : Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub uid              : Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub partner_id       : Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name             : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub firstname        : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub lastname         : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub login            : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email            : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone            : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mobile           : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub matricule        : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source_id        : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub user_id          : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub device_unique_id : Option<String>,
}

impl RawUser {
    /// Maps the loosely typed login record onto a [`User`].
    ///
    /// Returns `None` if the record carries no usable id.
    pub fn normalize(self) -> Option<User> {
        let Self {
            id,
            uid,
            partner_id,
            name,
            firstname,
            lastname,
            login,
            email,
            phone,
            mobile,
            matricule,
            source_id,
            user_id,
            device_unique_id,
        } = self;
        let id = id.or(uid).or(partner_id)?;
        let (first, last) = {
            let full_name = name.as_deref().unwrap_or_default();
            let mut words = full_name.split_whitespace();
            let first = words.next().unwrap_or_default().to_owned();
            let last = words.collect::<Vec<_>>().join(" ");
            (first, last)
        };
        let firstname = firstname.unwrap_or(first);
        let lastname = lastname.unwrap_or(last);
        let name = name.unwrap_or_else(|| format!("{firstname} {lastname}").trim().to_owned());
        let matricule = matricule
            .or(source_id)
            .or(user_id)
            .or_else(|| uid.map(|uid| uid.to_string()))
            .unwrap_or_default();
        Some(User {
            id,
            name,
            firstname,
            lastname,
            email: login.or(email).unwrap_or_default(),
            phone: phone.or(mobile).unwrap_or_default(),
            matricule,
            partner_id,
            device_unique_id,
        })
    }
}

impl LoginResponse {
    pub fn into_user(self) -> Option<User> {
        let data = self.data.filter(serde_json::Value::is_object)?;
        serde_json::from_value::<RawUser>(data).ok()?.normalize()
    }
}

/// Normalized moderator record, also the format of the persisted session.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id               : i64,
    pub name             : String,
    #[serde(default)]
    pub firstname        : String,
    #[serde(default)]
    pub lastname         : String,
    #[serde(default)]
    pub email            : String,
    #[serde(default)]
    pub phone            : String,
    #[serde(default)]
    pub matricule        : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id       : Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_unique_id : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id          : Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name        : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email       : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone       : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mobile      : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub matricule   : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub user_status : Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub function    : Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAddress {
    pub ip: String,
}

/// Error body a backend may send with a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} ({http_status})")]
pub struct Error {
    #[serde(default)]
    pub http_status: u16,
    #[serde(default, alias = "detail", deserialize_with = "lenient::string_or_empty")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_place_with_false_fields() {
        let json = r#"{
            "id": 42,
            "type": "poi",
            "name": "Lycée Moderne",
            "source_id": "MAT-007",
            "address_street": false,
            "centroid_lat": 5.35,
            "centroid_lon": -4.01,
            "validation_status": "pending",
            "create_uid": [2, "Admin"],
            "write_uid": false
        }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.id, 42);
        assert_eq!(place.kind.as_deref(), Some("poi"));
        assert!(place.address_street.is_none());
        assert_eq!(place.centroid_lat, Some(5.35));
        assert_eq!(
            place.create_uid.and_then(UserRelation::into_pair),
            Some((2, "Admin".to_string()))
        );
        assert_eq!(place.write_uid, Some(UserRelation::Unset(false)));
    }

    #[test]
    fn place_without_id_is_rejected() {
        assert!(serde_json::from_str::<Place>(r#"{"name":"x"}"#).is_err());
    }

    #[test]
    fn parse_bare_list_and_envelope() {
        let bare = serde_json::json!([{"id": 1}, {"id": 2}]);
        let envelope = serde_json::json!({"success": true, "data": [{"id": 3}]});
        assert_eq!(parse_list::<Place>(bare).items.len(), 2);
        let places = parse_list::<Place>(envelope);
        assert_eq!(places.fetched, 1);
        assert_eq!(places.items[0].id, 3);
    }

    #[test]
    fn parse_list_skips_malformed_items_and_shapes() {
        let mixed = serde_json::json!([{"id": 1}, {"name": "no id"}, 7]);
        let places = parse_list::<Place>(mixed);
        assert_eq!(places.items.len(), 1);
        assert_eq!(places.skipped(), 2);
        let error = serde_json::json!({"detail": "boom"});
        assert_eq!(parse_list::<Place>(error), List::default());
        assert_eq!(parse_list::<Place>(serde_json::json!("nope")).fetched, 0);
    }

    #[test]
    fn malformed_rows_still_count_as_fetched() {
        let mut rows: Vec<_> = (1..20).map(|id| serde_json::json!({ "id": id })).collect();
        rows.push(serde_json::json!({ "id": null }));
        let places = parse_list::<Place>(serde_json::Value::Array(rows));
        assert_eq!(places.items.len(), 19);
        assert_eq!(places.fetched, 20);
    }

    #[test]
    fn omit_missing_ip_address() {
        let body = serde_json::to_value(ApprovePlace {
            validated_by: 7,
            ip_address: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"validated_by": 7}));
        let body = serde_json::to_value(RejectPlace {
            rejection_reason: "duplicate".into(),
            validated_by: 7,
            ip_address: Some("10.0.0.1".into()),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "rejection_reason": "duplicate",
                "validated_by": 7,
                "ip_address": "10.0.0.1"
            })
        );
    }

    #[test]
    fn normalize_login_record() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"data":{"uid":7,"name":"Awa Kouassi Bamba","login":"awa@example.org","mobile":"0700","partner_id":[12,"Awa"]}}"#,
        )
        .unwrap();
        let user = response.into_user().unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.firstname, "Awa");
        assert_eq!(user.lastname, "Kouassi Bamba");
        assert_eq!(user.name, "Awa Kouassi Bamba");
        assert_eq!(user.email, "awa@example.org");
        assert_eq!(user.phone, "0700");
        assert_eq!(user.matricule, "7");
        assert_eq!(user.partner_id, Some(12));
    }

    #[test]
    fn login_record_without_id_is_refused() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"data":{"name":"Nobody"}}"#).unwrap();
        assert!(response.into_user().is_none());
        let response: LoginResponse = serde_json::from_str(r#"{"data":false}"#).unwrap();
        assert!(response.into_user().is_none());
        let response: LoginResponse = serde_json::from_str(r#"{"error":"denied"}"#).unwrap();
        assert!(response.into_user().is_none());
    }

    #[test]
    fn name_is_composed_from_parts() {
        let user = RawUser {
            id: Some(3),
            firstname: Some("Jean".into()),
            lastname: Some("Koffi".into()),
            matricule: Some("MAT-3".into()),
            ..Default::default()
        }
        .normalize()
        .unwrap();
        assert_eq!(user.name, "Jean Koffi");
        assert_eq!(user.matricule, "MAT-3");
    }

    #[test]
    fn decode_error_detail() {
        let err: Error = serde_json::from_str(r#"{"detail":"Not found"}"#).unwrap();
        assert_eq!(err.message, "Not found");
        assert_eq!(err.http_status, 0);
    }
}
