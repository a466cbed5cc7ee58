use super::*;
use poi_entities as e;

fn timestamp(raw: Option<String>) -> Option<e::time::Timestamp> {
    raw.and_then(|s| s.parse().ok())
}

// The backend stores missing coordinates as zero.
fn coordinate(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn user_ref(relation: Option<UserRelation>) -> Option<e::user::UserRef> {
    relation
        .and_then(UserRelation::into_pair)
        .map(|(id, name)| e::user::UserRef {
            id: id.into(),
            name,
        })
}

impl From<Place> for e::place::Place {
    fn from(from: Place) -> Self {
        let Place {
            id,
            kind,
            source,
            source_id,
            name,
            layer,
            centroid_lat,
            centroid_lon,
            bounding_box_min_lat,
            bounding_box_max_lat,
            bounding_box_min_lon,
            bounding_box_max_lon,
            address_name,
            address_number,
            address_street,
            address_neighbourhood,
            address_locality,
            address_county,
            address_region,
            address_country,
            address_plus_code,
            properties_attraction,
            properties_category,
            properties_subcategory,
            properties_wikidata,
            properties_wikipedia,
            properties_description,
            properties_image,
            validation_status,
            status,
            date_added,
            create_date,
            create_uid,
            write_date,
            write_uid,
        } = from;
        let centroid = match (coordinate(centroid_lat), coordinate(centroid_lon)) {
            (Some(lat), Some(lng)) => Some(e::geo::MapPoint::new(lat, lng)),
            _ => None,
        }
        .filter(e::geo::MapPoint::is_valid);
        let bbox = match (
            bounding_box_min_lat,
            bounding_box_min_lon,
            bounding_box_max_lat,
            bounding_box_max_lon,
        ) {
            (Some(min_lat), Some(min_lon), Some(max_lat), Some(max_lon)) => {
                let sw = e::geo::MapPoint::new(min_lat, min_lon);
                let ne = e::geo::MapPoint::new(max_lat, max_lon);
                (sw.is_valid() && ne.is_valid()).then(|| e::geo::MapBbox::new(sw, ne))
            }
            _ => None,
        };
        let status = validation_status
            .or(status)
            .map(e::status::ValidationStatus::from)
            .unwrap_or_else(|| e::status::ValidationStatus::Unknown("unknown".to_owned()));
        Self {
            id: id.into(),
            name: name.unwrap_or_default(),
            kind,
            layer,
            source,
            source_id,
            centroid,
            bbox,
            address: e::place::Address {
                name: address_name,
                number: address_number,
                street: address_street,
                neighbourhood: address_neighbourhood,
                locality: address_locality,
                county: address_county,
                region: address_region,
                country: address_country,
                plus_code: address_plus_code,
            },
            properties: e::place::Properties {
                category: properties_category,
                subcategory: properties_subcategory,
                attraction: properties_attraction,
                wikidata: properties_wikidata,
                wikipedia: properties_wikipedia,
                description: properties_description,
            },
            images: parse_image_list(properties_image.as_deref()),
            status,
            date_added: timestamp(date_added),
            audit: e::place::Audit {
                created_at: timestamp(create_date),
                created_by: user_ref(create_uid),
                updated_at: timestamp(write_date),
                updated_by: user_ref(write_uid),
            },
        }
    }
}

impl From<ValidationHistoryEntry> for e::history::ValidationHistoryEntry {
    fn from(from: ValidationHistoryEntry) -> Self {
        let ValidationHistoryEntry {
            poi_id,
            action,
            rejection_reason,
            performed_by,
            ip_address,
            action_date,
        } = from;
        Self {
            poi_id: poi_id.into(),
            action: action.as_str().into(),
            rejection_reason,
            performed_by: performed_by.into(),
            ip_address,
            action_date: timestamp(action_date),
        }
    }
}

impl From<SyncStatus> for e::sync::SyncReport {
    fn from(from: SyncStatus) -> Self {
        let SyncStatus {
            status,
            last_run_start,
            last_run_end,
            error_message,
        } = from;
        Self {
            status: status
                .as_deref()
                .map(e::sync::SyncStatus::from)
                .unwrap_or_default(),
            last_run_start,
            last_run_end,
            error_message,
        }
    }
}

impl From<Partner> for e::partner::Partner {
    fn from(from: Partner) -> Self {
        let Partner {
            id,
            name,
            email,
            phone,
            mobile,
            matricule,
            user_status,
            function,
        } = from;
        Self {
            id,
            name: name.unwrap_or_default(),
            email,
            phone,
            mobile,
            matricule,
            user_status,
            function,
        }
    }
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User {
            id,
            name,
            firstname,
            lastname,
            email,
            phone,
            matricule,
            partner_id,
            device_unique_id,
        } = from;
        Self {
            id: id.into(),
            name,
            firstname,
            lastname,
            email,
            phone,
            matricule,
            partner_id,
            device_unique_id,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            firstname,
            lastname,
            email,
            phone,
            matricule,
            partner_id,
            device_unique_id,
        } = from;
        Self {
            id: id.into(),
            name,
            firstname,
            lastname,
            email,
            phone,
            matricule,
            partner_id,
            device_unique_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(json: serde_json::Value) -> e::place::Place {
        serde_json::from_value::<Place>(json).unwrap().into()
    }

    #[test]
    fn prefer_validation_status_over_legacy_status() {
        let p = place(serde_json::json!({
            "id": 1,
            "validation_status": "rejected",
            "status": "pending"
        }));
        assert_eq!(p.status, e::status::ValidationStatus::Rejected);

        let p = place(serde_json::json!({ "id": 2, "status": "accepted" }));
        assert_eq!(p.status, e::status::ValidationStatus::Validated);

        let p = place(serde_json::json!({ "id": 3 }));
        assert_eq!(
            p.status,
            e::status::ValidationStatus::Unknown("unknown".to_owned())
        );
    }

    #[test]
    fn zero_coordinates_are_missing() {
        let p = place(serde_json::json!({
            "id": 1,
            "centroid_lat": 0.0,
            "centroid_lon": -4.02
        }));
        assert!(p.centroid.is_none());

        let p = place(serde_json::json!({
            "id": 1,
            "centroid_lat": "5.36",
            "centroid_lon": -4.02
        }));
        assert_eq!(p.centroid, Some(e::geo::MapPoint::new(5.36, -4.02)));
    }

    #[test]
    fn bbox_requires_all_corners() {
        let p = place(serde_json::json!({
            "id": 1,
            "bounding_box_min_lat": 5.0,
            "bounding_box_min_lon": -4.1,
            "bounding_box_max_lat": 5.1
        }));
        assert!(p.bbox.is_none());

        let p = place(serde_json::json!({
            "id": 1,
            "bounding_box_min_lat": 5.0,
            "bounding_box_min_lon": -4.1,
            "bounding_box_max_lat": 5.1,
            "bounding_box_max_lon": -4.0
        }));
        assert!(p.bbox.is_some());
    }

    #[test]
    fn audit_trail_and_images() {
        let p = place(serde_json::json!({
            "id": 9,
            "name": "Maquis du coin",
            "properties_image": "\"[\\\"aGVsbG8=\\\"]\"",
            "date_added": "2024-03-01 10:15:00",
            "create_uid": [5, "Admin"],
            "write_uid": false
        }));
        assert_eq!(p.name, "Maquis du coin");
        assert_eq!(p.images, vec!["aGVsbG8=".to_owned()]);
        assert!(p.date_added.is_some());
        assert_eq!(p.audit.created_by.unwrap().name, "Admin");
        assert!(p.audit.updated_by.is_none());
    }

    #[test]
    fn unparsable_dates_are_dropped() {
        let p = place(serde_json::json!({ "id": 1, "date_added": "yesterday" }));
        assert!(p.date_added.is_none());
    }

    #[test]
    fn sync_report_defaults_to_idle() {
        let report: e::sync::SyncReport = SyncStatus::default().into();
        assert_eq!(report.status, e::sync::SyncStatus::Idle);

        let report: e::sync::SyncReport = SyncStatus {
            status: Some("error".into()),
            error_message: Some("Odoo unreachable".into()),
            ..Default::default()
        }
        .into();
        assert_eq!(report.status, e::sync::SyncStatus::Error);
        assert_eq!(report.error_message.as_deref(), Some("Odoo unreachable"));
    }

    #[test]
    fn history_action_is_classified() {
        let entry: e::history::ValidationHistoryEntry = ValidationHistoryEntry {
            poi_id: 4,
            action: "reject".into(),
            rejection_reason: Some("duplicate".into()),
            performed_by: 7,
            ip_address: None,
            action_date: Some("2024-03-01T10:15:00Z".into()),
        }
        .into();
        assert_eq!(entry.action, e::history::ValidationAction::Reject);
        assert_eq!(entry.performed_by.as_i64(), 7);
        assert!(entry.action_date.is_some());
    }
}
