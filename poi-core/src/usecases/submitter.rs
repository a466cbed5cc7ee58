use super::prelude::*;

/// Looks up the partner who submitted a place.
///
/// The submitter reference is tried as matricule first and, if it is
/// numeric and nothing was found, as partner id. Lookup failures are
/// logged and treated like an unknown submitter.
pub async fn load_submitter<G>(gateway: &G, source_id: Option<&str>) -> Option<Partner>
where
    G: IdentityGateway,
{
    let source_id = source_id.map(str::trim).filter(|s| !s.is_empty())?;
    match gateway.partner_by_matricule(source_id).await {
        Ok(Some(partner)) => return Some(partner),
        Ok(None) => {
            log::debug!("No partner with matricule {source_id}");
        }
        Err(err) => {
            log::warn!("Unable to look up submitter {source_id}: {err}");
            return None;
        }
    }
    let id = source_id.parse::<i64>().ok()?;
    gateway
        .partner_by_id(id)
        .await
        .map_err(|err| log::warn!("Unable to look up partner {id}: {err}"))
        .ok()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::gateways;

    fn partner(id: i64, matricule: &str) -> Partner {
        Partner {
            id: Some(id),
            name: format!("Partner {id}"),
            matricule: Some(matricule.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn find_by_matricule() {
        let gw = MockIdentityGateway {
            partners: vec![partner(3, "MAT-003")],
            ..Default::default()
        };
        let found = load_submitter(&gw, Some(" MAT-003 ")).await;
        assert_eq!(found.unwrap().id, Some(3));
        assert_eq!(*gw.calls.borrow(), vec!["matricule:MAT-003".to_owned()]);
    }

    #[tokio::test]
    async fn fall_back_to_numeric_id() {
        let gw = MockIdentityGateway {
            partners: vec![partner(12, "MAT-012")],
            ..Default::default()
        };
        let found = load_submitter(&gw, Some("12")).await;
        assert_eq!(found.unwrap().name, "Partner 12");
        assert_eq!(
            *gw.calls.borrow(),
            vec!["matricule:12".to_owned(), "id:12".to_owned()]
        );
    }

    #[tokio::test]
    async fn missing_reference_sends_nothing() {
        let gw = MockIdentityGateway::default();
        assert!(load_submitter(&gw, None).await.is_none());
        assert!(load_submitter(&gw, Some("  ")).await.is_none());
        assert!(gw.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn failures_are_treated_as_unknown() {
        let gw = MockIdentityGateway {
            fail_with: Some(gateways::Error::Fetch("timeout".into())),
            ..Default::default()
        };
        assert!(load_submitter(&gw, Some("12")).await.is_none());
        assert_eq!(gw.calls.borrow().len(), 1);
    }
}
