use super::prelude::*;
use crate::review_wizard::PendingDecision;

/// Result of submitting a moderation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionOutcome {
    Completed,
    /// A precondition failed and nothing was sent.
    Refused(Error),
    /// The backend did not accept the decision.
    Failed(Error),
}

impl DecisionOutcome {
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

enum Decision {
    Approve,
    Reject { rejection_reason: String },
}

impl Decision {
    const fn success_message(&self) -> &'static str {
        match self {
            Self::Approve => "Lieu validé avec succès",
            Self::Reject { .. } => "Lieu rejeté",
        }
    }

    const fn failure_message(&self) -> &'static str {
        match self {
            Self::Approve => "Erreur lors de la validation du lieu",
            Self::Reject { .. } => "Erreur lors du rejet du lieu",
        }
    }
}

fn check_preconditions(
    moderator: Option<&User>,
    decision: PendingDecision,
) -> Result<(UserId, Decision)> {
    let decision = match decision {
        PendingDecision::Approve => Decision::Approve,
        PendingDecision::Reject { reason, comment } => {
            let reason = reason.ok_or(Error::ReasonRequired)?;
            Decision::Reject {
                rejection_reason: reason.encode_with_comment(Some(&comment)),
            }
        }
    };
    let validated_by = moderator
        .map(|user| user.id)
        .filter(|id| id.as_i64() != 0)
        .ok_or(Error::Unauthenticated)?;
    Ok((validated_by, decision))
}

/// Sends an approve or reject decision for a place.
///
/// Exactly one notification is emitted, whatever the outcome.
/// No request is sent if the reject reason or the moderator is missing.
pub async fn submit_decision<G, N>(
    gateway: &G,
    notify: &N,
    moderator: Option<&User>,
    ip_address: Option<&str>,
    place_id: PlaceId,
    decision: PendingDecision,
) -> DecisionOutcome
where
    G: PlaceGateway,
    N: NotificationGateway,
{
    let (validated_by, decision) = match check_preconditions(moderator, decision) {
        Ok(checked) => checked,
        Err(err) => {
            log::debug!("Refused decision on place {place_id}: {err}");
            notify.notify(Notification::error(err.to_string()));
            return DecisionOutcome::Refused(err);
        }
    };
    let result = match &decision {
        Decision::Approve => {
            gateway
                .approve_place(place_id, validated_by, ip_address)
                .await
        }
        Decision::Reject { rejection_reason } => {
            gateway
                .reject_place(place_id, rejection_reason, validated_by, ip_address)
                .await
        }
    };
    match result {
        Ok(()) => {
            log::info!("Moderator {validated_by} decided on place {place_id}");
            notify.notify(Notification::success(decision.success_message()));
            DecisionOutcome::Completed
        }
        Err(err) => {
            log::warn!("Decision on place {place_id} failed: {err}");
            notify.notify(
                Notification::error(decision.failure_message()).with_description(err.to_string()),
            );
            DecisionOutcome::Failed(err.into())
        }
    }
}

/// Public IP address of the moderator, `None` if it cannot be determined.
pub async fn resolve_ip_address<L>(lookup: &L) -> Option<String>
where
    L: IpLookup,
{
    match lookup.public_ip().await {
        Ok(ip) if !ip.trim().is_empty() => Some(ip.trim().to_owned()),
        Ok(_) => {
            log::warn!("IP lookup returned an empty address");
            None
        }
        Err(err) => {
            log::warn!("Unable to resolve IP address: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::{
        gateways::{self, NotificationKind},
        review_wizard::{DecisionState, ReviewWizard},
    };
    use poi_entities::{builders::*, reject_reason::RejectReason};

    const IP: &str = "198.51.100.7";

    fn reject(reason: Option<RejectReason>, comment: &str) -> PendingDecision {
        PendingDecision::Reject {
            reason,
            comment: comment.into(),
        }
    }

    #[tokio::test]
    async fn reject_without_reason_sends_nothing() {
        let gw = MockPlaceGateway::default();
        let notify = MockNotify::default();
        for moderator in [Some(moderator(7)), None] {
            let outcome = submit_decision(
                &gw,
                &notify,
                moderator.as_ref(),
                Some(IP),
                PlaceId::new(42),
                reject(None, "whatever"),
            )
            .await;
            assert_eq!(outcome, DecisionOutcome::Refused(Error::ReasonRequired));
        }
        assert!(gw.calls.borrow().is_empty());
        assert_eq!(notify.kinds(), vec![NotificationKind::Error; 2]);
    }

    #[tokio::test]
    async fn no_session_sends_nothing() {
        let gw = MockPlaceGateway::default();
        let notify = MockNotify::default();
        for decision in [
            PendingDecision::Approve,
            reject(Some(RejectReason::OutOfScope), ""),
        ] {
            let outcome =
                submit_decision(&gw, &notify, None, Some(IP), PlaceId::new(42), decision).await;
            assert_eq!(outcome, DecisionOutcome::Refused(Error::Unauthenticated));
        }
        let anonymous = moderator(0);
        let outcome = submit_decision(
            &gw,
            &notify,
            Some(&anonymous),
            None,
            PlaceId::new(42),
            PendingDecision::Approve,
        )
        .await;
        assert_eq!(outcome, DecisionOutcome::Refused(Error::Unauthenticated));
        assert!(gw.calls.borrow().is_empty());
        assert_eq!(notify.notifications.borrow().len(), 3);
    }

    #[tokio::test]
    async fn approve_pending_place() {
        let place = Place::build().id(42).finish();
        let gw = MockPlaceGateway::default();
        let notify = MockNotify::default();
        let user = moderator(7);

        let mut wizard = ReviewWizard::new();
        wizard.open(&place);
        wizard.go_to(7);
        assert!(wizard.confirm_approve());
        let (place_id, decision) = wizard.begin_submission().unwrap();
        let outcome = submit_decision(&gw, &notify, Some(&user), Some(IP), place_id, decision).await;
        wizard.finish_submission(&outcome);

        assert_eq!(
            *gw.calls.borrow(),
            vec![PlaceCall::Approve {
                id: PlaceId::new(42),
                validated_by: UserId::new(7),
                ip_address: Some(IP.into()),
            }]
        );
        assert_eq!(notify.kinds(), vec![NotificationKind::Success]);
        assert!(!wizard.is_open());
    }

    #[tokio::test]
    async fn reject_with_concatenated_reason() {
        let place = Place::build().id(42).finish();
        let gw = MockPlaceGateway::default();
        let notify = MockNotify::default();
        let user = moderator(7);

        let mut wizard = ReviewWizard::new();
        wizard.open(&place);
        wizard.go_to(7);
        wizard.confirm_reject();
        wizard.select_reason(Some(RejectReason::Duplicate));
        wizard.set_comment("same as #41".into());
        let (place_id, decision) = wizard.begin_submission().unwrap();
        let outcome = submit_decision(&gw, &notify, Some(&user), Some(IP), place_id, decision).await;
        wizard.finish_submission(&outcome);

        assert_eq!(
            *gw.calls.borrow(),
            vec![PlaceCall::Reject {
                id: PlaceId::new(42),
                rejection_reason: "duplicate: same as #41".into(),
                validated_by: UserId::new(7),
                ip_address: Some(IP.into()),
            }]
        );
        assert_eq!(notify.kinds(), vec![NotificationKind::Success]);
        assert!(!wizard.is_open());
    }

    #[tokio::test]
    async fn reject_without_comment_sends_the_code() {
        let gw = MockPlaceGateway::default();
        let notify = MockNotify::default();
        let user = moderator(7);
        submit_decision(
            &gw,
            &notify,
            Some(&user),
            None,
            PlaceId::new(3),
            reject(Some(RejectReason::WrongLocation), "  "),
        )
        .await;
        assert_eq!(
            *gw.calls.borrow(),
            vec![PlaceCall::Reject {
                id: PlaceId::new(3),
                rejection_reason: "wrong_location".into(),
                validated_by: UserId::new(7),
                ip_address: None,
            }]
        );
    }

    #[tokio::test]
    async fn backend_failure_leaves_the_wizard_untouched() {
        let place = Place::build().id(42).finish();
        let gw = MockPlaceGateway {
            fail_with: Some(gateways::Error::Status(409)),
            ..Default::default()
        };
        let notify = MockNotify::default();
        let user = moderator(7);

        let mut wizard = ReviewWizard::new();
        wizard.open(&place);
        wizard.go_to(7);
        wizard.confirm_approve();
        let before = wizard.clone();
        let (place_id, decision) = wizard.begin_submission().unwrap();
        let outcome = submit_decision(&gw, &notify, Some(&user), Some(IP), place_id, decision).await;
        wizard.finish_submission(&outcome);

        assert_eq!(
            outcome,
            DecisionOutcome::Failed(Error::Gateway(gateways::Error::Status(409)))
        );
        assert_eq!(wizard, before);
        assert_eq!(notify.kinds(), vec![NotificationKind::Error]);
    }

    #[tokio::test]
    async fn backend_failure_keeps_the_rejection_draft() {
        let place = Place::build().id(42).finish();
        let gw = MockPlaceGateway {
            fail_with: Some(gateways::Error::Status(500)),
            ..Default::default()
        };
        let notify = MockNotify::default();
        let user = moderator(7);

        let mut wizard = ReviewWizard::new();
        wizard.open(&place);
        wizard.go_to(7);
        wizard.confirm_reject();
        wizard.select_reason(Some(RejectReason::Duplicate));
        wizard.set_comment("same as #41".into());
        let before = wizard.clone();
        let (place_id, decision) = wizard.begin_submission().unwrap();
        let outcome = submit_decision(&gw, &notify, Some(&user), Some(IP), place_id, decision).await;
        wizard.finish_submission(&outcome);

        assert_eq!(
            outcome,
            DecisionOutcome::Failed(Error::Gateway(gateways::Error::Status(500)))
        );
        assert_eq!(wizard, before);
        assert!(matches!(
            wizard.decision(),
            DecisionState::ConfirmingReject {
                reason: Some(RejectReason::Duplicate),
                ..
            }
        ));
        assert_eq!(gw.calls.borrow().len(), 1);
        assert_eq!(notify.kinds(), vec![NotificationKind::Error]);
    }

    #[tokio::test]
    async fn failed_ip_lookup_yields_none() {
        let lookup = MockIpLookup(Err(gateways::Error::Fetch("offline".into())));
        assert_eq!(resolve_ip_address(&lookup).await, None);
        let lookup = MockIpLookup(Ok(" 203.0.113.9\n".into()));
        assert_eq!(
            resolve_ip_address(&lookup).await.as_deref(),
            Some("203.0.113.9")
        );
    }
}
