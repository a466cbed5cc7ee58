//! Step-by-step review of a single place.
//!
//! The wizard is a plain state machine. Submitting a decision is split
//! into [`ReviewWizard::begin_submission`], the asynchronous
//! [`crate::usecases::submit_decision`] and
//! [`ReviewWizard::finish_submission`] so that the state is never
//! borrowed across an `await`.

use poi_entities::{
    place::{Place, PlaceId},
    reject_reason::RejectReason,
};

use crate::usecases::DecisionOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    General,
    Images,
    Submitter,
    Location,
    Properties,
    History,
    Decision,
}

static STEPS: [Step; 7] = [
    Step::General,
    Step::Images,
    Step::Submitter,
    Step::Location,
    Step::Properties,
    Step::History,
    Step::Decision,
];

/// Number of read-only steps every place has.
pub const REVIEW_STEPS: usize = 6;

impl Step {
    pub const fn title(self) -> &'static str {
        match self {
            Self::General => "Informations générales",
            Self::Images => "Images",
            Self::Submitter => "Soumis par",
            Self::Location => "Localisation",
            Self::Properties => "Propriétés",
            Self::History => "Historique",
            Self::Decision => "Décision",
        }
    }

    /// 1-based position within the wizard.
    pub const fn number(self) -> usize {
        self as usize + 1
    }
}

/// Sub-state of the decision step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DecisionState {
    #[default]
    Idle,
    ConfirmingApprove,
    ConfirmingReject {
        reason: Option<RejectReason>,
        comment: String,
    },
}

/// The decision as it has been confirmed by the moderator,
/// preconditions not yet checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDecision {
    Approve,
    Reject {
        reason: Option<RejectReason>,
        comment: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewWizard {
    place_id: Option<PlaceId>,
    awaits_decision: bool,
    current_step: usize,
    loading: bool,
    decision: DecisionState,
}

impl ReviewWizard {
    /// A closed wizard.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, place: &Place) {
        *self = Self {
            place_id: Some(place.id),
            awaits_decision: place.awaits_decision(),
            current_step: 1,
            loading: false,
            decision: DecisionState::Idle,
        };
    }

    /// Refused while a submission is in flight.
    pub fn close(&mut self) -> bool {
        if self.loading {
            return false;
        }
        *self = Self::default();
        true
    }

    pub const fn is_open(&self) -> bool {
        self.place_id.is_some()
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn total_steps(&self) -> usize {
        if self.awaits_decision {
            REVIEW_STEPS + 1
        } else {
            REVIEW_STEPS
        }
    }

    /// 1-based index, `0` if the wizard is closed.
    pub const fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step(&self) -> Option<Step> {
        if !self.is_open() {
            return None;
        }
        STEPS.get(self.current_step - 1).copied()
    }

    pub fn steps(&self) -> &'static [Step] {
        &STEPS[..self.total_steps()]
    }

    pub const fn is_first_step(&self) -> bool {
        self.current_step <= 1
    }

    pub const fn is_last_step(&self) -> bool {
        self.current_step >= self.total_steps()
    }

    pub fn next(&mut self) {
        if self.is_open() && !self.loading {
            self.current_step = (self.current_step + 1).min(self.total_steps());
        }
    }

    pub fn previous(&mut self) {
        if self.is_open() && !self.loading {
            self.current_step = self.current_step.saturating_sub(1).max(1);
        }
    }

    /// Jumps to a 1-based step, clamped to the valid range.
    pub fn go_to(&mut self, step: usize) {
        if self.is_open() && !self.loading {
            self.current_step = step.clamp(1, self.total_steps());
        }
    }

    pub const fn decision(&self) -> &DecisionState {
        &self.decision
    }

    fn can_decide(&self) -> bool {
        self.awaits_decision && !self.loading && self.step() == Some(Step::Decision)
    }

    pub fn confirm_approve(&mut self) -> bool {
        if !self.can_decide() || self.decision != DecisionState::Idle {
            return false;
        }
        self.decision = DecisionState::ConfirmingApprove;
        true
    }

    pub fn confirm_reject(&mut self) -> bool {
        if !self.can_decide() || self.decision != DecisionState::Idle {
            return false;
        }
        self.decision = DecisionState::ConfirmingReject {
            reason: None,
            comment: String::new(),
        };
        true
    }

    /// Back to the choice between approve and reject.
    pub fn cancel_confirmation(&mut self) {
        if !self.loading {
            self.decision = DecisionState::Idle;
        }
    }

    pub fn select_reason(&mut self, selected: Option<RejectReason>) {
        if self.loading {
            return;
        }
        if let DecisionState::ConfirmingReject { reason, .. } = &mut self.decision {
            *reason = selected;
        }
    }

    pub fn set_comment(&mut self, text: String) {
        if self.loading {
            return;
        }
        if let DecisionState::ConfirmingReject { comment, .. } = &mut self.decision {
            *comment = text;
        }
    }

    /// Marks the wizard as busy and hands out the confirmed decision.
    ///
    /// Returns `None` if nothing is being confirmed or a submission
    /// is already in flight.
    pub fn begin_submission(&mut self) -> Option<(PlaceId, PendingDecision)> {
        if !self.can_decide() {
            return None;
        }
        let place_id = self.place_id?;
        let pending = match &self.decision {
            DecisionState::Idle => return None,
            DecisionState::ConfirmingApprove => PendingDecision::Approve,
            DecisionState::ConfirmingReject { reason, comment } => PendingDecision::Reject {
                reason: *reason,
                comment: comment.clone(),
            },
        };
        self.loading = true;
        Some((place_id, pending))
    }

    /// Clears the busy flag; a completed decision also closes the wizard.
    pub fn finish_submission(&mut self, outcome: &DecisionOutcome) {
        self.loading = false;
        if outcome.is_completed() {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::Error;
    use poi_entities::{builders::*, status::ValidationStatus};

    fn place_with_status(status: ValidationStatus) -> Place {
        Place::build().id(42).status(status).finish()
    }

    fn opened(status: ValidationStatus) -> ReviewWizard {
        let mut wizard = ReviewWizard::new();
        wizard.open(&place_with_status(status));
        wizard
    }

    fn at_decision_step() -> ReviewWizard {
        let mut wizard = opened(ValidationStatus::Pending);
        wizard.go_to(7);
        wizard
    }

    #[test]
    fn seven_steps_while_awaiting_decision() {
        for status in [ValidationStatus::Pending, ValidationStatus::Synchronized] {
            let wizard = opened(status);
            assert_eq!(wizard.total_steps(), 7);
            assert_eq!(wizard.steps().last(), Some(&Step::Decision));
        }
    }

    #[test]
    fn six_steps_otherwise() {
        for status in [
            ValidationStatus::Validated,
            ValidationStatus::Rejected,
            ValidationStatus::Unknown("archived".into()),
        ] {
            let wizard = opened(status);
            assert_eq!(wizard.total_steps(), 6);
            assert_eq!(wizard.steps().last(), Some(&Step::History));
        }
    }

    #[test]
    fn navigation_stays_within_bounds() {
        for status in [ValidationStatus::Pending, ValidationStatus::Validated] {
            let mut wizard = opened(status);
            let total = wizard.total_steps();
            for start in 1..=total {
                for calls in 0..10 {
                    wizard.go_to(start);
                    for _ in 0..calls {
                        wizard.next();
                        assert!((1..=total).contains(&wizard.current_step()));
                    }
                    wizard.go_to(start);
                    for _ in 0..calls {
                        wizard.previous();
                        assert!((1..=total).contains(&wizard.current_step()));
                    }
                }
            }
            wizard.go_to(0);
            assert_eq!(wizard.current_step(), 1);
            wizard.go_to(100);
            assert_eq!(wizard.current_step(), total);
        }
    }

    #[test]
    fn opening_resets_to_first_step() {
        let mut wizard = at_decision_step();
        assert!(wizard.confirm_approve());
        wizard.open(&place_with_status(ValidationStatus::Pending));
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.step(), Some(Step::General));
        assert_eq!(wizard.decision(), &DecisionState::Idle);
    }

    #[test]
    fn closed_wizard_does_not_move() {
        let mut wizard = ReviewWizard::new();
        wizard.next();
        assert_eq!(wizard.current_step(), 0);
        assert_eq!(wizard.step(), None);
    }

    #[test]
    fn confirmation_panels_are_mutually_exclusive() {
        let mut wizard = at_decision_step();
        assert!(wizard.confirm_approve());
        assert!(!wizard.confirm_reject());
        assert_eq!(wizard.decision(), &DecisionState::ConfirmingApprove);

        wizard.cancel_confirmation();
        assert!(wizard.confirm_reject());
        assert!(!wizard.confirm_approve());
        assert!(matches!(
            wizard.decision(),
            DecisionState::ConfirmingReject { .. }
        ));
    }

    #[test]
    fn decisions_only_on_the_decision_step() {
        let mut wizard = opened(ValidationStatus::Pending);
        wizard.go_to(6);
        assert!(!wizard.confirm_approve());

        let mut wizard = opened(ValidationStatus::Validated);
        wizard.go_to(7);
        assert_eq!(wizard.current_step(), 6);
        assert!(!wizard.confirm_approve());
        assert!(wizard.begin_submission().is_none());
    }

    #[test]
    fn navigation_is_frozen_while_loading() {
        let mut wizard = at_decision_step();
        wizard.confirm_approve();
        assert_eq!(
            wizard.begin_submission(),
            Some((PlaceId::new(42), PendingDecision::Approve))
        );
        assert!(wizard.is_loading());
        wizard.previous();
        wizard.go_to(1);
        assert_eq!(wizard.current_step(), 7);
        assert!(!wizard.close());
        assert!(wizard.is_open());
        // No duplicate submission
        assert!(wizard.begin_submission().is_none());
    }

    #[test]
    fn reject_carries_reason_and_comment() {
        let mut wizard = at_decision_step();
        wizard.confirm_reject();
        wizard.select_reason(Some(RejectReason::Duplicate));
        wizard.set_comment("same as #41".into());
        assert_eq!(
            wizard.begin_submission(),
            Some((
                PlaceId::new(42),
                PendingDecision::Reject {
                    reason: Some(RejectReason::Duplicate),
                    comment: "same as #41".into(),
                }
            ))
        );
    }

    #[test]
    fn completed_submission_closes_the_wizard() {
        let mut wizard = at_decision_step();
        wizard.confirm_approve();
        wizard.begin_submission();
        wizard.finish_submission(&DecisionOutcome::Completed);
        assert!(!wizard.is_open());
        assert!(!wizard.is_loading());
    }

    #[test]
    fn failed_submission_keeps_the_wizard_open() {
        let mut wizard = at_decision_step();
        wizard.confirm_reject();
        wizard.begin_submission();
        wizard.finish_submission(&DecisionOutcome::Refused(Error::ReasonRequired));
        assert!(wizard.is_open());
        assert!(!wizard.is_loading());
        assert_eq!(wizard.current_step(), 7);
        assert!(matches!(
            wizard.decision(),
            DecisionState::ConfirmingReject { .. }
        ));
    }
}
