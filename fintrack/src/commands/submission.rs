use crate::state::{validate, EntryPhase, EntrySurface, SurfaceVariant};
use fintrack_api::endpoints::transactions::{NewTransaction, Transaction};
use fintrack_session::SessionContext;
use uuid::Uuid;

/// An "add transaction" request ready to hand to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    /// Echoed back by the store result so only the issuing surface reacts.
    pub id: Uuid,
    pub payload: NewTransaction,
    pub variant: SurfaceVariant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Dispatched(Dispatch),
    /// Validation failed; the error dialog is now open.
    Rejected,
    /// No token in the session. Nothing happens.
    SkippedNoSession,
    /// A previous submission from this page is still waiting.
    InFlight,
}

/// Run a submission attempt for `surface`.
///
/// Errors are recomputed from scratch on every attempt and the draft is never
/// touched, so a rejected draft can be corrected and resubmitted.
pub fn submit(surface: &mut EntrySurface, session: &SessionContext) -> SubmitOutcome {
    if surface.is_awaiting_result() {
        return SubmitOutcome::InFlight;
    }

    surface.errors = validate(&surface.draft);
    if !surface.errors.is_empty() {
        tracing::debug!(
            "Transaction rejected with {} missing field(s)",
            surface.errors.len()
        );
        surface.toggle_errors();
        return SubmitOutcome::Rejected;
    }

    if !session.has_token() {
        tracing::debug!("No session token, skipping transaction submission");
        return SubmitOutcome::SkippedNoSession;
    }

    let Some(payload) = surface.draft.to_payload(surface.variant.includes_date()) else {
        tracing::warn!("Transaction amount {:?} cannot be sent", surface.draft.amount);
        return SubmitOutcome::Rejected;
    };
    let id = Uuid::new_v4();
    if surface.variant == SurfaceVariant::Page {
        surface.phase = EntryPhase::Submitting;
        surface.in_flight = Some(id);
    }

    SubmitOutcome::Dispatched(Dispatch {
        id,
        payload,
        variant: surface.variant,
    })
}

/// Re-evaluate a surface after the store's latest add result changed.
///
/// Returns true when the page should leave for the listing. Results of
/// other dispatches are ignored.
pub fn on_store_result(
    surface: &mut EntrySurface,
    dispatch_id: Uuid,
    latest: Option<&Transaction>,
) -> bool {
    if !is_waiting_on(surface, dispatch_id) || latest.is_none() {
        return false;
    }
    surface.phase = EntryPhase::Done;
    surface.in_flight = None;
    true
}

/// The page's own store call failed. It goes back to editing so the user can
/// try again.
pub fn on_dispatch_failed(surface: &mut EntrySurface, dispatch_id: Uuid) {
    if is_waiting_on(surface, dispatch_id) {
        surface.phase = EntryPhase::Editing;
        surface.in_flight = None;
    }
}

fn is_waiting_on(surface: &EntrySurface, dispatch_id: Uuid) -> bool {
    surface.phase == EntryPhase::Submitting && surface.in_flight == Some(dispatch_id)
}
