use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;

use hirondelle_api::middleware::error_handling::AppError;
use hirondelle_core::errors::SiteError;
use hirondelle_core::messages::{
    MSG_AVAILABILITY_ERROR, MSG_MISSING_FIELDS, MSG_RESERVATION_ERROR, MSG_SLOT_ALREADY_RESERVED,
    MSG_UNKNOWN_SLOT,
};
use hirondelle_core::models::response::StatusResponse;
use hirondelle_core::models::slot::{ReserveSlotRequest, Slot, SlotCategory};
use hirondelle_db::mock::repositories::MockSlotRepo;
use hirondelle_db::models::DbSlot;

fn dj_request(name: &str, email: &str, time_label: &str) -> ReserveSlotRequest {
    ReserveSlotRequest {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        time_label: Some(time_label.to_string()),
        position_index: Some(0),
    }
}

fn free_row(time_label: &str, spot_index: i32) -> DbSlot {
    DbSlot {
        time_slot: Some(time_label.to_string()),
        spot_index,
        name: None,
        email: None,
    }
}

fn taken_row(time_label: &str, spot_index: i32, name: &str) -> DbSlot {
    DbSlot {
        time_slot: Some(time_label.to_string()),
        spot_index,
        name: Some(name.to_string()),
        email: Some("x@example.org".to_string()),
    }
}

// Mirrors the reservation decision flow of the slot handler on top of the
// mock repository: validate, read availability, conditionally claim.
async fn reserve_with_repo(
    repo: &MockSlotRepo,
    category: SlotCategory,
    request: ReserveSlotRequest,
) -> Result<StatusResponse, AppError> {
    let claim = request
        .into_claim(category.shape())
        .map_err(SiteError::Validation)?;

    let existing = repo
        .find_slot(category, claim.key.clone())
        .await
        .map_err(|err| SiteError::Database(err.wrap_err(MSG_AVAILABILITY_ERROR)))?;

    let Some(row) = existing else {
        return Err(AppError(SiteError::Validation(MSG_UNKNOWN_SLOT.to_string())));
    };

    let slot: Slot = row.into();
    if slot.is_claimed() {
        return Ok(StatusResponse::rejected(MSG_SLOT_ALREADY_RESERVED));
    }

    // Static references for mockall
    let name: &'static str = Box::leak(claim.name.clone().into_boxed_str());
    let email: &'static str = Box::leak(claim.email.clone().into_boxed_str());

    let claimed = repo
        .claim_slot(category, claim.key.clone(), name, email)
        .await
        .map_err(|err| SiteError::Database(err.wrap_err(MSG_RESERVATION_ERROR)))?;

    if !claimed {
        return Ok(StatusResponse::rejected(MSG_SLOT_ALREADY_RESERVED));
    }

    Ok(StatusResponse::granted(category.success_message()))
}

#[tokio::test]
async fn test_claiming_a_free_slot_succeeds() {
    let mut repo = MockSlotRepo::new();
    repo.expect_find_slot()
        .returning(|_, _| Ok(Some(free_row("21:00 - 21:30", 0))));
    repo.expect_claim_slot().returning(|_, _, _, _| Ok(true));

    let response = reserve_with_repo(&repo, SlotCategory::Dj, dj_request("Alex", "a@x.com", "21:00 - 21:30"))
        .await
        .expect("reservation should go through");

    assert!(response.success);
    assert_eq!(response.message, "Merci ! Votre créneau DJ a été réservé.");
}

#[tokio::test]
async fn test_claiming_a_taken_slot_is_rejected_without_a_write() {
    let mut repo = MockSlotRepo::new();
    repo.expect_find_slot()
        .returning(|_, _| Ok(Some(taken_row("21:00 - 21:30", 0, "Sam"))));
    // A claimed row must never reach the update
    repo.expect_claim_slot().times(0);

    let response = reserve_with_repo(&repo, SlotCategory::Dj, dj_request("Alex", "a@x.com", "21:00 - 21:30"))
        .await
        .expect("rejection is a domain outcome, not an error");

    assert!(!response.success);
    assert_eq!(response.message, MSG_SLOT_ALREADY_RESERVED);
}

#[tokio::test]
async fn test_missing_fields_never_touch_the_store() {
    let mut repo = MockSlotRepo::new();
    repo.expect_find_slot().times(0);
    repo.expect_claim_slot().times(0);

    let request = ReserveSlotRequest {
        name: Some("Alex".to_string()),
        email: None,
        time_label: Some("21:00 - 21:30".to_string()),
        position_index: Some(0),
    };
    let err = reserve_with_repo(&repo, SlotCategory::Dj, request)
        .await
        .expect_err("validation failure");

    assert!(matches!(err.0, SiteError::Validation(msg) if msg == MSG_MISSING_FIELDS));
}

#[tokio::test]
async fn test_unknown_slot_key_is_client_input() {
    let mut repo = MockSlotRepo::new();
    repo.expect_find_slot().returning(|_, _| Ok(None));
    repo.expect_claim_slot().times(0);

    let err = reserve_with_repo(&repo, SlotCategory::Voiturier, ReserveSlotRequest {
        name: Some("Alex".to_string()),
        email: Some("a@x.com".to_string()),
        time_label: None,
        position_index: Some(42),
    })
    .await
    .expect_err("unseeded row");

    assert!(matches!(err.0, SiteError::Validation(msg) if msg == MSG_UNKNOWN_SLOT));
}

#[tokio::test]
async fn test_availability_check_failure_maps_to_database_error() {
    let mut repo = MockSlotRepo::new();
    repo.expect_find_slot()
        .returning(|_, _| Err(eyre::eyre!("connection reset")));

    let err = reserve_with_repo(&repo, SlotCategory::Cooking, dj_request("Alex", "a@x.com", "09:00 - 10:00"))
        .await
        .expect_err("infrastructure failure");

    match err.0 {
        SiteError::Database(report) => assert_eq!(report.to_string(), MSG_AVAILABILITY_ERROR),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_two_racing_claims_produce_exactly_one_winner() {
    // Both requests pass the availability read; the conditional update
    // decides, so the second writer is cleanly rejected instead of
    // silently overwriting the first.
    let mut repo = MockSlotRepo::new();
    repo.expect_find_slot()
        .times(2)
        .returning(|_, _| Ok(Some(free_row("21:00 - 21:30", 0))));

    let first_wins = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&first_wins);
    repo.expect_claim_slot()
        .times(2)
        .returning(move |_, _, _, _| Ok(flag.swap(false, Ordering::SeqCst)));

    let first = reserve_with_repo(&repo, SlotCategory::Dj, dj_request("Alex", "a@x.com", "21:00 - 21:30"))
        .await
        .expect("first claim");
    let second = reserve_with_repo(&repo, SlotCategory::Dj, dj_request("Sam", "s@x.com", "21:00 - 21:30"))
        .await
        .expect("second claim");

    assert!(first.success);
    assert!(!second.success);
    assert_eq!(second.message, MSG_SLOT_ALREADY_RESERVED);
}

#[tokio::test]
async fn test_both_cooking_positions_are_claimable_then_full() {
    let mut repo = MockSlotRepo::new();

    // Position 0 and 1 start free; the third attempt finds position 0 taken
    repo.expect_find_slot()
        .times(2)
        .returning(|_, key| {
            let index = match key {
                hirondelle_core::models::slot::SlotKey::Timed { position_index, .. } => position_index,
                hirondelle_core::models::slot::SlotKey::Flat { position_index } => position_index,
            };
            Ok(Some(free_row("09:00 - 10:00", index)))
        });
    repo.expect_claim_slot().times(2).returning(|_, _, _, _| Ok(true));

    let mut request = dj_request("Alex", "a@x.com", "09:00 - 10:00");
    request.position_index = Some(0);
    let first = reserve_with_repo(&repo, SlotCategory::Cooking, request.clone()).await.expect("claim 0");

    request.name = Some("Sam".to_string());
    request.position_index = Some(1);
    let second = reserve_with_repo(&repo, SlotCategory::Cooking, request.clone()).await.expect("claim 1");

    assert!(first.success && second.success);

    let mut full_repo = MockSlotRepo::new();
    full_repo
        .expect_find_slot()
        .returning(|_, _| Ok(Some(taken_row("09:00 - 10:00", 0, "Alex"))));
    full_repo.expect_claim_slot().times(0);

    request.name = Some("Leo".to_string());
    request.position_index = Some(0);
    let third = reserve_with_repo(&full_repo, SlotCategory::Cooking, request).await.expect("rejection");
    assert!(!third.success);
}
