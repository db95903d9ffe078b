use crate::rewards::redemption::quote;
use crate::rewards::{RedemptionError, RedemptionRequest, SocialFollowLedger, SocialPlatform};

#[test]
fn quote_discounts_one_unit_per_point() {
    let quote = quote(430, 200, 2500).expect("enough points");

    assert_eq!(quote.points_applied, 200);
    assert_eq!(quote.discount, 200);
    assert_eq!(quote.total, 2300);
    assert_eq!(quote.remaining_points, 230);
}

#[test]
fn quote_rejects_more_points_than_available() {
    let request = RedemptionRequest {
        available_points: 50,
        requested_points: 51,
        subtotal: 2500,
    };

    match request.quote() {
        Err(RedemptionError::InsufficientPoints {
            requested,
            available,
        }) => {
            assert_eq!(requested, 51);
            assert_eq!(available, 50);
        }
        other => panic!("expected insufficient points, got {other:?}"),
    }
}

#[test]
fn quote_total_never_goes_negative() {
    let quote = quote(5000, 3000, 2500).expect("enough points");
    assert_eq!(quote.total, 0);
}

#[test]
fn zero_points_leave_subtotal_untouched() {
    let quote = quote(0, 0, 2500).expect("nothing requested");
    assert_eq!(quote.total, 2500);
    assert_eq!(quote.discount, 0);
}

#[test]
fn follow_bonus_pays_once_per_platform() {
    let mut ledger = SocialFollowLedger::default();

    assert_eq!(ledger.record_follow(SocialPlatform::LinkedIn), 10);
    assert_eq!(ledger.record_follow(SocialPlatform::LinkedIn), 0);
    assert_eq!(ledger.record_follow(SocialPlatform::Instagram), 10);
    assert!(ledger.has_followed(SocialPlatform::Instagram));
    assert_eq!(ledger.bonus_total(), 20);
}
