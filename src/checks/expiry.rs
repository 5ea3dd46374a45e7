//! Expiry evaluation
//!
//! Pure classification of a certificate status against a day threshold.
//! `now` is passed in so results are deterministic.

use crate::models::{CertificateStatus, ExpiryOutcome};
use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `now` until `expires_at`, floored.
///
/// A certificate that expired an hour ago, or a fraction of a second ago,
/// reports -1, not 0.
pub fn days_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let span = expires_at - now;
    // num_seconds truncates toward zero; a negative sub-second part means the
    // floored second is one lower
    let mut seconds = span.num_seconds();
    if span.subsec_nanos() < 0 {
        seconds -= 1;
    }
    seconds.div_euclid(SECONDS_PER_DAY)
}

/// Classify `status` against `threshold_days`. The comparison is strict:
/// exactly `threshold_days` remaining is healthy.
pub fn evaluate(status: &CertificateStatus, threshold_days: i64, now: DateTime<Utc>) -> ExpiryOutcome {
    match status {
        CertificateStatus::Absent { .. } => ExpiryOutcome::NoCertificate,
        CertificateStatus::Valid { expires_at } => {
            let days = days_remaining(*expires_at, now);
            if days < threshold_days {
                ExpiryOutcome::ExpiringSoon(days)
            } else {
                ExpiryOutcome::Healthy(days)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AbsentReason;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn valid_in(duration: Duration) -> CertificateStatus {
        CertificateStatus::Valid {
            expires_at: now() + duration,
        }
    }

    #[test]
    fn test_days_truncate() {
        assert_eq!(days_remaining(now() + Duration::hours(47), now()), 1);
        assert_eq!(days_remaining(now() + Duration::days(100), now()), 100);
        assert_eq!(days_remaining(now() + Duration::minutes(5), now()), 0);
    }

    #[test]
    fn test_days_floor_when_expired() {
        assert_eq!(days_remaining(now() - Duration::hours(1), now()), -1);
        assert_eq!(days_remaining(now() - Duration::days(3), now()), -3);
        assert_eq!(days_remaining(now() - Duration::hours(73), now()), -4);
    }

    #[test]
    fn test_days_floor_sub_second() {
        assert_eq!(days_remaining(now(), now() + Duration::milliseconds(400)), -1);
        assert_eq!(
            days_remaining(now(), now() + Duration::days(1) + Duration::milliseconds(500)),
            -2
        );
        assert_eq!(days_remaining(now(), now() + Duration::nanoseconds(1)), -1);
        assert_eq!(days_remaining(now() + Duration::milliseconds(400), now()), 0);
        assert_eq!(
            days_remaining(now() + Duration::days(5), now() + Duration::milliseconds(250)),
            4
        );
    }

    #[test]
    fn test_sub_second_past_expiry_alerts() {
        let status = CertificateStatus::Valid { expires_at: now() };
        assert_eq!(
            evaluate(&status, 0, now() + Duration::milliseconds(400)),
            ExpiryOutcome::ExpiringSoon(-1)
        );
    }

    #[test]
    fn test_healthy() {
        assert_eq!(
            evaluate(&valid_in(Duration::days(100)), 20, now()),
            ExpiryOutcome::Healthy(100)
        );
    }

    #[test]
    fn test_expiring_soon() {
        assert_eq!(
            evaluate(&valid_in(Duration::days(5)), 20, now()),
            ExpiryOutcome::ExpiringSoon(5)
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(
            evaluate(&valid_in(Duration::days(20)), 20, now()),
            ExpiryOutcome::Healthy(20)
        );
        assert_eq!(
            evaluate(&valid_in(Duration::days(20) - Duration::seconds(1)), 20, now()),
            ExpiryOutcome::ExpiringSoon(19)
        );
    }

    #[test]
    fn test_already_expired() {
        assert_eq!(
            evaluate(&valid_in(-Duration::days(2)), 20, now()),
            ExpiryOutcome::ExpiringSoon(-2)
        );
    }

    #[test]
    fn test_absent() {
        let status = CertificateStatus::Absent {
            reason: AbsentReason::Handshake,
        };
        assert_eq!(evaluate(&status, 20, now()), ExpiryOutcome::NoCertificate);
    }
}
