//! Tests for notifications module
//!
//! These tests verify:
//! - Toast expiry and dismissal
//! - Failure reporting through a notifier

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::ClientError;
    use std::time::{Duration, Instant};

    #[test]
    fn test_toasts_expire_after_ttl() {
        let center = ToastCenter::new(Duration::from_secs(5));
        let start = Instant::now();
        center.push_at(ToastKind::Success, "Skill created", start);
        center.push_at(ToastKind::Error, "Failed", start + Duration::from_secs(3));

        assert_eq!(center.active_at(start + Duration::from_secs(4)).len(), 2);

        let later = center.active_at(start + Duration::from_secs(6));
        assert_eq!(later.len(), 1);
        assert_eq!(later[0].message, "Failed");

        assert!(center.active_at(start + Duration::from_secs(9)).is_empty());
    }

    #[test]
    fn test_push_drops_expired_toasts() {
        let center = ToastCenter::new(Duration::from_secs(5));
        let start = Instant::now();
        for i in 0..100 {
            center.push_at(ToastKind::Success, &format!("Saved {}", i), start);
        }
        center.push_at(ToastKind::Error, "Failed", start + Duration::from_secs(10));

        // reading as of `start` would still show the old toasts had they been kept
        let remaining = center.active_at(start);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "Failed");
    }

    #[test]
    fn test_dismiss_removes_single_toast() {
        let center = ToastCenter::default();
        let first = center.push(ToastKind::Success, "one");
        center.push(ToastKind::Success, "two");

        assert!(center.dismiss(first));
        assert!(!center.dismiss(first));
        assert_eq!(center.latest().map(|t| t.message), Some("two".to_string()));
    }

    #[test]
    fn test_notifier_records_kind() {
        let center = ToastCenter::default();
        center.success("Saved");
        center.error("Broken");

        let kinds: Vec<ToastKind> = center.active().into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Error]);
    }

    #[test]
    fn test_notify_failure_shows_conflict_toast() {
        let center = ToastCenter::default();
        let err = ClientError::from_response(400, br#"{"message":"MBA already exists"}"#);

        let message = notify_failure(&center, &err, &MessageContext::new("create", "qualification"));

        assert_eq!(message, "This qualification already exists");
        assert_eq!(center.latest().map(|t| t.message), Some(message));
    }

    #[test]
    fn test_notify_failure_skips_toast_on_unauthorized() {
        let center = ToastCenter::default();
        let err = ClientError::from_response(401, b"");

        notify_failure(&center, &err, &MessageContext::new("load", "skills"));
        assert!(center.active().is_empty());
    }
}
