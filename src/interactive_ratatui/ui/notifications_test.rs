#[cfg(test)]
mod tests {
    use super::super::notifications::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_fixed_durations_and_position() {
        assert_eq!(Notification::no_results().duration, Duration::from_millis(1500));
        assert_eq!(Notification::exhausted().duration, Duration::from_millis(1500));
        assert_eq!(Notification::failure().duration, Duration::from_millis(2000));
        assert_eq!(Notification::failure().position, ToastPosition::TopCenter);
    }

    #[test]
    fn test_error_kinds() {
        assert!(Notification::no_results().is_error());
        assert!(Notification::failure().is_error());
        assert!(!Notification::exhausted().is_error());
        assert!(!Notification::info("copied").is_error());
    }

    #[test]
    fn test_toasts_expire_after_their_duration() {
        let start = Instant::now();
        let mut toasts = Toasts::new();
        toasts.push(Notification::exhausted(), start);

        assert!(!toasts.expire(start + Duration::from_millis(1000)));
        assert_eq!(toasts.len(), 1);

        assert!(toasts.expire(start + Duration::from_millis(1500)));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_newest_toast_is_current() {
        let start = Instant::now();
        let mut toasts = Toasts::new();
        toasts.extend([Notification::exhausted(), Notification::failure()], start);

        assert_eq!(toasts.current().map(|n| n.kind), Some(NotificationKind::Failure));

        // The failure toast outlives the informational one
        toasts.expire(start + Duration::from_millis(1600));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.current().map(|n| n.kind), Some(NotificationKind::Failure));
    }
}
