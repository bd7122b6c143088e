//! PaymentService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::Utc;
    use demo_types::AccountId;

    use crate::{DelayStrategy, PaymentService};

    #[tokio::test]
    async fn test_record_carries_requested_id() {
        let service = PaymentService::new(DelayStrategy::None);

        for raw in [0, 1, 42, -1, i64::MAX, i64::MIN] {
            let info = service.get_payment_info(AccountId::new(raw)).await;
            assert_eq!(info.id, AccountId::new(raw));
        }
    }

    #[tokio::test]
    async fn test_date_is_within_observation_window() {
        let service = PaymentService::new(DelayStrategy::None);

        let before = Utc::now();
        let info = service.get_payment_info(AccountId::new(7)).await;
        let after = Utc::now();

        assert!(info.date >= before, "date {} earlier than {}", info.date, before);
        assert!(info.date <= after, "date {} later than {}", info.date, after);
    }

    #[tokio::test(start_paused = true)]
    async fn test_discrete_delay_is_waited() {
        let service = PaymentService::new(DelayStrategy::Discrete(vec![Duration::from_millis(
            1000,
        )]));

        let start = tokio::time::Instant::now();
        let _ = service.get_payment_info(AccountId::new(1)).await;

        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_uniform_delay_never_exceeds_bound() {
        let service = PaymentService::new(DelayStrategy::Uniform {
            max: Duration::from_millis(2000),
        });

        for id in 0..20 {
            let start = tokio::time::Instant::now();
            let _ = service.get_payment_info(AccountId::new(id)).await;
            // Paused clock auto-advances by exactly the sleep, plus scheduler slack.
            assert!(start.elapsed() <= Duration::from_millis(2010));
        }
    }

    #[tokio::test]
    async fn test_concurrent_requests_keep_their_ids() {
        let service = Arc::new(PaymentService::new(DelayStrategy::Uniform {
            max: Duration::from_millis(20),
        }));

        let handles: Vec<_> = (0..32)
            .map(|id| {
                let service = service.clone();
                tokio::spawn(async move { (id, service.get_payment_info(AccountId::new(id)).await) })
            })
            .collect();

        for handle in handles {
            let (id, info) = handle.await.unwrap();
            assert_eq!(info.id, AccountId::new(id));
        }
    }

    #[test]
    fn test_default_service_uses_uniform_two_seconds() {
        assert_eq!(PaymentService::default().delay(), &DelayStrategy::default());
    }
}
