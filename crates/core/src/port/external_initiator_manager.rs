// External Initiator Manager Port (Interface)

use crate::domain::{ExternalInitiator, WebhookSpecId};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use tracing::debug;

/// Interface to the external initiators subscribed to webhook jobs
///
/// Implementations:
/// - an HTTP client that pushes job changes to initiator endpoints (lives in an adapter crate)
/// - NullExternalInitiatorManager: used while the feature is disabled
/// - mocks::MockExternalInitiatorManager: expectation-driven test double
#[async_trait]
pub trait ExternalInitiatorManager: Send + Sync {
    /// Tell every initiator of the webhook spec that the job exists
    async fn notify(&self, webhook_spec_id: WebhookSpecId) -> Result<()>;

    /// Tell every initiator of the webhook spec that the job is gone
    async fn delete_job(&self, webhook_spec_id: WebhookSpecId) -> Result<()>;

    /// Look up an initiator by its unique name
    ///
    /// # Errors
    /// - AppError::NotFound if no initiator has this name
    async fn find_external_initiator_by_name(&self, name: &str) -> Result<ExternalInitiator>;
}

/// Manager used when external initiators are disabled
///
/// Notifications are dropped and no initiator can be found.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullExternalInitiatorManager;

#[async_trait]
impl ExternalInitiatorManager for NullExternalInitiatorManager {
    async fn notify(&self, webhook_spec_id: WebhookSpecId) -> Result<()> {
        debug!(webhook_spec_id, "External initiators disabled, skipping notify");
        Ok(())
    }

    async fn delete_job(&self, webhook_spec_id: WebhookSpecId) -> Result<()> {
        debug!(webhook_spec_id, "External initiators disabled, skipping delete");
        Ok(())
    }

    async fn find_external_initiator_by_name(&self, name: &str) -> Result<ExternalInitiator> {
        Err(AppError::NotFound(format!(
            "external initiator '{}' (external initiators disabled)",
            name
        )))
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

#[cfg(any(test, feature = "mocks"))]
pub mod mocks {
    use super::*;
    use mockall::mock;

    // Expectation-driven ExternalInitiatorManager.
    // Calls without a matching expectation panic. Expectations with an
    // explicit count are verified on `checkpoint()` and on drop.
    mock! {
        pub ExternalInitiatorManager {}

        #[async_trait]
        impl ExternalInitiatorManager for ExternalInitiatorManager {
            async fn notify(&self, webhook_spec_id: WebhookSpecId) -> Result<()>;
            async fn delete_job(&self, webhook_spec_id: WebhookSpecId) -> Result<()>;
            async fn find_external_initiator_by_name(
                &self,
                name: &str,
            ) -> Result<ExternalInitiator>;
        }
    }

    /// Common expectation setups
    ///
    /// Every setup carries a call count, so an expectation that is configured
    /// but never called fails `checkpoint()` and drop. Prefer these over raw
    /// `expect_*()` calls, which mockall only verifies when `times` is set.
    pub mod expect {
        use super::MockExternalInitiatorManager;
        use crate::domain::{ExternalInitiator, WebhookSpecId};
        use crate::error::{AppError, Result};
        use mockall::predicate::eq;

        pub fn notify_ok(mock: &mut MockExternalInitiatorManager, id: WebhookSpecId) {
            mock.expect_notify()
                .with(eq(id))
                .times(1)
                .returning(|_| Ok(()));
        }

        pub fn delete_job_ok(mock: &mut MockExternalInitiatorManager, id: WebhookSpecId) {
            mock.expect_delete_job()
                .with(eq(id))
                .times(1)
                .returning(|_| Ok(()));
        }

        pub fn initiator_found(
            mock: &mut MockExternalInitiatorManager,
            initiator: ExternalInitiator,
        ) {
            mock.expect_find_external_initiator_by_name()
                .with(eq(initiator.name.clone()))
                .times(1)
                .returning(move |_| Ok(initiator.clone()));
        }

        pub fn initiator_missing(mock: &mut MockExternalInitiatorManager, name: &str) {
            mock.expect_find_external_initiator_by_name()
                .with(eq(name.to_string()))
                .times(1)
                .returning(|name| {
                    Err(AppError::NotFound(format!("external initiator '{}'", name)))
                });
        }

        /// `notify` calls accepted by `matches`, answered by `respond`; at least one call
        pub fn notify_with<P, F>(
            mock: &mut MockExternalInitiatorManager,
            matches: P,
            respond: F,
        )
        where
            P: Fn(&WebhookSpecId) -> bool + Send + 'static,
            F: FnMut(WebhookSpecId) -> Result<()> + Send + 'static,
        {
            mock.expect_notify()
                .withf(matches)
                .times(1..)
                .returning(respond);
        }

        /// `delete_job` calls accepted by `matches`, answered by `respond`; at least one call
        pub fn delete_job_with<P, F>(
            mock: &mut MockExternalInitiatorManager,
            matches: P,
            respond: F,
        )
        where
            P: Fn(&WebhookSpecId) -> bool + Send + 'static,
            F: FnMut(WebhookSpecId) -> Result<()> + Send + 'static,
        {
            mock.expect_delete_job()
                .withf(matches)
                .times(1..)
                .returning(respond);
        }

        /// Lookups accepted by `matches`, answered by `respond`; at least one call
        pub fn lookup_with<P, F>(
            mock: &mut MockExternalInitiatorManager,
            matches: P,
            respond: F,
        )
        where
            P: Fn(&str) -> bool + Send + 'static,
            F: FnMut(&str) -> Result<ExternalInitiator> + Send + 'static,
        {
            mock.expect_find_external_initiator_by_name()
                .withf(matches)
                .times(1..)
                .returning(respond);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::{expect, MockExternalInitiatorManager};
    use super::*;
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;

    fn initiator(name: &str) -> ExternalInitiator {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        ExternalInitiator::new(1, name, Some("https://ei.example.com".to_string()), now)
    }

    #[tokio::test]
    async fn test_static_return_for_matching_argument() {
        let mut mock = MockExternalInitiatorManager::new();
        expect::notify_ok(&mut mock, 42);

        assert!(mock.notify(42).await.is_ok());
        mock.checkpoint();
    }

    #[tokio::test]
    async fn test_static_business_error_is_returned_as_value() {
        let mut mock = MockExternalInitiatorManager::new();
        mock.expect_delete_job()
            .with(eq(3))
            .times(1)
            .returning(|_| Err(AppError::Initiator("endpoint returned 500".to_string())));

        let err = mock.delete_job(3).await.unwrap_err();
        assert!(matches!(err, AppError::Initiator(ref msg) if msg.contains("500")));
    }

    #[tokio::test]
    async fn test_callback_computes_result_from_arguments() {
        let mut mock = MockExternalInitiatorManager::new();
        expect::notify_with(
            &mut mock,
            |_| true,
            |id| {
                if id % 2 == 0 {
                    Ok(())
                } else {
                    Err(AppError::Initiator(format!("odd spec {}", id)))
                }
            },
        );

        assert!(mock.notify(10).await.is_ok());
        let err = mock.notify(11).await.unwrap_err();
        assert_eq!(err.to_string(), "External initiator error: odd spec 11");
        mock.checkpoint();
    }

    #[tokio::test]
    async fn test_find_by_name_returns_configured_record() {
        let mut mock = MockExternalInitiatorManager::new();
        expect::initiator_found(&mut mock, initiator("bridge-ei"));
        expect::initiator_missing(&mut mock, "ghost");

        let found = mock.find_external_initiator_by_name("bridge-ei").await.unwrap();
        assert_eq!(found.name, "bridge-ei");

        let missing = mock.find_external_initiator_by_name("ghost").await.unwrap_err();
        assert!(missing.is_not_found());
    }

    #[tokio::test]
    async fn test_wildcard_and_specific_expectations_coexist() {
        let mut mock = MockExternalInitiatorManager::new();
        expect::lookup_with(
            &mut mock,
            |name| name.starts_with("chain-"),
            |name| {
                let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
                Ok(ExternalInitiator::new(9, name, None, now))
            },
        );
        expect::lookup_with(
            &mut mock,
            |_| true,
            |name| Err(AppError::NotFound(name.to_string())),
        );

        let ei = mock.find_external_initiator_by_name("chain-a").await.unwrap();
        assert_eq!(ei.id, 9);
        assert!(mock
            .find_external_initiator_by_name("other")
            .await
            .unwrap_err()
            .is_not_found());
        mock.checkpoint();
    }

    #[tokio::test]
    #[should_panic(expected = "No matching expectation found")]
    async fn test_unconfigured_argument_fails_loudly() {
        let mut mock = MockExternalInitiatorManager::new();
        expect::notify_ok(&mut mock, 42);

        assert!(mock.notify(42).await.is_ok());
        let _ = mock.notify(7).await;
    }

    #[tokio::test]
    #[should_panic(expected = "No matching expectation found")]
    async fn test_unconfigured_method_fails_loudly() {
        let mock = MockExternalInitiatorManager::new();
        let _ = mock.delete_job(1).await;
    }

    #[tokio::test]
    async fn test_all_expectations_met_passes_verification() {
        let mut mock = MockExternalInitiatorManager::new();
        expect::notify_ok(&mut mock, 1);
        expect::delete_job_ok(&mut mock, 1);
        expect::initiator_found(&mut mock, initiator("alpha"));

        mock.notify(1).await.unwrap();
        mock.delete_job(1).await.unwrap();
        mock.find_external_initiator_by_name("alpha").await.unwrap();

        mock.checkpoint();
    }

    #[tokio::test]
    #[should_panic(expected = "fewer than expected")]
    async fn test_unmet_expectation_reported_on_checkpoint() {
        let mut mock = MockExternalInitiatorManager::new();
        expect::notify_ok(&mut mock, 1);
        expect::delete_job_ok(&mut mock, 1);

        mock.notify(1).await.unwrap();
        mock.checkpoint();
    }

    #[test]
    #[should_panic(expected = "fewer than expected")]
    fn test_unmet_expectation_reported_on_drop() {
        let mut mock = MockExternalInitiatorManager::new();
        expect::delete_job_ok(&mut mock, 5);
        drop(mock);
    }

    #[test]
    #[should_panic(expected = "fewer than expected")]
    fn test_uncalled_callback_expectation_reported() {
        let mut mock = MockExternalInitiatorManager::new();
        expect::delete_job_with(&mut mock, |id| *id == 1, |_| Ok(()));
        mock.checkpoint();
    }

    #[test]
    #[should_panic(expected = "fewer than expected")]
    fn test_uncalled_wildcard_lookup_reported_on_drop() {
        let mut mock = MockExternalInitiatorManager::new();
        expect::lookup_with(
            &mut mock,
            |_| true,
            |name| Err(AppError::NotFound(name.to_string())),
        );
        drop(mock);
    }

    #[tokio::test]
    #[should_panic]
    async fn test_repeat_call_after_single_use_expectation_fails_loudly() {
        let mut mock = MockExternalInitiatorManager::new();
        expect::notify_ok(&mut mock, 42);

        assert!(mock.notify(42).await.is_ok());
        let _ = mock.notify(42).await;
    }

    #[tokio::test]
    async fn test_null_manager() {
        let manager = NullExternalInitiatorManager;
        assert!(manager.notify(1).await.is_ok());
        assert!(manager.delete_job(1).await.is_ok());

        let err = manager
            .find_external_initiator_by_name("bridge-ei")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("bridge-ei"));
    }
}
