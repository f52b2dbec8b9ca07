//! # Integration Tests
//!
//! End-to-end tests over the full stack: mock host -> controller ->
//! session -> listeners -> mock viewports.
//!
//! Covers:
//! - Percentage and absolute-value propagation through a live session
//! - Feedback-loop suppression (one user action, at most one propagation)
//! - Session lifecycle (re-trigger, disable, setup failure)
//! - Compatibility diagnostics from document fixtures
//! - Persisted configuration wiring

#[cfg(test)]
mod e2e_sync {
    use std::sync::Arc;

    use contracts::{ClampPolicy, EngineConfig, Severity, SyncError, SyncMode, ViewportAdapter};
    use host_adapter::{MockDocument, MockHost, MockViewport};
    use sync_engine::SyncController;

    struct Rig {
        host: Arc<MockHost>,
        active: Arc<MockViewport>,
        inactive: Arc<MockViewport>,
    }

    /// Two text documents, first one focused.
    fn rig(max_active: u32, max_inactive: u32) -> Rig {
        let host = Arc::new(MockHost::new());
        let a = host.add_document(MockDocument::text("a", "A.odt", max_active));
        let b = host.add_document(MockDocument::text("b", "B.odt", max_inactive));
        host.focus("a");
        Rig {
            host,
            active: a.mock_viewport().unwrap(),
            inactive: b.mock_viewport().unwrap(),
        }
    }

    #[test]
    fn test_percentage_sync_end_to_end() {
        let rig = rig(1000, 2000);
        let mut controller = SyncController::new(rig.host.clone(), EngineConfig::default());
        controller.trigger(SyncMode::Percentage).unwrap();

        // User scrolls the active document to the middle
        rig.active.set_value(500);

        assert_eq!(rig.inactive.value(), 1000);
        // Exactly one write per side: the user's, and one propagation
        assert_eq!(rig.active.write_count(), 1);
        assert_eq!(rig.inactive.write_count(), 1);
    }

    #[test]
    fn test_percentage_sync_rounds_to_hundredths() {
        let rig = rig(1000, 2000);
        let mut controller = SyncController::new(rig.host.clone(), EngineConfig::default());
        controller.trigger(SyncMode::Percentage).unwrap();

        // 333/1000 reads as 0.33, not 0.333
        rig.active.set_value(333);
        assert_eq!(rig.inactive.value(), 660);
    }

    #[test]
    fn test_absolute_sync_end_to_end() {
        let rig = rig(200, 500);
        let mut controller = SyncController::new(rig.host.clone(), EngineConfig::default());
        controller.trigger(SyncMode::AbsoluteValue).unwrap();

        rig.active.set_value(150);

        assert_eq!(rig.inactive.value(), 150);
        assert_eq!(rig.active.write_count(), 1);
        assert_eq!(rig.inactive.write_count(), 1);
    }

    #[test]
    fn test_sync_is_bidirectional() {
        let rig = rig(1000, 2000);
        let mut controller = SyncController::new(rig.host.clone(), EngineConfig::default());
        controller.trigger(SyncMode::Percentage).unwrap();

        rig.active.set_value(500);
        assert_eq!(rig.inactive.value(), 1000);

        // Now the user scrolls the other window
        rig.inactive.set_value(500);
        assert_eq!(rig.active.value(), 250);

        // One user write plus one propagated write per side, no oscillation
        assert_eq!(rig.active.write_count(), 2);
        assert_eq!(rig.inactive.write_count(), 2);
    }

    #[test]
    fn test_no_feedback_loop_across_many_actions() {
        let rig = rig(1000, 1000);
        let mut controller = SyncController::new(rig.host.clone(), EngineConfig::default());
        controller.trigger(SyncMode::AbsoluteValue).unwrap();

        for value in [100, 250, 400, 750, 1000] {
            rig.active.set_value(value);
        }

        assert_eq!(rig.active.value(), 1000);
        assert_eq!(rig.inactive.value(), 1000);
        // Five user writes, five propagations, nothing bounced back
        assert_eq!(rig.active.write_count(), 5);
        assert_eq!(rig.inactive.write_count(), 5);
    }

    #[test]
    fn test_clamp_policy_caps_absolute_writes() {
        let rig = rig(1000, 100);
        let mut controller = SyncController::new(rig.host.clone(), EngineConfig::default());
        controller.trigger(SyncMode::AbsoluteValue).unwrap();

        rig.active.set_value(500);
        assert_eq!(rig.inactive.value(), 100);
    }

    #[test]
    fn test_reject_policy_swallows_error_and_recovers() {
        let rig = rig(1000, 100);
        let mut controller = SyncController::new(
            rig.host.clone(),
            EngineConfig {
                clamp: ClampPolicy::Reject,
            },
        );
        controller.trigger(SyncMode::AbsoluteValue).unwrap();

        // Out of range for the partner: rejected, nothing written
        rig.active.set_value(500);
        assert_eq!(rig.inactive.value(), 0);
        assert_eq!(rig.inactive.write_count(), 0);

        // The guard was released, the next in-range action propagates
        rig.active.set_value(50);
        assert_eq!(rig.inactive.value(), 50);
    }

    #[test]
    fn test_retrigger_replaces_listeners() {
        let rig = rig(1000, 1000);
        let mut controller = SyncController::new(rig.host.clone(), EngineConfig::default());

        controller.trigger(SyncMode::Percentage).unwrap();
        controller.trigger(SyncMode::AbsoluteValue).unwrap();

        // One listener per viewport, not two
        assert_eq!(rig.active.subscriber_count(), 1);
        assert_eq!(rig.inactive.subscriber_count(), 1);

        rig.active.set_value(300);
        assert_eq!(rig.inactive.write_count(), 1);
        assert_eq!(controller.session().unwrap().mode(), SyncMode::AbsoluteValue);
    }

    #[test]
    fn test_disable_detaches_listeners() {
        let rig = rig(1000, 1000);
        let mut controller = SyncController::new(rig.host.clone(), EngineConfig::default());
        controller.trigger(SyncMode::Percentage).unwrap();
        controller.disable();

        assert_eq!(rig.active.subscriber_count(), 0);
        assert_eq!(rig.inactive.subscriber_count(), 0);

        rig.active.set_value(500);
        assert_eq!(rig.inactive.write_count(), 0);
    }

    #[test]
    fn test_controller_drop_detaches_listeners() {
        let rig = rig(1000, 1000);
        {
            let mut controller = SyncController::new(rig.host.clone(), EngineConfig::default());
            controller.trigger(SyncMode::Percentage).unwrap();
            assert_eq!(rig.active.subscriber_count(), 1);
        }
        assert_eq!(rig.active.subscriber_count(), 0);
        assert_eq!(rig.inactive.subscriber_count(), 0);
    }

    #[test]
    fn test_setup_failure_installs_nothing() {
        let host = Arc::new(MockHost::new());
        let a = host.add_document(MockDocument::text("a", "A.odt", 1000));
        host.focus("a");

        let mut controller = SyncController::new(host.clone(), EngineConfig::default());
        let err = controller.trigger(SyncMode::Percentage).unwrap_err();
        assert!(matches!(err, SyncError::PeerCount { found: 1 }));

        let alerts = host.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].1, Severity::Error);
        assert_eq!(a.mock_viewport().unwrap().subscriber_count(), 0);
    }

    #[test]
    fn test_stub_mode_installs_nothing() {
        let rig = rig(1000, 1000);
        let mut controller = SyncController::new(rig.host.clone(), EngineConfig::default());

        assert!(controller.trigger(SyncMode::Heading).unwrap().is_none());
        assert_eq!(rig.active.subscriber_count(), 0);

        let alerts = rig.host.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].1, Severity::Info);
    }
}

#[cfg(test)]
mod e2e_compat {
    use host_adapter::parse_paragraphs;

    const LEFT: &str = "\
Heading 1 | Introduction
Body Text | First paragraph.
Body Text | Second paragraph.
";

    const RIGHT_MATCHING: &str = "\
Heading 1 | Einleitung
Body Text | Erster Absatz.
Body Text | Zweiter Absatz.
";

    const RIGHT_DIVERGING: &str = "\
Heading 1 | Einleitung
Body Text | Erster Absatz.
Title | Zweiter Absatz.
";

    #[test]
    fn test_fixture_documents_compatible() {
        let left = parse_paragraphs(LEFT);
        let right = parse_paragraphs(RIGHT_MATCHING);
        let result = sync_engine::check(&left, &right);
        assert!(result.compatible);
        assert_eq!(result.first_mismatch, None);
    }

    #[test]
    fn test_fixture_documents_diverge_on_style_not_text() {
        let left = parse_paragraphs(LEFT);
        let right = parse_paragraphs(RIGHT_DIVERGING);
        let result = sync_engine::check(&left, &right);
        assert!(!result.compatible);
        assert_eq!(result.first_mismatch, Some(2));
    }

    #[test]
    fn test_length_mismatch_reports_shorter_length() {
        let left = parse_paragraphs(LEFT);
        let mut right = parse_paragraphs(RIGHT_MATCHING);
        right.pop();
        let result = sync_engine::check(&left, &right);
        assert!(!result.compatible);
        assert_eq!(result.first_mismatch, Some(2));
    }
}

#[cfg(test)]
mod e2e_config {
    use config_loader::ConfigLoader;
    use contracts::LogLevel;

    #[test]
    fn test_persisted_config_drives_log_filter() {
        let config = ConfigLoader::load_from_str("LOG_LEVEL=WARNING\n").unwrap();
        assert_eq!(config.log_level, Some(LogLevel::Warning));
        assert_eq!(observability::default_level_from(&config), "warn");
    }

    #[test]
    fn test_missing_log_level_defaults_to_info() {
        let config = ConfigLoader::load_from_str("# empty file\n").unwrap();
        assert_eq!(config.log_level, None);
        assert_eq!(observability::default_level_from(&config), "info");
    }
}
