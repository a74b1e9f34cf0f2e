#[cfg(test)]
mod tracker_tests {
    use crate::config::structs::leecher_settings::LeecherSettings;

    fn settings(warning: &str, ban: &str, ban_zero_files: bool) -> LeecherSettings {
        LeecherSettings {
            warning_message: warning.to_string(),
            ban_message: ban.to_string(),
            min_files: 100,
            min_folders: 1,
            open_private_chat: false,
            ban_zero_files,
            detected_leechers: Vec::new(),
        }
    }

    mod user_status_tests {
        use crate::tracker::enums::user_status::UserStatus;

        #[test]
        fn test_user_status_strings() {
            assert_eq!(UserStatus::RequestingStats.to_string(), "requesting_stats");
            assert_eq!(UserStatus::RequestingShares.to_string(), "requesting_shares");
            assert_eq!(UserStatus::Okay.to_string(), "okay");
            assert_eq!(UserStatus::PendingLeecher.to_string(), "pending_leecher");
            assert_eq!(UserStatus::PendingTurboleecher.to_string(), "pending_turboleecher");
            assert_eq!(UserStatus::ProcessedLeecher.to_string(), "processed_leecher");
        }

        #[test]
        fn test_user_status_serialization_matches_display() {
            for status in [
                UserStatus::RequestingStats,
                UserStatus::RequestingShares,
                UserStatus::Okay,
                UserStatus::PendingLeecher,
                UserStatus::PendingTurboleecher,
                UserStatus::ProcessedLeecher,
            ] {
                let json = serde_json::to_string(&status).unwrap();
                assert_eq!(json, format!("\"{status}\""));
            }
        }

        #[test]
        fn test_user_status_groups() {
            assert!(UserStatus::RequestingStats.is_requesting());
            assert!(UserStatus::RequestingShares.is_requesting());
            assert!(!UserStatus::PendingLeecher.is_requesting());
            assert!(UserStatus::PendingLeecher.is_pending());
            assert!(UserStatus::PendingTurboleecher.is_pending());
            assert!(!UserStatus::ProcessedLeecher.is_pending());
            assert!(!UserStatus::Okay.is_pending());
        }
    }

    mod leecher_verdict_tests {
        use super::settings;
        use crate::tracker::enums::leecher_verdict::LeecherVerdict;
        use crate::tracker::enums::user_status::UserStatus;

        #[test]
        fn test_classify_sharing_some_files() {
            assert_eq!(LeecherVerdict::classify(5, &settings("warn", "ban", true)), LeecherVerdict::Warn);
            assert_eq!(LeecherVerdict::classify(5, &settings("", "ban", true)), LeecherVerdict::Log);
            assert_eq!(LeecherVerdict::classify(5, &settings("warn", "", false)), LeecherVerdict::Warn);
        }

        #[test]
        fn test_classify_sharing_zero_files() {
            assert_eq!(LeecherVerdict::classify(0, &settings("warn", "ban", true)), LeecherVerdict::WarnAndBan);
            assert_eq!(LeecherVerdict::classify(0, &settings("", "ban", true)), LeecherVerdict::WarnAndBan);
            assert_eq!(LeecherVerdict::classify(0, &settings("warn", "", true)), LeecherVerdict::Ban);
            assert_eq!(LeecherVerdict::classify(0, &settings("", "", true)), LeecherVerdict::Ban);
            assert_eq!(LeecherVerdict::classify(0, &settings("warn", "ban", false)), LeecherVerdict::WarnTurbo);
            assert_eq!(LeecherVerdict::classify(0, &settings("", "ban", false)), LeecherVerdict::LogTurbo);
            assert_eq!(LeecherVerdict::classify(0, &settings("", "", false)), LeecherVerdict::LogTurbo);
        }

        #[test]
        fn test_verdict_status() {
            assert_eq!(LeecherVerdict::Warn.status(), UserStatus::PendingLeecher);
            assert_eq!(LeecherVerdict::Log.status(), UserStatus::PendingLeecher);
            assert_eq!(LeecherVerdict::WarnAndBan.status(), UserStatus::PendingTurboleecher);
            assert_eq!(LeecherVerdict::Ban.status(), UserStatus::PendingTurboleecher);
            assert_eq!(LeecherVerdict::WarnTurbo.status(), UserStatus::PendingTurboleecher);
            assert_eq!(LeecherVerdict::LogTurbo.status(), UserStatus::PendingTurboleecher);
        }

        #[test]
        fn test_verdict_describe() {
            assert_eq!(
                LeecherVerdict::Warn.describe("alice", 5, 1),
                "Leecher detected, alice is only sharing 5 files in 1 folders. Going to warn them after transfer"
            );
            assert!(LeecherVerdict::Ban.describe("bob", 0, 0).contains("let's ban them"));
        }
    }

    mod policy_summary_tests {
        use super::settings;
        use crate::tracker::enums::policy_summary::PolicySummary;

        #[test]
        fn test_policy_summary_table() {
            assert_eq!(PolicySummary::from_settings(&settings("", "", false)), PolicySummary::LogOnly);
            assert_eq!(PolicySummary::from_settings(&settings("", "ban", false)), PolicySummary::LogOnly);
            assert_eq!(PolicySummary::from_settings(&settings("", "", true)), PolicySummary::BanOnly);
            assert_eq!(PolicySummary::from_settings(&settings("", "ban", true)), PolicySummary::BanOnly);
            assert_eq!(PolicySummary::from_settings(&settings("warn", "", false)), PolicySummary::Warn);
            assert_eq!(PolicySummary::from_settings(&settings("warn", "ban", false)), PolicySummary::Warn);
            assert_eq!(PolicySummary::from_settings(&settings("warn", "", true)), PolicySummary::WarnAndBanSilently);
            assert_eq!(PolicySummary::from_settings(&settings("warn", "ban", true)), PolicySummary::WarnAndBan);
        }

        #[test]
        fn test_policy_summary_mentions_thresholds() {
            let mut warn = settings("warn", "ban", true);
            warn.min_files = 42;
            warn.min_folders = 3;
            let lines = PolicySummary::WarnAndBan.log_lines(&warn);
            assert_eq!(lines[0], "Ready to warn users that share less than 42 files in 3 shared public folders.");
            assert_eq!(lines[1], "Turbo leechers will be warned and banned.");
        }
    }

    mod lifecycle_tests {
        use super::settings;
        use crate::host::structs::replay_host::ReplayHost;
        use crate::tracker::enums::policy_summary::PolicySummary;
        use crate::tracker::structs::leecher_tracker::LeecherTracker;

        #[test]
        fn test_loaded_clamps_and_summarizes() {
            let mut config = settings("warn", "", false);
            config.min_folders = 0;
            let mut tracker = LeecherTracker::new(config);
            let mut host = ReplayHost::default();

            let summary = tracker.loaded_notification(&mut host);

            assert_eq!(summary, PolicySummary::Warn);
            assert_eq!(tracker.settings().min_folders, 1);
            assert_eq!(host.log_lines.len(), 2);
            assert!(host.log_lines[0].contains("100 files in 1 shared public folders"));
            assert!(host.actions.is_empty());
        }

        #[test]
        fn test_unloaded_returns_settings() {
            let mut config = settings("warn", "", false);
            config.detected_leechers.push("eve".to_string());
            let tracker = LeecherTracker::new(config.clone());
            let mut host = ReplayHost::default();

            let returned = tracker.unloaded_notification(&mut host);

            assert_eq!(returned, config);
            assert_eq!(host.log_lines.len(), 1);
            assert!(host.log_lines[0].starts_with("Session ended"));
        }
    }

    mod mock_host_tests {
        use mockall::Sequence;
        use mockall::predicate::eq;
        use super::settings;
        use crate::host::enums::stats_source::StatsSource;
        use crate::host::structs::user_stats::UserStats;
        use crate::host::traits::plugin_host::MockPluginHost;
        use crate::tracker::enums::user_status::UserStatus;
        use crate::tracker::structs::leecher_tracker::LeecherTracker;

        fn quiet_host() -> MockPluginHost {
            let mut host = MockPluginHost::new();
            host.expect_log().return_const(());
            host.expect_is_buddy().return_const(false);
            host
        }

        #[test]
        fn test_upload_queued_requests_stats_for_watched_user() {
            let mut host = quiet_host();
            host.expect_is_watched().with(eq("alice")).times(1).return_const(true);
            host.expect_request_user_stats().with(eq("alice")).times(1).return_const(());
            let mut tracker = LeecherTracker::new(settings("warn", "ban", true));

            tracker.upload_queued_notification(&mut host, "alice");
            tracker.upload_queued_notification(&mut host, "alice");

            assert_eq!(tracker.status("alice"), Some(UserStatus::RequestingStats));
        }

        #[test]
        fn test_upload_queued_leaves_unwatched_user_to_host() {
            let mut host = quiet_host();
            host.expect_is_watched().with(eq("alice")).times(1).return_const(false);
            host.expect_request_user_stats().times(0);
            let mut tracker = LeecherTracker::new(settings("warn", "ban", true));

            tracker.upload_queued_notification(&mut host, "alice");

            assert_eq!(tracker.status("alice"), Some(UserStatus::RequestingStats));
        }

        #[test]
        fn test_turbo_leecher_ban_message_then_single_ban() {
            let mut host = quiet_host();
            let mut seq = Sequence::new();
            host.expect_is_watched().return_const(false);
            host.expect_request_user_shares().with(eq("bob")).times(1).return_const(());
            host.expect_send_private()
                .with(eq("bob"), eq("You share nothing"), eq(false), eq(false))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
            host.expect_send_private()
                .with(eq("bob"), eq("Minimum is 100 files in 1 folders"), eq(false), eq(false))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
            host.expect_ban_user().with(eq("bob")).times(1).in_sequence(&mut seq).return_const(());

            let mut tracker = LeecherTracker::new(settings(
                "warn",
                "You share nothing\nMinimum is %files% files in %folders% folders",
                true,
            ));
            let zero = |source| UserStats { files: 0, folders: 0, source };

            tracker.upload_queued_notification(&mut host, "bob");
            tracker.user_stats_notification(&mut host, "bob", &zero(StatsSource::Server));
            tracker.user_stats_notification(&mut host, "bob", &zero(StatsSource::Peer));
            assert_eq!(tracker.status("bob"), Some(UserStatus::PendingTurboleecher));

            tracker.upload_finished_notification(&mut host, "bob");
            tracker.upload_finished_notification(&mut host, "bob");

            assert_eq!(tracker.status("bob"), Some(UserStatus::ProcessedLeecher));
            assert_eq!(tracker.get_stats().users_banned, 1);
            assert_eq!(tracker.get_stats().messages_sent, 2);
        }

        #[test]
        fn test_buddy_accepted_without_outbound_calls() {
            let mut host = MockPluginHost::new();
            host.expect_log().return_const(());
            host.expect_is_watched().return_const(false);
            host.expect_is_buddy().with(eq("carol")).return_const(true);
            host.expect_request_user_shares().times(0);
            host.expect_send_private().times(0);
            host.expect_ban_user().times(0);
            let mut tracker = LeecherTracker::new(settings("warn", "ban", true));

            tracker.upload_queued_notification(&mut host, "carol");
            tracker.user_stats_notification(&mut host, "carol", &UserStats { files: 0, folders: 0, source: StatsSource::Server });
            tracker.upload_finished_notification(&mut host, "carol");

            assert_eq!(tracker.status("carol"), Some(UserStatus::Okay));
            assert_eq!(tracker.get_stats().buddies_exempted, 1);
        }
    }

    mod property_tests {
        use proptest::prelude::*;
        use crate::config::structs::leecher_settings::LeecherSettings;
        use crate::host::enums::host_event::HostEvent;
        use crate::host::enums::stats_source::StatsSource;
        use crate::host::structs::replay_host::ReplayHost;
        use crate::tracker::enums::user_status::UserStatus;
        use crate::tracker::structs::leecher_tracker::LeecherTracker;

        fn source() -> impl Strategy<Value = StatsSource> {
            prop_oneof![Just(StatsSource::Server), Just(StatsSource::Peer)]
        }

        fn any_event(user: &'static str) -> impl Strategy<Value = HostEvent> {
            prop_oneof![
                (0u64..500, 0u64..10, source()).prop_map(move |(files, folders, source)| HostEvent::user_stats(user, files, folders, source)),
                Just(HostEvent::upload_finished(user)),
            ]
        }

        proptest! {
            #[test]
            fn sufficient_user_ends_okay_in_any_order(
                files in 100u64..10_000,
                folders in 1u64..100,
                stale in proptest::collection::vec(any::<bool>(), 0..6),
                peer_position in 0usize..7,
            ) {
                let mut tracker = LeecherTracker::new(LeecherSettings::default());
                let mut host = ReplayHost::default();
                tracker.upload_queued_notification(&mut host, "alice");

                // Server updates are either current or stale zeros; one peer answer is mixed in.
                let mut events: Vec<HostEvent> = stale.iter().map(|zero| {
                    if *zero {
                        HostEvent::user_stats("alice", 0, 0, StatsSource::Server)
                    } else {
                        HostEvent::user_stats("alice", files, folders, StatsSource::Server)
                    }
                }).collect();
                let position = peer_position.min(events.len());
                events.insert(position, HostEvent::user_stats("alice", files, folders, StatsSource::Peer));

                for event in events.iter() {
                    tracker.dispatch(&mut host, event);
                }

                prop_assert_eq!(tracker.status("alice"), Some(UserStatus::Okay));
                prop_assert_eq!(host.messages_to("alice").len(), 0);
                prop_assert_eq!(host.bans_of("alice"), 0);
            }

            #[test]
            fn unqueued_user_is_never_tracked(events in proptest::collection::vec(any_event("mallory"), 0..12)) {
                let mut tracker = LeecherTracker::new(LeecherSettings::default());
                let mut host = ReplayHost::default();

                for event in events.iter() {
                    tracker.dispatch(&mut host, event);
                }

                prop_assert!(tracker.tracked_users().is_empty());
                prop_assert!(host.actions.is_empty());
            }

            #[test]
            fn buddy_always_okay(files in 0u64..500, folders in 0u64..10, source in source()) {
                let mut tracker = LeecherTracker::new(LeecherSettings::default());
                let mut host = ReplayHost::new(vec!["buddy".to_string()], vec![]);

                tracker.dispatch(&mut host, &HostEvent::upload_queued("buddy"));
                tracker.dispatch(&mut host, &HostEvent::user_stats("buddy", files, folders, source));
                tracker.dispatch(&mut host, &HostEvent::upload_finished("buddy"));

                prop_assert_eq!(tracker.status("buddy"), Some(UserStatus::Okay));
                prop_assert!(host.actions.is_empty());
            }
        }
    }
}
