#[cfg(test)]
mod common_tests {
    mod render_template_tests {
        use crate::common::common::render_template;

        fn thresholds() -> Vec<(&'static str, String)> {
            vec![("%files%", "100".to_string()), ("%folders%", "3".to_string())]
        }

        #[test]
        fn test_render_single_line() {
            let lines = render_template("Share more! %files%/%folders%", &thresholds());
            assert_eq!(lines, vec!["Share more! 100/3".to_string()]);
        }

        #[test]
        fn test_render_keeps_line_order() {
            let lines = render_template("first %files%\nsecond\nthird %folders%", &thresholds());
            assert_eq!(lines, vec![
                "first 100".to_string(),
                "second".to_string(),
                "third 3".to_string(),
            ]);
        }

        #[test]
        fn test_render_repeated_placeholder() {
            let lines = render_template("%files% %files% %folders%", &thresholds());
            assert_eq!(lines, vec!["100 100 3".to_string()]);
        }

        #[test]
        fn test_render_without_placeholders() {
            let lines = render_template("Thanks :)", &thresholds());
            assert_eq!(lines, vec!["Thanks :)".to_string()]);
        }

        #[test]
        fn test_render_empty_template() {
            assert!(render_template("", &thresholds()).is_empty());
        }

        #[test]
        fn test_render_unknown_token_untouched() {
            let lines = render_template("%users% and %files%", &thresholds());
            assert_eq!(lines, vec!["%users% and 100".to_string()]);
        }
    }

    mod log_level_tests {
        use crate::common::common::parse_log_level;

        #[test]
        fn test_known_levels() {
            assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
            assert_eq!(parse_log_level("trace").unwrap(), log::LevelFilter::Trace);
            assert_eq!(parse_log_level("debug").unwrap(), log::LevelFilter::Debug);
            assert_eq!(parse_log_level("info").unwrap(), log::LevelFilter::Info);
            assert_eq!(parse_log_level("warn").unwrap(), log::LevelFilter::Warn);
            assert_eq!(parse_log_level("error").unwrap(), log::LevelFilter::Error);
        }

        #[test]
        fn test_unknown_level() {
            let error = parse_log_level("verbose").unwrap_err();
            assert!(error.to_string().contains("verbose"));
        }
    }
}
