// tests/property_messages.rs

use proptest::prelude::*;
use vmcli_wrapper::errors::CommandFailed;
use vmcli_wrapper::exec::{OutputCollector, LINE_ENDING};

proptest! {
    #[test]
    fn failure_message_names_arguments_and_exit_code(
        args in prop::collection::vec("[A-Za-z0-9_.-]{1,12}", 0..6),
        code in prop_oneof![-255i32..0, 1i32..256],
        error in "[a-z ]{0,40}",
    ) {
        let failed = CommandFailed::new(code, args.clone(), "", error.clone());
        let message = failed.to_string();

        let expected_suffix = format!(" (Arguments: {}, Exit code: {})", args.join(" "), code);
        prop_assert!(message.ends_with(&expected_suffix));

        if error.trim().is_empty() {
            prop_assert!(message.starts_with("vmcli returned a non-zero exit code without any error text."));
        } else {
            prop_assert!(message.starts_with("vmcli returns one or more error: "));
            prop_assert!(message.contains(error.trim().trim_end_matches('.')));
        }
    }

    #[test]
    fn refined_error_has_no_line_breaks(
        lines in prop::collection::vec("[a-z]{1,10}\\.?", 1..5),
    ) {
        let error = lines.join("\r\n");
        let failed = CommandFailed::new(1, ["x"], "", error);
        let message = failed.to_string();

        prop_assert!(!message.contains('\n'));
        prop_assert!(!message.contains('\r'));
        prop_assert!(!message.contains(".."));
    }

    #[test]
    fn collector_joins_lines_with_terminator(
        lines in prop::collection::vec("[^\r\n]{0,20}", 0..50),
    ) {
        let mut collector = OutputCollector::new();
        for line in &lines {
            collector.receive(line);
        }

        let expected: String = lines.iter().map(|l| format!("{l}{LINE_ENDING}")).collect();
        prop_assert_eq!(collector.finalize(), expected.clone());
        prop_assert_eq!(collector.finalize(), expected);
    }
}
