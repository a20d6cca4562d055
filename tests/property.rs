// tests/property.rs

use proptest::prelude::*;

use phaserun::config::BuildContext;

proptest! {
    /// The flat rendering is always the literal concatenation
    /// `{src_root}/{script_name} {action} {project_name}`, for any values,
    /// including ones containing spaces or shell metacharacters.
    #[test]
    fn command_line_matches_literal_concatenation(
        src_root in ".*",
        script_name in ".*",
        action in ".*",
        project_name in ".*",
    ) {
        let context = BuildContext {
            src_root: src_root.clone(),
            script_name: script_name.clone(),
            action: action.clone(),
            project_name: project_name.clone(),
        };

        let expected = format!("{src_root}/{script_name} {action} {project_name}");
        prop_assert_eq!(context.command().command_line(), expected);
    }

    /// Composition never reorders or merges tokens: the program is the
    /// slash-join of root and script, the argv is exactly [action, project].
    #[test]
    fn composition_keeps_token_order(
        src_root in ".*",
        script_name in ".*",
        action in ".*",
        project_name in ".*",
    ) {
        let context = BuildContext {
            src_root: src_root.clone(),
            script_name: script_name.clone(),
            action: action.clone(),
            project_name: project_name.clone(),
        };

        let spec = context.command();
        prop_assert_eq!(spec.program, format!("{src_root}/{script_name}"));
        prop_assert_eq!(spec.args, vec![action, project_name]);
    }
}
