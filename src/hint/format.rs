//! Explanation template rendering
//!
//! Templates contain `{{name}}` placeholders. The template is split on the
//! opening marker only; each fragment after the first is matched against the
//! variables in insertion order and the first variable whose `name}}` is a
//! prefix of the fragment wins, so overlapping names resolve by insertion
//! order rather than by longest match. Unresolved placeholders stay in the
//! output verbatim.

const OPEN_MARKER: &str = "{{";
const CLOSE_MARKER: &str = "}}";

/// Render `template` with the given ordered variables
pub fn format_template(template: &str, vars: &[(String, String)]) -> String {
    let mut rendered = String::with_capacity(template.len());

    for (i, fragment) in template.split(OPEN_MARKER).enumerate() {
        if i == 0 {
            rendered.push_str(fragment);
            continue;
        }

        let replacement = vars.iter().find_map(|(name, value)| {
            fragment
                .strip_prefix(name.as_str())
                .and_then(|rest| rest.strip_prefix(CLOSE_MARKER))
                .map(|rest| (value, rest))
        });

        match replacement {
            Some((value, rest)) => {
                rendered.push_str(value);
                rendered.push_str(rest);
            }
            None => {
                rendered.push_str(OPEN_MARKER);
                rendered.push_str(fragment);
            }
        }
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        assert_eq!(
            format_template("Error: {{msg}}", &vars(&[("msg", "boom")])),
            "Error: boom"
        );
    }

    #[test]
    fn test_missing_variable_keeps_placeholder() {
        assert_eq!(format_template("Error: {{msg}}", &[]), "Error: {{msg}}");
    }

    #[test]
    fn test_multiple_placeholders() {
        let rendered = format_template(
            "This is an explanation for {{name}} which contains {{amount}} placeholders, \
             including one {{invalid}} one.",
            &vars(&[("name", "the compose testsuite"), ("amount", "3")]),
        );
        assert_eq!(
            rendered,
            "This is an explanation for the compose testsuite which contains 3 placeholders, \
             including one {{invalid}} one."
        );
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(
            format_template("{{x}} and {{x}}", &vars(&[("x", "y")])),
            "y and y"
        );
    }

    #[test]
    fn test_first_fragment_is_literal() {
        assert_eq!(
            format_template("msg}} {{msg}}", &vars(&[("msg", "v")])),
            "msg}} v"
        );
    }

    #[test]
    fn test_prefix_names_resolve_when_followed_by_marker() {
        // `id}}` is not a prefix of `id2}}`
        assert_eq!(
            format_template("{{id2}}/{{id}}", &vars(&[("id", "a"), ("id2", "b")])),
            "b/a"
        );
    }

    #[test]
    fn test_first_inserted_overlapping_name_wins() {
        let rendered = format_template("{{a}}x}}", &vars(&[("a", "1"), ("a}}x", "2")]));
        assert_eq!(rendered, "1x}}");

        let rendered = format_template("{{a}}x}}", &vars(&[("a}}x", "2"), ("a", "1")]));
        assert_eq!(rendered, "2");
    }

    #[test]
    fn test_text_without_placeholders() {
        assert_eq!(format_template("plain text", &vars(&[("a", "b")])), "plain text");
    }

    #[test]
    fn test_stray_closing_marker() {
        assert_eq!(format_template("a }} b", &[]), "a }} b");
    }
}
