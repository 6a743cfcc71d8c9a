use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Supports an optional default via `{{ env.VAR | default("fallback") }}`:
/// when the variable is unset the default is used instead of returning an
/// error. Comment lines are passed through unchanged
pub fn expand_env(input: &str) -> Result<String, String> {
    expand_with(input, |name| std::env::var(name).ok())
}

fn expand_with(
    input: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
                .expect("must be valid regex")
        })
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;
        for captures in re().captures_iter(line) {
            let overall = captures.get(0).expect("match always has a full capture");
            let var_name = captures
                .get(1)
                .expect("match always has a variable name")
                .as_str();
            let default_value = captures.get(2).map(|m| m.as_str());

            output.push_str(&line[last_end..overall.start()]);

            match lookup(var_name) {
                Some(value) => output.push_str(&value),
                None => match default_value {
                    Some(default) => output.push_str(default),
                    None => {
                        return Err(format!("environment variable not found: `{var_name}`"));
                    }
                },
            }

            last_end = overall.end();
        }
        output.push_str(&line[last_end..]);
    }

    // `lines()` eats a final newline, keep the expansion shape-preserving
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
