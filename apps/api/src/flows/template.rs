//! Prompt template rendering.
//!
//! Placeholders are `{name}`. Substitution is a single left-to-right pass, so
//! text coming from a caller is never re-scanned for placeholders. Unknown
//! placeholders and stray braces are copied through unchanged.

/// Substitutes each `{name}` in `template` with the matching value from `bindings`.
pub fn render(template: &str, bindings: &[(&str, &str)]) -> String {
    let extra: usize = bindings.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let bound = after.find('}').and_then(|close| {
            let key = &after[..close];
            bindings
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (close, *value))
        });

        match bound {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
