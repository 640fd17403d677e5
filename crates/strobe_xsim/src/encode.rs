//! Encoding of generic values into command-line tokens.

use strobe_backend::GenericValue;

/// Renders a generic value as the token embedded into a `name=value` pair.
///
/// First matching rule wins:
///
/// 1. a value containing a space passes through unmodified — this layer adds
///    no quoting, callers embedding the whole pair compensate;
/// 2. a value containing a comma is wrapped in double quotes so xelab does
///    not split it;
/// 3. anything else passes through unmodified.
///
/// Rule 1 is long-standing observable behavior that downstream projects
/// depend on; changing it would need an explicit migration, not a quiet fix.
pub fn encode_generic(value: &GenericValue) -> String {
    let text = value.to_string();
    if text.contains(' ') {
        return text;
    }
    if text.contains(',') {
        return format!("\"{text}\"");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_with_space_is_unchanged() {
        let value = GenericValue::Str("a b".to_string());
        assert_eq!(encode_generic(&value), "a b");
    }

    #[test]
    fn value_with_comma_is_quoted() {
        let value = GenericValue::Str("a,b".to_string());
        assert_eq!(encode_generic(&value), "\"a,b\"");
    }

    #[test]
    fn plain_value_is_unchanged() {
        let value = GenericValue::Str("ab".to_string());
        assert_eq!(encode_generic(&value), "ab");
    }

    #[test]
    fn bool_encodes_canonical_token() {
        assert_eq!(encode_generic(&GenericValue::Bool(true)), "true");
        assert_eq!(encode_generic(&GenericValue::Bool(false)), "false");
    }

    #[test]
    fn integer_encodes_decimal() {
        assert_eq!(encode_generic(&GenericValue::Integer(5)), "5");
    }

    #[test]
    fn time_literal_with_space_is_unchanged() {
        let value = GenericValue::Time("10 ns".to_string());
        assert_eq!(encode_generic(&value), "10 ns");
    }

    #[test]
    fn space_rule_wins_over_comma_rule() {
        let value = GenericValue::Str("a, b".to_string());
        assert_eq!(encode_generic(&value), "a, b");
    }
}
