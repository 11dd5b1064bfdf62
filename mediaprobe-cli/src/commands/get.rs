use anyhow::{Context, Result};
use mediaprobe_core::{MediaInformation, MediaInformationParser};

use crate::cli::{GetArgs, Scope, ValueKind};
use crate::config::NOT_PRESENT;
use crate::input::read_input;

/// Execute the `get` command
pub fn run_get(args: &GetArgs) -> Result<()> {
    let bytes = read_input(&args.input)?;
    let media_information = MediaInformationParser::from_json_bytes_with_error(&bytes)
        .with_context(|| format!("Failed to parse '{}'", args.input.display()))?;

    let rendered = lookup(&media_information, &args.key, args.scope, args.kind)?;
    println!("{}", rendered.as_deref().unwrap_or(NOT_PRESENT));
    Ok(())
}

/// Performs one lookup and renders the result, `None` when not present.
pub fn lookup(
    info: &MediaInformation,
    key: &str,
    scope: Scope,
    kind: ValueKind,
) -> Result<Option<String>> {
    let rendered = match (scope, kind) {
        (Scope::Format, ValueKind::Text) => info.string_format_property(key),
        (Scope::All, ValueKind::Text) => info.string_property(key),
        (Scope::Format, ValueKind::Number) => info.number_format_property(key).map(|n| n.to_string()),
        (Scope::All, ValueKind::Number) => info.number_property(key).map(|n| n.to_string()),
        (Scope::Format, ValueKind::Raw) => info
            .format_property(key)
            .map(serde_json::to_string_pretty)
            .transpose()?,
        (Scope::All, ValueKind::Raw) => info
            .property(key)
            .map(serde_json::to_string_pretty)
            .transpose()?,
    };

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MediaInformation {
        r#"{"format":{"duration":"12.500000","size":"2048","tags":{"title":"x"}},"streams":[{"index":0}]}"#
            .parse()
            .unwrap()
    }

    #[test]
    fn test_lookup_format_scope() {
        let info = sample();

        assert_eq!(
            lookup(&info, "duration", Scope::Format, ValueKind::Text).unwrap().as_deref(),
            Some("12.500000")
        );
        assert_eq!(
            lookup(&info, "duration", Scope::Format, ValueKind::Number).unwrap().as_deref(),
            Some("12")
        );
        assert_eq!(
            lookup(&info, "tags", Scope::Format, ValueKind::Raw).unwrap().as_deref(),
            Some("{\n  \"title\": \"x\"\n}")
        );
        assert!(lookup(&info, "bit_rate", Scope::Format, ValueKind::Text).unwrap().is_none());
    }

    #[test]
    fn test_lookup_all_scope() {
        let info = sample();

        assert!(lookup(&info, "duration", Scope::All, ValueKind::Text).unwrap().is_none());
        assert_eq!(
            lookup(&info, "streams", Scope::All, ValueKind::Text).unwrap().as_deref(),
            Some(r#"[{"index":0}]"#)
        );
        assert_eq!(
            lookup(&info, "streams", Scope::All, ValueKind::Number).unwrap().as_deref(),
            Some("0")
        );
    }
}
