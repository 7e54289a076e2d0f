use ppin_core::errors::{ErrorInfo, NetError};

/// Splits a comma-separated interaction string into its two node names.
///
/// Exactly two fields are required. Surrounding whitespace is left on the
/// fields; the network trims it during name validation.
pub(crate) fn split_interaction(text: &str) -> Result<(&str, &str), NetError> {
    let mut fields = text.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(one), Some(two), None) => Ok((one, two)),
        _ => Err(NetError::Parse(
            ErrorInfo::new(
                "malformed-interaction",
                "interaction must contain exactly two comma-separated node names",
            )
            .with_context("fields", text.split(',').count().to_string())
            .with_hint("expected a value such as \"P12459,P60879\""),
        )),
    }
}

/// Splits one bulk-load record into its two tab-separated fields.
pub(crate) fn split_record<'a>(
    line: &'a str,
    source: &str,
    number: usize,
) -> Result<(&'a str, &'a str), NetError> {
    let mut fields = line.split('\t');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(one), Some(two), None) => Ok((one, two)),
        _ => Err(NetError::Parse(
            ErrorInfo::new(
                "malformed-record",
                "record must contain exactly two tab-separated fields",
            )
            .with_context("source", source)
            .with_context("line", number.to_string())
            .with_context("fields", line.split('\t').count().to_string()),
        )),
    }
}
