use worldbank_api::DateSpec;

use crate::error::CliError;

pub const MAX_CODE_LENGTH: usize = 200;
pub const MAX_FILTER_LENGTH: usize = 40;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, CliError> {
    if input.len() > max_len {
        return Err(CliError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(CliError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a country or indicator code. `;`-separated lists (`USA;CHN`) and
/// `all` pass through; surrounding whitespace of each element is dropped.
pub fn validate_code(input: &str) -> Result<String, CliError> {
    let sanitized = sanitize_text(input, MAX_CODE_LENGTH)?;
    let parts: Vec<&str> = sanitized.split(';').map(str::trim).collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(CliError::InvalidInput(format!(
            "empty element in code list '{}'",
            input
        )));
    }
    Ok(parts.join(";"))
}

/// Validate a filter code such as a region (`EAS`), income level (`HIC`),
/// lending type (`IDX`), or source id (`2`). Returned uppercased.
pub fn validate_filter(input: &str) -> Result<String, CliError> {
    let sanitized = sanitize_text(input, MAX_FILTER_LENGTH)?;
    if !sanitized
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(CliError::InvalidInput(format!(
            "unexpected characters in filter code '{}'",
            input
        )));
    }
    Ok(sanitized.to_uppercase())
}

/// Validate a `--date` value: a year (`2020`), month (`2012M01`), quarter
/// (`2013Q1`), or a range of one of those (`2000:2010`, `2012M01:2012M08`).
pub fn validate_date(input: &str) -> Result<DateSpec, CliError> {
    input
        .parse::<DateSpec>()
        .map_err(|e| CliError::InvalidInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_controls() {
        assert_eq!(sanitize_text(" US\tA\n", 10).unwrap(), "USA");
        assert!(sanitize_text("\n\t", 10).is_err());
        assert!(sanitize_text("toolong", 3).is_err());
    }

    #[test]
    fn test_validate_code_lists() {
        assert_eq!(validate_code("USA").unwrap(), "USA");
        assert_eq!(validate_code(" USA ; CHN ").unwrap(), "USA;CHN");
        assert_eq!(validate_code("NY.GDP.MKTP.CD").unwrap(), "NY.GDP.MKTP.CD");
        assert!(validate_code("USA;;CHN").is_err());
        assert!(validate_code("").is_err());
    }

    #[test]
    fn test_validate_filter() {
        assert_eq!(validate_filter("eas").unwrap(), "EAS");
        assert_eq!(validate_filter("2").unwrap(), "2");
        assert!(validate_filter("EAS&x=1").is_err());
        assert!(validate_filter("a b").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date("2020").unwrap(), DateSpec::year(2020));
        assert_eq!(validate_date("2000:2010").unwrap(), DateSpec::years(2000, 2010));
        assert_eq!(
            validate_date("2012M01:2012M08").unwrap().to_string(),
            "2012M01:2012M08"
        );
        assert_eq!(validate_date("2013Q1").unwrap().to_string(), "2013Q1");
        assert!(validate_date("2012M01:2013Q1").is_err());
        let err = validate_date("last year").unwrap_err();
        assert!(err.to_string().starts_with("Invalid input:"));
    }
}
