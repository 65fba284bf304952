use std::convert::Infallible;
use std::time::Duration;

/// Count coercion never fails: non-numeric, negative, and zero input all
/// fall back to a single request.
pub(crate) fn parse_count(s: &str) -> Result<u64, Infallible> {
    Ok(s.trim()
        .parse::<u64>()
        .ok()
        .filter(|count| *count >= 1)
        .unwrap_or(1))
}

pub(crate) fn parse_duration_ms(s: &str) -> Result<Duration, String> {
    let millis: u64 = s
        .trim()
        .parse()
        .map_err(|err| format!("Invalid milliseconds value: {}", err))?;
    if millis == 0 {
        return Err("Timeout must be >= 1 ms".to_owned());
    }
    Ok(Duration::from_millis(millis))
}
