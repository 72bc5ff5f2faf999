/// Renders an ISO-8601 timestamp as `YYYY/MM/DD` (fixed format, no locale
/// lookup in the browser). Unrecognized input is returned unchanged.
pub(crate) fn format_date(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [y, m, d] if !y.is_empty() && !m.is_empty() && !d.is_empty() => {
            format!("{y}/{m}/{d}")
        }
        _ => iso.to_string(),
    }
}

/// Card preview: the first `max_chars` scalar values of the content, with a
/// trailing ellipsis when truncated.
pub(crate) fn content_preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let truncated: String = content.chars().take(max_chars).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_from_iso_timestamp() {
        assert_eq!(format_date("2024-01-15T10:30:00"), "2024/01/15");
        assert_eq!(format_date("2024-01-15T10:30:00.123456"), "2024/01/15");
    }

    #[test]
    fn format_date_from_bare_date() {
        assert_eq!(format_date("2024-01-15"), "2024/01/15");
    }

    #[test]
    fn format_date_passes_through_garbage() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn preview_truncates_long_content() {
        let long = "x".repeat(200);
        let preview = content_preview(&long, 150);
        assert_eq!(preview.chars().count(), 153);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_keeps_short_content_intact() {
        assert_eq!(content_preview("short", 150), "short");
    }

    #[test]
    fn preview_counts_chars_not_bytes() {
        let long = "あ".repeat(151);
        let preview = content_preview(&long, 150);
        assert_eq!(preview.chars().count(), 153);
    }
}
