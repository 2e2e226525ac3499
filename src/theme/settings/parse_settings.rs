use crate::theme::parsing::{parse_bool, parse_size_list, strip_inline_comment};
use crate::theme::types::Settings;

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: Content of the settings file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - `key = value` lines; blank lines and `#`/`//` comments are skipped.
/// - Keys are case-insensitive and `.`/`-`/space are read as `_`.
/// - Unknown keys and unparsable values are ignored, leaving the default.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "page_size_options" | "page_sizes" | "rows_per_page_options" => {
                let sizes = parse_size_list(val);
                if !sizes.is_empty() {
                    settings.page_size_options = sizes;
                }
            }
            "default_page_size" | "page_size" | "rows" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.default_page_size = v;
                }
            }
            "persistent_selection" | "persist_selection" => {
                if let Some(b) = parse_bool(val) {
                    settings.persistent_selection = b;
                }
            }
            "bulk_select" | "bulk_select_enabled" => {
                if let Some(b) = parse_bool(val) {
                    settings.bulk_select = b;
                }
            }
            "api_url" | "catalog_url" => {
                if !val.is_empty() {
                    settings.api_url = val.to_string();
                }
            }
            "request_timeout_secs" | "timeout_secs" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.request_timeout_secs = v;
                }
            }
            _ => {
                tracing::debug!(key = %key, "ignoring unknown settings key");
            }
        }
    }
}
