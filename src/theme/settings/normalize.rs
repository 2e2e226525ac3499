use crate::theme::types::Settings;

/// What: Bring parsed settings into a consistent state.
///
/// Inputs:
/// - `settings`: Settings after parsing.
///
/// Details:
/// - Page-size choices are sorted and deduplicated; an empty list falls back to `[12]`.
/// - A default page size outside the choices snaps to the first choice.
/// - A blank API URL falls back to the public endpoint.
pub fn normalize(settings: &mut Settings) {
    settings.page_size_options.retain(|&n| n > 0);
    settings.page_size_options.sort_unstable();
    settings.page_size_options.dedup();
    if settings.page_size_options.is_empty() {
        settings.page_size_options.push(12);
    }
    if !settings
        .page_size_options
        .contains(&settings.default_page_size)
    {
        settings.default_page_size = settings.page_size_options[0];
    }
    if settings.api_url.trim().is_empty() {
        settings.api_url = crate::sources::DEFAULT_API_URL.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_size_snaps_into_choices() {
        let mut s = Settings {
            page_size_options: vec![25, 10, 10],
            default_page_size: 12,
            ..Settings::default()
        };
        normalize(&mut s);
        assert_eq!(s.page_size_options, vec![10, 25]);
        assert_eq!(s.default_page_size, 10);
    }

    #[test]
    fn empty_choices_fall_back() {
        let mut s = Settings {
            page_size_options: Vec::new(),
            api_url: "  ".into(),
            ..Settings::default()
        };
        normalize(&mut s);
        assert_eq!(s.page_size_options, vec![12]);
        assert_eq!(s.default_page_size, 12);
        assert_eq!(s.api_url, crate::sources::DEFAULT_API_URL);
    }
}
