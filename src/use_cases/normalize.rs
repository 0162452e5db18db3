use crate::domain::entities::{BadgeRequest, NormalizedIdentity};

// Fallback display name when the caller did not provide one.
const DEFAULT_NAME: &str = "Guest";

// Suffix appended to every derived attachment filename.
const FILENAME_SUFFIX: &str = "_badge.png";

// Applies the defaulting rules to a validated request. Pure and total: two
// identical requests always normalize to the same identity.
pub fn normalize(request: BadgeRequest) -> NormalizedIdentity {
    let name = match request.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => DEFAULT_NAME.to_string(),
    };
    let photo_url = request.photo_url.filter(|url| !url.trim().is_empty());

    NormalizedIdentity {
        name,
        email: request.email,
        photo_url,
    }
}

// Derives the attachment filename from the badge holder's name: lower-cased,
// whitespace runs collapsed to single underscores.
pub fn attachment_filename(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let base = lowered.split_whitespace().collect::<Vec<_>>().join("_");
    let base = if base.is_empty() {
        DEFAULT_NAME.to_lowercase()
    } else {
        base
    };

    format!("{base}{FILENAME_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, photo_url: Option<&str>) -> BadgeRequest {
        BadgeRequest {
            email: "jane@example.com".to_string(),
            name: name.map(str::to_string),
            photo_url: photo_url.map(str::to_string),
        }
    }

    #[test]
    fn when_name_is_absent_then_identity_defaults_to_guest() {
        let identity = normalize(request(None, None));

        assert_eq!(identity.name, "Guest");
        assert_eq!(identity.photo_url, None);
    }

    #[test]
    fn when_name_is_blank_then_identity_defaults_to_guest() {
        let identity = normalize(request(Some("   "), None));

        assert_eq!(identity.name, "Guest");
    }

    #[test]
    fn when_name_is_present_then_it_is_kept_verbatim() {
        let identity = normalize(request(Some("Jane Doe"), None));

        assert_eq!(identity.name, "Jane Doe");
    }

    #[test]
    fn when_photo_url_is_empty_then_identity_has_no_photo() {
        let identity = normalize(request(Some("Jane"), Some("")));

        assert_eq!(identity.photo_url, None);
    }

    #[test]
    fn when_photo_url_is_present_then_it_is_kept() {
        let identity = normalize(request(None, Some("https://example.com/p.png")));

        assert_eq!(
            identity.photo_url.as_deref(),
            Some("https://example.com/p.png")
        );
    }

    #[test]
    fn when_request_is_normalized_then_email_is_copied_verbatim() {
        let identity = normalize(request(None, None));

        assert_eq!(identity.email, "jane@example.com");
    }

    #[test]
    fn when_name_has_single_spaces_then_filename_uses_underscores() {
        assert_eq!(attachment_filename("Jane Doe"), "jane_doe_badge.png");
    }

    #[test]
    fn when_name_has_irregular_whitespace_then_runs_collapse_to_one_underscore() {
        assert_eq!(
            attachment_filename("  Jane   Q \t Doe "),
            "jane_q_doe_badge.png"
        );
    }

    #[test]
    fn when_name_is_the_guest_default_then_filename_base_is_guest() {
        assert_eq!(attachment_filename("Guest"), "guest_badge.png");
    }

    #[test]
    fn when_name_is_blank_then_filename_base_falls_back_to_guest() {
        assert_eq!(attachment_filename("   "), "guest_badge.png");
    }
}
