// Platform suffixes admitted regardless of the configured allow-list.
const ALLOWED_SUFFIXES: [&str; 2] = [".vercel.app", ".vercel.com"];

// Local-dev markers matched as substrings anywhere in the origin. This
// admits any origin that embeds a marker, which is the behavior deployed
// frontends rely on today; tightening it is a breaking change.
const LOCAL_MARKERS: [&str; 2] = ["localhost", "127.0.0.1"];

// Admission policy for browser origins. Built once at startup from the
// configuration snapshot and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct OriginPolicy {
    exact: Vec<String>,
}

impl OriginPolicy {
    pub fn new(exact: Vec<String>) -> Self {
        Self { exact }
    }

    // Exact entries first, then platform suffixes, then local markers.
    pub fn admits(&self, origin: &str) -> bool {
        self.exact.iter().any(|allowed| allowed == origin)
            || ALLOWED_SUFFIXES
                .iter()
                .any(|suffix| origin.ends_with(suffix))
            || LOCAL_MARKERS.iter().any(|marker| origin.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> OriginPolicy {
        OriginPolicy::new(vec!["https://frontend.example".to_string()])
    }

    #[test]
    fn when_origin_matches_an_exact_entry_then_it_is_admitted() {
        assert!(policy().admits("https://frontend.example"));
    }

    #[test]
    fn when_origin_differs_from_exact_entry_by_scheme_then_it_is_rejected() {
        assert!(!policy().admits("http://frontend.example"));
    }

    #[test]
    fn when_origin_ends_with_vercel_app_then_it_is_admitted() {
        assert!(policy().admits("https://myapp.vercel.app"));
    }

    #[test]
    fn when_origin_ends_with_vercel_com_then_it_is_admitted() {
        assert!(policy().admits("https://preview.vercel.com"));
    }

    #[test]
    fn when_origin_contains_localhost_then_it_is_admitted() {
        assert!(policy().admits("http://localhost:5173"));
    }

    #[test]
    fn when_origin_contains_loopback_address_then_it_is_admitted() {
        assert!(policy().admits("http://127.0.0.1:3000"));
    }

    #[test]
    fn when_origin_matches_no_rule_then_it_is_rejected() {
        assert!(!policy().admits("https://evil.com"));
    }

    #[test]
    fn when_origin_embeds_a_local_marker_in_its_hostname_then_it_is_admitted() {
        // Documents the substring semantics: the marker does not have to be
        // the actual host for the origin to pass.
        assert!(policy().admits("https://localhost.evil.com"));
    }

    #[test]
    fn when_exact_list_is_empty_then_suffix_rules_still_apply() {
        let policy = OriginPolicy::new(Vec::new());
        assert!(policy.admits("https://other.vercel.app"));
        assert!(!policy.admits("https://evil.com"));
    }
}
