/// Client-side checks for the contact form. The site has no submission
/// backend, so these messages are the whole error surface.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Loose structural email check: one `@`, a non-empty local part, and a
/// domain with a final all-alphabetic label of at least two characters.
pub fn looks_like_email(s: &str) -> bool {
    let s = s.trim();
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    let tld = match labels.next_back() {
        Some(t) => t,
        None => return false,
    };
    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return false;
    }
    let has_dot = domain.contains('.');
    has_dot
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
        && labels.all(|l| !l.is_empty())
}

pub fn validate_contact(name: &str, email: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if name.trim().is_empty() {
        errors.name = Some("Name is required");
    }
    if email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !looks_like_email(email) {
        errors.email = Some("Invalid email address");
    }
    if message.trim().is_empty() {
        errors.message = Some("Message is required");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for ok in [
            "parent@example.com",
            "first.last@school.edu",
            "a+tag@sub.domain.org",
            "  padded@example.com  ",
        ] {
            assert!(looks_like_email(ok), "rejected {ok:?}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "plainaddress",
            "@no-local.com",
            "two@@ats.com",
            "spaces in@mail.com",
            "nodot@domain",
            "trailing@dot.",
            "double@dot..com",
            "numeric-tld@host.123",
        ] {
            assert!(!looks_like_email(bad), "accepted {bad:?}");
        }
    }

    #[test]
    fn all_fields_required_except_phone() {
        let errors = validate_contact("", "", "");
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.message, Some("Message is required"));
    }

    #[test]
    fn bad_email_gets_its_own_message() {
        let errors = validate_contact("Amina", "not-an-email", "Salaam");
        assert_eq!(errors.email, Some("Invalid email address"));
        assert!(errors.name.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn valid_input_passes_clean() {
        let errors = validate_contact("Amina", "amina@example.com", "Visit request");
        assert!(errors.is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let errors = validate_contact("  ", "parent@example.com", "\t\n");
        assert!(errors.name.is_some());
        assert!(errors.message.is_some());
    }
}
