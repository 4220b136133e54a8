//! Log-safe renderings of personal data.

/// Mask the local part of an email address, keeping its first character.
pub(crate) fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}@{domain}")
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn keeps_first_character_and_domain() {
        assert_eq!(mask_email("admin@newsx.dev"), "a***@newsx.dev");
        assert_eq!(mask_email("x@newsx.dev"), "***@newsx.dev");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    #[test]
    fn multibyte_local_parts_do_not_panic() {
        assert_eq!(mask_email("émile@newsx.dev"), "é***@newsx.dev");
    }
}
