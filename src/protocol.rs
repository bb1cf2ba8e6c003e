//! IANA protocol numbers understood by the classifier.
//!
//! Changing this table changes report output, so entries are only ever added
//! deliberately.

/// Protocol number to canonical lowercase name.
pub static PROTOCOL_NAMES: [(&str, &str); 6] = [
    ("6", "tcp"),
    ("17", "udp"),
    ("1", "icmp"),
    ("50", "esp"),
    ("47", "gre"),
    ("58", "icmpv6"),
];

/// Resolves a protocol number as it appears in a flow log. Numbers without
/// an entry pass through unchanged.
pub fn protocol_name(number: &str) -> &str {
    PROTOCOL_NAMES
        .iter()
        .find(|&&(known, _)| known == number)
        .map_or(number, |&(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_numbers() {
        assert_eq!(protocol_name("6"), "tcp");
        assert_eq!(protocol_name("17"), "udp");
        assert_eq!(protocol_name("1"), "icmp");
        assert_eq!(protocol_name("50"), "esp");
        assert_eq!(protocol_name("47"), "gre");
        assert_eq!(protocol_name("58"), "icmpv6");
    }

    #[test]
    fn unknown_numbers_pass_through() {
        assert_eq!(protocol_name("999"), "999");
        assert_eq!(protocol_name("06"), "06");
        assert_eq!(protocol_name(""), "");
    }
}
