//! Country name → ISO 3166-1 alpha-3 code.
//!
//! Covers every team that has reached a final. Kept in sync with the
//! finals table by hand; a country missing here is left off the map.

pub const COUNTRY_CODES: [(&str, &str); 13] = [
    ("Uruguay", "URY"),
    ("Italy", "ITA"),
    ("Germany", "DEU"),
    ("Brazil", "BRA"),
    ("England", "GBR"),
    ("Argentina", "ARG"),
    ("France", "FRA"),
    ("Spain", "ESP"),
    ("Croatia", "HRV"),
    ("Sweden", "SWE"),
    ("Netherlands", "NLD"),
    ("Czechoslovakia", "CZE"),
    ("Hungary", "HUN"),
];

pub fn iso3_code(country: &str) -> Option<&'static str> {
    COUNTRY_CODES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finals::load_finals;
    use crate::tally::tally_wins;

    #[test]
    fn test_every_winner_has_code() {
        for entry in tally_wins(&load_finals()) {
            assert!(
                iso3_code(&entry.country).is_some(),
                "missing ISO-3 code for {}",
                entry.country
            );
        }
    }

    #[test]
    fn test_every_finalist_has_code() {
        for record in load_finals() {
            assert!(iso3_code(&record.winner).is_some());
            assert!(iso3_code(&record.runner_up).is_some());
        }
    }

    #[test]
    fn test_codes_are_three_upper_letters() {
        for (_, code) in COUNTRY_CODES {
            assert_eq!(code.len(), 3);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_unknown_country() {
        assert_eq!(iso3_code("West Germany"), None);
        assert_eq!(iso3_code("Atlantis"), None);
        assert_eq!(iso3_code("Germany"), Some("DEU"));
    }
}
