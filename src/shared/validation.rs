use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating programme codes
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "genie-logiciel", "informatique", "gti420"
    /// - Invalid: "-genie", "genie-", "genie--log", "Genie", "genie_log"
    pub static ref PROGRAMME_CODE_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Regex for validating session values on posted offers
    /// - Valid: "hiver", "ete", "automne" (any casing)
    pub static ref SESSION_REGEX: Regex = Regex::new(r"(?i)^(hiver|ete|automne)$").unwrap();
}
