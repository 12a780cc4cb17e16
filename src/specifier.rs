//! Purposes specifier parsing.
//!
//! A specifier is a compact string describing which purposes to bundle into
//! which certificates. It has a dual shorthand:
//!
//! - All-lowercase, e.g. `"aes"`: one certificate per comma-separated group,
//!   one purpose per letter, so `"aes"` is a single certificate with all
//!   three purposes and `"a,es"` is two certificates.
//! - Mixed-case, e.g. `"AuthEncryptSign"`: each capital contributes one
//!   purpose, lowercase letters spell out the rest of the purpose word, and
//!   commas (or any non-letter) separate certificates. `"Auth,EncryptSign"`
//!   is two certificates.
//!
//! Parsing is total: malformed groups are returned alongside well-formed
//! ones, each with a [`ParseReport`] classification, and the caller decides
//! policy from the aggregate `ok` flag.

use std::fmt;

use crate::purpose::Purpose;

/// Converts a raw specifier into its canonical short form: comma-delimited
/// groups of lowercase purpose letters.
///
/// Total function; any input yields a short form. The scan has two modes,
/// chosen by whether the whole input is lowercase:
///
/// - All-lowercase input: every letter extends the current group, any
///   non-letter ends it.
/// - Mixed-case input: the first letter of a group and every subsequent
///   uppercase letter each contribute one purpose character; lowercase
///   continuation letters are dropped; non-letters end the group.
///
/// Non-letters before a group's first letter are skipped, so no empty group
/// is emitted for leading or doubled separators.
///
/// # Example
/// ```
/// use certgroup::specifier::short_form;
/// assert_eq!(short_form("AuthEncryptSign"), "aes");
/// assert_eq!(short_form("Auth,EncryptSign"), "a,es");
/// assert_eq!(short_form("a,es"), "a,es");
/// ```
pub fn short_form(specifier: &str) -> String {
    let has_cased = specifier
        .chars()
        .any(|c| c.is_lowercase() || c.is_uppercase());
    let all_lower = has_cased && !specifier.chars().any(|c| c.is_uppercase());

    let mut parsed = String::new();
    let mut start_group = true;
    for c in specifier.chars() {
        if start_group {
            if c.is_lowercase() || c.is_uppercase() {
                parsed.extend(c.to_lowercase());
                start_group = false;
            }
            continue;
        }

        if c.is_uppercase() {
            parsed.extend(c.to_lowercase());
            continue;
        }

        if all_lower && c.is_lowercase() {
            parsed.push(c);
            continue;
        }

        if !c.is_lowercase() {
            parsed.push(',');
            start_group = true;
        }
    }
    parsed
}

/// Why a certificate group failed classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    /// The same purpose matched twice within one group; likely a typo.
    RepeatedPurpose,
    /// An earlier group resolved to the identical purpose sequence;
    /// generating both would produce redundant certificates.
    Duplicate,
    /// The sub-specifier matched no catalog purpose at all.
    NoPurposes,
    /// Some characters matched a purpose and some matched nothing.
    Mismatch,
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroupError::RepeatedPurpose => "Repeated purpose",
            GroupError::Duplicate => "Duplicate",
            GroupError::NoPurposes => "No purposes",
            GroupError::Mismatch => "Mismatch",
        })
    }
}

/// Diagnostic record for one certificate group, suitable for display to the
/// caller's logging collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// `None` when the group classified OK.
    pub error: Option<GroupError>,
    /// The literal sub-specifier this group was parsed from.
    pub sub_specifier: String,
    /// The purposes matched, in match order, repeats included.
    pub purposes: Vec<Purpose>,
}

impl fmt::Display for ParseReport {
    /// Renders a report line like `OK "es" Encryption,Signature`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "OK")?,
            Some(error) => write!(f, "{error}")?,
        }
        let names: Vec<&str> = self.purposes.iter().map(|p| p.name()).collect();
        write!(f, " \"{}\" {}", self.sub_specifier, names.join(","))
    }
}

/// The outcome of parsing a purposes specifier.
#[derive(Debug, Clone)]
pub struct SpecifierParse {
    /// Canonical short form the groups were parsed from.
    pub short_form: String,
    /// One purpose group per certificate to generate, in specifier order.
    /// Groups that failed classification are still present, for visibility.
    pub certificates: Vec<Vec<Purpose>>,
    /// True only if every group classified OK.
    pub ok: bool,
    /// One report per group.
    pub reports: Vec<ParseReport>,
}

/// Parses a purposes specifier into certificate groups.
///
/// Each character of a group matches the first catalog purpose whose code
/// starts with it, catalog order breaking ties. Matching appends even when
/// the purpose is already in the group; the repeat is reported instead of
/// silently dropped. Groups are classified in priority order: repeated
/// purpose, then duplicate of an earlier group, then no purposes, then
/// mismatch, else OK.
///
/// Never aborts on a bad group. The full group list and reports come back
/// regardless, and only the aggregate `ok` flag tells the caller whether
/// generation should proceed.
///
/// # Example
/// ```
/// use certgroup::purpose::Purpose;
/// use certgroup::specifier::parse_purposes;
///
/// let parsed = parse_purposes("Auth,EncryptSign");
/// assert!(parsed.ok);
/// assert_eq!(parsed.certificates, vec![
///     vec![Purpose::Authentication],
///     vec![Purpose::Encryption, Purpose::Signature],
/// ]);
/// ```
pub fn parse_purposes(specifier: &str) -> SpecifierParse {
    let short_form = short_form(specifier);
    let mut certificates: Vec<Vec<Purpose>> = Vec::new();
    let mut reports = Vec::new();

    for sub_specifier in short_form.split(',') {
        let mut purposes: Vec<Purpose> = Vec::new();
        let mut repeated_purpose = false;
        let mut characters = 0;
        for c in sub_specifier.chars() {
            characters += 1;
            let matched = Purpose::ALL
                .iter()
                .copied()
                .find(|purpose| purpose.code().starts_with(c));
            if let Some(purpose) = matched {
                if purposes.contains(&purpose) {
                    repeated_purpose = true;
                }
                purposes.push(purpose);
            }
        }

        // Whole-group comparison against every earlier group.
        let duplicate = certificates.iter().any(|earlier| *earlier == purposes);

        let error = if repeated_purpose {
            Some(GroupError::RepeatedPurpose)
        } else if duplicate {
            Some(GroupError::Duplicate)
        } else if purposes.is_empty() {
            Some(GroupError::NoPurposes)
        } else if purposes.len() != characters {
            Some(GroupError::Mismatch)
        } else {
            None
        };

        reports.push(ParseReport {
            error,
            sub_specifier: sub_specifier.to_string(),
            purposes: purposes.clone(),
        });
        certificates.push(purposes);
    }

    let ok = reports.iter().all(|report| report.error.is_none());
    SpecifierParse {
        short_form,
        certificates,
        ok,
        reports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_run_stays_one_group() {
        assert_eq!(short_form("aes"), "aes");
        assert_eq!(short_form("a,es"), "a,es");
    }

    #[test]
    fn mixed_case_drops_lowercase_continuations() {
        assert_eq!(short_form("AuthEncryptSign"), "aes");
        assert_eq!(short_form("Auth,EncryptSign"), "a,es");
        assert_eq!(short_form("Auth Encrypt Sign"), "a,e,s");
    }

    #[test]
    fn separators_before_a_group_emit_nothing() {
        assert_eq!(short_form(",aes"), "aes");
        assert_eq!(short_form("a,,es"), "a,es");
        assert_eq!(short_form(""), "");
    }

    #[test]
    fn default_specifier_parses_clean() {
        let parsed = parse_purposes(&Purpose::default_specifier());
        assert!(parsed.ok);
        assert_eq!(parsed.short_form, "aes");
        assert_eq!(parsed.certificates, vec![Purpose::ALL.to_vec()]);
        assert_eq!(parsed.reports.len(), 1);
        assert_eq!(parsed.reports[0].error, None);
    }

    #[test]
    fn lowercase_distinct_letters_yield_one_group() {
        let parsed = parse_purposes("esa");
        assert!(parsed.ok);
        assert_eq!(
            parsed.certificates,
            vec![vec![
                Purpose::Encryption,
                Purpose::Signature,
                Purpose::Authentication,
            ]]
        );
    }

    #[test]
    fn comma_splits_certificates() {
        let parsed = parse_purposes("a,es");
        assert!(parsed.ok);
        assert_eq!(
            parsed.certificates,
            vec![
                vec![Purpose::Authentication],
                vec![Purpose::Encryption, Purpose::Signature],
            ]
        );
    }

    #[test]
    fn repeated_letter_is_repeated_purpose() {
        let parsed = parse_purposes("aa");
        assert!(!parsed.ok);
        assert_eq!(parsed.reports[0].error, Some(GroupError::RepeatedPurpose));
        // The repeat is still returned.
        assert_eq!(
            parsed.certificates[0],
            vec![Purpose::Authentication, Purpose::Authentication]
        );
    }

    #[test]
    fn unmatched_letter_among_matches_is_mismatch() {
        let parsed = parse_purposes("ax");
        assert!(!parsed.ok);
        assert_eq!(parsed.reports[0].error, Some(GroupError::Mismatch));
        assert_eq!(parsed.certificates[0], vec![Purpose::Authentication]);
    }

    #[test]
    fn empty_input_is_one_group_with_no_purposes() {
        let parsed = parse_purposes("");
        assert!(!parsed.ok);
        assert_eq!(parsed.certificates, vec![Vec::<Purpose>::new()]);
        assert_eq!(parsed.reports[0].error, Some(GroupError::NoPurposes));
    }

    #[test]
    fn equal_groups_are_duplicates() {
        let parsed = parse_purposes("as,as");
        assert!(!parsed.ok);
        assert_eq!(parsed.reports[0].error, None);
        assert_eq!(parsed.reports[1].error, Some(GroupError::Duplicate));
        assert_eq!(parsed.certificates.len(), 2);
    }

    #[test]
    fn reordered_groups_are_not_duplicates() {
        let parsed = parse_purposes("as,sa");
        assert!(parsed.ok);
    }

    #[test]
    fn repeated_purpose_takes_priority_over_duplicate() {
        let parsed = parse_purposes("aa,aa");
        assert_eq!(parsed.reports[0].error, Some(GroupError::RepeatedPurpose));
        assert_eq!(parsed.reports[1].error, Some(GroupError::RepeatedPurpose));
    }

    #[test]
    fn report_lines_render_like_the_cli() {
        let parsed = parse_purposes("es,x");
        assert_eq!(
            parsed.reports[0].to_string(),
            "OK \"es\" Encryption,Signature"
        );
        assert_eq!(parsed.reports[1].to_string(), "No purposes \"x\" ");
    }
}
