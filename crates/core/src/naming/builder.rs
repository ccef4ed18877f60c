//! Composition and decomposition of canonical filenames.

use std::sync::LazyLock;

use regex::Regex;

use super::sanitize::sanitize_component;
use super::types::{NameParseError, NamingFields};

// `<Job#>_<SKU>_(<ArtRef>)_<Purpose>_<Rev>.<ext>`
static CANONICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)_([^_]+)_\(([^)]*)\)_([^_]+)_([1-9]\d*)\.(.+)$").unwrap()
});

/// Builds and decomposes canonical artwork filenames.
///
/// Construction takes the configured artwork-reference length limit so the
/// sanitizer stays a pure function of configuration plus input.
#[derive(Debug, Clone, Copy)]
pub struct FilenameBuilder {
    artwork_ref_max_len: usize,
}

impl FilenameBuilder {
    pub fn new(artwork_ref_max_len: usize) -> Self {
        Self { artwork_ref_max_len }
    }

    /// Compose the canonical filename for the given fields.
    ///
    /// The artwork reference is sanitized (delimiter characters stripped,
    /// whitespace collapsed, truncated to the configured limit); the other
    /// fields are assumed to come from configured lists and are embedded
    /// as-is. The extension keeps its original case.
    pub fn build(&self, fields: &NamingFields) -> String {
        let art_ref = sanitize_component(&fields.artwork_ref, self.artwork_ref_max_len);
        format!(
            "{}_{}_({})_{}_{}.{}",
            fields.job_number,
            fields.sku,
            art_ref,
            fields.purpose,
            fields.revision,
            fields.extension
        )
    }

    /// Decompose a filename into its canonical fields.
    ///
    /// Best-effort: anything that does not match the five-group grammar is
    /// [`NameParseError::MalformedName`], which callers treat as "not one
    /// of ours".
    pub fn parse(name: &str) -> Result<NamingFields, NameParseError> {
        let caps = CANONICAL_RE
            .captures(name)
            .ok_or_else(|| NameParseError::MalformedName(name.to_string()))?;

        // The revision group is `[1-9]\d*`; values beyond u32 are not
        // canonical names in practice, so overflow counts as malformed.
        let revision = caps[5]
            .parse::<u32>()
            .map_err(|_| NameParseError::MalformedName(name.to_string()))?;

        Ok(NamingFields {
            job_number: caps[1].to_string(),
            sku: caps[2].to_string(),
            artwork_ref: caps[3].to_string(),
            purpose: caps[4].to_string(),
            revision,
            extension: caps[6].to_string(),
        })
    }
}

impl Default for FilenameBuilder {
    fn default() -> Self {
        Self::new(crate::config::default_artwork_ref_max_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn builder() -> FilenameBuilder {
        FilenameBuilder::new(64)
    }

    #[test]
    fn builds_canonical_name() {
        let fields = NamingFields {
            job_number: "12345".into(),
            sku: "MUG-11OZ".into(),
            artwork_ref: "BlueDog".into(),
            purpose: "PROOF".into(),
            revision: 1,
            extension: "psd".into(),
        };
        assert_eq!(builder().build(&fields), "12345_MUG-11OZ_(BlueDog)_PROOF_1.psd");
    }

    #[test]
    fn build_sanitizes_artwork_ref() {
        let fields = NamingFields {
            job_number: "1".into(),
            sku: "TEE".into(),
            artwork_ref: "Blue_(Dog)  v2".into(),
            purpose: "SOURCE".into(),
            revision: 3,
            extension: "ai".into(),
        };
        assert_eq!(builder().build(&fields), "1_TEE_(BlueDog v2)_SOURCE_3.ai");
    }

    #[test]
    fn parse_extracts_all_fields() {
        let fields = FilenameBuilder::parse("12345_MUG-11OZ_(BlueDog)_PROOF_2.PSD").unwrap();
        assert_eq!(fields.job_number, "12345");
        assert_eq!(fields.sku, "MUG-11OZ");
        assert_eq!(fields.artwork_ref, "BlueDog");
        assert_eq!(fields.purpose, "PROOF");
        assert_eq!(fields.revision, 2);
        // Extension case is preserved.
        assert_eq!(fields.extension, "PSD");
    }

    #[rstest]
    #[case("12345_MUG-11OZ_(BlueDog)_PROOF_1.psd")]
    #[case("1_TEE_(Blue Dog v2)_SOURCE_12.tif")]
    #[case("987_POSTER-24x36_()_CUTFILE_3.svg")]
    #[case("42_SKU_(ref)_web_7.tar.gz")]
    fn round_trip_is_exact(#[case] name: &str) {
        let fields = FilenameBuilder::parse(name).unwrap();
        assert_eq!(builder().build(&fields), name);
    }

    #[rstest]
    #[case("notes.txt")]
    #[case("12345_MUG_BlueDog_PROOF_1.psd")] // no parenthesized group
    #[case("12345_MUG_(BlueDog)_PROOF_0.psd")] // revision must be positive
    #[case("12345_MUG_(BlueDog)_PROOF_1")] // no extension
    #[case("abc_MUG_(BlueDog)_PROOF_1.psd")] // job number must be digits
    #[case("")]
    fn malformed_names_do_not_match(#[case] name: &str) {
        assert!(matches!(
            FilenameBuilder::parse(name),
            Err(NameParseError::MalformedName(_))
        ));
    }
}
