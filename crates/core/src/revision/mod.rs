//! Revision detection against existing files.
//!
//! Scans a single directory (non-recursive) for canonical names that share
//! a (job, SKU, artwork ref, purpose) prefix and derives the next unused
//! revision integer. Runs on every file-selection change in the
//! interactive flow, so it stays O(files in directory).

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::naming::FilenameBuilder;

/// Normalize an artwork reference for comparison: case-insensitive with
/// whitespace runs collapsed. The builder sanitizes references before
/// writing them, but users may retype them with different casing or
/// spacing.
fn normalize_ref(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Collect the revisions already used in `dir` for the given fields.
///
/// Job number and SKU match exactly; purpose matches
/// case-insensitively; the artwork reference matches after
/// normalization. Extension never affects matching. The result is sorted
/// and deduplicated (manual copies can leave several files at the same
/// revision).
pub fn existing_revisions(
    dir: &Path,
    job_number: &str,
    sku: &str,
    artwork_ref: &str,
    purpose: &str,
) -> io::Result<Vec<u32>> {
    let wanted_ref = normalize_ref(artwork_ref);
    let mut found = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };

        let Ok(fields) = FilenameBuilder::parse(name) else { continue };

        if fields.job_number == job_number
            && fields.sku == sku
            && fields.purpose.eq_ignore_ascii_case(purpose)
            && normalize_ref(&fields.artwork_ref) == wanted_ref
        {
            debug!(file = name, revision = fields.revision, "found existing revision");
            found.push(fields.revision);
        }
    }

    found.sort_unstable();
    found.dedup();
    Ok(found)
}

/// Compute the next unused revision: `max(existing) + 1`, or 1 when no
/// canonical file with the same prefix exists.
pub fn next_revision(
    dir: &Path,
    job_number: &str,
    sku: &str,
    artwork_ref: &str,
    purpose: &str,
) -> io::Result<u32> {
    let found = existing_revisions(dir, job_number, sku, artwork_ref, purpose)?;
    Ok(found.last().map_or(1, |max| max + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn empty_directory_starts_at_one() {
        let tmp = tempdir().unwrap();
        let rev = next_revision(tmp.path(), "12345", "MUG-11OZ", "BlueDog", "PROOF");
        assert_eq!(rev.unwrap(), 1);
    }

    #[test]
    fn returns_max_plus_one() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "12345_MUG-11OZ_(BlueDog)_PROOF_1.psd");
        touch(tmp.path(), "12345_MUG-11OZ_(BlueDog)_PROOF_4.psd");

        let rev = next_revision(tmp.path(), "12345", "MUG-11OZ", "BlueDog", "PROOF");
        assert_eq!(rev.unwrap(), 5);
    }

    #[test]
    fn artwork_ref_matching_ignores_case_and_whitespace() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "12345_MUG-11OZ_(Blue Dog)_PROOF_2.psd");

        let rev =
            next_revision(tmp.path(), "12345", "MUG-11OZ", "blue   dog ", "PROOF");
        assert_eq!(rev.unwrap(), 3);
    }

    #[test]
    fn purpose_matching_ignores_case_but_not_value() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "12345_MUG-11OZ_(BlueDog)_proof_2.psd");

        let rev = next_revision(tmp.path(), "12345", "MUG-11OZ", "BlueDog", "PROOF");
        assert_eq!(rev.unwrap(), 3);

        let rev = next_revision(tmp.path(), "12345", "MUG-11OZ", "BlueDog", "SOURCE");
        assert_eq!(rev.unwrap(), 1);
    }

    #[test]
    fn extension_never_affects_matching() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "12345_MUG-11OZ_(BlueDog)_PROOF_1.psd");
        touch(tmp.path(), "12345_MUG-11OZ_(BlueDog)_PROOF_2.PDF");

        let rev = next_revision(tmp.path(), "12345", "MUG-11OZ", "BlueDog", "PROOF");
        assert_eq!(rev.unwrap(), 3);
    }

    #[test]
    fn other_jobs_and_skus_are_ignored() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "99999_MUG-11OZ_(BlueDog)_PROOF_7.psd");
        touch(tmp.path(), "12345_TEE-L_(BlueDog)_PROOF_7.psd");
        touch(tmp.path(), "unrelated.txt");

        let rev = next_revision(tmp.path(), "12345", "MUG-11OZ", "BlueDog", "PROOF");
        assert_eq!(rev.unwrap(), 1);
    }

    #[test]
    fn duplicate_revisions_are_tolerated() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "12345_MUG-11OZ_(BlueDog)_PROOF_2.psd");
        touch(tmp.path(), "12345_MUG-11OZ_(BlueDog)_PROOF_2.ai");

        let found =
            existing_revisions(tmp.path(), "12345", "MUG-11OZ", "BlueDog", "PROOF")
                .unwrap();
        assert_eq!(found, vec![2]);

        let rev = next_revision(tmp.path(), "12345", "MUG-11OZ", "BlueDog", "PROOF");
        assert_eq!(rev.unwrap(), 3);
    }
}
