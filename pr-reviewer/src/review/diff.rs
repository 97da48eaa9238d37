//! Diff collection: turn the host's per-file patches into one text blob.
//!
//! Fail-soft: a provider error while listing files degrades to an empty
//! blob ("no changes detected") so a transient host outage never aborts
//! the pipeline. The error is logged for operators.

use tracing::{debug, warn};

use crate::git_providers::{ChangedFile, GitHubClient, PullRequestId};

/// Assembles the textual diff blob from changed files.
///
/// Each file that carries a patch contributes a header line followed by
/// the raw patch text and a blank-line separator, in input order:
///
/// ```text
/// --- FILE: src/lib.rs ---
/// +fn new_code() {}
///
/// ```
///
/// Files whose `patch` is absent are skipped. An empty result means
/// "no reviewable changes".
pub fn assemble_diff(files: &[ChangedFile]) -> String {
    let mut blob = String::new();
    for file in files {
        if let Some(patch) = &file.patch {
            blob.push_str(&format!("--- FILE: {} ---\n", file.filename));
            blob.push_str(patch);
            blob.push_str("\n\n");
        }
    }
    blob
}

/// Outcome of diff collection.
#[derive(Debug, Clone)]
pub struct CollectedDiff {
    /// Concatenated per-file patch text; empty means nothing to review.
    pub blob: String,
    /// Number of files that contributed a patch to the blob.
    pub files_with_patch: usize,
}

/// Fetches the changed files for `id` and assembles the diff blob.
///
/// On any provider error the result is an empty blob with a zero file
/// count; see module docs.
pub async fn collect_diff(client: &GitHubClient, id: &PullRequestId) -> CollectedDiff {
    match client.list_changed_files(id).await {
        Ok(files) => {
            let files_with_patch = files.iter().filter(|f| f.patch.is_some()).count();
            let blob = assemble_diff(&files);
            debug!(
                "diff: {} files listed, {} with patch, {} bytes of patch text",
                files.len(),
                files_with_patch,
                blob.len()
            );
            CollectedDiff {
                blob,
                files_with_patch,
            }
        }
        Err(e) => {
            warn!("diff: fetch failed for {}#{}: {e}", id.repo, id.number);
            CollectedDiff {
                blob: String::new(),
                files_with_patch: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, patch: Option<&str>) -> ChangedFile {
        ChangedFile {
            filename: name.into(),
            patch: patch.map(Into::into),
        }
    }

    #[test]
    fn skips_files_without_patch_and_keeps_order() {
        let files = vec![
            file("a.py", Some("+print('x')")),
            file("image.png", None),
            file("b.rs", Some("-old\n+new")),
        ];
        let blob = assemble_diff(&files);
        assert_eq!(
            blob,
            "--- FILE: a.py ---\n+print('x')\n\n--- FILE: b.rs ---\n-old\n+new\n\n"
        );
        // a.py header must come before b.rs header
        assert!(blob.find("a.py").unwrap() < blob.find("b.rs").unwrap());
    }

    #[test]
    fn empty_when_no_file_has_patch() {
        assert_eq!(assemble_diff(&[]), "");
        assert_eq!(assemble_diff(&[file("bin.dat", None)]), "");
    }
}
