use std::fmt;
use std::path::Path;

use rand::Rng;

/// On-disk name of an uploaded file.
///
/// Generated names follow `{field}-{unix_millis}-{random}{.ext}` and are
/// unique within a single process up to the millisecond+random collision
/// noted in the upload contract. Client-supplied names are only accepted
/// through [`StoredName::parse`], which rejects anything that could escape
/// the uploads directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredName(String);

impl StoredName {
    pub fn generate(field_name: &str, original_name: &str) -> Self {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
        let extension = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        Self(format!("{field_name}-{timestamp}-{suffix}{extension}"))
    }

    /// Validate a client-supplied filename before resolving it against the
    /// uploads directory. Path separators and parent references are rejected.
    pub fn parse(raw: &str) -> Result<Self, String> {
        if raw.is_empty() {
            return Err("filename is empty".to_string());
        }
        if raw.contains('\0') {
            return Err("filename contains a NUL byte".to_string());
        }
        if raw.contains('/') || raw.contains('\\') || raw.contains("..") {
            return Err(format!("filename is not confined to the uploads directory: {raw}"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_extension(&self, extension: &str) -> bool {
        Path::new(&self.0)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension))
    }
}

impl fmt::Display for StoredName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
