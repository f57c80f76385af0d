//! Fixture loading.

use std::fs;
use std::path::Path;

use fieldguard::Schema;

use crate::error::{HarnessError, HarnessResult};

/// Load a schema description from a JSON fixture.
pub fn load_schema(path: &Path) -> HarnessResult<Schema> {
    let source = fs::read_to_string(path).map_err(|e| HarnessError::file_read(path, e))?;
    Schema::from_json(&source).map_err(|e| HarnessError::schema_load(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file() {
        let err = load_schema(&PathBuf::from("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, HarnessError::FileRead { .. }));
    }
}
