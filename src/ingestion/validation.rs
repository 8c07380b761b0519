//! # Data Validation Module
//!
//! ## Purpose
//! Entry-level quality checks applied during ingestion, ensuring only
//! well-formed entries reach the record store. The engine itself assumes
//! well-formed records once loaded; this is the boundary that enforces it.

use crate::errors::{Result, RetentionError};

/// Validate the identifying fields of a corpus entry or record.
///
/// A rejected entry is skipped by the loader, never fatal to the load.
pub fn validate_entry(code: &str, nomenclature: &str) -> Result<()> {
    if code.trim().is_empty() {
        return Err(RetentionError::InvalidCorpusEntry {
            code: code.to_string(),
            reason: "missing classification code".to_string(),
        });
    }

    if nomenclature.trim().is_empty() {
        return Err(RetentionError::InvalidCorpusEntry {
            code: code.to_string(),
            reason: "missing nomenclature".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_entries_pass() {
        assert!(validate_entry("1050", "Correspondence Management").is_ok());
    }

    #[test]
    fn blank_code_is_rejected() {
        assert!(validate_entry("", "Correspondence Management").is_err());
        assert!(validate_entry("   ", "Correspondence Management").is_err());
    }

    #[test]
    fn blank_nomenclature_is_rejected() {
        let error = validate_entry("1050", "  ").unwrap_err();
        assert_eq!(error.category(), "ingestion");
    }
}
