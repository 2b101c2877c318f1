/// Result of an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Candidates appended to the vault
    pub imported: usize,
    /// Candidates dropped as duplicates or unusable rows
    pub skipped: usize,
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} imported, {} skipped", self.imported, self.skipped)
    }
}
