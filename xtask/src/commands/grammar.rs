use crate::{emit, lalr};
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub enum GrammarAction {
    Generate,
    Verify,
}

pub struct GrammarCommand {
    pub action: GrammarAction,
}

/// Generated table, relative to the repo root.
const TABLE_PATH: &str = "crates/volt-parser/src/grammar/table.rs";

impl crate::commands::Command for GrammarCommand {
    fn run(&self) -> Result<()> {
        let table = repo_root()?.join(TABLE_PATH);
        let rendered = render()?;
        match self.action {
            GrammarAction::Generate => self.generate(&table, &rendered),
            GrammarAction::Verify => self.verify(&table, &rendered),
        }
    }
}

impl GrammarCommand {
    pub fn new(action: GrammarAction) -> Self {
        Self { action }
    }

    fn generate(&self, table: &Path, rendered: &str) -> Result<()> {
        info!("Writing parse table to {TABLE_PATH}...");
        fs::write(table, rendered)
            .with_context(|| format!("Failed to write {}", table.display()))?;
        Ok(())
    }

    fn verify(&self, table: &Path, rendered: &str) -> Result<()> {
        info!("Checking {TABLE_PATH} against the grammar");
        let current = fs::read_to_string(table)
            .with_context(|| format!("Failed to read {}", table.display()))?;
        if current != rendered {
            anyhow::bail!(
                "Parse table is stale: {TABLE_PATH} does not match the grammar rules.\n\
                 Please run 'cargo xtask grammar generate' and commit the changes."
            );
        }
        info!("Verify ok: parse table matches the grammar");
        Ok(())
    }
}

fn repo_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask manifest has no parent directory")
}

fn render() -> Result<String> {
    let automaton = lalr::build()?;
    info!(
        "Built LALR(1) automaton with {} states",
        automaton.state_count()
    );
    if !automaton.conflicts.is_empty() {
        let listed: Vec<String> = automaton.conflicts.iter().map(ToString::to_string).collect();
        anyhow::bail!(
            "Grammar has {} unresolved conflicts:\n  {}",
            listed.len(),
            listed.join("\n  ")
        );
    }
    Ok(emit::render(&automaton))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_root_contains_table() {
        assert!(repo_root().unwrap().join(TABLE_PATH).is_file());
    }

    #[test]
    fn test_verify_passes_on_checked_in_table() {
        use crate::commands::Command as _;
        GrammarCommand::new(GrammarAction::Verify).run().unwrap();
    }

    #[test]
    fn test_verify_rejects_stale_table() {
        let dir = std::env::temp_dir().join(format!("volt-xtask-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let stale = dir.join("table.rs");
        fs::write(&stale, "pub const STATE_COUNT: usize = 0;\n").unwrap();

        let err = GrammarCommand::new(GrammarAction::Verify)
            .verify(&stale, "pub const STATE_COUNT: usize = 274;\n")
            .unwrap_err();
        assert!(err.to_string().contains("cargo xtask grammar generate"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
