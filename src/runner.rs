//! CLI execution and pipeline dispatch.
//!
//! This module keeps `main` minimal by providing a single entry point
//! that runs the whole pipeline: load the target list, partition it into
//! batches, render the scan script, and write it out.

use crate::batch;
use crate::cli::Cli;
use crate::input;
use crate::script_gen::{self, ScriptParams};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{debug, info};

/// Execute the parsed [`Cli`] invocation.
///
/// # Errors
///
/// Returns an error if the target list cannot be read or the output
/// script cannot be written.
pub fn run(cli: &Cli) -> Result<()> {
    let targets = input::read_targets(&cli.input_file)
        .with_context(|| format!("loading targets from {}", cli.input_file.display()))?;
    info!(
        "loaded {} targets from {}",
        targets.len(),
        cli.input_file.display()
    );

    let batch_size = NonZeroUsize::new(cli.batch_size).context("batch size must be positive")?;
    let batches = batch::partition(targets, batch_size);
    let plan_json = serde_json::to_string_pretty(&batches).context("serialising batch plan")?;
    debug!("batch plan:\n{plan_json}");

    let params = ScriptParams {
        gen_config: cli.gen_config.clone(),
    };
    let script = script_gen::generate(&batches, &params);

    if cli.output_script.as_os_str() == "-" {
        io::stdout()
            .write_all(script.as_bytes())
            .context("writing script to stdout")?;
    } else {
        write_and_log(&cli.output_script, &script)?;
    }
    Ok(())
}

/// Write `content` to `path` and log the file's location.
fn write_and_log(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("writing script to {}", path.display()))?;
    info!("Generated scan script at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script_gen::PRELUDE;
    use clap::Parser;
    use rstest::rstest;
    use tempfile::tempdir;

    fn cli_for(dir: &Path, extra: &[&str]) -> Cli {
        let input = dir.join("targets.txt").display().to_string();
        let output = dir.join("scan.sh").display().to_string();
        let mut args = vec!["batchscan", input.as_str(), output.as_str(), "gen.cfg"];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap_or_else(|e| panic!("CLI parsing failed: {e}"))
    }

    #[rstest]
    fn writes_script_for_target_list() -> Result<()> {
        let dir = tempdir().context("create temp dir")?;
        fs::write(dir.path().join("targets.txt"), "//external:foo\nbar\n")
            .context("write target list")?;
        let cli = cli_for(dir.path(), &[]);

        run(&cli)?;

        let script =
            fs::read_to_string(dir.path().join("scan.sh")).context("read generated script")?;
        assert!(script.starts_with(PRELUDE));
        assert!(script.contains("bazel build @foo//:jar bar \\"));
        assert!(script.contains("working on batch 0, with 2 targets in it"));
        Ok(())
    }

    #[rstest]
    fn splits_across_batches_at_configured_size() -> Result<()> {
        let dir = tempdir().context("create temp dir")?;
        let list: String = (0..3).map(|i| format!("//lib:t{i}\n")).collect();
        fs::write(dir.path().join("targets.txt"), list).context("write target list")?;
        let cli = cli_for(dir.path(), &["--batch-size", "2"]);

        run(&cli)?;

        let script =
            fs::read_to_string(dir.path().join("scan.sh")).context("read generated script")?;
        assert_eq!(script.matches("bazel build ").count(), 2);
        assert!(script.contains("working on batch 1, with 1 targets in it"));
        Ok(())
    }

    #[rstest]
    fn empty_target_list_yields_bare_prelude() -> Result<()> {
        let dir = tempdir().context("create temp dir")?;
        fs::write(dir.path().join("targets.txt"), "\n\n").context("write target list")?;
        let cli = cli_for(dir.path(), &[]);

        run(&cli)?;

        let script =
            fs::read_to_string(dir.path().join("scan.sh")).context("read generated script")?;
        assert_eq!(script, PRELUDE);
        Ok(())
    }

    #[rstest]
    fn missing_input_file_is_an_error() {
        let dir = tempdir().unwrap_or_else(|e| panic!("create temp dir: {e}"));
        let cli = cli_for(dir.path(), &[]);
        let err = run(&cli).err().map(|e| e.to_string());
        assert!(
            err.is_some_and(|msg| msg.contains("loading targets from")),
            "expected a loading error"
        );
    }
}
