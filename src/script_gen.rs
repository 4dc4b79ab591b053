//! Scan script generator.
//!
//! This module renders [`crate::batch::Batch`] groups into the Bash
//! script that drives the batched jar-scanner builds. The output is a
//! fixed prelude followed by one fragment per batch, in batch order; each
//! fragment is a pure function of its batch so rendering can be tested
//! without touching a shell.

use crate::batch::Batch;
use crate::target::canonicalize;
use itertools::Itertools;
use std::fmt::{self, Display, Formatter, Write};
use std::path::PathBuf;
use tracing::debug;

/// Fixed script header: safety flags plus an ERR trap reporting the
/// failing line number for any command not explicitly checked.
pub const PRELUDE: &str = "#!/bin/bash

set -efo pipefail

set +x
trap 'echo ERROR in ${BASH_SOURCE[0]}, failed to run command, line with error: $LINENO' ERR
";

/// Template values shared by every fragment.
#[derive(Debug, Clone)]
pub struct ScriptParams {
    /// Path to the generated build-tool configuration repository. Carried
    /// for template parity with the historical generator; the rendered
    /// fragments resolve tooling through `BZL_GEN_BUILD_TOOLS_PATH` at
    /// execution time instead.
    pub gen_config: PathBuf,
}

/// Assemble the full scan script as a string.
///
/// The result is [`PRELUDE`] followed by one rendered fragment per batch,
/// in batch order. An empty batch list yields the bare prelude.
///
/// # Panics
///
/// Panics if writing to the output string fails (which is unexpected
/// under normal conditions).
#[must_use]
pub fn generate(batches: &[Batch], params: &ScriptParams) -> String {
    debug!(
        gen_config = %params.gen_config.display(),
        batches = batches.len(),
        "assembling scan script"
    );
    let mut out = String::from(PRELUDE);
    for batch in batches {
        write!(out, "{}", Fragment { batch }).expect("write script fragment");
    }
    out
}

/// Convert a batch's targets into a space-separated canonical label list.
fn join_canonical(targets: &[String]) -> String {
    targets.iter().map(|t| canonicalize(t)).join(" ")
}

/// Wrapper struct to display the shell fragment for one batch.
struct Fragment<'a> {
    batch: &'a Batch,
}

impl Display for Fragment<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let idx = self.batch.index;
        let count = self.batch.targets.len();
        let targets = join_canonical(&self.batch.targets);

        writeln!(f)?;
        writeln!(
            f,
            "echo -n \"Running scan of 3rdparty files in batches, working on batch {idx}, with {count} targets in it\""
        )?;
        writeln!(f)?;
        writeln!(f, "START_BATCH=$(date +%s)")?;
        writeln!(f)?;

        // The build invocation runs with tracing on and errexit off so a
        // failure can be reported with its captured stderr before the
        // script exits with the build tool's code.
        writeln!(f, "set +e")?;
        writeln!(f, "set -x")?;
        writeln!(f, "bazel build {targets} \\")?;
        writeln!(
            f,
            "  --aspects build_tools/bazel_rules/jar_scanner/rule.bzl%jar_scanner_aspect \\"
        )?;
        writeln!(f, "  --output_groups=+jar_scanner_out \\")?;
        writeln!(
            f,
            "  --override_repository=external_build_tooling_gen=${{BZL_GEN_BUILD_TOOLS_PATH}} \\"
        )?;
        writeln!(f, "  --show_result=1000000 2> /tmp/cmd_out")?;
        writeln!(f, "RET=$?")?;
        writeln!(f, "set +x")?;
        writeln!(f, "if [ \"$RET\" != \"0\" ]; then")?;
        writeln!(f, "    cat /tmp/cmd_out")?;
        writeln!(f, "    exit $RET")?;
        writeln!(f, "fi")?;
        writeln!(f, "set -e")?;
        writeln!(f, "set +o pipefail")?;
        writeln!(f)?;

        // Harvest generated JSON artifacts out of the command log. The
        // batch/item index pair keeps destination names disjoint across
        // the whole script.
        writeln!(f, "inner_idx=0")?;
        writeln!(f, "for f in `cat $OUTPUT_BASE/command.log |")?;
        writeln!(f, r#"  grep ".*\.json$" |"#)?;
        writeln!(f, "  sed -e 's/^[^ ]*//' |")?;
        writeln!(f, "  sed -e 's/^[^A-Za-z0-9/]*//' |")?;
        writeln!(f, "  sed 's/^ *//;s/ *$//'`; do")?;
        writeln!(f, "  if [ -f \"$f\" ]; then")?;
        writeln!(
            f,
            "    cp $f ${{BZL_BUILD_GEN_EXTERNAL_FILES_PATH}}/{idx}_${{inner_idx}}_jar_scanner.json"
        )?;
        writeln!(f, "    inner_idx=$((inner_idx + 1))")?;
        writeln!(f, "  fi")?;
        writeln!(f, "done")?;
        writeln!(f)?;
        writeln!(f, "set -o pipefail")?;
        writeln!(f, "END_BATCH=$(date +%s)")?;
        writeln!(f)?;
        writeln!(
            f,
            "echo \"...complete in $(($END_BATCH-$START_BATCH)) seconds\""
        )
    }
}
