//! The rewrite pipeline: requires, local modules, plan, rewrite, resolve.

use std::path::PathBuf;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::{Result, UseLocalError};
use crate::local::{find_modules, plan_replacements, Replacement};
use crate::manifest::{find_new_content, find_requires};

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No requirement matched a local module; nothing was touched.
    NoReplacements,
    /// Dry run: the rewritten manifest text, not written anywhere.
    Printed(String),
    /// The manifest was written and the resolver succeeded.
    Written {
        /// Manifest that was written.
        path: PathBuf,
        /// Directives that were inserted.
        added: Vec<Replacement>,
    },
}

/// Execute the pipeline and print the dry-run text, if any.
///
/// # Errors
///
/// Returns the first failure from any stage.
pub fn run(ctx: &ServiceContext, config: &Config) -> Result<Outcome> {
    let outcome = run_with_context(ctx, config)?;
    if let Outcome::Printed(text) = &outcome {
        println!("{text}");
    }
    Ok(outcome)
}

/// Execute the pipeline without printing.
///
/// The manifest write always happens before the resolver runs and is not
/// undone if the resolver fails.
///
/// # Errors
///
/// - [`UseLocalError::MissingManifest`] if `<dir>/go.mod` does not exist.
/// - [`UseLocalError::Read`] / [`UseLocalError::List`] from reading or scanning.
/// - [`UseLocalError::Write`] if the manifest cannot be written.
/// - [`UseLocalError::Resolve`] if the resolver cannot start or exits non-zero.
pub fn run_with_context(ctx: &ServiceContext, config: &Config) -> Result<Outcome> {
    let manifest = config.manifest_path();
    if !ctx.fs.exists(&manifest) {
        return Err(UseLocalError::MissingManifest(manifest));
    }

    let requires = find_requires(ctx.fs.as_ref(), &manifest)?;
    let modules = find_modules(ctx.fs.as_ref(), &config.scan_from, config.depth)?;
    let replacements = plan_replacements(&requires, &modules);

    if replacements.is_empty() {
        tracing::info!("no replacements found");
        return Ok(Outcome::NoReplacements);
    }

    let rewrite = find_new_content(ctx.fs.as_ref(), &manifest, &replacements)?;
    if config.dry_run {
        return Ok(Outcome::Printed(rewrite.text));
    }

    ctx.fs
        .write(&manifest, &rewrite.text)
        .map_err(|source| UseLocalError::Write { path: manifest.clone(), source })?;
    resolve(ctx, config)?;
    tracing::info!("wrote to {}", manifest.display());

    Ok(Outcome::Written { path: manifest, added: rewrite.added })
}

/// Runs the resolver command in the target directory.
fn resolve(ctx: &ServiceContext, config: &Config) -> Result<()> {
    let Some((program, args)) = config.resolve_command.split_first() else {
        return Ok(());
    };
    let command = config.resolve_command.join(" ");

    let output = ctx
        .shell
        .run(&config.dir, program, args)
        .map_err(|e| UseLocalError::Resolve { command: command.clone(), reason: e.to_string() })?;

    if !output.success() {
        let mut reason = format!("exit status {}", output.exit_code);
        let stderr = output.stderr.trim();
        if !stderr.is_empty() {
            reason.push_str(": ");
            reason.push_str(stderr);
        }
        return Err(UseLocalError::Resolve { command, reason });
    }
    tracing::debug!(%command, "resolver finished");
    Ok(())
}
