use anyhow::{Context, Result};
use cssmod_transform::{TransformOptions, TransformOutput, transform_sfc, transform_template};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // a second init (tests, build scripts) is not an error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Transform a file in memory. `.vue` files are treated as single-file
/// components, anything else as bare template markup.
pub fn transform_file(input: &Path, options: &TransformOptions) -> Result<TransformOutput> {
    let src =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;

    let is_sfc = input.extension().and_then(|e| e.to_str()) == Some("vue");
    let out = if is_sfc {
        transform_sfc(&src, options)
    } else {
        transform_template(&src, options)
    };
    let out = out.with_context(|| format!("failed to transform {}", input.display()))?;
    tracing::info!(file = %input.display(), edits = out.edits.len(), "transformed");
    Ok(out)
}

/// Transform `input` and write it to `out_dir` under the same file name.
pub fn build_cmd(
    input: &Path,
    out_dir: Option<&Path>,
    options: &TransformOptions,
) -> Result<PathBuf> {
    let out = transform_file(input, options)?;

    let name = input.file_name().context("input has no file name")?;

    let out_dir = out_dir
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("target/cssmod-gen"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let out_path = out_dir.join(name);
    fs::write(&out_path, out.code)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok(out_path)
}
