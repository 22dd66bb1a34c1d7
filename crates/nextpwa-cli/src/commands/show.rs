use anyhow::Result;

use nextpwa_core::catalog;

/// Render a single catalog entry to stdout.
///
/// Output is the raw file content so it can be piped or redirected.
pub fn run(path: &str, name: &str) -> Result<()> {
    let file = catalog::render_one(path, name)?;
    print!("{}", file.content);
    Ok(())
}
