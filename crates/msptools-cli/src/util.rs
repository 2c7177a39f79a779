use anyhow::Result;
use std::path::Path;

pub fn validate_input_file(path: &str) -> Result<()> {
    if path.is_empty() {
        anyhow::bail!("No input file given");
    }
    let p = Path::new(path);
    if !p.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !p.is_file() {
        anyhow::bail!("Not a regular file: {}", path);
    }
    Ok(())
}

pub fn validate_output_file(path: &str) -> Result<()> {
    if path.is_empty() {
        anyhow::bail!("No output file given");
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            anyhow::bail!("Output directory does not exist: {}", parent.display());
        }
    }
    Ok(())
}
