//! Block list file handling
//!
//! The block list is a flat text file with one CIDR per line, rewritten
//! on every sync and consumed line by line by the route layer.

use std::io;
use std::path::Path;

use tracing::info;

use crate::cidr::CidrBlock;

/// Rewrite the block list file with one CIDR per line.
pub async fn write_blocks(path: impl AsRef<Path>, blocks: &[CidrBlock]) -> io::Result<()> {
    let mut contents = String::new();
    for block in blocks {
        contents.push_str(&block.to_string());
        contents.push('\n');
    }

    tokio::fs::write(path.as_ref(), contents).await?;
    info!(
        "Updated block list {} ({} blocks)",
        path.as_ref().display(),
        blocks.len()
    );
    Ok(())
}

/// Read the CIDR lines of a block list file.
///
/// Lines without a `/` are not routable blocks and are skipped.
pub async fn read_cidr_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let contents = tokio::fs::read_to_string(path).await?;
    Ok(filter_cidr_lines(&contents))
}

fn filter_cidr_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| line.contains('/'))
        .map(str::to_string)
        .collect()
}
