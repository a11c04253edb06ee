use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::model::Snapshot;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;

/// Write a `.tar.gz` backup of the current snapshot. Read-only with respect
/// to the library itself.
pub fn run(library: &Library, dest: Option<String>) -> Result<CmdResult> {
    let filename = dest
        .unwrap_or_else(|| format!("shelf-{}.tar.gz", Utc::now().format("%Y-%m-%d_%H%M%S")));
    let file = File::create(&filename).map_err(ShelfError::Io)?;
    write_archive(file, library.snapshot())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Exported to {}", filename)));
    Ok(result)
}

fn write_archive<W: Write>(writer: W, snapshot: &Snapshot) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    let content = serde_json::to_string_pretty(snapshot).map_err(ShelfError::Serialization)?;
    let mut header = tar::Header::new_gnu();
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    tar.append_data(&mut header, "shelf/data.json", content.as_bytes())
        .map_err(ShelfError::Io)?;

    tar.finish().map_err(ShelfError::Io)?;
    Ok(())
}
