//! Best-effort multi-resolution `.ico` assembly from already rendered PNGs.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};

use crate::logger::log_detail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerOutcome {
    Written { path: PathBuf, sizes: Vec<u32> },
    /// None of the sources could be opened; nothing was written.
    Skipped,
    /// Encoding or writing failed; informational only.
    Failed(String),
}

/// Bundle every readable source raster into `dest`. Unreadable sources are
/// left out; this never returns an error.
pub fn assemble_container(sources: &[PathBuf], dest: &Path) -> ContainerOutcome {
    let mut images = Vec::new();
    for path in sources {
        match image::open(path) {
            Ok(img) => images.push(img.to_rgba8()),
            Err(e) => log_detail(&format!("skipping {} in container: {}", path.display(), e)),
        }
    }
    if images.is_empty() {
        return ContainerOutcome::Skipped;
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    let mut sizes = Vec::with_capacity(images.len());
    for img in images {
        let (w, h) = img.dimensions();
        let icon_image = IconImage::from_rgba_data(w, h, img.into_raw());
        match IconDirEntry::encode(&icon_image) {
            Ok(entry) => {
                icon_dir.add_entry(entry);
                sizes.push(w);
            }
            Err(e) => return ContainerOutcome::Failed(format!("encoding {}x{} entry: {}", w, h, e)),
        }
    }

    match write_icon_dir(&icon_dir, dest) {
        Ok(()) => ContainerOutcome::Written { path: dest.to_path_buf(), sizes },
        Err(e) => ContainerOutcome::Failed(format!("writing {}: {}", dest.display(), e)),
    }
}

fn write_icon_dir(icon_dir: &IconDir, dest: &Path) -> io::Result<()> {
    let file = BufWriter::new(File::create(dest)?);
    icon_dir.write(file)
}
