//! Image selection for picture mode.

use std::path::{Path, PathBuf};

use swd_dice::{DieKind, RollEntry};

/// File stem used for blank faces.
pub const BLANK_STEM: &str = "blank";

/// Image for one die face: `<dir>/<kind>/<face>.png`, with blank faces
/// stored as `blank.png`.
pub fn asset_path(dir: &Path, kind: DieKind, face: &str) -> PathBuf {
    let stem = if face.is_empty() { BLANK_STEM } else { face };
    dir.join(kind.name()).join(format!("{stem}.png"))
}

/// One image per rolled die, in log order.
pub fn images_for(dir: &Path, log: &[RollEntry]) -> Vec<PathBuf> {
    log.iter()
        .map(|entry| asset_path(dir, entry.kind, &entry.face))
        .collect()
}
