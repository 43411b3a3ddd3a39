use std::path::PathBuf;

use crate::FontFace;

const PREFERRED_FAMILIES: &[&str] = &["DejaVu Sans", "Liberation Sans", "Arial", "Noto Sans"];

/// The regular face of a common sans-serif family installed on this machine.
///
/// Returns `None` when no such font is installed; tests relying on it skip.
pub(crate) fn system_face() -> Option<FontFace> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let path = PREFERRED_FAMILIES.iter().find_map(|family| {
        db.faces()
            .filter(|face| face.families.iter().any(|(name, _)| name == family))
            .filter(|face| face.weight == fontdb::Weight::NORMAL)
            .filter(|face| face.style == fontdb::Style::Normal)
            .find_map(|face| face_path(&face.source))
    })?;

    FontFace::from_file(&path).ok()
}

fn face_path(source: &fontdb::Source) -> Option<PathBuf> {
    match source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
            let ext = path.extension()?.to_str()?.to_ascii_lowercase();
            matches!(ext.as_str(), "ttf" | "otf").then(|| path.clone())
        },
        fontdb::Source::Binary(_) => None,
    }
}
