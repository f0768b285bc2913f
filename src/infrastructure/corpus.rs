use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Collects the text of every PDF under `dir` (recursively) as
/// `(file name, extracted text)` pairs. Files that fail extraction are
/// skipped with a warning rather than aborting the whole build.
pub fn load_pdf_documents(dir: &Path) -> anyhow::Result<Vec<(String, String)>> {
    if !dir.is_dir() {
        anyhow::bail!("Corpus directory {} does not exist", dir.display());
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            continue;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match pdf_extract::extract_text(path) {
            Ok(text) => documents.push((name, text)),
            Err(e) => warn!(file = %path.display(), error = %e, "Skipping unreadable PDF"),
        }
    }

    Ok(documents)
}
