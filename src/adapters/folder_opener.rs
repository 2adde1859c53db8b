use std::path::Path;

pub fn reveal_in_file_manager(folder: &Path) {
    log::info!("[REVEAL] Opening {} in file manager", folder.display());
    if let Err(error) = open::that(folder) {
        log::warn!(
            "[REVEAL] Failed to open {}: {}",
            folder.display(),
            error
        );
    }
}
