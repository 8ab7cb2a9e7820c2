//! Icon theme lookup in the XDG data directories.

use std::{env::var, path::PathBuf};

use crate::config::settings::get_xdg_data_home;

/// Icon base directories in lookup order.
///
/// The XDG data home comes first, followed by each entry of
/// `$XDG_DATA_DIRS` (default `/usr/local/share:/usr/share`).
#[must_use]
pub fn icon_base_dirs() -> Vec<PathBuf> {
    base_dirs_from(get_xdg_data_home(), var("XDG_DATA_DIRS").ok())
}

fn base_dirs_from(data_home: PathBuf, data_dirs: Option<String>) -> Vec<PathBuf> {
    let data_dirs = data_dirs
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());

    let mut dirs = vec![data_home];
    dirs.extend(
        data_dirs
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from),
    );

    dirs
}

/// Finds `icons/hicolor/{size}x{size}/apps/{name}.png` in the first base
/// directory that has it.
#[must_use]
pub fn find_icon(base_dirs: &[PathBuf], name: &str, size: u32) -> Option<PathBuf> {
    base_dirs
        .iter()
        .map(|base| {
            base.join("icons")
                .join("hicolor")
                .join(format!("{size}x{size}"))
                .join("apps")
                .join(format!("{name}.png"))
        })
        .find(|candidate| candidate.is_file())
}
