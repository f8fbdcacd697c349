//! Discovery of installed smiley packs.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::DESCRIPTOR_FILE_NAME;

/// Finds pack descriptors below a packs directory.
pub struct PackRegistry;

impl PackRegistry {
    /// Lists `emoticons.xml` files of the immediate subdirectories of `root`.
    ///
    /// Paths are expressed relative to `relative_to`. Hidden directories and
    /// directories without a descriptor are skipped; an unreadable `root`
    /// yields an empty list. Results are ordered by directory name.
    #[must_use]
    pub fn list_packs(root: &Path, relative_to: &Path) -> Vec<PathBuf> {
        let entries = match std::fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %root.display(), error = %e, "Cannot read smiley pack directory");
                return Vec::new();
            }
        };

        let mut packs: Vec<(std::ffi::OsString, PathBuf)> = entries
            .filter_map(Result::ok)
            .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| {
                let descriptor = entry.path().join(DESCRIPTOR_FILE_NAME);
                descriptor.is_file().then(|| (entry.file_name(), descriptor))
            })
            .collect();
        packs.sort_by(|a, b| a.0.cmp(&b.0));

        let base = absolute_path(relative_to);
        let packs: Vec<PathBuf> = packs
            .into_iter()
            .map(|(_, descriptor)| relative_path(&absolute_path(&descriptor), &base))
            .collect();

        debug!(root = %root.display(), count = packs.len(), "Listed smiley packs");
        packs
    }
}

/// Makes `path` absolute and resolves `.` and `..` lexically, without
/// touching the filesystem.
pub(crate) fn absolute_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize(&absolute)
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component.as_os_str()),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Expresses `path` relative to `base`, walking up with `..` as needed.
/// Both paths must be absolute; paths without a common root are returned
/// unchanged.
fn relative_path(path: &Path, base: &Path) -> PathBuf {
    let path = normalize(path);
    let base = normalize(base);
    let path_components: Vec<Component<'_>> = path.components().collect();
    let base_components: Vec<Component<'_>> = base.components().collect();

    let common = path_components
        .iter()
        .zip(&base_components)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return path_components.iter().collect();
    }

    let mut relative = PathBuf::new();
    for _ in common..base_components.len() {
        relative.push("..");
    }
    for component in &path_components[common..] {
        relative.push(component.as_os_str());
    }
    relative
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use test_case::test_case;

    fn add_pack(root: &Path, name: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DESCRIPTOR_FILE_NAME), "<map/>").unwrap();
    }

    #[test]
    fn test_lists_packs_relative_to_base() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("smileys");
        add_pack(&root, "default");
        add_pack(&root, "classic");

        let packs = PackRegistry::list_packs(&root, tmp.path());

        assert_eq!(
            packs,
            vec![
                PathBuf::from("smileys/classic/emoticons.xml"),
                PathBuf::from("smileys/default/emoticons.xml"),
            ]
        );
    }

    #[test]
    fn test_skips_directories_without_descriptor() {
        let tmp = TempDir::new().unwrap();
        add_pack(tmp.path(), "good");
        fs::create_dir_all(tmp.path().join("empty")).unwrap();
        fs::create_dir_all(tmp.path().join("wrong")).unwrap();
        fs::write(tmp.path().join("wrong").join("Emoticons.XML"), "<map/>").unwrap();
        fs::write(tmp.path().join(DESCRIPTOR_FILE_NAME), "<map/>").unwrap();
        add_pack(tmp.path(), ".hidden");

        let packs = PackRegistry::list_packs(tmp.path(), tmp.path());

        assert_eq!(packs, vec![PathBuf::from("good/emoticons.xml")]);
    }

    #[test]
    fn test_descriptor_must_be_a_file() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("odd").join(DESCRIPTOR_FILE_NAME)).unwrap();

        assert!(PackRegistry::list_packs(tmp.path(), tmp.path()).is_empty());
    }

    #[test]
    fn test_base_outside_root_walks_up() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("share").join("smileys");
        add_pack(&root, "default");
        let app_dir = tmp.path().join("bin");
        fs::create_dir_all(&app_dir).unwrap();

        let packs = PackRegistry::list_packs(&root, &app_dir);

        assert_eq!(
            packs,
            vec![PathBuf::from("../share/smileys/default/emoticons.xml")]
        );
    }

    #[test]
    fn test_base_with_parent_components() {
        let tmp = TempDir::new().unwrap();
        let app = tmp.path().join("app");
        add_pack(&app.join("smileys"), "default");
        fs::create_dir_all(app.join("sub")).unwrap();

        let packs = PackRegistry::list_packs(&app.join("smileys"), &app.join("sub").join(".."));

        assert_eq!(packs, vec![PathBuf::from("smileys/default/emoticons.xml")]);
    }

    #[test]
    fn test_root_with_parent_components() {
        let tmp = TempDir::new().unwrap();
        add_pack(&tmp.path().join("smileys"), "default");
        fs::create_dir_all(tmp.path().join("bin")).unwrap();

        let root = tmp.path().join("bin").join("..").join(".").join("smileys");
        let packs = PackRegistry::list_packs(&root, tmp.path());

        assert_eq!(packs, vec![PathBuf::from("smileys/default/emoticons.xml")]);
    }

    #[test]
    fn test_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(PackRegistry::list_packs(&tmp.path().join("nope"), tmp.path()).is_empty());
        assert!(PackRegistry::list_packs(tmp.path(), tmp.path()).is_empty());
    }

    #[test_case("/a/b/c.xml", "/a", "b/c.xml" ; "descendant")]
    #[test_case("/a/b/c.xml", "/a/d/e", "../../b/c.xml" ; "sibling_branch")]
    #[test_case("/a/b", "/a/b", "" ; "same_path")]
    #[test_case("/a/smileys/x.xml", "/a/sub/..", "smileys/x.xml" ; "parent_in_base")]
    #[test_case("/a/./b/../c/x.xml", "/a", "c/x.xml" ; "dots_in_path")]
    fn test_relative_path(path: &str, base: &str, want: &str) {
        assert_eq!(
            relative_path(Path::new(path), Path::new(base)),
            PathBuf::from(want)
        );
    }

    #[test_case("/a/b/../c", "/a/c" ; "parent")]
    #[test_case("/a/./b/.", "/a/b" ; "current")]
    #[test_case("/a/b/../../..", "/" ; "above_root")]
    fn test_absolute_path_is_normalized(path: &str, want: &str) {
        assert_eq!(absolute_path(Path::new(path)), PathBuf::from(want));
    }
}
