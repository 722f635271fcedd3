//! Snapshot tests for generated barrels.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::{Path, PathBuf};

use iconforge_codegen::{Barrel, BarrelLocation, IconNaming};
use iconforge_core::{DirectoryGroup, GeneratedFile, IconFile};

fn location() -> BarrelLocation {
    BarrelLocation {
        icons_root: PathBuf::from("/project/src/icons"),
        icons_directory: "src/icons".to_string(),
        extension: "ts".to_string(),
    }
}

/// Build a group the way the scanner does, from bare file names.
fn group(dir: &str, files: &[&str], naming: &IconNaming) -> DirectoryGroup {
    let icons = files
        .iter()
        .map(|file_name| IconFile {
            file_name: file_name.to_string(),
            identifier: naming.identifier(file_name.trim_end_matches(".svg")),
            relative_path: format!("./{}", file_name),
            absolute_path: Path::new(dir).join(file_name),
        })
        .collect();
    DirectoryGroup::new(dir, icons)
}

#[test]
fn test_basic_barrel() {
    let location = location();
    let group = group(
        "/project/src/icons/basic",
        &["heart.svg", "star.svg"],
        &IconNaming::default(),
    );

    let barrel = Barrel::new(&group, &location).render();
    insta::assert_snapshot!("basic_barrel", barrel);
}

#[test]
fn test_root_barrel_with_prefix() {
    let location = location();
    let group = group(
        "/project/src/icons",
        &["app-logo.svg", "arrow_left.svg"],
        &IconNaming::new("brand", "Icon"),
    );

    let barrel = Barrel::new(&group, &location).render();
    insta::assert_snapshot!("root_barrel_with_prefix", barrel);
}

#[test]
fn test_colliding_names_are_emitted_verbatim() {
    let location = location();
    let group = group(
        "/project/src/icons/misc",
        &["my-icon.svg", "myIcon.svg"],
        &IconNaming::default(),
    );

    let barrel = Barrel::new(&group, &location).render();
    let count = barrel
        .lines()
        .filter(|line| line.contains("default as MyIconIcon"))
        .count();
    assert_eq!(count, 2);
}
