use std::{fs, path::Path};

use iconforge_engine::{IconForge, ScanWarningKind, regenerate_all};
use iconforge_manifest::{CollisionPolicy, Manifest};
use tempfile::TempDir;

fn write_svg(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
}

fn exports(barrel: &Path) -> Vec<String> {
    fs::read_to_string(barrel)
        .unwrap()
        .lines()
        .filter(|line| line.starts_with("export"))
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn basic_directory_barrel() {
    let temp = TempDir::new().unwrap();
    let icons = temp.path().join("src/icons");
    write_svg(&icons.join("basic/heart.svg"));
    write_svg(&icons.join("basic/star.svg"));

    let plugin = IconForge::on_config_resolved(temp.path(), &Manifest::default());
    let report = plugin.build_start().await.unwrap();

    assert_eq!(report.written, vec![icons.join("basic/index.ts")]);
    assert_eq!(report.icon_count, 2);
    assert_eq!(
        fs::read_to_string(icons.join("basic/index.ts")).unwrap(),
        "// Auto-generated barrel file for basic\n\
         // Do not edit manually - this file is regenerated when SVGs change\n\
         //\n\
         // Usage:\n\
         // import { HeartIcon } from 'src/icons/basic';\n\
         \n\
         export { default as HeartIcon } from './heart.svg?icon-forge';\n\
         export { default as StarIcon } from './star.svg?icon-forge';\n"
    );
}

#[tokio::test]
async fn nested_directory_gets_its_own_barrel() {
    let temp = TempDir::new().unwrap();
    let icons = temp.path().join("src/icons");
    write_svg(&icons.join("basic/heart.svg"));

    let config = IconForge::on_config_resolved(temp.path(), &Manifest::default());
    regenerate_all(config.config()).await.unwrap();
    let basic_before = fs::read_to_string(icons.join("basic/index.ts")).unwrap();

    write_svg(&icons.join("social/github.svg"));
    let report = regenerate_all(config.config()).await.unwrap();

    assert_eq!(report.written, vec![icons.join("social/index.ts")]);
    assert_eq!(report.unchanged, vec![icons.join("basic/index.ts")]);
    assert_eq!(
        exports(&icons.join("social/index.ts")),
        vec!["export { default as GithubIcon } from './github.svg?icon-forge';"]
    );
    assert_eq!(
        fs::read_to_string(icons.join("basic/index.ts")).unwrap(),
        basic_before
    );
}

#[tokio::test]
async fn every_icon_exported_exactly_once() {
    let temp = TempDir::new().unwrap();
    let icons = temp.path().join("src/icons");
    let names = ["arrow-left", "arrow_right", "chevronDown", "x"];
    for name in names {
        write_svg(&icons.join(format!("nav/{}.svg", name)));
    }
    fs::write(icons.join("nav/notes.txt"), "not an icon").unwrap();

    let mut manifest = Manifest::default();
    manifest.icons.prefix = "app".to_string();
    manifest.icons.suffix = "glyph".to_string();
    let plugin = IconForge::on_config_resolved(temp.path(), &manifest);
    plugin.build_start().await.unwrap();

    assert_eq!(
        exports(&icons.join("nav/index.ts")),
        vec![
            "export { default as AppArrowLeftGlyph } from './arrow-left.svg?icon-forge';",
            "export { default as AppArrowRightGlyph } from './arrow_right.svg?icon-forge';",
            "export { default as AppChevronDownGlyph } from './chevronDown.svg?icon-forge';",
            "export { default as AppXGlyph } from './x.svg?icon-forge';",
        ]
    );
}

#[tokio::test]
async fn collisions_follow_policy() {
    let temp = TempDir::new().unwrap();
    let icons = temp.path().join("src/icons");
    write_svg(&icons.join("dupes/my-icon.svg"));
    write_svg(&icons.join("dupes/myIcon.svg"));

    let strict = IconForge::on_config_resolved(temp.path(), &Manifest::default());
    let report = strict.build_start().await.unwrap();
    assert_eq!(report.collisions.len(), 1);
    assert_eq!(
        report.collisions[0].collisions[0].files,
        vec!["my-icon.svg".to_string(), "myIcon.svg".to_string()]
    );
    assert!(!icons.join("dupes/index.ts").exists());

    let mut manifest = Manifest::default();
    manifest.icons.collisions = CollisionPolicy::Allow;
    let lenient = IconForge::on_config_resolved(temp.path(), &manifest);
    let report = lenient.build_start().await.unwrap();
    assert!(report.collisions.is_empty());
    assert_eq!(
        exports(&icons.join("dupes/index.ts")),
        vec![
            "export { default as MyIconIcon } from './my-icon.svg?icon-forge';",
            "export { default as MyIconIcon } from './myIcon.svg?icon-forge';",
        ]
    );
}

#[tokio::test]
async fn missing_icons_root_is_not_fatal() {
    let temp = TempDir::new().unwrap();

    let plugin = IconForge::on_config_resolved(temp.path(), &Manifest::default());
    let report = plugin.build_start().await.unwrap();

    assert_eq!(report.barrel_count(), 0);
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(
        report.warnings[0].kind,
        ScanWarningKind::Unreadable(_)
    ));
}

#[tokio::test]
async fn icons_root_that_is_a_file_is_not_fatal() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/icons"), "not a directory").unwrap();

    let plugin = IconForge::on_config_resolved(temp.path(), &Manifest::default());
    let report = plugin.build_start().await.unwrap();

    assert_eq!(report.barrel_count(), 0);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].path, temp.path().join("src/icons"));
    assert!(matches!(
        report.warnings[0].kind,
        ScanWarningKind::Unreadable(_)
    ));
}

#[cfg(unix)]
#[tokio::test]
async fn unreadable_directory_does_not_block_siblings() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let icons = temp.path().join("src/icons");
    write_svg(&icons.join("locked/secret.svg"));
    write_svg(&icons.join("open/star.svg"));

    let locked = icons.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Privileged users can still list the directory
    let enforced = fs::read_dir(&locked).is_err();

    let plugin = IconForge::on_config_resolved(temp.path(), &Manifest::default());
    let report = plugin.build_start().await;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let report = report.unwrap();

    assert!(icons.join("open/index.ts").exists());
    if enforced {
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].path, locked);
        assert!(!locked.join("index.ts").exists());
    }
}

#[tokio::test]
async fn write_failure_aborts_the_pass() {
    let temp = TempDir::new().unwrap();
    let icons = temp.path().join("src/icons");
    write_svg(&icons.join("blocked/heart.svg"));
    // A directory where the barrel should go makes the write fail
    fs::create_dir_all(icons.join("blocked/index.ts")).unwrap();

    let plugin = IconForge::on_config_resolved(temp.path(), &Manifest::default());
    let err = plugin.build_start().await.unwrap_err();
    assert!(format!("{:#}", err).contains("index.ts"));
}
