use super::*;

#[test]
fn normalize_rel_path_cleans_and_rejects_traversal() {
    assert_eq!(normalize_rel_path("logos/./team.png").unwrap(), "logos/team.png");
    assert_eq!(normalize_rel_path("a\\b//c.png").unwrap(), "a/b/c.png");
    assert!(normalize_rel_path("../secret.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn memory_loader_reports_missing_as_asset_error() {
    let loader = MemoryAssetLoader::new().with("mem://a", vec![1, 2, 3]);
    assert_eq!(loader.load("mem://a").unwrap(), vec![1, 2, 3]);
    assert!(matches!(loader.load("mem://b"), Err(CardError::Asset(_))));
}

#[test]
fn fs_loader_reads_relative_and_file_urls() {
    let dir = std::env::temp_dir().join(format!("cardsmith_loader_{}", std::process::id()));
    std::fs::create_dir_all(dir.join("logos")).unwrap();
    std::fs::write(dir.join("logos/a.bin"), b"abc").unwrap();

    let loader = FsAssetLoader::new(&dir);
    assert_eq!(loader.load("logos/a.bin").unwrap(), b"abc");

    let url = format!("file://{}", dir.join("logos/a.bin").display());
    assert_eq!(loader.load(&url).unwrap(), b"abc");

    assert!(loader.load("logos/missing.bin").is_err());
    assert!(loader.load("https://example.com/x.png").is_err());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn optional_image_failures_are_dropped() {
    let loader = MemoryAssetLoader::new().with("mem://bad", b"not an image".to_vec());
    assert!(load_optional_image(&loader, Some("mem://bad"), "logo").is_none());
    assert!(load_optional_image(&loader, Some("mem://missing"), "logo").is_none());
    assert!(load_optional_image(&loader, None, "logo").is_none());
}

#[test]
fn required_image_failure_is_asset_error() {
    let loader = MemoryAssetLoader::new();
    assert!(matches!(
        load_image(&loader, "mem://photo"),
        Err(CardError::Asset(_))
    ));
}
