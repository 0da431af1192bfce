use anyhow::Result;
use appiconset::{
    generate_icon_set, verify_icon_set, Contents, BASE_FILENAME, CONTENTS_FILENAME, ICON_SPECS,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("appiconset-{}-{}", name, std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    dir
}

fn snapshot(dir: &Path) -> Result<BTreeMap<String, Vec<u8>>> {
    let mut files = BTreeMap::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        files.insert(name, std::fs::read(entry.path())?);
    }
    Ok(files)
}

#[test]
fn writes_every_size() -> Result<()> {
    let dir = scratch_dir("sizes");
    let set = generate_icon_set(&dir)?;
    assert_eq!(set.images.len(), ICON_SPECS.len() + 1);
    assert_eq!(set.contents, dir.join(CONTENTS_FILENAME));

    let base = image::image_dimensions(dir.join(BASE_FILENAME))?;
    assert_eq!(base, (1024, 1024));
    for spec in ICON_SPECS.iter() {
        let path = dir.join(spec.filename());
        let size = spec.pixel_size();
        assert_eq!(image::image_dimensions(&path)?, (size, size), "{}", path.display());
    }
    let iphone = image::image_dimensions(dir.join("AppIcon-60-2x.png"))?;
    assert_eq!(iphone, (120, 120));
    let ipad_pro = image::image_dimensions(dir.join("AppIcon-835-2x.png"))?;
    assert_eq!(ipad_pro, (167, 167));

    verify_icon_set(&dir)?;
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn contents_reference_written_files() -> Result<()> {
    let dir = scratch_dir("contents");
    let set = generate_icon_set(&dir)?;
    let contents = Contents::read(&set.contents)?;
    assert_eq!(contents, Contents::app_icon(1024));
    for entry in &contents.images {
        assert!(set.images.contains(&dir.join(&entry.filename)), "{}", entry.filename);
    }
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn rerun_is_idempotent() -> Result<()> {
    let dir = scratch_dir("rerun");
    generate_icon_set(&dir)?;
    let first = snapshot(&dir)?;
    generate_icon_set(&dir)?;
    let second = snapshot(&dir)?;
    assert_eq!(first.len(), ICON_SPECS.len() + 2);
    assert!(first == second);
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn base_icon_is_stable() -> Result<()> {
    let dir = scratch_dir("base");
    generate_icon_set(&dir)?;
    let written = image::open(dir.join(BASE_FILENAME))?.to_rgb8();
    assert_eq!(written, appiconset::BaseIcon::default().render());
    assert_eq!(*written.get_pixel(512, 512), appiconset::TURQUOISE);
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn verify_detects_wrong_size() -> Result<()> {
    let dir = scratch_dir("verify");
    generate_icon_set(&dir)?;
    image::RgbImage::new(10, 10).save(dir.join("AppIcon-60-3x.png"))?;
    let err = verify_icon_set(&dir).unwrap_err();
    assert!(err.to_string().contains("AppIcon-60-3x.png"), "{}", err);

    std::fs::remove_file(dir.join("AppIcon-60-3x.png"))?;
    assert!(verify_icon_set(&dir).is_err());
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn unwritable_directory_fails() -> Result<()> {
    let dir = scratch_dir("unwritable");
    std::fs::create_dir_all(&dir)?;
    let file = dir.join("not-a-dir");
    std::fs::write(&file, b"")?;
    assert!(generate_icon_set(&file.join("AppIcon.appiconset")).is_err());
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
