use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

pub fn is_supported_image(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Image files directly inside `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("no image files found in directory {}", dir.display());
    }
    Ok(paths)
}

/// EXIF orientation of a JPEG, 1 (upright) when absent.
pub fn exif_orientation(file_bytes: &[u8]) -> Result<u16> {
    let exif = Reader::new().read_from_container(&mut Cursor::new(file_bytes))?;
    let orientation = match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
        Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
        _ => 1,
    };
    Ok(orientation)
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read file {}", image_path.display()))?;

    let extension = extension_of(image_path);
    let mut orientation = 1;
    if extension == "jpg" || extension == "jpeg" {
        match exif_orientation(&file_bytes) {
            Ok(value) => orientation = value,
            Err(e) => warn!("could not read EXIF data for {}: {}", image_path.display(), e),
        }
    }

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {}", image_path.display(), e))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; mirrored variants are left as is
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("applied EXIF orientation {} to {}", orientation, image_path.display());
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("carousel-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn recognises_image_extensions_case_insensitively() {
        assert!(is_supported_image(Path::new("a/photo.JPG")));
        assert!(is_supported_image(Path::new("card.png")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("README")));
    }

    #[test]
    fn lists_images_sorted_by_name() {
        let dir = scratch_dir("sorted");
        for name in ["b.png", "a.jpg", "c.txt", "0.gif"] {
            fs::write(dir.join(name), b"").unwrap();
        }
        fs::create_dir(dir.join("nested.png")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(&dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["0.gif", "a.jpg", "b.png"]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = scratch_dir("empty");
        assert!(load_sorted_image_paths(&dir).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_exif_is_an_error() {
        assert!(exif_orientation(b"not a jpeg").is_err());
    }
}
