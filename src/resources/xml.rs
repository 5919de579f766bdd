//! Fixed XML resource documents.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{AssetError, Result};

use super::WriteOutcome;

/// Colour resource referenced as the adaptive-icon background layer.
pub const LAUNCHER_BACKGROUND: &str = "ic_launcher_background";

/// Colour resource painted behind the splash image.
pub const SPLASH_BACKGROUND: &str = "splash_background";

/// Adaptive-icon definition: colour background, mipmap foreground.
pub fn adaptive_icon_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@color/{LAUNCHER_BACKGROUND}"/>
    <foreground android:drawable="@mipmap/ic_launcher_foreground"/>
</adaptive-icon>
"#
    )
}

/// Launch screen layer list: background colour with the centred splash image.
pub fn launch_background_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<layer-list xmlns:android="http://schemas.android.com/apk/res/android">
    <item android:drawable="@color/{SPLASH_BACKGROUND}" />
    <item>
        <bitmap
            android:gravity="center"
            android:src="@drawable/splash_image" />
    </item>
</layer-list>
"#
    )
}

/// Write `content` to `path`, creating parent directories.
///
/// Reports `Unchanged` without touching the file when it already holds
/// exactly `content`.
pub fn write_document(path: &Path, content: &str) -> Result<WriteOutcome> {
    let outcome = match fs::read_to_string(path) {
        Ok(existing) if existing == content => return Ok(WriteOutcome::Unchanged),
        Err(e) if e.kind() == ErrorKind::NotFound => WriteOutcome::Created,
        // Unreadable or not UTF-8: something is there and gets replaced
        Ok(_) | Err(_) => WriteOutcome::Updated,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AssetError::io(parent, "Failed to create directory", e))?;
    }
    fs::write(path, content).map_err(|e| AssetError::io(path, "Failed to write file", e))?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_adaptive_icon_xml() {
        insta::assert_snapshot!(adaptive_icon_xml().trim_end(), @r###"
        <?xml version="1.0" encoding="utf-8"?>
        <adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
            <background android:drawable="@color/ic_launcher_background"/>
            <foreground android:drawable="@mipmap/ic_launcher_foreground"/>
        </adaptive-icon>
        "###);
    }

    #[test]
    fn test_adaptive_icon_references_both_layers() {
        let xml = adaptive_icon_xml();
        assert!(xml.contains(r#"<background android:drawable="@color/ic_launcher_background"/>"#));
        assert!(xml.contains(r#"<foreground android:drawable="@mipmap/ic_launcher_foreground"/>"#));
    }

    #[test]
    fn test_launch_background_xml() {
        let xml = launch_background_xml();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<layer-list"));
        assert!(xml.contains(r#"<item android:drawable="@color/splash_background" />"#));
        assert!(xml.contains(r#"android:src="@drawable/splash_image""#));
        assert!(xml.ends_with("</layer-list>\n"));
    }

    #[test]
    fn test_write_document_outcomes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("drawable/launch_background.xml");

        assert_eq!(write_document(&path, "a").unwrap(), WriteOutcome::Created);
        assert_eq!(write_document(&path, "a").unwrap(), WriteOutcome::Unchanged);
        assert_eq!(write_document(&path, "b").unwrap(), WriteOutcome::Updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), "b");
    }

    #[test]
    fn test_write_document_replaces_non_utf8_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("drawable/launch_background.xml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0xFF, 0xFE, 0x00]).unwrap();

        let content = launch_background_xml();
        assert_eq!(write_document(&path, &content).unwrap(), WriteOutcome::Updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }
}
