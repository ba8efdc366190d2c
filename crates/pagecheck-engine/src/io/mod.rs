use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Page not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid pages directory: {0}")]
    InvalidPagesDir(String),
}

/// Read a markup file and return its content
pub fn read_page(relative_path: &RelativePath, pages_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(pages_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Read a markup file from an absolute path
pub fn read_page_at(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Scan for HTML files in the pages directory
pub fn scan_html_files(pages_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !pages_root.exists() {
        return Err(IoError::InvalidPagesDir(
            "pages directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(pages_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && (ext == "html" || ext == "htm")
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_pages_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidPagesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_pages_dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    fn create_page(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(filename);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    #[test]
    fn test_scan_finds_html_files() {
        let pages_dir = create_pages_dir();
        create_page(&pages_dir, "index.html", "<p>home</p>");
        create_page(&pages_dir, "about.htm", "<p>about</p>");
        create_page(&pages_dir, "styles.css", "body {}");

        let files = scan_html_files(pages_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "index.html"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "about.htm"));
    }

    #[test]
    fn test_scan_nested_directories() {
        let pages_dir = create_pages_dir();
        create_page(&pages_dir, "index.html", "<p>root</p>");

        let sub_dir = pages_dir.path().join("blog");
        fs::create_dir(&sub_dir).unwrap();
        fs::write(sub_dir.join("post.html"), "<p>post</p>").unwrap();

        let files = scan_html_files(pages_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "post.html"));
    }

    #[test]
    fn test_invalid_pages_directory() {
        let result = scan_html_files(Path::new("/this/path/does/not/exist"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("pages directory"));
    }

    #[test]
    fn test_read_page_success() {
        let pages_dir = create_pages_dir();
        create_page(&pages_dir, "index.html", "<h1>Hello</h1>");

        let content = read_page(RelativePath::new("index.html"), pages_dir.path()).unwrap();
        assert_eq!(content, "<h1>Hello</h1>");
    }

    #[test]
    fn test_read_page_not_found() {
        let pages_dir = create_pages_dir();
        let result = read_page(RelativePath::new("missing.html"), pages_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_validate_pages_dir() {
        let pages_dir = create_pages_dir();
        assert!(validate_pages_dir(pages_dir.path()).is_ok());
        assert!(matches!(
            validate_pages_dir(Path::new("/nonexistent/path")),
            Err(IoError::InvalidPagesDir(_))
        ));
    }
}
