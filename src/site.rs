//! Page generation around the Markdown-to-HTML core: titles, templating and
//! output directory management.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::{info, trace, warn};
use regex::Regex;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Error;
use crate::markdown_to_html;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+(.+)$").unwrap());

/// Counts of what a site build produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub static_files: usize,
    pub pages: usize,
}

/// Text of the level-one heading on the document's first non-blank line.
pub fn extract_title(markdown: &str) -> Result<String, Error> {
    let first_line = markdown.trim().lines().next().unwrap_or_default();
    TITLE_RE
        .captures(first_line)
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
        .ok_or(Error::MissingTitle)
}

/// Fill the template placeholders, then point root-relative links at `base_path`.
pub fn apply_template(template: &str, title: &str, content: &str, base_path: &str) -> String {
    let page = template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content);

    if base_path == "/" {
        return page;
    }
    page.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Convert one Markdown document into a complete templated page.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String, Error> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    Ok(apply_template(template, &title, &content, base_path))
}

pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), Error> {
    let template = read(template_path)?;
    write_page(from, &template, dest, base_path)
}

/// Generate a page for every `.md` file under `content_dir`, mirroring the
/// directory layout under `dest_dir` with `.html` extensions.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize, Error> {
    let template = read(template_path)?;
    let mut pages = 0;

    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        trace!("Visiting {}", path.display());

        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        let Ok(relative) = path.strip_prefix(content_dir) else {
            continue;
        };

        let dest = dest_dir.join(relative).with_extension("html");
        write_page(path, &template, &dest, base_path)?;
        pages += 1;
    }

    Ok(pages)
}

/// Delete everything inside `dir`, keeping the directory itself.
pub fn clean_dir(dir: &Path) -> Result<(), Error> {
    if !dir.exists() {
        warn!("{} does not exist, nothing to clean", dir.display());
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path).map_err(|e| Error::io(&path, e))?;
            info!("Deleted directory {}", path.display());
        } else {
            fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
            info!("Deleted file {}", path.display());
        }
    }

    Ok(())
}

/// Recursively copy `from` into `to`, creating directories as needed.
pub fn copy_static(from: &Path, to: &Path) -> Result<usize, Error> {
    if !from.exists() {
        warn!("Static directory {} does not exist, skipping copy", from.display());
        return Ok(0);
    }
    fs::create_dir_all(to).map_err(|e| Error::io(to, e))?;

    let mut copied = 0;
    for entry in WalkDir::new(from).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| Error::io(entry.path(), e))?;
            info!("Copied {} -> {}", entry.path().display(), target.display());
            copied += 1;
        }
    }

    Ok(copied)
}

/// Clean the output directory, copy static assets and generate every page.
pub fn build_site(config: &Config) -> Result<BuildReport, Error> {
    let paths = &config.paths;

    clean_dir(&paths.output_dir)?;
    let static_files = copy_static(&paths.static_dir, &paths.output_dir)?;
    let pages = generate_pages_recursive(
        &paths.content_dir,
        &paths.template,
        &paths.output_dir,
        &config.site.base_path,
    )?;

    Ok(BuildReport {
        static_files,
        pages,
    })
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn write_page(from: &Path, template: &str, dest: &Path, base_path: &str) -> Result<(), Error> {
    info!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = read(from)?;
    let page = render_page(&markdown, template, base_path)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(dest, page).map_err(|e| Error::io(dest, e))
}
