//! Font resolution for the PDF surface.
//!
//! The Roboto family is looked up in `REFGUIDE_FONTS_DIR`, in `assets/fonts`
//! next to the running binary, then in `assets/fonts` inside this crate. If
//! none of those directories is complete the Windows Arial family is tried
//! (`REFGUIDE_WINDOWS_FONTS_DIR`, then `%WINDIR%\Fonts`).

use std::env;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, FontData, FontFamily};
use log::{info, warn};

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Roboto";

const ROBOTO_FILES: [&str; 4] = [
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

/// Arial files in regular, bold, italic, bold-italic order.
const ARIAL_FILES: [&str; 4] = ["arial.ttf", "arialbd.ttf", "ariali.ttf", "arialbi.ttf"];

/// Where a loaded font family came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    /// The Roboto family from the given directory.
    Bundled(PathBuf),
    /// The Windows Arial family from the given directory.
    WindowsFallback(PathBuf),
}

impl fmt::Display for FontOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled(dir) => write!(f, "{} from {}", DEFAULT_FONT_FAMILY_NAME, dir.display()),
            Self::WindowsFallback(dir) => write!(f, "Arial from {}", dir.display()),
        }
    }
}

fn non_empty_env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
}

/// Location of the `assets/fonts` directory inside this crate.
pub fn bundled_fonts_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

fn bundled_search_path() -> Vec<PathBuf> {
    let beside_binary = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets/fonts")));

    let mut search = Vec::new();
    for candidate in [
        non_empty_env_path("REFGUIDE_FONTS_DIR"),
        beside_binary,
        Some(bundled_fonts_source_dir()),
    ]
    .into_iter()
    .flatten()
    {
        if !search.contains(&candidate) {
            search.push(candidate);
        }
    }
    search
}

fn missing_files(dir: &Path, files: &[&str]) -> Vec<String> {
    files
        .iter()
        .filter(|name| !dir.join(name).is_file())
        .map(|name| (*name).to_owned())
        .collect()
}

fn not_found(message: String) -> Error {
    Error::new(
        message,
        io::Error::new(io::ErrorKind::NotFound, "font files not found"),
    )
}

fn find_bundled_directory() -> Result<PathBuf, Error> {
    let mut rejected = Vec::new();

    for dir in bundled_search_path() {
        if !dir.is_dir() {
            rejected.push(format!("{} (no such directory)", dir.display()));
            continue;
        }
        let missing = missing_files(&dir, &ROBOTO_FILES);
        if missing.is_empty() {
            return Ok(dir);
        }
        rejected.push(format!("{} (missing {})", dir.display(), missing.join(", ")));
    }

    Err(not_found(format!(
        "No complete {} font directory found; checked {}. Set REFGUIDE_FONTS_DIR or see assets/fonts/README.md.",
        DEFAULT_FONT_FAMILY_NAME,
        rejected.join("; ")
    )))
}

fn windows_fonts_directory() -> Option<PathBuf> {
    if let Some(dir) = non_empty_env_path("REFGUIDE_WINDOWS_FONTS_DIR") {
        return Some(dir);
    }

    if cfg!(windows) {
        return ["WINDIR", "SystemRoot"]
            .into_iter()
            .filter_map(non_empty_env_path)
            .map(|root| root.join("Fonts"))
            .find(|dir| dir.is_dir());
    }

    None
}

fn load_arial(dir: &Path) -> Result<FontFamily<FontData>, Error> {
    let load = |file: &str| {
        let path = dir.join(file);
        FontData::load(&path, None).map_err(|err| {
            not_found(format!("Cannot load {}: {}", path.display(), err))
        })
    };

    Ok(FontFamily {
        regular: load(ARIAL_FILES[0])?,
        bold: load(ARIAL_FILES[1])?,
        italic: load(ARIAL_FILES[2])?,
        bold_italic: load(ARIAL_FILES[3])?,
    })
}

fn is_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if matches!(io_err.kind(), io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied)
    )
}

/// Loads the font family used by the PDF surface and reports where it came from.
pub fn resolve_font_family() -> Result<(FontFamily<FontData>, FontOrigin), Error> {
    let bundled = find_bundled_directory().and_then(|dir| {
        let family = fonts::from_files(&dir, DEFAULT_FONT_FAMILY_NAME, None)?;
        Ok((family, FontOrigin::Bundled(dir)))
    });

    let bundled_err = match bundled {
        Ok(found) => return Ok(found),
        Err(err) if is_missing(&err) => err,
        Err(err) => return Err(err),
    };

    let Some(dir) = windows_fonts_directory() else {
        warn!("{}", bundled_err);
        return Err(bundled_err);
    };

    match load_arial(&dir) {
        Ok(family) => {
            warn!("{}; using the Windows Arial family instead", bundled_err);
            Ok((family, FontOrigin::WindowsFallback(dir)))
        }
        Err(fallback_err) => {
            warn!("{}; Arial fallback failed: {}", bundled_err, fallback_err);
            Err(not_found(format!(
                "No usable fonts: {}; Arial fallback failed: {}",
                bundled_err, fallback_err
            )))
        }
    }
}

/// Loads the font family used by the PDF surface.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    let (family, origin) = resolve_font_family()?;
    info!("Using font family {}", origin);
    Ok(family)
}

/// Whether the bundled Roboto files can be found without any fallback.
pub fn default_fonts_available() -> bool {
    find_bundled_directory().is_ok()
}
