//! JSON helpers and the build-manifest synchronization routine.
//!
//! The sync keeps a root `package.json` and a derived build manifest (the
//! standard one or the alternate JK-branded one) on the same version:
//! when the build manifest's version still matches the root's, nobody
//! bumped the root by hand, so the patch component is auto-incremented.
//! A fixed set of fields is then copied from the root into the build
//! manifest, the result lands in the build directory, and an optional
//! rename rule rewrites a package scope name inside named built files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::files::copy_file;
use crate::models::Version;

/// Fields copied from the root manifest into the build manifest when
/// present in the root.
const COPIED_FIELDS: &[&str] = &["dependencies", "repository", "keywords"];

/// Parse a JSON document from a file.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Serialize a value to a file, 2-space pretty-printed.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Which build manifest the sync targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Standard,
    Jk,
}

impl Variant {
    /// Select the JK variant when the argument contains the substring `jk`.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(arg) if arg.contains("jk") => Variant::Jk,
            _ => Variant::Standard,
        }
    }

    /// File name of the build-source manifest for this variant.
    pub fn manifest_name(self) -> &'static str {
        match self {
            Variant::Standard => "package.json",
            Variant::Jk => "jk-package.json",
        }
    }
}

/// One literal substring replacement applied to named built files.
#[derive(Debug, Clone)]
pub struct RenameRule {
    pub from: String,
    pub to: String,
    /// File names resolved under the build directory.
    pub files: Vec<String>,
}

/// Where the manifests live and which variant to sync.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub src_dir: PathBuf,
    pub build_dir: PathBuf,
    pub variant: Variant,
    pub rename: Option<RenameRule>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("./scripts"),
            build_dir: PathBuf::from("./build"),
            variant: Variant::Standard,
            rename: None,
        }
    }
}

/// Outcome of a manifest sync.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// The version both manifests carry after the sync.
    pub version: Version,
    /// Whether the root's patch component was auto-incremented.
    pub bumped: bool,
    /// How many built files the rename rule rewrote.
    pub files_rewritten: usize,
}

/// Synchronize the root manifest with the variant's build-source manifest.
///
/// Both manifests are rewritten in place and the build-source manifest is
/// copied to `build_dir/package.json`. Errors when the build-source
/// manifest or the build directory is missing; malformed JSON and
/// filesystem failures propagate.
pub fn sync_build_manifest(
    root_manifest: impl AsRef<Path>,
    opts: &SyncOptions,
) -> Result<SyncReport> {
    let root_manifest = root_manifest.as_ref();
    let src_pkg = opts.src_dir.join(opts.variant.manifest_name());
    if !src_pkg.exists() {
        return Err(Error::SourceManifestNotFound(src_pkg));
    }
    if !opts.build_dir.exists() {
        return Err(Error::BuildDirNotFound(opts.build_dir.clone()));
    }

    let mut build_doc: Value = read_json(&src_pkg)?;
    let mut root_doc: Value = read_json(root_manifest)?;
    if !build_doc.is_object() {
        return Err(Error::MalformedManifest(src_pkg));
    }
    if !root_doc.is_object() {
        return Err(Error::MalformedManifest(root_manifest.to_path_buf()));
    }

    let root_version_str = root_doc
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::MissingVersion(root_manifest.to_path_buf()))?
        .to_string();
    let root_version: Version = root_version_str.parse()?;

    // The build manifest matching the root means the root was never bumped
    // by hand since the last sync; increment the patch for it.
    let bumped = build_doc.get("version").and_then(Value::as_str) == Some(&root_version_str);
    let version = if bumped {
        let version = root_version.bump_patch();
        root_doc["version"] = Value::String(version.to_string());
        tracing::info!(version = %version, "package.version changed");
        version
    } else {
        root_version
    };

    // Raw string when the root was left untouched, canonical form otherwise.
    build_doc["version"] = root_doc["version"].clone();

    for &field in COPIED_FIELDS {
        if let Some(value) = root_doc.get(field) {
            build_doc[field] = value.clone();
        }
    }

    write_json(&src_pkg, &build_doc)?;
    write_json(root_manifest, &root_doc)?;
    copy_file(&src_pkg, opts.build_dir.join("package.json"))?;

    let files_rewritten = match &opts.rename {
        Some(rule) => rename_in_build(&opts.build_dir, rule)?,
        None => 0,
    };

    tracing::info!(version = %version, bumped, files_rewritten, "package.version updated");
    Ok(SyncReport {
        version,
        bumped,
        files_rewritten,
    })
}

/// Apply one literal substring replacement to each named file under the
/// build directory, rewriting only files that contained the needle.
fn rename_in_build(build_dir: &Path, rule: &RenameRule) -> Result<usize> {
    let mut count = 0;
    for name in &rule.files {
        let path = build_dir.join(name);
        let text = fs::read_to_string(&path)?;
        if text.contains(&rule.from) {
            fs::write(&path, text.replace(&rule.from, &rule.to))?;
            count += 1;
        }
    }
    Ok(count)
}
