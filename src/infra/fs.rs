//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the file system helpers behind transcripts and
//! reports: locating transcript files, reading and writing them, and creating
//! output directories.
//!
//! 此模块提供转录和报告背后的文件系统辅助功能：
//! 定位转录文件、读写转录文件以及创建输出目录。

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Maps a scenario name to its transcript file inside `dir`.
///
/// ASCII alphanumerics, `-` and `_` are kept. Every other byte of the name is
/// percent-escaped (`car.v1` becomes `car%2Ev1.txt`), so distinct names never
/// share a file.
///
/// 将场景名称映射到 `dir` 中的转录文件。
/// 保留 ASCII 字母数字、`-` 和 `_`，其余字节均进行百分号转义，因此不同名称不会共用同一文件。
pub fn transcript_path(dir: &Path, name: &str) -> PathBuf {
    let encoded_name = name.bytes().fold(String::new(), |mut out, byte| {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
        out
    });

    dir.join(format!("{encoded_name}.txt"))
}

/// Reads the transcript of `name`. Returns `Ok(None)` if there is none.
///
/// # Returns
/// The transcript's lines, without line terminators.
pub fn read_transcript(dir: &Path, name: &str) -> Result<Option<Vec<String>>> {
    let path = transcript_path(dir, name);
    match fs::read_to_string(&path) {
        Ok(content) => Ok(Some(content.lines().map(str::to_string).collect())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read transcript: {}", path.display())),
    }
}

/// Writes `content` as the transcript of `name`, replacing any existing file.
pub fn write_transcript(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = transcript_path(dir, name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write transcript: {}", path.display()))?;
    Ok(path)
}

/// Creates `dir` and its parents if they do not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}

/// Creates the parent directory of a report file, if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}
