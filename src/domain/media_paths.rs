use crate::{domain::is_supported, expand_tilde};
use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolves what the user typed into the open prompt. A file is taken as is
/// (if its extension is supported), a directory is walked for every
/// supported file, sorted by path.
pub fn resolve_open_path(input: &str) -> Result<Vec<PathBuf>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("No path entered!"));
    }

    let path = expand_tilde(trimmed)?;

    if path.is_dir() {
        let files = collect_media_files(&path);
        if files.is_empty() {
            return Err(anyhow!("No playable media found in {}", path.display()));
        }
        return Ok(files);
    }

    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }

    match is_supported(&path) {
        true => Ok(vec![path]),
        false => Err(anyhow!("Unsupported file type: {}", path.display())),
    }
}

pub fn collect_media_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut files = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_supported(p))
        .collect::<Vec<_>>();

    files.sort();
    files
}

/// Splits a pasted/dropped payload into paths. Terminals hand dropped files
/// over as text: whitespace separated, with spaces either backslash-escaped
/// or the whole path quoted, sometimes as `file://` URIs. Only supported
/// media survive the filter.
pub fn parse_dropped_paths(payload: &str) -> Vec<PathBuf> {
    split_shell_words(payload)
        .into_iter()
        .map(|word| match word.strip_prefix("file://") {
            Some(uri) => percent_decode(uri),
            None => word,
        })
        .map(PathBuf::from)
        .filter(|p| is_supported(p))
        .collect()
}

fn split_shell_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, '\\') => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                    in_word = true;
                }
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        words.push(current);
    }
    words
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 3 <= bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}
