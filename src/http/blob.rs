use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::Result;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// 下载得到的文件
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

impl Blob {
    pub fn new(
        bytes: Vec<u8>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            content_type: content_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// 保存到目录，同名文件存在时追加序号
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let file_name = sanitize_file_name(&self.file_name);
        let mut target = dir.join(&file_name);
        let mut counter = 1;
        while tokio::fs::try_exists(&target).await? {
            target = dir.join(numbered_name(&file_name, counter));
            counter += 1;
        }
        tokio::fs::write(&target, &self.bytes).await?;
        info!("Saved {} bytes to {}", self.bytes.len(), target.display());
        Ok(target)
    }
}

/// 从 `Content-Disposition` 中解析文件名，优先使用 `filename*`
pub fn file_name_from_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    for part in header.split(';').map(str::trim) {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                // RFC 5987: charset'lang'percent-encoded
                let encoded = value.trim().splitn(3, '\'').nth(2).unwrap_or(value);
                if let Some(decoded) = percent_decode(encoded.trim_matches('"')) {
                    if !decoded.is_empty() {
                        return Some(decoded);
                    }
                }
            }
            "filename" => {
                let name = value.trim().trim_matches('"').to_string();
                if !name.is_empty() {
                    plain = Some(percent_decode(&name).unwrap_or(name));
                }
            }
            _ => {}
        }
    }
    plain
}

fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok()?;
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}

fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim().trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "download".to_string()
    } else {
        cleaned
    }
}

fn numbered_name(file_name: &str, counter: usize) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({counter}).{ext}"),
        _ => format!("{file_name} ({counter})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_plain_and_encoded() {
        assert_eq!(
            file_name_from_disposition("attachment; filename=\"students.xlsx\""),
            Some("students.xlsx".to_string())
        );
        assert_eq!(
            file_name_from_disposition(
                "attachment; filename=\"x.xlsx\"; filename*=UTF-8''%E5%AD%A6%E5%91%98.xlsx"
            ),
            Some("学员.xlsx".to_string())
        );
        assert_eq!(file_name_from_disposition("inline"), None);
    }

    #[test]
    fn test_sanitize_and_numbering() {
        assert_eq!(sanitize_file_name("../a/b.xlsx"), "_a_b.xlsx");
        assert_eq!(sanitize_file_name(""), "download");
        assert_eq!(numbered_name("report.xlsx", 2), "report (2).xlsx");
        assert_eq!(numbered_name("README", 1), "README (1)");
    }

    #[tokio::test]
    async fn test_save_to_does_not_overwrite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blob = Blob::new(b"abc".to_vec(), "a.csv", CSV_CONTENT_TYPE);
        let first = blob.save_to(dir.path()).await.expect("first save");
        let second = blob.save_to(dir.path()).await.expect("second save");
        assert_ne!(first, second);
        assert!(second.ends_with("a (1).csv"));
        assert_eq!(std::fs::read(second).expect("read"), b"abc");
    }
}
