//! 画像取り込みモジュール
//!
//! アップロードされた住宅画像を読み込み、形式を検証して
//! バイト列・ファイル名・プレビュー用の画像情報を公開する。

use crate::error::{HouseStyleError, Result};
use image::GenericImageView;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// 取り込み済み画像
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// 拡張子からMIMEタイプを引く（未対応は None）
pub fn mime_type_for(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

impl UploadedImage {
    /// 画像ファイルを読み込む
    ///
    /// 拡張子検証 → 1回だけメモリへ読み込み → デコード検証の順。
    /// デコード結果の縦横サイズはプレビュー表示に使う。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(HouseStyleError::FileNotFound(path.display().to_string()));
        }

        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = mime_type_for(&ext)
            .ok_or_else(|| HouseStyleError::UnsupportedImageType(path.display().to_string()))?;

        let bytes = std::fs::read(path)?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| HouseStyleError::ImageLoad(format!("{}: {}", path.display(), e)))?;
        let (width, height) = decoded.dimensions();

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            mime_type,
            bytes,
            width,
            height,
        })
    }
}
