//! AI分類モジュール
//!
//! 画像 + 固定プロンプトを Gemini に送り、生のレスポンステキストを返す。
//! レスポンスの構造化は parser モジュールが担当する。

mod gemini;

pub use gemini::{build_request_body, extract_text, GeminiClient};

use crate::config::Config;
use crate::error::Result;
use crate::intake::UploadedImage;
use crate::prompts::build_classification_prompt;

/// 画像を分類し、生のレスポンステキストを返す
pub async fn classify_image(
    image: &UploadedImage,
    config: &Config,
    verbose: bool,
) -> Result<String> {
    let client = GeminiClient::new(config)?;
    let prompt = build_classification_prompt();

    if verbose {
        println!("  プロンプト長: {} chars", prompt.len());
    }

    let response = client.classify(image, &prompt).await?;

    if verbose {
        println!("  レスポンス長: {} chars", response.len());
        let preview: String = response.chars().take(500).collect();
        println!("  レスポンス: {}", preview);
    }

    Ok(response)
}
