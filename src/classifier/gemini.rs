//! Gemini API連携モジュール
//!
//! generateContent エンドポイントにプロンプトと画像（base64インライン）を
//! 送信し、candidates[0].content.parts[0].text の生成テキストを取り出す。

use crate::config::Config;
use crate::error::{HouseStyleError, Result};
use crate::intake::UploadedImage;
use base64::Engine as _;
use serde_json::{json, Value};
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// 設定からクライアントを構築
    ///
    /// APIキーはここで解決する。未設定ならネットワークに触れる前に
    /// MissingApiKey で失敗する。
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| HouseStyleError::ApiCall(format!("クライアント初期化失敗: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
        })
    }

    /// 画像とプロンプトを送信し、生成テキストを返す
    ///
    /// リトライはしない（1回失敗したらそのままエラーを返す）。
    pub async fn classify(&self, image: &UploadedImage, prompt: &str) -> Result<String> {
        let body = build_request_body(prompt, image.mime_type, &image.bytes);
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| HouseStyleError::ApiCall(format!("リクエスト送信失敗: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(HouseStyleError::ApiCall(format!(
                "HTTP {}: {}",
                status, detail
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| HouseStyleError::ApiResponse(format!("JSONでないレスポンス: {}", e)))?;

        extract_text(&payload)
    }
}

/// generateContent リクエストボディを構築
pub fn build_request_body(prompt: &str, mime_type: &str, image_bytes: &[u8]) -> Value {
    let encoded = base64::engine::general_purpose::STANDARD.encode(image_bytes);

    json!({
        "contents": [
            {
                "parts": [
                    { "text": prompt },
                    {
                        "inline_data": {
                            "mime_type": mime_type,
                            "data": encoded
                        }
                    }
                ]
            }
        ],
        "generationConfig": {
            "temperature": 0.1,
            "responseMimeType": "application/json"
        }
    })
}

/// レスポンスから生成テキストを取り出す
pub fn extract_text(payload: &Value) -> Result<String> {
    payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| {
            HouseStyleError::ApiResponse("candidates にテキストが含まれていません".into())
        })
}
