//! APIレスポンスパーサー
//!
//! Geminiのテキスト応答からJSONオブジェクトを抽出し、StyleRecord にパースする。
//! 応答は信頼できない構造化データとして扱い、serde_json のみでパースする。

use crate::types::StyleRecord;

/// レスポンスからJSONオブジェクト部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. None
///
/// # Examples
/// ```
/// use house_style_ai::parser::extract_json_object;
///
/// let response = r#"Here you go: {"primary_style": "Modern"}"#;
/// let json = extract_json_object(response).unwrap();
/// assert!(json.contains("primary_style"));
/// ```
pub fn extract_json_object(response: &str) -> Option<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Some(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end > start {
                return Some(&response[start..=end]);
            }
        }
    }

    None
}

/// 分類レスポンスをパース
///
/// 既知キーは対応フィールドへ、欠損キーは空文字、未知キーは無視。
/// パース失敗時は全フィールド空の StyleRecord を返し、エラーにはしない
/// （ユーザーは空フォームから手入力して保存できる）。
pub fn parse_style_response(response: &str) -> StyleRecord {
    extract_json_object(response)
        .and_then(|json| serde_json::from_str::<StyleRecord>(json).ok())
        .unwrap_or_default()
}
