//! プロンプト生成モジュール
//!
//! - STYLE_CHOICES: 建築様式の選択肢（プロンプトとレビューフォームで共有）
//! - build_classification_prompt: 分類用プロンプト

/// 建築様式の選択肢
///
/// 先頭要素がレビューフォームのドロップダウン初期選択になる。
pub const STYLE_CHOICES: &[&str] = &[
    "Modern",
    "Craftsman",
    "Victorian",
    "Colonial",
    "Ranch",
    "Spanish",
    "Contemporary",
    "Traditional",
    "Other",
];

/// 分類プロンプト生成
///
/// フラットなJSONオブジェクト1個のみを出力させる。
/// キー構成は `StyleRecord` と一致させること。
pub fn build_classification_prompt() -> String {
    let styles = STYLE_CHOICES.join(", ");

    format!(
        r#"あなたは建築様式分類の専門家です。この住宅写真を解析し、主様式・副様式と外観の特徴を分類してください。

## 様式の選択肢
primary_style / secondary_style は以下から選択：
{styles}

## 出力形式（厳密にこのJSONオブジェクト形式で出力）
{{
  "primary_style": "様式の選択肢から1つ",
  "secondary_style": "様式の選択肢から1つ",
  "roof": "屋根の形状・素材の説明（英語）",
  "porch": "ポーチの説明（英語）",
  "windows": "窓の説明（英語）",
  "door": "ドアの説明（英語）",
  "additional_notes": "その他の特徴（英語）"
}}

## 注意
- 様式は上記リスト以外を出力しない（該当なしは "Other"）
- 特徴の説明は写真から見えるものだけを簡潔に
- JSONオブジェクトのみ出力。説明文は不要"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_choices_count() {
        assert_eq!(STYLE_CHOICES.len(), 9);
    }

    #[test]
    fn test_style_choices_first_is_modern() {
        // ドロップダウンの初期選択は先頭の "Modern"
        assert_eq!(STYLE_CHOICES[0], "Modern");
    }

    #[test]
    fn test_style_choices_contains_other() {
        assert!(STYLE_CHOICES.contains(&"Other"));
    }

    #[test]
    fn test_build_prompt_contains_choices() {
        let prompt = build_classification_prompt();

        // 選択肢がカンマ区切りで含まれていること
        assert!(prompt.contains("Modern, Craftsman, Victorian"));
    }

    #[test]
    fn test_build_prompt_contains_record_keys() {
        let prompt = build_classification_prompt();

        assert!(prompt.contains("\"primary_style\""));
        assert!(prompt.contains("\"secondary_style\""));
        assert!(prompt.contains("\"roof\""));
        assert!(prompt.contains("\"porch\""));
        assert!(prompt.contains("\"windows\""));
        assert!(prompt.contains("\"door\""));
        assert!(prompt.contains("\"additional_notes\""));
    }

    #[test]
    fn test_build_prompt_demands_json_only() {
        let prompt = build_classification_prompt();
        assert!(prompt.contains("JSONオブジェクトのみ出力"));
    }
}
