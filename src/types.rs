//! 分類結果の型定義
//!
//! - StyleRecord: AI分類の出力（ユーザーが編集可能な7フィールド）
//! - DatasetRow: データセットの1行（画像ファイル名 + StyleRecord）

use serde::{Deserialize, Serialize};

/// AI分類結果
///
/// 全フィールドが必ず存在する（欠損キーは空文字になる）ため、
/// CSVの列構成が常に安定する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRecord {
    pub primary_style: String,
    pub secondary_style: String,
    pub roof: String,
    pub porch: String,
    pub windows: String,
    pub door: String,
    pub additional_notes: String,
}

/// データセットの1行
///
/// CSVヘッダはフィールド名から導出されるため、列順はこの宣言順で固定。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub image_file: String,
    pub primary_style: String,
    pub secondary_style: String,
    pub roof: String,
    pub porch: String,
    pub windows: String,
    pub door: String,
    pub additional_notes: String,
}

impl DatasetRow {
    /// 確定済みレコードと画像ファイル名から1行を構築
    pub fn from_record(image_file: impl Into<String>, record: StyleRecord) -> Self {
        Self {
            image_file: image_file.into(),
            primary_style: record.primary_style,
            secondary_style: record.secondary_style,
            roof: record.roof,
            porch: record.porch,
            windows: record.windows,
            door: record.door,
            additional_notes: record.additional_notes,
        }
    }
}
