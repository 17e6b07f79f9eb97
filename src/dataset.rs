//! データセット保存モジュール
//!
//! 確定済みの分類結果をCSVファイルへ追記する。ファイルが無ければ
//! ヘッダ行付きで新規作成し、以降はヘッダ無しで行のみ追記する。
//! 既存行の書き換え・削除は行わない（追記専用）。

use crate::error::Result;
use crate::types::DatasetRow;
use std::fs::OpenOptions;
use std::path::Path;

/// 1行追記（ファイルが無ければヘッダ付きで作成）
///
/// カンマや引用符を含むフィールドはcsvクレートがRFC 4180形式で
/// クォートするため、表構造は壊れない。
pub fn append(path: &Path, row: &DatasetRow) -> Result<()> {
    let write_header = !path.exists();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);

    writer.serialize(row)?;
    writer.flush()?;
    Ok(())
}

/// 全行を読み込む（ヘッダ行は除く）
pub fn read_all(path: &Path) -> Result<Vec<DatasetRow>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: DatasetRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// データセットをテーブル表示
pub fn print_table(rows: &[DatasetRow]) {
    const HEADERS: &[&str] = &[
        "image_file",
        "primary_style",
        "secondary_style",
        "roof",
        "porch",
        "windows",
        "door",
        "additional_notes",
    ];

    let cells: Vec<[&str; 8]> = rows
        .iter()
        .map(|r| {
            [
                r.image_file.as_str(),
                r.primary_style.as_str(),
                r.secondary_style.as_str(),
                r.roof.as_str(),
                r.porch.as_str(),
                r.windows.as_str(),
                r.door.as_str(),
                r.additional_notes.as_str(),
            ]
        })
        .collect();

    // 各列の幅はヘッダと全行の最大長
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("  {}", header_line.join("  "));

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
            .collect();
        println!("  {}", line.join("  "));
    }
}
