//! 対話式レビューフォームモジュール
//!
//! AIの分類結果を編集可能なフォームとして提示し、ユーザーが確定した
//! StyleRecord を返す。保存はユーザーの明示的な確定操作でのみ行う。
//!
//! 様式ドロップダウンは常に先頭の選択肢（Modern）が初期選択で、
//! AIの予測値は反映されない。予測が反映されるのは自由入力フィールドのみ。
//! 元システムの観測挙動をそのまま踏襲している（DESIGN.md 参照）。

use crate::error::{HouseStyleError, Result};
use crate::prompts::STYLE_CHOICES;
use crate::types::StyleRecord;
use dialoguer::{Confirm, Input, Select};

/// フォーム確定結果
pub enum ReviewOutcome {
    /// ユーザーが保存を確定
    Save(StyleRecord),
    /// 保存せず破棄
    Discard,
}

/// 自由入力フィールドの (ラベル, 事前入力値) 一覧
///
/// フォーム本体とテストで共有する。順序はCSVの列順に合わせる。
pub fn prefill_fields(parsed: &StyleRecord) -> Vec<(&'static str, &str)> {
    vec![
        ("Roof", parsed.roof.as_str()),
        ("Porch", parsed.porch.as_str()),
        ("Windows", parsed.windows.as_str()),
        ("Door", parsed.door.as_str()),
        ("Additional Notes", parsed.additional_notes.as_str()),
    ]
}

/// 空文字は "-" にして表示
pub fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// 対話式レビューフォームを実行
pub fn run_review_form(parsed: &StyleRecord) -> Result<ReviewOutcome> {
    // AI予測の様式はヒントとして表示のみ（ドロップダウンには反映しない）
    if !parsed.primary_style.trim().is_empty() || !parsed.secondary_style.trim().is_empty() {
        println!(
            "  AI予測: primary={} / secondary={}",
            display_or_dash(&parsed.primary_style),
            display_or_dash(&parsed.secondary_style)
        );
    }

    let primary_idx = prompt_style("Primary Style")?;
    let secondary_idx = prompt_style("Secondary Style")?;

    let mut values = Vec::new();
    for (label, initial) in prefill_fields(parsed) {
        values.push(prompt_text(label, initial)?);
    }

    let record = StyleRecord {
        primary_style: STYLE_CHOICES[primary_idx].to_string(),
        secondary_style: STYLE_CHOICES[secondary_idx].to_string(),
        roof: values[0].clone(),
        porch: values[1].clone(),
        windows: values[2].clone(),
        door: values[3].clone(),
        additional_notes: values[4].clone(),
    };

    let save = Confirm::new()
        .with_prompt("✅ データセットに保存しますか？")
        .default(true)
        .interact()
        .map_err(interaction_error)?;

    if save {
        Ok(ReviewOutcome::Save(record))
    } else {
        Ok(ReviewOutcome::Discard)
    }
}

/// 様式ドロップダウン（初期選択は常に先頭）
fn prompt_style(label: &str) -> Result<usize> {
    Select::new()
        .with_prompt(label)
        .items(STYLE_CHOICES)
        .default(0)
        .interact()
        .map_err(interaction_error)
}

/// 自由入力フィールド（AI予測値を事前入力、空入力可）
fn prompt_text(label: &str, initial: &str) -> Result<String> {
    let result = if initial.is_empty() {
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
    } else {
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .with_initial_text(initial)
            .interact_text()
    };

    result.map_err(interaction_error)
}

fn interaction_error(e: dialoguer::Error) -> HouseStyleError {
    HouseStyleError::Interaction(e.to_string())
}
