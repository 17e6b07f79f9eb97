use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "house-style")]
#[command(about = "住宅写真の建築様式AI分類・データセット収集ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 住宅画像を分類してデータセットに追記
    Classify {
        /// 住宅画像ファイル (jpg/jpeg/png)
        #[arg(required = true)]
        image: PathBuf,

        /// データセットCSVのパス（デフォルト: 設定値）
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },

    /// 蓄積済みデータセットを表示
    Dataset {
        /// データセットCSVのパス（デフォルト: 設定値）
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
