use clap::Parser;
use house_style_ai::{classifier, cli, config, dataset, intake, parser, review, types};
use cli::{Cli, Commands};
use config::Config;
use house_style_ai::error::Result;
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Classify { image, dataset: dataset_path } => {
            println!("🏡 house-style-ai - 建築様式分類\n");

            // 1. 画像読み込み
            println!("[1/4] 画像を読み込み中...");
            let uploaded = intake::UploadedImage::load(&image)?;
            println!(
                "✔ {} ({}x{}, {})\n",
                uploaded.file_name, uploaded.width, uploaded.height, uploaded.mime_type
            );

            // 2. AI分類
            println!("[2/4] AI分類中...");
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("🔍 建築様式を解析中...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let raw = classifier::classify_image(&uploaded, &config, cli.verbose).await;
            spinner.finish_and_clear();
            let raw = raw?;
            println!("✔ 解析完了\n");

            // 3. 確認・編集
            println!("[3/4] 予測結果の確認・編集");
            let parsed = parser::parse_style_response(&raw);
            let outcome = review::run_review_form(&parsed)?;

            // 4. 保存
            let record = match outcome {
                review::ReviewOutcome::Save(record) => record,
                review::ReviewOutcome::Discard => {
                    println!("\n保存せずに終了しました");
                    return Ok(());
                }
            };

            println!("\n[4/4] データセットに保存中...");
            let path = dataset_path.unwrap_or_else(|| config.dataset_path.clone());
            let row = types::DatasetRow::from_record(uploaded.file_name.clone(), record);
            dataset::append(&path, &row)?;
            println!("✔ 保存しました: {}", path.display());

            // 蓄積済みデータセットを表示
            show_dataset(&path)?;

            println!("\n✅ 完了");
        }

        Commands::Dataset { dataset: dataset_path } => {
            let path = dataset_path.unwrap_or_else(|| config.dataset_path.clone());

            if !path.exists() {
                println!("データセットはまだありません: {}", path.display());
                return Ok(());
            }

            show_dataset(&path)?;
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  データセット: {}", config.dataset_path.display());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  APIキー: {}",
                    if config.api_key.is_some() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}

fn show_dataset(path: &Path) -> Result<()> {
    let rows = dataset::read_all(path)?;
    println!("\n📊 データセット ({}件): {}", rows.len(), path.display());
    dataset::print_table(&rows);
    Ok(())
}
