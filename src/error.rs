use thiserror::Error;

#[derive(Error, Debug)]
pub enum HouseStyleError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`house-style config --set-api-key YOUR_KEY` で設定するか、環境変数 GEMINI_API_KEY を設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していない画像形式です: {0}（jpg/jpeg/png のみ対応）")]
    UnsupportedImageType(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("Gemini API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスの形式が不正です: {0}")]
    ApiResponse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("データセット入出力エラー: {0}")]
    Dataset(#[from] csv::Error),

    #[error("対話入力エラー: {0}")]
    Interaction(String),
}

pub type Result<T> = std::result::Result<T, HouseStyleError>;
