//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// squadsheetクレート全体で使用するエラー型
///
/// 名簿テキストの解析、シートの構築、ワークブックの書き出し中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// ロゴ画像の取得失敗はエラーではありません。`LogoFetcher`は
/// `Option`を返し、取得できなかった場合はロゴなしでシートを生成します。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（一時ファイルの作成失敗など）
/// - `Xlsx`: ワークブックの書き出し中に発生したエラー（rust_xlsxwriter由来）
/// - `MalformedLine`: 背番号と名前を持たない名簿行
/// - `MissingInput`: 名簿テキストまたはクラブ名が空
/// - `Config`: 設定の検証に失敗したエラー
///
/// # 使用例
///
/// ```rust
/// use squadsheet::{parse_roster, MalformedLinePolicy, SquadSheetError};
///
/// let result = parse_roster("7\tMessi\nBroken", MalformedLinePolicy::Reject);
/// match result {
///     Err(SquadSheetError::MalformedLine { line, .. }) => assert_eq!(line, 2),
///     _ => panic!("expected a malformed line"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum SquadSheetError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの書き出し中に発生したエラー
    ///
    /// 結合範囲の指定ミス、不正なシート名、バッファへの保存失敗など、
    /// `rust_xlsxwriter`が返したエラーです。
    #[error("Failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// JSON出力のシリアライズエラー
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 背番号と名前の2トークンを持たない名簿行
    ///
    /// `line`は前後の空白を除去した名簿テキスト内の行番号（1始まり）です。
    #[error("Malformed roster line {line}: expected at least a number and a name, got '{content}'")]
    MalformedLine {
        /// 行番号（1始まり）
        line: usize,
        /// 行の内容
        content: String,
    },

    /// 必須入力（名簿テキスト、クラブ名）が空
    ///
    /// 処理を開始する前に検出され、出力は一切生成されません。
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// 設定の検証に失敗したエラー
    ///
    /// `SquadSheetBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、ポジションコードの重複や、ロゴサイズが0の
    /// 場合などです。
    ///
    /// # 例
    ///
    /// ```rust
    /// use squadsheet::{SquadSheetBuilder, SquadSheetError};
    ///
    /// let result = SquadSheetBuilder::new().with_logo_size(0, 80).build();
    /// assert!(matches!(result, Err(SquadSheetError::Config(_))));
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: SquadSheetError = io_err.into();

        match error {
            SquadSheetError::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::NotFound);
                assert_eq!(e.to_string(), "File not found");
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_xlsx_error_conversion() {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let xlsx_err = match workbook.add_worksheet().set_name("") {
            Err(e) => e,
            Ok(_) => panic!("blank sheet name should be rejected"),
        };
        let error: SquadSheetError = xlsx_err.into();

        assert!(matches!(error, SquadSheetError::Xlsx(_)));
        assert!(error.to_string().starts_with("Failed to write workbook"));
    }

    #[test]
    fn test_malformed_line_display() {
        let error = SquadSheetError::MalformedLine {
            line: 4,
            content: "Messi".to_string(),
        };

        let error_msg = error.to_string();
        assert!(error_msg.contains("line 4"));
        assert!(error_msg.contains("'Messi'"));
    }

    #[test]
    fn test_missing_input_display() {
        let error = SquadSheetError::MissingInput("club name is empty".to_string());
        assert_eq!(error.to_string(), "Missing input: club name is empty");
    }

    #[test]
    fn test_config_error_display() {
        let error = SquadSheetError::Config("Duplicate position code: 'GK'".to_string());
        let error_msg = error.to_string();

        assert!(error_msg.contains("Configuration error"));
        assert!(error_msg.contains("Duplicate position code: 'GK'"));
    }

    #[test]
    fn test_error_conversion_with_question_mark() {
        fn io_operation() -> Result<(), SquadSheetError> {
            let _file = std::fs::File::open("nonexistent_roster.txt")?;
            Ok(())
        }

        match io_operation() {
            Err(SquadSheetError::Io(_)) => {}
            _ => panic!("Expected Io error from ? operator"),
        }
    }
}
