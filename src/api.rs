//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// 不正な名簿行の扱い
///
/// 背番号と名前の2トークンを持たない行（空行を含む）を検出したときの
/// 動作を指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum MalformedLinePolicy {
    /// 最初の不正な行で処理全体を中断する（デフォルト）
    ///
    /// `SquadSheetError::MalformedLine`に行番号と行の内容を含めて返します。
    /// 出力は一切生成されません。
    #[default]
    Reject,

    /// 不正な行を読み飛ばし、警告ログを出力する
    Skip,
}

/// 出力フォーマット
///
/// `SquadSheetGenerator::convert`の出力形式を指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// 書式付きのExcelワークブック（デフォルト）
    #[default]
    Xlsx,

    /// 解析済みの選手レコードをJSONで出力
    ///
    /// # 出力例
    ///
    /// ```json
    /// {
    ///   "club": "Inter Miami",
    ///   "players": [
    ///     {"line": 1, "number": "7", "name": "Messi",
    ///      "primary_position": "RW", "secondary_positions": ["CF"]}
    ///   ]
    /// }
    /// ```
    Json,
}
