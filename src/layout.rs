//! Sheet Layout Module
//!
//! 選手レコードからシートの論理構造（タイトル、ヘッダー、各セルの文字列と
//! 塗りつぶし色、列幅）を構築するモジュール。
//!
//! ワークブックへの書き出しは`writer`モジュールが担当し、このモジュールは
//! 純粋なデータ変換のみを行います。

use unicode_width::UnicodeWidthStr;

use crate::catalog::{PositionCatalog, Rgb};
use crate::types::PlayerRecord;

/// 背番号列のヘッダー
pub const NUMBER_HEADER: &str = "Number";

/// 選手名列のヘッダー
pub const NAME_HEADER: &str = "Name";

/// ポジション列より前にある固定列の数
const FIXED_COLUMNS: usize = 2;

/// 列幅に加える余白（文字数）
const WIDTH_PADDING: usize = 2;

/// レイアウト上の1セル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutCell {
    /// 表示文字列（空の場合は空セル）
    pub text: String,

    /// 塗りつぶし色
    pub fill: Option<Rgb>,
}

impl LayoutCell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fill: None,
        }
    }

    fn empty() -> Self {
        Self::plain(String::new())
    }

    /// セルが空かどうか
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// シートの論理構造
///
/// 1行目はタイトル、2行目はヘッダー、3行目以降は入力順の選手行です。
///
/// # 使用例
///
/// ```rust
/// use squadsheet::{parse_roster, MalformedLinePolicy, PositionCatalog, SheetLayout};
///
/// let players = parse_roster("7\tMessi\tRW\tCF", MalformedLinePolicy::Reject).unwrap();
/// let layout = SheetLayout::build("Inter Miami", &players, &PositionCatalog::standard());
///
/// assert_eq!(layout.title(), "Inter Miami Squad List");
/// assert_eq!(layout.column_count(), 15);
/// assert_eq!(layout.rows()[0][12].text, "RW");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// タイトル文字列
    title: String,

    /// ヘッダー行
    header: Vec<String>,

    /// 選手行（各行の長さはヘッダーと同じ）
    rows: Vec<Vec<LayoutCell>>,

    /// 列幅（文字数単位）
    column_widths: Vec<f64>,
}

impl SheetLayout {
    /// 選手レコードからレイアウトを構築する
    ///
    /// # 引数
    ///
    /// * `club` - クラブ名（タイトルに使用）
    /// * `players` - 選手レコード（この順序で行を出力）
    /// * `catalog` - ポジション列の定義
    pub fn build(club: &str, players: &[PlayerRecord], catalog: &PositionCatalog) -> Self {
        let title = format!("{} Squad List", club);

        let header: Vec<String> = [NUMBER_HEADER, NAME_HEADER]
            .iter()
            .map(|h| h.to_string())
            .chain(catalog.codes().map(str::to_string))
            .collect();

        let rows: Vec<Vec<LayoutCell>> = players
            .iter()
            .map(|player| Self::build_row(player, catalog))
            .collect();

        let column_widths = Self::calculate_column_widths(&title, &header, &rows);

        Self {
            title,
            header,
            rows,
            column_widths,
        }
    }

    /// 1選手分の行を構築
    fn build_row(player: &PlayerRecord, catalog: &PositionCatalog) -> Vec<LayoutCell> {
        let mut row = Vec::with_capacity(FIXED_COLUMNS + catalog.len());
        row.push(LayoutCell::plain(player.number.as_str()));
        row.push(LayoutCell::plain(player.name.as_str()));

        for position in catalog.iter() {
            if player.plays(&position.code) {
                row.push(LayoutCell {
                    text: position.code.clone(),
                    fill: position.color,
                });
            } else {
                row.push(LayoutCell::empty());
            }
        }

        row
    }

    /// 各列の最大表示幅 + 余白を計算する
    ///
    /// タイトルは結合セルの親（A1）として1列目の幅に含めます。
    /// 空セルは幅0として扱います。
    fn calculate_column_widths(
        title: &str,
        header: &[String],
        rows: &[Vec<LayoutCell>],
    ) -> Vec<f64> {
        let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();

        if let Some(first) = widths.first_mut() {
            *first = (*first).max(title.width());
        }

        for row in rows {
            for (col_idx, cell) in row.iter().enumerate() {
                widths[col_idx] = widths[col_idx].max(cell.text.width());
            }
        }

        widths
            .into_iter()
            .map(|w| (w + WIDTH_PADDING) as f64)
            .collect()
    }

    /// タイトル文字列
    pub fn title(&self) -> &str {
        &self.title
    }

    /// ヘッダー行
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// 選手行
    pub fn rows(&self) -> &[Vec<LayoutCell>] {
        &self.rows
    }

    /// 列数（固定列 + ポジション列）
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// 列幅（文字数単位、余白込み）
    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    /// 選手行を文字列として取得
    pub fn row_texts(&self, idx: usize) -> Option<Vec<&str>> {
        self.rows
            .get(idx)
            .map(|row| row.iter().map(|cell| cell.text.as_str()).collect())
    }
}
