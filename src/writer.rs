//! Workbook Writer Module
//!
//! `SheetLayout`を書式付きのExcelワークブックとして書き出すモジュール。

use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Image, Workbook, Worksheet,
};

use crate::error::SquadSheetError;
use crate::layout::SheetLayout;
use crate::types::CellCoord;

const TITLE_ROW: u32 = 0;
const HEADER_ROW: u32 = 1;
const FIRST_DATA_ROW: u32 = 2;

/// シートの見た目に関する設定
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SheetStyle {
    /// ワークシート名
    pub sheet_name: String,

    /// タイトルのフォントサイズ
    pub title_font_size: f64,

    /// ロゴを配置するセル（0始まり、`None`の場合は1行目の表の右隣）
    pub logo_anchor: Option<(u32, u16)>,

    /// ロゴの表示サイズ（幅, 高さ）
    pub logo_size: (u32, u32),
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            sheet_name: "Squad".to_string(),
            title_font_size: 16.0,
            logo_anchor: None,
            logo_size: (80, 80),
        }
    }
}

/// 書き出し結果
pub(crate) struct RenderedWorkbook {
    pub workbook: Workbook,
    pub has_logo: bool,
}

/// レイアウトをワークブックに書き出す
///
/// # 処理フロー
///
/// 1. タイトル行（全列を結合、太字、中央揃え）
/// 2. ヘッダー行（太字、中央揃え、罫線）
/// 3. 選手行（罫線、ポジションセルの塗りつぶし）
/// 4. 列幅
/// 5. ロゴ画像（デコードできない場合はロゴなし）
pub(crate) fn render(
    layout: &SheetLayout,
    logo: Option<&[u8]>,
    style: &SheetStyle,
) -> Result<RenderedWorkbook, SquadSheetError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&style.sheet_name)?;

    write_title(worksheet, layout, style)?;
    write_header(worksheet, layout)?;
    write_rows(worksheet, layout)?;

    for (col_idx, width) in layout.column_widths().iter().enumerate() {
        worksheet.set_column_width(col_idx as u16, *width)?;
    }

    let has_logo = match logo {
        Some(bytes) => {
            let anchor = style
                .logo_anchor
                .unwrap_or((TITLE_ROW, layout.column_count() as u16));
            insert_logo(worksheet, bytes, anchor, style.logo_size)?
        }
        None => false,
    };

    Ok(RenderedWorkbook { workbook, has_logo })
}

fn write_title(
    worksheet: &mut Worksheet,
    layout: &SheetLayout,
    style: &SheetStyle,
) -> Result<(), SquadSheetError> {
    let format = Format::new()
        .set_bold()
        .set_font_size(style.title_font_size)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    // 固定列とポジション列で常に3列以上
    let last_col = (layout.column_count() - 1) as u16;
    worksheet.merge_range(TITLE_ROW, 0, TITLE_ROW, last_col, layout.title(), &format)?;
    Ok(())
}

fn write_header(worksheet: &mut Worksheet, layout: &SheetLayout) -> Result<(), SquadSheetError> {
    let format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    for (col_idx, text) in layout.header().iter().enumerate() {
        worksheet.write_string_with_format(HEADER_ROW, col_idx as u16, text, &format)?;
    }
    Ok(())
}

fn write_rows(worksheet: &mut Worksheet, layout: &SheetLayout) -> Result<(), SquadSheetError> {
    let bordered = Format::new().set_border(FormatBorder::Thin);

    for (row_idx, row) in layout.rows().iter().enumerate() {
        let row_num = FIRST_DATA_ROW + row_idx as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_num = col_idx as u16;
            let format = match cell.fill {
                Some(rgb) if !cell.is_empty() => bordered
                    .clone()
                    .set_pattern(FormatPattern::Solid)
                    .set_background_color(Color::RGB(rgb)),
                _ => bordered.clone(),
            };

            if cell.is_empty() {
                worksheet.write_blank(row_num, col_num, &format)?;
            } else {
                worksheet.write_string_with_format(row_num, col_num, &cell.text, &format)?;
            }
        }
    }
    Ok(())
}

/// ロゴ画像を挿入する（画像として読めないバイト列は無視して`false`を返す）
fn insert_logo(
    worksheet: &mut Worksheet,
    bytes: &[u8],
    anchor: (u32, u16),
    size: (u32, u32),
) -> Result<bool, SquadSheetError> {
    let image = match Image::new_from_buffer(bytes) {
        Ok(image) => image,
        Err(e) => {
            log::warn!("Ignoring logo that could not be read as an image: {}", e);
            return Ok(false);
        }
    };

    let (width, height) = size;
    let image = image.set_scale_to_size(width, height, false);

    let (row, col) = anchor;
    log::debug!(
        "Embedding logo at {} ({}x{})",
        CellCoord::new(row, col).to_a1_notation(),
        width,
        height
    );
    worksheet.insert_image(row, col, &image)?;
    Ok(true)
}
