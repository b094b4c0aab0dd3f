//! Position Catalog Module
//!
//! シートの列として出力するポジションコードと、その強調色を定義するモジュール。

use crate::error::SquadSheetError;

/// 24ビットRGBカラー（例: `0x90EE90`）
pub type Rgb = u32;

/// カタログの1項目（ポジションコードと任意の強調色）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// ポジションコード（例: `"GK"`）
    pub code: String,

    /// セルの塗りつぶし色（`None`の場合は塗りつぶさない）
    pub color: Option<Rgb>,
}

impl Position {
    /// 強調色付きのポジションを生成
    pub fn new(code: impl Into<String>, color: Rgb) -> Self {
        Self {
            code: code.into(),
            color: Some(color),
        }
    }

    /// 強調色なしのポジションを生成
    pub fn plain(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            color: None,
        }
    }
}

const STANDARD_POSITIONS: [(&str, Rgb); 13] = [
    ("GK", 0x90EE90),
    ("CB", 0xFFD580),
    ("LB", 0xADD8E6),
    ("RB", 0xADD8E6),
    ("DM", 0xD8BFD8),
    ("CM", 0xD8BFD8),
    ("RM", 0xFFB6C1),
    ("LM", 0xFFFFE0),
    ("AM", 0xD8BFD8),
    ("LW", 0xFFFFE0),
    ("RW", 0xFFB6C1),
    ("SS", 0xFFA07A),
    ("CF", 0xFFA07A),
];

/// 認識するポジションコードの順序付き集合
///
/// 列の並び順はカタログの順序そのものです。カタログに含まれないポジションは
/// シートには出力されません。
///
/// # 使用例
///
/// ```rust
/// use squadsheet::PositionCatalog;
///
/// let catalog = PositionCatalog::standard();
/// assert_eq!(catalog.len(), 13);
/// assert_eq!(catalog.color_of("GK"), Some(0x90EE90));
/// assert_eq!(catalog.color_of("ST"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionCatalog {
    positions: Vec<Position>,
}

impl Default for PositionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl PositionCatalog {
    /// 標準の13ポジション（GK, CB, LB, RB, DM, CM, RM, LM, AM, LW, RW, SS, CF）
    pub fn standard() -> Self {
        Self {
            positions: STANDARD_POSITIONS
                .iter()
                .map(|&(code, color)| Position::new(code, color))
                .collect(),
        }
    }

    /// 任意のポジション一覧からカタログを生成
    ///
    /// 内容の検証は`SquadSheetBuilder::build()`時に行われます。
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// ポジション数
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// カタログが空かどうか
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// カタログ順にポジションを列挙
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// カタログ順にポジションコードを列挙
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.positions.iter().map(|p| p.code.as_str())
    }

    /// ポジションコードに設定された強調色
    pub fn color_of(&self, code: &str) -> Option<Rgb> {
        self.positions
            .iter()
            .find(|p| p.code == code)
            .and_then(|p| p.color)
    }

    /// カタログの整合性を検証する
    pub(crate) fn validate(&self) -> Result<(), SquadSheetError> {
        if self.positions.is_empty() {
            return Err(SquadSheetError::Config(
                "Position catalog must not be empty".to_string(),
            ));
        }

        for (idx, position) in self.positions.iter().enumerate() {
            if position.code.trim().is_empty() {
                return Err(SquadSheetError::Config(format!(
                    "Position code at index {} is blank",
                    idx
                )));
            }
            if self.positions[..idx].iter().any(|p| p.code == position.code) {
                return Err(SquadSheetError::Config(format!(
                    "Duplicate position code: '{}'",
                    position.code
                )));
            }
            if let Some(color) = position.color {
                if color > 0xFF_FFFF {
                    return Err(SquadSheetError::Config(format!(
                        "Color for '{}' is not a 24-bit RGB value: {:#X}",
                        position.code, color
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let catalog = PositionCatalog::standard();
        let codes: Vec<&str> = catalog.codes().collect();
        assert_eq!(
            codes,
            vec!["GK", "CB", "LB", "RB", "DM", "CM", "RM", "LM", "AM", "LW", "RW", "SS", "CF"]
        );
    }

    #[test]
    fn test_standard_colors() {
        let catalog = PositionCatalog::standard();
        assert_eq!(catalog.color_of("GK"), Some(0x90EE90));
        assert_eq!(catalog.color_of("CB"), Some(0xFFD580));
        assert_eq!(catalog.color_of("LB"), catalog.color_of("RB"));
        assert_eq!(catalog.color_of("LM"), Some(0xFFFFE0));
        assert_eq!(catalog.color_of("AM"), Some(0xD8BFD8));
        assert_eq!(catalog.color_of("RW"), Some(0xFFB6C1));
        assert_eq!(catalog.color_of("CF"), Some(0xFFA07A));
        assert!(catalog.iter().all(|p| p.color.is_some()));
    }

    #[test]
    fn test_unknown_code() {
        let catalog = PositionCatalog::standard();
        assert!(catalog.codes().all(|c| c != "ST" && c != "gk"));
        assert_eq!(catalog.color_of("ST"), None);
        assert_eq!(catalog.color_of("gk"), None);
    }

    #[test]
    fn test_plain_position_has_no_color() {
        let catalog = PositionCatalog::new(vec![Position::plain("ST"), Position::new("GK", 0x00FF00)]);
        assert_eq!(catalog.codes().collect::<Vec<_>>(), vec!["ST", "GK"]);
        assert_eq!(catalog.color_of("ST"), None);
        assert_eq!(catalog.color_of("GK"), Some(0x00FF00));
    }

    #[test]
    fn test_validate_standard() {
        assert!(PositionCatalog::standard().validate().is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let result = PositionCatalog::new(vec![]).validate();
        assert!(matches!(result, Err(SquadSheetError::Config(msg)) if msg.contains("empty")));
    }

    #[test]
    fn test_validate_duplicate() {
        let catalog = PositionCatalog::new(vec![Position::plain("GK"), Position::plain("GK")]);
        match catalog.validate() {
            Err(SquadSheetError::Config(msg)) => assert!(msg.contains("Duplicate")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_validate_blank_code() {
        let catalog = PositionCatalog::new(vec![Position::plain("GK"), Position::plain(" ")]);
        match catalog.validate() {
            Err(SquadSheetError::Config(msg)) => assert!(msg.contains("index 1")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_validate_color_out_of_range() {
        let catalog = PositionCatalog::new(vec![Position::new("GK", 0x1_000_000)]);
        assert!(catalog.validate().is_err());
    }
}
