//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use serde::Serialize;

/// 名簿の1行から解析された選手レコード
///
/// すべての値は入力テキストのトークンをそのまま保持します。
/// 背番号の形式やポジションの妥当性は検証しません。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    /// 名簿テキスト内の行番号（1始まり、前後の空白除去後）
    pub line: usize,

    /// 背番号（最初のトークン）
    pub number: String,

    /// 選手名（2番目のトークン）
    pub name: String,

    /// 主ポジション（3番目のトークン、なければ空文字列）
    pub primary_position: String,

    /// 副ポジション（4番目以降のトークン）
    pub secondary_positions: Vec<String>,
}

impl PlayerRecord {
    /// 主ポジション（空でない場合）と副ポジションを順に列挙する
    pub fn positions(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_position.as_str())
            .filter(|p| !p.is_empty())
            .chain(self.secondary_positions.iter().map(String::as_str))
    }

    /// 指定されたポジションを担当するかを判定
    pub fn plays(&self, code: &str) -> bool {
        !code.is_empty() && self.positions().any(|p| p == code)
    }
}

/// セル座標（0始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CellCoord {
    pub row: u32,
    pub col: u16,
}

impl CellCoord {
    /// 新しい座標を生成
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// A1形式の文字列に変換（例: (0, 15) -> "P1"）
    #[allow(clippy::wrong_self_convention)]
    pub fn to_a1_notation(&self) -> String {
        let col_str = Self::col_index_to_letter(self.col);
        format!("{}{}", col_str, self.row + 1)
    }

    /// 列インデックスを文字列に変換（0 -> "A", 25 -> "Z", 26 -> "AA"）
    fn col_index_to_letter(col: u16) -> String {
        let mut col = u32::from(col);
        let mut result = String::new();
        loop {
            let remainder = col % 26;
            result.insert(0, (b'A' + remainder as u8) as char);
            if col < 26 {
                break;
            }
            col = col / 26 - 1;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(primary: &str, secondary: &[&str]) -> PlayerRecord {
        PlayerRecord {
            line: 1,
            number: "10".to_string(),
            name: "Pele".to_string(),
            primary_position: primary.to_string(),
            secondary_positions: secondary.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_positions_primary_then_secondary() {
        let player = record("RW", &["CF", "SS"]);
        let positions: Vec<&str> = player.positions().collect();
        assert_eq!(positions, vec!["RW", "CF", "SS"]);
    }

    #[test]
    fn test_positions_skip_empty_primary() {
        let player = record("", &[]);
        assert_eq!(player.positions().count(), 0);
    }

    #[test]
    fn test_plays() {
        let player = record("RW", &["CF"]);
        assert!(player.plays("RW"));
        assert!(player.plays("CF"));
        assert!(!player.plays("GK"));
        assert!(!player.plays(""));
    }

    #[test]
    fn test_serialize_record() {
        let player = record("CF", &[]);
        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains("\"number\":\"10\""));
        assert!(json.contains("\"primary_position\":\"CF\""));
        assert!(json.contains("\"secondary_positions\":[]"));
    }

    #[test]
    fn test_cell_coord_a1_notation() {
        assert_eq!(CellCoord::new(0, 0).to_a1_notation(), "A1");
        assert_eq!(CellCoord::new(0, 14).to_a1_notation(), "O1");
        assert_eq!(CellCoord::new(0, 15).to_a1_notation(), "P1");
        assert_eq!(CellCoord::new(9, 25).to_a1_notation(), "Z10");
        assert_eq!(CellCoord::new(0, 26).to_a1_notation(), "AA1");
        assert_eq!(CellCoord::new(99, 701).to_a1_notation(), "ZZ100");
        assert_eq!(CellCoord::new(0, 702).to_a1_notation(), "AAA1");
    }

    #[allow(unused_doc_comments)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[allow(unused_doc_comments)]
        /// A1記法の形式検証
        ///
        /// 列部分は大文字のアルファベット、行部分は1始まりの行番号になることを確認します。
        proptest! {
            #[test]
            fn test_a1_notation_shape(row in 0u32..100_000, col in 0u16..16_384) {
                let a1 = CellCoord::new(row, col).to_a1_notation();

                let letters: String = a1.chars().take_while(|c| c.is_ascii_uppercase()).collect();
                let digits: String = a1.chars().skip(letters.len()).collect();

                prop_assert!(!letters.is_empty());
                prop_assert!(letters.len() <= 3);
                prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));
                prop_assert_eq!(digits.parse::<u32>().unwrap(), row + 1);
            }
        }
    }
}
