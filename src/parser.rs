//! Roster Parser Module
//!
//! 貼り付けられた名簿テキストを選手レコードの列に変換するモジュール。
//!
//! 各行はタブ区切りを優先し、タブで2つ以上に分割できない場合は
//! 連続する空白で分割します。

use crate::api::MalformedLinePolicy;
use crate::error::SquadSheetError;
use crate::types::PlayerRecord;

/// 名簿テキストを解析して選手レコードを入力順に返す
///
/// # 引数
///
/// * `text` - 改行区切りの名簿テキスト（全体の前後の空白は除去される）
/// * `policy` - 背番号と名前を持たない行の扱い
///
/// # 戻り値
///
/// * `Ok(Vec<PlayerRecord>)` - 入力順の選手レコード（空の入力では空）
/// * `Err(SquadSheetError::MalformedLine)` - `Reject`ポリシーで不正な行を検出した場合
///
/// # 使用例
///
/// ```rust
/// use squadsheet::{parse_roster, MalformedLinePolicy};
///
/// let players = parse_roster("7\tMessi\tRW\tCF\n10 Pele CF", MalformedLinePolicy::Reject).unwrap();
/// assert_eq!(players.len(), 2);
/// assert_eq!(players[0].secondary_positions, vec!["CF".to_string()]);
/// assert_eq!(players[1].primary_position, "CF");
/// ```
pub fn parse_roster(
    text: &str,
    policy: MalformedLinePolicy,
) -> Result<Vec<PlayerRecord>, SquadSheetError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut players = Vec::new();
    for (idx, line) in text.split('\n').enumerate() {
        let line_no = idx + 1;
        match parse_line(line, line_no) {
            Some(player) => players.push(player),
            None => match policy {
                MalformedLinePolicy::Reject => {
                    return Err(SquadSheetError::MalformedLine {
                        line: line_no,
                        content: line.to_string(),
                    });
                }
                MalformedLinePolicy::Skip => {
                    log::warn!("Skipping malformed roster line {}: '{}'", line_no, line);
                }
            },
        }
    }

    log::debug!("Parsed {} player(s) from roster", players.len());
    Ok(players)
}

/// 1行を選手レコードに変換する（トークンが2つ未満なら`None`）
fn parse_line(line: &str, line_no: usize) -> Option<PlayerRecord> {
    let mut tokens: Vec<&str> = line.split('\t').collect();
    if tokens.len() < 2 {
        tokens = line.split_whitespace().collect();
    }
    if tokens.len() < 2 {
        return None;
    }

    let mut positions = tokens[2..].iter().map(|s| s.to_string());
    let primary_position = positions.next().unwrap_or_default();
    let secondary_positions: Vec<String> = positions.collect();

    Some(PlayerRecord {
        line: line_no,
        number: tokens[0].to_string(),
        name: tokens[1].to_string(),
        primary_position,
        secondary_positions,
    })
}
