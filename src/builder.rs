//! Builder Module
//!
//! Fluent Builder APIを提供し、`SquadSheetGenerator`インスタンスを段階的に構築する。

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::api::{MalformedLinePolicy, OutputFormat};
use crate::catalog::PositionCatalog;
use crate::error::SquadSheetError;
use crate::layout::SheetLayout;
use crate::logo::{club_slug, suggested_file_name, HttpLogoFetcher, LogoFetcher};
use crate::parser::parse_roster;
use crate::types::{CellCoord, PlayerRecord};
use crate::writer::{render, SheetStyle};

/// Excelのシート名の最大文字数
const MAX_SHEET_NAME_LEN: usize = 31;

/// シート名に使用できない文字
const INVALID_SHEET_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// 生成処理の設定を保持する内部構造体
#[derive(Debug)]
pub(crate) struct GeneratorConfig {
    /// ポジション列の定義
    pub catalog: PositionCatalog,

    /// 不正な名簿行の扱い
    pub malformed_lines: MalformedLinePolicy,

    /// ロゴ取得器（`None`の場合は`build()`時に`HttpLogoFetcher`を生成）
    pub logo_fetcher: Option<Box<dyn LogoFetcher>>,

    /// シートの見た目
    pub style: SheetStyle,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            catalog: PositionCatalog::standard(),
            malformed_lines: MalformedLinePolicy::Reject,
            logo_fetcher: None,
            style: SheetStyle::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust
/// use squadsheet::{MalformedLinePolicy, NoLogo, SquadSheetBuilder};
///
/// # fn main() -> Result<(), squadsheet::SquadSheetError> {
/// let generator = SquadSheetBuilder::new()
///     .with_logo_fetcher(NoLogo)
///     .with_malformed_line_policy(MalformedLinePolicy::Skip)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SquadSheetBuilder {
    /// 内部設定（構築中）
    config: GeneratorConfig,
}

impl SquadSheetBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - ポジション: 標準の13ポジション
    /// - 不正な行: 処理全体を中断
    /// - ロゴ: `HttpLogoFetcher`（logo.clearbit.com）
    /// - シート名: `Squad`
    /// - タイトルのフォントサイズ: 16
    /// - ロゴ: 1行目の表の右隣（標準ではP1）に80×80で配置
    pub fn new() -> Self {
        Self::default()
    }

    /// ポジション列の定義を指定する
    pub fn with_catalog(mut self, catalog: PositionCatalog) -> Self {
        self.config.catalog = catalog;
        self
    }

    /// 不正な名簿行の扱いを指定する
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use squadsheet::{MalformedLinePolicy, SquadSheetBuilder};
    ///
    /// let builder = SquadSheetBuilder::new()
    ///     .with_malformed_line_policy(MalformedLinePolicy::Skip);
    /// ```
    pub fn with_malformed_line_policy(mut self, policy: MalformedLinePolicy) -> Self {
        self.config.malformed_lines = policy;
        self
    }

    /// ロゴ取得器を指定する
    ///
    /// ネットワークを使わない場合は`NoLogo`を指定します。
    pub fn with_logo_fetcher(mut self, fetcher: impl LogoFetcher + 'static) -> Self {
        self.config.logo_fetcher = Some(Box::new(fetcher));
        self
    }

    /// ワークシート名を指定する
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.config.style.sheet_name = name.into();
        self
    }

    /// タイトルのフォントサイズを指定する
    pub fn with_title_font_size(mut self, size: f64) -> Self {
        self.config.style.title_font_size = size;
        self
    }

    /// ロゴを配置するセルを指定する
    ///
    /// # 引数
    ///
    /// * `row` - 行（0始まり）
    /// * `col` - 列（0始まり）
    pub fn with_logo_anchor(mut self, row: u32, col: u16) -> Self {
        self.config.style.logo_anchor = Some((row, col));
        self
    }

    /// ロゴの表示サイズを指定する
    pub fn with_logo_size(mut self, width: u32, height: u32) -> Self {
        self.config.style.logo_size = (width, height);
        self
    }

    /// 設定を検証し、`SquadSheetGenerator`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `SquadSheetError::Config(String)`: 設定の検証に失敗した場合
    ///   * ポジションが空、コードが空白、コードの重複、色が24ビットを超える
    ///   * シート名が空、31文字超、使用できない文字を含む
    ///   * タイトルのフォントサイズが1〜409の範囲外
    ///   * ロゴサイズが0
    ///   * ロゴの配置セルが表と重なる
    pub fn build(self) -> Result<SquadSheetGenerator, SquadSheetError> {
        let mut config = self.config;

        // 1. ポジション定義の検証
        config.catalog.validate()?;

        // 2. シート名の検証
        let name = &config.style.sheet_name;
        if name.trim().is_empty() {
            return Err(SquadSheetError::Config(
                "Sheet name must not be blank".to_string(),
            ));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(SquadSheetError::Config(format!(
                "Sheet name '{}' exceeds {} characters",
                name, MAX_SHEET_NAME_LEN
            )));
        }
        if let Some(c) = name.chars().find(|c| INVALID_SHEET_NAME_CHARS.contains(c)) {
            return Err(SquadSheetError::Config(format!(
                "Sheet name '{}' contains invalid character '{}'",
                name, c
            )));
        }

        // 3. タイトルのフォントサイズ
        let font_size = config.style.title_font_size;
        if !(1.0..=409.0).contains(&font_size) {
            return Err(SquadSheetError::Config(format!(
                "Invalid title font size: {}",
                font_size
            )));
        }

        // 4. ロゴの配置
        let (width, height) = config.style.logo_size;
        if width == 0 || height == 0 {
            return Err(SquadSheetError::Config(format!(
                "Invalid logo size: {}x{}",
                width, height
            )));
        }
        if let Some((row, col)) = config.style.logo_anchor {
            let table_cols = config.catalog.len() + 2;
            if usize::from(col) < table_cols {
                return Err(SquadSheetError::Config(format!(
                    "Logo anchor {} overlaps the squad table",
                    CellCoord::new(row, col).to_a1_notation()
                )));
            }
        }

        // 5. ロゴ取得器（未指定の場合のみHTTPクライアントを生成）
        let logo_fetcher: Box<dyn LogoFetcher> = match config.logo_fetcher.take() {
            Some(fetcher) => fetcher,
            None => Box::new(HttpLogoFetcher::new()),
        };

        Ok(SquadSheetGenerator {
            config,
            logo_fetcher,
        })
    }
}

/// 生成されたスカッドシート
///
/// ワークブックのバイト列と、推奨ファイル名、レイアウトを保持します。
#[derive(Debug, Clone)]
pub struct SquadSheet {
    file_name: String,
    bytes: Vec<u8>,
    layout: SheetLayout,
    player_count: usize,
    has_logo: bool,
}

impl SquadSheet {
    /// 推奨ファイル名（`<slug>_squad.xlsx`）
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// xlsxファイルのバイト列
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// シートのレイアウト
    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// 選手行の数
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// ロゴ画像が埋め込まれたか
    pub fn has_logo(&self) -> bool {
        self.has_logo
    }

    /// ライターに書き出す
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), SquadSheetError> {
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// 指定されたパスに保存する
    ///
    /// パスが既存のディレクトリの場合は、その中に推奨ファイル名で保存します。
    /// 保存先のパスを返します。
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf, SquadSheetError> {
        let path = path.as_ref();
        let target = if path.is_dir() {
            path.join(&self.file_name)
        } else {
            path.to_path_buf()
        };

        self.write_to(File::create(&target)?)?;
        Ok(target)
    }

    /// 一時ディレクトリに新しいxlsxファイルとして保存し、そのパスを返す
    ///
    /// ファイルは削除されずに残ります。
    pub fn save_to_temp_file(&self) -> Result<PathBuf, SquadSheetError> {
        let stem = self.file_name.trim_end_matches(".xlsx");
        let temp = tempfile::Builder::new()
            .prefix(&format!("{}_", stem))
            .suffix(".xlsx")
            .tempfile()?;
        let (file, path) = temp.keep().map_err(|e| e.error)?;
        self.write_to(file)?;
        Ok(path)
    }
}

/// JSON出力用の名簿
#[derive(Serialize)]
struct RosterExport<'a> {
    club: &'a str,
    players: &'a [PlayerRecord],
}

/// スカッドシート生成のファサード
///
/// `SquadSheetBuilder`を使用して構築された設定に基づいて、
/// 名簿テキストの解析からワークブックの生成までを実行します。
///
/// # 使用例
///
/// ```rust
/// use squadsheet::{NoLogo, SquadSheetBuilder};
///
/// # fn main() -> Result<(), squadsheet::SquadSheetError> {
/// let generator = SquadSheetBuilder::new().with_logo_fetcher(NoLogo).build()?;
/// let sheet = generator.generate("7\tMessi\tRW\tCF", "Inter Miami")?;
///
/// assert_eq!(sheet.file_name(), "intermiami_squad.xlsx");
/// assert_eq!(sheet.player_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SquadSheetGenerator {
    config: GeneratorConfig,
    logo_fetcher: Box<dyn LogoFetcher>,
}

impl SquadSheetGenerator {
    /// 名簿テキストを設定に従って解析する
    pub fn parse(&self, roster: &str) -> Result<Vec<PlayerRecord>, SquadSheetError> {
        parse_roster(roster, self.config.malformed_lines)
    }

    /// 名簿テキストとクラブ名からスカッドシートを生成する
    ///
    /// # 処理フロー
    ///
    /// 1. 入力の検証（名簿テキスト、クラブ名が空でないこと）
    /// 2. 名簿の解析
    /// 3. レイアウトの構築
    /// 4. ロゴの取得（失敗時はロゴなし）
    /// 5. ワークブックの書き出し
    ///
    /// # 発生し得るエラー
    ///
    /// * `SquadSheetError::MissingInput`: 名簿テキストまたはクラブ名が空
    /// * `SquadSheetError::MalformedLine`: `Reject`ポリシーで不正な行を検出
    /// * `SquadSheetError::Xlsx`: ワークブックの書き出しに失敗
    pub fn generate(&self, roster: &str, club: &str) -> Result<SquadSheet, SquadSheetError> {
        validate_input(roster, club)?;

        let players = self.parse(roster)?;
        let layout = SheetLayout::build(club, &players, &self.config.catalog);

        let slug = club_slug(club);
        let logo = self.logo_fetcher.fetch(&slug);
        if logo.is_none() {
            log::debug!("No logo available for '{}'", slug);
        }

        let mut rendered = render(&layout, logo.as_deref(), &self.config.style)?;
        let bytes = rendered.workbook.save_to_buffer()?;

        log::debug!(
            "Generated squad sheet for '{}' with {} player(s) ({} bytes)",
            club,
            players.len(),
            bytes.len()
        );

        Ok(SquadSheet {
            file_name: suggested_file_name(club),
            bytes,
            layout,
            player_count: players.len(),
            has_logo: rendered.has_logo,
        })
    }

    /// スカッドシートを生成して一時ファイルに保存し、そのパスを返す
    pub fn generate_to_temp_file(
        &self,
        roster: &str,
        club: &str,
    ) -> Result<PathBuf, SquadSheetError> {
        self.generate(roster, club)?.save_to_temp_file()
    }

    /// 指定されたフォーマットでライターに出力する
    ///
    /// `OutputFormat::Json`の場合はワークブックを生成せず、解析済みの
    /// 選手レコードをJSONで出力します（ロゴも取得しません）。
    pub fn convert<W: Write>(
        &self,
        roster: &str,
        club: &str,
        format: OutputFormat,
        mut output: W,
    ) -> Result<(), SquadSheetError> {
        match format {
            OutputFormat::Xlsx => self.generate(roster, club)?.write_to(output),
            OutputFormat::Json => {
                validate_input(roster, club)?;
                let players = self.parse(roster)?;
                let export = RosterExport {
                    club,
                    players: &players,
                };
                serde_json::to_writer_pretty(&mut output, &export)?;
                writeln!(output)?;
                output.flush()?;
                Ok(())
            }
        }
    }
}

/// 必須入力の検証
fn validate_input(roster: &str, club: &str) -> Result<(), SquadSheetError> {
    if roster.trim().is_empty() {
        return Err(SquadSheetError::MissingInput(
            "squad list is empty".to_string(),
        ));
    }
    if club.trim().is_empty() {
        return Err(SquadSheetError::MissingInput(
            "club name is empty".to_string(),
        ));
    }
    Ok(())
}
