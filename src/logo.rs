//! Club Logo Module
//!
//! クラブロゴ画像の取得を抽象化するモジュール。
//!
//! ロゴは装飾にすぎないため、取得の失敗はエラーではなく`None`として扱います。
//! ネットワークを使わないテストのために、取得処理は`LogoFetcher`トレイトとして
//! 差し替え可能になっています。

use std::fmt;

/// ロゴ取得サービスのデフォルトのベースURL
pub const DEFAULT_LOGO_HOST: &str = "https://logo.clearbit.com";

/// クラブ名からロゴ取得用のキーを生成する（小文字化し、空白を除去）
///
/// # 使用例
///
/// ```rust
/// assert_eq!(squadsheet::club_slug("Inter Miami"), "intermiami");
/// ```
pub fn club_slug(club: &str) -> String {
    club.replace(' ', "").to_lowercase()
}

/// ファイル名に使用できない文字
const INVALID_FILE_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// 出力ファイルの推奨ファイル名（`<slug>_squad.xlsx`）
///
/// ファイル名に使用できない文字と制御文字は`_`に置き換えます。
///
/// # 使用例
///
/// ```rust
/// assert_eq!(squadsheet::suggested_file_name("Everton FC"), "evertonfc_squad.xlsx");
/// assert_eq!(squadsheet::suggested_file_name("Bodø/Glimt"), "bodø_glimt_squad.xlsx");
/// ```
pub fn suggested_file_name(club: &str) -> String {
    let stem: String = club_slug(club)
        .chars()
        .map(|c| {
            if INVALID_FILE_NAME_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("{}_squad.xlsx", stem)
}

/// ロゴ画像の取得機能
///
/// キー（`club_slug`で生成）に対応する画像のバイト列を返します。
/// 取得できなかった場合は`None`を返し、シートはロゴなしで生成されます。
pub trait LogoFetcher: fmt::Debug {
    /// キーに対応するロゴ画像を取得する
    fn fetch(&self, key: &str) -> Option<Vec<u8>>;
}

/// ロゴを取得しない実装
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLogo;

impl LogoFetcher for NoLogo {
    fn fetch(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }
}

/// HTTP GETでロゴを取得する実装
///
/// `{base_url}/{key}.com`に対してブロッキングでリクエストし、
/// ステータス200の場合のみ本文を返します。タイムアウトはHTTPクライアントの
/// デフォルト値に従い、リトライは行いません。
pub struct HttpLogoFetcher {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl fmt::Debug for HttpLogoFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpLogoFetcher")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for HttpLogoFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpLogoFetcher {
    /// デフォルトのロゴサービスを使う取得器を生成
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_LOGO_HOST)
    }

    /// ベースURLを指定して取得器を生成
    ///
    /// 末尾の`/`は取り除かれます。
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::blocking::Client::new(), base_url)
    }

    /// 既存のHTTPクライアントを使う取得器を生成
    pub fn with_client(client: reqwest::blocking::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// キーに対応するリクエストURL
    pub fn url_for(&self, key: &str) -> String {
        format!("{}/{}.com", self.base_url, key)
    }
}

impl LogoFetcher for HttpLogoFetcher {
    fn fetch(&self, key: &str) -> Option<Vec<u8>> {
        let url = self.url_for(key);

        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(e) => {
                log::debug!("Logo request to {} failed: {}", url, e);
                return None;
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            log::debug!("Logo request to {} returned {}", url, response.status());
            return None;
        }

        match response.bytes() {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                log::debug!("Failed to read logo body from {}: {}", url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_slug() {
        assert_eq!(club_slug("Everton FC"), "evertonfc");
        assert_eq!(club_slug("  Real  Madrid "), "realmadrid");
        assert_eq!(club_slug("PSG"), "psg");
    }

    #[test]
    fn test_suggested_file_name() {
        assert_eq!(suggested_file_name("Inter Miami"), "intermiami_squad.xlsx");
    }

    #[test]
    fn test_suggested_file_name_replaces_path_characters() {
        assert_eq!(suggested_file_name("Bodø/Glimt"), "bodø_glimt_squad.xlsx");
        assert_eq!(
            suggested_file_name(r#"A\B:C*D?E"F<G>H|I"#),
            "a_b_c_d_e_f_g_h_i_squad.xlsx"
        );
        // ロゴのキーはそのまま
        assert_eq!(club_slug("Bodø/Glimt"), "bodø/glimt");
    }

    #[test]
    fn test_no_logo() {
        assert_eq!(NoLogo.fetch("evertonfc"), None);
    }

    #[test]
    fn test_url_for() {
        let fetcher = HttpLogoFetcher::new();
        assert_eq!(
            fetcher.url_for("intermiami"),
            "https://logo.clearbit.com/intermiami.com"
        );
    }

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let fetcher = HttpLogoFetcher::with_base_url("http://localhost:8080/logos/");
        assert_eq!(fetcher.url_for("psg"), "http://localhost:8080/logos/psg.com");
    }

    #[test]
    fn test_unreachable_host_is_absent() {
        // ポート1は接続拒否される
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap();
        let fetcher = HttpLogoFetcher::with_client(client, "http://127.0.0.1:1");
        assert_eq!(fetcher.fetch("evertonfc"), None);
    }
}
