//! squadsheet - Turn pasted squad lists into color-coded Excel squad sheets
//!
//! This crate parses loosely-delimited roster text (one player per line:
//! number, name, then positions) and renders it into a formatted XLSX sheet
//! with one column per recognized position, color-coded cells and an optional
//! club logo.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use squadsheet::SquadSheetBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a generator with default settings (fetches the club logo over HTTP)
//!     let generator = SquadSheetBuilder::new().build()?;
//!
//!     let roster = "1\tJordan Pickford\tGK\n9\tBeto\tCF\tSS";
//!
//!     // Generate the sheet and persist it to a temporary file
//!     let path = generator.generate_to_temp_file(roster, "Everton FC")?;
//!     println!("{}", path.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Offline Generation
//!
//! ```rust
//! use squadsheet::{NoLogo, SquadSheetBuilder};
//!
//! # fn main() -> Result<(), squadsheet::SquadSheetError> {
//! let generator = SquadSheetBuilder::new().with_logo_fetcher(NoLogo).build()?;
//! let sheet = generator.generate("10 Pele CF", "Santos")?;
//!
//! assert_eq!(sheet.file_name(), "santos_squad.xlsx");
//! let xlsx_bytes: &[u8] = sheet.bytes();
//! assert!(!xlsx_bytes.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Parsing Only
//!
//! ```rust
//! use squadsheet::{parse_roster, MalformedLinePolicy};
//!
//! let players = parse_roster("7\tMessi\tRW\tCF", MalformedLinePolicy::Reject).unwrap();
//! assert_eq!(players[0].name, "Messi");
//! assert_eq!(players[0].primary_position, "RW");
//! ```

mod api;
mod builder;
mod catalog;
mod error;
mod layout;
mod logo;
mod parser;
mod types;
mod writer;

// 公開API
pub use api::{MalformedLinePolicy, OutputFormat};
pub use builder::{SquadSheet, SquadSheetBuilder, SquadSheetGenerator};
pub use catalog::{Position, PositionCatalog, Rgb};
pub use error::SquadSheetError;
pub use layout::{LayoutCell, SheetLayout, NAME_HEADER, NUMBER_HEADER};
pub use logo::{club_slug, suggested_file_name, HttpLogoFetcher, LogoFetcher, NoLogo, DEFAULT_LOGO_HOST};
pub use parser::parse_roster;
pub use types::PlayerRecord;
