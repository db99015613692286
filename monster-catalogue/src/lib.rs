//! # Monster Catalogue
//!
//! An in-memory catalogue of monster cards driven by an interactive text menu.
//! Every card is a unique, case-sensitive name with four stats (strength,
//! speed, stealth, cunning), each an integer between 1 and 25.
//!
//! ## Features
//!
//! - **Input Sanitization & Validation** - composable filters that re-prompt until the answer is valid
//! - **Interactive Terminal Interface** - prompt loops over any reader/writer pair
//! - **Catalogue Store** - sorted, duplicate-free storage with typed lookup errors
//! - **Menu Session** - add, search, update, delete and print-all over one catalogue
//!
//! ("serde" feature)
//! - **JSON output** - `Serialize` for cards and a [`formatter::JsonFormatter`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use monster_catalogue::session::{Session, SessionOptions};
//! use monster_catalogue::utils::Terminal;
//!
//! let mut session = Session::new(Terminal::stdio(), SessionOptions::default());
//! if let Err(e) = session.run() {
//!     eprintln!("{}", e);
//! }
//! ```
//!
//! ### Working with the store directly
//!
//! ```rust
//! use monster_catalogue::catalogue::{Catalogue, Stats};
//!
//! let mut catalogue = Catalogue::seeded();
//! catalogue.insert("Wyrm", Stats::new(10, 10, 10, 10).unwrap()).unwrap();
//! assert_eq!(catalogue.len(), 9);
//! assert!(catalogue.insert("Wyrm", Stats::new(1, 1, 1, 1).unwrap()).is_err());
//! ```
//!
//! ## Architecture
//!
//! - **`utils`** - [`utils::Sanitize`] filters and the [`utils::Terminal`] prompt loop
//! - **`catalogue`** - [`catalogue::Catalogue`] and the bounded [`catalogue::StatValue`]
//! - **`menu`** - the six [`menu::MenuChoice`] entries
//! - **`formatter`** - card and table rendering
//! - **`session`** - the menu loop tying everything together
//!
//! ## Error Handling
//!
//! Invalid input never escapes a prompt loop; it is shown and asked again.
//! Lookups and inserts return [`error::CatalogueError`]; a session only stops
//! early with [`error::TerminalError`] when its input runs out.

pub mod catalogue;

pub mod error;

pub mod formatter;

pub mod menu;

pub mod session;

pub mod utils;
