//! Gather — a localized console front-end for event management.
//!
//! This crate reads typed user input from the terminal and renders menu text
//! resolved through JSON translation tables. Event categories and their field
//! descriptors come from a JSON catalog; the menu renderer talks to the
//! catalog only through the [`catalog::Connector`] and
//! [`catalog::EventFactory`] seams, so alternative data sources can be
//! plugged in without touching rendering code.
//!
//! # Quick start
//!
//! ```no_run
//! use gather::catalog::Catalog;
//! use gather::i18n::TranslationTable;
//! use gather::menu::Menu;
//!
//! # fn example() -> Result<(), gather::error::AppError> {
//! let table = TranslationTable::load("res/EN_MenuDescr.json".as_ref())?;
//! let catalog = Catalog::load("res/EN_Categories.json".as_ref())?;
//! let menu = Menu::new(&catalog, &catalog, table);
//! menu.print_welcome(&mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod input;
pub mod menu;
pub mod render;
#[cfg(test)]
pub mod testsupport;
