//! Localized menu rendering.
//!
//! `Menu` owns the menu translation table and collaborates with the catalog
//! through the [`Connector`] and [`EventFactory`] seams. All print operations
//! write to a caller-supplied writer so tests capture output in memory and
//! the binary passes stdout.

use std::io::Write;

use tracing::warn;

use crate::catalog::{Connector, EventFactory};
use crate::error::AppError;
use crate::i18n::{missing_placeholder, TranslationTable};

/// Extra columns between the longest field name and its description.
const FIELD_NAME_GAP: usize = 3;

/// Localized menu renderer for the event front-end.
pub struct Menu<'a> {
    connector: &'a dyn Connector,
    factory: &'a dyn EventFactory,
    table: TranslationTable,
}

impl<'a> Menu<'a> {
    /// Build a menu over an already-loaded translation table.
    ///
    /// Loading stays with the caller, so a `Menu` never holds a half-loaded
    /// dictionary.
    pub fn new(
        connector: &'a dyn Connector,
        factory: &'a dyn EventFactory,
        table: TranslationTable,
    ) -> Self {
        Self {
            connector,
            factory,
            table,
        }
    }

    /// The menu's own translation table, for prompts outside the renderer.
    pub fn translations(&self) -> &TranslationTable {
        &self.table
    }

    /// Print the localized welcome line.
    pub fn print_welcome(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.table.text("welcome"))
    }

    /// Print the localized exit line.
    pub fn print_exit(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.table.text("exit"))
    }

    /// Print the localized option list shown before each prompt.
    pub fn print_options(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.table.text("menu"))
    }

    /// Print every category with its aligned field listing.
    ///
    /// Each category resolves its field names and descriptions through its
    /// own translation table. A category whose table fails to load is
    /// reported and skipped; the listing keeps going.
    pub fn print_fields(&self, out: &mut dyn Write) -> Result<(), AppError> {
        writeln!(out, "{}", self.table.text("categoryList"))?;

        for id in self.connector.categories()? {
            let category = self.factory.create(&id)?;
            writeln!(out, "{}\n  {}\n", category.name, category.descr)?;

            let fields = match TranslationTable::load(&category.translation_path) {
                Ok(table) => table,
                Err(e) => {
                    warn!(category = %id, error = %e, "skipping category field listing");
                    writeln!(out, "  {}", missing_placeholder(&id))?;
                    continue;
                }
            };

            // First pass measures: the name column is padded to three
            // characters past the longest field name in this category.
            let names: Vec<String> = category
                .fields
                .iter()
                .map(|key| fields.field_name(key))
                .collect();
            let width = names
                .iter()
                .map(|name| name.chars().count())
                .max()
                .unwrap_or(0)
                + FIELD_NAME_GAP;

            for (key, name) in category.fields.iter().zip(&names) {
                let pad = width - name.chars().count();
                writeln!(out, "  {name}:{:pad$}{}", "", fields.field_descr(key))?;
            }
        }
        Ok(())
    }
}
