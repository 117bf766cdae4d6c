//! Shipped-resource regression checks.
//!
//! Every locale that ships under `res/` must load cleanly and render a full
//! category listing. These tests guard the resource files themselves: a key
//! renamed in one translation but not the other shows up here as a visible
//! `ALERT:` placeholder in the rendered output.

use std::path::{Path, PathBuf};

use gather::catalog::{Catalog, Connector, EventFactory};
use gather::i18n::TranslationTable;
use gather::menu::Menu;

const LOCALES: &[&str] = &["EN", "IT"];

fn resource_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("res")
}

fn load_locale(locale: &str) -> (TranslationTable, Catalog) {
    let dir = resource_dir();
    let table = TranslationTable::load(&dir.join(format!("{locale}_MenuDescr.json")))
        .unwrap_or_else(|e| panic!("{locale} menu table should load: {e}"));
    let catalog = Catalog::load(&dir.join(format!("{locale}_Categories.json")))
        .unwrap_or_else(|e| panic!("{locale} catalog should load: {e}"));
    (table, catalog)
}

#[test]
fn every_locale_defines_the_menu_keys() {
    for locale in LOCALES {
        let (table, _) = load_locale(locale);
        for key in ["welcome", "exit", "menu", "choice", "invalidChoice", "categoryList"] {
            assert!(
                table.contains(key),
                "{locale} menu table is missing key `{key}`"
            );
        }
    }
}

#[test]
fn every_locale_renders_a_complete_field_listing() {
    for locale in LOCALES {
        let (table, catalog) = load_locale(locale);
        let menu = Menu::new(&catalog, &catalog, table);

        let mut out = Vec::new();
        menu.print_welcome(&mut out).unwrap();
        menu.print_fields(&mut out).unwrap();
        menu.print_exit(&mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(
            !rendered.contains("ALERT:"),
            "{locale} resources have unresolved keys:\n{rendered}"
        );
        for category in catalog.all() {
            assert!(
                rendered.contains(&category.name),
                "{locale} listing is missing category `{}`",
                category.id
            );
        }
    }
}

#[test]
fn field_columns_align_three_past_the_longest_name() {
    for locale in LOCALES {
        let (table, catalog) = load_locale(locale);
        for id in catalog.categories().unwrap() {
            let category = catalog.create(&id).unwrap();
            let fields = TranslationTable::load(&category.translation_path).unwrap();

            let width = category
                .fields
                .iter()
                .map(|key| fields.field_name(key).chars().count())
                .max()
                .unwrap_or(0)
                + 3;

            let menu = Menu::new(&catalog, &catalog, table.clone());
            let mut out = Vec::new();
            menu.print_fields(&mut out).unwrap();
            let rendered = String::from_utf8(out).unwrap();

            for key in &category.fields {
                let name = fields.field_name(key);
                let pad = " ".repeat(width - name.chars().count());
                let row = format!("  {name}:{pad}{}", fields.field_descr(key));
                assert!(
                    rendered.contains(&row),
                    "{locale}/{id}: missing aligned row `{row}`"
                );
            }
        }
    }
}

#[test]
fn both_locales_share_the_same_category_and_field_keys() {
    let (_, en) = load_locale("EN");
    let (_, it) = load_locale("IT");
    assert_eq!(en.categories().unwrap(), it.categories().unwrap());
    for id in en.categories().unwrap() {
        let en_fields = en.create(&id).unwrap().fields;
        let it_fields = it.create(&id).unwrap().fields;
        assert_eq!(en_fields, it_fields, "field keys diverge for `{id}`");
    }
}
