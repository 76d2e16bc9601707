//! # Catalog
//!
//! The immutable, categorized menu.
//!
//! ## Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  categories (ordered)                   index (flat)                    │
//! │  ──────────────────────                 ─────────────────────           │
//! │  Pizzas ─► [1] Margherita        ◄────── "1" ─► (0, 0)                  │
//! │            [2] Pepperoni Feast   ◄────── "2" ─► (0, 1)                  │
//! │            [3] Veggie Delight    ◄────── "3" ─► (0, 2)                  │
//! │  Sides  ─► [4] Garlic Bread      ◄────── "4" ─► (1, 0)                  │
//! │  ...                                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Built once at startup and passed by reference to the session; nothing
//! mutates it afterwards. Every code appears in exactly one category, which
//! [`Catalog::new`] enforces.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::CatalogError;
use crate::money::Money;
use crate::types::MenuItem;
use crate::validation::{validate_code, validate_item_name, validate_price_cents};
use crate::{CHECKOUT_COMMAND, EXIT_COMMAND};

/// Width of the separator lines on the menu and receipt.
pub const RULE_WIDTH: usize = 50;

/// Column width for item names; longer names are cut to fit.
pub const NAME_WIDTH: usize = 20;

// =============================================================================
// Definitions (input side)
// =============================================================================

/// One item as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    pub code: String,
    pub name: String,
    pub price_cents: i64,
}

/// One category as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

impl ItemDef {
    pub fn new(code: &str, name: &str, price_cents: i64) -> Self {
        ItemDef {
            code: code.to_string(),
            name: name.to_string(),
            price_cents,
        }
    }
}

/// The menu used when no configuration overrides it.
pub fn default_menu_defs() -> Vec<CategoryDef> {
    vec![
        CategoryDef {
            name: "Pizzas".to_string(),
            items: vec![
                ItemDef::new("1", "Margherita", 1250),
                ItemDef::new("2", "Pepperoni Feast", 1575),
                ItemDef::new("3", "Veggie Delight", 1300),
            ],
        },
        CategoryDef {
            name: "Sides".to_string(),
            items: vec![
                ItemDef::new("4", "Garlic Bread", 499),
                ItemDef::new("5", "Fries", 350),
            ],
        },
        CategoryDef {
            name: "Drinks".to_string(),
            items: vec![
                ItemDef::new("6", "Cola", 200),
                ItemDef::new("7", "Orange Juice", 250),
                ItemDef::new("8", "Water", 150),
            ],
        },
    ]
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct Category {
    name: String,
    items: Vec<MenuItem>,
}

/// The menu: ordered categories plus a flat code index for O(1) lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    /// Upper-cased code → (category index, item index).
    index: HashMap<String, (usize, usize)>,
}

impl Catalog {
    /// Builds a catalog, validating every definition.
    ///
    /// ## Errors
    /// - [`CatalogError::DuplicateCode`] when a code (compared without ASCII
    ///   case) appears twice anywhere in the menu
    /// - [`CatalogError::ReservedCode`] for `C` / `X`
    /// - [`CatalogError::DuplicateCategory`], [`CatalogError::Empty`]
    /// - [`CatalogError::Invalid`] for bad codes, names or prices
    pub fn new(defs: Vec<CategoryDef>) -> Result<Self, CatalogError> {
        let mut categories: Vec<Category> = Vec::with_capacity(defs.len());
        let mut index: HashMap<String, (usize, usize)> = HashMap::new();

        for (cat_idx, def) in defs.into_iter().enumerate() {
            validate_item_name("category", &def.name)?;
            let cat_name = def.name.trim().to_string();
            if categories.iter().any(|c| c.name == cat_name) {
                return Err(CatalogError::DuplicateCategory(cat_name));
            }

            let mut items = Vec::with_capacity(def.items.len());
            for (item_idx, item) in def.items.into_iter().enumerate() {
                validate_code(&item.code)?;
                validate_item_name("name", &item.name)?;
                validate_price_cents(item.price_cents)?;

                let code = item.code.trim().to_string();
                let key = fold(&code);
                if key == CHECKOUT_COMMAND || key == EXIT_COMMAND {
                    return Err(CatalogError::ReservedCode(code));
                }

                let name = item.name.trim().to_string();
                if let Some(&(c, i)) = index.get(&key) {
                    let first: &MenuItem = if c == cat_idx {
                        &items[i]
                    } else {
                        &categories[c].items[i]
                    };
                    return Err(CatalogError::DuplicateCode {
                        code,
                        first: first.name.clone(),
                        second: name,
                    });
                }

                index.insert(key, (cat_idx, item_idx));
                items.push(MenuItem::new(code, name, Money::from_cents(item.price_cents)));
            }

            categories.push(Category {
                name: cat_name,
                items,
            });
        }

        if index.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Catalog { categories, index })
    }

    /// The built-in pizzeria menu.
    pub fn default_menu() -> Self {
        Catalog::new(default_menu_defs()).expect("built-in menu is valid")
    }

    /// Finds an item by code. Surrounding whitespace and ASCII case are ignored.
    ///
    /// ```rust
    /// use pizzeria_core::Catalog;
    ///
    /// let catalog = Catalog::default_menu();
    /// assert_eq!(catalog.lookup("4").map(|i| i.name.as_str()), Some("Garlic Bread"));
    /// assert!(catalog.lookup("42").is_none());
    /// ```
    pub fn lookup(&self, code: &str) -> Option<&MenuItem> {
        self.index
            .get(&fold(code.trim()))
            .map(|&(c, i)| &self.categories[c].items[i])
    }

    /// Categories in menu order, each with its items in menu order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[MenuItem])> {
        self.categories
            .iter()
            .map(|c| (c.name.as_str(), c.items.as_slice()))
    }

    /// All items in menu order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Number of orderable items.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false for a constructed catalog; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Short hint for the main prompt: `1-8`, or the lone code.
    pub fn code_hint(&self) -> String {
        let mut items = self.items();
        let first = items.next().map(|i| i.code.as_str()).unwrap_or_default();
        match items.last() {
            Some(last) => format!("{first}-{}", last.code),
            None => first.to_string(),
        }
    }

    /// Renders the full menu screen.
    ///
    /// ## Layout
    /// ```text
    /// ==================================================
    ///              Welcome to Rust Pizzeria!
    /// ==================================================
    ///
    /// --- Pizzas ---
    /// [1] Margherita           $12.50
    /// ...
    /// --------------------------------------------------
    /// [C] Checkout | [X] Exit
    /// ==================================================
    /// ```
    /// Same catalog, same store name → byte-identical output.
    pub fn render(&self, store_name: &str) -> String {
        self.screen(store_name).to_string()
    }

    /// The menu screen as a `Display` value, for writing straight to a sink.
    pub fn screen<'a>(&'a self, store_name: &'a str) -> MenuScreen<'a> {
        MenuScreen {
            catalog: self,
            store_name,
        }
    }
}

/// A catalog paired with the store name it is shown under.
#[derive(Debug, Clone, Copy)]
pub struct MenuScreen<'a> {
    catalog: &'a Catalog,
    store_name: &'a str,
}

impl fmt::Display for MenuScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let welcome = format!("Welcome to {}!", self.store_name);

        writeln!(f, "{heavy}")?;
        writeln!(f, "{:^width$}", welcome, width = RULE_WIDTH)?;
        writeln!(f, "{heavy}")?;

        for category in &self.catalog.categories {
            writeln!(f, "\n--- {} ---", category.name)?;
            for item in &category.items {
                writeln!(
                    f,
                    "[{}] {:<width$.width$} {}",
                    item.code,
                    item.name,
                    item.price,
                    width = NAME_WIDTH
                )?;
            }
        }

        writeln!(f, "{light}")?;
        writeln!(f, "[{CHECKOUT_COMMAND}] Checkout | [{EXIT_COMMAND}] Exit")?;
        writeln!(f, "{heavy}")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::default_menu()
    }
}

fn fold(code: &str) -> String {
    code.to_ascii_uppercase()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::MAX_PRICE_CENTS;

    #[test]
    fn test_default_menu_lookup() {
        let catalog = Catalog::default_menu();
        assert_eq!(catalog.len(), 8);

        let margherita = catalog.lookup("1").unwrap();
        assert_eq!(margherita.name, "Margherita");
        assert_eq!(margherita.price, Money::from_cents(1250));

        let water = catalog.lookup(" 8 ").unwrap();
        assert_eq!(water.name, "Water");

        assert!(catalog.lookup("9").is_none());
        assert!(catalog.lookup("").is_none());
        assert!(catalog.lookup("C").is_none());
    }

    #[test]
    fn test_lookup_ignores_ascii_case() {
        let defs = vec![CategoryDef {
            name: "Specials".to_string(),
            items: vec![ItemDef::new("pz-1", "Calzone", 1400)],
        }];
        let catalog = Catalog::new(defs).unwrap();
        assert_eq!(catalog.lookup("PZ-1").unwrap().code, "pz-1");
        assert_eq!(catalog.lookup("pz-1").unwrap().name, "Calzone");
    }

    #[test]
    fn test_duplicate_code_across_categories() {
        let defs = vec![
            CategoryDef {
                name: "Pizzas".to_string(),
                items: vec![ItemDef::new("1", "Margherita", 1250)],
            },
            CategoryDef {
                name: "Drinks".to_string(),
                items: vec![ItemDef::new("1", "Cola", 200)],
            },
        ];
        assert_eq!(
            Catalog::new(defs).unwrap_err(),
            CatalogError::DuplicateCode {
                code: "1".to_string(),
                first: "Margherita".to_string(),
                second: "Cola".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_code_within_category() {
        let defs = vec![CategoryDef {
            name: "Pizzas".to_string(),
            items: vec![
                ItemDef::new("a", "Margherita", 1250),
                ItemDef::new("A", "Marinara", 1100),
            ],
        }];
        assert!(matches!(
            Catalog::new(defs),
            Err(CatalogError::DuplicateCode { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_definitions() {
        let reserved = vec![CategoryDef {
            name: "Misc".to_string(),
            items: vec![ItemDef::new("x", "Mystery", 100)],
        }];
        assert_eq!(
            Catalog::new(reserved).unwrap_err(),
            CatalogError::ReservedCode("x".to_string())
        );

        let negative = vec![CategoryDef {
            name: "Misc".to_string(),
            items: vec![ItemDef::new("1", "Refund", -100)],
        }];
        assert!(matches!(
            Catalog::new(negative),
            Err(CatalogError::Invalid(_))
        ));

        assert_eq!(Catalog::new(vec![]).unwrap_err(), CatalogError::Empty);

        let twice = vec![
            CategoryDef {
                name: "Sides".to_string(),
                items: vec![ItemDef::new("1", "Fries", 350)],
            },
            CategoryDef {
                name: "Sides".to_string(),
                items: vec![ItemDef::new("2", "Salad", 450)],
            },
        ];
        assert_eq!(
            Catalog::new(twice).unwrap_err(),
            CatalogError::DuplicateCategory("Sides".to_string())
        );
    }

    #[test]
    fn test_categories_keep_definition_order() {
        let catalog = Catalog::default_menu();
        let names: Vec<&str> = catalog.categories().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Pizzas", "Sides", "Drinks"]);

        let codes: Vec<&str> = catalog.items().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert_eq!(catalog.code_hint(), "1-8");
    }

    #[test]
    fn test_render_layout() {
        let menu = Catalog::default_menu().render("Rust Pizzeria");
        let lines: Vec<&str> = menu.lines().collect();

        assert_eq!(lines[0], "=".repeat(RULE_WIDTH));
        assert!(lines[1].contains("Welcome to Rust Pizzeria!"));
        assert!(lines.contains(&"--- Pizzas ---"));
        assert!(lines.contains(&"[1] Margherita           $12.50"));
        assert!(lines.contains(&"[4] Garlic Bread         $4.99"));
        assert!(lines.contains(&"[C] Checkout | [X] Exit"));

        // Categories appear in order
        let pizzas = menu.find("--- Pizzas ---").unwrap();
        let sides = menu.find("--- Sides ---").unwrap();
        let drinks = menu.find("--- Drinks ---").unwrap();
        assert!(pizzas < sides && sides < drinks);
    }

    #[test]
    fn test_render_truncates_long_names() {
        let defs = vec![CategoryDef {
            name: "Specials".to_string(),
            items: vec![ItemDef::new("9", "Quattro Formaggi Deluxe Supreme", 1899)],
        }];
        let menu = Catalog::new(defs).unwrap().render("Test");
        assert!(menu.contains("[9] Quattro Formaggi Del $18.99"));
    }

    #[test]
    fn test_screen_matches_render() {
        let catalog = Catalog::default_menu();
        assert_eq!(
            catalog.screen("Rust Pizzeria").to_string(),
            catalog.render("Rust Pizzeria")
        );
    }

    #[test]
    fn test_rejects_price_above_cap() {
        let defs = vec![CategoryDef {
            name: "Specials".to_string(),
            items: vec![ItemDef::new("9", "Gold Leaf Pizza", MAX_PRICE_CENTS + 1)],
        }];
        assert!(matches!(
            Catalog::new(defs),
            Err(CatalogError::Invalid(ValidationError::OutOfRange { .. }))
        ));

        let defs = vec![CategoryDef {
            name: "Specials".to_string(),
            items: vec![ItemDef::new("9", "Gold Leaf Pizza", MAX_PRICE_CENTS)],
        }];
        assert!(Catalog::new(defs).is_ok());
    }

    #[test]
    fn test_render_is_idempotent() {
        let catalog = Catalog::default_menu();
        assert_eq!(catalog.render("Rust Pizzeria"), catalog.render("Rust Pizzeria"));
    }
}
