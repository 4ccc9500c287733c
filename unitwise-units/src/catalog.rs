//! Unit catalog - the built-in units organized by category

use std::sync::LazyLock;
use crate::{Category, Unit};

/// Global unit catalog
pub static CATALOG: LazyLock<UnitCatalog> = LazyLock::new(|| UnitCatalog::new());

/// Registry of every unit the converter knows about
pub struct UnitCatalog {
    units: Vec<Unit>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        let mut catalog = UnitCatalog { units: Vec::new() };
        catalog.register_weight_units();
        catalog.register_length_units();
        catalog.register_temperature_units();
        catalog
    }

    /// Resolve a unit name to a catalog entry.
    ///
    /// Case-insensitive exact match against every recognized spelling;
    /// first match in catalog order wins. `None` means no spelling matched.
    pub fn resolve(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.matches(name))
    }

    /// All units in a category, in catalog order
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        self.units.iter().filter(|u| u.category == category).collect()
    }

    /// Every registered unit
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    fn register(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    fn register_weight_units(&mut self) {
        // Base unit: gram
        self.register(Unit::new(&["g", "gram", "grams"], Category::Weight, false, 1.0));
        self.register(Unit::new(&["kg", "kilogram", "kilograms"], Category::Weight, false, 1000.0));
        self.register(Unit::new(&["mg", "milligram", "milligrams"], Category::Weight, false, 0.001));
        self.register(Unit::new(&["lb", "pound", "pounds"], Category::Weight, false, 453.592));
        self.register(Unit::new(&["oz", "ounce", "ounces"], Category::Weight, false, 28.3495));
    }

    fn register_length_units(&mut self) {
        // Base unit: meter
        self.register(Unit::new(&["m", "meter", "meters"], Category::Length, false, 1.0));
        self.register(Unit::new(&["km", "kilometer", "kilometers"], Category::Length, false, 1000.0));
        self.register(Unit::new(&["cm", "centimeter", "centimeters"], Category::Length, false, 0.01));
        self.register(Unit::new(&["mm", "millimeter", "millimeters"], Category::Length, false, 0.001));
        self.register(Unit::new(&["mi", "mile", "miles"], Category::Length, false, 1609.35));
        self.register(Unit::new(&["yd", "yard", "yards"], Category::Length, false, 0.9144));
        self.register(Unit::new(&["ft", "foot", "feet"], Category::Length, false, 0.3048));
        self.register(Unit::new(&["in", "inch", "inches"], Category::Length, false, 0.0254));
    }

    fn register_temperature_units(&mut self) {
        // Pivot unit: Celsius. Temperature is the only category where
        // negative values are legal and the only one with offsets.
        self.register(Unit::new(
            &["dc", "degree Celsius", "degrees Celsius", "celsius", "c"],
            Category::Temperature,
            true,
            1.0,
        ));
        self.register(Unit::with_offset(
            &["df", "degree Fahrenheit", "degrees Fahrenheit", "fahrenheit", "f"],
            Category::Temperature,
            true,
            5.0 / 9.0,
            32.0,
        ));
        self.register(Unit::with_offset(
            &["k", "kelvin", "kelvins"],
            Category::Temperature,
            true,
            1.0,
            273.15,
        ));
    }
}
