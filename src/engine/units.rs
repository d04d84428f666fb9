use crate::error::CalcError;
use std::fmt;

const DECIMAL_PLACES: i32 = 6;

/// Physical dimension a conversion rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityFamily {
    Temperature,
    Length,
    Mass,
}

pub const FAMILIES: [QuantityFamily; 3] = [
    QuantityFamily::Temperature,
    QuantityFamily::Length,
    QuantityFamily::Mass,
];

impl QuantityFamily {
    /// Name shown in conversion labels and category listings.
    pub fn label(self) -> &'static str {
        match self {
            QuantityFamily::Temperature => "Temperature",
            QuantityFamily::Length => "Length",
            QuantityFamily::Mass => "Weight",
        }
    }

    /// Short unit names reachable in this family, in rule order.
    pub fn short_units(self) -> Vec<&'static str> {
        let mut units: Vec<&'static str> = Vec::new();
        for rule in RULES.iter().filter(|rule| rule.family == self) {
            for unit in [rule.from.short_name(), rule.to.short_name()] {
                if !units.contains(&unit) {
                    units.push(unit);
                }
            }
        }
        units
    }

    /// Category summary such as `Temperature (C, F, K)`.
    pub fn summary(self) -> String {
        format!("{} ({})", self.label(), self.short_units().join(", "))
    }
}

impl fmt::Display for QuantityFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One side of a conversion rule: the accepted spellings and the display symbol.
#[derive(Debug, Clone, Copy)]
pub struct UnitAliases {
    pub aliases: &'static [&'static str],
    pub symbol: &'static str,
}

impl UnitAliases {
    pub fn matches(&self, unit: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(unit))
    }

    fn short_name(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or(self.symbol)
    }
}

const CELSIUS: UnitAliases = UnitAliases {
    aliases: &["C", "celsius"],
    symbol: "°C",
};
const FAHRENHEIT: UnitAliases = UnitAliases {
    aliases: &["F", "fahrenheit"],
    symbol: "°F",
};
const KELVIN: UnitAliases = UnitAliases {
    aliases: &["K", "kelvin"],
    symbol: "K",
};
const METERS: UnitAliases = UnitAliases {
    aliases: &["m", "meters"],
    symbol: "m",
};
const FEET: UnitAliases = UnitAliases {
    aliases: &["ft", "feet"],
    symbol: "ft",
};
const KILOMETERS: UnitAliases = UnitAliases {
    aliases: &["km", "kilometers"],
    symbol: "km",
};
const MILES: UnitAliases = UnitAliases {
    aliases: &["mi", "miles"],
    symbol: "mi",
};
const KILOGRAMS: UnitAliases = UnitAliases {
    aliases: &["kg", "kilograms"],
    symbol: "kg",
};
const POUNDS: UnitAliases = UnitAliases {
    aliases: &["lbs", "pounds"],
    symbol: "lbs",
};

/// A directional conversion between two units of the same family.
#[derive(Debug, Clone, Copy)]
pub struct ConversionRule {
    pub from: UnitAliases,
    pub to: UnitAliases,
    pub family: QuantityFamily,
    pub formula: fn(f64) -> f64,
}

impl ConversionRule {
    pub fn matches(&self, from: &str, to: &str) -> bool {
        self.from.matches(from) && self.to.matches(to)
    }

    /// Label such as `Temperature conversion: 25°C to °F`.
    pub fn describe(&self, value: f64) -> String {
        format!(
            "{} conversion: {}{} to {}",
            self.family, value, self.from.symbol, self.to.symbol
        )
    }
}

/// Registered rules. Inverses are separate entries; nothing is chained.
pub static RULES: &[ConversionRule] = &[
    ConversionRule {
        from: CELSIUS,
        to: FAHRENHEIT,
        family: QuantityFamily::Temperature,
        formula: |v| v * 9.0 / 5.0 + 32.0,
    },
    ConversionRule {
        from: FAHRENHEIT,
        to: CELSIUS,
        family: QuantityFamily::Temperature,
        formula: |v| (v - 32.0) * 5.0 / 9.0,
    },
    ConversionRule {
        from: CELSIUS,
        to: KELVIN,
        family: QuantityFamily::Temperature,
        formula: |v| v + 273.15,
    },
    ConversionRule {
        from: KELVIN,
        to: CELSIUS,
        family: QuantityFamily::Temperature,
        formula: |v| v - 273.15,
    },
    ConversionRule {
        from: METERS,
        to: FEET,
        family: QuantityFamily::Length,
        formula: |v| v * 3.28084,
    },
    ConversionRule {
        from: FEET,
        to: METERS,
        family: QuantityFamily::Length,
        formula: |v| v / 3.28084,
    },
    ConversionRule {
        from: KILOMETERS,
        to: MILES,
        family: QuantityFamily::Length,
        formula: |v| v * 0.621371,
    },
    ConversionRule {
        from: MILES,
        to: KILOMETERS,
        family: QuantityFamily::Length,
        formula: |v| v / 0.621371,
    },
    ConversionRule {
        from: KILOGRAMS,
        to: POUNDS,
        family: QuantityFamily::Mass,
        formula: |v| v * 2.20462,
    },
    ConversionRule {
        from: POUNDS,
        to: KILOGRAMS,
        family: QuantityFamily::Mass,
        formula: |v| v / 2.20462,
    },
];

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub label: String,
}

pub fn find_rule(from: &str, to: &str) -> Option<&'static ConversionRule> {
    RULES.iter().find(|rule| rule.matches(from, to))
}

/// Convert `value` between two units, rounding to six decimal places.
pub fn convert(value: f64, from: &str, to: &str) -> Result<Conversion, CalcError> {
    let rule = find_rule(from, to).ok_or_else(|| CalcError::UnsupportedConversion {
        from: from.to_string(),
        to: to.to_string(),
    })?;

    Ok(Conversion {
        value: round_to((rule.formula)(value), DECIMAL_PLACES),
        label: rule.describe(value),
    })
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
