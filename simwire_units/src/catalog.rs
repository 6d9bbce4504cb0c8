use crate::UnitType;

/// One row of the static unit catalog.
///
/// The full production catalogs run to hundreds of units per dimension; they
/// are pure data, looked up through [`base_unit`], and only a working subset
/// is tabulated here. Display code 0 is always the SI base unit of the
/// dimension.
#[derive(PartialEq, Eq, Debug)]
pub struct BaseUnitDef {
    pub unit_type: UnitType,
    pub display_code: u8,
    pub name: &'static str,
    pub abbrev: &'static str,
}

/// One row of the money catalog, keyed by ISO 4217 numeric code.
#[derive(PartialEq, Eq, Debug)]
pub struct MoneyUnitDef {
    pub code: u16,
    pub name: &'static str,
    pub abbrev: &'static str,
}

const fn base(unit_type: UnitType, display_code: u8, name: &'static str, abbrev: &'static str) -> BaseUnitDef {
    BaseUnitDef { unit_type, display_code, name, abbrev }
}

static BASE_UNITS: &[BaseUnitDef] = &[
    base(UnitType::Dimensionless, 0, "unit", "1"),
    //
    base(UnitType::Length, 0, "meter", "m"),
    base(UnitType::Length, 1, "kilometer", "km"),
    base(UnitType::Length, 2, "centimeter", "cm"),
    base(UnitType::Length, 3, "millimeter", "mm"),
    base(UnitType::Length, 4, "foot", "ft"),
    base(UnitType::Length, 5, "mile", "mi"),
    //
    base(UnitType::Area, 0, "square meter", "m^2"),
    base(UnitType::Area, 1, "hectare", "ha"),
    base(UnitType::Area, 2, "square kilometer", "km^2"),
    base(UnitType::Area, 3, "acre", "ac"),
    //
    base(UnitType::Volume, 0, "cubic meter", "m^3"),
    base(UnitType::Volume, 1, "liter", "L"),
    //
    base(UnitType::Mass, 0, "kilogram", "kg"),
    base(UnitType::Mass, 1, "gram", "g"),
    base(UnitType::Mass, 2, "metric ton", "t"),
    base(UnitType::Mass, 3, "pound", "lb"),
    //
    base(UnitType::Duration, 0, "second", "s"),
    base(UnitType::Duration, 1, "minute", "min"),
    base(UnitType::Duration, 2, "hour", "h"),
    base(UnitType::Duration, 3, "day", "day"),
    //
    base(UnitType::Energy, 0, "joule", "J"),
    base(UnitType::Energy, 1, "kilojoule", "kJ"),
    base(UnitType::Energy, 2, "kilowatt-hour", "kWh"),
    //
    base(UnitType::Speed, 0, "meter per second", "m/s"),
    base(UnitType::Speed, 1, "kilometer per hour", "km/h"),
    base(UnitType::Speed, 2, "mile per hour", "mi/h"),
];

static MONEY_UNITS: &[MoneyUnitDef] = &[
    MoneyUnitDef { code: 156, name: "Chinese Yuan", abbrev: "CNY" },
    MoneyUnitDef { code: 392, name: "Japanese Yen", abbrev: "JPY" },
    MoneyUnitDef { code: 756, name: "Swiss Franc", abbrev: "CHF" },
    MoneyUnitDef { code: 826, name: "Pound Sterling", abbrev: "GBP" },
    MoneyUnitDef { code: 840, name: "US Dollar", abbrev: "USD" },
    MoneyUnitDef { code: 978, name: "Euro", abbrev: "EUR" },
];

pub fn base_unit(unit_type: UnitType, display_code: u8) -> Option<&'static BaseUnitDef> {
    BASE_UNITS
        .iter()
        .find(|def| def.unit_type == unit_type && def.display_code == display_code)
}

pub fn money_unit(code: u16) -> Option<&'static MoneyUnitDef> {
    MONEY_UNITS.iter().find(|def| def.code == code)
}
