use crate::{BaseUnitDef, MoneyUnitDef, Unit, UnitError, UnitType};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};


/// A synthesized money-per-X compound unit. Never constructed directly;
/// always obtained through [`MoneyPerCache::money_per`].
#[derive(PartialEq, Eq, Debug)]
pub struct MoneyPerUnit {
    pub unit_type: UnitType,
    pub money: &'static MoneyUnitDef,
    pub per: &'static BaseUnitDef,
    pub name: String,
    pub abbrev: String,
}

/// Memo cache for money-per compounds, keyed first by money unit, then by
/// the denominator unit.
///
/// The one `Mutex` serializes the check-then-insert so that two threads
/// decoding the same compound concurrently cannot construct two distinct
/// instances for one logical unit. Callers own their cache; there is no
/// process-wide instance.
#[derive(Default)]
pub struct MoneyPerCache {
    by_money: Mutex<HashMap<u16, HashMap<(UnitType, u8), Arc<MoneyPerUnit>>>>,
}

impl MoneyPerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up or synthesize the compound `money / per`.
    ///
    /// Synthesis joins the component names and abbreviations with `/` and
    /// derives the compound's [`UnitType`] from the denominator's dimension.
    pub fn money_per(
        &self,
        money: &'static MoneyUnitDef,
        per: &'static BaseUnitDef,
    ) -> Result<Unit, UnitError> {
        let unit_type = UnitType::money_per(per.unit_type).ok_or(
            UnitError::UnsupportedDenominator { unit_type: per.unit_type },
        )?;

        let mut by_money = self.by_money.lock().unwrap_or_else(|poison| poison.into_inner());
        let by_per = by_money.entry(money.code).or_default();
        let mpu = by_per
            .entry((per.unit_type, per.display_code))
            .or_insert_with(|| {
                Arc::new(MoneyPerUnit {
                    unit_type,
                    money,
                    per,
                    name: format!("{}/{}", money.name, per.name),
                    abbrev: format!("{}/{}", money.abbrev, per.abbrev),
                })
            });
        Ok(Unit::MoneyPer(Arc::clone(mpu)))
    }
}
