use crate::error::StateError;

/// Fees are expressed in hundredths of a basis point; this is 100%.
pub const MAX_FEE_PIPS: u32 = 1_000_000;

/// The standard pool fee tiers, in pips.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum FeeAmount {
    Lowest = 100,
    Low = 500,
    Medium = 3000,
    High = 10000,
}

impl FeeAmount {
    pub const ALL: [FeeAmount; 4] = [
        FeeAmount::Lowest,
        FeeAmount::Low,
        FeeAmount::Medium,
        FeeAmount::High,
    ];

    #[inline]
    pub const fn pips(self) -> u32 {
        self as u32
    }

    /// Canonical tick spacing for pools of this tier.
    #[inline]
    pub const fn tick_spacing(self) -> i32 {
        match self {
            FeeAmount::Lowest => 1,
            FeeAmount::Low => 10,
            FeeAmount::Medium => 60,
            FeeAmount::High => 200,
        }
    }

    /// Looks up the tier for a raw fee, or `StateError::FeeOutOfBounds` if
    /// the value is not one of the standard tiers.
    pub fn from_pips(pips: u32) -> Result<Self, StateError> {
        Self::ALL
            .into_iter()
            .find(|fee| fee.pips() == pips)
            .ok_or(StateError::FeeOutOfBounds)
    }
}

impl From<FeeAmount> for u32 {
    fn from(fee: FeeAmount) -> Self {
        fee.pips()
    }
}

impl TryFrom<u32> for FeeAmount {
    type Error = StateError;

    fn try_from(pips: u32) -> Result<Self, Self::Error> {
        Self::from_pips(pips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_map_to_spacing() {
        let table: Vec<(u32, i32)> = FeeAmount::ALL
            .iter()
            .map(|fee| (fee.pips(), fee.tick_spacing()))
            .collect();
        assert_eq!(table, vec![(100, 1), (500, 10), (3000, 60), (10000, 200)]);
    }

    #[test]
    fn from_pips_round_trips_known_tiers() {
        for fee in FeeAmount::ALL {
            assert_eq!(FeeAmount::from_pips(fee.pips()), Ok(fee));
            assert_eq!(FeeAmount::try_from(u32::from(fee)), Ok(fee));
        }
    }

    #[test]
    fn from_pips_rejects_unknown_tiers() {
        for pips in [0, 1, 600, 1872, MAX_FEE_PIPS] {
            assert_eq!(FeeAmount::from_pips(pips), Err(StateError::FeeOutOfBounds));
        }
    }

    #[test]
    fn every_tier_is_below_the_fee_cap() {
        assert!(FeeAmount::ALL.iter().all(|fee| fee.pips() < MAX_FEE_PIPS));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&FeeAmount::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
        let back: FeeAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FeeAmount::Medium);
    }
}
