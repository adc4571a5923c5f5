//! Coupon issuance ratio.
//!
//! ```text
//!   deposit (FET, 18 decimals)
//!     ├── × b_factor ──► B coupons   (default 50 per FET)
//!     └── × s_factor ──► S coupons   (default 100 per FET)
//! ```

use crate::constants::{DEFAULT_B_FACTOR, DEFAULT_S_FACTOR};
use crate::errors::{Error, Result};
use crate::Balance;

/// Coupons minted for one deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Issuance {
    pub b_coupons: Balance,
    pub s_coupons: Balance,
}

/// Fixed pair of conversion factors applied to every deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct ConversionPolicy {
    b_factor: Balance,
    s_factor: Balance,
}

impl ConversionPolicy {
    pub const DEFAULT: Self = Self {
        b_factor: DEFAULT_B_FACTOR,
        s_factor: DEFAULT_S_FACTOR,
    };

    /// Both factors must be positive.
    pub fn new(b_factor: Balance, s_factor: Balance) -> Result<Self> {
        if b_factor == 0 || s_factor == 0 {
            return Err(Error::InvalidConversionFactor);
        }
        Ok(Self { b_factor, s_factor })
    }

    pub fn b_factor(&self) -> Balance {
        self.b_factor
    }

    pub fn s_factor(&self) -> Balance {
        self.s_factor
    }

    /// B coupons backing one base-token unit on redemption.
    pub fn redemption_rate(&self) -> Balance {
        self.b_factor
    }

    /// `(deposit × b_factor, deposit × s_factor)`.
    pub fn convert(&self, deposit: Balance) -> Result<Issuance> {
        if deposit == 0 {
            return Err(Error::InvalidAmount);
        }
        let b_coupons = deposit
            .checked_mul(self.b_factor)
            .ok_or(Error::ArithmeticOverflow)?;
        let s_coupons = deposit
            .checked_mul(self.s_factor)
            .ok_or(Error::ArithmeticOverflow)?;
        Ok(Issuance { b_coupons, s_coupons })
    }
}

impl Default for ConversionPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SCALING_FACTOR;

    #[test]
    fn default_policy_is_50_and_100() {
        let p = ConversionPolicy::default();
        assert_eq!(p.b_factor(), 50);
        assert_eq!(p.s_factor(), 100);
        assert_eq!(p.redemption_rate(), 50);
    }

    #[test]
    fn one_fet_yields_50_b_and_100_s() {
        let issued = ConversionPolicy::DEFAULT.convert(SCALING_FACTOR).unwrap();
        assert_eq!(issued.b_coupons, 50 * SCALING_FACTOR);
        assert_eq!(issued.s_coupons, 100 * SCALING_FACTOR);
    }

    #[test]
    fn zero_deposit_rejected() {
        assert_eq!(ConversionPolicy::DEFAULT.convert(0), Err(Error::InvalidAmount));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let p = ConversionPolicy::new(2, 1).unwrap();
        assert_eq!(p.convert(Balance::MAX), Err(Error::ArithmeticOverflow));

        // The S leg alone overflowing still fails the whole conversion.
        let p = ConversionPolicy::new(1, 3).unwrap();
        assert_eq!(p.convert(Balance::MAX / 2), Err(Error::ArithmeticOverflow));
    }

    #[test]
    fn zero_factor_rejected() {
        assert_eq!(ConversionPolicy::new(0, 100), Err(Error::InvalidConversionFactor));
        assert_eq!(ConversionPolicy::new(50, 0), Err(Error::InvalidConversionFactor));
    }

    #[test]
    fn conversion_is_linear() {
        let p = ConversionPolicy::DEFAULT;
        let a = p.convert(3 * SCALING_FACTOR).unwrap();
        let b = p.convert(7 * SCALING_FACTOR).unwrap();
        let sum = p.convert(10 * SCALING_FACTOR).unwrap();
        assert_eq!(a.b_coupons + b.b_coupons, sum.b_coupons);
        assert_eq!(a.s_coupons + b.s_coupons, sum.s_coupons);
    }
}
