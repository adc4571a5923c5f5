use crate::errors::{Error, Result};
use crate::policy::Issuance;
use crate::Balance;

/// Coupon record stored per address. Absent entries read as zero.
///
/// All updates return a new record so the ledger can stage every write
/// before committing any of them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct CouponBalances {
    pub b: Balance,
    pub s: Balance,
}

impl CouponBalances {
    pub fn is_empty(&self) -> bool {
        self.b == 0 && self.s == 0
    }

    pub fn credited(self, issued: Issuance) -> Result<Self> {
        Ok(Self {
            b: self
                .b
                .checked_add(issued.b_coupons)
                .ok_or(Error::ArithmeticOverflow)?,
            s: self
                .s
                .checked_add(issued.s_coupons)
                .ok_or(Error::ArithmeticOverflow)?,
        })
    }

    pub fn credited_b(self, amount: Balance) -> Result<Self> {
        let b = self.b.checked_add(amount).ok_or(Error::ArithmeticOverflow)?;
        Ok(Self { b, ..self })
    }

    pub fn debited_b(self, amount: Balance) -> Result<Self> {
        let b = self.b.checked_sub(amount).ok_or(Error::InsufficientBalance)?;
        Ok(Self { b, ..self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_empty() {
        assert!(CouponBalances::default().is_empty());
    }

    #[test]
    fn credit_adds_both_legs() {
        let rec = CouponBalances { b: 1, s: 2 }
            .credited(Issuance { b_coupons: 10, s_coupons: 20 })
            .unwrap();
        assert_eq!(rec, CouponBalances { b: 11, s: 22 });
    }

    #[test]
    fn debit_beyond_balance_fails() {
        let rec = CouponBalances { b: 5, s: 9 };
        assert_eq!(rec.debited_b(6), Err(Error::InsufficientBalance));
        assert_eq!(rec.debited_b(5).unwrap(), CouponBalances { b: 0, s: 9 });
    }

    #[test]
    fn credit_b_leaves_s_untouched() {
        let rec = CouponBalances { b: 0, s: 7 }.credited_b(3).unwrap();
        assert_eq!(rec, CouponBalances { b: 3, s: 7 });
    }

    #[test]
    fn credit_overflow_reported() {
        let rec = CouponBalances { b: Balance::MAX, s: 0 };
        assert_eq!(rec.credited_b(1), Err(Error::ArithmeticOverflow));
        assert_eq!(
            rec.credited(Issuance { b_coupons: 1, s_coupons: 0 }),
            Err(Error::ArithmeticOverflow)
        );
    }
}
