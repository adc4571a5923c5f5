use ink::primitives::AccountId;

use crate::errors::Result;
use crate::Balance;

/// Base-token operations the coupon ledger depends on.
///
/// Implementations must check before they write: an `Err` leaves every
/// base-token balance untouched.
pub trait BaseToken {
    fn base_balance(&self, owner: AccountId) -> Balance;

    /// Move `amount` from `payer` into the ledger's escrow account.
    fn deposit_from(&mut self, payer: AccountId, ledger: AccountId, amount: Balance) -> Result<()>;

    /// Pay `amount` out of the ledger's escrow to `beneficiary`.
    fn credit(&mut self, beneficiary: AccountId, amount: Balance) -> Result<()>;
}
