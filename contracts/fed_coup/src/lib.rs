#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod base_token;
pub mod errors;
pub mod policy;
pub mod registry;
pub mod residual;

pub type Balance = u128;

pub mod constants {
    pub const SCALING_FACTOR: u128 = 1_000_000_000_000_000_000u128;

    /// Minted to the deployer by the `new_default` constructor: 1B FET.
    pub const INITIAL_SUPPLY: u128 = 1_000_000_000 * SCALING_FACTOR;

    /// B coupons per FET deposited.
    pub const DEFAULT_B_FACTOR: u128 = 50;
    /// S coupons per FET deposited.
    pub const DEFAULT_S_FACTOR: u128 = 100;

    pub const TOKEN_NAME: &str = "FedCoup";
    pub const TOKEN_SYMBOL: &str = "FET";
    pub const TOKEN_DECIMALS: u8 = 18;
}

/// # FedCoup — Coupon Ledger
///
/// **Role:** FET fungible token plus the two-coupon incentive ledger built on
/// top of it.  Depositing FET mints B coupons (bond-like, transferable,
/// redeemable) and S coupons (share-like, held) at a fixed ratio.
///
/// ```text
///   create_coupons(d)            transfer_bcoupons(to, n)       accept_bcoupons(ben, n)
///   ─────────────────            ────────────────────────       ───────────────────────
///   caller FET ── d ──► escrow   caller B ── n ──► to B         caller B ── n ──► retired + residual
///   caller B  += d × 50                                          escrow FET ── n / 50 ──► ben FET
///   caller S  += d × 100                                         (ben must already hold FET)
/// ```
///
/// ## Supply invariants
///
/// ```text
///   total_b_supply == Σ B(account) + residual_b_pool
///   total_s_supply == Σ S(account)
/// ```
///
/// Every message checks and computes first, performs its single fallible
/// base-token step next, and writes coupon state last.  An `Err` therefore
/// leaves storage untouched.
#[ink::contract]
mod fed_coup {
    use crate::base_token::BaseToken;
    use crate::constants::{INITIAL_SUPPLY, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};
    use crate::errors::Error;
    use crate::policy::ConversionPolicy;
    use crate::registry::CouponBalances;
    use crate::residual::Redemption;
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct FedCoup {
        // ── Token metadata ────────────────────────────────────────────────
        name: String,
        symbol: String,
        decimals: u8,
        total_supply: Balance,

        // ── Base-token ledger ─────────────────────────────────────────────
        /// FET balances.  The contract's own entry is the deposit escrow.
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,

        // ── Coupon ledger ─────────────────────────────────────────────────
        coupons: Mapping<AccountId, CouponBalances>,
        total_b_supply: Balance,
        total_s_supply: Balance,
        /// B coupons not attributed to any account (redemption remainders).
        residual_b_pool: Balance,
        /// Fixed at instantiation.
        policy: ConversionPolicy,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    /// Emitted when a deposit is converted into coupons.
    #[ink(event)]
    pub struct CouponsCreated {
        #[ink(topic)]
        owner: AccountId,
        deposit: Balance,
        b_minted: Balance,
        s_minted: Balance,
    }

    #[ink(event)]
    pub struct BcouponsTransferred {
        #[ink(topic)]
        from: AccountId,
        #[ink(topic)]
        to: AccountId,
        amount: Balance,
    }

    /// Emitted when B coupons are redeemed for FET.
    ///
    /// | Field         | Meaning                                        |
    /// |---------------|------------------------------------------------|
    /// | `amount`      | B coupons debited from `from`                  |
    /// | `base_credit` | FET paid from escrow to `beneficiary`          |
    /// | `residual`    | B coupons moved into the residual pool         |
    #[ink(event)]
    pub struct BcouponsAccepted {
        #[ink(topic)]
        from: AccountId,
        #[ink(topic)]
        beneficiary: AccountId,
        amount: Balance,
        base_credit: Balance,
        residual: Balance,
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl FedCoup {
        // ---------------------------------------------------------------------
        // Constructors
        // ---------------------------------------------------------------------

        /// Mints `initial_supply` FET to the deployer with the default
        /// 50 B / 100 S conversion.
        #[ink(constructor)]
        pub fn new(initial_supply: Balance) -> Self {
            Self::instantiate(initial_supply, ConversionPolicy::DEFAULT)
        }

        /// Deploys with the standard 1B FET supply.
        #[ink(constructor)]
        pub fn new_default() -> Self {
            Self::new(INITIAL_SUPPLY)
        }

        /// Deploys with custom conversion factors.  Both must be positive;
        /// they cannot be changed afterwards.
        #[ink(constructor)]
        pub fn with_factors(
            initial_supply: Balance,
            b_factor: Balance,
            s_factor: Balance,
        ) -> Result<Self, Error> {
            let policy = ConversionPolicy::new(b_factor, s_factor)?;
            Ok(Self::instantiate(initial_supply, policy))
        }

        fn instantiate(initial_supply: Balance, policy: ConversionPolicy) -> Self {
            let caller = Self::env().caller();
            let mut balances = Mapping::default();
            balances.insert(caller, &initial_supply);

            Self::env().emit_event(Transfer {
                from: None,
                to: Some(caller),
                value: initial_supply,
            });

            Self {
                name: String::from(TOKEN_NAME),
                symbol: String::from(TOKEN_SYMBOL),
                decimals: TOKEN_DECIMALS,
                total_supply: initial_supply,
                balances,
                allowances: Mapping::default(),
                coupons: Mapping::default(),
                total_b_supply: 0,
                total_s_supply: 0,
                residual_b_pool: 0,
                policy,
            }
        }

        // =====================================================================
        // COUPON LEDGER
        // =====================================================================

        /// Convert `deposit` FET from the caller into B and S coupons.
        ///
        /// ```text
        /// caller FET     -= deposit        (moved to escrow)
        /// caller B       += deposit × b_factor
        /// caller S       += deposit × s_factor
        /// total_b_supply += deposit × b_factor
        /// total_s_supply += deposit × s_factor
        /// ```
        #[ink(message)]
        pub fn create_coupons(&mut self, deposit: Balance) -> Result<(), Error> {
            let caller = self.env().caller();
            let issued = self.policy.convert(deposit)?;

            let holder = self.coupons_of(caller).credited(issued)?;
            let total_b = self
                .total_b_supply
                .checked_add(issued.b_coupons)
                .ok_or(Error::ArithmeticOverflow)?;
            let total_s = self
                .total_s_supply
                .checked_add(issued.s_coupons)
                .ok_or(Error::ArithmeticOverflow)?;

            let escrow = self.escrow_account();
            self.deposit_from(caller, escrow, deposit)
                .map_err(|_| Error::ExternalTransferFailure)?;

            self.coupons.insert(caller, &holder);
            self.total_b_supply = total_b;
            self.total_s_supply = total_s;

            self.env().emit_event(CouponsCreated {
                owner: caller,
                deposit,
                b_minted: issued.b_coupons,
                s_minted: issued.s_coupons,
            });
            Ok(())
        }

        /// Move `amount` B coupons from the caller to `to`.
        /// Total B supply is unchanged.
        #[ink(message)]
        pub fn transfer_bcoupons(&mut self, to: AccountId, amount: Balance) -> Result<(), Error> {
            if amount == 0 {
                return Err(Error::InvalidAmount);
            }
            let from = self.env().caller();
            let sender = self.coupons_of(from).debited_b(amount)?;

            if from != to {
                let recipient = self.coupons_of(to).credited_b(amount)?;
                self.coupons.insert(from, &sender);
                self.coupons.insert(to, &recipient);
            }

            self.env().emit_event(BcouponsTransferred { from, to, amount });
            Ok(())
        }

        /// Redeem `amount` of the caller's B coupons as FET credit for
        /// `beneficiary`, who must already hold a nonzero FET balance and
        /// cannot be the escrow itself.  `amount` must cover at least one
        /// whole FET (`amount >= b_factor`).
        ///
        /// ```text
        /// base_credit     = amount / b_factor   → escrow ──► beneficiary
        /// retired         = base_credit × b_factor
        /// residual        = amount % b_factor
        /// caller B       -= amount
        /// total_b_supply -= retired
        /// residual_pool  += residual
        /// ```
        #[ink(message)]
        pub fn accept_bcoupons(
            &mut self,
            beneficiary: AccountId,
            amount: Balance,
        ) -> Result<(), Error> {
            if beneficiary == self.escrow_account() {
                return Err(Error::UnauthorizedBeneficiary);
            }
            if amount == 0 {
                return Err(Error::InvalidAmount);
            }
            if self.base_balance(beneficiary) == 0 {
                return Err(Error::UnauthorizedBeneficiary);
            }

            let caller = self.env().caller();
            let holder = self.coupons_of(caller).debited_b(amount)?;
            let redemption = Redemption::split(amount, self.policy.redemption_rate())?;
            if redemption.base_credit == 0 {
                return Err(Error::InvalidAmount);
            }
            let total_b = self
                .total_b_supply
                .checked_sub(redemption.retired)
                .ok_or(Error::ArithmeticOverflow)?;
            let residual_pool = self
                .residual_b_pool
                .checked_add(redemption.residual)
                .ok_or(Error::ArithmeticOverflow)?;

            self.credit(beneficiary, redemption.base_credit)
                .map_err(|_| Error::ExternalTransferFailure)?;

            self.coupons.insert(caller, &holder);
            self.total_b_supply = total_b;
            self.residual_b_pool = residual_pool;

            self.env().emit_event(BcouponsAccepted {
                from: caller,
                beneficiary,
                amount,
                base_credit: redemption.base_credit,
                residual: redemption.residual,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn get_bcoupon_balances(&self, owner: AccountId) -> Balance {
            self.coupons_of(owner).b
        }

        #[ink(message)]
        pub fn get_scoupon_balances(&self, owner: AccountId) -> Balance {
            self.coupons_of(owner).s
        }

        #[ink(message)]
        pub fn get_balance_of_residual_bcoupons(&self) -> Balance {
            self.residual_b_pool
        }

        #[ink(message)]
        pub fn total_bcoupon_supply(&self) -> Balance {
            self.total_b_supply
        }

        #[ink(message)]
        pub fn total_scoupon_supply(&self) -> Balance {
            self.total_s_supply
        }

        /// `(b_factor, s_factor)`.
        #[ink(message)]
        pub fn get_conversion_factors(&self) -> (Balance, Balance) {
            (self.policy.b_factor(), self.policy.s_factor())
        }

        fn coupons_of(&self, owner: AccountId) -> CouponBalances {
            self.coupons.get(owner).unwrap_or_default()
        }

        fn escrow_account(&self) -> AccountId {
            self.env().account_id()
        }

        // =====================================================================
        // BASE TOKEN (FET)
        // =====================================================================

        #[ink(message)]
        pub fn token_name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        pub fn token_symbol(&self) -> String {
            self.symbol.clone()
        }

        #[ink(message)]
        pub fn token_decimals(&self) -> u8 {
            self.decimals
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner: AccountId) -> Balance {
            self.balances.get(owner).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Balance {
            self.allowances.get((owner, spender)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn approve(&mut self, spender: AccountId, value: Balance) -> Result<(), Error> {
            let owner = self.env().caller();
            self.allowances.insert((owner, spender), &value);
            self.env().emit_event(Approval { owner, spender, value });
            Ok(())
        }

        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, value: Balance) -> Result<(), Error> {
            let from = self.env().caller();
            self.move_balance(from, to, value)
        }

        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<(), Error> {
            let caller = self.env().caller();
            let allowance = self.allowance(from, caller);
            let remaining = allowance
                .checked_sub(value)
                .ok_or(Error::InsufficientAllowance)?;

            self.move_balance(from, to, value)?;
            self.allowances.insert((from, caller), &remaining);
            Ok(())
        }

        fn move_balance(&mut self, from: AccountId, to: AccountId, value: Balance) -> Result<(), Error> {
            if value == 0 {
                return Err(Error::InvalidAmount);
            }

            let from_bal = self.balance_of(from);
            let new_from = from_bal
                .checked_sub(value)
                .ok_or(Error::InsufficientBalance)?;

            if from != to {
                let new_to = self
                    .balance_of(to)
                    .checked_add(value)
                    .ok_or(Error::ArithmeticOverflow)?;
                self.balances.insert(from, &new_from);
                self.balances.insert(to, &new_to);
            }

            self.env().emit_event(Transfer {
                from: Some(from),
                to: Some(to),
                value,
            });
            Ok(())
        }
    }

    impl BaseToken for FedCoup {
        fn base_balance(&self, owner: AccountId) -> Balance {
            self.balance_of(owner)
        }

        fn deposit_from(
            &mut self,
            payer: AccountId,
            ledger: AccountId,
            amount: Balance,
        ) -> Result<(), Error> {
            self.move_balance(payer, ledger, amount)
        }

        fn credit(&mut self, beneficiary: AccountId, amount: Balance) -> Result<(), Error> {
            let escrow = self.escrow_account();
            self.move_balance(escrow, beneficiary, amount)
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
