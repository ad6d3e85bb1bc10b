multiversx_sc::imports!();

use crate::errors::{ERR_INCORRECT_VALUE, ERR_INSUFFICIENT_BALANCE, ERR_WRONG_MAYOR};
use crate::types::MayorAttributes;
use crate::{events, storage};

/// Custody of the mayor NFTs and movement of the stake/voucher tokens.
///
/// A mayor NFT (nonce == candidate id) is deposited with the contract to be
/// played. The depositor becomes its holder until it is withdrawn or
/// handed over, and only the holder may nominate it or govern with it.
#[multiversx_sc::module]
pub trait AssetsModule: storage::StorageModule + events::EventsModule {
    // ========================================================
    // ENDPOINT: registerMayor / withdrawMayor / transferMayor
    // ========================================================

    #[payable("*")]
    #[endpoint(registerMayor)]
    fn register_mayor(&self) -> u64 {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.mayor_token().get(),
            ERR_INCORRECT_VALUE
        );
        require!(
            payment.token_nonce > 0 && payment.amount == 1u64,
            ERR_INCORRECT_VALUE
        );

        let candidate_id = payment.token_nonce;
        require!(self.mayor_holder(candidate_id).is_empty(), ERR_INCORRECT_VALUE);

        let caller = self.blockchain().get_caller();
        self.mayor_holder(candidate_id).set(&caller);
        self.mayor_registered_event(candidate_id, &caller);
        candidate_id
    }

    #[endpoint(withdrawMayor)]
    fn withdraw_mayor(&self, candidate_id: u64) {
        let caller = self.blockchain().get_caller();
        self.require_mayor_holder(&caller, candidate_id);

        self.mayor_holder(candidate_id).clear();
        self.send().direct_esdt(
            &caller,
            &self.mayor_token().get(),
            candidate_id,
            &BigUint::from(1u64),
        );
        self.mayor_withdrawn_event(candidate_id, &caller);
    }

    /// Hands custody to another account without moving the NFT.
    #[endpoint(transferMayor)]
    fn transfer_mayor(&self, candidate_id: u64, new_holder: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_mayor_holder(&caller, candidate_id);
        require!(new_holder != caller, ERR_INCORRECT_VALUE);

        self.mayor_holder(candidate_id).set(&new_holder);
        self.mayor_transferred_event(candidate_id, &caller, &new_holder);
    }

    // ========================================================
    // INTERNAL: mayors
    // ========================================================

    fn holds_mayor(&self, holder: &ManagedAddress, candidate_id: u64) -> bool {
        let custody = self.mayor_holder(candidate_id);
        !custody.is_empty() && custody.get() == *holder
    }

    fn require_mayor_holder(&self, holder: &ManagedAddress, candidate_id: u64) {
        require!(self.holds_mayor(holder, candidate_id), ERR_WRONG_MAYOR);
    }

    /// Read from the NFT held in custody; missing attributes mean no discount.
    fn vote_discount(&self, candidate_id: u64) -> u64 {
        let token_data = self.blockchain().get_esdt_token_data(
            &self.blockchain().get_sc_address(),
            &self.mayor_token().get(),
            candidate_id,
        );
        if token_data.attributes.is_empty() {
            return 0;
        }
        token_data
            .decode_attributes::<MayorAttributes>()
            .vote_discount
    }

    // ========================================================
    // INTERNAL: fungible tokens
    // ========================================================

    /// Takes `required` out of the attached payment and returns the surplus.
    fn take_payment(&self, token: &TokenIdentifier, required: &BigUint) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        if payment.amount == 0u64 {
            require!(*required == 0u64, ERR_INSUFFICIENT_BALANCE);
            return BigUint::zero();
        }

        require!(
            payment.token_identifier == EgldOrEsdtTokenIdentifier::esdt(token.clone())
                && payment.token_nonce == 0,
            ERR_INSUFFICIENT_BALANCE
        );
        require!(payment.amount >= *required, ERR_INSUFFICIENT_BALANCE);

        payment.amount - required
    }

    fn send_tokens(&self, to: &ManagedAddress, token: &TokenIdentifier, amount: &BigUint) {
        if *amount > 0u64 {
            self.send().direct_esdt(to, token, 0, amount);
        }
    }

    fn token_balance(&self, token: &TokenIdentifier) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMayorHolder)]
    fn get_mayor_holder(&self, candidate_id: u64) -> OptionalValue<ManagedAddress> {
        let custody = self.mayor_holder(candidate_id);
        if custody.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(custody.get())
        }
    }
}
