multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Phase, PrizeClaim};
use crate::{assets, events, ledger, phase, registry, storage};

/// Share of the winner's stake returned to its supporters before bonuses
pub const BASE_PRIZE_PERCENT: u64 = 87;

/// Burned out of every claimed prize
pub const CLAIM_BURN_PERCENT: u64 = 3;

const PERCENT_DENOMINATOR: u64 = 100;

#[multiversx_sc::module]
pub trait SettlementModule:
    storage::StorageModule
    + phase::PhaseModule
    + registry::RegistryModule
    + assets::AssetsModule
    + ledger::LedgerModule
    + events::EventsModule
{
    // ========================================================
    // ENDPOINT: claimPrizes
    // One claim per (city, cycle, user). A zero prize still counts.
    // ========================================================

    #[endpoint(claimPrizes)]
    fn claim_prizes(&self, claims: MultiValueEncoded<MultiValue2<u64, u64>>) {
        let caller = self.blockchain().get_caller();
        let mut settled: ManagedVec<PrizeClaim<Self::Api>> = ManagedVec::new();
        let mut total_paid = BigUint::zero();
        let mut total_burned = BigUint::zero();

        for claim in claims.into_iter() {
            let (city_id, cycle) = claim.into_tuple();
            self.require_phase(cycle, Phase::Claiming);
            self.require_known_city(city_id);
            require!(
                !self.claimed(city_id, cycle, &caller).get(),
                ERR_ALREADY_CLAIMED
            );

            let prize = self
                .user_prize(city_id, cycle, &caller)
                .unwrap_or_else(BigUint::zero);
            let paid = &prize * (PERCENT_DENOMINATOR - CLAIM_BURN_PERCENT) / PERCENT_DENOMINATOR;
            let burned = &prize - &paid;

            self.claimed(city_id, cycle, &caller).set(true);
            total_paid += &paid;
            total_burned += &burned;
            settled.push(PrizeClaim {
                city_id,
                cycle,
                burned,
                paid,
            });
        }
        require!(!settled.is_empty(), ERR_EMPTY_ARRAY);

        let stake_token = self.stake_token().get();
        if total_burned > 0u64 {
            self.send().esdt_local_burn(&stake_token, 0, &total_burned);
        }
        self.send_tokens(&caller, &stake_token, &total_paid);

        for claim in settled.iter() {
            self.prize_claimed_event(
                &caller,
                claim.city_id,
                claim.cycle,
                &claim.burned,
                &claim.paid,
            );
        }
    }

    // ========================================================
    // ENDPOINT: transferTokens
    // Treasury sweep of everything the contract holds. Unclaimed
    // prizes are swept as well.
    // ========================================================

    #[only_owner]
    #[endpoint(transferTokens)]
    fn transfer_tokens(&self, recipient: ManagedAddress) {
        let stake_token = self.stake_token().get();
        let voucher_token = self.voucher_token().get();

        for token in [stake_token, voucher_token] {
            let balance = self.token_balance(&token);
            self.send_tokens(&recipient, &token, &balance);
            self.tokens_transferred_event(&recipient, &token, &balance);
        }
    }

    // ========================================================
    // INTERNAL: prize math
    // pool  = winner_stake * (87 + bonus) / 100
    // prize = pool * user_stake_on_winner / winner_stake
    // ========================================================

    /// `None` when nobody ran in the city that cycle.
    fn prize_pool(&self, city_id: u64, cycle: u64) -> Option<(u64, BigUint, BigUint)> {
        let (winner_id, winner_stake) = self.leading_candidate(city_id, cycle)?;
        let percent = BASE_PRIZE_PERCENT + self.prize_bonus(city_id, cycle).get();
        let pool = &winner_stake * percent / PERCENT_DENOMINATOR;
        Some((winner_id, winner_stake, pool))
    }

    fn user_prize(&self, city_id: u64, cycle: u64, user: &ManagedAddress) -> Option<BigUint> {
        let (winner_id, winner_stake, pool) = self.prize_pool(city_id, cycle)?;
        let user_stake = self.stake(city_id, cycle, winner_id, user).get();
        if user_stake == 0u64 {
            return Some(BigUint::zero());
        }
        Some(pool * user_stake / winner_stake)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(calculatePrizeToUser)]
    fn calculate_prize_to_user(&self, city_id: u64, cycle: u64, user: ManagedAddress) -> BigUint {
        self.require_phase(cycle, Phase::Claiming);
        match self.user_prize(city_id, cycle, &user) {
            Some(prize) => prize,
            None => sc_panic!(ERR_INCORRECT_VALUE),
        }
    }

    #[view(getPrizePool)]
    fn get_prize_pool(&self, city_id: u64, cycle: u64) -> BigUint {
        match self.prize_pool(city_id, cycle) {
            Some((_, _, pool)) => pool,
            None => BigUint::zero(),
        }
    }

    #[view(hasClaimed)]
    fn has_claimed(&self, city_id: u64, cycle: u64, user: ManagedAddress) -> bool {
        self.claimed(city_id, cycle, &user).get()
    }
}
