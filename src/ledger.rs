multiversx_sc::imports!();

use crate::errors::*;
use crate::types::Phase;
use crate::{assets, events, phase, registry, storage};

const PERCENT_DENOMINATOR: u64 = 100;

#[multiversx_sc::module]
pub trait LedgerModule:
    storage::StorageModule
    + phase::PhaseModule
    + registry::RegistryModule
    + assets::AssetsModule
    + events::EventsModule
{
    // ========================================================
    // ENDPOINT: nominate
    // The mayor's holder buys votes for it in the running election.
    // ========================================================

    #[payable("*")]
    #[endpoint(nominate)]
    fn nominate(&self, candidate_id: u64, city_id: u64, votes: BigUint) {
        let caller = self.blockchain().get_caller();
        let cycle = self.current_cycle();
        let price = self.quote_votes(&caller, candidate_id, city_id, cycle, &votes);

        let stake_token = self.stake_token().get();
        let surplus = self.take_payment(&stake_token, &price);

        let candidacy = self.candidacy(city_id, cycle, candidate_id);
        if candidacy.is_empty() {
            self.candidates(city_id, cycle).push(&candidate_id);
        }
        candidacy.update(|total| *total += &price);
        self.stake(city_id, cycle, candidate_id, &caller)
            .update(|stake| *stake += &price);
        self.city_staked(city_id, cycle)
            .update(|staked| *staked += &price);

        self.send_tokens(&caller, &stake_token, &surplus);
        self.candidate_added_event(candidate_id, city_id, cycle, &caller, &votes, &price);
    }

    /// Validates a nomination and returns its stake-token price.
    /// price = votes * vote_price * (100 - discount - fee) / 100, truncated.
    fn quote_votes(
        &self,
        holder: &ManagedAddress,
        candidate_id: u64,
        city_id: u64,
        cycle: u64,
        votes: &BigUint,
    ) -> BigUint {
        self.require_mayor_holder(holder, candidate_id);
        let city = self.require_known_city(city_id);
        require!(self.is_city_open(&city), ERR_INACTIVE_OBJECT);
        self.require_phase(cycle, Phase::Election);
        require!(*votes > 0u64, ERR_INCORRECT_VALUE);

        let discount = self.vote_discount(candidate_id);
        let fee = self.election_fee_percent().get();
        require!(discount.saturating_add(fee) < PERCENT_DENOMINATOR, ERR_INCORRECT_VALUE);

        let price = votes * &city.vote_price * (PERCENT_DENOMINATOR - discount - fee)
            / PERCENT_DENOMINATOR;
        require!(price > 0u64, ERR_INCORRECT_VALUE);

        let staked_after = self.city_staked(city_id, cycle).get() + &price;
        require!(
            staked_after <= self.votes_bank(&city),
            ERR_VOTES_BANK_EXCEEDED
        );

        price
    }

    #[only_owner]
    #[endpoint(changeElectionFee)]
    fn change_election_fee(&self, new_percent: u64) {
        require!(new_percent < PERCENT_DENOMINATOR, ERR_INCORRECT_VALUE);

        let old_percent = self.election_fee_percent().get();
        self.election_fee_percent().set(new_percent);
        self.election_fee_updated_event(old_percent, new_percent);
    }

    // ========================================================
    // WINNER RESOLUTION
    // Strictly greatest stake wins; ties go to the earliest nominee.
    // ========================================================

    fn leading_candidate(&self, city_id: u64, cycle: u64) -> Option<(u64, BigUint)> {
        let mut leader: Option<(u64, BigUint)> = None;
        for candidate_id in self.candidates(city_id, cycle).iter() {
            let total = self.candidacy(city_id, cycle, candidate_id).get();
            let leads = match &leader {
                Some((_, best)) => total > *best,
                None => true,
            };
            if leads {
                leader = Some((candidate_id, total));
            }
        }
        leader
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(calculateVotesPrice)]
    fn calculate_votes_price(
        &self,
        holder: ManagedAddress,
        candidate_id: u64,
        city_id: u64,
        votes: BigUint,
    ) -> BigUint {
        self.quote_votes(&holder, candidate_id, city_id, self.current_cycle(), &votes)
    }

    #[view(getWinner)]
    fn get_winner(&self, city_id: u64, cycle: u64) -> u64 {
        match self.leading_candidate(city_id, cycle) {
            Some((candidate_id, _)) => candidate_id,
            None => sc_panic!(ERR_INCORRECT_VALUE),
        }
    }

    #[view(getCandidates)]
    fn get_candidates(&self, city_id: u64, cycle: u64) -> MultiValueEncoded<MultiValue2<u64, BigUint>> {
        let mut result = MultiValueEncoded::new();
        for candidate_id in self.candidates(city_id, cycle).iter() {
            let total = self.candidacy(city_id, cycle, candidate_id).get();
            result.push((candidate_id, total).into());
        }
        result
    }

    #[view(getCandidacyStake)]
    fn get_candidacy_stake(&self, city_id: u64, cycle: u64, candidate_id: u64) -> BigUint {
        self.candidacy(city_id, cycle, candidate_id).get()
    }

    #[view(getStake)]
    fn get_stake(
        &self,
        city_id: u64,
        cycle: u64,
        candidate_id: u64,
        voter: ManagedAddress,
    ) -> BigUint {
        self.stake(city_id, cycle, candidate_id, &voter).get()
    }

    #[view(getCityStaked)]
    fn get_city_staked(&self, city_id: u64, cycle: u64) -> BigUint {
        self.city_staked(city_id, cycle).get()
    }

    #[view(getElectionFee)]
    fn get_election_fee(&self) -> u64 {
        self.election_fee_percent().get()
    }
}
