multiversx_sc::imports!();

use crate::types::Building;

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Registry ──

    #[event("citiesAdded")]
    fn cities_added_event(&self, #[indexed] region_id: u64, city_ids: &ManagedVec<u64>);

    #[event("citiesUpdated")]
    fn cities_updated_event(&self, #[indexed] active: bool, city_ids: &ManagedVec<u64>);

    #[event("regionsUpdated")]
    fn regions_updated_event(&self, #[indexed] active: bool, region_ids: &ManagedVec<u64>);

    #[event("votePriceUpdated")]
    fn vote_price_updated_event(
        &self,
        #[indexed] city_id: u64,
        #[indexed] old_price: &BigUint,
        new_price: &BigUint,
    );

    #[event("votesPerCitizenUpdated")]
    fn votes_per_citizen_updated_event(&self, #[indexed] old_value: u64, new_value: u64);

    #[event("electionFeeUpdated")]
    fn election_fee_updated_event(&self, #[indexed] old_percent: u64, new_percent: u64);

    #[event("buildingConfigUpdated")]
    fn building_config_updated_event(
        &self,
        #[indexed] building: Building,
        #[indexed] bonus_percent: u64,
        cost: &BigUint,
    );

    // ── Mayor custody ──

    #[event("mayorRegistered")]
    fn mayor_registered_event(&self, #[indexed] candidate_id: u64, #[indexed] holder: &ManagedAddress);

    #[event("mayorWithdrawn")]
    fn mayor_withdrawn_event(&self, #[indexed] candidate_id: u64, #[indexed] holder: &ManagedAddress);

    #[event("mayorTransferred")]
    fn mayor_transferred_event(
        &self,
        #[indexed] candidate_id: u64,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
    );

    // ── Election ──

    #[event("candidateAdded")]
    fn candidate_added_event(
        &self,
        #[indexed] candidate_id: u64,
        #[indexed] city_id: u64,
        #[indexed] cycle: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] votes: &BigUint,
        price: &BigUint,
    );

    #[event("buildingAdded")]
    fn building_added_event(
        &self,
        #[indexed] building: Building,
        #[indexed] city_id: u64,
        #[indexed] cycle: u64,
        #[indexed] candidate_id: u64,
        #[indexed] mayor: &ManagedAddress,
    );

    // ── Settlement ──

    #[event("prizeClaimed")]
    fn prize_claimed_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] city_id: u64,
        #[indexed] cycle: u64,
        #[indexed] burned: &BigUint,
        paid: &BigUint,
    );

    #[event("tokensTransferred")]
    fn tokens_transferred_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        amount: &BigUint,
    );
}
