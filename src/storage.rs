multiversx_sc::imports!();

use crate::types::{Building, BuildingConfig, City, Region};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Tokens ──

    #[storage_mapper("mayorToken")]
    fn mayor_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("stakeToken")]
    fn stake_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("voucherToken")]
    fn voucher_token(&self) -> SingleValueMapper<TokenIdentifier>;

    // ── Phase clock ──

    #[storage_mapper("epochStart")]
    fn epoch_start(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("electionDuration")]
    fn election_duration(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("governanceDuration")]
    fn governance_duration(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("claimingDuration")]
    fn claiming_duration(&self) -> SingleValueMapper<u64>;

    // ── Economic parameters ──

    #[storage_mapper("votesPerCitizen")]
    fn votes_per_citizen(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("electionFeePercent")]
    fn election_fee_percent(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("buildingConfig")]
    fn building_config(&self, building: Building) -> SingleValueMapper<BuildingConfig<Self::Api>>;

    // ── Mayor custody ──

    #[storage_mapper("mayorHolder")]
    fn mayor_holder(&self, candidate_id: u64) -> SingleValueMapper<ManagedAddress>;

    // ── Registry ──

    #[storage_mapper("cityCount")]
    fn city_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("cities")]
    fn cities(&self, city_id: u64) -> SingleValueMapper<City<Self::Api>>;

    #[storage_mapper("regions")]
    fn regions(&self, region_id: u64) -> SingleValueMapper<Region>;

    #[storage_mapper("regionCities")]
    fn region_cities(&self, region_id: u64) -> UnorderedSetMapper<u64>;

    // ── Candidacies, in nomination order ──

    #[storage_mapper("candidates")]
    fn candidates(&self, city_id: u64, cycle: u64) -> VecMapper<u64>;

    #[storage_mapper("candidacy")]
    fn candidacy(&self, city_id: u64, cycle: u64, candidate_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("stake")]
    fn stake(
        &self,
        city_id: u64,
        cycle: u64,
        candidate_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("cityStaked")]
    fn city_staked(&self, city_id: u64, cycle: u64) -> SingleValueMapper<BigUint>;

    // ── Buildings ──

    #[storage_mapper("buildings")]
    fn buildings(&self, city_id: u64, cycle: u64) -> UnorderedSetMapper<Building>;

    /// Sum of the bonuses of the buildings present, fixed when each was built
    #[storage_mapper("prizeBonus")]
    fn prize_bonus(&self, city_id: u64, cycle: u64) -> SingleValueMapper<u64>;

    // ── Claims ──

    #[storage_mapper("claimed")]
    fn claimed(&self, city_id: u64, cycle: u64, user: &ManagedAddress) -> SingleValueMapper<bool>;
}
