#![no_std]

multiversx_sc::imports!();

pub mod assets;
pub mod errors;
pub mod events;
pub mod improvements;
pub mod ledger;
pub mod phase;
pub mod registry;
pub mod settlement;
pub mod storage;
pub mod types;

use errors::ERR_INCORRECT_VALUE;
use types::{Building, BuildingConfig};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait MayorElection:
    storage::StorageModule
    + events::EventsModule
    + phase::PhaseModule
    + assets::AssetsModule
    + registry::RegistryModule
    + ledger::LedgerModule
    + improvements::ImprovementsModule
    + settlement::SettlementModule
{
    // ========================================================
    // Init / Upgrade
    // The first cycle opens at deploy time.
    // ========================================================

    #[init]
    fn init(
        &self,
        mayor_token: TokenIdentifier,
        stake_token: TokenIdentifier,
        voucher_token: TokenIdentifier,
        election_duration: u64,
        governance_duration: u64,
        claiming_duration: u64,
        votes_per_citizen: u64,
        building_cost: BigUint,
    ) {
        require!(
            election_duration > 0 && governance_duration > 0,
            ERR_INCORRECT_VALUE
        );
        require!(votes_per_citizen > 0, ERR_INCORRECT_VALUE);

        self.mayor_token().set(&mayor_token);
        self.stake_token().set(&stake_token);
        self.voucher_token().set(&voucher_token);

        self.epoch_start().set(self.blockchain().get_block_timestamp());
        self.election_duration().set(election_duration);
        self.governance_duration().set(governance_duration);
        self.claiming_duration().set(claiming_duration);

        self.votes_per_citizen().set(votes_per_citizen);
        self.election_fee_percent().set(0u64);

        for building in Building::ALL {
            self.building_config(building).set(BuildingConfig {
                cost: building_cost.clone(),
                bonus_percent: building.default_bonus_percent(),
            });
        }
    }

    #[upgrade]
    fn upgrade(&self) {}
}
