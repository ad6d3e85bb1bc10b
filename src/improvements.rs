multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Building, BuildingConfig, Phase};
use crate::{assets, events, ledger, phase, registry, storage};

/// Ceiling on the summed building bonuses; with the 87% base a prize pool
/// never exceeds the winner's stake.
pub const MAX_TOTAL_BONUS_PERCENT: u64 = 100 - crate::settlement::BASE_PRIZE_PERCENT;

#[multiversx_sc::module]
pub trait ImprovementsModule:
    storage::StorageModule
    + phase::PhaseModule
    + registry::RegistryModule
    + assets::AssetsModule
    + ledger::LedgerModule
    + events::EventsModule
{
    // ========================================================
    // ENDPOINT: addBuilding
    // Governing mayor only, each type once per city per cycle.
    // ========================================================

    #[payable("*")]
    #[endpoint(addBuilding)]
    fn add_building(&self, city_id: u64, building: Building) {
        let cycle = self.current_cycle();
        self.require_phase(cycle, Phase::Governance);
        self.require_known_city(city_id);

        let caller = self.blockchain().get_caller();
        let (mayor_id, _) = match self.leading_candidate(city_id, cycle) {
            Some(leader) => leader,
            None => sc_panic!(ERR_NOT_WINNER),
        };
        self.require_mayor_holder(&caller, mayor_id);

        let config = self.building_config(building).get();
        let voucher_token = self.voucher_token().get();
        let surplus = self.take_payment(&voucher_token, &config.cost);

        require!(
            self.buildings(city_id, cycle).insert(building),
            ERR_BUILDING_DUPLICATE
        );
        // config may have been re-weighted since earlier buildings were added
        let bonus = self.prize_bonus(city_id, cycle).get() + config.bonus_percent;
        require!(bonus <= MAX_TOTAL_BONUS_PERCENT, ERR_INCORRECT_VALUE);
        self.prize_bonus(city_id, cycle).set(bonus);

        self.send_tokens(&caller, &voucher_token, &surplus);
        self.building_added_event(building, city_id, cycle, mayor_id, &caller);
    }

    // ========================================================
    // ENDPOINT: setBuildingConfig
    // Applies to buildings added from now on; existing pools keep
    // the bonus they were built with.
    // ========================================================

    #[only_owner]
    #[endpoint(setBuildingConfig)]
    fn set_building_config(&self, building: Building, cost: BigUint, bonus_percent: u64) {
        require!(bonus_percent <= MAX_TOTAL_BONUS_PERCENT, ERR_INCORRECT_VALUE);

        let mut total_bonus = bonus_percent;
        for other in Building::ALL {
            if other != building {
                total_bonus += self.building_config(other).get().bonus_percent;
            }
        }
        require!(total_bonus <= MAX_TOTAL_BONUS_PERCENT, ERR_INCORRECT_VALUE);

        self.building_config_updated_event(building, bonus_percent, &cost);
        self.building_config(building).set(BuildingConfig {
            cost,
            bonus_percent,
        });
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getBuildings)]
    fn get_buildings(&self, city_id: u64, cycle: u64) -> MultiValueEncoded<Building> {
        let mut result = MultiValueEncoded::new();
        for building in self.buildings(city_id, cycle).iter() {
            result.push(building);
        }
        result
    }

    #[view(getBuildingConfig)]
    fn get_building_config(&self, building: Building) -> BuildingConfig<Self::Api> {
        self.building_config(building).get()
    }
}
