multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{City, Region};
use crate::{events, phase, storage};

#[multiversx_sc::module]
pub trait RegistryModule: storage::StorageModule + phase::PhaseModule + events::EventsModule {
    // ========================================================
    // ENDPOINT: addCities
    // Cities get sequential ids. Unknown regions are opened on the fly.
    // ========================================================

    #[only_owner]
    #[endpoint(addCities)]
    fn add_cities(
        &self,
        region_id: u64,
        cities: MultiValueEncoded<MultiValue3<ManagedBuffer, u64, BigUint>>,
    ) -> ManagedVec<u64> {
        if self.regions(region_id).is_empty() {
            self.regions(region_id).set(Region {
                id: region_id,
                active: true,
            });
        }

        let mut city_ids = ManagedVec::new();
        for city in cities.into_iter() {
            let (name, population, vote_price) = city.into_tuple();
            require!(population > 0 && vote_price > 0u64, ERR_INCORRECT_VALUE);

            let city_id = self.city_count().get();
            self.cities(city_id).set(City {
                id: city_id,
                region_id,
                name,
                population,
                vote_price,
                active: true,
            });
            self.region_cities(region_id).insert(city_id);
            self.city_count().set(city_id + 1);
            city_ids.push(city_id);
        }
        require!(!city_ids.is_empty(), ERR_EMPTY_ARRAY);

        self.cities_added_event(region_id, &city_ids);
        city_ids
    }

    // ========================================================
    // ENDPOINT: updateCities / updateRegions
    // Flags are frozen for cities that already run an election.
    // ========================================================

    #[only_owner]
    #[endpoint(updateCities)]
    fn update_cities(&self, active: bool, city_ids: MultiValueEncoded<u64>) {
        let mut updated = ManagedVec::new();
        for city_id in city_ids.into_iter() {
            require!(!self.cities(city_id).is_empty(), ERR_UNKNOWN_CITY);
            self.require_no_running_election(city_id);

            self.cities(city_id).update(|city| city.active = active);
            updated.push(city_id);
        }
        require!(!updated.is_empty(), ERR_EMPTY_ARRAY);

        self.cities_updated_event(active, &updated);
    }

    #[only_owner]
    #[endpoint(updateRegions)]
    fn update_regions(&self, active: bool, region_ids: MultiValueEncoded<u64>) {
        let mut updated = ManagedVec::new();
        for region_id in region_ids.into_iter() {
            require!(!self.regions(region_id).is_empty(), ERR_INCORRECT_VALUE);
            for city_id in self.region_cities(region_id).iter() {
                self.require_no_running_election(city_id);
            }

            self.regions(region_id).update(|region| region.active = active);
            updated.push(region_id);
        }
        require!(!updated.is_empty(), ERR_EMPTY_ARRAY);

        self.regions_updated_event(active, &updated);
    }

    fn require_no_running_election(&self, city_id: u64) {
        if self.is_election_running() {
            require!(
                self.candidates(city_id, self.current_cycle()).is_empty(),
                ERR_INCORRECT_PERIOD
            );
        }
    }

    // ========================================================
    // ENDPOINT: changeCityVotePrice / changeVotesPerCitizen
    // ========================================================

    #[only_owner]
    #[endpoint(changeCityVotePrice)]
    fn change_city_vote_price(&self, city_id: u64, new_price: BigUint) {
        require!(!self.cities(city_id).is_empty(), ERR_INCORRECT_VALUE);
        require!(new_price > 0u64, ERR_INCORRECT_VALUE);
        require!(!self.is_election_running(), ERR_INCORRECT_PERIOD);

        let mut city = self.cities(city_id).get();
        let old_price = city.vote_price.clone();
        city.vote_price = new_price.clone();
        self.cities(city_id).set(&city);

        self.vote_price_updated_event(city_id, &old_price, &new_price);
    }

    #[only_owner]
    #[endpoint(changeVotesPerCitizen)]
    fn change_votes_per_citizen(&self, new_value: u64) {
        require!(new_value > 0, ERR_INCORRECT_VALUE);

        let old_value = self.votes_per_citizen().get();
        self.votes_per_citizen().set(new_value);
        self.votes_per_citizen_updated_event(old_value, new_value);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_known_city(&self, city_id: u64) -> City<Self::Api> {
        require!(!self.cities(city_id).is_empty(), ERR_UNKNOWN_CITY);
        self.cities(city_id).get()
    }

    fn is_city_open(&self, city: &City<Self::Api>) -> bool {
        city.active && self.regions(city.region_id).get().active
    }

    fn votes_bank(&self, city: &City<Self::Api>) -> BigUint {
        BigUint::from(city.population / self.votes_per_citizen().get())
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getCity)]
    fn get_city(&self, city_id: u64) -> City<Self::Api> {
        self.require_known_city(city_id)
    }

    #[view(getRegion)]
    fn get_region(&self, region_id: u64) -> Region {
        require!(!self.regions(region_id).is_empty(), ERR_INCORRECT_VALUE);
        self.regions(region_id).get()
    }

    #[view(getRegionCities)]
    fn get_region_cities(&self, region_id: u64) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for city_id in self.region_cities(region_id).iter() {
            result.push(city_id);
        }
        result
    }

    #[view(getCityCount)]
    fn get_city_count(&self) -> u64 {
        self.city_count().get()
    }

    #[view(getVotesPerCitizen)]
    fn get_votes_per_citizen(&self) -> u64 {
        self.votes_per_citizen().get()
    }

    #[view(getVotesBank)]
    fn get_votes_bank(&self, city_id: u64) -> BigUint {
        let city = self.require_known_city(city_id);
        self.votes_bank(&city)
    }
}
