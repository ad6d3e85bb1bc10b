multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Phase: where a cycle currently stands
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Phase {
    /// Nominations open, vote bank filling up.
    Election,
    /// Winner governs the city and may add buildings.
    Governance,
    /// Prizes can be claimed. Never closes for the cycle it refers to.
    Claiming,
}

// ============================================================
// Registry records
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Region {
    pub id: u64,
    pub active: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct City<M: ManagedTypeApi> {
    pub id: u64,
    pub region_id: u64,
    pub name: ManagedBuffer<M>,
    /// Vote bank capacity is `population / votes_per_citizen`
    pub population: u64,
    /// Stake-token price of a single vote, before discounts
    pub vote_price: BigUint<M>,
    pub active: bool,
}

// ============================================================
// Buildings: unlockable improvements for the governing mayor
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Building {
    University,
    Hospital,
    Bank,
    Factory,
    Stadium,
    Monument,
}

impl Building {
    pub const ALL: [Building; 6] = [
        Building::University,
        Building::Hospital,
        Building::Bank,
        Building::Factory,
        Building::Stadium,
        Building::Monument,
    ];

    /// Prize bonus installed at deploy. Factory dominates; the full set adds 7%.
    pub fn default_bonus_percent(self) -> u64 {
        match self {
            Building::Factory => 5,
            Building::Bank | Building::Stadium => 1,
            Building::University | Building::Hospital | Building::Monument => 0,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct BuildingConfig<M: ManagedTypeApi> {
    /// Voucher-token cost paid by the mayor
    pub cost: BigUint<M>,
    /// Added to the base prize percentage of the city/cycle pool
    pub bonus_percent: u64,
}

// ============================================================
// Mayor NFT attributes, written by the collection minter
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct MayorAttributes {
    /// Percentage knocked off the vote price when nominating this mayor
    pub vote_discount: u64,
}

/// One settled (city, cycle) entry of a claimPrizes call
#[derive(ManagedVecItem, Clone, Debug)]
pub struct PrizeClaim<M: ManagedTypeApi> {
    pub city_id: u64,
    pub cycle: u64,
    pub burned: BigUint<M>,
    pub paid: BigUint<M>,
}
