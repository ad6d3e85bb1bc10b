// Shared whitebox fixture for the mayor election contract.
//
// The contract account is created up front with the owner and the
// ESDTRoleLocalBurn role on the stake token (claims burn their fee),
// then initialized through a whitebox call at START. Mayors 1-3 are
// deposited into custody by their holders; mayor 4 stays in Bob's wallet.

#![allow(dead_code)]

use mayor_election::assets::AssetsModule;
use mayor_election::ledger::LedgerModule;
use mayor_election::registry::RegistryModule;
use mayor_election::types::MayorAttributes;
use mayor_election::MayorElection;
use multiversx_sc_scenario::api::DebugApi;
use multiversx_sc_scenario::imports::*;
use multiversx_sc_scenario::scenario_model::Log;

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const CAROL: TestAddress = TestAddress::new("carol");

pub const ELECTION: TestSCAddress = TestSCAddress::new("mayor-election");
pub const CODE_PATH: MxscPath = MxscPath::new("output/mayor-election.mxsc.json");

pub const MAYOR_TOKEN_ID: &str = "MAYOR-a1b2c3";
pub const STAKE_TOKEN_ID: &str = "VOTE-a1b2c3";
pub const VOUCHER_TOKEN_ID: &str = "BVOUCHER-a1b2c3";

pub const MAYOR_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(MAYOR_TOKEN_ID);
pub const STAKE_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(STAKE_TOKEN_ID);
pub const VOUCHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(VOUCHER_TOKEN_ID);

/// Registered by Alice, no discount
pub const MAYOR_1: u64 = 1;
/// Registered by Carol, no discount
pub const MAYOR_2: u64 = 2;
/// Registered by Alice, 6% vote discount
pub const MAYOR_3: u64 = 3;
/// In Bob's wallet, not registered
pub const MAYOR_4: u64 = 4;

pub const STAKE_BALANCE: u64 = 1_000_000;
pub const VOUCHER_BALANCE: u64 = 10_000;
pub const BUILDING_COST: u64 = 1_000;
pub const VOTES_PER_CITIZEN: u64 = 100;

pub const START: u64 = 1_000;
pub const ELECTION_DURATION: u64 = 86_400;
pub const GOVERNANCE_DURATION: u64 = 432_000;
pub const CLAIMING_DURATION: u64 = 86_400;
pub const CYCLE_LENGTH: u64 = ELECTION_DURATION + GOVERNANCE_DURATION + CLAIMING_DURATION;

pub fn election_of(cycle: u64) -> u64 {
    START + (cycle - 1) * CYCLE_LENGTH
}

pub fn governance_of(cycle: u64) -> u64 {
    election_of(cycle) + ELECTION_DURATION
}

pub fn claiming_of(cycle: u64) -> u64 {
    governance_of(cycle) + GOVERNANCE_DURATION
}

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, mayor_election::ContractBuilder);
    blockchain
}

fn mayor(vote_discount: u64) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::new_from_bytes(&top_encode_to_vec_u8_or_panic(&MayorAttributes {
        vote_discount,
    }))
}

pub fn setup() -> ScenarioWorld {
    let mut world = world();
    world.current_block().block_timestamp(START);

    world.account(OWNER).nonce(1);
    world
        .account(ALICE)
        .nonce(1)
        .esdt_balance(STAKE_TOKEN, STAKE_BALANCE)
        .esdt_balance(VOUCHER_TOKEN, VOUCHER_BALANCE)
        .esdt_nft_balance(MAYOR_TOKEN, MAYOR_1, 1u64, mayor(0))
        .esdt_nft_balance(MAYOR_TOKEN, MAYOR_3, 1u64, mayor(6));
    world
        .account(BOB)
        .nonce(1)
        .esdt_balance(STAKE_TOKEN, STAKE_BALANCE)
        .esdt_balance(VOUCHER_TOKEN, VOUCHER_BALANCE)
        .esdt_nft_balance(MAYOR_TOKEN, MAYOR_4, 1u64, mayor(0));
    world
        .account(CAROL)
        .nonce(1)
        .esdt_balance(STAKE_TOKEN, STAKE_BALANCE)
        .esdt_balance(VOUCHER_TOKEN, VOUCHER_BALANCE)
        .esdt_nft_balance(MAYOR_TOKEN, MAYOR_2, 1u64, mayor(0));

    world
        .account(ELECTION)
        .nonce(1)
        .code(CODE_PATH)
        .owner(OWNER)
        .esdt_roles(STAKE_TOKEN, vec!["ESDTRoleLocalBurn".to_string()]);

    world
        .tx()
        .from(OWNER)
        .to(ELECTION)
        .whitebox(mayor_election::contract_obj, |sc| {
            sc.init(
                TokenIdentifier::from(MAYOR_TOKEN_ID),
                TokenIdentifier::from(STAKE_TOKEN_ID),
                TokenIdentifier::from(VOUCHER_TOKEN_ID),
                ELECTION_DURATION,
                GOVERNANCE_DURATION,
                CLAIMING_DURATION,
                VOTES_PER_CITIZEN,
                BigUint::from(BUILDING_COST),
            );
        });

    register_mayor(&mut world, ALICE, MAYOR_1);
    register_mayor(&mut world, ALICE, MAYOR_3);
    register_mayor(&mut world, CAROL, MAYOR_2);

    world
}

pub fn register_mayor(world: &mut ScenarioWorld, holder: TestAddress, candidate_id: u64) {
    world
        .tx()
        .from(holder)
        .to(ELECTION)
        .payment(TestEsdtTransfer(MAYOR_TOKEN, candidate_id, 1))
        .whitebox(mayor_election::contract_obj, move |sc| {
            assert_eq!(sc.register_mayor(), candidate_id);
        });
}

/// Moves custody of a registered mayor from one account to another.
pub fn hand_over(world: &mut ScenarioWorld, from: TestAddress, to: TestAddress, candidate_id: u64) {
    world
        .tx()
        .from(from)
        .to(ELECTION)
        .whitebox(mayor_election::contract_obj, move |sc| {
            sc.transfer_mayor(candidate_id, managed(to));
        });
}

pub fn set_time(world: &mut ScenarioWorld, timestamp: u64) {
    world.current_block().block_timestamp(timestamp);
}

pub fn add_city(
    world: &mut ScenarioWorld,
    region_id: u64,
    name: &'static str,
    population: u64,
    vote_price: u64,
) {
    world
        .tx()
        .from(OWNER)
        .to(ELECTION)
        .whitebox(mayor_election::contract_obj, move |sc| {
            let mut cities = MultiValueEncoded::new();
            cities.push((ManagedBuffer::from(name), population, BigUint::from(vote_price)).into());
            sc.add_cities(region_id, cities);
        });
}

pub fn nominate(
    world: &mut ScenarioWorld,
    voter: TestAddress,
    candidate_id: u64,
    city_id: u64,
    votes: u64,
    payment: u64,
) {
    world
        .tx()
        .from(voter)
        .to(ELECTION)
        .payment(TestEsdtTransfer(STAKE_TOKEN, 0, payment))
        .whitebox(mayor_election::contract_obj, move |sc| {
            sc.nominate(candidate_id, city_id, BigUint::from(votes));
        });
}

#[allow(clippy::too_many_arguments)]
pub fn nominate_expect_err(
    world: &mut ScenarioWorld,
    voter: TestAddress,
    candidate_id: u64,
    city_id: u64,
    votes: u64,
    payment: u64,
    err: &'static str,
) {
    world
        .tx()
        .from(voter)
        .to(ELECTION)
        .payment(TestEsdtTransfer(STAKE_TOKEN, 0, payment))
        .returns(ExpectError(4, err))
        .whitebox(mayor_election::contract_obj, move |sc| {
            sc.nominate(candidate_id, city_id, BigUint::from(votes));
        });
}

pub fn managed(address: TestAddress) -> ManagedAddress<DebugApi> {
    ManagedAddress::from_address(&address.to_address())
}

/// The first log written under `identifier`; ESDT builtins log too.
pub fn event<'a>(logs: &'a [Log], identifier: &str) -> &'a Log {
    logs.iter()
        .find(|log| log.topics.first().map(Vec::as_slice) == Some(identifier.as_bytes()))
        .unwrap_or_else(|| panic!("no {identifier} event in {logs:?}"))
}

/// Topic or data bytes, encoded the way the contract writes them.
pub fn encoded<T: TopEncode>(value: &T) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(value)
}
