multiversx_sc::imports!();

use crate::errors::ERR_INCORRECT_PERIOD;
use crate::storage;
use crate::types::Phase;

/// Cycle clock. Cycles are numbered from 1; cycle `c` opens at
/// `epoch_start + (c - 1) * cycle_length` and, once its governance window is
/// over, stays in `Claiming` for good.
#[multiversx_sc::module]
pub trait PhaseModule: storage::StorageModule {
    fn cycle_length(&self) -> u64 {
        self.election_duration().get()
            + self.governance_duration().get()
            + self.claiming_duration().get()
    }

    #[view(getCurrentCycle)]
    fn current_cycle(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let elapsed = now.saturating_sub(self.epoch_start().get());
        elapsed / self.cycle_length() + 1
    }

    /// `None` while the cycle has not started yet (cycle 0 never starts).
    fn cycle_phase(&self, cycle: u64) -> Option<Phase> {
        let cycle_start = cycle
            .checked_sub(1)?
            .checked_mul(self.cycle_length())?
            .checked_add(self.epoch_start().get())?;

        let now = self.blockchain().get_block_timestamp();
        if now < cycle_start {
            return None;
        }

        let elapsed = now - cycle_start;
        let election = self.election_duration().get();
        let governance = self.governance_duration().get();
        let phase = if elapsed < election {
            Phase::Election
        } else if elapsed < election + governance {
            Phase::Governance
        } else {
            Phase::Claiming
        };
        Some(phase)
    }

    fn require_phase(&self, cycle: u64, phase: Phase) {
        require!(self.cycle_phase(cycle) == Some(phase), ERR_INCORRECT_PERIOD);
    }

    fn is_election_running(&self) -> bool {
        self.cycle_phase(self.current_cycle()) == Some(Phase::Election)
    }

    #[view(getCyclePhase)]
    fn get_cycle_phase(&self, cycle: u64) -> Phase {
        match self.cycle_phase(cycle) {
            Some(phase) => phase,
            None => sc_panic!(ERR_INCORRECT_PERIOD),
        }
    }

    #[view(getPhaseConfig)]
    fn get_phase_config(&self) -> MultiValue4<u64, u64, u64, u64> {
        (
            self.epoch_start().get(),
            self.election_duration().get(),
            self.governance_duration().get(),
            self.claiming_duration().get(),
        )
            .into()
    }
}
