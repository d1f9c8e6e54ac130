//! Nullable election oracle — programmable admission answers.

use scrutin_ledger::ElectionOracle;
use scrutin_types::{Address, ElectionId};
use std::collections::HashSet;
use std::sync::Mutex;

/// A deterministic [`ElectionOracle`] for testing.
///
/// Freshly constructed, every election is active, no voter is eligible,
/// and token burns succeed. Eligibility is granted per (election, voter)
/// pair; every burn attempt is recorded for inspection.
pub struct NullOracle {
    inactive_elections: Mutex<HashSet<ElectionId>>,
    eligible: Mutex<HashSet<(ElectionId, Address)>>,
    burn_succeeds: Mutex<bool>,
    burns: Mutex<Vec<(ElectionId, Address)>>,
}

impl NullOracle {
    pub fn new() -> Self {
        Self {
            inactive_elections: Mutex::new(HashSet::new()),
            eligible: Mutex::new(HashSet::new()),
            burn_succeeds: Mutex::new(true),
            burns: Mutex::new(Vec::new()),
        }
    }

    /// Grant a voter eligibility for one election.
    pub fn add_eligible(&self, election_id: ElectionId, voter: &Address) {
        self.eligible
            .lock()
            .unwrap()
            .insert((election_id, voter.clone()));
    }

    /// Open or close an election.
    pub fn set_election_active(&self, election_id: ElectionId, active: bool) {
        let mut inactive = self.inactive_elections.lock().unwrap();
        if active {
            inactive.remove(&election_id);
        } else {
            inactive.insert(election_id);
        }
    }

    /// Make subsequent token burns succeed or fail.
    pub fn set_burn_succeeds(&self, succeeds: bool) {
        *self.burn_succeeds.lock().unwrap() = succeeds;
    }

    /// Number of burn attempts observed so far.
    pub fn burn_count(&self) -> usize {
        self.burns.lock().unwrap().len()
    }

    /// All burn attempts observed so far, in call order.
    pub fn burns(&self) -> Vec<(ElectionId, Address)> {
        self.burns.lock().unwrap().clone()
    }
}

impl Default for NullOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ElectionOracle for NullOracle {
    fn is_election_active(&self, election_id: ElectionId) -> bool {
        !self.inactive_elections.lock().unwrap().contains(&election_id)
    }

    fn is_voter_eligible(&self, election_id: ElectionId, voter: &Address) -> bool {
        self.eligible
            .lock()
            .unwrap()
            .contains(&(election_id, voter.clone()))
    }

    fn burn_voting_token(&self, election_id: ElectionId, voter: &Address) -> bool {
        self.burns
            .lock()
            .unwrap()
            .push((election_id, voter.clone()));
        *self.burn_succeeds.lock().unwrap()
    }
}
