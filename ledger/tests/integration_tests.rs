//! Integration tests exercising the full vote pipeline:
//! configuration → admission → verification → challenge → persistence →
//! readback.
//!
//! These tests wire the ledger to the nullable oracle, store, and clock
//! so the pieces are checked working together rather than in isolation.

use scrutin_ledger::{LedgerError, VoteLedger};
use scrutin_nullables::{NullClock, NullOracle, NullVoteStore};
use scrutin_types::{Address, CandidateId, ElectionId, Height, VoteId};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn addr(s: &str) -> Address {
    Address::new(s)
}

fn configured_ledger() -> VoteLedger {
    let mut ledger = VoteLedger::new();
    assert!(ledger.configure(addr("st-admin"), addr("st-registry"), addr("st-token")));
    ledger
}

fn oracle_with(eligible: &[(u64, &str)]) -> NullOracle {
    let oracle = NullOracle::new();
    for &(election, voter) in eligible {
        oracle.add_eligible(ElectionId::new(election), &addr(voter));
    }
    oracle
}

// ---------------------------------------------------------------------------
// 1. Cast / verify / challenge scenario
// ---------------------------------------------------------------------------

#[test]
fn full_cast_verify_challenge_scenario() {
    let mut ledger = configured_ledger();
    let oracle = oracle_with(&[(1, "voter-a")]);
    let clock = NullClock::new(100);

    let ballot = vec![2u8; 128];
    let proof = [3u8; 32];

    let id = ledger
        .cast_vote(
            &oracle,
            &addr("voter-a"),
            ElectionId::new(1),
            CandidateId::new(5),
            ballot,
            &proof,
            123,
            clock.now(),
        )
        .unwrap();
    assert_eq!(id, VoteId::new(0));

    // Same voter, same election, with different candidate, ballot, and nonce.
    clock.advance(1);
    let err = ledger
        .cast_vote(
            &oracle,
            &addr("voter-a"),
            ElectionId::new(1),
            CandidateId::new(6),
            vec![9u8; 64],
            &[8u8; 32],
            456,
            clock.now(),
        )
        .unwrap_err();
    assert_eq!(err.code(), 203);

    // Verification succeeds with the cast candidate and the exact proof.
    let attestation = ledger
        .verify_vote(VoteId::new(0), CandidateId::new(5), &proof)
        .unwrap();
    assert_eq!(attestation.election_id, ElectionId::new(1));
    assert_eq!(attestation.voter, addr("voter-a"));
    assert_eq!(attestation.recorded_at, Height::new(100));
    assert!(attestation.verified);

    // Challenge revokes the vote; correct inputs no longer verify.
    ledger.challenge_vote(VoteId::new(0)).unwrap();
    let err = ledger
        .verify_vote(VoteId::new(0), CandidateId::new(5), &proof)
        .unwrap_err();
    assert_eq!(err, LedgerError::VoteNotFound(VoteId::new(0)));
    assert_eq!(err.code(), 207);
}

#[test]
fn oracle_gates_apply_per_election() {
    let mut ledger = configured_ledger();
    let oracle = oracle_with(&[(1, "voter-a")]);
    let clock = NullClock::new(50);

    // Eligible for election 1, not for election 2.
    ledger
        .cast_vote(
            &oracle,
            &addr("voter-a"),
            ElectionId::new(1),
            CandidateId::new(5),
            vec![1u8; 32],
            &[4u8; 32],
            1,
            clock.now(),
        )
        .unwrap();
    let err = ledger
        .cast_vote(
            &oracle,
            &addr("voter-a"),
            ElectionId::new(2),
            CandidateId::new(5),
            vec![1u8; 32],
            &[4u8; 32],
            2,
            clock.now(),
        )
        .unwrap_err();
    assert_eq!(err.code(), 201);

    // Closing election 1 blocks further admission there.
    oracle.set_election_active(ElectionId::new(1), false);
    oracle.add_eligible(ElectionId::new(1), &addr("voter-b"));
    let err = ledger
        .cast_vote(
            &oracle,
            &addr("voter-b"),
            ElectionId::new(1),
            CandidateId::new(5),
            vec![1u8; 32],
            &[4u8; 32],
            3,
            clock.now(),
        )
        .unwrap_err();
    assert_eq!(err.code(), 202);
}

#[test]
fn token_burn_happens_once_and_only_after_validation() {
    let mut ledger = configured_ledger();
    let oracle = oracle_with(&[(1, "voter-a")]);
    let clock = NullClock::new(10);

    // Rejected before the burn step: no token consumed.
    ledger
        .cast_vote(
            &oracle,
            &addr("voter-a"),
            ElectionId::new(1),
            CandidateId::new(5),
            Vec::new(),
            &[4u8; 32],
            1,
            clock.now(),
        )
        .unwrap_err();
    assert_eq!(oracle.burn_count(), 0);

    // Successful admission consumes exactly one token.
    ledger
        .cast_vote(
            &oracle,
            &addr("voter-a"),
            ElectionId::new(1),
            CandidateId::new(5),
            vec![1u8; 32],
            &[4u8; 32],
            2,
            clock.now(),
        )
        .unwrap();
    assert_eq!(oracle.burn_count(), 1);
    assert_eq!(oracle.burns()[0], (ElectionId::new(1), addr("voter-a")));

    // A failed burn rejects the cast and records no vote.
    oracle.set_burn_succeeds(false);
    oracle.add_eligible(ElectionId::new(1), &addr("voter-b"));
    let err = ledger
        .cast_vote(
            &oracle,
            &addr("voter-b"),
            ElectionId::new(1),
            CandidateId::new(5),
            vec![1u8; 32],
            &[4u8; 32],
            3,
            clock.now(),
        )
        .unwrap_err();
    assert_eq!(err.code(), 209);
    assert_eq!(ledger.vote_count(), 1);
}

// ---------------------------------------------------------------------------
// 2. Snapshot persistence round-trip
// ---------------------------------------------------------------------------

#[test]
fn snapshot_roundtrip_preserves_observable_state() {
    let mut ledger = configured_ledger();
    let oracle = oracle_with(&[(1, "voter-a"), (1, "voter-b"), (2, "voter-a")]);
    let clock = NullClock::new(100);

    let first = ledger
        .cast_vote(
            &oracle,
            &addr("voter-a"),
            ElectionId::new(1),
            CandidateId::new(5),
            vec![2u8; 128],
            &[3u8; 32],
            123,
            clock.now(),
        )
        .unwrap();
    clock.advance(5);
    ledger
        .cast_vote(
            &oracle,
            &addr("voter-b"),
            ElectionId::new(1),
            CandidateId::new(6),
            vec![7u8; 64],
            &[9u8; 32],
            456,
            clock.now(),
        )
        .unwrap();
    ledger.challenge_vote(first).unwrap();

    let store = NullVoteStore::new();
    ledger.save_to_store(&store).unwrap();
    let restored = VoteLedger::load_from_store(&store).unwrap();

    assert!(restored.is_configured());
    assert_eq!(restored.config(), ledger.config());
    assert_eq!(restored.vote_count(), 2);
    assert_eq!(restored.next_vote_id(), VoteId::new(2));

    // Challenged vote stays challenged, active vote stays verifiable.
    let challenged = restored.get_vote(first).unwrap();
    assert!(!challenged.active);
    assert_eq!(challenged.recorded_at, Height::new(100));
    let attestation = restored
        .verify_vote(VoteId::new(1), CandidateId::new(6), &[9u8; 32])
        .unwrap();
    assert_eq!(attestation.recorded_at, Height::new(105));

    // The index survives: the challenged voter's slot is still occupied.
    assert!(restored.has_voted(ElectionId::new(1), &addr("voter-a")));
    assert!(restored.has_voted(ElectionId::new(1), &addr("voter-b")));
    assert!(!restored.has_voted(ElectionId::new(2), &addr("voter-a")));
}

#[test]
fn restored_ledger_continues_dense_id_allocation() {
    let mut ledger = configured_ledger();
    let oracle = oracle_with(&[(1, "voter-a"), (1, "voter-b")]);
    let clock = NullClock::new(10);

    ledger
        .cast_vote(
            &oracle,
            &addr("voter-a"),
            ElectionId::new(1),
            CandidateId::new(5),
            vec![1u8; 16],
            &[1u8; 32],
            1,
            clock.now(),
        )
        .unwrap();

    let store = NullVoteStore::new();
    ledger.save_to_store(&store).unwrap();
    let mut restored = VoteLedger::load_from_store(&store).unwrap();

    let id = restored
        .cast_vote(
            &oracle,
            &addr("voter-b"),
            ElectionId::new(1),
            CandidateId::new(6),
            vec![1u8; 16],
            &[1u8; 32],
            2,
            clock.now(),
        )
        .unwrap();
    assert_eq!(id, VoteId::new(1));

    // The restored index still blocks the original voter.
    let err = restored
        .cast_vote(
            &oracle,
            &addr("voter-a"),
            ElectionId::new(1),
            CandidateId::new(7),
            vec![1u8; 16],
            &[1u8; 32],
            3,
            clock.now(),
        )
        .unwrap_err();
    assert!(matches!(err, LedgerError::AlreadyVoted { .. }));
}

#[test]
fn empty_store_loads_as_pristine_ledger() {
    let store = NullVoteStore::new();
    let mut restored = VoteLedger::load_from_store(&store).unwrap();

    assert!(!restored.is_configured());
    assert_eq!(restored.vote_count(), 0);
    assert_eq!(restored.next_vote_id(), VoteId::FIRST);

    let oracle = NullOracle::new();
    let err = restored
        .cast_vote(
            &oracle,
            &addr("voter-a"),
            ElectionId::new(1),
            CandidateId::new(5),
            vec![1u8; 16],
            &[1u8; 32],
            1,
            Height::GENESIS,
        )
        .unwrap_err();
    assert_eq!(err, LedgerError::ConfigurationMissing);
}

// ---------------------------------------------------------------------------
// 3. Error code contract
// ---------------------------------------------------------------------------

#[test]
fn error_codes_form_a_stable_enumeration() {
    let election = ElectionId::new(1);
    let voter = addr("voter-a");

    assert_eq!(LedgerError::ConfigurationMissing.code(), 200);
    assert_eq!(
        LedgerError::VoterIneligible {
            election,
            voter: voter.clone(),
        }
        .code(),
        201
    );
    assert_eq!(LedgerError::ElectionNotActive(election).code(), 202);
    assert_eq!(
        LedgerError::AlreadyVoted {
            election,
            voter: voter.clone(),
        }
        .code(),
        203
    );
    assert_eq!(LedgerError::InvalidBallot.code(), 204);
    assert_eq!(LedgerError::InvalidProof.code(), 206);
    assert_eq!(LedgerError::VoteNotFound(VoteId::new(0)).code(), 207);
    assert_eq!(
        LedgerError::WrongCandidate {
            vote_id: VoteId::new(0),
            expected: CandidateId::new(5),
        }
        .code(),
        208
    );
    assert_eq!(
        LedgerError::TokenBurnFailed { election, voter }.code(),
        209
    );
}
