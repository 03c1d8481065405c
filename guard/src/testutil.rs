//! Shared fixtures for guard unit tests: a small chain with one confirmed
//! coin, plus a builder for stake transactions over it.

use crate::codec::{encode_stake_params, StakeParams};
use stakeproof_chain::MemoryChain;
use stakeproof_crypto::{key_hash, keypair_from_seed};
use stakeproof_tx::{sighash, SpendCondition, Transaction, TxInput, TxOutput};
use stakeproof_types::{Amount, BlockHash, ConsensusParams, KeyPair, OutPoint, PublicKey, TxId};
use std::sync::atomic::{AtomicU32, Ordering};

// Distinct funding prevouts per fixture, so coins from one fixture are
// unknown to another fixture's chain.
static FIXTURE_NONCE: AtomicU32 = AtomicU32::new(0);

pub struct Fixture {
    pub chain: MemoryChain,
    pub consensus: ConsensusParams,
    pub owner: KeyPair,
    pub source_outpoint: OutPoint,
    pub source_height: u32,
    source_block: BlockHash,
    source_output: TxOutput,
}

/// A chain with one coin confirmed at `height`, owned by a deterministic
/// key under a bare pay-to-key condition.
pub fn fixture_at_height(height: u32) -> Fixture {
    let nonce = FIXTURE_NONCE.fetch_add(1, Ordering::Relaxed);
    let owner = keypair_from_seed(&[11u8; 32]);

    let mut funding_id = [0u8; 32];
    funding_id[..4].copy_from_slice(&nonce.to_le_bytes());
    funding_id[4..8].copy_from_slice(&height.to_le_bytes());

    let mut block_id = [0xb0u8; 32];
    block_id[..4].copy_from_slice(&nonce.to_le_bytes());
    let source_block = BlockHash::new(block_id);

    let source_output = TxOutput {
        value: Amount::from_coins(10),
        condition: SpendCondition::PayToKey(owner.public),
    };
    let source_tx = Transaction::new(
        vec![TxInput::unsigned(OutPoint::new(TxId::new(funding_id), 0))],
        vec![source_output.clone()],
    );
    let source_outpoint = OutPoint::new(source_tx.txid(), 0);

    let chain = MemoryChain::new();
    chain.insert_block(source_block, height);
    chain.insert_transaction(source_tx, source_block);

    Fixture {
        chain,
        consensus: ConsensusParams::mainnet(),
        owner,
        source_outpoint,
        source_height: height,
        source_block,
        source_output,
    }
}

impl Fixture {
    pub fn owner_public(&self) -> PublicKey {
        self.owner.public
    }

    pub fn source_output(&self) -> TxOutput {
        self.source_output.clone()
    }

    /// Swap the source coin's condition for pay-to-key-hash of the owner key.
    pub fn convert_source_to_key_hash(&mut self) {
        self.replace_source_condition(SpendCondition::PayToKeyHash(key_hash(&self.owner.public)));
    }

    /// Swap the source coin's condition for a guarded 1-of-2 (not stakeable).
    pub fn convert_source_to_guarded(&mut self) {
        self.replace_source_condition(SpendCondition::GuardedOneOfTwo {
            keys: [self.owner.public, self.owner.public],
            metadata: vec![],
        });
    }

    fn replace_source_condition(&mut self, condition: SpendCondition) {
        self.source_output = TxOutput {
            value: self.source_output.value,
            condition,
        };
        let source_tx = Transaction::new(
            vec![TxInput::unsigned(self.source_outpoint)],
            vec![self.source_output.clone()],
        );
        self.source_outpoint = OutPoint::new(source_tx.txid(), 0);
        self.chain.insert_transaction(source_tx, self.source_block);
    }
}

/// Declarative description of a stake transaction to build over a fixture.
pub struct StakeTxSpec {
    target_height: u32,
    prev_hash: BlockHash,
    delegate: Option<PublicKey>,
    claimed_source: Option<u32>,
    sign: bool,
}

impl StakeTxSpec {
    pub fn targeting(target_height: u32) -> Self {
        Self {
            target_height,
            prev_hash: BlockHash::new([0xd1; 32]),
            delegate: None,
            claimed_source: None,
            sign: false,
        }
    }

    pub fn signed(mut self) -> Self {
        self.sign = true;
        self
    }

    pub fn with_delegate(mut self, delegate: PublicKey) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Claim a source height different from the coin's real one.
    pub fn claiming_source(mut self, height: u32) -> Self {
        self.claimed_source = Some(height);
        self
    }

    pub fn on_fork(mut self, prev_hash: BlockHash) -> Self {
        self.prev_hash = prev_hash;
        self
    }
}

/// Build (and optionally sign) a stake transaction over the fixture's coin.
pub fn stake_tx(fix: &Fixture, spec: StakeTxSpec) -> Transaction {
    let params = StakeParams {
        source_height: spec.claimed_source.unwrap_or(fix.source_height),
        target_height: spec.target_height,
        prev_block_hash: spec.prev_hash,
        delegate: spec.delegate,
    };
    let mut tx = Transaction::new(
        vec![TxInput::unsigned(fix.source_outpoint)],
        vec![
            TxOutput {
                value: Amount::from_coins(10),
                condition: SpendCondition::PayToKey(fix.owner.public),
            },
            TxOutput {
                value: Amount::ZERO,
                condition: SpendCondition::DataCarrier(encode_stake_params(&params)),
            },
        ],
    );
    if spec.sign {
        let branch_id = fix.consensus.active_branch_id(spec.target_height);
        sighash::sign_input(&mut tx, 0, &fix.source_output(), branch_id, &fix.owner)
            .expect("sign fixture stake input");
    }
    tx
}
