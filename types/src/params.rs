//! Consensus parameters — stake aging and the network-upgrade schedule.

use serde::{Deserialize, Serialize};

/// The branch id in force before any scheduled upgrade activates.
pub const BASE_BRANCH_ID: u32 = 0x5ba8_1b19;

/// A scheduled consensus upgrade: from `activation_height` onward, signatures
/// commit to `branch_id` instead of the previous epoch's id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkUpgrade {
    pub activation_height: u32,
    pub branch_id: u32,
}

/// Consensus parameters carried by every validating node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsensusParams {
    /// Minimum number of blocks a coin must age before it may stake
    /// (anti-grinding: `target_height - source_height >= min_stake_age`).
    pub min_stake_age: u32,

    /// Scheduled upgrades, sorted ascending by activation height.
    pub upgrades: Vec<NetworkUpgrade>,
}

impl ConsensusParams {
    /// Mainnet defaults.
    pub fn mainnet() -> Self {
        Self {
            min_stake_age: 150,
            upgrades: vec![NetworkUpgrade {
                activation_height: 227_520,
                branch_id: 0x76b8_09bb,
            }],
        }
    }

    /// The branch id active at `height`.
    ///
    /// Epoch selection walks the upgrade schedule and returns the id of the
    /// last upgrade activated at or below `height`, falling back to
    /// [`BASE_BRANCH_ID`]. Signature verification for a stake claim uses the
    /// branch of the claim's *target* height, since verification rules can
    /// change between the source coin's epoch and the claimed block's epoch.
    pub fn active_branch_id(&self, height: u32) -> u32 {
        self.upgrades
            .iter()
            .take_while(|u| u.activation_height <= height)
            .last()
            .map(|u| u.branch_id)
            .unwrap_or(BASE_BRANCH_ID)
    }
}

/// Default is the mainnet configuration.
impl Default for ConsensusParams {
    fn default() -> Self {
        Self::mainnet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with_upgrades() -> ConsensusParams {
        ConsensusParams {
            min_stake_age: 150,
            upgrades: vec![
                NetworkUpgrade {
                    activation_height: 100,
                    branch_id: 0xaa,
                },
                NetworkUpgrade {
                    activation_height: 200,
                    branch_id: 0xbb,
                },
            ],
        }
    }

    #[test]
    fn base_branch_before_first_upgrade() {
        let p = params_with_upgrades();
        assert_eq!(p.active_branch_id(0), BASE_BRANCH_ID);
        assert_eq!(p.active_branch_id(99), BASE_BRANCH_ID);
    }

    #[test]
    fn activation_is_inclusive() {
        let p = params_with_upgrades();
        assert_eq!(p.active_branch_id(100), 0xaa);
        assert_eq!(p.active_branch_id(199), 0xaa);
        assert_eq!(p.active_branch_id(200), 0xbb);
        assert_eq!(p.active_branch_id(u32::MAX), 0xbb);
    }

    #[test]
    fn empty_schedule_is_base_everywhere() {
        let p = ConsensusParams {
            min_stake_age: 150,
            upgrades: vec![],
        };
        assert_eq!(p.active_branch_id(1_000_000), BASE_BRANCH_ID);
    }
}
