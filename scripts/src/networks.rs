use clap::ValueEnum;
use cw_orch::daemon::networks::{ChainInfo, LOCAL_TERRA, PHOENIX_1, PISCO_1};

/// The environments the scripts can run against, selected at invocation
/// time rather than by editing source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Network {
    /// phoenix-1
    Mainnet,
    /// pisco-1
    Testnet,
    /// localterra
    Local,
}

impl Network {
    pub fn chain_info(&self) -> ChainInfo {
        match self {
            Network::Mainnet => PHOENIX_1,
            Network::Testnet => PISCO_1,
            Network::Local => LOCAL_TERRA,
        }
    }
}
