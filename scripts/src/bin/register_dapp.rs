use clap::Parser;
use cw_orch::daemon::Daemon;
use dotenv::dotenv;

use cw_os_interface::CwOs;
use cw_os_scripts::{register_terraswap_dapp, Network, RegistrationSettings};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Arguments {
    /// Network to run against
    #[arg(short, long, value_enum, default_value = "testnet")]
    network: Network,
    /// Create a fresh OS before resolving the latest one
    #[arg(long)]
    create_os: bool,
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let mut builder = Daemon::builder(args.network.chain_info());
    if let Ok(mnemonic) = std::env::var("MNEMONIC") {
        builder.mnemonic(mnemonic);
    }
    let chain = builder.build()?;

    let os = CwOs::new(chain);
    register_terraswap_dapp(
        &os,
        &RegistrationSettings {
            create_os: args.create_os,
        },
    )?;
    Ok(())
}

fn main() {
    dotenv().ok();
    env_logger::init();

    let args = Arguments::parse();

    if let Err(ref err) = run(args) {
        log::error!("{}", err);
        err.chain()
            .skip(1)
            .for_each(|cause| log::error!("because: {}", cause));

        ::std::process::exit(1);
    }
}
