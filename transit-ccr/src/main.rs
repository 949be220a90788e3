use clap::Parser;
use transit_ccr::app::{CcrApp, CcrAppError};

fn main() -> Result<(), CcrAppError> {
    env_logger::init();
    let args = CcrApp::parse();
    args.op.run()
}
