use ledger_core::{cli::run_cli, init};

fn main() {
    init();
    std::process::exit(run_cli());
}
