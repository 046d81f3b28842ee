use std::process;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use dotenv::dotenv;

use fcm::commit;
use fcm::config::App;
use fcm::git::GitCli;
use fcm::select::FuzzyPicker;
use fcm::store::Stores;

fn cli() -> Command {
  Command::new("fcm")
    .about("Fuzzy-search a commit message template and commit with it")
    .arg(
      Arg::new("version")
        .short('v')
        .long("version")
        .action(ArgAction::SetTrue)
        .help("show version")
    )
}

fn run() -> Result<()> {
  dotenv().ok();

  let args = cli().get_matches();

  if args.get_flag("version") {
    println!("fcm version {}", env!("CARGO_PKG_VERSION"));
    return Ok(());
  }

  let app = App::new()?;
  let stores = Stores::from_app(&app);
  commit::run(&stores, &GitCli::new(), &FuzzyPicker)?;
  Ok(())
}

fn main() {
  env_logger::init();

  if let Err(err) = run() {
    eprintln!("{err:#}");
    process::exit(1);
  }
}
