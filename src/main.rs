use log::{error, warn, LevelFilter};
use std::env;
use std::path::PathBuf;
use std::process;

use timeline::query::http::HttpTransport;
use timeline::Config;

fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(LevelFilter::Info);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();
}

// The data directory sits next to the executable.
fn program_dir() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from("."),
        },
        Err(err) => {
            warn!("Can't locate executable ({}), using current directory", err);
            PathBuf::from(".")
        }
    }
}

fn main() {
    init_logging();

    let config = Config::for_program_dir(program_dir());

    let result = HttpTransport::new().and_then(|transport| timeline::run(&config, &transport));

    if let Err(err) = result {
        error!("{}", err);
        process::exit(1);
    }
}
