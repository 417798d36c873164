use BoundedQueueMini::core::config::{self, SimulationConfig};
use BoundedQueueMini::core::log::{Logger, append_logs};
use BoundedQueueMini::core::runtime;
use std::env;
use std::process;
use std::sync::{Arc, Mutex};

fn main() {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "BoundedQueueMini".to_string());

    let config = match SimulationConfig::parse_args(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{}", config::usage(&program));
            process::exit(1);
        }
    };

    let logger = Arc::new(Mutex::new(Logger::new()));

    if let Err(err) = runtime::run(&config, logger.clone()) {
        eprintln!("run failed: {err}");
        process::exit(1);
    }

    // Append the recorded events as NDJSON
    let entries = logger.lock().unwrap().entries().to_vec();
    append_logs(&entries, "log.ndjson").expect("Failed to append logs");
}
