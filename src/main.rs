use log::debug;

use ndrtosn::{convert, Options};

fn main() {
    if std::env::var("NDRTOSN_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("NDRTOSN_LOG")
            .write_style("NDRTOSN_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = if args.is_empty() {
        // Scripting hook: a full flag string may arrive via the environment.
        Options::parse_from_str(&std::env::var("NDRTOSN_FLAGS").unwrap_or_default())
    } else {
        Options::parse_from_args(&args)
    };
    let options = match parsed {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    debug!("options: {:?}", options);

    if let Err(e) = convert(&options) {
        eprintln!("*** {e}");
        std::process::exit(e.exit_code());
    }
}
