use clap::Parser;
use color_eyre::Result;
use std::io;

use osc52seq::cli::{self, Args};
use osc52seq::config;
use osc52seq::output;

fn main() -> Result<()> {
    // Writes to /tmp/osc52-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/osc52-debug.log")
            .expect("Failed to open /tmp/osc52-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();
    }

    color_eyre::install()?;

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("osc52: {}, using defaults", warning);
    }
    let defaults = &config_result.config.sequence;

    let args = Args::parse();

    let stdin_content = if args.reads_stdin() {
        Some(cli::read_content(io::stdin().lock())?)
    } else {
        None
    };

    let request = args.build_request(defaults, stdin_content);
    let sequence = request.encode();

    if sequence.is_suppressed() {
        eprintln!(
            "osc52: content exceeds limit of {} characters, nothing written",
            request.limit()
        );
        return Ok(());
    }

    let encoding = args.encoding(defaults);
    if args.stdout {
        output::write(&sequence, &encoding, &mut io::stdout().lock())?;
    } else {
        output::write(&sequence, &encoding, &mut io::stderr().lock())?;
    }

    Ok(())
}
