use zflash::app::run;
use zflash::banner::write_banner;
use zflash::cli::CliArgs;
use zflash::logger::{default_log_dir, initialize as LoggerInitialize};

use std::fs::create_dir_all;
use std::io::{Write, stderr, stdout};
use std::process::ExitCode;

use log::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let mut out = stdout().lock();
    if args.show_banner {
        // Cosmetic; a closed stdout shows up again when the cards are written
        let _ = write_banner(&mut out);
    }

    // Logging is best effort: a read-only cache dir must not stop the run
    let log_dir = default_log_dir();
    let logger_result = create_dir_all(&log_dir)
        .map_err(|e| format!("Failed to create log directory {}: {e}", log_dir.display()))
        .and_then(|()| LoggerInitialize(&log_dir, args.verbose).map_err(|e| e.to_string()));
    if let Err(message) = logger_result {
        eprintln!("warning: {message}");
    }

    info!("zflash {} starting", zflash::cli::VERSION);

    match run(&args.run_options(), &mut out, &mut stderr()).await {
        Ok(summary) => {
            let _ = out.flush();
            info!(
                "Finished: {} cards from {} files",
                summary.cards, summary.files
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = out.flush();
            error!("{e}");
            eprintln!("error[{}]: {}", e.kind_label(), e);
            ExitCode::FAILURE
        }
    }
}
