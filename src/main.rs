use clap::Parser;
use tabla2json::utils::logger;
use tabla2json::{run_with_settings, CliConfig, ConvertError};

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let (settings, monitor_enabled) = match cli.resolve() {
        Ok(resolved) => resolved,
        Err(e) => fail(&e),
    };

    println!("Iniciando la conversión de '{}'...", settings.input_path);

    if monitor_enabled {
        tracing::debug!("System monitoring enabled");
    }

    match run_with_settings(settings, monitor_enabled) {
        Ok(output_path) => {
            println!(
                "¡Éxito! El archivo '{}' ha sido creado correctamente.",
                output_path
            );
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &ConvertError) -> ! {
    tracing::debug!("Conversion failed: {} (kind: {:?})", e, e.kind());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.kind().exit_code());
}
