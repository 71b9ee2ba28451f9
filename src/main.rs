use clap::Parser;
use theme_css::utils::{logger, validation::Validate};
use theme_css::{CliConfig, ThemeSelector, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };
    args.apply_overrides(&mut config);

    if config.json_logs() {
        logger::init_json_logger(args.verbose, config.log_level());
    } else {
        logger::init_cli_logger(args.verbose, config.log_level());
    }
    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = args.validate().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let store = match config.open_store() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ Couldn't open content store: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let model = ThemeSelector::for_page(store.as_ref(), &config, &args.page);

    if args.json {
        println!("{}", model.to_json()?);
        return Ok(());
    }

    match model.variables() {
        Some(css) => println!("{}", css),
        None => tracing::info!("No theme applies to {}", args.page),
    }

    Ok(())
}
