use clap::Subcommand;
use calendarize_core::LayoutConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Print the config file location
    Path,
    /// Check the configuration without laying anything out
    Validate,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { json } => {
            let config = LayoutConfig::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
        ConfigAction::Path => {
            println!("{}", LayoutConfig::default_path()?.display());
        }
        ConfigAction::Validate => {
            let settings = LayoutConfig::load()?.validate()?;
            println!(
                "ok: {} minute rows, week {}..{}",
                settings.unit, settings.week_start, settings.week_end
            );
        }
        ConfigAction::Reset => {
            let config = LayoutConfig::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
