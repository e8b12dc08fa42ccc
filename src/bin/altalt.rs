// Altalt CLI
// Double/triple-tap modifier remapper for a single evdev keyboard

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;

use altalt_core::{
    Config, EventLoop, Key, PhysicalKeyboard, Profile, ProfileRegistry, SessionStateMachine,
    TapLevel, VirtualKeyboard, DEFAULT_MODIFIER,
};

/// Alternate keymaps selected by tapping a modifier two or three times
#[derive(Parser, Debug)]
#[command(name = "altalt")]
#[command(version)]
#[command(about = "Double/triple-tap modifier key remapper", long_about = None)]
struct Args {
    /// Input device to remap, e.g. /dev/input/event1
    #[arg(
        value_name = "DEVICE",
        required_unless_present_any = ["list_profiles", "check_config"]
    )]
    device: Option<PathBuf>,

    /// Modifier key, by name (LEFT_ALT) or raw code (56, 0x38)
    #[arg(short, long, value_name = "KEY", value_parser = parse_keycode)]
    keycode: Option<Key>,

    /// TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Use this profile instead of matching on the device name
    #[arg(short, long, value_name = "NAME")]
    profile: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// List available profiles and exit
    #[arg(long)]
    list_profiles: bool,

    /// Validate config and exit
    #[arg(long)]
    check_config: bool,
}

fn parse_keycode(s: &str) -> Result<Key, String> {
    Key::from_name_or_code(s).map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_toml_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load_default().context("Failed to load default config"),
    }
}

/// CLI `--keycode` > config `general.modifier` > left alt
fn resolve_modifier(cli: Option<Key>, config: &Config) -> Key {
    cli.or(config.modifier).unwrap_or(DEFAULT_MODIFIER)
}

fn print_profiles(registry: &ProfileRegistry) {
    println!("Found {} profile(s):", registry.len());
    for profile in registry.iter() {
        let marker = if profile.name() == registry.default_name() {
            " (default)"
        } else {
            ""
        };
        println!("  {}{}", profile.name(), marker);
        if let Some(description) = profile.description() {
            println!("    {}", description);
        }
        if let Some(pattern) = profile.device_pattern() {
            println!("    device: {}", pattern);
        }
        for (level, table) in profile.tables().tables() {
            println!("    {}-tap: {} mapping(s)", level.taps(), table.len());
        }
    }
}

fn check_config(config: &Config, registry: &ProfileRegistry) {
    match &config.source_path {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: none (built-in profiles only)"),
    }
    for profile in registry.iter() {
        let double = profile.tables().table(TapLevel::Double).map_or(0, |t| t.len());
        let triple = profile.tables().table(TapLevel::Triple).map_or(0, |t| t.len());
        println!(
            "  {}: {} double-tap, {} triple-tap",
            profile.name(),
            double,
            triple
        );
    }
    println!("Configuration is valid");
}

fn pick_profile<'a>(
    registry: &'a ProfileRegistry,
    forced: Option<&str>,
    device_name: &str,
) -> anyhow::Result<&'a Profile> {
    match forced {
        Some(name) => registry.get(name).context("Invalid --profile"),
        None => Ok(registry.select(device_name)?.profile()),
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let registry = config.profile_registry().context("Invalid profile configuration")?;

    if args.list_profiles {
        print_profiles(&registry);
        return Ok(());
    }
    if args.check_config {
        check_config(&config, &registry);
        return Ok(());
    }

    let path = args
        .device
        .as_ref()
        .ok_or_else(|| anyhow!("No input device given"))?;
    let modifier = resolve_modifier(args.keycode, &config);

    let keyboard = PhysicalKeyboard::open(path)?;
    println!("Keyboard: {}", keyboard.name());

    let profile = pick_profile(&registry, args.profile.as_deref(), keyboard.name())?;
    log::info!("Using profile '{}', modifier {}", profile.name(), modifier);

    let tables = profile.tables().clone();
    let output = VirtualKeyboard::new(&tables.output_keys())
        .context("Could not create virtual keyboard")?;

    let session = SessionStateMachine::new(tables, modifier);
    let mut event_loop = EventLoop::new(keyboard, output, session);
    let err = event_loop.run();

    Err(anyhow::Error::from(err).context(format!("Lost input device {}", path.display())))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["altalt", "/dev/input/event1"]);

        assert_eq!(args.device, Some(PathBuf::from("/dev/input/event1")));
        assert!(args.keycode.is_none());
        assert!(args.config.is_none());
        assert!(args.profile.is_none());
        assert!(!args.verbose);
        assert!(!args.list_profiles);
        assert!(!args.check_config);
    }

    #[test]
    fn test_args_keycode() {
        let args = Args::parse_from(["altalt", "-k", "100", "/dev/input/event1"]);
        assert_eq!(args.keycode, Some(Key(100)));

        let args = Args::parse_from(["altalt", "--keycode", "RIGHT_ALT", "/dev/input/event1"]);
        assert_eq!(args.keycode, Some(Key(100)));
    }

    #[test]
    fn test_args_bad_keycode() {
        let result = Args::try_parse_from(["altalt", "-k", "nope", "/dev/input/event1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_device_required() {
        assert!(Args::try_parse_from(["altalt"]).is_err());
        assert!(Args::try_parse_from(["altalt", "--list-profiles"]).is_ok());
        assert!(Args::try_parse_from(["altalt", "--check-config"]).is_ok());
    }

    #[test]
    fn test_args_with_options() {
        let args = Args::parse_from([
            "altalt",
            "--config",
            "/tmp/altalt.toml",
            "--profile",
            "droid4",
            "--verbose",
            "/dev/input/event3",
        ]);

        assert_eq!(args.config, Some(PathBuf::from("/tmp/altalt.toml")));
        assert_eq!(args.profile.as_deref(), Some("droid4"));
        assert!(args.verbose);
    }

    #[test]
    fn test_resolve_modifier_precedence() {
        let mut config = Config::default();
        assert_eq!(resolve_modifier(None, &config), Key::LEFT_ALT);

        config.modifier = Some(Key(100));
        assert_eq!(resolve_modifier(None, &config), Key(100));
        assert_eq!(resolve_modifier(Some(Key(29)), &config), Key(29));
    }

    #[test]
    fn test_pick_profile() {
        let registry = ProfileRegistry::with_builtin().unwrap();

        let matched = pick_profile(&registry, None, "4a31c000.keypad").unwrap();
        assert_eq!(matched.name(), "droid4");

        let fallback = pick_profile(&registry, None, "AT Translated Set 2 keyboard").unwrap();
        assert_eq!(fallback.name(), "droid4");

        assert!(pick_profile(&registry, Some("missing"), "anything").is_err());
    }
}
