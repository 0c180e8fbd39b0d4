//! write-guard - block automated writes to sensitive files
//!
//! # Usage
//!
//! ```bash
//! # As a pre-write hook (reads JSON from stdin, answers via exit status)
//! echo '{"tool_name":"Write","tool_input":{"file_path":".env"}}' | write-guard
//!
//! # Check a path directly
//! write-guard --path config/secrets.yaml
//!
//! # Dry-run mode (report what would be blocked)
//! write-guard --dry-run
//! ```

use std::env;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use write_guard::{
    audit::AuditLogger,
    config::{Config, Mode, SafetyLevel, DEFAULT_CONFIG_TOML},
    engine::SensitivePathGuard,
    hook,
    output::HookOutput,
    WriteRequest,
};

/// Print version information
fn print_version() {
    println!("write-guard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"write-guard - block automated writes to sensitive files

USAGE:
    write-guard [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -l, --level LEVEL       Safety level: standard, strict (default: standard)
    -d, --dry-run           Report matches but never block
    -c, --config PATH       Path to config file
    -p, --path PATH         Check PATH instead of reading a hook payload from stdin
        --list              Print the active rules and exit
        --print-config      Print the default configuration file and exit

EXIT STATUS:
    0   write allowed
    1   input could not be parsed
    2   write blocked (message on stderr)

ENVIRONMENT:
    WRITE_GUARD_DISABLED=1   Skip all checks
    WRITE_GUARD_WARN_ONLY=1  Warn but don't block

USAGE AS HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "matcher": "Write|Edit|MultiEdit",
          "hooks": [{{ "type": "command", "command": "write-guard" }}]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
#[derive(Default)]
struct Args {
    help: bool,
    version: bool,
    list: bool,
    print_config: bool,
    dry_run: bool,
    level: Option<SafetyLevel>,
    config_path: Option<String>,
    path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-d" | "--dry-run" => result.dry_run = true,
                "--list" => result.list = true,
                "--print-config" => result.print_config = true,
                flag @ ("-l" | "--level") => {
                    if let Some(value) = take_value(&args, &mut i, flag) {
                        result.level = parse_level(&value);
                    }
                }
                flag @ ("-c" | "--config") => {
                    result.config_path = take_value(&args, &mut i, flag);
                }
                flag @ ("-p" | "--path") => {
                    result.path = take_value(&args, &mut i, flag);
                }
                arg if arg.starts_with("--level=") => {
                    result.level = parse_level(arg.trim_start_matches("--level="));
                }
                arg if arg.starts_with("--config=") => {
                    result.config_path = Some(arg.trim_start_matches("--config=").to_string());
                }
                arg if arg.starts_with("--path=") => {
                    result.path = Some(arg.trim_start_matches("--path=").to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

/// Consume the value following `flag`, warning when there is none
fn take_value(args: &[String], i: &mut usize, flag: &str) -> Option<String> {
    if *i + 1 < args.len() {
        *i += 1;
        Some(args[*i].clone())
    } else {
        eprintln!("Warning: {} requires a value, ignoring", flag);
        None
    }
}

fn parse_level(s: &str) -> Option<SafetyLevel> {
    let level = SafetyLevel::from_str(s);
    if level.is_none() {
        eprintln!("Warning: Unknown safety level '{}', ignoring", s);
    }
    level
}

/// Build the guard, skipping custom patterns that do not compile
fn build_guard(config: &Config) -> SensitivePathGuard {
    match SensitivePathGuard::from_config(config) {
        Ok((guard, skipped)) => {
            for e in skipped {
                eprintln!("Warning: {} (rule skipped)", e);
            }
            guard
        }
        Err(e) => {
            eprintln!("Warning: {} (using built-in rules only)", e);
            SensitivePathGuard::new(config.general.level).expect("built-in patterns compile")
        }
    }
}

/// Write the message (if any) and exit with the hook's status
fn finish(output: HookOutput) -> ! {
    if let Some(message) = output.message {
        eprintln!("{}", message);
    }
    process::exit(output.exit_code);
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    if args.print_config {
        print!("{}", DEFAULT_CONFIG_TOML.trim_start());
        return;
    }

    // Load configuration
    let mut config = match args.config_path {
        Some(ref path) => Config::load_from(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: {}", e);
            Config::default()
        }),
        None => Config::load(),
    };

    if let Some(level) = args.level {
        config.general.level = level;
    }

    config.apply_env();

    if args.dry_run && config.general.mode == Mode::Enforce {
        config.general.mode = Mode::Warn;
    }

    let guard = build_guard(&config);

    if args.list {
        for rule in guard.rules() {
            println!("{:<24} {:<36} {}", rule.id, rule.pattern, rule.reason);
        }
        return;
    }

    let mut logger = AuditLogger::new(config.audit_path().as_deref());

    // Direct path check bypasses stdin
    if let Some(path) = args.path {
        let request = WriteRequest::for_path(path);
        finish(hook::evaluate(
            &request,
            &guard,
            config.general.mode,
            &mut logger,
        ));
    }

    let mut raw = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut raw) {
        finish(HookOutput::failure(format!(
            "write-guard: failed to read stdin: {}",
            e
        )));
    }

    finish(hook::handle(&raw, &guard, config.general.mode, &mut logger));
}
