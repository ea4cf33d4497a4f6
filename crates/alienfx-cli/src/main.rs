use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use alienfx_core::{Colour, Command, CommandPacket, NameTable};
use anyhow::Context;
use clap::{Parser, Subcommand};
use glob::glob;
use serde::Serialize;

const EXAMPLE_PACKET: &str = "02 06 00 00 00 00 00 00 00 00 00 00";

const NAMES_HINT: &str = "expected JSON with \"zones\", \"reset_types\" and \"states\" maps";
const INPUT_HINT: &str = "pass a text file with one hex packet per line";

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ALIENFX_BUILD_COMMIT"),
    " ",
    env!("ALIENFX_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "alienfx")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Encode and decode AlienFX lighting controller command packets.",
    long_about = None,
    after_help = "Examples:\n  alienfx packet decode \"02 03 01 01 02 03 ff 00 80 00 00 00\"\n  alienfx packet decode --input capture.txt --names zones.json\n  alienfx packet encode set-colour --block 1 --zone 0x010203 --colour 255,0,128"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on 12-byte command packets.
    Packet {
        #[command(subcommand)]
        command: PacketCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PacketCommands {
    /// Describe raw packets in human-readable form.
    #[command(alias = "dump")]
    #[command(
        after_help = "Packets are hex text: \"02 03 01 ...\", \"0x02,0x03,...\" or \"020301...\".\nWith --input, one packet per line; blank lines and lines starting with '#' are skipped."
    )]
    Decode {
        /// Packets as hex text
        #[arg(required_unless_present = "input")]
        packets: Vec<String>,

        /// File with one packet per line (a glob must match exactly one file)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON name table for zones, reset types and states
        #[arg(short, long, env = "ALIENFX_NAMES")]
        names: Option<PathBuf>,

        /// Print one JSON object per packet
        #[arg(long)]
        json: bool,
    },
    /// Build a packet and print its bytes.
    Encode {
        /// Print the packet as a JSON byte array
        #[arg(long, global = true)]
        json: bool,

        #[command(subcommand)]
        command: EncodeCommands,
    },
}

/// Integer arguments accept decimal, 0x-prefixed hex and negative values;
/// every value is truncated to its field width.
#[derive(Subcommand, Debug)]
enum EncodeCommands {
    /// Blend a zone between two colours.
    #[command(alias = "set-morph-color")]
    SetMorphColour {
        #[arg(long, value_parser = parse_int, allow_hyphen_values = true)]
        block: i64,
        #[arg(long, value_parser = parse_int, allow_hyphen_values = true)]
        zone: i64,
        /// First colour as R,G,B
        #[arg(long, value_parser = parse_colour, allow_hyphen_values = true)]
        colour1: Colour,
        /// Second colour as R,G,B
        #[arg(long, value_parser = parse_colour, allow_hyphen_values = true)]
        colour2: Colour,
    },
    /// Blink a zone in one colour.
    #[command(alias = "set-blink-color")]
    SetBlinkColour {
        #[arg(long, value_parser = parse_int, allow_hyphen_values = true)]
        block: i64,
        #[arg(long, value_parser = parse_int, allow_hyphen_values = true)]
        zone: i64,
        /// Colour as R,G,B
        #[arg(long, value_parser = parse_colour, allow_hyphen_values = true)]
        colour: Colour,
    },
    /// Set a zone to a steady colour.
    #[command(alias = "set-color")]
    SetColour {
        #[arg(long, value_parser = parse_int, allow_hyphen_values = true)]
        block: i64,
        #[arg(long, value_parser = parse_int, allow_hyphen_values = true)]
        zone: i64,
        /// Colour as R,G,B
        #[arg(long, value_parser = parse_colour, allow_hyphen_values = true)]
        colour: Colour,
    },
    /// End the current loop block.
    LoopBlockEnd,
    /// Execute the transmitted commands.
    TransmitExecute,
    /// Ask the controller for its status.
    GetStatus,
    /// Reset the controller.
    Reset {
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        reset_type: i64,
    },
    /// Store the following commands under a power state.
    SaveNext {
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        state: i64,
    },
    /// Commit saved commands.
    Save,
    /// Set the animation speed (16-bit).
    SetSpeed {
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        speed: i64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Packet { command } => match command {
            PacketCommands::Decode {
                packets,
                input,
                names,
                json,
            } => cmd_packet_decode(packets, input, names, json),
            PacketCommands::Encode { json, command } => cmd_packet_encode(command, json),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Failure reported as `error:` plus an optional `hint:` line.
#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err))
    }
}

/// One decoded packet in `--json` output.
#[derive(Debug, Serialize)]
struct DecodedPacket {
    hex: String,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<Command>,
}

fn cmd_packet_decode(
    packets: Vec<String>,
    input: Option<PathBuf>,
    names: Option<PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let names = match names {
        Some(path) => NameTable::load(&path)
            .with_context(|| format!("Failed to load name table: {}", path.display()))
            .map_err(|err| CliError::new(format!("{:#}", err)).hint(NAMES_HINT))?,
        None => NameTable::new(),
    };

    let mut sources: Vec<(String, String)> = packets
        .into_iter()
        .enumerate()
        .map(|(index, text)| (format!("argument {}", index + 1), text))
        .collect();

    if let Some(input) = input {
        let resolved = resolve_input_path(&input)?;
        validate_input_file(&resolved)?;
        let text = fs::read_to_string(&resolved)
            .with_context(|| format!("Failed to read input file: {}", resolved.display()))?;
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            sources.push((
                format!("{}:{}", resolved.display(), number + 1),
                line.to_string(),
            ));
        }
    }

    for (origin, text) in sources {
        let bytes = parse_packet_hex(&text).map_err(|reason| {
            CliError::new(format!("invalid packet at {}: {}", origin, reason))
                .hint(format!("write bytes as hex, e.g. \"{}\"", EXAMPLE_PACKET))
        })?;
        let line = alienfx_core::decode(&bytes, &names);
        tracing::debug!(%origin, len = bytes.len(), "decoded packet");

        if json {
            let decoded = DecodedPacket {
                hex: format_hex(&bytes),
                text: line,
                command: CommandPacket::try_from(bytes.as_slice())
                    .ok()
                    .and_then(|packet| Command::parse(&packet).ok()),
            };
            let json = serde_json::to_string(&decoded).context("JSON serialization failed")?;
            println!("{}", json);
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_packet_encode(command: EncodeCommands, json: bool) -> Result<(), CliError> {
    let packet = build_packet(command);
    if json {
        let json = serde_json::to_string(&packet).context("JSON serialization failed")?;
        println!("{}", json);
    } else {
        println!("{}", packet.to_hex());
    }
    Ok(())
}

fn build_packet(command: EncodeCommands) -> CommandPacket {
    match command {
        EncodeCommands::SetMorphColour {
            block,
            zone,
            colour1,
            colour2,
        } => alienfx_core::make_cmd_set_morph_colour(block, zone, colour1, colour2),
        EncodeCommands::SetBlinkColour {
            block,
            zone,
            colour,
        } => alienfx_core::make_cmd_set_blink_colour(block, zone, colour),
        EncodeCommands::SetColour {
            block,
            zone,
            colour,
        } => alienfx_core::make_cmd_set_colour(block, zone, colour),
        EncodeCommands::LoopBlockEnd => alienfx_core::make_cmd_loop_block_end(),
        EncodeCommands::TransmitExecute => alienfx_core::make_cmd_transmit_execute(),
        EncodeCommands::GetStatus => alienfx_core::make_cmd_get_status(),
        EncodeCommands::Reset { reset_type } => alienfx_core::make_cmd_reset(reset_type),
        EncodeCommands::SaveNext { state } => alienfx_core::make_cmd_save_next(state),
        EncodeCommands::Save => alienfx_core::make_cmd_save(),
        EncodeCommands::SetSpeed { speed } => alienfx_core::make_cmd_set_speed(speed),
    }
}

fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Accepts `02 03 ...`, `0x02,0x03,...` or a run of digit pairs `0203...`.
fn parse_packet_hex(text: &str) -> Result<Vec<u8>, String> {
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    if let [single] = tokens.as_slice() {
        let digits = strip_hex_prefix(single);
        if digits.len() > 2 {
            if digits.len() % 2 != 0 {
                return Err(format!("odd number of hex digits in '{}'", single));
            }
            return digits
                .as_bytes()
                .chunks(2)
                .map(|pair| {
                    let pair =
                        std::str::from_utf8(pair).map_err(|_| "non-ASCII input".to_string())?;
                    parse_hex_byte(pair)
                })
                .collect();
        }
    }

    tokens.into_iter().map(parse_hex_byte).collect()
}

fn parse_hex_byte(token: &str) -> Result<u8, String> {
    let digits = strip_hex_prefix(token);
    if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("'{}' is not a hex byte", token));
    }
    u8::from_str_radix(digits, 16).map_err(|_| format!("'{}' is not a hex byte", token))
}

fn strip_hex_prefix(token: &str) -> &str {
    token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token)
}

fn parse_int(text: &str) -> Result<i64, String> {
    let trimmed = text.trim();
    let (negative, magnitude) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (digits, radix) = match magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (magnitude, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(format!("invalid integer '{}'", text));
    }
    let magnitude = u64::from_str_radix(digits, radix)
        .map_err(|err| format!("invalid integer '{}': {}", text, err))?;
    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(value).map_err(|_| format!("integer '{}' does not fit in 64 bits", text))
}

fn parse_colour(text: &str) -> Result<Colour, String> {
    let channels = text
        .split(',')
        .map(parse_int)
        .collect::<Result<Vec<_>, _>>()?;
    match channels.as_slice() {
        [red, green, blue] => Ok(Colour::new(*red, *green, *blue)),
        _ => Err(format!(
            "invalid colour '{}': expected three channels as R,G,B",
            text
        )),
    }
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(
            CliError::new(format!("input file not found: {}", input.display())).hint(INPUT_HINT),
        );
    }
    if !input.is_file() {
        return Err(
            CliError::new(format!("input is not a file: {}", input.display())).hint(INPUT_HINT),
        );
    }
    Ok(())
}

/// Expands a glob to the single file it names; plain paths pass through.
fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let bad_pattern = |reason: String| {
        CliError::new(format!("invalid input pattern '{}'", pattern))
            .hint(format!("pattern error: {}", reason))
    };
    let files = glob(&pattern)
        .map_err(|err| bad_pattern(err.msg.to_string()))?
        .filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(Ok(path)),
            Ok(_) => None,
            Err(err) => Some(Err(bad_pattern(err.to_string()))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    match files.as_slice() {
        [] => Err(CliError::new(format!("no files match pattern '{}'", pattern))
            .hint("check the path or quote the pattern")),
        [file] => Ok(file.clone()),
        [first, second, rest @ ..] => {
            let mut listed = format!("{}, {}", first.display(), second.display());
            if !rest.is_empty() {
                listed.push_str(&format!(" and {} more", rest.len()));
            }
            Err(CliError::new(format!(
                "multiple files match pattern '{}': {}",
                pattern, listed
            ))
            .hint("pass a single input file, or run once per file"))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
