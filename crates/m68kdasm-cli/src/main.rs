use clap::Parser;
use std::process;

use m68kdasm::Instruction;

/// Motorola 68000 raw binary disassembler
#[derive(Parser)]
#[command(name = "m68kdasm", version, about)]
struct Cli {
    /// Input file of raw big-endian 68000 code
    input: String,

    /// Address of the first decoded byte ($hex, 0xhex or decimal)
    #[arg(short, long, default_value = "0", value_parser = parse_number)]
    base: u32,

    /// Skip this many bytes of the file before decoding
    #[arg(long, default_value = "0", value_parser = parse_number)]
    offset: u32,

    /// Decode at most this many bytes
    #[arg(short, long, value_parser = parse_number)]
    length: Option<u32>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Hide hex byte dump column
    #[arg(long)]
    no_hex: bool,

    /// Print instructions as a JSON array
    #[arg(long)]
    json: bool,

    /// Show additional debug information on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Parse `$1000`, `0x1000` or `4096`.
fn parse_number(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix('$') {
        u32::from_str_radix(hex, 16)
    } else if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

fn main() {
    let cli = Cli::parse();

    let data = match std::fs::read(&cli.input) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading '{}': {}", cli.input, e);
            process::exit(1);
        }
    };

    let start = cli.offset as usize;
    if start > data.len() {
        eprintln!(
            "Offset {} is past the end of '{}' ({} bytes)",
            start,
            cli.input,
            data.len()
        );
        process::exit(1);
    }
    let end = match cli.length {
        Some(len) => start.saturating_add(len as usize).min(data.len()),
        None => data.len(),
    };
    let code = &data[start..end];

    if cli.verbose {
        eprintln!(
            "{}: {} bytes, decoding file offsets ${:X}-${:X} at base ${:08X}",
            cli.input,
            data.len(),
            start,
            end,
            cli.base
        );
    }

    let (decoded, failure) = match m68kdasm::decode_range(code, cli.base) {
        Ok(insts) => (insts, None),
        Err(e) => (e.decoded, Some(e.error)),
    };

    if cli.verbose {
        print_families(&decoded);
    }

    let output_text = if cli.json {
        match serde_json::to_string_pretty(&decoded) {
            Ok(json) => format!("{json}\n"),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        decoded
            .iter()
            .map(|inst| format!("{}\n", format_line(inst, !cli.no_hex)))
            .collect()
    };

    if let Some(path) = &cli.output {
        if let Err(e) = std::fs::write(path, &output_text) {
            eprintln!("Error writing '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{output_text}");
    }

    if let Some(error) = failure {
        eprintln!("Error decoding '{}': {}", cli.input, error);
        process::exit(1);
    }
}

/// Widest instruction on the 68000 is 10 bytes.
const HEX_COLUMN_WIDTH: usize = 10 * 3;

fn format_line(inst: &Instruction, show_hex: bool) -> String {
    if !show_hex {
        return format!("{:08X}  {}", inst.address, inst.assembly());
    }
    let hex: Vec<String> = inst.raw_bytes.iter().map(|b| format!("{b:02X}")).collect();
    format!(
        "{:08X}  {:<width$}{}",
        inst.address,
        hex.join(" "),
        inst.assembly(),
        width = HEX_COLUMN_WIDTH
    )
}

fn print_families(decoded: &[Instruction]) {
    let mut data_words = 0;
    for inst in decoded {
        match m68kdasm::resolve(inst.opcode) {
            Some(pattern) if !inst.is_data() => {
                eprintln!("  ${:08X}  {:04X}  {}", inst.address, inst.opcode, pattern.name);
            }
            _ => {
                data_words += 1;
                eprintln!("  ${:08X}  {:04X}  (data)", inst.address, inst.opcode);
            }
        }
    }
    eprintln!(
        "{} instructions, {} data words",
        decoded.len() - data_words,
        data_words
    );
}
