//! MIPS-lite cycle-accurate simulator CLI.
//!
//! This binary is the single entry point for simulation runs. It performs:
//! 1. **Setup:** Flag parsing, optional JSON configuration, logger init.
//! 2. **Execution:** Image load and run-to-completion under the cycle cap.
//! 3. **Reporting:** Final architectural state, instruction counts, optional
//!    timing section and memory image dump, optional image persistence.

use clap::Parser;
use log::debug;
use std::path::Path;
use std::{fs, process};

use mips_lite_core::config::Config;
use mips_lite_core::mem::{ImageMemory, MemoryAccess};
use mips_lite_core::sim::{loader, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "mips-lite",
    author,
    version,
    about = "MIPS-lite cycle-accurate pipeline simulator",
    long_about = "Simulate a MIPS-lite memory image through the five-stage pipeline.\n\nThe input is a text file holding one 32-bit word per line as 8 hex digits.\nBy default the run reports final architectural state and instruction counts;\n-t adds timing, -m dumps the memory image, -o persists it.\n\nExamples:\n  mips-lite -i traces/random.txt\n  mips-lite -i program.txt -f -t\n  mips-lite -i program.txt -o final.txt -m"
)]
struct Cli {
    /// Input memory image.
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Write the final memory image to this path on exit.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Print the full memory image to stdout after the run.
    #[arg(short = 'm', long = "print-memory")]
    print_memory: bool,

    /// Emit the timing section (total stalls, total cycles).
    #[arg(short = 't', long = "timing")]
    timing: bool,

    /// Enable operand forwarding in the pipeline.
    #[arg(short = 'f', long = "forwarding")]
    forwarding: bool,

    /// JSON configuration file; individual flags override its values.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Override the cycle safety cap.
    #[arg(long = "max-cycles")]
    max_cycles: Option<u64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path),
        None => Config::default(),
    };
    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(output) = cli.output {
        config.output = Some(output);
    }
    config.forwarding |= cli.forwarding;
    config.timing |= cli.timing;
    config.print_memory |= cli.print_memory;
    if let Some(max_cycles) = cli.max_cycles {
        config.max_cycles = max_cycles;
    }
    debug!("effective configuration: {:?}", config);

    print_banner(&config);

    let memory = loader::load_image(Path::new(&config.input)).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: could not load image '{}': {}", config.input, e);
        process::exit(1);
    });

    let mut sim = Simulator::new(memory, &config);
    if let Err(e) = sim.run() {
        eprintln!("\n[!] FATAL: {}", e);
        for row in sim.engine.regs.dump_rows() {
            eprintln!("{}", row);
        }
        sim.engine.stats.print();
        process::exit(1);
    }

    print_report(&mut sim, &config);

    if let Some(output) = &config.output {
        if let Err(e) = loader::save_image(Path::new(output), &sim.engine.memory) {
            eprintln!("\n[!] FATAL: could not write image '{}': {}", output, e);
            process::exit(1);
        }
        println!("Memory image written to {}", output);
    }
}

/// Loads a JSON configuration file, exiting the process on failure.
fn load_config(path: &str) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {}", path, e);
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {}", path, e);
        process::exit(1);
    })
}

/// Prints the settings banner before the run starts.
fn print_banner(config: &Config) {
    let on_off = |flag: bool| if flag { "ENABLED" } else { "DISABLED" };
    println!("Current Settings:");
    println!("  Input image:     {}", config.input);
    println!(
        "  Output image:    {}",
        config.output.as_deref().unwrap_or("(none)")
    );
    println!("  Forwarding:      {}", on_off(config.forwarding));
    println!("  Timing report:   {}", on_off(config.timing));
    println!();
}

/// Renders the final report: instruction counts, architectural state, and the
/// optional timing and memory sections.
fn print_report(sim: &mut Simulator<ImageMemory>, config: &Config) {
    let mut sections = vec!["summary".to_string()];
    if config.timing {
        sections.push("timing".to_string());
    }

    println!("==========================================================");
    println!("MIPS-LITE SIMULATION RESULTS");
    println!("==========================================================");
    sim.engine.stats.print_sections(&sections);

    println!("FINAL STATE");
    println!("  {:<22} {}", "pc", sim.engine.pc());
    let registers: Vec<u8> = sim.engine.stats.registers().iter().copied().collect();
    for reg in registers {
        let value = sim.engine.regs.read(reg) as i32;
        println!("  {:<22} {}", format!("R{}", reg), value);
    }
    let addresses: Vec<u32> = sim.engine.stats.memory_addresses().iter().copied().collect();
    for addr in addresses {
        let value = sim.engine.memory.read_data(addr).unwrap_or(0) as i32;
        println!("  {:<22} {}", format!("mem[{}]", addr), value);
    }
    println!("==========================================================");

    if config.print_memory {
        println!("MEMORY IMAGE");
        print!("{}", loader::format_image(&sim.engine.memory));
        println!("==========================================================");
    }
}
