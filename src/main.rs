// MIT License - Copyright (c) 2026 Peter Wright

// paradoxctl: command-line client for Paradox MG/SP panels

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use paradox_mgsp::{
    ArmMode, OutputAction, PanelConfig, SerialTransport, Session,
};

#[derive(Parser)]
#[command(name = "paradoxctl")]
#[command(about = "Talk to a Paradox MG/SP alarm panel over its serial header")]
struct Cli {
    /// Serial device
    #[arg(long, default_value = "/dev/ttyUSB0")]
    port: String,

    /// Baud rate
    #[arg(long, default_value_t = 9600)]
    baud: u32,

    /// PC password (4 hex digits)
    #[arg(long, default_value = "0000")]
    password: String,

    /// Response timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List serial ports on this machine
    Ports,
    /// Handshake with the panel and print its identity
    Identify,
    /// Arm a partition
    Arm {
        /// Partition number (1-8)
        partition: u8,
        /// arm, arm_stay, arm_sleep, arm_instant or arm_stay_instant
        #[arg(default_value = "arm")]
        mode: ArmMode,
    },
    /// Disarm a partition
    Disarm {
        /// Partition number (1-8)
        partition: u8,
    },
    /// Toggle bypass on a zone
    Bypass {
        /// Zone number (1-192)
        zone: u8,
    },
    /// Drive a PGM output
    Output {
        /// Output number (1-16)
        output: u8,
        /// on, off, on_override or off_override
        action: OutputAction,
    },
    /// Read raw EEPROM bytes
    Read {
        /// EEPROM address (decimal or 0x-prefixed hex)
        #[arg(value_parser = parse_address)]
        address: u16,
        /// Record count (1-32)
        #[arg(default_value_t = 1)]
        records: u8,
    },
    /// Print live events as they arrive
    Monitor {
        /// Stop after this many seconds (default: run until Ctrl-C)
        #[arg(long)]
        duration_secs: Option<u64>,
    },
}

fn parse_address(s: &str) -> std::result::Result<u16, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|_| format!("invalid address: {s}"))
}

fn build_config(cli: &Cli) -> PanelConfig {
    PanelConfig::builder()
        .port(&cli.port)
        .baud_rate(cli.baud)
        .pc_password(&cli.password)
        .response_timeout_ms(cli.timeout_ms)
        .build()
}

/// Open the port and complete the handshake.
async fn connect(config: &PanelConfig) -> Result<Session<SerialTransport>> {
    let transport = SerialTransport::open(config)
        .with_context(|| format!("failed to open {}", config.port))?;
    let mut session = Session::with_config(transport, config);

    let identity = session.identify().await.context("handshake failed")?;
    info!(
        "Panel: {} firmware {} id {}",
        identity.product_id, identity.firmware, identity.panel_id
    );
    Ok(session)
}

/// Open, handshake and authenticate.
async fn connect_authenticated(config: &PanelConfig) -> Result<Session<SerialTransport>> {
    let mut session = connect(config).await?;
    if !session.authenticate(&config.pc_password).await? {
        bail!("panel rejected the PC password");
    }
    Ok(session)
}

fn print_result(operation: &str, result: paradox_mgsp::CommandResult) {
    if result.success {
        println!("{operation}: ok");
    } else {
        println!(
            "{operation}: rejected ({}, code 0x{:02X})",
            result.status, result.code
        );
    }
}

fn hex_dump(data: &[u8]) -> String {
    let mut lines = Vec::new();
    for (i, chunk) in data.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02X}")).collect();
        let ascii: String = chunk
            .iter()
            .map(|&b| if (32..127).contains(&b) { b as char } else { '.' })
            .collect();
        lines.push(format!("{:04X}  {:<47}  {}", i * 16, hex.join(" "), ascii));
    }
    lines.join("\n")
}

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controls verbosity (e.g. RUST_LOG=paradox_mgsp=debug for
    // frame-level hex dumps). Default: info.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let config = build_config(&cli);

    match cli.command {
        Command::Ports => {
            let ports = SerialTransport::available_ports()?;
            if ports.is_empty() {
                println!("no serial ports found");
            }
            for port in ports {
                println!("{port}");
            }
        }

        Command::Identify => {
            let session = connect(&config).await?;
            let identity = session
                .identity()
                .context("handshake completed without identity")?;
            println!("Product:  {}", identity.product_id);
            println!("Firmware: {}", identity.firmware);
            println!("Panel id: {}", identity.panel_id);
            println!("Source:   {}", identity.source_id);
        }

        Command::Arm { partition, mode } => {
            let mut session = connect_authenticated(&config).await?;
            let result = session.arm(partition, mode).await?;
            print_result(&format!("arm partition {partition} ({mode})"), result);
        }

        Command::Disarm { partition } => {
            let mut session = connect_authenticated(&config).await?;
            let result = session.disarm(partition).await?;
            print_result(&format!("disarm partition {partition}"), result);
        }

        Command::Bypass { zone } => {
            let mut session = connect_authenticated(&config).await?;
            let result = session.bypass_zone(zone).await?;
            print_result(&format!("bypass zone {zone}"), result);
        }

        Command::Output { output, action } => {
            let mut session = connect_authenticated(&config).await?;
            let result = session.control_output(output, action).await?;
            print_result(&format!("output {output}"), result);
        }

        Command::Read { address, records } => {
            let mut session = connect_authenticated(&config).await?;
            let data = session.read_memory(address, records).await?;
            println!("{}", hex_dump(&data));
        }

        Command::Monitor { duration_secs } => {
            let mut session = connect_authenticated(&config).await?;
            let duration = duration_secs.map(Duration::from_secs);
            let mut monitor = session.monitor_events(duration);

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        info!("Interrupted, stopping monitor");
                        break;
                    }
                    event = monitor.next_event() => {
                        match event? {
                            Some(ev) => println!(
                                "event group={} codes=({},{}) partition={} label={:?}",
                                ev.event_group, ev.event_1, ev.event_2, ev.partition, ev.label
                            ),
                            None => break,
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
