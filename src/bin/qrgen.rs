use clap::{Parser, Subcommand};
use rust_qr_gen::config::{QR_QUIET_ZONE_MODULES, RenderOptions, default_dpr, default_ec_level};
use rust_qr_gen::models::ECLevel;
use rust_qr_gen::tools::{matrix_to_ascii, save_image, summarize};
use rust_qr_gen::{QrEncoder, Symbology};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrgen", version, about = "QR Code and linear barcode generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode digits as a QR code
    Qr {
        data: String,
        #[arg(long)]
        output: PathBuf,
        /// Error correction level (L, M, Q, H)
        #[arg(long, value_parser = parse_ec_level)]
        ec: Option<ECLevel>,
        #[arg(long)]
        dpr: Option<u32>,
    },
    /// Encode 12 or 13 digits as EAN-13
    Ean13 {
        data: String,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        dpr: Option<u32>,
    },
    /// Encode 13 or 14 digits as ITF-14
    Itf14 {
        data: String,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        dpr: Option<u32>,
    },
    /// Encode ASCII text as Code 128
    Code128 {
        data: String,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        dpr: Option<u32>,
    },
    /// Print version, mask penalties and an ASCII preview of a QR code
    Inspect {
        data: String,
        #[arg(long, value_parser = parse_ec_level)]
        ec: Option<ECLevel>,
    },
}

fn parse_ec_level(value: &str) -> Result<ECLevel, String> {
    ECLevel::from_letter(value).ok_or_else(|| format!("invalid error correction level: {value}"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Qr {
            data,
            output,
            ec,
            dpr,
        } => render_cmd(Symbology::Qr, &data, &output, options(dpr, ec)),
        Command::Ean13 { data, output, dpr } => {
            render_cmd(Symbology::Ean13, &data, &output, options(dpr, None))
        }
        Command::Itf14 { data, output, dpr } => {
            render_cmd(Symbology::Itf14, &data, &output, options(dpr, None))
        }
        Command::Code128 { data, output, dpr } => {
            render_cmd(Symbology::Code128, &data, &output, options(dpr, None))
        }
        Command::Inspect { data, ec } => inspect_cmd(&data, ec.unwrap_or_else(default_ec_level)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn options(dpr: Option<u32>, ec: Option<ECLevel>) -> RenderOptions {
    RenderOptions::new(
        dpr.unwrap_or_else(default_dpr),
        ec.unwrap_or_else(default_ec_level),
    )
}

fn render_cmd(
    symbology: Symbology,
    data: &str,
    output: &Path,
    options: RenderOptions,
) -> Result<(), String> {
    let buffer = symbology
        .render(data, &options)
        .map_err(|err| format!("{symbology}: {err}"))?;
    save_image(&buffer, output)
        .map_err(|err| format!("Failed to write {}: {}", output.display(), err))?;
    println!(
        "{} written to {} ({}x{})",
        symbology,
        output.display(),
        buffer.width,
        buffer.height
    );
    Ok(())
}

fn inspect_cmd(data: &str, ec_level: ECLevel) -> Result<(), String> {
    let qr = QrEncoder::encode(data, ec_level).map_err(|err| err.to_string())?;
    let summary = summarize(&qr);
    println!(
        "Version {} ({}x{}), EC level {}, mask {}",
        summary.version, summary.size, summary.size, summary.ec_level, summary.mask
    );
    println!(
        "Codewords: {} data, {} total",
        summary.data_codewords, summary.total_codewords
    );
    println!("Dark modules: {:.1}%", summary.dark_ratio * 100.0);
    for (id, penalty) in summary.penalties.iter().enumerate() {
        let marker = if id as u8 == summary.mask { " <" } else { "" };
        println!("  mask {id}: {penalty}{marker}");
    }
    print!("{}", matrix_to_ascii(&qr.matrix, QR_QUIET_ZONE_MODULES as usize));
    Ok(())
}
