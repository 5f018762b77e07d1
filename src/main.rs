use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paygate::application::orchestrator::PaymentOrchestrator;
use paygate::domain::ports::{GatewayFactoryBox, LogSink, TokenGenerator};
use paygate::infrastructure::registry::GatewayRegistry;
use paygate::infrastructure::sink::ConsoleSink;
use paygate::infrastructure::token::{RandomTokenGenerator, SeededTokenGenerator};
use paygate::interfaces::csv::payment_reader::PaymentReader;
use paygate::interfaces::csv::receipt_writer::{Receipt, ReceiptWriter};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file (columns: gateway, card, amount)
    input: PathBuf,

    /// Seed for deterministic transaction identifiers (optional).
    /// If omitted, identifiers use random tokens.
    #[arg(long)]
    seed: Option<u64>,

    /// Deadline for a single processor call, in milliseconds.
    #[arg(long, default_value_t = 5000)]
    processor_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let sink: Arc<dyn LogSink> = Arc::new(ConsoleSink::new());
    let tokens: Arc<dyn TokenGenerator> = match cli.seed {
        Some(seed) => Arc::new(SeededTokenGenerator::new(seed)),
        None => Arc::new(RandomTokenGenerator::new()),
    };

    let factory: GatewayFactoryBox = Box::new(GatewayRegistry::with_defaults(sink, tokens));
    let orchestrator = PaymentOrchestrator::new(factory)
        .with_processor_timeout(Duration::from_millis(cli.processor_timeout_ms));

    // Process payments
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = PaymentReader::new(file);

    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());

    for record in reader.payments() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Error reading payment: {}", e);
                continue;
            }
        };
        let (gateway, request) = match record.into_request() {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("Error reading payment: {}", e);
                continue;
            }
        };
        match orchestrator.process_payment(&request, gateway).await {
            Ok(outcome) => {
                let receipt = Receipt::from_outcome(&request, &outcome);
                writer.write_receipt(&receipt).into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error processing payment: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;

    Ok(())
}
