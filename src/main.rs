use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};

use chartpipe::csv_reader;
use chartpipe::data::Dataset;
use chartpipe::parser;
use chartpipe::runtime::{ChartPreview, CollectSink};

#[derive(Parser, Debug)]
#[command(name = "chartpipe")]
#[command(about = "Aggregate tabular data into chart-ready series", long_about = None)]
struct Args {
    /// Chart request (e.g., 'bar(category: region, value: sales) | filter(column: region, value: West)')
    request: String,

    /// Treat stdin as a JSON array of objects instead of CSV
    #[arg(long)]
    json: bool,

    /// Pretty-print the output payload
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Parse the request string
    let request = match parser::parse_chart_request(&args.request) {
        Ok((_, request)) => request,
        Err(e) => {
            eprintln!("Parse error: {:?}", e);
            std::process::exit(1);
        }
    };

    // Read the table from stdin
    let dataset = if args.json {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read JSON from stdin")?;
        let value: serde_json::Value =
            serde_json::from_str(&buf).context("Failed to parse JSON input")?;
        Dataset::from_json(&value).context("Failed to build dataset from JSON")?
    } else {
        csv_reader::read_csv_from_stdin().context("Failed to read CSV from stdin")?
    };

    // Run the pipeline and capture the export payload
    let mut preview = ChartPreview::new(dataset);
    let mut sink = CollectSink::default();
    preview.set_request(request, &mut sink);

    // None serializes as a bare `null`, mirroring the cleared-export signal
    let payload = if args.pretty {
        serde_json::to_string_pretty(&sink.last_export)
    } else {
        serde_json::to_string(&sink.last_export)
    }
    .context("Failed to serialize export payload")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", payload).context("Failed to write payload to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}
