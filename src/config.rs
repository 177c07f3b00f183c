use crate::domain::request::{PaymentRequest, RawAmount};
use clap::{Args, Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;

/// Builds payment strings for bank-transfer QR codes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve `POST /api/generate-qr` over HTTP
    Serve(ServerConfig),
    /// Encode a single payment and print the JSON response
    Encode(EncodeArgs),
    /// Encode every row of a CSV file and print the results as CSV
    Batch(BatchArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "VIETQR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "VIETQR_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct EncodeArgs {
    /// Bank identification number of the receiving bank
    #[arg(long)]
    pub bank_bin: String,

    /// Destination account number
    #[arg(long)]
    pub account: String,

    /// Amount to transfer
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// Optional transfer message
    #[arg(long)]
    pub message: Option<String>,
}

impl From<EncodeArgs> for PaymentRequest {
    fn from(args: EncodeArgs) -> Self {
        Self {
            bank_bin_code: Some(args.bank_bin),
            bank_account: Some(args.account),
            amount: Some(RawAmount::Text(args.amount)),
            message: args.message,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct BatchArgs {
    /// Input CSV file with columns bankBinCode,bankAccount,amount,message
    pub input: PathBuf,
}
