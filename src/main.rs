//! Command line front end for building blehostd requests
//!
//! Each invocation encodes one request and writes it to stdout as a JSON
//! line, ready to be piped into the daemon.

use anyhow::Context;
use blehostd_proto::domain::settings::SettingsService;
use blehostd_proto::infrastructure::blehostd::wire::{encode_request, encode_request_pretty};
use blehostd_proto::infrastructure::logging::init_logger;
use blehostd_proto::{
    status_error, BleAddr, BleAddrType, BleBytes, BleRequest, BleUuid, MsgOp, MsgType,
    RequestFactory,
};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "blehostd-req")]
#[command(about = "Build blehostd requests and decode daemon status codes")]
struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to a peer using the default connection parameters
    Connect {
        /// Peer address, e.g. 01:02:03:04:05:06
        peer_addr: BleAddr,
        /// public, random, rpa_pub or rpa_rnd
        #[arg(long, default_value = "public")]
        peer_addr_type: BleAddrType,
        #[arg(long, default_value = "public")]
        own_addr_type: BleAddrType,
    },
    /// Terminate a connection
    Terminate { conn_handle: u16 },
    /// Cancel a pending connect
    ConnCancel,
    /// Discover a service by UUID
    DiscSvcUuid { conn_handle: u16, uuid: BleUuid },
    /// Discover all characteristics in a handle range
    DiscAllChrs {
        conn_handle: u16,
        start_attr_handle: u16,
        end_attr_handle: u16,
    },
    /// Exchange ATT MTU
    ExchangeMtu { conn_handle: u16 },
    /// Write without response
    WriteCmd {
        conn_handle: u16,
        attr_handle: u16,
        /// Payload as hex, e.g. 0102ff
        #[arg(value_parser = parse_hex)]
        data: BleBytes,
    },
    /// Parse a UUID and print its canonical form
    ParseUuid { uuid: String },
    /// Describe a status code the daemon returned
    Status {
        /// request, response or event
        op: MsgOp,
        /// Message type, e.g. connect
        msg_type: MsgType,
        code: i32,
    },
}

fn parse_hex(s: &str) -> Result<BleBytes, hex::FromHexError> {
    let trimmed = s.trim_start_matches("0x");
    hex::decode(trimmed).map(BleBytes::from)
}

fn emit<R: BleRequest>(req: &R, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        encode_request_pretty(req)?
    } else {
        encode_request(req)?
    };
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    info!("Built {} request seq={}", req.msg_type(), req.seq());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings_service = match cli.settings {
        Some(path) => SettingsService::from_path(path),
        None => SettingsService::new().context("locating settings file")?,
    };
    let settings = settings_service.get();
    let _log_guard = init_logger(&settings.log_settings)?;
    let pretty = settings.pretty_json;

    let factory = RequestFactory::default();

    match cli.command {
        Commands::Connect {
            peer_addr,
            peer_addr_type,
            own_addr_type,
        } => emit(
            &factory.connect_with(peer_addr, peer_addr_type, own_addr_type),
            pretty,
        )?,
        Commands::Terminate { conn_handle } => emit(&factory.terminate(conn_handle), pretty)?,
        Commands::ConnCancel => emit(&factory.conn_cancel(), pretty)?,
        Commands::DiscSvcUuid { conn_handle, uuid } => {
            emit(&factory.disc_svc_uuid(conn_handle, uuid), pretty)?
        }
        Commands::DiscAllChrs {
            conn_handle,
            start_attr_handle,
            end_attr_handle,
        } => emit(
            &factory.disc_all_chrs(conn_handle, start_attr_handle, end_attr_handle),
            pretty,
        )?,
        Commands::ExchangeMtu { conn_handle } => emit(&factory.exchange_mtu(conn_handle), pretty)?,
        Commands::WriteCmd {
            conn_handle,
            attr_handle,
            data,
        } => emit(&factory.write_cmd(conn_handle, attr_handle, data), pretty)?,
        Commands::ParseUuid { uuid } => {
            let parsed = BleUuid::parse(&uuid)?;
            println!("{parsed}");
        }
        Commands::Status { op, msg_type, code } => {
            println!("{}", status_error(op, msg_type, code));
        }
    }

    Ok(())
}
