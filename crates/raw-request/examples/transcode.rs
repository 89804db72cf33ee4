//! Reads a raw request from the file given as first argument (or stdin),
//! logs what was parsed and prints the re-serialized request.
//!
//! ```text
//! cargo run --example transcode -- request.txt
//! ```

use std::io::Read;

use raw_request::codec::RawRequestCodec;
use raw_request::protocol::ServerRequest;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).with_writer(std::io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let raw = match read_input(std::env::args().nth(1)) {
        Ok(raw) => raw,
        Err(e) => {
            error!(cause = %e, "failed to read raw request");
            return;
        }
    };

    let codec = RawRequestCodec::new();
    let mut request = codec.deserialize(&raw);

    info!(
        method = request.method(),
        target = request.target(),
        version = request.protocol_version(),
        headers = request.headers().len(),
        "parsed request"
    );
    for (name, values) in request.headers().iter() {
        info!(name, values = ?values, "header");
    }
    if let Some(form) = request.parsed_body() {
        for (key, value) in form.iter() {
            info!(key, value = ?value, "form field");
        }
    }

    print!("{}", codec.serialize(&mut request));
}

fn read_input(path: Option<String>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
