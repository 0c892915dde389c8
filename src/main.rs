use std::io;

use actix_web::web::Data;
use clap::Parser;
use persondb::{
    consts::consts::{DEFAULT_HTTP_WORKERS, DEFAULT_PORT},
    database::store::PersonStore,
    server::{options::ServerOptions, server::Server},
};

/// 📀 Persondb HTTP Server, provides a JSON CRUD interface over an in-memory person store
#[derive(Parser, Debug)]
struct Cli {
    /// Port the http server will run on
    #[clap(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address the http server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Logs every request handled by the server
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = DEFAULT_HTTP_WORKERS)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let options = ServerOptions::default()
        .set_address(args.address)
        .set_port(args.port)
        .set_http_workers(args.http_workers)
        .set_log_http(args.log_http);

    // Single store for the lifetime of the process, shared with every worker
    let store = Data::new(PersonStore::new());

    Server::new(options).run(store).await
}
