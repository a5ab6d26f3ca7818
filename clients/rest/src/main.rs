use actix_web::{
    middleware::{self, Condition},
    web::Data,
    App, HttpServer,
};
use clap::Parser;
use database::database::{database::Database, options::DatabaseOptions};
use std::io;

mod error;
mod routes;

/// 📀 Person REST Server, CRUD over an in-memory collection of people
#[derive(Parser, Debug)]
struct Cli {
    /// Port the http server will run on
    #[clap(short, long, default_value = "3000")]
    port: u16,

    /// Address the http server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Logs every http request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let request_manager = Database::new(DatabaseOptions::default()).run();

    let server_request_manager = request_manager.clone();

    log::info!("starting HTTP server on port {}.", args.port);

    log::info!(
        "Server running on http://{}:{}/person",
        args.address,
        args.port
    );

    // Start HTTP server, actix handles ctrl-c / SIGTERM and returns once the workers have stopped
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(server_request_manager.clone()))
            .configure(routes::configure)
            .wrap(routes::cors_headers())
            .wrap(routes::normalize_path())
            .wrap(Condition::new(args.log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address.as_str(), args.port))?
    .run()
    .await?;

    match request_manager.send_shutdown_request() {
        Ok(shutdown_response) => log::info!("Shutting down server: {}", shutdown_response),
        Err(err) => log::error!("Failed to shutdown database: {}", err),
    }

    Ok(())
}
