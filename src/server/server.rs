use std::io;

use actix_web::{
    middleware::{self, Condition},
    web::Data,
    App, HttpServer,
};

use crate::database::store::PersonStore;

use super::{options::ServerOptions, routes};

pub struct Server {
    options: ServerOptions,
}

impl Server {
    pub fn new(options: ServerOptions) -> Self {
        Self { options }
    }

    /// Serves the person API until the process receives a shutdown signal. The store is shared by
    /// every worker, it is created by the caller and outlives the server.
    pub async fn run(self, store: Data<PersonStore>) -> io::Result<()> {
        let ServerOptions {
            address,
            port,
            http_workers,
            log_http,
        } = self.options;

        log::info!("starting HTTP server on {}:{}", address, port);

        log::info!(
            "📀 Store              [Persons: {}, HttpWorkers: {}]",
            store.len(),
            http_workers
        );

        HttpServer::new(move || {
            App::new()
                .app_data(store.clone())
                .configure(routes::configure)
                .wrap(routes::cors())
                .wrap(Condition::new(log_http, middleware::Logger::default()))
        })
        .workers(http_workers)
        .bind((address, port))?
        .run()
        .await
    }
}
