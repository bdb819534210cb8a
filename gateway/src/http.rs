use crate::config::Config;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web::{self, Data},
    App, HttpServer,
};
use serde::{Deserialize, Serialize};
use songbook_core::handler::{attach_song_routes, health};
use songbook_core::metadata::pool::DbPool;
use songbook_core::metadata::services::song::{SongService, SongServiceImpl};
use std::future::Future;
use thiserror::Error;

const CORS_MAX_AGE_SECS: usize = 3600;

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub enum CorsOptions {
    Permissive,
    Custom(Vec<String>, usize),
}

impl CorsOptions {
    pub fn from_origins(origins: &[String]) -> Self {
        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsOptions::Permissive
        } else {
            CorsOptions::Custom(origins.to_vec(), CORS_MAX_AGE_SECS)
        }
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Actix(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct ApiServer {
    config: Config,
    db_pool: DbPool,
}

impl ApiServer {
    pub fn new(config: Config, db_pool: DbPool) -> Self {
        Self { config, db_pool }
    }

    pub fn print_useful_info(&self) {
        println!("\n🎵 Songbook starting up:");
        println!(
            "   🚀 HTTP server ready at: \x1b[36mhttp://{}:{}\x1b[0m",
            self.config.http.host, self.config.http.port
        );
        println!(
            "   💾 Catalog database: \x1b[36m{}\x1b[0m",
            self.config.database.url
        );

        println!("\n⚡Quick Start ⚡");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        println!(
            "\x1b[33mcurl \x1b[36m'http://{}:{}/songs/popular/all?limit=5'\x1b[0m",
            self.config.http.host, self.config.http.port
        );
        println!(
            "\x1b[33mcurl \x1b[36m'http://{}:{}/songs/sort?sortBy=year&sortOrder=desc'\x1b[0m",
            self.config.http.host, self.config.http.port
        );
        println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!();
    }

    /// Binds the listener and returns the running server. The pool is shared
    /// by every worker and released when the server future completes.
    pub fn start(self) -> Result<impl Future<Output = Result<(), ServerError>>, ServerError> {
        let db_pool = self.db_pool.clone();
        let cors_options = CorsOptions::from_origins(&self.config.http.cors_allowed_origins);

        let server = HttpServer::new(move || {
            let cors = Self::get_cors(cors_options.clone());
            Self::create_app_entry(cors, db_pool.clone())
        })
        .bind((self.config.http.host.as_str(), self.config.http.port))?
        .run();

        // Print useful info after the server is bound and ready
        self.print_useful_info();

        Ok(async move {
            server.await?;
            Ok(())
        })
    }

    pub(crate) fn create_app_entry(
        cors: Cors,
        db_pool: DbPool,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Response = ServiceResponse<impl MessageBody>,
            Config = (),
            InitError = (),
            Error = actix_web::Error,
        >,
    > {
        let song_service = Box::new(SongServiceImpl::new(db_pool)) as Box<dyn SongService>;

        App::new()
            .app_data(Data::new(song_service))
            .route("/health", web::get().to(health))
            .service(attach_song_routes(web::scope("/songs")))
            .wrap(Logger::new("%r %s %Dms"))
            .wrap(cors)
    }

    fn get_cors(cors: CorsOptions) -> Cors {
        match cors {
            CorsOptions::Permissive => Cors::permissive(),
            CorsOptions::Custom(origins, max_age) => origins
                .into_iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(&origin))
                .allowed_methods(vec!["GET"])
                .max_age(max_age),
        }
    }
}
