use std::io;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use gateway::{Gateway, Pipeline};
use log::{error, info};

use api::ServerConfig;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = ServerConfig::from_env()?;

    let gateway = Gateway::load(config.model_path()).map_err(|e| {
        error!("refusing to serve without a model: {e}");
        io::Error::from(e)
    })?;
    let gateway = web::Data::new(gateway);

    let (host, port) = config.addr();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(gateway.clone())
            .configure(api::configure::<Pipeline>)
    })
    .bind((host, port))?;

    info!("application is running, access it at http://{host}:{port}");
    server.run().await
}
