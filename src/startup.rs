use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{guard, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::config::Settings;
use crate::domain::GreetingStore;
use crate::greet_service::GreetingService;
use crate::health::GreetingHealthCheck;
use crate::routes::{get_default, get_named, health_check, metrics, update_greeting};

pub struct Application {
    port: u16,
    admin_port: u16,
    server: Server,
    admin_server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, std::io::Error> {
        let store = GreetingStore::initialize(config.app.greeting);
        //one service and one health check for both servers, shared by every worker
        let service = web::Data::new(GreetingService::new(store.clone()));
        let health = web::Data::new(GreetingHealthCheck::new(store));

        let listener = TcpListener::bind(format!("{}:{}", config.app.host, config.app.port))?;
        let port = listener.local_addr()?.port();
        //monitors talk to their own port, so /{name} keeps every subject name
        let admin_listener =
            TcpListener::bind(format!("{}:{}", config.app.host, config.app.admin_port))?;
        let admin_port = admin_listener.local_addr()?.port();
        tracing::info!(
            "listening on {}:{}, health and metrics on port {}",
            config.app.host,
            port,
            admin_port
        );

        let server = run(listener, service.clone())?;
        let admin_server = run_admin(admin_listener, service, health)?;

        Ok(Self {
            port,
            admin_port,
            server,
            admin_server,
        })
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    pub fn admin_port(&self) -> u16 {
        self.admin_port
    }
    //an expressively named fn to let other parts of the code know this fn only returns when app is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tokio::try_join!(self.server, self.admin_server)?;
        Ok(())
    }
}

pub fn run(
    listener: TcpListener,
    service: web::Data<GreetingService>,
) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            //ROUTES
            .route("/", web::get().to(get_default))
            //guarded at resource level so GET /greeting falls through to /{name}
            .service(
                web::resource("/greeting")
                    .guard(guard::Put())
                    .route(web::put().to(update_greeting)),
            )
            .route("/{name}", web::get().to(get_named))
            //APP STATE
            .app_data(service.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub fn run_admin(
    listener: TcpListener,
    service: web::Data<GreetingService>,
    health: web::Data<GreetingHealthCheck>,
) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .route("/metrics", web::get().to(metrics))
            .app_data(service.clone())
            .app_data(health.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
