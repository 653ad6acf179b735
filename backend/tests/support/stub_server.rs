//! In-process HTTP stubs standing in for the face-analysis service and the
//! asset store.

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use reqwest::Url;

/// A running stub bound to an ephemeral loopback port.
pub(crate) struct StubServer {
    base_url: Url,
    handle: ServerHandle,
}

impl StubServer {
    /// Serve the routes registered by `configure` on `127.0.0.1:0`.
    ///
    /// Must be called from within an Actix system.
    pub(crate) fn start<F>(configure: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        let server = HttpServer::new(move || App::new().configure(configure.clone()))
            .workers(1)
            .disable_signals()
            .listen(listener)
            .expect("listen on stub socket")
            .run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self {
            base_url: Url::parse(&format!("http://{addr}")).expect("stub url"),
            handle,
        }
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// A loopback URL nothing is listening on.
pub(crate) fn refused_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    Url::parse(&format!("http://{addr}")).expect("refused url")
}

/// Request bodies captured by a stub handler.
pub(crate) type Captured<T> = Arc<Mutex<Vec<T>>>;

pub(crate) fn captured<T>() -> Captured<T> {
    Arc::new(Mutex::new(Vec::new()))
}
