//! Runs the example app binary for smoke tests

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::error::{E2eError, E2eResult};

/// A running example app. Dropping the handle stops the process.
pub struct ServerHandle {
    child: Child,
    pub base_url: String,
    pub port: u16,
}

impl ServerHandle {
    /// Start the binary on a free port and wait until `/` answers
    pub async fn spawn(config: ServerConfig) -> E2eResult<Self> {
        let port = match config.port {
            Some(port) => port,
            None => find_free_port()?,
        };
        let base_url = format!("http://127.0.0.1:{}", port);

        info!("Spawning example app on port {}", port);

        let mut cmd = Command::new(&config.binary_path);
        cmd.env("TESTBOARD_APP_ADDR", format!("127.0.0.1:{}", port))
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = cmd.spawn().map_err(|e| {
            E2eError::ServerStartup(format!(
                "Failed to spawn {}: {}",
                config.binary_path.display(),
                e
            ))
        })?;

        let handle = ServerHandle {
            child,
            base_url: base_url.clone(),
            port,
        };

        handle.wait_for_healthy(config.startup_timeout).await?;

        info!("Server is healthy at {}", base_url);
        Ok(handle)
    }

    async fn wait_for_healthy(&self, timeout_duration: Duration) -> E2eResult<()> {
        let health_url = format!("{}/", self.base_url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;

        let start = std::time::Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout_duration {
            attempts += 1;

            match client.get(&health_url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    return Ok(());
                }
                Ok(resp) => {
                    warn!("Health check returned {}", resp.status());
                }
                Err(e) => {
                    if attempts == 1 {
                        info!("Waiting for example app on port {}", self.port);
                    }
                    if !e.is_connect() {
                        warn!("Health check error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(100)).await;
        }

        Err(E2eError::ServerHealthCheck(attempts))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// SIGTERM, then SIGKILL if the app has not exited within the grace period
    pub fn stop(&mut self) -> E2eResult<()> {
        if self.child.try_wait()?.is_some() {
            return Ok(());
        }
        info!("Stopping example app (pid: {})", self.child.id());

        #[cfg(unix)]
        {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            let pid = Pid::from_raw(self.child.id() as i32);
            if kill(pid, Signal::SIGTERM).is_ok() {
                for _ in 0..STOP_POLLS {
                    if let Some(status) = self.child.try_wait()? {
                        debug!("Example app exited with {}", status);
                        return Ok(());
                    }
                    std::thread::sleep(STOP_POLL_INTERVAL);
                }
            }
        }

        if let Err(e) = self.child.kill() {
            warn!("Failed to kill example app: {}", e);
        }
        self.child.wait()?;
        Ok(())
    }
}

const STOP_POLLS: usize = 20;
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(10);

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            warn!("Example app did not stop cleanly: {}", e);
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub binary_path: PathBuf,
    /// Free port when `None`
    pub port: Option<u16>,
    pub startup_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            binary_path: PathBuf::from("target/debug/testboard-example-app"),
            port: None,
            startup_timeout: Duration::from_secs(30),
        }
    }
}

/// Ask the OS for an unused local port
pub fn find_free_port() -> E2eResult<u16> {
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}
