//! Testboard E2E Test Framework
//!
//! Starts the example application and checks that a browser session would
//! see the expected greeting.
//!
//! ```text
//!   ServerHandle::spawn ──▶ testboard-example-app (child process)
//!          │                        ▲
//!          └── wait_for_healthy ────┤ GET /
//!   smoke::check_greeting ──────────┘ expects <p>Hello, Zalenium!</p>
//! ```

pub mod error;
pub mod server;
pub mod smoke;

pub use error::{E2eError, E2eResult};
pub use server::{ServerConfig, ServerHandle};
pub use smoke::{check_greeting, EXPECTED_GREETING};
