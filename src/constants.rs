//! Global constants used throughout the sandboxes codebase.
//!
//! Host names, the default API base, and identification strings are defined
//! centrally so the URL deriver, the API client, and the tests agree on them.

/// Default base URL for the listing API. Overridable via the global config
/// (`api_base`), which tests point at a local fixture server.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Canonical source-hosting host. Flat-mode source links start with this.
pub const SOURCE_HOST: &str = "github.com";

/// First sandboxing service: CodeSandbox's GitHub import endpoint.
/// Derived URLs look like `https://codesandbox.io/s/github/<owner>/<repo>/...`.
pub const SANDBOX_HOST: &str = "codesandbox.io/s/github";

/// Alternate sandboxing service: StackBlitz's GitHub import endpoint.
/// Derived URLs look like `https://stackblitz.com/github/<owner>/<repo>/...`.
pub const ALT_SANDBOX_HOST: &str = "stackblitz.com/github";

/// User-Agent sent on every API request. GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("sandboxes-cli/", env!("CARGO_PKG_VERSION"));

/// Environment variable that overrides the global config file location.
pub const CONFIG_PATH_ENV: &str = "SANDBOXES_CONFIG_PATH";

/// Directory under the user's home that holds the global config file.
pub const CONFIG_DIR_NAME: &str = ".sandboxes";
