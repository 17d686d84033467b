#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod extract;
pub mod init;
pub mod release;
pub mod scaffold;
pub mod serve;

pub use extract::{
    extract_archive, extract_from_reader, is_allowed, relative_entry_path, ExtractionError,
    ExtractionSummary, ALLOWED_PREFIXES,
};
pub use init::{InitConfig, InitError, InitSummary, Initializer};
pub use release::{
    build_github_client, build_http_client, download_archive, fetch_latest_archive,
    resolve_latest_release, FetchError, ReleaseAsset, UpstreamRepository,
};
pub use scaffold::{scaffold, ScaffoldOutput, ScaffoldParams, WriteError};
pub use serve::{
    ListenAddress, LiveReloadMessage, ReloadEvent, ReloadHub, ServeConfig, Server,
    ServerStartError, ServerState,
};
