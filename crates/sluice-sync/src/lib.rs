//! sluice-sync - FTP directory sync for Sluice
//!
//! Uploads a local build-output tree to a remote directory over FTP:
//! best-effort cleanup, mkdir-before-upload ordering, and a rewrite-rules
//! file written at the destination root. The `Remote` trait keeps the
//! sync logic testable without a server.

pub mod error;
pub mod remote;
pub mod sync;

pub use error::{SyncError, SyncResult};
pub use remote::{FtpRemote, Remote};
pub use sync::{sync_tree, FailedUpload, SyncReport, REWRITE_RULES, REWRITE_RULES_FILE};
