//! Remote endpoint abstraction and the FTP implementation
//!
//! The sync logic talks to a `Remote` trait so tests run against an
//! in-memory fake; production uses suppaftp's blocking client (the
//! upload is strictly sequential, so async buys nothing here).

use crate::error::{SyncError, SyncResult};
use std::io::Read;
use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpStream, Status};

/// A remote file tree that can be written to
pub trait Remote {
    /// Create a directory; implementations treat "already exists" as success
    fn mkdir(&mut self, path: &str) -> SyncResult<()>;

    /// Upload a file's contents to the given remote path
    fn upload(&mut self, path: &str, data: &mut dyn Read) -> SyncResult<()>;

    /// List entry names directly under a remote directory
    fn list(&mut self, path: &str) -> SyncResult<Vec<String>>;

    /// Delete a remote file
    fn remove_file(&mut self, path: &str) -> SyncResult<()>;

    /// Delete a remote directory
    fn remove_dir(&mut self, path: &str) -> SyncResult<()>;
}

/// FTP-backed remote
pub struct FtpRemote {
    stream: FtpStream,
}

impl FtpRemote {
    /// Connect and log in to an FTP server, switching to binary mode
    pub fn connect(host: &str, port: u16, user: &str, password: &str) -> SyncResult<Self> {
        let mut stream = FtpStream::connect(format!("{}:{}", host, port))
            .map_err(|e| SyncError::Connect(e.to_string()))?;

        stream
            .login(user, password)
            .map_err(|e| SyncError::Login(e.to_string()))?;

        stream
            .transfer_type(FileType::Binary)
            .map_err(|e| SyncError::Remote(e.to_string()))?;

        log::debug!("Connected to ftp://{}:{}", host, port);
        Ok(Self { stream })
    }

    /// Close the session politely; errors on quit are not worth surfacing
    pub fn quit(mut self) {
        let _ = self.stream.quit();
    }
}

/// FTP reports an existing directory as a 550 on MKD
fn is_already_exists(err: &FtpError) -> bool {
    matches!(err, FtpError::UnexpectedResponse(resp) if resp.status == Status::FileUnavailable)
}

impl Remote for FtpRemote {
    fn mkdir(&mut self, path: &str) -> SyncResult<()> {
        // mkdir is idempotent, so an existing directory is not an
        // error; anything else (auth, connection loss) propagates.
        match self.stream.mkdir(path) {
            Ok(()) => Ok(()),
            Err(e) if is_already_exists(&e) => {
                log::debug!("mkdir {} skipped, already exists", path);
                Ok(())
            }
            Err(e) => Err(SyncError::Remote(e.to_string())),
        }
    }

    fn upload(&mut self, path: &str, data: &mut dyn Read) -> SyncResult<()> {
        let mut reader = data;
        self.stream
            .put_file(path, &mut reader)
            .map(|_| ())
            .map_err(|e| SyncError::Upload {
                path: path.to_string(),
                message: e.to_string(),
            })
    }

    fn list(&mut self, path: &str) -> SyncResult<Vec<String>> {
        self.stream
            .nlst(Some(path))
            .map_err(|e| SyncError::Remote(e.to_string()))
    }

    fn remove_file(&mut self, path: &str) -> SyncResult<()> {
        self.stream
            .rm(path)
            .map_err(|e| SyncError::Remote(e.to_string()))
    }

    fn remove_dir(&mut self, path: &str) -> SyncResult<()> {
        self.stream
            .rmdir(path)
            .map_err(|e| SyncError::Remote(e.to_string()))
    }
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
