//! In-crate stub transport and call recording for adapter tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{RpcError, RpcResult};
use crate::raw::{RawSessionArguments, RawSessionStats, RawTorrent, TorrentOptions};
use crate::transport::RpcTransport;

/// One transport invocation observed by the stub.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RecordedCall {
    Start(Vec<i64>),
    Stop(Vec<i64>),
    Add(String),
    AddFile { path: PathBuf, payload: Vec<u8> },
    Remove { ids: Vec<i64>, delete_local_data: bool },
    Set { ids: Vec<i64>, options: TorrentOptions },
    Get { fields: Vec<String>, ids: Option<Vec<i64>> },
    SessionArguments,
    SessionStats,
    FreeSpace(String),
}

/// Recording transport stub with canned responses and failure injection.
#[derive(Default)]
pub(crate) struct StubTransport {
    pub(crate) torrents: Vec<RawTorrent>,
    pub(crate) session: RawSessionArguments,
    pub(crate) stats: RawSessionStats,
    /// Free-space answer in bits; `None` makes the lookup fail.
    pub(crate) free_space_bits: Option<u64>,
    /// Method name whose calls should fail.
    pub(crate) fail: Option<&'static str>,
    pub(crate) calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().expect("call log poisoned").push(call);
    }

    fn ensure(&self, method: &'static str) -> RpcResult<()> {
        if self.fail == Some(method) {
            return Err(RpcError::Daemon {
                method,
                result: "stub failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RpcTransport for StubTransport {
    async fn torrent_start(&self, ids: &[i64]) -> RpcResult<()> {
        self.ensure("torrent-start")?;
        self.record(RecordedCall::Start(ids.to_vec()));
        Ok(())
    }

    async fn torrent_stop(&self, ids: &[i64]) -> RpcResult<()> {
        self.ensure("torrent-stop")?;
        self.record(RecordedCall::Stop(ids.to_vec()));
        Ok(())
    }

    async fn torrent_add(&self, locator: &str) -> RpcResult<()> {
        self.ensure("torrent-add")?;
        self.record(RecordedCall::Add(locator.to_string()));
        Ok(())
    }

    async fn torrent_add_file(&self, path: &Path) -> RpcResult<()> {
        let payload = std::fs::read(path).map_err(|source| RpcError::Io {
            operation: "read_metainfo",
            path: path.to_path_buf(),
            source,
        })?;
        self.record(RecordedCall::AddFile {
            path: path.to_path_buf(),
            payload,
        });
        self.ensure("torrent-add-file")
    }

    async fn torrent_remove(&self, ids: &[i64], delete_local_data: bool) -> RpcResult<()> {
        self.ensure("torrent-remove")?;
        self.record(RecordedCall::Remove {
            ids: ids.to_vec(),
            delete_local_data,
        });
        Ok(())
    }

    async fn torrent_set(&self, ids: &[i64], options: TorrentOptions) -> RpcResult<()> {
        self.ensure("torrent-set")?;
        self.record(RecordedCall::Set {
            ids: ids.to_vec(),
            options,
        });
        Ok(())
    }

    async fn torrent_get(
        &self,
        fields: &[&str],
        ids: Option<&[i64]>,
    ) -> RpcResult<Vec<RawTorrent>> {
        self.ensure("torrent-get")?;
        self.record(RecordedCall::Get {
            fields: fields.iter().map(ToString::to_string).collect(),
            ids: ids.map(<[i64]>::to_vec),
        });
        Ok(ids.map_or_else(
            || self.torrents.clone(),
            |wanted| {
                self.torrents
                    .iter()
                    .filter(|torrent| torrent.id.is_some_and(|id| wanted.contains(&id)))
                    .cloned()
                    .collect()
            },
        ))
    }

    async fn session_arguments(&self, _fields: &[&str]) -> RpcResult<RawSessionArguments> {
        self.ensure("session-get")?;
        self.record(RecordedCall::SessionArguments);
        Ok(self.session.clone())
    }

    async fn session_stats(&self) -> RpcResult<RawSessionStats> {
        self.ensure("session-stats")?;
        self.record(RecordedCall::SessionStats);
        Ok(self.stats.clone())
    }

    async fn free_space(&self, path: &str) -> RpcResult<u64> {
        self.record(RecordedCall::FreeSpace(path.to_string()));
        self.free_space_bits.ok_or(RpcError::Daemon {
            method: "free-space",
            result: "stub failure".to_string(),
        })
    }
}
