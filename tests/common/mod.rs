#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

pub const META_JSON: &str = concat!(
    r#"{"ID":"20140909-115934.asdf-zxcv-qwe","#,
    r#""Checksum":"123af2cef","#,
    r#""ChecksumFormat":"SHA-1, base64 encoded","#,
    r#""Size":10,"#,
    r#""Stored":"0001-01-01T00:00:00Z","#,
    r#""Started":"2014-09-09T11:59:34Z","#,
    r#""Finished":"2014-09-09T12:00:34Z","#,
    r#""Notes":"","#,
    r#""Environment":"asdf-zxcv-qwe","#,
    r#""Machine":"0","#,
    r#""Hostname":"myhost","#,
    r#""Version":"1.21-alpha3""#,
    "}\n"
);

pub struct Entry<'a> {
    pub name: &'a str,
    pub content: &'a [u8],
    pub is_dir: bool,
}

pub fn file<'a>(name: &'a str, content: &'a [u8]) -> Entry<'a> {
    Entry {
        name,
        content,
        is_dir: false,
    }
}

pub fn dir(name: &str) -> Entry<'_> {
    Entry {
        name,
        content: b"",
        is_dir: true,
    }
}

/// Build an uncompressed tar stream from `entries`, in order.
pub fn tarball(entries: &[Entry<'_>]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for entry in entries {
        let mut header = tar::Header::new_gnu();
        if entry.is_dir {
            header.set_entry_type(tar::EntryType::Directory);
            header.set_mode(0o755);
        } else {
            header.set_mode(0o644);
        }
        header.set_size(entry.content.len() as u64);
        builder
            .append_data(&mut header, entry.name, entry.content)
            .unwrap();
    }
    builder.into_inner().unwrap()
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// A backup-shaped archive with payload, a dump tree and metadata last.
pub fn sample_tar() -> Vec<u8> {
    tarball(&[
        file(
            "var/lib/juju/tools/1.21-alpha2.1-trusty-amd64/jujud",
            b"<some binary data goes here>",
        ),
        file("var/lib/juju/system-identity", b"<an ssh key goes here>"),
        dir("dump/juju"),
        file("dump/juju/machines.bson", b"<BSON data goes here>"),
        file("dump/oplog.bson", b"<BSON data goes here>"),
        file("metadata.json", META_JSON.as_bytes()),
    ])
}

/// Write `compressed` to `juju-backup.tgz` inside a fresh temporary directory.
pub fn dump(compressed: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("juju-backup.tgz");
    std::fs::write(&path, compressed).unwrap();
    (dir, path)
}
