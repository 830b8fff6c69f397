// crates/truecity-core/src/source/dir.rs
use super::{parse_entries, LocationSource};
use crate::controller::FetchRequest;
use crate::error::DataLoadError;
use crate::model::{Entry, Level};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Reads location files from a local directory with the same layout a web
/// server would expose.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The sample tree shipped with the crate (`data/sample`).
    pub fn sample() -> Self {
        Self::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("sample"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, file: Level, relative: &str) -> Result<Vec<u8>, DataLoadError> {
        let path = self.root.join(relative);
        let mut reader = open_stream(&path).map_err(|e| DataLoadError::Transport {
            file,
            url: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut body = Vec::new();
        reader
            .read_to_end(&mut body)
            .map_err(|e| DataLoadError::Transport {
                file,
                url: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(body)
    }
}

impl LocationSource for DirSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Entry>, DataLoadError> {
        let file = request.file();
        let relative = request.relative_path();
        let body = self.read(file, &relative)?;
        parse_entries(file, &self.root.join(&relative).display().to_string(), &body)
    }
}

/// Opens `path`, or `path.gz` when only the compressed file exists.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub(crate) fn open_stream(path: &Path) -> std::io::Result<Box<dyn Read>> {
    match File::open(path) {
        Ok(file) => Ok(wrap(path, BufReader::new(file))),
        #[cfg(feature = "compact")]
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let mut gz = path.as_os_str().to_owned();
            gz.push(".gz");
            let gz = PathBuf::from(gz);
            let file = File::open(&gz).map_err(|_| e)?;
            Ok(wrap(&gz, BufReader::new(file)))
        }
        Err(e) => Err(e),
    }
}

fn wrap(path: &Path, reader: BufReader<File>) -> Box<dyn Read> {
    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        return Box::new(flate2::read::GzDecoder::new(reader));
    }
    #[cfg(not(feature = "compact"))]
    let _ = path;
    Box::new(reader)
}
