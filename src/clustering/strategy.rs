use crate::config::ClusteringConfig;
use crate::{HarvestError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// A way of turning a FASTA file into a non-redundant FASTA file
pub trait ClusteringStrategy {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Writes the clustered sequences of `input` to `output`
    fn cluster(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Runs the CD-HIT executable
#[derive(Debug, Clone)]
pub struct CdHit {
    pub binary: PathBuf,
    pub threshold: f64,
    pub word_size: u32,
    pub memory_mb: u32,
}

impl CdHit {
    pub fn from_config(binary: PathBuf, config: &ClusteringConfig) -> Self {
        Self {
            binary,
            threshold: config.threshold,
            word_size: config.word_size,
            memory_mb: config.memory_mb,
        }
    }

    /// Command line arguments for one run
    pub fn args(&self, input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-i".to_string(),
            input.display().to_string(),
            "-o".to_string(),
            output.display().to_string(),
            "-c".to_string(),
            self.threshold.to_string(),
            "-n".to_string(),
            self.word_size.to_string(),
            "-M".to_string(),
            self.memory_mb.to_string(),
        ]
    }
}

impl ClusteringStrategy for CdHit {
    fn name(&self) -> &'static str {
        "cd-hit"
    }

    fn cluster(&self, input: &Path, output: &Path) -> Result<()> {
        let result = Command::new(&self.binary)
            .args(self.args(input, output))
            .output()?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(HarvestError::Clustering(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                result.status,
                stderr.trim()
            )));
        }

        tracing::info!("CD-HIT run finished!");
        Ok(())
    }
}

/// Copies precomputed clusters in place of a real run
#[derive(Debug, Clone)]
pub struct ReferenceCopy {
    pub reference: PathBuf,
}

impl ClusteringStrategy for ReferenceCopy {
    fn name(&self) -> &'static str {
        "reference copy"
    }

    fn cluster(&self, _input: &Path, output: &Path) -> Result<()> {
        tracing::info!("   -> Using the fallback data: {}", self.reference.display());
        std::fs::copy(&self.reference, output)?;
        tracing::info!("   -> Result saved to: {}", output.display());
        Ok(())
    }
}

/// Leaves the sequences unclustered
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl ClusteringStrategy for Passthrough {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn cluster(&self, input: &Path, output: &Path) -> Result<()> {
        tracing::warn!("   -> Fallback data could not be found, dummy run initialized");
        std::fs::copy(input, output)?;
        Ok(())
    }
}

/// Locates an executable by name on `PATH`
///
/// A name containing a path separator is checked as given.
pub fn find_executable(binary: &str) -> Option<PathBuf> {
    let candidate = Path::new(binary);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .flat_map(|dir| {
            [
                dir.join(binary),
                dir.join(format!("{}{}", binary, std::env::consts::EXE_SUFFIX)),
            ]
        })
        .find(|path| path.is_file())
}

/// Picks the best available strategy
///
/// 1. the clustering executable, when found on `PATH`
/// 2. a copy of the reference clusters, when that file exists
/// 3. a plain copy of the input
pub fn select_strategy(config: &ClusteringConfig) -> Box<dyn ClusteringStrategy> {
    if let Some(binary) = find_executable(&config.binary) {
        return Box::new(CdHit::from_config(binary, config));
    }

    tracing::warn!("Warning: {} was not found.", config.binary);

    if config.fallback_path.is_file() {
        Box::new(ReferenceCopy {
            reference: config.fallback_path.clone(),
        })
    } else {
        Box::new(Passthrough)
    }
}
