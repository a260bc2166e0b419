//! Locating and invoking the Microsoft HTML Help compiler.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::error::{Error, Result};

/// Environment variable overriding the `hhc` executable location.
pub const HHC_ENV: &str = "JDCHM_HHC";

/// Find the help compiler: the env override first, then the conventional
/// HTML Help Workshop install path.
pub fn find_compiler() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(HHC_ENV) {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
    }
    if let Ok(programs) = std::env::var("ProgramFiles(x86)") {
        let path = Path::new(&programs)
            .join("HTML Help Workshop")
            .join("hhc.exe");
        if path.is_file() {
            return Some(path);
        }
    }
    None
}

/// Compile `{name}.hhp` in the working directory and return the path of the
/// produced archive.
pub fn compile(work_dir: &Path, name: &str) -> Result<PathBuf> {
    let hhc = find_compiler().ok_or(Error::CompilerNotFound)?;
    info!("compiling {name}.hhp with {}", hhc.display());
    let status = Command::new(&hhc)
        .arg(format!("{name}.hhp"))
        .current_dir(work_dir)
        .status()?;
    // hhc exits non-zero even on success; trust the output file instead.
    let chm = work_dir.join(format!("{name}.chm"));
    if chm.is_file() {
        Ok(chm)
    } else {
        Err(Error::Compiler(format!(
            "no {name}.chm produced (compiler exit: {status})"
        )))
    }
}
