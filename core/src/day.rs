use std::path::{Component, Path, PathBuf};

use lazy_regex::regex_captures;
use serde::Deserialize;

use crate::error::HarnessError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLocation {
    pub day: u8,
    pub input_path: PathBuf,
}

/// Directory naming used to find a day's input next to its solution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DayResolver {
    /// Build-output directory name that is swapped for `source_dir`.
    pub build_dir: String,
    pub source_dir: String,
    pub input_file: String,
}

impl Default for DayResolver {
    fn default() -> Self {
        Self {
            build_dir: "dist".to_owned(),
            source_dir: "src".to_owned(),
            input_file: "input.txt".to_owned(),
        }
    }
}

/// Parses `dayNN` (exactly two digits) into `NN`.
pub fn parse_day_dirname(name: &str) -> Option<u8> {
    let (_, digits) = regex_captures!(r"^day(\d{2})$", name)?;
    digits.parse().ok()
}

impl DayResolver {
    /// Finds the nearest `dayNN` directory enclosing `solution_file`.
    pub fn day_of(&self, solution_file: &Path) -> Result<u8, HarnessError> {
        solution_file
            .parent()
            .into_iter()
            .flat_map(Path::ancestors)
            .filter_map(|dir| dir.file_name())
            .find_map(|name| parse_day_dirname(&name.to_string_lossy()))
            .ok_or_else(|| HarnessError::DayNotResolved(solution_file.to_owned()))
    }

    /// `<solution dir>/<input_file>`, with the last `build_dir` segment replaced by `source_dir`.
    pub fn default_input_path(&self, solution_file: &Path) -> PathBuf {
        let dir = solution_file.parent().unwrap_or(Path::new(""));
        let mut segments: Vec<Component> = dir.components().collect();

        let build_dir = Path::new(&self.build_dir);
        let last_build = segments
            .iter()
            .rposition(|c| c.as_os_str() == build_dir.as_os_str());
        if let Some(i) = last_build {
            segments[i] = Component::Normal(self.source_dir.as_ref());
        }

        segments
            .iter()
            .collect::<PathBuf>()
            .join(&self.input_file)
    }

    pub fn resolve(
        &self,
        solution_file: &Path,
        input_override: Option<&Path>,
    ) -> Result<DayLocation, HarnessError> {
        let day = self.day_of(solution_file)?;
        let input_path = match input_override {
            Some(path) => path.to_owned(),
            None => self.default_input_path(solution_file),
        };
        log::debug!("Resolved day {} (input: {:?})", day, input_path);
        Ok(DayLocation { day, input_path })
    }
}

/// Best-effort absolute path of a source file named by `file!()`.
///
/// `file!()` is relative to the directory cargo was invoked from (usually the workspace root),
/// so `manifest_dir` and each of its ancestors are tried as the base.
pub fn locate_source_file(manifest_dir: impl AsRef<Path>, file: impl AsRef<Path>) -> PathBuf {
    let (manifest_dir, file) = (manifest_dir.as_ref(), file.as_ref());
    if file.is_absolute() {
        return file.to_owned();
    }
    manifest_dir
        .ancestors()
        .map(|base| base.join(file))
        .find(|path| path.is_file())
        .unwrap_or_else(|| manifest_dir.join(file))
}
