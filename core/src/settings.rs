use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use anyhow::Context as _;
use rust_embed::RustEmbed;
use serde::Deserialize;

use crate::day::DayResolver;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(skip)]
    pub source_config_file: Option<PathBuf>,
    /// Directory relative paths are resolved from.
    #[serde(skip)]
    pub root_dir: PathBuf,

    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default = "Settings::default_status_file")]
    pub status_file: PathBuf,
    #[serde(default)]
    pub layout: DayResolver,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    #[serde(default = "RunConfig::default_shell")]
    pub shell: PathBuf,
    pub command: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            shell: Self::default_shell(),
            command: "cargo run --release --quiet --bin day#{day2}".to_owned(),
        }
    }
}

impl RunConfig {
    fn default_shell() -> PathBuf {
        PathBuf::from("/bin/sh")
    }
}

/// `AOCR_*` environment variables that take precedence over `aocr.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvOverrides {
    /// AOCR_CONFIG
    pub config: Option<PathBuf>,
    /// AOCR_STATUS_FILE
    pub status_file: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        envy::prefixed("AOCR_").from_env().unwrap_or_else(|e| {
            log::warn!("Ignoring malformed AOCR_* environment: {}", e);
            Self::default()
        })
    }
}

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

impl Settings {
    pub const FILENAME: &str = "aocr.toml";

    fn default_status_file() -> PathBuf {
        PathBuf::from(".aocr.json")
    }

    pub fn example_toml() -> String {
        let file = Asset::get(Self::FILENAME).expect("embedded example aocr.toml");
        String::from_utf8_lossy(file.data.as_ref()).into_owned()
    }

    /// Built-in settings rooted at `root_dir`, used when no `aocr.toml` exists.
    pub fn defaults_at(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_config_file: None,
            root_dir: root_dir.into(),
            year: None,
            status_file: Self::default_status_file(),
            layout: DayResolver::default(),
            run: RunConfig::default(),
        }
    }

    pub fn from_toml(s: &str) -> StdResult<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_toml_file(filepath: PathBuf) -> anyhow::Result<Self> {
        let toml = fsutil::read_to_string(&filepath).context("Cannot read a file")?;
        let mut cfg = Self::from_toml(&toml)
            .with_context(|| format!("Invalid config TOML: {:?}", filepath))?;
        cfg.root_dir = filepath
            .parent()
            .map(Path::to_owned)
            .unwrap_or_else(|| PathBuf::from("."));
        cfg.source_config_file = Some(filepath);
        Ok(cfg)
    }

    /// Find config file ancestor dirs, including current dir.
    pub fn find_file_in_ancestors(cur_dir: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        let cur_dir = cur_dir.as_ref();
        cur_dir
            .ancestors()
            .map(|dir| dir.join(Self::FILENAME))
            .find(|path| path.is_file())
            .with_context(|| {
                format!(
                    "Not in an aocr repository: Cannot find '{}'",
                    Self::FILENAME
                )
            })
    }

    /// Loads `aocr.toml` (or `$AOCR_CONFIG`) and applies environment overrides.
    pub fn load(cur_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let env = EnvOverrides::from_env();
        let filepath = match &env.config {
            Some(path) => path.to_owned(),
            None => Self::find_file_in_ancestors(cur_dir)?,
        };
        Ok(Self::from_toml_file(filepath)?.with_env(env))
    }

    /// Like [`Settings::load`], but uses defaults rooted at the working directory when no file
    /// exists.
    pub fn load_or_default(cur_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let cur_dir = cur_dir.as_ref();
        let env = EnvOverrides::from_env();
        let filepath = match &env.config {
            Some(path) => Some(path.to_owned()),
            None => Self::find_file_in_ancestors(cur_dir).ok(),
        };
        let cfg = match filepath {
            Some(path) => Self::from_toml_file(path)?,
            None => {
                let root = std::env::current_dir().unwrap_or_else(|_| cur_dir.to_owned());
                log::debug!(
                    "No {} found from {:?}; using defaults at {:?}",
                    Self::FILENAME,
                    cur_dir,
                    root
                );
                Self::defaults_at(root)
            }
        };
        Ok(cfg.with_env(env))
    }

    pub fn with_env(mut self, env: EnvOverrides) -> Self {
        if let Some(path) = env.status_file {
            self.status_file = path;
        }
        self
    }

    pub fn status_file_path(&self) -> PathBuf {
        self.resolve(&self.status_file)
    }

    pub fn source_dir_path(&self) -> PathBuf {
        self.resolve(Path::new(&self.layout.source_dir))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_owned()
        } else {
            self.root_dir.join(path.strip_prefix(".").unwrap_or(path))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn example_toml_should_be_parsable() {
        let toml = Settings::example_toml();
        let cfg = dbg!(Settings::from_toml(&toml)).unwrap();

        assert_eq!(cfg.source_config_file, None);
        assert_eq!(cfg.year, None);
        assert_eq!(cfg.status_file, Path::new(".aocr.json"));
        assert_eq!(cfg.layout, DayResolver::default());
        assert_eq!(cfg.run, RunConfig::default());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = Settings::from_toml("year = 2020").unwrap();
        assert_eq!(cfg.year, Some(2020));
        assert_eq!(cfg.layout.input_file, "input.txt");
        assert_eq!(cfg.run.shell, Path::new("/bin/sh"));
    }

    #[test]
    fn relative_paths_are_resolved_from_the_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src/day01");
        fsutil::mkdir_all(&nested).unwrap();
        fsutil::write(
            dir.path().join(Settings::FILENAME),
            "status_file = \"./out/status.json\"\n[layout]\nsource_dir = \"solutions\"\n",
        )
        .unwrap();

        let path = Settings::find_file_in_ancestors(&nested).unwrap();
        let cfg = Settings::from_toml_file(path).unwrap();

        assert_eq!(cfg.status_file_path(), dir.path().join("out/status.json"));
        assert_eq!(cfg.source_dir_path(), dir.path().join("solutions"));
    }

    #[test]
    fn env_status_file_wins() {
        let cfg = Settings::defaults_at("/repo").with_env(EnvOverrides {
            config: None,
            status_file: Some("/elsewhere/s.json".into()),
        });
        assert_eq!(cfg.status_file_path(), Path::new("/elsewhere/s.json"));
    }
}
