use env_logger::{Builder, Env};
use std::path::PathBuf;

/// Where logs go when no `--log-file` is given. The TUI owns the terminal,
/// so the default is a file.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("messenger").join("messenger.log")
}

/// Builder reading its filter from `filter_var`, Info when unset.
fn builder_from(filter_var: &'static str) -> Builder {
    Builder::from_env(Env::default().filter_or(filter_var, "info"))
}

pub fn init_with(log_file: Option<PathBuf>) {
    use env_logger::Target;
    use std::fs;
    use std::io;

    let path = log_file.unwrap_or_else(default_log_path);

    // Fall back to stderr if the file cannot be created.
    let target = (|| -> io::Result<Target> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        Ok(Target::Pipe(Box::new(file)))
    })()
    .unwrap_or(Target::Stderr);

    let initialised = builder_from(env_logger::DEFAULT_FILTER_ENV)
        .target(target)
        .try_init();
    if initialised.is_err() {
        log::debug!("logger already initialised");
    }
}
