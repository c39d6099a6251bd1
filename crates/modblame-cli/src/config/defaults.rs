use std::path::PathBuf;

pub fn default_go() -> PathBuf {
    PathBuf::from("go")
}
