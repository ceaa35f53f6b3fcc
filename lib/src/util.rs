use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ErrorKind, Result};

pub fn load_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let buf = read_to_string(path)?;
    let out: T = toml::from_str(&buf)?;
    Ok(out)
}

pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let buf = read_to_string(path)?;
    let out: T = serde_json::from_str(&buf)?;
    Ok(out)
}

/// Loads a record file, picking the format based on file extension.
/// Files without a `.json` extension are read as toml.
pub fn load_record<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("toml") | None => load_toml(path),
        Some(ext) => Err(ErrorKind::BadInput(format!(
            "unsupported record format: {} ({})",
            ext,
            path.display()
        ))
        .into()),
    }
}

fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let mut file = File::open(path)?;
    let mut buf = String::new();
    let _ = file.read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Day, WeeklySchedule};

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("whosenxt-util-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_schedule_from_json_and_toml() {
        let json = temp_file("store.json", r#"{"wednesday_open": "07:00", "wednesday_close": "15:00"}"#);
        let toml = temp_file("store.toml", "wednesday_open = \"07:00\"\nwednesday_close = \"15:00\"\n");

        let a: WeeklySchedule = load_record(&json).unwrap();
        let b: WeeklySchedule = load_record(&toml).unwrap();
        assert_eq!(a, b);
        assert!(a.day(Day::Wednesday).window().is_some());
    }

    #[test]
    fn rejects_unknown_extension() {
        let path = temp_file("store.yaml", "wednesday_open: 07:00");
        let err = load_record::<WeeklySchedule>(&path).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::BadInput(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_toml::<WeeklySchedule>("/nonexistent/store.toml").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::StdIoError(_)));
    }
}
