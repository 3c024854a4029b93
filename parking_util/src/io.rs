use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Pretty-prints any serializable object as JSON.
pub fn to_json<T: Serialize>(obj: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(obj)?)
}

pub fn write_json<T: Serialize>(path: &str, obj: &T) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs_err::create_dir_all(parent)?;
        }
    }
    fs_err::write(path, to_json(obj)?)?;
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let contents = fs_err::read_to_string(path)?;
    let obj: T =
        serde_json::from_str(&contents).with_context(|| format!("Couldn't parse {}", path))?;
    Ok(obj)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_files() {
        let path = std::env::temp_dir()
            .join("parking_util_io_test")
            .join("numbers.json")
            .display()
            .to_string();
        write_json(&path, &vec![1, 2, 3]).unwrap();
        let back: Vec<usize> = read_json(&path).unwrap();
        assert_eq!(back, vec![1, 2, 3]);

        let err = read_json::<Vec<usize>>("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
