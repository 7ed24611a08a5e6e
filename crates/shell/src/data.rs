//! Reading data matrices for the CLI.

use std::path::Path;

use ndarray::{Array2, Axis};
use ndarray_npy::ReadableElement;

/// A data matrix read from disk, one row per observation.
pub enum ShellData {
    /// Rows of `f32`.
    F32(Vec<Vec<f32>>),
    /// Rows of `f64`.
    F64(Vec<Vec<f64>>),
}

impl ShellData {
    /// Reads a 2-d `.npy` array of `f32` or `f64`.
    ///
    /// # Errors
    ///
    /// * If the path does not have the `npy` extension.
    /// * If the file does not hold a 2-d array of either element type.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        match path.extension().and_then(|s| s.to_str()) {
            Some("npy") => (),
            Some(ext) => return Err(format!("Unknown data format {ext} for path: {}", path.display())),
            None => {
                return Err(format!(
                    "Could not determine data format without extension for path: {}",
                    path.display()
                ))
            }
        }

        read_rows::<f64>(path)
            .map(Self::F64)
            .or_else(|_| read_rows::<f32>(path).map(Self::F32))
            .map_err(|e| format!("Failed to read NPY file at path {}: {e}", path.display()))
    }

    /// The number of rows.
    pub fn cardinality(&self) -> usize {
        match self {
            Self::F32(rows) => rows.len(),
            Self::F64(rows) => rows.len(),
        }
    }
}

/// Reads the rows of a 2-d array with elements of type `T`.
fn read_rows<T: ReadableElement + Copy>(path: &Path) -> Result<Vec<Vec<T>>, String> {
    let arr: Array2<T> = ndarray_npy::read_npy(path).map_err(|e| e.to_string())?;
    Ok(arr.axis_iter(Axis(0)).map(|row| row.to_vec()).collect())
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use tempdir::TempDir;

    use super::ShellData;

    #[test]
    fn reads_npy() -> Result<(), String> {
        let dir = TempDir::new("hclust-shell").map_err(|e| e.to_string())?;

        let path = dir.path().join("f64.npy");
        ndarray_npy::write_npy(&path, &array![[1.0_f64, 2.0], [3.0, 4.0], [5.0, 6.0]]).map_err(|e| e.to_string())?;
        match ShellData::read(&path)? {
            ShellData::F64(rows) => assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]),
            ShellData::F32(_) => return Err("Expected f64 rows.".to_string()),
        }

        let path = dir.path().join("f32.npy");
        ndarray_npy::write_npy(&path, &array![[1.0_f32], [2.0]]).map_err(|e| e.to_string())?;
        let data = ShellData::read(&path)?;
        assert!(matches!(data, ShellData::F32(_)));
        assert_eq!(data.cardinality(), 2);

        assert!(ShellData::read(dir.path().join("data.csv")).is_err());
        assert!(ShellData::read(dir.path().join("data")).is_err());
        Ok(())
    }
}
