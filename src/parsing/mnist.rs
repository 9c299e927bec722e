use super::{DataSplit, Dataset};
use crate::error::{Error, Result};
use crate::model::architecture::{INPUT_DIM, NUM_CLASSES};
use csv::StringRecord;
use ndarray::Array2;
use std::path::Path;

const RECORD_SIZE: usize = INPUT_DIM + 1;
const GREYSCALE_SIZE: f32 = 255f32;

/// Parse a record of the form <label>,<pixel0x0>,<pixel0x1>,...
/// Returns the normalized pixels and the label
fn parse_record(record: &StringRecord, index: usize) -> Result<(Vec<f32>, usize)> {
    if record.len() != RECORD_SIZE {
        return Err(Error::Record {
            record: index,
            reason: format!("expected {} fields, got {}", RECORD_SIZE, record.len()),
        });
    }

    let label: usize = record[0].trim().parse().map_err(|_| Error::Record {
        record: index,
        reason: format!("invalid label {:?}", &record[0]),
    })?;

    if label >= NUM_CLASSES {
        return Err(Error::Label {
            label,
            num_classes: NUM_CLASSES,
        });
    }

    let mut pixels = Vec::with_capacity(INPUT_DIM);

    for field in record.iter().skip(1) {
        let value: f32 = field.trim().parse().map_err(|_| Error::Record {
            record: index,
            reason: format!("invalid pixel {:?}", field),
        })?;
        // we divide by 255 to normalize
        pixels.push(value / GREYSCALE_SIZE);
    }

    Ok((pixels, label))
}

/// Read an MNIST CSV file (header row, then `label,pixel0,...,pixel783`).
/// The layout is the one from https://www.kaggle.com/datasets/oddrationale/mnist-in-csv
pub fn parse_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let mut pixels = Vec::new();
    let mut target = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let (row, label) = parse_record(&record?, index)?;

        pixels.extend(row);
        target.push(label);
    }

    let data = Array2::from_shape_vec((target.len(), INPUT_DIM), pixels)
        .map_err(|err| Error::Record {
            record: target.len(),
            reason: err.to_string(),
        })?;

    Ok(Dataset { data, target })
}

/// Load the train and test files into a single split
pub fn load_split<P: AsRef<Path>, Q: AsRef<Path>>(train_path: P, test_path: Q) -> Result<DataSplit> {
    Ok(DataSplit {
        train: parse_dataset(train_path)?,
        test: parse_dataset(test_path)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn csv_line(label: &str, pixel: &str) -> String {
        let mut fields = vec![label.to_string()];
        fields.extend(std::iter::repeat(pixel.to_string()).take(INPUT_DIM));
        fields.join(",")
    }

    fn write_csv(dir: &Path, name: &str, lines: &[String]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        let header: Vec<String> = std::iter::once("label".to_string())
            .chain((0..INPUT_DIM).map(|i| format!("pixel{}", i)))
            .collect();

        writeln!(file, "{}", header.join(",")).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }

        path
    }

    #[test]
    fn parses_and_normalizes_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "train.csv",
            &[csv_line("7", "255"), csv_line("0", "51")],
        );

        let dataset = parse_dataset(&path).unwrap();

        assert_eq!(dataset.data.dim(), (2, INPUT_DIM));
        assert_eq!(dataset.target, vec![7, 0]);
        assert!(dataset.data.row(0).iter().all(|&x| (x - 1.0).abs() < 1e-6));
        assert!(dataset.data.row(1).iter().all(|&x| (x - 0.2).abs() < 1e-6));
    }

    #[test]
    fn empty_file_yields_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "empty.csv", &[]);

        let dataset = parse_dataset(&path).unwrap();

        assert_eq!(dataset.data.dim(), (0, INPUT_DIM));
        assert!(dataset.target.is_empty());
    }

    #[test]
    fn rejects_out_of_range_label() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "bad.csv", &[csv_line("10", "0")]);

        assert!(matches!(
            parse_dataset(&path),
            Err(Error::Label { label: 10, .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_pixel() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "bad.csv", &[csv_line("3", "x")]);

        assert!(matches!(
            parse_dataset(&path),
            Err(Error::Record { record: 0, .. })
        ));
    }

    #[test]
    fn short_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.csv");
        std::fs::write(&path, "label,pixel0\n1,0\n").unwrap();

        assert!(parse_dataset(&path).is_err());
    }

    #[test]
    fn loads_both_halves_of_the_split() {
        let dir = tempfile::tempdir().unwrap();
        let train = write_csv(dir.path(), "train.csv", &[csv_line("1", "0")]);
        let test = write_csv(
            dir.path(),
            "test.csv",
            &[csv_line("2", "0"), csv_line("3", "0")],
        );

        let split = load_split(&train, &test).unwrap();

        assert_eq!(split.train.target, vec![1]);
        assert_eq!(split.test.target, vec![2, 3]);
    }
}
