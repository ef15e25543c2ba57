use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Lines, Write},
    path::Path,
};

use crate::{
    error::{Error, Result},
    global_aligner::alignment_result::AlignmentResult,
};

/// Reads a sequence pair from a file whose first line is the reference and whose second line is the query.
///
/// Content after the second line is ignored, and a trailing carriage return on either line is stripped.
pub fn read_sequence_pair(path: impl AsRef<Path>) -> Result<(String, String)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::OpenInputFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = BufReader::new(file).lines();
    let reference = read_sequence_line(&mut lines, path)?;
    let query = read_sequence_line(&mut lines, path)?;
    Ok((reference, query))
}

fn read_sequence_line(lines: &mut Lines<BufReader<File>>, path: &Path) -> Result<String> {
    match lines.next() {
        Some(line) => {
            let line = line?;
            Ok(line.strip_suffix('\r').unwrap_or(&line).to_string())
        }
        None => Err(Error::MissingSequenceLine {
            path: path.to_path_buf(),
        }),
    }
}

/// Writes the alignment report, overwriting the destination.
pub fn write_alignment_report(path: impl AsRef<Path>, result: &AlignmentResult) -> Result<()> {
    let path = path.as_ref();
    let report_error = |source| Error::WriteReport {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(report_error)?);
    write!(writer, "{result}").map_err(report_error)?;
    writer.flush().map_err(report_error)
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use super::read_sequence_pair;
    use crate::error::Error;

    #[test]
    fn reads_first_two_lines() {
        let path = env::temp_dir().join(format!(
            "lib_nwalign-read-sequence-pair-{}.txt",
            std::process::id()
        ));
        let expected = ("GGAAG".to_string(), "GAAA".to_string());

        fs::write(&path, "GGAAG\nGAAA\nignored trailer\n").unwrap();
        assert_eq!(read_sequence_pair(&path).unwrap(), expected);

        fs::write(&path, "GGAAG\r\nGAAA\r\n").unwrap();
        assert_eq!(read_sequence_pair(&path).unwrap(), expected);

        // The trailing newline is optional.
        fs::write(&path, "GGAAG\nGAAA").unwrap();
        assert_eq!(read_sequence_pair(&path).unwrap(), expected);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let path = env::temp_dir().join("lib_nwalign-missing-input-file");
        assert!(matches!(
            read_sequence_pair(&path),
            Err(Error::OpenInputFile { .. })
        ));
    }

    #[test]
    fn missing_sequence_line_is_an_error() {
        let path = env::temp_dir().join(format!(
            "lib_nwalign-missing-sequence-line-{}.txt",
            std::process::id()
        ));
        fs::write(&path, "GGAAG\n").unwrap();
        assert!(matches!(
            read_sequence_pair(&path),
            Err(Error::MissingSequenceLine { .. })
        ));
        fs::remove_file(&path).unwrap();
    }
}
