use std::{
    fmt,
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use seatscore_model::Layout;

/// Destination of a command's result: stdout, or a file when `--output` is given.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn create(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = output_path else {
            return Ok(Output::Stdout(io::stdout().lock()));
        };
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::create(output_path)?;
        serde_json::to_writer_pretty(&mut output, value)
            .with_context(|| format!("Failed to write JSON to {output}"))?;
        writeln!(output).with_context(|| format!("Failed to write to {output}"))?;
        output
            .flush()
            .with_context(|| format!("Failed to flush output to {output}"))
    }

    /// Writes one CSV row per record, with a header row taken from the record's field names.
    pub fn save_csv<I>(records: I, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        I: IntoIterator,
        I::Item: serde::Serialize,
    {
        let mut output = Output::create(output_path)?;
        let name = output.to_string();
        let mut writer = csv::Writer::from_writer(&mut output);
        for record in records {
            writer
                .serialize(record)
                .with_context(|| format!("Failed to write CSV to {name}"))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {name}"))
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout(_) => f.write_str("stdout"),
            Output::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

fn open_file(file_kind: &str, path: &Path) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;
    Ok(BufReader::new(file))
}

/// Read the layout configuration, falling back to the default layout when no file is given.
///
/// # Errors
///
/// Returns error if the file cannot be opened, is not valid JSON, or describes a layout
/// with an empty dimension
pub fn read_layout_file<P>(path: Option<P>) -> anyhow::Result<Layout>
where
    P: AsRef<Path>,
{
    let Some(path) = path else {
        return Ok(Layout::default());
    };
    let path = path.as_ref();
    let reader = open_file("layout", path)?;
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse layout JSON file: {}", path.display()))
}

/// Open an instance or solution CSV file for reading.
pub fn open_table_file<P>(file_kind: &str, path: P) -> anyhow::Result<BufReader<File>>
where
    P: AsRef<Path>,
{
    open_file(file_kind, path.as_ref())
}
