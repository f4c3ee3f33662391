//! Обработка файла журнала: чтение, разбор, агрегация и отчёт.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::{info, warn};

use crate::{
    error::{ProcessError, ProcessResult},
    reader::LedgerReader,
    report::Report,
};

/// Имя файла журнала по умолчанию.
pub const DEFAULT_INPUT: &str = "transactions.txt";

/// Обрабатывает файл журнала и строит отчёт.
///
/// Ошибки отдельных строк попадают в отчёт и не прерывают обработку.
/// Отчёт не строится, если файл не найден, не открывается, не читается
/// или не содержит ни одной непустой строки.
///
/// # Пример
///
/// ```no_run
/// use ledger::processor::process_file;
///
/// match process_file("transactions.txt") {
///     Ok(report) => println!("{report}"),
///     Err(e) => eprintln!("ERROR: {e}"),
/// }
/// ```
pub fn process_file(path: impl AsRef<Path>) -> ProcessResult<Report> {
    let path = path.as_ref();
    let open_error = |source: io::Error| match source.kind() {
        io::ErrorKind::NotFound => ProcessError::NotFound(path.to_path_buf()),
        _ => ProcessError::Open { path: path.to_path_buf(), source },
    };

    let file = File::open(path).map_err(open_error)?;
    // На Linux каталог открывается успешно и падает только при чтении
    if file.metadata().map_err(open_error)?.is_dir() {
        return Err(open_error(io::Error::from(io::ErrorKind::IsADirectory)));
    }

    info!(path = %path.display(), "processing ledger");
    process_reader(BufReader::new(file))
}

/// Обрабатывает журнал из произвольного буферизованного источника.
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// use ledger::processor::process_reader;
///
/// let report = process_reader(Cursor::new("доход;1000;RUB;зарплата\nмусор\n")).unwrap();
/// assert_eq!(report.transactions, 1);
/// assert_eq!(report.errors.len(), 1);
/// ```
pub fn process_reader<R: BufRead>(reader: R) -> ProcessResult<Report> {
    let mut transactions = Vec::new();
    let mut errors = Vec::new();

    let mut reader = LedgerReader::new(reader);
    for outcome in reader.by_ref() {
        match outcome? {
            Ok(tx) => transactions.push(tx),
            Err(e) => {
                warn!(line = e.line(), "{e}");
                errors.push(e);
            }
        }
    }

    if transactions.is_empty() && errors.is_empty() {
        return Err(ProcessError::Empty);
    }

    info!(
        lines = reader.lines_read(),
        blank = reader.blank_lines(),
        transactions = transactions.len(),
        errors = errors.len(),
        "ledger parsed"
    );
    Ok(Report::new(&transactions, errors))
}
