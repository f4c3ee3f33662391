//! Построчное чтение журнала.
//!
//! Предоставляет [`LedgerReader`] — итератор, который нумерует строки,
//! пропускает пустые и разбирает остальные через [`parse_line`].
//! Концом строки считаются `\n`, `\r\n` и одиночный `\r`.

use std::{collections::VecDeque, io::BufRead};

use tracing::debug;

use crate::{
    error::{ProcessError, ProcessResult},
    transaction::{Transaction, ValidationError, parse_line},
};

/// Результат разбора одной непустой строки.
pub type LineOutcome = Result<Transaction, ValidationError>;

/// Итератор по непустым строкам журнала.
///
/// Каждый элемент — либо результат разбора строки ([`LineOutcome`]),
/// либо фатальная ошибка чтения, после которой итерация завершается.
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// use ledger::reader::LedgerReader;
///
/// let input = "доход;100;RUB;чай\n\nрасход;abc;RUB;чай\n";
/// let mut reader = LedgerReader::new(Cursor::new(input));
///
/// assert!(reader.next().unwrap().unwrap().is_ok());
/// assert!(reader.next().unwrap().unwrap().is_err());
/// assert!(reader.next().is_none());
/// assert_eq!(reader.blank_lines(), 1);
/// ```
pub struct LedgerReader<R> {
    inner: R,
    /// Буфер текущего `read_line`.
    buf: String,
    /// Строки из буфера, разделённые одиночным `\r`, ещё не отданные.
    pending: VecDeque<String>,
    /// Номер последней прочитанной строки (с 1).
    line_number: usize,
    blank_lines: usize,
    /// Флаг достижения EOF или ошибки.
    finished: bool,
}

impl<R: BufRead> LedgerReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: reader,
            buf: String::new(),
            pending: VecDeque::new(),
            line_number: 0,
            blank_lines: 0,
            finished: false,
        }
    }

    /// Возвращает количество прочитанных строк, включая пустые.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Возвращает количество пропущенных пустых строк.
    #[must_use]
    pub fn blank_lines(&self) -> usize {
        self.blank_lines
    }
}

impl<R: BufRead> Iterator for LedgerReader<R> {
    type Item = ProcessResult<LineOutcome>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(text) = self.pending.pop_front() {
                self.line_number += 1;
                let line = self.line_number;
                if text.trim().is_empty() {
                    debug!(line, "skipping blank line");
                    self.blank_lines += 1;
                    continue;
                }
                return Some(Ok(parse_line(&text, line)));
            }

            if self.finished {
                return None;
            }

            self.buf.clear();
            match self.inner.read_line(&mut self.buf) {
                Ok(0) => self.finished = true,
                Ok(_) => self.pending.extend(split_line_breaks(&self.buf)),
                Err(source) => {
                    self.finished = true; // Остановка при ошибке
                    let line = self.line_number + 1;
                    return Some(Err(ProcessError::Read { line, source }));
                }
            }
        }
    }
}

/// Делит прочитанный фрагмент на строки по одиночным `\r`.
///
/// `read_line` останавливается только на `\n`, поэтому фрагмент
/// содержит не более одного завершающего `\n` или `\r\n`.
fn split_line_breaks(chunk: &str) -> impl Iterator<Item = String> + '_ {
    let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
    let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
    chunk.split('\r').map(str::to_string)
}
