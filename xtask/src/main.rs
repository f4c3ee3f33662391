//! # xtask - Автоматизация сборки проекта
//!
//! Этот крейт предоставляет команды автоматизации сборки для воркспейса.
//!
//! См. [`HELP_TEXT`] для полного списка доступных команд и информации по использованию.
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use xshell::{Shell, cmd};

/// Текст справки для команды xtask.
pub const HELP_TEXT: &str = r#"xtask

Использование:
  cargo run -p xtask -- <команда> [аргументы]

Команды:
  help           Показать это сообщение
  fmt            Запустить rustfmt
  fmt-check      Проверить форматирование (CI)
  clippy         Запустить clippy (воркспейс)
  test           Запустить тесты через nextest (воркспейс)
  ci             Запустить fmt-check + clippy + test (профиль CI)
  report [ФАЙЛ]  Построить отчёт ledger-report по журналу
                 (по умолчанию tests/e2e/fixtures/transactions.txt)

Примечание:
  cargo-nextest устанавливается автоматически при первом запуске тестов
"#;

/// Журнал, по которому `report` строит отчёт без аргументов.
const SAMPLE_LEDGER: &str = "tests/e2e/fixtures/transactions.txt";

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "help".to_string());

    let sh = Shell::new()?;
    sh.change_dir(project_root()?);

    match cmd.as_str() {
        "help" | "-h" | "--help" => help(),
        "fmt" => Ok(cmd!(sh, "cargo +nightly fmt --all").run()?),
        "fmt-check" => Ok(cmd!(sh, "cargo +nightly fmt --all -- --check").run()?),
        "clippy" => Ok(cmd!(sh, "cargo +nightly clippy --workspace -- -D warnings").run()?),
        "test" => {
            ensure_nextest(&sh)?;
            // e2e тестам нужен собранный ledger-report
            cmd!(sh, "cargo build --workspace").run()?;
            cmd!(sh, "cargo nextest run --workspace").run()?;
            // Run doctests separately (nextest doesn't support them)
            cmd!(sh, "cargo +nightly test --workspace --doc").run()?;
            Ok(())
        }
        "ci" => {
            ensure_nextest(&sh)?;
            cmd!(sh, "cargo +nightly fmt --all -- --check").run()?;
            cmd!(sh, "cargo +nightly clippy --workspace -- -D warnings").run()?;
            // Build workspace binaries before running e2e tests
            cmd!(sh, "cargo build --workspace").run()?;
            cmd!(sh, "cargo nextest run --workspace --profile ci").run()?;
            // Run doctests separately (nextest doesn't support them)
            cmd!(sh, "cargo +nightly test --workspace --doc").run()?;
            Ok(())
        }
        "report" => {
            let ledger = args.next().unwrap_or_else(|| SAMPLE_LEDGER.to_string());
            cmd!(sh, "cargo run -q -p ledger-report -- --input {ledger}").run()?;
            Ok(())
        }
        other => bail!("Неизвестная команда: {other}\n\nЗапустите: cargo run -p xtask -- help"),
    }
}

/// Показать сообщение справки.
fn help() -> Result<()> {
    println!("{}", HELP_TEXT);
    Ok(())
}

/// Проверить наличие cargo-nextest и установить при необходимости.
fn ensure_nextest(sh: &Shell) -> Result<()> {
    if cmd!(sh, "cargo nextest --version").quiet().run().is_ok() {
        return Ok(());
    }

    eprintln!("cargo-nextest не найден, устанавливаю...");
    cmd!(sh, "cargo install cargo-nextest --locked").run()?;
    eprintln!("cargo-nextest успешно установлен");
    Ok(())
}

/// Корень воркспейса: родитель директории крейта xtask.
fn project_root() -> Result<PathBuf> {
    Ok(std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)?
        .parent()
        .context("CARGO_MANIFEST_DIR не имеет родительской директории")?
        .to_path_buf())
}
