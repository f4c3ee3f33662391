//! E2E тесты для CLI инструмента `ledger-report`.

use std::fs;

use assert_cmd::Command;
use e2e_tests::{fixture, read_fixture};
use predicates::prelude::*;
use tempfile::tempdir;

/// Создать команду для запуска ledger-report.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn ledger_report() -> Command {
    Command::cargo_bin("ledger-report").unwrap()
}

// ============================================================================
// Успешные отчёты
// ============================================================================

#[test]
fn test_full_text_report() {
    let expected = "\
Транзакций обработано: 5
Ошибок при разборе: 5
Итого доход (RUB) = 105000.00
Итого расход (RUB) = 52600.00
Баланс (RUB) = 52400.00
Самая крупная транзакция: строка 1, доход, 1000.0 USD = 90000.00 RUB, описание: зарплата
Статистика по категориям:
  еда — операций 2, доход 0.00, расход 51400.00 (RUB)
  зарплата — операций 1, доход 90000.00, расход 0.00 (RUB)
  транспорт — операций 1, доход 0.00, расход 1200.00 (RUB)
  фриланс — операций 1, доход 15000.00, расход 0.00 (RUB)
Ошибки (подробно):
  Строка 5 — отрицательная или нулевая сумма: -5.0
  Строка 6 — неподдерживаемая валюта: XYZ
  Строка 9 — неверный тип операции: перевод
  Строка 10 — неверный формат (ожид. 4 поля), получено 3
  Строка 12 — пустая сумма
";

    ledger_report()
        .args(["--input", fixture("transactions.txt").to_str().unwrap()])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_single_income() {
    ledger_report()
        .args(["-i", fixture("single_income.txt").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Итого доход (RUB) = 1000.00"))
        .stdout(predicate::str::contains("Итого расход (RUB) = 0.00"))
        .stdout(predicate::str::contains("Баланс (RUB) = 1000.00"))
        .stdout(predicate::str::contains("Самая крупная транзакция: строка 1, доход, 1000.0 RUB"))
        .stdout(predicate::str::contains("  зарплата — операций 1, доход 1000.00, расход 0.00"))
        .stdout(predicate::str::contains("Ошибки").not());
}

#[test]
fn test_errors_only_still_reports() {
    ledger_report()
        .args(["-i", fixture("errors_only.txt").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Транзакций обработано: 0"))
        .stdout(predicate::str::contains("Ошибок при разборе: 3"))
        .stdout(predicate::str::contains("Самая крупная транзакция").not())
        .stdout(predicate::str::contains("  Строка 4 — ошибка преобразования суммы: abc"));
}

#[test]
fn test_json_report() {
    let output = ledger_report()
        .args(["-i", fixture("transactions.txt").to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["transactions"], 5);
    assert_eq!(json["total_income"], 105000.0);
    assert_eq!(json["balance"], 52400.0);
    assert_eq!(json["biggest"]["currency"], "USD");
    assert_eq!(json["categories"]["еда"]["count"], 2);
    assert_eq!(json["errors"].as_array().unwrap().len(), 5);
}

#[test]
fn test_default_input_in_working_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("transactions.txt"), read_fixture("single_income.txt").unwrap())
        .unwrap();

    ledger_report()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Транзакций обработано: 1"));
}

// ============================================================================
// Фатальные ошибки
// ============================================================================

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    ledger_report()
        .args(["-i", missing.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ERROR: Файл не найден:"))
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_directory_is_open_error() {
    let dir = tempdir().unwrap();

    ledger_report()
        .args(["-i", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ERROR: Ошибка при открытии файла:"));
}

#[test]
fn test_blank_only_file() {
    ledger_report()
        .args(["-i", fixture("blank_only.txt").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR: Файл пуст или нет корректных строк"));
}

#[test]
fn test_zero_length_file() {
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty.txt");
    fs::write(&empty, "").unwrap();

    ledger_report()
        .args(["-i", empty.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Файл пуст или нет корректных строк"));
}

#[test]
fn test_invalid_utf8_is_fatal() {
    let dir = tempdir().unwrap();
    let broken = dir.path().join("broken.txt");
    let mut bytes = "доход;1;RUB;a\n".as_bytes().to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    fs::write(&broken, bytes).unwrap();

    ledger_report()
        .args(["-i", broken.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ERROR: Ошибка при чтении файла (строка 2)"));
}

#[test]
fn test_rejects_unknown_format() {
    ledger_report()
        .args(["--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}
