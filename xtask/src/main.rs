//! # xtask - Автоматизация сборки проекта
//!
//! См. [`HELP_TEXT`] для полного списка доступных команд.
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use xshell::{Shell, cmd};

/// Текст справки для команды xtask.
pub const HELP_TEXT: &str = r#"xtask

Использование:
  cargo run -p xtask -- <команда>

Команды:
  help         Показать это сообщение
  fmt          Запустить rustfmt
  fmt-check    Проверить форматирование (CI)
  clippy       Запустить clippy (воркспейс)
  test         Запустить тесты (воркспейс, включая doctests)
  ci           Запустить fmt-check + clippy + test
  demo         Напечатать все отчёты по тестовому файлу бронирований
"#;

/// Тестовый файл бронирований, относительно корня воркспейса.
const DEMO_FILE: &str = "tools/report/tests/fixtures/reservations.txt";

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "help".to_string());

    let sh = Shell::new()?;
    sh.change_dir(project_root()?);

    match cmd.as_str() {
        "help" | "-h" | "--help" => help(),
        "fmt" => Ok(cmd!(sh, "cargo fmt --all").run()?),
        "fmt-check" => Ok(cmd!(sh, "cargo fmt --all -- --check").run()?),
        "clippy" => Ok(cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?),
        "test" => Ok(cmd!(sh, "cargo test --workspace").run()?),
        "ci" => {
            cmd!(sh, "cargo fmt --all -- --check").run()?;
            cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
            cmd!(sh, "cargo test --workspace").run()?;
            Ok(())
        }
        "demo" => Ok(cmd!(sh, "cargo run -q -p reservation-report -- --file {DEMO_FILE}").run()?),
        other => bail!("Неизвестная команда: {other}\n\nЗапустите: cargo run -p xtask -- help"),
    }
}

/// Показать сообщение справки.
fn help() -> Result<()> {
    println!("{}", HELP_TEXT);
    Ok(())
}

/// Корень воркспейса (родитель директории xtask).
fn project_root() -> Result<PathBuf> {
    Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .context("CARGO_MANIFEST_DIR не имеет родительской директории")?
        .to_path_buf())
}
