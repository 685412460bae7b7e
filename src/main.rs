//! jaso - 한글 음절 자모 분해 도구

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use jaso::config::{config_path, load_config, load_config_from, save_config_to, JasoConfig};
use jaso::decompose_text;
use jaso::report::{parse_line, JamoColumns, DEFAULT_PERMUTE_WORD};

#[derive(Parser)]
#[command(name = "jaso", about = "Hangul syllable to jamo decomposer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decompose text into jamo (arguments, or stdin lines when none given)
    Decompose {
        /// Text to decompose
        text: Vec<String>,
        /// Separator appended after each Hangul character
        #[arg(short, long)]
        separator: Option<String>,
        /// Keep only Latin-1 among non-Hangul characters (true/false, overrides config)
        #[arg(long)]
        latin_filter: Option<bool>,
        /// Path to a JSON config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Report syllable/typing efficiency for "abbreviation<TAB>origin" stdin lines
    Efficiency,

    /// Write the default config file (fails if one already exists)
    InitConfig {
        /// Destination path (defaults to the standard config location)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Print every cho/joong/jong permutation of a word
    Permute {
        /// Hangul word to permute
        #[arg(default_value = DEFAULT_PERMUTE_WORD)]
        word: String,
    },
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Decompose {
            text,
            separator,
            latin_filter,
            config,
        } => {
            let config = match config {
                Some(path) => match load_config_from(&path) {
                    Ok(config) => config,
                    Err(e) => {
                        log::error!("설정 파일 로드 실패 ({}): {}", path.display(), e);
                        return ExitCode::FAILURE;
                    }
                },
                None => load_config(),
            };
            run_decompose(&text, &config.with_overrides(latin_filter, separator))
        }
        Command::Efficiency => run_efficiency(),
        Command::InitConfig { path } => run_init_config(path.unwrap_or_else(config_path)),
        Command::Permute { word } => run_permute(&word),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_decompose(text: &[String], config: &JasoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut emit = |line: &str| {
        writeln!(
            out,
            "{}",
            decompose_text(line, config.latin_filter, &config.compose_separator)
        )
    };

    if text.is_empty() {
        for line in io::stdin().lock().lines() {
            emit(&line?)?;
        }
    } else {
        for line in text {
            emit(line)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_init_config(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        return Err(format!("설정 파일이 이미 있습니다: {}", path.display()).into());
    }
    save_config_to(&path, &JasoConfig::default())?;
    println!("{}", path.display());
    Ok(())
}

fn run_efficiency() -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (line_no, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(efficiency) => writeln!(out, "{}", efficiency)?,
            // 한 줄이 잘못되어도 나머지 줄은 계속 처리
            Err(e) => log::warn!("{}번째 줄 건너뜀: {}", line_no + 1, e),
        }
    }
    out.flush()?;
    Ok(())
}

fn run_permute(word: &str) -> Result<(), Box<dyn std::error::Error>> {
    let columns = JamoColumns::from_word(word)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in columns.lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
