use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use css_academy::validate::Language;

#[derive(Parser)]
#[command(name = "cssacademy", version)]
#[command(about = "CSS Academy — interactive CSS layout lessons with live preview")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the lesson API and playground server
    Serve {
        /// Server port
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },

    /// Validate an HTML or CSS file and print its diagnostics
    Check {
        /// Input file
        file: PathBuf,

        /// Language (default: inferred from the file extension)
        #[arg(long, value_enum)]
        lang: Option<LangArg>,
    },

    /// Compose a preview document from an HTML file and a CSS file
    Preview {
        /// HTML input file
        html: PathBuf,

        /// CSS input file
        css: PathBuf,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LangArg {
    Html,
    Css,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::Html => Language::Html,
            LangArg::Css => Language::Css,
        }
    }
}

fn infer_language(path: &Path) -> Option<Language> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => Some(Language::Html),
        Some("css") => Some(Language::Css),
        _ => None,
    }
}

fn read_or_exit(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {e}", path.display());
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
            rt.block_on(async {
                if let Err(e) = css_academy::server::run_server(port).await {
                    eprintln!("error: server failed: {e}");
                    process::exit(1);
                }
            });
        }

        Commands::Check { file, lang } => {
            let language = match lang.map(Language::from).or_else(|| infer_language(&file)) {
                Some(l) => l,
                None => {
                    let err = css_academy::AcademyError::UnknownLanguage {
                        path: file.display().to_string(),
                    };
                    eprintln!("error: {err}");
                    process::exit(1);
                }
            };

            let source = read_or_exit(&file);
            let diagnostics = css_academy::validate::validate(language, &source);

            for d in &diagnostics {
                eprintln!("warning: {d}");
            }
            if diagnostics.is_empty() {
                eprintln!("{}: ok", file.display());
            } else {
                eprintln!("{}: {} warning(s)", file.display(), diagnostics.len());
                process::exit(1);
            }
        }

        Commands::Preview { html, css, o } => {
            let html_source = read_or_exit(&html);
            let css_source = read_or_exit(&css);
            let document = css_academy::compose_preview(&html_source, &css_source);

            if let Some(out_path) = o {
                match fs::write(&out_path, &document) {
                    Ok(()) => {
                        eprintln!(
                            "wrote preview to {} ({} bytes)",
                            out_path.display(),
                            document.len()
                        );
                    }
                    Err(e) => {
                        eprintln!("error: cannot write '{}': {e}", out_path.display());
                        process::exit(1);
                    }
                }
            } else {
                print!("{document}");
            }
        }
    }
}
