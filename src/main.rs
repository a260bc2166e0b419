//! jdchm - Javadoc to CHM converter

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use jdchm::{Error, Project, Stage, compiler, javadoc, stage};

#[derive(Parser)]
#[command(name = "jdchm")]
#[command(version, about = "Javadoc to compiled HTML Help (CHM) converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    jdchm docs/api                     Convert with defaults from the doc title
    jdchm docs/api -o mylib -t \"MyLib 1.0\"
    jdchm docs/api --no-compile        Generate .hhp/.hhc/.hhk only")]
struct Cli {
    /// Directory containing the generated Javadoc (must hold an index.html)
    #[arg(value_name = "JAVADOC_DIR")]
    javadoc_dir: PathBuf,

    /// Project name; the archive becomes {name}.chm
    #[arg(short, long)]
    output: Option<String>,

    /// Title shown by the CHM window
    #[arg(short, long)]
    title: Option<String>,

    /// Generate the project documents but skip the help compiler
    #[arg(long)]
    no_compile: bool,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> jdchm::Result<()> {
    let index_html = cli.javadoc_dir.join(javadoc::INDEX_HTML);
    if !index_html.is_file() {
        return Err(Error::MissingInput(format!(
            "{} (is {} a Javadoc directory?)",
            index_html.display(),
            cli.javadoc_dir.display()
        )));
    }

    let title = match &cli.title {
        Some(title) => title.clone(),
        None => javadoc::doc_title(&index_html)?,
    };
    let name = cli
        .output
        .clone()
        .unwrap_or_else(|| javadoc::default_project_name(&title));
    if !cli.quiet {
        println!("Project: {name}");
        println!("Title: {title}");
    }

    let work = stage::prepare(&cli.javadoc_dir, &name)?;
    let project = Project::new(&name, &title, &work);

    let mut seen = 0usize;
    let quiet = cli.quiet;
    let mut progress = move |_stage: Stage, _path: &Path| {
        if quiet {
            return;
        }
        seen += 1;
        if seen % 100 == 0 {
            print!(".");
            let _ = std::io::stdout().flush();
        }
    };
    let report = project.generate(chrono::Local::now().date_naive(), &mut progress)?;

    if !cli.quiet {
        println!();
        println!(
            "{} files, {} classes, {} members, {} index entries",
            report.manifest.files, report.toc.classes, report.toc.members, report.index.entries
        );
        if report.index.skipped_oversize > 0 {
            println!(
                "{} oversize index entries skipped",
                report.index.skipped_oversize
            );
        }
    }

    if cli.no_compile {
        println!("Project files generated in {}", work.display());
        return Ok(());
    }

    let chm = compiler::compile(&work, &name)?;
    let dest = std::env::current_dir()?.join(format!("{name}.chm"));
    std::fs::copy(&chm, &dest)?;
    if !cli.quiet {
        println!("Created {}", dest.display());
    }
    Ok(())
}
