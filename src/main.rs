use clap::CommandFactory;
use clap::{Parser, Subcommand};
use clap_complete::ArgValueCompleter;
use clap_complete::CompletionCandidate;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hiveprefix",
    about = "Derive namespace prefixes for files loaded together",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    /// Read and write prefix history at this path instead of the config directory.
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    history_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the prefix each file would get, without remembering anything.
    ///
    /// Files under `key=value` partition directories get the partition values
    /// (`/data/year=2021/month=03/t.csv` -> `/2021/03`). Otherwise a remembered
    /// prefix is used, and failing that the file's base name.
    Suggest {
        #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
        files: Vec<String>,
        /// Output the suggestions as JSON
        #[arg(long)]
        json: bool,
        /// Show which rule produced each prefix
        #[arg(long)]
        explain: bool,
    },

    /// Review prefixes for a batch of files and remember the final choices.
    ///
    /// Suggestions open in $EDITOR as `path<TAB>prefix` rows. When stdin is
    /// piped, the edited rows are read from stdin instead.
    Assign {
        #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
        files: Vec<String>,
        /// Override the suggestion for FILE before review (repeatable)
        #[arg(long = "set", num_args = 2, value_names = ["FILE", "PREFIX"], allow_hyphen_values = true)]
        set: Vec<String>,
        /// Accept the suggestions without opening an editor
        #[arg(long)]
        no_edit: bool,
        /// Output the final prefixes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or prune remembered prefixes.
    History {
        /// List remembered prefixes (the default).
        #[arg(long = "list", conflicts_with_all = ["forget", "clear"])]
        show_list: bool,
        /// Forget the remembered prefix for FILE (repeatable)
        #[arg(long, add = ArgValueCompleter::new(history_completer))]
        forget: Vec<String>,
        /// Forget every remembered prefix
        #[arg(long, conflicts_with = "forget")]
        clear: bool,
        /// Output the history as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show instructions for enabling shell completions.
    Completions,
}

fn main() {
    hiveprefix::utils::init_logging();

    clap_complete::CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    let history_file = cli.history_file.as_deref();

    let result = match cli.command {
        Commands::Suggest {
            files,
            json,
            explain,
        } => hiveprefix::commands::suggest::run(files, history_file, json, explain),
        Commands::Assign {
            files,
            set,
            no_edit,
            json,
        } => hiveprefix::commands::assign::run(files, set, no_edit, json, history_file),
        Commands::History {
            show_list: _,
            forget,
            clear,
            json,
        } => hiveprefix::commands::history::run(forget, clear, json, history_file),
        Commands::Completions => {
            println!(
                "Bash:\n\
                echo \"source <(COMPLETE=bash hiveprefix)\" >> ~/.bashrc\n\
                \n\
                Elvish:\n\
                echo \"eval (E:COMPLETE=elvish hiveprefix | slurp)\" >> ~/.elvish/rc.elv\n\
                \n\
                Fish:\n\
                echo \"COMPLETE=fish hiveprefix | source\" >> ~/.config/fish/config.fish\n\
                \n\
                Zsh:\n\
                echo \"source <(COMPLETE=zsh hiveprefix)\" >> ~/.zshrc\n"
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn history_completer(current: &std::ffi::OsStr) -> Vec<CompletionCandidate> {
    let current_input = current.to_string_lossy();
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let history_file = hiveprefix::utils::history_file_from_args(&args);
    hiveprefix::commands::history::remembered_paths(history_file.as_deref())
        .into_iter()
        .filter(|p| p.starts_with(current_input.as_ref()))
        .map(CompletionCandidate::new)
        .collect()
}
