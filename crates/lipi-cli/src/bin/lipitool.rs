use clap::{Parser, Subcommand};

use lipi_cli::commands::{config_ops, convert_ops};

#[derive(Parser)]
#[command(name = "lipitool", about = "Transliterate between Indic scripts and ITRANS")]
struct Cli {
    /// Custom script table TOML (see `scripts-export`)
    #[arg(long, global = true)]
    scripts: Option<String>,
    /// Custom ITRANS table TOML (see `itrans-export`)
    #[arg(long, global = true)]
    itrans: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a file line by line
    Convert {
        /// Input text file
        infile: String,
        /// Output text file
        outfile: String,
        /// Source script id, or `itrans`
        src: String,
        /// Target script id, or `itrans`
        tgt: String,
    },

    /// Convert a string given on the command line
    Text {
        /// Source script id, or `itrans`
        src: String,
        /// Target script id, or `itrans`
        tgt: String,
        text: String,
    },

    /// List the known script ids and their Unicode blocks
    Scripts {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the default script table TOML
    ScriptsExport,

    /// Validate a script table TOML file
    ScriptsValidate {
        file: String,
    },

    /// Print the default ITRANS table TOML
    ItransExport,

    /// Validate an ITRANS table TOML file
    ItransValidate {
        file: String,
    },
}

fn main() {
    lipi_cli::trace_init::init_tracing();
    let cli = Cli::parse();
    config_ops::install_custom_tables(cli.scripts.as_deref(), cli.itrans.as_deref());

    match cli.command {
        Command::Convert {
            infile,
            outfile,
            src,
            tgt,
        } => convert_ops::convert_cmd(&infile, &outfile, &src, &tgt),
        Command::Text { src, tgt, text } => convert_ops::text_cmd(&src, &tgt, &text),
        Command::Scripts { json } => config_ops::scripts_list(json),
        Command::ScriptsExport => config_ops::scripts_export(),
        Command::ScriptsValidate { file } => config_ops::scripts_validate(&file),
        Command::ItransExport => config_ops::itrans_export(),
        Command::ItransValidate { file } => config_ops::itrans_validate(&file),
    }
}
