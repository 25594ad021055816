use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use centavo_compiler::error::SchemaError;
use centavo_compiler::{
    compile_document, generate_all, render_model, render_request, GenerateConfig,
};

#[derive(Parser)]
#[command(name = "centavo")]
#[command(about = "Compile entity schemas into Rust data-model source", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model and request source for every schema file in a directory
    Generate {
        /// Directory holding schema documents
        #[arg(short, long)]
        input: PathBuf,

        /// Root directory the generated source tree is written under
        #[arg(short, long)]
        output: PathBuf,

        /// Dotted namespace the generated code is rooted at
        #[arg(short, long, default_value = "crate.generated")]
        base_namespace: String,
    },

    /// Parse and verify a single schema document
    Check {
        /// Input schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Pretty-print the parsed entity descriptors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print generated source for one schema document to stdout
    Render {
        /// Input schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Dotted namespace the generated code is rooted at
        #[arg(short, long, default_value = "crate.generated")]
        base_namespace: String,

        /// Render request shapes instead of models
        #[arg(long)]
        requests: bool,
    },
}

fn main() -> Result<(), SchemaError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate {
            input,
            output,
            base_namespace,
        } => {
            let report = generate_all(&GenerateConfig {
                input_dir:      input.clone(),
                output_root:    output.clone(),
                base_namespace: base_namespace.clone(),
            })?;
            println!(
                "Generated {} files for {} entities under {}",
                report.written.len(),
                report.entities,
                output.display()
            );
            Ok(())
        }

        Commands::Check { input, json } => {
            let text = fs::read_to_string(input).map_err(SchemaError::Io)?;
            let entities = compile_document(&text)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&entities).unwrap());
            } else {
                for entity in &entities {
                    println!(
                        "{}.{} ({} fields)",
                        entity.namespace,
                        entity.name,
                        entity.fields.len()
                    );
                }
                println!("OK: {} entities", entities.len());
            }
            Ok(())
        }

        Commands::Render {
            input,
            base_namespace,
            requests,
        } => {
            let text = fs::read_to_string(input).map_err(SchemaError::Io)?;
            let entities = compile_document(&text)?;
            for entity in &entities {
                if *requests {
                    println!("{}", render_request(entity, base_namespace));
                } else {
                    println!("{}", render_model(entity, base_namespace));
                }
            }
            Ok(())
        }
    }
}
