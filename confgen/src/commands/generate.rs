use std::path::PathBuf;

use clap::Args;
use confgen_codegen_java::{GenOpts, compile_template};
use confgen_template::Template;
use eyre::Result;

use super::UnwrapOrExit;
use crate::ops::{self, GenerateOptions, GenerateReport};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the template file
    #[arg(short, long)]
    pub template: PathBuf,

    /// Package of the generated class
    #[arg(short, long)]
    pub package_name: String,

    /// Name of the generated root class
    #[arg(short, long)]
    pub class_name: String,

    /// Output directory the package hierarchy is created under
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Treat every field as required, ignoring `?` suffixes
    #[arg(long)]
    pub all_required: bool,

    /// Emit a getter method per field
    #[arg(long)]
    pub getters: bool,

    /// Emit records instead of classes
    #[arg(long)]
    pub records: bool,

    /// Represent optional fields as java.util.Optional
    #[arg(long)]
    pub optionals: bool,

    /// Represent durations as java.time.Duration
    #[arg(long)]
    pub durations: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let template = Template::from_file(&self.template).unwrap_or_exit();
        let code = compile_template(&template, &self.gen_opts()).unwrap_or_exit();

        let report = ops::generate(
            code,
            GenerateOptions {
                output_dir: &self.output,
                package_name: &self.package_name,
                class_name: &self.class_name,
                dry_run: self.dry_run,
            },
        )?;

        match report {
            GenerateReport::Preview { path, content } => {
                println!("── {} ──", path.display());
                println!("{content}");
            }
            GenerateReport::Written { path } => {
                println!("Generated: {}", path.display());
            }
        }

        Ok(())
    }

    fn gen_opts(&self) -> GenOpts {
        GenOpts {
            all_required: self.all_required,
            generate_getters: self.getters,
            generate_records: self.records,
            use_optionals: self.optionals,
            use_durations: self.durations,
            ..GenOpts::new(&self.package_name, &self.class_name)
        }
    }
}
