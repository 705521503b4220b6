use std::path::PathBuf;

use clap::Args;
use confgen_model::ResolveOpts;
use confgen_template::Template;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the template file
    #[arg(short, long)]
    pub template: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let template = Template::from_file(&self.template).unwrap_or_exit();

        // Resolve under a placeholder root name; only the diagnostics
        // matter here, and every annotation is checked either way.
        let opts = ResolveOpts {
            root_name: "Config".to_string(),
            all_required: false,
            use_durations: false,
        };
        let root = confgen_model::resolve(&template, &opts).unwrap_or_exit();

        println!("✓ {} is valid\n", self.template.display());

        let field_count = root.fields.len();
        println!(
            "  {} top-level field{}",
            field_count,
            if field_count == 1 { "" } else { "s" }
        );

        let nested = root.nested_types();
        if !nested.is_empty() {
            println!(
                "  {} nested object type{}:",
                nested.len(),
                if nested.len() == 1 { "" } else { "s" }
            );
            for object in nested {
                println!("    {}", object.type_name);
            }
        }

        Ok(())
    }
}
